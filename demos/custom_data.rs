//! An example showcasing filtering a stream of a custom data type

use windowed_median::MedianFilter;

/// Our custom data type: a classification enum
///
/// Note that only [`Copy`] and [`PartialOrd`] are strictly necessary here
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Class {
    Low,
    Medium,
    High,
    VeryHigh,
}

/// Some classifications to smooth out
///
/// A single misclassification in a run of the same class is filtered away
const DATA: [Class; 15] = [
    Class::Medium,
    Class::Low,
    Class::Medium,
    Class::Medium,
    Class::VeryHigh,
    Class::Medium,
    Class::Medium,
    Class::High,
    Class::High,
    Class::Low,
    Class::High,
    Class::High,
    Class::VeryHigh,
    Class::VeryHigh,
    Class::VeryHigh,
];

fn main() {
    let mut filter = MedianFilter::new(3).expect("window size is non-zero");

    // It just works!
    for data_point in DATA {
        let median = filter.ingest(data_point);
        println!("{data_point:?} -> {median:?}");
    }
}
