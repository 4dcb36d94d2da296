//! A basic example showing minimal usage
//!
//! We construct a [`MedianFilter`], stream data through it, and print the filtered signal

use windowed_median::MedianFilter;

/// A noisy sensor reading with a couple of glitches
///
/// In practice, this will probably be a much longer stream
const DATA: [f32; 15] = [
    18.6, 19.1, 18.5, 96.0, 18.4, 19.1, 18.6, 0.0, 18.7, 18.8, 19.4, 18.5, 97.3, 98.0, 18.9,
];

fn main() {
    // The default filter looks at the last 13 samples
    let mut filter = MedianFilter::default();

    // Every sample in gives one filtered sample out
    for data_point in DATA {
        let median = filter.ingest(data_point);
        println!("{data_point:>6.1} -> {median:>6.1}");
    }
}
