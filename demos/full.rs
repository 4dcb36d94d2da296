//! A more fully-fledged example, showcasing impulse noise rejection and the other methods on [`MedianFilter`]

use rand::{rngs::StdRng, Rng, SeedableRng};
use rand_distr::{Distribution, Normal};
use windowed_median::{FilterError, MedianFilter};

fn main() -> Result<(), FilterError> {
    // Zero-sized windows are rejected up front
    assert_eq!(MedianFilter::<f64>::new(0).unwrap_err(), FilterError::ZeroWindow);

    // A window of 7 samples removes bursts of up to 3 outliers
    let mut filter = MedianFilter::new(7)?;

    // A slow ramp with Gaussian noise, and the occasional large spike
    let mut rng = StdRng::seed_from_u64(7);
    let noise = Normal::new(0.0, 0.5).expect("standard deviation is finite");

    for i in 0..40 {
        let mut sample = i as f64 * 0.25 + noise.sample(&mut rng);
        if rng.gen_bool(0.1) {
            sample += 100.0;
        }

        let median = filter.ingest(sample);

        // During warm-up the median is over fewer samples than the window
        if filter.is_full() {
            println!("[{i:>2}] {sample:>8.2} -> {median:>6.2}");
        } else {
            println!(
                "[{i:>2}] {sample:>8.2} -> {median:>6.2} (warming up: {}/{} samples)",
                filter.len(),
                filter.window_size()
            );
        }
    }

    // The current window can be inspected without ingesting anything
    let window: Vec<String> = filter.sorted().map(|v| format!("{v:.2}")).collect();
    println!("Current window, sorted: [{}]", window.join(", "));

    if let Some(median) = filter.median() {
        println!("Current median: {median:.2}");
    }

    Ok(())
}
