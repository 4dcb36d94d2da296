use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};
use windowed_median::MedianFilter;

const STREAM_LEN: usize = 100_000;

/// Same pseudo-random stream for every run
fn stream() -> Vec<i32> {
    let mut rng = StdRng::seed_from_u64(0);
    (0..STREAM_LEN).map(|_| rng.gen::<i32>() | 1).collect()
}

/// Baseline: copy and sort the whole window for every sample
fn sorted_window_median(data: &[i32], window_size: usize) -> i32 {
    let mut scratch = Vec::with_capacity(window_size);
    let mut last = 0;

    for i in 0..data.len() {
        scratch.clear();
        scratch.extend_from_slice(&data[(i + 1).saturating_sub(window_size)..=i]);
        scratch.sort_unstable();
        last = scratch[scratch.len() / 2];
    }

    last
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let data = stream();

    let mut group = c.benchmark_group("benches");
    group
        .measurement_time(Duration::from_secs_f32(10.))
        .throughput(Throughput::Elements(STREAM_LEN as u64));

    group.bench_function("median filter window 13", |b| {
        b.iter(|| {
            let mut filter = MedianFilter::new(13).unwrap();

            for v in data.iter() {
                black_box(filter.ingest(*v));
            }
        })
    });

    group.bench_function("sorted window 13", |b| {
        b.iter(|| black_box(sorted_window_median(&data, 13)))
    });

    group.finish();

    let mut group = c.benchmark_group("window sizes");
    group.throughput(Throughput::Elements(STREAM_LEN as u64));

    for window_size in [3, 13, 63, 255] {
        group.bench_with_input(
            BenchmarkId::from_parameter(window_size),
            &window_size,
            |b, &window_size| {
                b.iter(|| {
                    let mut filter = MedianFilter::new(window_size).unwrap();

                    for v in data.iter() {
                        black_box(filter.ingest(*v));
                    }
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
