//! Performance benchmarks for PlaceFinder
//!
//! Run with: cargo bench --bench find_places_benchmark

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use placefinder_core::{Config, PlaceFinder, SegmentationMode};
use std::hint::black_box;

/// Generate travel-log text of roughly `size` bytes
fn generate_text(size: usize) -> String {
    let base = "Last May we flew from Kuala Lumpur to the Isle of Man. \
                Then I visited New York City and the Bank of America. ";
    let mut text = base.repeat(size / base.len() + 1);
    // Stay on a char boundary; the base text is ASCII
    text.truncate(size);
    text
}

/// Benchmark different text sizes
fn bench_text_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_sizes");

    let finder = PlaceFinder::new().unwrap();

    for size in [1024, 10_240, 102_400] {
        let text = generate_text(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("analyze", size), &text, |b, text| {
            b.iter(|| finder.analyze(black_box(text)));
        });
    }

    group.finish();
}

/// Benchmark segmentation modes on the same input
fn bench_segmentation_modes(c: &mut Criterion) {
    let mut group = c.benchmark_group("segmentation_modes");

    let text = generate_text(102_400);

    for mode in [
        SegmentationMode::Character,
        SegmentationMode::Token,
        SegmentationMode::Hybrid,
    ] {
        let config = Config::builder().segmentation(mode).build().unwrap();
        let finder = PlaceFinder::with_config(config).unwrap();

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("mode", mode), &text, |b, text| {
            b.iter(|| finder.analyze(black_box(text)));
        });
    }

    group.finish();
}

/// Cost of POS evidence versus the capitalization-only fallback
fn bench_pos_evidence(c: &mut Criterion) {
    let mut group = c.benchmark_group("pos_evidence");

    let text = generate_text(102_400);

    for use_pos in [true, false] {
        let config = Config::builder().use_pos(use_pos).build().unwrap();
        let finder = PlaceFinder::with_config(config).unwrap();

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("use_pos", use_pos), &text, |b, text| {
            b.iter(|| finder.analyze(black_box(text)));
        });
    }

    group.finish();
}

#[cfg(feature = "parallel")]
fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");

    let texts: Vec<String> = (0..64).map(|_| generate_text(10_240)).collect();
    let finder = PlaceFinder::new().unwrap();

    for threads in [1, 2, 4] {
        group.bench_with_input(BenchmarkId::new("threads", threads), &texts, |b, texts| {
            b.iter(|| {
                finder
                    .analyze_batch_with_threads(black_box(texts), Some(threads))
                    .unwrap()
            });
        });
    }

    group.finish();
}

#[cfg(not(feature = "parallel"))]
fn bench_batch(_c: &mut Criterion) {}

criterion_group!(
    benches,
    bench_text_sizes,
    bench_segmentation_modes,
    bench_pos_evidence,
    bench_batch
);
criterion_main!(benches);
