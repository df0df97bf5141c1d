//! Criterion micro-benchmarks for the spiral mapper and the neighbour-sum walk.

use criterion::{criterion_group, criterion_main, Criterion};
use spiral_bench::{sample_indices, REFERENCE_THRESHOLDS};
use spiral_core::Point;
use spiral_engine::{first_value_exceeding, SpiralWalk};
use spiral_space::{coordinate_of, index_of};
use std::hint::black_box;

/// Benchmark: map 10K consecutive indices near the origin.
fn bench_coordinate_of_first_10k(c: &mut Criterion) {
    c.bench_function("coordinate_of_first_10k", |b| {
        b.iter(|| {
            for i in 1..=10_000u64 {
                black_box(coordinate_of(i).unwrap());
            }
        });
    });
}

/// Benchmark: map 10K indices spread over the whole `u64` range.
fn bench_coordinate_of_sparse_10k(c: &mut Criterion) {
    let indices = sample_indices(10_000, u64::MAX, 42);
    c.bench_function("coordinate_of_sparse_10k", |b| {
        b.iter(|| {
            for &i in &indices {
                black_box(coordinate_of(i).unwrap());
            }
        });
    });
}

/// Benchmark: invert 10K points back to their indices.
fn bench_index_of_10k(c: &mut Criterion) {
    let points: Vec<Point> = sample_indices(10_000, 1 << 40, 7)
        .into_iter()
        .map(|i| coordinate_of(i).unwrap())
        .collect();
    c.bench_function("index_of_10k", |b| {
        b.iter(|| {
            for p in &points {
                black_box(index_of(*p));
            }
        });
    });
}

/// Benchmark: threshold searches with known answers.
fn bench_first_value_exceeding(c: &mut Criterion) {
    c.bench_function("first_value_exceeding_reference", |b| {
        b.iter(|| {
            for (threshold, _) in REFERENCE_THRESHOLDS {
                black_box(first_value_exceeding(black_box(threshold)).unwrap());
            }
        });
    });
}

/// Benchmark: walk every cell until the next value would overflow `u64`.
fn bench_walk_to_overflow(c: &mut Criterion) {
    c.bench_function("walk_to_overflow", |b| {
        b.iter(|| black_box(SpiralWalk::new().count()));
    });
}

criterion_group!(
    benches,
    bench_coordinate_of_first_10k,
    bench_coordinate_of_sparse_10k,
    bench_index_of_10k,
    bench_first_value_exceeding,
    bench_walk_to_overflow
);
criterion_main!(benches);
