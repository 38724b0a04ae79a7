//! Benchmarks for the difference engine.
//!
//! Performance-critical paths:
//! - `sparse`: long inputs with few edits, dominated by affix trimming and
//!   short snakes
//! - `dense`: random inputs over a small alphabet, where D grows with N
//! - `disjoint`: no common elements, the worst case for the snake search

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use seqdiff::diff_slices;

/// Deterministic xorshift sequence so runs are comparable.
fn pseudo_random(len: usize, alphabet: u32, seed: u32) -> Vec<u32> {
    let mut state = seed.max(1);
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            state % alphabet
        })
        .collect()
}

fn bench_sparse(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/sparse");

    for len in [1_000usize, 10_000, 100_000] {
        let a: Vec<u32> = (0..u32::try_from(len).unwrap()).collect();
        let mut b = a.clone();
        for i in (0..len).step_by(len / 10) {
            b[i] = u32::MAX;
        }

        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |bench, _| {
            bench.iter(|| diff_slices(black_box(&a), black_box(&b)));
        });
    }

    group.finish();
}

fn bench_dense(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/dense");

    for len in [100usize, 1_000, 4_000] {
        let a = pseudo_random(len, 4, 7);
        let b = pseudo_random(len, 4, 11);

        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |bench, _| {
            bench.iter(|| diff_slices(black_box(&a), black_box(&b)));
        });
    }

    group.finish();
}

fn bench_disjoint(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/disjoint");

    for len in [100usize, 500, 2_000] {
        let a = vec![0u8; len];
        let b = vec![1u8; len];

        group.bench_with_input(BenchmarkId::from_parameter(len), &len, |bench, _| {
            bench.iter(|| diff_slices(black_box(&a), black_box(&b)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sparse, bench_dense, bench_disjoint);
criterion_main!(benches);
