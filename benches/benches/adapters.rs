//! Benchmarks for the sequence adapters.
//!
//! Compares code point diffing against line diffing of the same text, and
//! the closure adapter against plain slices.

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use seqdiff::{diff_chars, diff_slices, diff_with};

fn sample_text(lines: usize, variant: usize) -> String {
    (0..lines)
        .map(|i| {
            if i % 17 == variant {
                format!("let value_{i} = compute({i}, {variant});\n")
            } else {
                format!("let value_{i} = compute({i});\n")
            }
        })
        .collect()
}

fn bench_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("adapters/text");

    let old = sample_text(500, 3);
    let new = sample_text(500, 5);

    group.bench_function("chars", |b| {
        b.iter(|| diff_chars(black_box(&old), black_box(&new)));
    });

    group.bench_function("lines", |b| {
        b.iter(|| {
            let old_lines: Vec<&str> = old.lines().collect();
            let new_lines: Vec<&str> = new.lines().collect();
            diff_slices(black_box(&old_lines), black_box(&new_lines))
        });
    });

    group.finish();
}

fn bench_closure_source(c: &mut Criterion) {
    let mut group = c.benchmark_group("adapters/closure");

    let a: Vec<u64> = (0..2_000).map(|i| i * 3 % 1_001).collect();
    let b: Vec<u64> = (0..2_000).map(|i| i * 7 % 1_001).collect();

    group.bench_function("slices", |bench| {
        bench.iter(|| diff_slices(black_box(&a), black_box(&b)));
    });

    group.bench_function("fn_source", |bench| {
        bench.iter(|| diff_with(a.len(), b.len(), |x, y| a[x] == b[y]));
    });

    group.finish();
}

criterion_group!(benches, bench_text, bench_closure_source);
criterion_main!(benches);
