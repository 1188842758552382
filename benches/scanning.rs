
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use input_generator::{generate_input, generate_nested_input};
use varsub::{Scanner, VarFormat};

fn scanning_benchmarks(c: &mut Criterion) {
    let (small, _) = generate_input(10);
    let (medium, _) = generate_input(100);
    let (large, _) = generate_input(1_000);

    let mut group = c.benchmark_group("scanning");

    group.bench_function("small_10_refs", |b| {
        b.iter(|| Scanner::new(VarFormat::standard(), black_box(&small)).next_token())
    });

    group.bench_function("medium_100_refs", |b| {
        b.iter(|| Scanner::new(VarFormat::standard(), black_box(&medium)).next_token())
    });

    group.bench_function("large_1000_refs", |b| {
        b.iter(|| Scanner::new(VarFormat::standard(), black_box(&large)).next_token())
    });

    group.finish();
}

fn nested_scanning_benchmark(c: &mut Criterion) {
    let (nested, _) = generate_nested_input(100);

    let mut group = c.benchmark_group("nested_scanning");

    group.bench_function("nested_100_deep", |b| {
        b.iter(|| Scanner::new(VarFormat::standard(), black_box(&nested)).next_token())
    });

    group.finish();
}

criterion_group!(benches, scanning_benchmarks, nested_scanning_benchmark);
criterion_main!(benches);
