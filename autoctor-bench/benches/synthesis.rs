//! Synthesis benchmarks.

use autoctor_bench::fixtures::{deep_set, wide_set};
use autoctor_codegen::{Generator, MemoTable, Synthesizer, plan_constructor};
use autoctor_model::collect;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tokio_util::sync::CancellationToken;

fn benchmark_wide(c: &mut Criterion) {
    let mut group = c.benchmark_group("synthesize_wide");
    let token = CancellationToken::new();
    let synthesizer = Synthesizer::default();

    for count in [10usize, 100, 1000] {
        let types = collect(&wide_set(count, 8));
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &types, |b, types| {
            b.iter(|| synthesizer.synthesize(black_box(types), &token))
        });
    }

    group.finish();
}

fn benchmark_deep(c: &mut Criterion) {
    let mut group = c.benchmark_group("synthesize_deep");
    let token = CancellationToken::new();
    let synthesizer = Synthesizer::default();

    for depth in [2usize, 8, 32] {
        let types = collect(&deep_set(depth, 2));
        group.throughput(Throughput::Elements(depth as u64));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &types, |b, types| {
            b.iter(|| synthesizer.synthesize(black_box(types), &token))
        });
    }

    group.finish();
}

fn benchmark_plan(c: &mut Criterion) {
    let types = collect(&wide_set(1, 16));
    let memo = MemoTable::new();

    c.bench_function("plan_constructor_16_fields", |b| {
        b.iter(|| plan_constructor(black_box(&types[0]), &memo))
    });
}

fn benchmark_generate(c: &mut Criterion) {
    let set = deep_set(16, 4);
    let generator = Generator::default();
    let token = CancellationToken::new();

    c.bench_function("generate_validated_deep_16", |b| {
        b.iter(|| generator.generate(black_box(&set), &token))
    });
}

criterion_group!(
    benches,
    benchmark_wide,
    benchmark_deep,
    benchmark_plan,
    benchmark_generate
);
criterion_main!(benches);
