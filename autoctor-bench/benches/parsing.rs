//! Declaration parsing and collection benchmarks.

use autoctor_bench::fixtures::{wide_set, wide_xml};
use autoctor_model::{collect, parse_declarations, validate_declarations};
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn benchmark_parse(c: &mut Criterion) {
    let xml = wide_xml(500, 6);
    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Bytes(xml.len() as u64));

    group.bench_function("wide_500", |b| {
        b.iter(|| parse_declarations(black_box(&xml)))
    });

    group.finish();
}

fn benchmark_collect(c: &mut Criterion) {
    let set = wide_set(500, 6);

    c.bench_function("collect_wide_500", |b| b.iter(|| collect(black_box(&set))));
    c.bench_function("validate_wide_500", |b| {
        b.iter(|| validate_declarations(black_box(&set)))
    });
}

criterion_group!(benches, benchmark_parse, benchmark_collect);
criterion_main!(benches);
