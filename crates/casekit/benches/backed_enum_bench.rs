use std::hint::black_box;

use casekit::{BackedEnum, EnumDefinition};
use criterion::{Criterion, criterion_group, criterion_main};

fn large_definition(cases: usize) -> EnumDefinition {
    (0..cases)
        .map(|i| (format!("CASE_{i}"), i as i64))
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let definition = large_definition(1_000);
    c.bench_function("build_1000_cases", |b| {
        b.iter(|| BackedEnum::of(black_box(&definition)));
    });
}

fn bench_from(c: &mut Criterion) {
    let collection = BackedEnum::of(&large_definition(1_000));
    c.bench_function("from_hit", |b| {
        b.iter(|| collection.from(black_box(777)));
    });
    c.bench_function("from_miss", |b| {
        b.iter(|| collection.from(black_box(1_000_000)));
    });
}

criterion_group!(benches, bench_build, bench_from);
criterion_main!(benches);
