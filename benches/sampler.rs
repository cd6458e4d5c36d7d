//! Sampler throughput benchmarks.

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use mobilegen::domain::NumberPlan;
use mobilegen::service::{UniqueSuffixSampler, validate};

fn bench_generate(c: &mut Criterion) {
    let plan = NumberPlan::new("019", 11).expect("valid plan");
    let sampler = UniqueSuffixSampler::new(plan, 42);

    let mut group = c.benchmark_group("generate");
    for count in [3_000_u64, 100_000] {
        group.bench_function(count.to_string(), |b| {
            b.iter(|| sampler.generate(black_box(count)).expect("within domain"));
        });
    }
    group.finish();

    // Dense draw: half of a small domain.
    let dense = UniqueSuffixSampler::new(NumberPlan::new("019", 9).expect("valid plan"), 42);
    c.bench_function("generate_dense_500000", |b| {
        b.iter(|| dense.generate(black_box(500_000)).expect("within domain"));
    });
}

fn bench_validate(c: &mut Criterion) {
    let plan = NumberPlan::new("019", 11).expect("valid plan");
    let numbers = UniqueSuffixSampler::new(plan.clone(), 42)
        .generate(100_000)
        .expect("within domain");

    c.bench_function("validate_100000", |b| {
        b.iter(|| validate(black_box(&numbers), &plan));
    });
}

criterion_group!(benches, bench_generate, bench_validate);
criterion_main!(benches);
