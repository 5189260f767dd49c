use criterion::{criterion_group, criterion_main, Criterion};
use fib_bench::fib;
use std::hint::black_box;

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("fib 20", |b| b.iter(|| fib(black_box(20.0))));
    c.bench_function("fib 25", |b| b.iter(|| fib(black_box(25.0))));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
