use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fast_fibonacci::fibonacci::fibonacci;
use fast_fibonacci::math::matrix_pow;
use twofloat::TwoFloat;

// Linear summation baseline
fn fibonacci_iterative(n: u64) -> f64 {
    let (mut a, mut b) = (0f64, 1f64);
    for _ in 0..n {
        let next = a + b;
        a = b;
        b = next;
    }
    a
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("fibonacci");
    for size in [10u64, 78, 1000, 1_000_000] {
        group.bench_with_input(BenchmarkId::new("matrix_f64", size), &size, |b, &n| {
            b.iter(|| fibonacci::<f64>(black_box(n)))
        });
        group.bench_with_input(BenchmarkId::new("matrix_f32", size), &size, |b, &n| {
            b.iter(|| fibonacci::<f32>(black_box(n)))
        });
        group.bench_with_input(BenchmarkId::new("matrix_double_double", size), &size, |b, &n| {
            b.iter(|| fibonacci::<TwoFloat>(black_box(n)))
        });
        group.bench_with_input(BenchmarkId::new("iterative_f64", size), &size, |b, &n| {
            b.iter(|| fibonacci_iterative(black_box(n)))
        });
    }
    group.finish();

    c.bench_function("matrix_pow u64::MAX", |b| {
        b.iter(|| matrix_pow::<f64>(black_box(u64::MAX)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
