use criterion::{criterion_group, criterion_main, Criterion};
use sqrt_bench::{sqrt_standard, Avx};
use std::hint::black_box;

const INPUT: f64 = 42.0;
const LANES: [f64; 4] = [42.0, 2.0, 1e-8, 1e12];

fn bench_scalar(c: &mut Criterion) {
    let mut group = c.benchmark_group("sqrt/scalar");

    group.bench_function("standard", |b| b.iter(|| sqrt_standard(black_box(INPUT))));

    if let Ok(avx) = Avx::detect() {
        group.bench_function("basic_simd", |b| b.iter(|| avx.sqrt(black_box(INPUT))));
        group.bench_function("optimized_simd", |b| {
            b.iter(|| avx.sqrt_newton(black_box(INPUT)))
        });
    }

    group.finish();
}

fn bench_lanes(c: &mut Criterion) {
    let Ok(avx) = Avx::detect() else { return };

    let mut group = c.benchmark_group("sqrt/lanes");

    group.bench_function("standard_x4", |b| {
        b.iter(|| black_box(LANES).map(sqrt_standard))
    });
    group.bench_function("basic_simd_x4", |b| {
        b.iter(|| avx.sqrt_lanes(black_box(LANES)))
    });
    group.bench_function("optimized_simd_x4", |b| {
        b.iter(|| avx.sqrt_newton_lanes(black_box(LANES)))
    });

    group.finish();
}

criterion_group!(benches, bench_scalar, bench_lanes);
criterion_main!(benches);
