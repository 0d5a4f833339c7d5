//! Criterion benchmarks for the saturation loop on noisy circles.
//! Focus sizes: n in {4, 6, 8, 10} points (C(n,2) boundary columns).
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p bipersistence

use bipersistence::filtration::rand::{noisy_circle, CircleCfg};
use bipersistence::prelude::*;
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

fn circle_filtration(n: usize, seed: u64) -> Filtration {
    let cfg = CircleCfg {
        points: n,
        outliers: 0,
        ..CircleCfg::default()
    };
    Filtration::new(&noisy_circle(cfg, seed), FiltrationCfg::default()).unwrap()
}

fn bench_saturate(c: &mut Criterion) {
    let mut group = c.benchmark_group("groebner");
    for &n in &[4usize, 6, 8, 10] {
        group.bench_with_input(BenchmarkId::new("saturate_d1", n), &n, |b, &n| {
            let filt = circle_filtration(n, 41);
            let d1 = boundary_d1(&filt);
            let grading = filt.grading(SimplexKind::Vertex);
            b.iter(|| saturate(&d1, &grading, SaturationCfg::default()).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("reduce_d1", n), &n, |b, &n| {
            let filt = circle_filtration(n, 42);
            let d1 = boundary_d1(&filt);
            let grading = filt.grading(SimplexKind::Vertex);
            b.iter_batched(
                || saturate(&d1, &grading, SaturationCfg::default()).unwrap().basis,
                |basis| reduce(&basis).unwrap(),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_saturate);
criterion_main!(benches);
