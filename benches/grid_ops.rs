//! Benchmarks for grid construction and relaxation.

use criterion::{criterion_group, criterion_main, Criterion};
use tessella::prelude::*;

fn build_seeded(size: usize) -> Grid {
    let mut source = Lcg::new(1337);
    Grid::builder(size).build_with(&mut source).unwrap()
}

fn bench_construction(c: &mut Criterion) {
    for size in [4, 8, 16] {
        c.bench_function(&format!("build_size_{}", size), |b| {
            b.iter(|| build_seeded(size));
        });
    }
}

fn bench_relax(c: &mut Criterion) {
    c.bench_function("relax_size_16", |b| {
        let mut grid = build_seeded(16);
        b.iter(|| grid.relax());
    });

    c.bench_function("relax_weighted_size_16", |b| {
        let mut grid = build_seeded(16);
        b.iter(|| grid.relax_weighted());
    });

    c.bench_function("relax_boundary_size_16", |b| {
        let mut grid = build_seeded(16);
        b.iter(|| grid.relax_boundary());
    });
}

criterion_group!(benches, bench_construction, bench_relax);
criterion_main!(benches);
