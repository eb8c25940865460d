//! Benchmark for procedural mesh generation.
//!
//! Run with: cargo bench --package tfbake_geometry --bench geometry_benchmark

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use tfbake_geometry::{cylinder, icosphere};

fn benchmark_icosphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("icosphere");

    for depth in [4u32, 5, 6] {
        group.throughput(Throughput::Elements(4 * 4u64.pow(depth)));
        group.bench_function(format!("depth_{depth}"), |b| {
            b.iter(|| black_box(icosphere(black_box(depth))));
        });
    }

    group.finish();
}

fn benchmark_cylinder(c: &mut Criterion) {
    c.bench_function("cylinder_16_sides", |b| {
        b.iter(|| black_box(cylinder(black_box(16))));
    });
}

criterion_group!(benches, benchmark_icosphere, benchmark_cylinder);
criterion_main!(benches);
