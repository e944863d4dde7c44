//! Criterion benchmarks for the full tick (Scan + Resolve).

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use silt_bench::{build_hourglass, reference_profile, scatter, stress_profile};
use silt_engine::SandboxWorld;

fn bench_tick_30k_scattered(c: &mut Criterion) {
    let mut world = SandboxWorld::new(reference_profile(42)).unwrap();
    scatter(&mut world, 42, 0.35);

    // Warm up: the first tick sizes the resolver scratch.
    world.tick().unwrap();

    c.bench_function("tick_30k_scattered", |b| {
        b.iter(|| {
            let result = world.tick().unwrap();
            black_box(&result);
        });
    });
}

fn bench_tick_300k_scattered(c: &mut Criterion) {
    let mut world = SandboxWorld::new(stress_profile(42)).unwrap();
    scatter(&mut world, 42, 0.35);
    world.tick().unwrap();

    c.bench_function("tick_300k_scattered", |b| {
        b.iter(|| {
            let result = world.tick().unwrap();
            black_box(&result);
        });
    });
}

fn bench_tick_30k_empty(c: &mut Criterion) {
    let mut world = SandboxWorld::new(reference_profile(42)).unwrap();
    world.tick().unwrap();

    c.bench_function("tick_30k_empty", |b| {
        b.iter(|| {
            let result = world.tick().unwrap();
            black_box(&result);
        });
    });
}

fn bench_hourglass_200_ticks(c: &mut Criterion) {
    c.bench_function("hourglass_200_ticks", |b| {
        b.iter(|| {
            let mut world = SandboxWorld::new(reference_profile(42)).unwrap();
            build_hourglass(&mut world);
            for _ in 0..200 {
                let result = world.tick().unwrap();
                black_box(&result);
            }
        });
    });
}

fn bench_render_snapshot(c: &mut Criterion) {
    let mut world = SandboxWorld::new(reference_profile(42)).unwrap();
    scatter(&mut world, 42, 0.35);

    c.bench_function("render_snapshot_30k", |b| {
        b.iter(|| {
            world.tick().unwrap();
            let snap = world.render_snapshot();
            black_box(snap.colors().len());
        });
    });
}

criterion_group!(
    benches,
    bench_tick_30k_scattered,
    bench_tick_300k_scattered,
    bench_tick_30k_empty,
    bench_hourglass_200_ticks,
    bench_render_snapshot
);
criterion_main!(benches);
