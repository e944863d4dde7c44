//! Criterion micro-benchmarks for the conflict resolver in isolation.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use silt_core::{Cell, CellKind, MoveRequest};
use silt_engine::{ConflictResolver, InvariantPolicy};
use silt_rule::MoveLedger;
use silt_space::Grid;

/// A 256x256 board whose top half is sand, each grain staged to fall
/// one row. No contention.
fn falling_half() -> (Grid, Vec<MoveRequest>) {
    let mut grid = Grid::new(256, 256).unwrap();
    let mut requests = Vec::new();
    for y in 0..128 {
        for x in 0..256 {
            grid.set(x, y, Cell::new(CellKind::Sand));
        }
    }
    // Only the bottom sand row has an open slot below it.
    for x in 0..256 {
        let source = grid.index(x, 127).unwrap();
        let dest = grid.index(x, 128).unwrap();
        requests.push(MoveRequest::relocate(source, dest));
    }
    (grid, requests)
}

/// Pairs of grains two cells apart both slide into the gap between
/// them, one row down.
fn contended_rows() -> (Grid, Vec<MoveRequest>) {
    let mut grid = Grid::new(256, 256).unwrap();
    let mut requests = Vec::new();
    for y in (0..256).step_by(2) {
        for x in (0..256).step_by(2) {
            grid.set(x, y, Cell::new(CellKind::Sand));
        }
    }
    for y in (0..254).step_by(2) {
        for x in (0..253).step_by(4) {
            let source = grid.index(x, y).unwrap();
            let dest = grid.index(x + 1, y + 1).unwrap();
            requests.push(MoveRequest::relocate(source, dest));
            let source = grid.index(x + 2, y).unwrap();
            requests.push(MoveRequest::relocate(source, dest));
        }
    }
    (grid, requests)
}

fn run(c: &mut Criterion, name: &str, setup: fn() -> (Grid, Vec<MoveRequest>)) {
    let (grid, requests) = setup();
    let mut resolver = ConflictResolver::new(InvariantPolicy::Filter);
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let mut ledger = MoveLedger::with_capacity(requests.len());

    c.bench_function(name, |b| {
        b.iter_batched(
            || grid.clone(),
            |mut grid| {
                for r in &requests {
                    ledger.stage(*r, &grid);
                }
                let res = resolver.resolve(&mut grid, &mut ledger, &mut rng);
                black_box(&res);
            },
            BatchSize::LargeInput,
        );
    });
}

fn bench_resolve_uncontested(c: &mut Criterion) {
    run(c, "resolve_256_uncontested", falling_half);
}

fn bench_resolve_contended(c: &mut Criterion) {
    run(c, "resolve_contended_pairs", contended_rows);
}

criterion_group!(benches, bench_resolve_uncontested, bench_resolve_contended);
criterion_main!(benches);
