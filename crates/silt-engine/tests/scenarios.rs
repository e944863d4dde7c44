//! Integration test: reference scenarios with the standard materials.
//!
//! Each scenario builds a small board from ASCII, runs the standard
//! registry over it, and checks the board after one or more ticks.

use silt_core::{CellKind, TickId};
use silt_engine::{InvariantPolicy, SandboxWorld, WorldConfig};
use silt_rules::standard_registry;
use silt_space::BoundaryPolicy;
use silt_test_utils::{char_kind, grid_to_ascii};

fn world_from(rows: &[&str], seed: u64, boundary: BoundaryPolicy) -> SandboxWorld {
    let config = WorldConfig::new(rows[0].len() as u32, rows.len() as u32)
        .with_seed(seed)
        .with_boundary(boundary)
        .with_invariant_policy(InvariantPolicy::Reject)
        .with_rules(standard_registry());
    let mut world = SandboxWorld::new(config).unwrap();
    for (y, row) in rows.iter().enumerate() {
        for (x, c) in row.chars().enumerate() {
            world.place(x as i32, y as i32, char_kind(c).unwrap());
        }
    }
    world
}

#[test]
fn sand_falls_straight_down() {
    let mut world = world_from(&["s..", "..."], 0, BoundaryPolicy::Void);
    let result = world.tick().unwrap();
    assert_eq!(grid_to_ascii(world.grid()), vec!["...", "s.."]);
    assert_eq!(result.resolution.committed.len(), 1);
    assert_eq!(result.metrics.committed, 1);
}

#[test]
fn sand_piles_and_settles() {
    let mut world = world_from(&[".s.", ".s.", "...", "..."], 0, BoundaryPolicy::Void);
    world.step_n(10).unwrap();
    assert_eq!(grid_to_ascii(world.grid()), vec!["...", "...", "...", "ss."]);
    assert_eq!(world.current_tick(), TickId(10));
}

#[test]
fn diagonal_contention_is_fair() {
    const TRIALS: u64 = 10_000;
    let mut left_wins = 0u64;
    for seed in 0..TRIALS {
        let mut world = world_from(&["s#s", "#.#"], seed, BoundaryPolicy::Void);
        let result = world.tick().unwrap();
        assert_eq!(result.metrics.contested_destinations, 1);
        assert_eq!(result.resolution.committed.len(), 1);
        assert_eq!(world.grid().kind(1, 1), CellKind::Sand);
        let left_moved = world.grid().kind(0, 0) == CellKind::Void;
        let right_moved = world.grid().kind(2, 0) == CellKind::Void;
        assert!(left_moved ^ right_moved);
        if left_moved {
            left_wins += 1;
        }
    }
    // Binomial(10_000, 0.5): sigma = 50, so +/- 300 is six sigma.
    assert!(
        (4_700..=5_300).contains(&left_wins),
        "left won {left_wins} of {TRIALS}"
    );
}

#[test]
fn claimed_contender_does_not_starve_the_destination() {
    // The water swaps into the right sand's slot in the same tick that
    // both sands aim for the gap at (1, 2). The left sand must take it.
    for seed in 0..1_000 {
        let mut world = world_from(&["..w.", "s#s.", "#.#."], seed, BoundaryPolicy::Void);
        let result = world.tick().unwrap();
        assert_eq!(world.grid().kind(1, 2), CellKind::Sand, "seed {seed}");
        assert_eq!(
            grid_to_ascii(world.grid()),
            vec!["..s.", ".#w.", "#s#."],
            "seed {seed}"
        );
        assert_eq!(result.metrics.contested_destinations, 1);
        assert_eq!(result.metrics.committed, 2);
        assert_eq!(result.metrics.dropped_by_claim, 1);
    }
}

#[test]
fn water_sinks_through_sand() {
    let mut world = world_from(&["w", "s"], 0, BoundaryPolicy::Void);
    let result = world.tick().unwrap();
    assert_eq!(grid_to_ascii(world.grid()), vec!["s", "w"]);
    assert!(result.resolution.committed[0].is_swap);
}

#[test]
fn water_sinks_through_oil_column() {
    let mut world = world_from(&["w", "o", "o"], 0, BoundaryPolicy::Void);
    world.step_n(2).unwrap();
    assert_eq!(grid_to_ascii(world.grid()), vec!["o", "o", "w"]);
}

#[test]
fn solid_boundary_lets_water_spread_along_the_floor() {
    let mut world = world_from(&["...", ".w."], 3, BoundaryPolicy::Solid);
    let result = world.tick().unwrap();
    assert_eq!(result.metrics.committed, 1);
    assert_eq!(world.grid().kind(1, 1), CellKind::Void);
    assert_eq!(world.census().get(&CellKind::Water), Some(&1));
}

#[test]
fn void_boundary_keeps_bottom_row_still() {
    let mut world = world_from(&["...", ".w."], 3, BoundaryPolicy::Void);
    let result = world.tick().unwrap();
    assert_eq!(result.metrics.committed, 0);
    assert_eq!(result.metrics.rejected_out_of_bounds, 1);
    assert_eq!(world.grid().kind(1, 1), CellKind::Water);
}

#[test]
fn inert_kinds_never_move() {
    let mut world = world_from(&["#of", "a..", "..."], 0, BoundaryPolicy::Void);
    world.step_n(5).unwrap();
    assert_eq!(grid_to_ascii(world.grid()), vec!["#of", "a..", "..."]);
}

#[test]
fn blob_of_sand_comes_to_rest() {
    let config = WorldConfig::new(16, 16).with_rules(standard_registry());
    let mut world = SandboxWorld::new(config).unwrap();
    let placed = world.place_blob(8, 4, 3, CellKind::Sand);
    assert_eq!(placed, 36);
    world.step_n(300).unwrap();
    assert_eq!(world.census().get(&CellKind::Sand), Some(&36));
    let settled = world.tick().unwrap();
    assert_eq!(settled.metrics.committed, 0);
}
