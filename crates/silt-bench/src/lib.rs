//! Benchmark profiles and board builders for the Silt sandbox.
//!
//! - [`reference_profile`]: 200x150 board (30K cells), standard materials
//! - [`stress_profile`]: 640x480 board (~300K cells)
//! - [`scatter`]: deterministic random fill via seed
//! - [`build_hourglass`]: solid funnel with a sand reservoir above it

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use silt_core::CellKind;
use silt_engine::{InvariantPolicy, SandboxWorld, WorldConfig};
use silt_rules::standard_registry;
use silt_space::BoundaryPolicy;

/// Reference benchmark profile: 200x150 board (30K cells).
///
/// Solid boundary, Filter policy so a release benchmark measures the
/// same path in every build profile.
pub fn reference_profile(seed: u64) -> WorldConfig {
    WorldConfig::new(200, 150)
        .with_seed(seed)
        .with_boundary(BoundaryPolicy::Solid)
        .with_invariant_policy(InvariantPolicy::Filter)
        .with_rules(standard_registry())
}

/// Stress benchmark profile: 640x480 board (~300K cells).
pub fn stress_profile(seed: u64) -> WorldConfig {
    WorldConfig::new(640, 480)
        .with_seed(seed)
        .with_boundary(BoundaryPolicy::Solid)
        .with_invariant_policy(InvariantPolicy::Filter)
        .with_rules(standard_registry())
}

/// Fill roughly `density` (0..=1) of the board with sand and water.
///
/// Placement is a fixed LCG walk from `seed`, independent of the world's
/// own random source. Returns the number of cells placed.
pub fn scatter(world: &mut SandboxWorld, seed: u64, density: f64) -> usize {
    let extent = world.grid().extent();
    let threshold = (density.clamp(0.0, 1.0) * u32::MAX as f64) as u64;
    let mut state = seed;
    let mut placed = 0;
    for i in 0..extent.len() {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let roll = state >> 32;
        if roll >= threshold {
            continue;
        }
        let kind = if roll % 2 == 0 {
            CellKind::Sand
        } else {
            CellKind::Water
        };
        let Some((x, y)) = extent.coords(i) else {
            continue;
        };
        if world.place(x, y, kind) {
            placed += 1;
        }
    }
    placed
}

/// Draw a solid funnel across the middle of the board and a sand
/// reservoir above it. The neck is two cells wide.
///
/// Returns the number of sand cells placed.
pub fn build_hourglass(world: &mut SandboxWorld) -> usize {
    let width = world.grid().width() as i32;
    let height = world.grid().height() as i32;
    let mid_x = width / 2;
    let mid_y = height / 2;
    let arm = (width / 2 - 1).min(mid_y);
    for d in 0..arm {
        let y = mid_y - d;
        world.place(mid_x - 2 - d, y, CellKind::Solid);
        world.place(mid_x + 1 + d, y, CellKind::Solid);
    }
    let mut sand = 0;
    for d in arm / 2..arm {
        let y = mid_y - d;
        for x in (mid_x - 1 - d)..(mid_x + 1 + d) {
            if world.place(x, y, CellKind::Sand) {
                sand += 1;
            }
        }
    }
    sand
}
