//! Headless hourglass demo.
//!
//! Builds a solid funnel with a sand reservoir, pours some water on top,
//! and prints the board as ASCII every few ticks. Set `RUST_LOG=debug`
//! to see per-tick engine logs.
//!
//! Usage: `cargo run -p silt-bench --example hourglass [ticks]`

use silt_bench::build_hourglass;
use silt_core::CellKind;
use silt_engine::{SandboxWorld, Viewport, WorldConfig};
use silt_rules::standard_registry;
use silt_space::BoundaryPolicy;
use silt_test_utils::grid_to_ascii;

const WIDTH: u32 = 48;
const HEIGHT: u32 = 32;
const FRAME_EVERY: u64 = 20;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn print_frame(world: &SandboxWorld) {
    let census: Vec<String> = world
        .census()
        .iter()
        .map(|(kind, n)| format!("{kind}={n}"))
        .collect();
    println!(
        "-- tick {:>4} | {} | {}us",
        world.current_tick(),
        census.join(" "),
        world.last_metrics().total_us
    );
    for row in grid_to_ascii(world.grid()) {
        println!("|{row}|");
    }
}

fn main() {
    init_tracing();

    let ticks: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(200);

    let config = WorldConfig::new(WIDTH, HEIGHT)
        .with_seed(42)
        .with_boundary(BoundaryPolicy::Solid)
        .with_rules(standard_registry());
    let mut world = match SandboxWorld::new(config) {
        Ok(world) => world,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };

    let sand = build_hourglass(&mut world);
    let water = world.place_blob(WIDTH as i32 / 2, 2, 2, CellKind::Water);
    tracing::info!(sand, water, ticks, "hourglass built");

    // Where a 10px-per-cell window would draw the neck.
    let viewport = Viewport::new(10.0).with_offset(16.0, 16.0);
    let neck = (WIDTH as i32 / 2 - 1, HEIGHT as i32 / 2);
    let (sx, sy) = viewport.to_global(neck.0, neck.1);
    tracing::info!(x = sx, y = sy, "neck on screen");

    print_frame(&world);
    for _ in 0..ticks {
        if let Err(e) = world.tick() {
            tracing::error!(error = %e, "tick failed");
            std::process::exit(1);
        }
        if world.current_tick().0 % FRAME_EVERY == 0 {
            print_frame(&world);
        }
    }

    let snapshot = world.render_snapshot();
    let lit = snapshot.iter().filter(|(_, c)| c.a > 0).count();
    tracing::info!(
        tick = %snapshot.tick(),
        lit,
        bytes = snapshot.as_bytes().len(),
        "final frame"
    );
}
