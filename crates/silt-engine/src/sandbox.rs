//! The user-facing sandbox session.
//!
//! [`SandboxWorld`] wraps a [`TickEngine`] with placement tools and a
//! [`PresentationBuffer`]. All mutation goes through `&mut self`, so
//! placement can only ever land between ticks, and a [`RenderSnapshot`]
//! borrowed from the world cannot outlive the next tick.

use indexmap::IndexMap;
use silt_core::{Cell, CellKind, TickId};
use silt_rule::RuleRegistry;
use silt_space::{BlobRegion, Grid};

use crate::config::{ConfigError, WorldConfig};
use crate::metrics::TickMetrics;
use crate::present::{PresentationBuffer, RenderSnapshot};
use crate::tick::{TickEngine, TickError, TickResult};

// Compile-time assertion: SandboxWorld can move between threads.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<SandboxWorld>();
    }
};

/// A sandbox session: grid, rules, random source, and render buffer.
///
/// # Examples
///
/// ```
/// use silt_core::CellKind;
/// use silt_engine::{SandboxWorld, WorldConfig};
/// use silt_rule::{RuleContext, RuleRegistry};
///
/// fn fall(ctx: &mut RuleContext<'_>) {
///     if ctx.is_open(0, 1) {
///         ctx.move_by(0, 1);
///     }
/// }
///
/// let mut rules = RuleRegistry::new();
/// rules.register_fn(CellKind::Sand, "fall", fall);
/// let mut world = SandboxWorld::new(WorldConfig::new(3, 2).with_rules(rules)).unwrap();
///
/// world.place(0, 0, CellKind::Sand);
/// world.tick().unwrap();
/// assert_eq!(world.grid().kind(0, 1), CellKind::Sand);
///
/// let snap = world.render_snapshot();
/// assert_eq!(snap.color_at(0, 1), Some(CellKind::Sand.default_color()));
/// ```
pub struct SandboxWorld {
    engine: TickEngine,
    presentation: PresentationBuffer,
}

impl SandboxWorld {
    /// Create a session from a [`WorldConfig`].
    pub fn new(config: WorldConfig) -> Result<Self, ConfigError> {
        let engine = TickEngine::new(config)?;
        let presentation = PresentationBuffer::for_grid(engine.grid());
        Ok(Self {
            engine,
            presentation,
        })
    }

    /// Run one tick, marking the presentation stale if anything moved.
    pub fn tick(&mut self) -> Result<TickResult, TickError> {
        let result = self.engine.execute_tick()?;
        if result.metrics.committed > 0 {
            self.presentation.mark_dirty();
        }
        Ok(result)
    }

    /// Run up to `n` ticks, stopping at the first error.
    ///
    /// Returns the tick counter after the last completed tick.
    pub fn step_n(&mut self, n: u64) -> Result<TickId, TickError> {
        for _ in 0..n {
            self.tick()?;
        }
        Ok(self.engine.current_tick())
    }

    /// Write a fresh `kind` cell at `(x, y)`. Placing Void erases.
    ///
    /// Returns `false` and writes nothing off-grid.
    pub fn place(&mut self, x: i32, y: i32, kind: CellKind) -> bool {
        let written = self.engine.grid_mut().set(x, y, Cell::new(kind));
        if written {
            self.presentation.mark_dirty();
        }
        written
    }

    /// Fill the square `[x - r, x + r) × [y - r, y + r)`, clipped to the
    /// grid, with fresh `kind` cells. Returns the number of slots written.
    pub fn place_blob(&mut self, x: i32, y: i32, radius: u32, kind: CellKind) -> usize {
        let grid = self.engine.grid_mut();
        let region = BlobRegion::around(x, y, radius, grid.width(), grid.height());
        let written = grid.fill_region(&region, Cell::new(kind));
        if written > 0 {
            self.presentation.mark_dirty();
        }
        written
    }

    /// Sync the presentation buffer if stale and return a view of it.
    pub fn render_snapshot(&mut self) -> RenderSnapshot<'_> {
        self.presentation.sync_if_dirty(self.engine.grid());
        self.presentation.snapshot(self.engine.current_tick())
    }

    /// Clear the grid, reseed, and return to tick 0.
    pub fn reset(&mut self, seed: u64) {
        self.engine.reset(seed);
        self.presentation.mark_dirty();
    }

    /// The grid.
    pub fn grid(&self) -> &Grid {
        self.engine.grid()
    }

    /// Non-Void kind counts, in kind order.
    pub fn census(&self) -> IndexMap<CellKind, usize> {
        self.engine.grid().census()
    }

    /// Number of completed ticks.
    pub fn current_tick(&self) -> TickId {
        self.engine.current_tick()
    }

    /// Metrics from the most recent successful tick.
    pub fn last_metrics(&self) -> &TickMetrics {
        self.engine.last_metrics()
    }

    /// Mutable registry access between ticks.
    pub fn rules_mut(&mut self) -> &mut RuleRegistry {
        self.engine.rules_mut()
    }

    /// The underlying engine.
    pub fn engine(&self) -> &TickEngine {
        &self.engine
    }
}

impl std::fmt::Debug for SandboxWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SandboxWorld")
            .field("engine", &self.engine)
            .field("presentation_dirty", &self.presentation.is_dirty())
            .finish()
    }
}
