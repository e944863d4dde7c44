//! Tick engine: the Scan → Resolve loop over one grid.
//!
//! [`TickEngine`] owns the grid, the rule registry, the move ledger, and
//! the seeded random source. Each [`execute_tick()`](TickEngine::execute_tick)
//! call scans every occupied cell, resolves the staged requests, and
//! advances the tick counter.

use std::fmt;
use std::time::Instant;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use silt_core::{StepError, TickId};
use silt_rule::{MoveLedger, RuleContext, RuleRegistry};
use silt_space::{BoundaryPolicy, Grid};

use crate::config::{ConfigError, WorldConfig};
use crate::metrics::TickMetrics;
use crate::resolve::{ConflictResolver, Resolution};

// ── TickResult ──────────────────────────────────────────────────

/// Result of a successful tick.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickResult {
    /// The tick that just completed.
    pub tick: TickId,
    /// Requests committed and resolver counters.
    pub resolution: Resolution,
    /// Timing and counters for this tick.
    pub metrics: TickMetrics,
}

// ── TickError ───────────────────────────────────────────────────

/// Error returned from [`TickEngine::execute_tick()`].
///
/// The grid and tick counter are unchanged when this is returned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TickError {
    /// The tick that was being computed.
    pub tick: TickId,
    /// The underlying error.
    pub kind: StepError,
}

impl fmt::Display for TickError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tick {}: {}", self.tick, self.kind)
    }
}

impl std::error::Error for TickError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

// ── TickEngine ───────────────────────────────────────────────────

/// Single-threaded tick engine.
///
/// Owns all simulation state and executes ticks synchronously. Outside
/// of `execute_tick()` the grid may be edited freely through
/// [`grid_mut()`](TickEngine::grid_mut); such edits land strictly
/// between ticks.
pub struct TickEngine {
    grid: Grid,
    rules: RuleRegistry,
    ledger: MoveLedger,
    resolver: ConflictResolver,
    rng: ChaCha8Rng,
    boundary: BoundaryPolicy,
    seed: u64,
    current_tick: TickId,
    last_metrics: TickMetrics,
}

impl TickEngine {
    /// Construct a tick engine from a [`WorldConfig`].
    ///
    /// Validates the configuration and allocates an all-Void grid.
    pub fn new(config: WorldConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = Grid::new(config.width, config.height)?;
        tracing::debug!(
            width = config.width,
            height = config.height,
            seed = config.seed,
            boundary = ?config.boundary,
            policy = ?config.invariant_policy,
            "tick engine created"
        );
        Ok(Self {
            ledger: MoveLedger::with_capacity(grid.len()),
            grid,
            rules: config.rules,
            resolver: ConflictResolver::new(config.invariant_policy),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            boundary: config.boundary,
            seed: config.seed,
            current_tick: TickId(0),
            last_metrics: TickMetrics::default(),
        })
    }

    /// Execute one tick: Scan, then Resolve.
    ///
    /// On success the tick counter advances. On an invariant violation
    /// (only under [`InvariantPolicy::Reject`](crate::InvariantPolicy::Reject))
    /// nothing is written and the counter stays put.
    pub fn execute_tick(&mut self) -> Result<TickResult, TickError> {
        let tick_start = Instant::now();
        let next_tick = self.current_tick.next();
        let mut metrics = TickMetrics::default();

        // 1. Scan.
        let scan_start = Instant::now();
        metrics.occupied_cells = self.scan(next_tick);
        metrics.scan_us = scan_start.elapsed().as_micros() as u64;
        metrics.staged = self.ledger.len();
        metrics.rejected_out_of_bounds = self.ledger.rejected_out_of_bounds();

        // 2. Resolve. Clears the ledger either way.
        let resolve_start = Instant::now();
        let resolution = self
            .resolver
            .resolve(&mut self.grid, &mut self.ledger, &mut self.rng)
            .map_err(|kind| {
                tracing::warn!(tick = %next_tick, error = %kind, "tick aborted");
                TickError {
                    tick: next_tick,
                    kind,
                }
            })?;
        metrics.resolve_us = resolve_start.elapsed().as_micros() as u64;

        let stats = resolution.stats;
        metrics.filtered = stats.filtered;
        metrics.contested_destinations = stats.contested_destinations;
        metrics.committed = stats.committed;
        metrics.dropped_by_claim = stats.dropped_by_claim;
        metrics.total_us = tick_start.elapsed().as_micros() as u64;

        // 3. Advance.
        self.current_tick = next_tick;
        self.last_metrics = metrics.clone();
        tracing::debug!(
            tick = %next_tick,
            occupied = metrics.occupied_cells,
            staged = metrics.staged,
            committed = metrics.committed,
            contested = metrics.contested_destinations,
            "tick committed"
        );

        Ok(TickResult {
            tick: next_tick,
            resolution,
            metrics,
        })
    }

    /// Visit every occupied cell in row-major order and dispatch its rule.
    /// Returns the number of cells visited.
    fn scan(&mut self, tick: TickId) -> usize {
        let grid = &self.grid;
        let rules = &self.rules;
        let ledger = &mut self.ledger;
        let rng = &mut self.rng;
        let boundary = self.boundary;
        let mut visited = 0;
        for (i, cell) in grid.occupied() {
            let Some((x, y)) = grid.coords(i) else {
                continue;
            };
            visited += 1;
            let mut ctx = RuleContext::new(grid, ledger, rng, boundary, tick, x, y);
            rules.dispatch(cell.kind, &mut ctx);
        }
        visited
    }

    /// Reset to an all-Void grid at tick 0 with a fresh random source.
    ///
    /// Rules, boundary, and invariant policy are kept.
    pub fn reset(&mut self, seed: u64) {
        self.grid.clear();
        self.ledger.clear();
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self.seed = seed;
        self.current_tick = TickId(0);
        self.last_metrics = TickMetrics::default();
        tracing::debug!(seed, "tick engine reset");
    }

    /// The grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable grid access for edits between ticks.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// The rule registry.
    pub fn rules(&self) -> &RuleRegistry {
        &self.rules
    }

    /// Mutable registry access, e.g. to swap a material's rule mid-run.
    pub fn rules_mut(&mut self) -> &mut RuleRegistry {
        &mut self.rules
    }

    /// Number of completed ticks.
    pub fn current_tick(&self) -> TickId {
        self.current_tick
    }

    /// Metrics from the most recent successful tick.
    pub fn last_metrics(&self) -> &TickMetrics {
        &self.last_metrics
    }

    /// The seed the random source was last seeded with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Boundary policy handed to rules.
    pub fn boundary(&self) -> BoundaryPolicy {
        self.boundary
    }
}

impl fmt::Debug for TickEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TickEngine")
            .field("width", &self.grid.width())
            .field("height", &self.grid.height())
            .field("current_tick", &self.current_tick)
            .field("seed", &self.seed)
            .field("boundary", &self.boundary)
            .field("policy", &self.resolver.policy())
            .field("rules", &self.rules)
            .finish()
    }
}
