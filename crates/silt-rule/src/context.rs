//! Execution context passed to a rule for one cell.
//!
//! [`RuleContext`] is a split borrow: shared access to the grid, mutable
//! access to the ledger (stage only) and to the tick's random source.

use rand_chacha::ChaCha8Rng;
use silt_core::{Cell, CellKind, TickId};
use silt_space::{BoundaryPolicy, Grid};

use crate::ledger::{MoveLedger, StageOutcome};

/// Everything a rule may see or touch while handling the cell at `(x, y)`.
///
/// Neighbour access is relative: `(0, 1)` is the cell below, `(-1, 1)`
/// below-left. Off-grid neighbours are answered by the configured
/// [`BoundaryPolicy`].
///
/// A context stages at most one request. Later attempts return
/// [`StageOutcome::AlreadyStaged`] and record nothing.
pub struct RuleContext<'a> {
    grid: &'a Grid,
    ledger: &'a mut MoveLedger,
    rng: &'a mut ChaCha8Rng,
    boundary: BoundaryPolicy,
    tick: TickId,
    x: i32,
    y: i32,
    staged: bool,
}

impl<'a> RuleContext<'a> {
    /// Construct a context for the cell at `(x, y)`.
    ///
    /// Typically called by the tick engine. Tests build one directly
    /// around a fixture grid.
    pub fn new(
        grid: &'a Grid,
        ledger: &'a mut MoveLedger,
        rng: &'a mut ChaCha8Rng,
        boundary: BoundaryPolicy,
        tick: TickId,
        x: i32,
        y: i32,
    ) -> Self {
        Self {
            grid,
            ledger,
            rng,
            boundary,
            tick,
            x,
            y,
            staged: false,
        }
    }

    /// Read-only grid.
    pub fn grid(&self) -> &Grid {
        self.grid
    }

    /// Coordinates of the cell being handled.
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// The cell being handled.
    pub fn cell(&self) -> Cell {
        self.grid.get(self.x, self.y)
    }

    /// Kind of the cell being handled.
    pub fn kind(&self) -> CellKind {
        self.cell().kind
    }

    /// Tick currently being computed.
    pub fn tick(&self) -> TickId {
        self.tick
    }

    /// Policy applied to off-grid probes.
    pub fn boundary(&self) -> BoundaryPolicy {
        self.boundary
    }

    /// The neighbour at offset `(dx, dy)`.
    pub fn probe(&self, dx: i32, dy: i32) -> Cell {
        match self.offset(dx, dy) {
            Some((x, y)) => self.grid.probe(x, y, self.boundary),
            None => self.boundary.outside_cell(),
        }
    }

    /// Kind of the neighbour at offset `(dx, dy)`.
    pub fn kind_at(&self, dx: i32, dy: i32) -> CellKind {
        self.probe(dx, dy).kind
    }

    /// Whether the neighbour at `(dx, dy)` reads as Void.
    pub fn is_open(&self, dx: i32, dy: i32) -> bool {
        self.kind_at(dx, dy).is_void()
    }

    /// Stage a plain move to the neighbour at `(dx, dy)`.
    pub fn move_by(&mut self, dx: i32, dy: i32) -> StageOutcome {
        self.stage(dx, dy, false)
    }

    /// Stage a swap with the neighbour at `(dx, dy)`.
    pub fn swap_by(&mut self, dx: i32, dy: i32) -> StageOutcome {
        self.stage(dx, dy, true)
    }

    /// Whether this context has already recorded a request.
    pub fn has_staged(&self) -> bool {
        self.staged
    }

    /// The tick's random source.
    pub fn rng(&mut self) -> &mut ChaCha8Rng {
        self.rng
    }

    fn offset(&self, dx: i32, dy: i32) -> Option<(i32, i32)> {
        Some((self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }

    fn stage(&mut self, dx: i32, dy: i32, is_swap: bool) -> StageOutcome {
        if self.staged {
            tracing::trace!(x = self.x, y = self.y, dx, dy, "second request refused");
            return StageOutcome::AlreadyStaged;
        }
        let Some(dest) = self.offset(dx, dy) else {
            self.ledger.note_out_of_bounds();
            return StageOutcome::OutOfBounds;
        };
        let outcome = self
            .ledger
            .stage_at(self.grid, (self.x, self.y), dest, is_swap);
        if outcome.is_staged() {
            self.staged = true;
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use silt_core::MoveRequest;
    use silt_test_utils::grid_from_ascii;

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn relative_probes_and_staging() {
        let grid = grid_from_ascii(&[".s.", "#.."]);
        let mut ledger = MoveLedger::new();
        let mut rng = rng();
        let mut ctx = RuleContext::new(
            &grid,
            &mut ledger,
            &mut rng,
            BoundaryPolicy::Void,
            TickId(1),
            1,
            0,
        );
        assert_eq!(ctx.kind(), CellKind::Sand);
        assert_eq!(ctx.kind_at(-1, 1), CellKind::Solid);
        assert!(ctx.is_open(0, 1));
        assert!(ctx.is_open(0, -1));
        assert_eq!(ctx.move_by(0, 1), StageOutcome::Staged);
        assert!(ctx.has_staged());
        assert_eq!(ledger.requests(), &[MoveRequest::relocate(1, 4)]);
    }

    #[test]
    fn second_request_is_refused() {
        let grid = grid_from_ascii(&["s", ".", "."]);
        let mut ledger = MoveLedger::new();
        let mut rng = rng();
        let mut ctx = RuleContext::new(
            &grid,
            &mut ledger,
            &mut rng,
            BoundaryPolicy::Void,
            TickId(1),
            0,
            0,
        );
        assert_eq!(ctx.move_by(0, 1), StageOutcome::Staged);
        assert_eq!(ctx.move_by(0, 2), StageOutcome::AlreadyStaged);
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn off_grid_stage_does_not_consume_the_slot() {
        let grid = grid_from_ascii(&["s."]);
        let mut ledger = MoveLedger::new();
        let mut rng = rng();
        let mut ctx = RuleContext::new(
            &grid,
            &mut ledger,
            &mut rng,
            BoundaryPolicy::Void,
            TickId(1),
            0,
            0,
        );
        assert_eq!(ctx.move_by(0, 1), StageOutcome::OutOfBounds);
        assert!(!ctx.has_staged());
        assert_eq!(ctx.move_by(1, 0), StageOutcome::Staged);
        assert_eq!(ledger.rejected_out_of_bounds(), 1);
    }

    #[test]
    fn solid_boundary_reads_walls() {
        let grid = grid_from_ascii(&["w"]);
        let mut ledger = MoveLedger::new();
        let mut rng = rng();
        let ctx = RuleContext::new(
            &grid,
            &mut ledger,
            &mut rng,
            BoundaryPolicy::Solid,
            TickId(1),
            0,
            0,
        );
        assert_eq!(ctx.kind_at(0, 1), CellKind::Solid);
        assert!(!ctx.is_open(1, 0));
        assert!(!ctx.is_open(-1, 0));
    }

    #[test]
    fn overflowing_offset_is_off_grid() {
        let grid = grid_from_ascii(&[".s"]);
        let mut ledger = MoveLedger::new();
        let mut rng = rng();
        let mut ctx = RuleContext::new(
            &grid,
            &mut ledger,
            &mut rng,
            BoundaryPolicy::Solid,
            TickId(1),
            1,
            0,
        );
        assert_eq!(ctx.kind_at(i32::MAX, 0), CellKind::Solid);
        assert_eq!(ctx.move_by(i32::MAX, 0), StageOutcome::OutOfBounds);
        assert!(!ctx.has_staged());
    }
}
