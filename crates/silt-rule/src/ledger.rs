//! Per-tick collection of staged move and swap requests.

use silt_core::MoveRequest;
use silt_space::Grid;

/// Result of trying to stage a request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StageOutcome {
    /// The request was recorded.
    Staged,
    /// Source or destination lies off-grid; nothing was recorded.
    OutOfBounds,
    /// The rule invocation already staged a request this tick.
    AlreadyStaged,
}

impl StageOutcome {
    /// Whether the request was recorded.
    pub fn is_staged(self) -> bool {
        matches!(self, StageOutcome::Staged)
    }
}

/// Requests staged during one tick's Scan phase.
///
/// Holds no cross-tick state: the engine clears it at the end of every
/// tick, whether or not the tick committed.
#[derive(Clone, Debug, Default)]
pub struct MoveLedger {
    requests: Vec<MoveRequest>,
    rejected_out_of_bounds: u32,
}

impl MoveLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty ledger with room for `capacity` requests.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            requests: Vec::with_capacity(capacity),
            rejected_out_of_bounds: 0,
        }
    }

    /// Record `request` if both of its indices address slots of `grid`.
    pub fn stage(&mut self, request: MoveRequest, grid: &Grid) -> StageOutcome {
        if request.source >= grid.len() || request.dest >= grid.len() {
            self.rejected_out_of_bounds += 1;
            return StageOutcome::OutOfBounds;
        }
        self.requests.push(request);
        StageOutcome::Staged
    }

    /// Record a request given in grid coordinates.
    ///
    /// Coordinates go through [`Grid::index`], so an off-grid neighbour
    /// is refused rather than aliased onto an adjacent row.
    pub fn stage_at(
        &mut self,
        grid: &Grid,
        source: (i32, i32),
        dest: (i32, i32),
        is_swap: bool,
    ) -> StageOutcome {
        match (grid.index(source.0, source.1), grid.index(dest.0, dest.1)) {
            (Some(source), Some(dest)) => {
                self.requests.push(MoveRequest {
                    source,
                    dest,
                    is_swap,
                });
                StageOutcome::Staged
            }
            _ => {
                self.rejected_out_of_bounds += 1;
                StageOutcome::OutOfBounds
            }
        }
    }

    pub(crate) fn note_out_of_bounds(&mut self) {
        self.rejected_out_of_bounds += 1;
    }

    /// Staged requests in staging order.
    pub fn requests(&self) -> &[MoveRequest] {
        &self.requests
    }

    /// Mutable access for the resolver, which filters and sorts in place.
    pub fn requests_mut(&mut self) -> &mut Vec<MoveRequest> {
        &mut self.requests
    }

    /// Remove and yield every staged request, leaving the ledger empty.
    ///
    /// The out-of-bounds counter is left alone; [`MoveLedger::clear`]
    /// resets both.
    pub fn drain(&mut self) -> std::vec::Drain<'_, MoveRequest> {
        self.requests.drain(..)
    }

    /// Number of staged requests.
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Whether nothing is staged.
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    /// Requests refused this tick because they pointed off-grid.
    pub fn rejected_out_of_bounds(&self) -> u32 {
        self.rejected_out_of_bounds
    }

    /// Discard every request and reset counters. Keeps the allocation.
    pub fn clear(&mut self) {
        self.requests.clear();
        self.rejected_out_of_bounds = 0;
    }
}
