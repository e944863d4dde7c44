//! Conflict resolution: turns a tick's staged requests into one
//! consistent grid mutation.
//!
//! # Algorithm
//!
//! 1. **Validate** every request against the pre-resolve grid. A plain
//!    move must target a Void slot, every source must be occupied, and no
//!    source may appear twice. Offenders abort the tick or are dropped,
//!    per [`InvariantPolicy`]. Swaps may target occupied slots.
//! 2. **Group** by destination with a stable sort.
//! 3. **Claim check**, groups in ascending destination order. A
//!    contender whose source or destination was already claimed this
//!    tick is dropped before the draw.
//! 4. **Tie-break and apply**: one winner among the remaining
//!    contenders, drawn uniformly from the tick's seeded generator. A
//!    single remaining contender draws nothing. The winner claims its
//!    source and destination. Losers simply stay put this tick.
//! 5. **Clear** the ledger, whether the tick committed or aborted.
//!
//! Validation finishes before the first write, so an aborted tick leaves
//! the grid untouched.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use silt_core::{Cell, InvariantViolation, MoveRequest, StepError};
use silt_rule::MoveLedger;
use silt_space::Grid;

use crate::config::InvariantPolicy;

/// Counters from one resolve pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ResolveStats {
    /// Requests in the ledger when resolution began.
    pub staged: usize,
    /// Requests dropped by [`InvariantPolicy::Filter`].
    pub filtered: usize,
    /// Destinations with more than one contender.
    pub contested_destinations: usize,
    /// Requests written to the grid.
    pub committed: usize,
    /// Contenders dropped because a slot they touch was already claimed.
    pub dropped_by_claim: usize,
}

/// Outcome of a committed resolve pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Resolution {
    /// Requests written to the grid, in ascending destination order.
    pub committed: Vec<MoveRequest>,
    /// Counters for this pass.
    pub stats: ResolveStats,
}

/// Resolves a tick's staged requests against the grid.
///
/// Holds per-slot scratch flags that are reused across ticks.
#[derive(Clone, Debug)]
pub struct ConflictResolver {
    policy: InvariantPolicy,
    /// Per-slot marker: source already seen (validate) or slot already
    /// written (apply). Cleared at the start of each phase.
    marks: Vec<bool>,
    /// Contenders of the current group that survive the claim check.
    eligible: Vec<MoveRequest>,
}

impl ConflictResolver {
    /// A resolver applying `policy` to contract-breaking requests.
    pub fn new(policy: InvariantPolicy) -> Self {
        Self {
            policy,
            marks: Vec::new(),
            eligible: Vec::new(),
        }
    }

    /// The configured invariant policy.
    pub fn policy(&self) -> InvariantPolicy {
        self.policy
    }

    /// Resolve and commit everything in `ledger`, then clear it.
    ///
    /// # Errors
    ///
    /// Under [`InvariantPolicy::Reject`], returns the first violation in
    /// staging order. The grid is left exactly as it was.
    pub fn resolve(
        &mut self,
        grid: &mut Grid,
        ledger: &mut MoveLedger,
        rng: &mut ChaCha8Rng,
    ) -> Result<Resolution, StepError> {
        let result = self.resolve_inner(grid, ledger, rng);
        ledger.clear();
        result
    }

    fn resolve_inner(
        &mut self,
        grid: &mut Grid,
        ledger: &mut MoveLedger,
        rng: &mut ChaCha8Rng,
    ) -> Result<Resolution, StepError> {
        let mut stats = ResolveStats {
            staged: ledger.len(),
            ..ResolveStats::default()
        };
        if ledger.is_empty() {
            return Ok(Resolution {
                committed: Vec::new(),
                stats,
            });
        }

        self.reset_marks(grid.len());
        match self.policy {
            InvariantPolicy::Reject => {
                if let Some(v) = self.first_violation(grid, ledger.requests()) {
                    tracing::debug!(violation = %v, "staged request rejected, tick aborted");
                    return Err(StepError::from(v));
                }
            }
            InvariantPolicy::Filter => {
                stats.filtered = self.filter_violations(grid, ledger.requests_mut());
            }
        }

        let requests = ledger.requests_mut();
        requests.sort_by_key(|r| r.dest);

        self.reset_marks(grid.len());
        let mut committed = Vec::new();
        for group in requests.chunk_by(|a, b| a.dest == b.dest) {
            if group.len() > 1 {
                stats.contested_destinations += 1;
            }
            let marks = &self.marks;
            self.eligible.clear();
            self.eligible.extend(
                group
                    .iter()
                    .filter(|r| !marks[r.source] && !marks[r.dest])
                    .copied(),
            );
            stats.dropped_by_claim += group.len() - self.eligible.len();
            let winner = match self.eligible.as_slice() {
                [] => continue,
                [only] => *only,
                contenders => {
                    let pick = contenders[rng.random_range(0..contenders.len())];
                    tracing::trace!(
                        dest = pick.dest,
                        contenders = contenders.len(),
                        winner = pick.source,
                        "contention settled"
                    );
                    pick
                }
            };
            self.marks[winner.source] = true;
            self.marks[winner.dest] = true;
            apply(grid, winner);
            committed.push(winner);
        }
        stats.committed = committed.len();
        Ok(Resolution { committed, stats })
    }

    fn reset_marks(&mut self, len: usize) {
        self.marks.clear();
        self.marks.resize(len, false);
    }

    /// Check one request, marking its source as seen if it passes.
    fn check(&mut self, grid: &Grid, r: &MoveRequest) -> Option<InvariantViolation> {
        let source_void = grid.get_index(r.source).is_none_or(|c| c.is_void());
        if source_void {
            return Some(InvariantViolation::VacantSource { source: r.source });
        }
        if !r.is_swap && grid.get_index(r.dest).is_some_and(|c| !c.is_void()) {
            return Some(InvariantViolation::OccupiedDestination {
                source: r.source,
                dest: r.dest,
            });
        }
        if self.marks[r.source] {
            return Some(InvariantViolation::DuplicateSource { source: r.source });
        }
        self.marks[r.source] = true;
        None
    }

    fn first_violation(
        &mut self,
        grid: &Grid,
        requests: &[MoveRequest],
    ) -> Option<InvariantViolation> {
        requests.iter().find_map(|r| self.check(grid, r))
    }

    /// Drop violating requests in place; returns how many were dropped.
    fn filter_violations(&mut self, grid: &Grid, requests: &mut Vec<MoveRequest>) -> usize {
        let before = requests.len();
        requests.retain(|r| match self.check(grid, r) {
            Some(v) => {
                tracing::warn!(violation = %v, "dropping staged request");
                false
            }
            None => true,
        });
        before - requests.len()
    }
}

/// Write one request to the grid.
///
/// Callers guarantee both indices are in bounds: the ledger only accepts
/// in-bounds requests.
fn apply(grid: &mut Grid, r: MoveRequest) {
    if r.is_swap {
        grid.swap_index(r.source, r.dest);
    } else if let Some(cell) = grid.get_index(r.source) {
        grid.set_index(r.dest, cell);
        grid.set_index(r.source, Cell::VOID);
    }
}
