//! Falling and piling for granular solids.

use silt_rule::{Rule, RuleContext};

/// Candidate offsets in preference order: below, below-left, below-right.
const FALL_ORDER: [(i32, i32); 3] = [(0, 1), (-1, 1), (1, 1)];

/// Granular solid: falls straight down when open, else slides diagonally.
///
/// The diagonal order is fixed (left before right), so an isolated grain
/// on a peak always slides left. Contention between grains is settled by
/// the resolver, not here.
///
/// A candidate that reads open but lies off-grid is refused by the
/// ledger; the rule then tries the next candidate.
#[derive(Clone, Copy, Debug, Default)]
pub struct GranularFall;

impl GranularFall {
    /// Create the rule.
    pub fn new() -> Self {
        Self
    }
}

impl Rule for GranularFall {
    fn name(&self) -> &str {
        "granular_fall"
    }

    fn apply(&self, ctx: &mut RuleContext<'_>) {
        for (dx, dy) in FALL_ORDER {
            if ctx.is_open(dx, dy) && ctx.move_by(dx, dy).is_staged() {
                return;
            }
        }
    }
}
