//! Reusable mock rules.
//!
//! - [`OffsetRule`]: stages the same relative move or swap unconditionally.
//! - [`GreedyRule`]: tries to stage two requests in one invocation.
//! - [`CountingRule`]: stages nothing, counts invocations.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use silt_rule::{Rule, RuleContext};

/// Stages a move (or swap) to a fixed offset without looking first.
///
/// Useful for driving the resolver with contention it would never see
/// from well-behaved rules, e.g. plain moves into occupied slots.
pub struct OffsetRule {
    pub name: String,
    pub dx: i32,
    pub dy: i32,
    pub swap: bool,
}

impl OffsetRule {
    pub fn moving(name: impl Into<String>, dx: i32, dy: i32) -> Self {
        Self {
            name: name.into(),
            dx,
            dy,
            swap: false,
        }
    }

    pub fn swapping(name: impl Into<String>, dx: i32, dy: i32) -> Self {
        Self {
            name: name.into(),
            dx,
            dy,
            swap: true,
        }
    }
}

impl Rule for OffsetRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, ctx: &mut RuleContext<'_>) {
        if self.swap {
            ctx.swap_by(self.dx, self.dy);
        } else {
            ctx.move_by(self.dx, self.dy);
        }
    }
}

/// Tries to stage a move down and then a move right in one invocation.
///
/// The context must refuse the second attempt.
pub struct GreedyRule;

impl Rule for GreedyRule {
    fn name(&self) -> &str {
        "greedy"
    }

    fn apply(&self, ctx: &mut RuleContext<'_>) {
        ctx.move_by(0, 1);
        ctx.move_by(1, 0);
    }
}

/// Counts invocations and stages nothing.
///
/// The counter is shared, so it stays readable after the rule has been
/// moved into a registry.
pub struct CountingRule {
    calls: Arc<AtomicUsize>,
}

impl CountingRule {
    pub fn new() -> Self {
        Self {
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A handle onto the invocation counter.
    pub fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }

    /// How many times `apply()` has been called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl Default for CountingRule {
    fn default() -> Self {
        Self::new()
    }
}

impl Rule for CountingRule {
    fn name(&self) -> &str {
        "counting"
    }

    fn apply(&self, _ctx: &mut RuleContext<'_>) {
        self.calls.fetch_add(1, Ordering::Relaxed);
    }
}
