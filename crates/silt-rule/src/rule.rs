//! The [`Rule`] trait and the function-pointer adapter [`FnRule`].

use crate::context::RuleContext;

/// Per-kind behavior run once for every occupied cell of that kind per tick.
///
/// # Contract
///
/// - `apply()` reads the grid through the context and stages zero or one
///   request. It never writes the grid.
/// - `&self`: rules are stateless across ticks. Randomness comes from
///   [`RuleContext::rng`], so a fixed seed replays exactly.
///
/// # Object safety
///
/// This trait is object-safe; the registry stores `Box<dyn Rule>`.
///
/// # Examples
///
/// A rule that drifts every cell one slot to the right when it can:
///
/// ```
/// use silt_rule::{Rule, RuleContext};
///
/// struct DriftRight;
///
/// impl Rule for DriftRight {
///     fn name(&self) -> &str { "drift_right" }
///
///     fn apply(&self, ctx: &mut RuleContext<'_>) {
///         if ctx.is_open(1, 0) {
///             ctx.move_by(1, 0);
///         }
///     }
/// }
///
/// assert_eq!(DriftRight.name(), "drift_right");
/// ```
pub trait Rule: Send + 'static {
    /// Human-readable name for logging and registry listings.
    fn name(&self) -> &str;

    /// Stage this cell's intended move, if any.
    fn apply(&self, ctx: &mut RuleContext<'_>);
}

/// Signature of a plain-function rule.
pub type RuleFn = fn(&mut RuleContext<'_>);

/// Adapts a named function pointer into a [`Rule`].
#[derive(Clone, Copy, Debug)]
pub struct FnRule {
    name: &'static str,
    func: RuleFn,
}

impl FnRule {
    /// Wrap `func` under `name`.
    pub fn new(name: &'static str, func: RuleFn) -> Self {
        Self { name, func }
    }
}

impl Rule for FnRule {
    fn name(&self) -> &str {
        self.name
    }

    fn apply(&self, ctx: &mut RuleContext<'_>) {
        (self.func)(ctx)
    }
}
