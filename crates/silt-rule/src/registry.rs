//! Kind → rule lookup table.

use std::fmt;

use silt_core::CellKind;

use crate::context::RuleContext;
use crate::rule::{FnRule, Rule, RuleFn};

/// Maps each [`CellKind`] to at most one [`Rule`].
///
/// Backed by a table indexed by kind discriminant. Registering a kind
/// that already has a rule replaces it. Dispatching a kind with no rule
/// is a no-op: the material is inert.
///
/// # Examples
///
/// ```
/// use silt_core::CellKind;
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
/// assert!(rules.is_registered(CellKind::Sand));
/// assert!(!rules.is_registered(CellKind::Oil));
/// ```
pub struct RuleRegistry {
    table: [Option<Box<dyn Rule>>; CellKind::COUNT],
}

impl RuleRegistry {
    /// An empty registry: every kind is inert.
    pub fn new() -> Self {
        Self {
            table: std::array::from_fn(|_| None),
        }
    }

    /// Associate `rule` with `kind`, returning the rule it replaced.
    pub fn register(&mut self, kind: CellKind, rule: impl Rule) -> Option<Box<dyn Rule>> {
        self.register_boxed(kind, Box::new(rule))
    }

    /// Associate an already-boxed rule with `kind`.
    pub fn register_boxed(&mut self, kind: CellKind, rule: Box<dyn Rule>) -> Option<Box<dyn Rule>> {
        self.table[kind.index()].replace(rule)
    }

    /// Associate a plain function with `kind`.
    pub fn register_fn(
        &mut self,
        kind: CellKind,
        name: &'static str,
        func: RuleFn,
    ) -> Option<Box<dyn Rule>> {
        self.register(kind, FnRule::new(name, func))
    }

    /// Remove the rule for `kind`, making it inert.
    pub fn unregister(&mut self, kind: CellKind) -> Option<Box<dyn Rule>> {
        self.table[kind.index()].take()
    }

    /// The rule for `kind`, if any.
    pub fn get(&self, kind: CellKind) -> Option<&dyn Rule> {
        self.table[kind.index()].as_deref()
    }

    /// Whether `kind` has a rule.
    pub fn is_registered(&self, kind: CellKind) -> bool {
        self.table[kind.index()].is_some()
    }

    /// Number of kinds with a rule.
    pub fn len(&self) -> usize {
        self.table.iter().filter(|r| r.is_some()).count()
    }

    /// Whether no kind has a rule.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// `(kind, rule name)` for every registered kind, in kind order.
    pub fn names(&self) -> Vec<(CellKind, &str)> {
        CellKind::ALL
            .iter()
            .filter_map(|k| self.get(*k).map(|r| (*k, r.name())))
            .collect()
    }

    /// Run the rule for `kind` against `ctx`.
    ///
    /// Returns `false` without touching `ctx` when `kind` is unregistered.
    pub fn dispatch(&self, kind: CellKind, ctx: &mut RuleContext<'_>) -> bool {
        match self.get(kind) {
            Some(rule) => {
                rule.apply(ctx);
                true
            }
            None => false,
        }
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.names()).finish()
    }
}
