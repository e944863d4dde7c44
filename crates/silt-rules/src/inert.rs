//! The do-nothing behavior.

use silt_rule::{Rule, RuleContext};

/// A material that never relocates.
///
/// Registering `Inert` and registering nothing behave the same; `Inert`
/// exists so a registry listing names the kind explicitly.
#[derive(Clone, Copy, Debug, Default)]
pub struct Inert;

impl Rule for Inert {
    fn name(&self) -> &str {
        "inert"
    }

    fn apply(&self, _ctx: &mut RuleContext<'_>) {}
}
