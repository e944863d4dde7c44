//! Material table: which reference behavior each kind uses.

use silt_core::CellKind;
use silt_rule::RuleRegistry;

use crate::fluid_fall::FluidFall;
use crate::granular_fall::GranularFall;
use crate::inert::Inert;

/// Reference behavior class of a material.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Behavior {
    /// Falls and piles ([`GranularFall`]).
    Granular,
    /// Falls, sinks, spreads ([`FluidFall`]).
    Fluid,
    /// Never moves ([`Inert`]).
    Inert,
}

/// The reference behavior for `kind`; `None` for Void, which is never
/// dispatched.
///
/// Oil, Fire, and Ash are inert until they get behaviors of their own.
pub fn reference_behavior(kind: CellKind) -> Option<Behavior> {
    match kind {
        CellKind::Void => None,
        CellKind::Sand => Some(Behavior::Granular),
        CellKind::Water => Some(Behavior::Fluid),
        CellKind::Oil | CellKind::Solid | CellKind::Fire | CellKind::Ash => {
            Some(Behavior::Inert)
        }
    }
}

/// A registry with every non-Void kind bound to its reference behavior.
///
/// # Examples
///
/// ```
/// use silt_core::CellKind;
/// use silt_rules::standard_registry;
///
/// let rules = standard_registry();
/// assert_eq!(rules.get(CellKind::Sand).map(|r| r.name()), Some("granular_fall"));
/// assert!(!rules.is_registered(CellKind::Void));
/// ```
pub fn standard_registry() -> RuleRegistry {
    let mut registry = RuleRegistry::new();
    for kind in CellKind::ALL {
        match reference_behavior(kind) {
            Some(Behavior::Granular) => registry.register(kind, GranularFall),
            Some(Behavior::Fluid) => registry.register(kind, FluidFall::new()),
            Some(Behavior::Inert) => registry.register(kind, Inert),
            None => None,
        };
    }
    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_material_is_registered() {
        let registry = standard_registry();
        assert_eq!(registry.len(), CellKind::COUNT - 1);
        assert_eq!(
            registry.names(),
            vec![
                (CellKind::Sand, "granular_fall"),
                (CellKind::Water, "fluid_fall"),
                (CellKind::Oil, "inert"),
                (CellKind::Solid, "inert"),
                (CellKind::Fire, "inert"),
                (CellKind::Ash, "inert"),
            ]
        );
    }
}
