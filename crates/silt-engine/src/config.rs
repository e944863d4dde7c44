//! World configuration, validation, and error types.
//!
//! [`WorldConfig`] is the input for constructing a [`TickEngine`](crate::TickEngine)
//! or [`SandboxWorld`](crate::SandboxWorld). [`validate()`](WorldConfig::validate)
//! checks it without allocating the grid.

use std::error::Error;
use std::fmt;

use silt_rule::RuleRegistry;
use silt_space::{BoundaryPolicy, Grid, SpaceError};

// ── InvariantPolicy ────────────────────────────────────────────────

/// What the resolver does with a staged request that breaks the staging
/// contract (move into an occupied slot, Void source, duplicate source).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvariantPolicy {
    /// Abort the tick with an error. Nothing is committed.
    Reject,
    /// Drop the offending request, log a warning, and carry on.
    Filter,
}

impl Default for InvariantPolicy {
    /// `Reject` in debug builds, `Filter` in release builds.
    fn default() -> Self {
        if cfg!(debug_assertions) {
            InvariantPolicy::Reject
        } else {
            InvariantPolicy::Filter
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`WorldConfig::validate()`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Grid dimensions are invalid.
    Space(SpaceError),
    /// No kind has a rule, so nothing could ever move.
    NoRules,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Space(e) => write!(f, "space: {e}"),
            Self::NoRules => write!(f, "no rules registered"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Space(e) => Some(e),
            Self::NoRules => None,
        }
    }
}

impl From<SpaceError> for ConfigError {
    fn from(e: SpaceError) -> Self {
        Self::Space(e)
    }
}

// ── WorldConfig ────────────────────────────────────────────────────

/// Complete configuration for constructing a sandbox.
///
/// # Examples
///
/// ```
/// use silt_core::CellKind;
/// use silt_engine::{InvariantPolicy, WorldConfig};
/// use silt_rule::{RuleContext, RuleRegistry};
/// use silt_space::BoundaryPolicy;
///
/// fn fall(ctx: &mut RuleContext<'_>) {
///     if ctx.is_open(0, 1) {
///         ctx.move_by(0, 1);
///     }
/// }
///
/// let mut rules = RuleRegistry::new();
/// rules.register_fn(CellKind::Sand, "fall", fall);
///
/// let config = WorldConfig::new(64, 48)
///     .with_seed(7)
///     .with_boundary(BoundaryPolicy::Solid)
///     .with_invariant_policy(InvariantPolicy::Filter)
///     .with_rules(rules);
/// assert!(config.validate().is_ok());
/// ```
pub struct WorldConfig {
    /// Grid columns.
    pub width: u32,
    /// Grid rows.
    pub height: u32,
    /// Seed for the tick's random source.
    pub seed: u64,
    /// How rules see off-grid neighbours. Default: Void.
    pub boundary: BoundaryPolicy,
    /// Handling of contract-breaking requests. Default: see [`InvariantPolicy`].
    pub invariant_policy: InvariantPolicy,
    /// Kind → rule table.
    pub rules: RuleRegistry,
}

impl WorldConfig {
    /// A `width × height` config with seed 0, default policies, and an
    /// empty registry.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            seed: 0,
            boundary: BoundaryPolicy::default(),
            invariant_policy: InvariantPolicy::default(),
            rules: RuleRegistry::new(),
        }
    }

    /// Set the seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the boundary policy.
    pub fn with_boundary(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }

    /// Set the invariant policy.
    pub fn with_invariant_policy(mut self, policy: InvariantPolicy) -> Self {
        self.invariant_policy = policy;
        self
    }

    /// Replace the rule registry.
    pub fn with_rules(mut self, rules: RuleRegistry) -> Self {
        self.rules = rules;
        self
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Dimensions must describe a non-empty, addressable grid.
        Grid::check_dimensions(self.width, self.height)?;
        // 2. At least one kind must have a rule.
        if self.rules.is_empty() {
            return Err(ConfigError::NoRules);
        }
        Ok(())
    }
}

impl fmt::Debug for WorldConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorldConfig")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("seed", &self.seed)
            .field("boundary", &self.boundary)
            .field("invariant_policy", &self.invariant_policy)
            .field("rules", &self.rules)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use silt_core::CellKind;
    use silt_test_utils::CountingRule;

    fn ruled(width: u32, height: u32) -> WorldConfig {
        let mut rules = RuleRegistry::new();
        rules.register(CellKind::Sand, CountingRule::new());
        WorldConfig::new(width, height).with_rules(rules)
    }

    #[test]
    fn valid_config_passes() {
        assert_eq!(ruled(10, 10).validate(), Ok(()));
    }

    #[test]
    fn zero_dimension_fails() {
        assert_eq!(
            ruled(0, 10).validate(),
            Err(ConfigError::Space(SpaceError::EmptySpace))
        );
    }

    #[test]
    fn overflowing_cell_count_fails() {
        assert!(matches!(
            ruled(1 << 20, 1 << 20).validate(),
            Err(ConfigError::Space(SpaceError::CellCountOverflow { .. }))
        ));
    }

    #[test]
    fn empty_registry_fails() {
        assert_eq!(WorldConfig::new(4, 4).validate(), Err(ConfigError::NoRules));
    }

    #[test]
    fn space_error_is_the_source() {
        let err = ConfigError::from(SpaceError::EmptySpace);
        assert!(err.source().is_some());
        assert!(err.to_string().starts_with("space:"));
        assert!(ConfigError::NoRules.source().is_none());
    }

    #[test]
    fn default_policy_tracks_build_profile() {
        let expected = if cfg!(debug_assertions) {
            InvariantPolicy::Reject
        } else {
            InvariantPolicy::Filter
        };
        assert_eq!(InvariantPolicy::default(), expected);
    }
}
