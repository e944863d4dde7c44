//! Silt: a falling-sand cellular automaton engine.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Silt sub-crates. For most users, adding `silt` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use silt::prelude::*;
//!
//! let config = WorldConfig::new(32, 24)
//!     .with_seed(42)
//!     .with_rules(standard_registry());
//! let mut world = SandboxWorld::new(config).unwrap();
//!
//! world.place_blob(16, 4, 3, CellKind::Sand);
//! world.place(16, 12, CellKind::Water);
//! world.step_n(10).unwrap();
//!
//! assert_eq!(world.current_tick(), TickId(10));
//! assert_eq!(world.census().get(&CellKind::Sand), Some(&36));
//!
//! let frame = world.render_snapshot();
//! assert_eq!(frame.as_bytes().len(), 32 * 24 * 4);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `silt-core` | Cell kinds, cells, colors, tick IDs, move requests, errors |
//! | [`space`] | `silt-space` | Grid storage, boundary policy, blob regions |
//! | [`rule`] | `silt-rule` | Rule trait, rule context, move ledger, registry |
//! | [`rules`] | `silt-rules` | Reference material behaviors |
//! | [`engine`] | `silt-engine` | Conflict resolver, tick engine, sandbox session |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types and errors (`silt-core`).
pub use silt_core as types;

/// Grid storage and coordinate mapping (`silt-space`).
///
/// Provides [`space::Grid`], [`space::Extent`], [`space::BoundaryPolicy`],
/// and [`space::BlobRegion`].
pub use silt_space as space;

/// Rule trait and per-tick staging (`silt-rule`).
///
/// The [`rule::Rule`] trait is the main extension point for new
/// material behaviors.
pub use silt_rule as rule;

/// Reference material behaviors (`silt-rules`).
///
/// Includes [`rules::GranularFall`], [`rules::FluidFall`], and
/// [`rules::Inert`], wired up by [`rules::standard_registry`].
pub use silt_rules as rules;

/// Tick engine and sandbox session (`silt-engine`).
///
/// [`engine::SandboxWorld`] for interactive use, [`engine::TickEngine`]
/// for driving ticks directly.
pub use silt_engine as engine;

/// Common imports for typical Silt usage.
///
/// ```rust
/// use silt::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use silt_core::{Cell, CellKind, MoveRequest, Rgba, TickId};

    // Errors
    pub use silt_core::{InvariantViolation, StepError};

    // Space
    pub use silt_space::{BlobRegion, BoundaryPolicy, Extent, Grid};

    // Rules
    pub use silt_rule::{Rule, RuleContext, RuleRegistry, StageOutcome};
    pub use silt_rules::{standard_registry, FluidFall, GranularFall, Inert};

    // Engine
    pub use silt_engine::{
        ConfigError, InvariantPolicy, RenderSnapshot, SandboxWorld, TickError, TickMetrics,
        TickResult, Viewport, WorldConfig,
    };
}
