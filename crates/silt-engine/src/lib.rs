//! Tick driver, conflict resolver, and sandbox session for Silt.
//!
//! A tick has two phases:
//!
//! 1. **Scan**: every occupied cell, top row first and left to right,
//!    runs its kind's rule, which may stage one move or swap.
//! 2. **Resolve**: the [`ConflictResolver`] validates the staged
//!    requests, picks one winner per destination at random, and commits
//!    the winners to the grid in one pass.
//!
//! [`TickEngine`] runs ticks over a grid. [`SandboxWorld`] wraps it with
//! placement and a [`PresentationBuffer`] for rendering.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod metrics;
pub mod present;
pub mod resolve;
pub mod sandbox;
pub mod tick;

pub use config::{ConfigError, InvariantPolicy, WorldConfig};
pub use metrics::TickMetrics;
pub use present::{PresentationBuffer, RenderSnapshot, Viewport};
pub use resolve::{ConflictResolver, Resolution, ResolveStats};
pub use sandbox::SandboxWorld;
pub use tick::{TickEngine, TickError, TickResult};
