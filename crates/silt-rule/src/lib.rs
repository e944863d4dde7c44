//! Rules and staging for the Silt sandbox.
//!
//! A [`Rule`] reads the grid around one cell and stages at most one
//! [`MoveRequest`](silt_core::MoveRequest) into the [`MoveLedger`] through a
//! [`RuleContext`]. Rules never write the grid; the engine's resolver
//! commits staged requests once every cell has been scanned.
//!
//! [`RuleRegistry`] maps each [`CellKind`](silt_core::CellKind) to its rule.
//! Kinds with no rule are inert.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod context;
pub mod ledger;
pub mod registry;
pub mod rule;

pub use context::RuleContext;
pub use ledger::{MoveLedger, StageOutcome};
pub use registry::RuleRegistry;
pub use rule::{FnRule, Rule, RuleFn};
