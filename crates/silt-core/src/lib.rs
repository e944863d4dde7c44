//! Core types for the Silt falling-sand sandbox.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the cell values stored in a grid, the move requests rules stage
//! against it, tick identifiers, and the error taxonomy shared by the
//! rest of the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod id;
pub mod moves;

pub use cell::{Cell, CellKind, Rgba};
pub use error::{InvariantViolation, StepError};
pub use id::TickId;
pub use moves::MoveRequest;
