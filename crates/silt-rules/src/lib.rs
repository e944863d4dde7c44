//! Reference material behaviors for the Silt sandbox.
//!
//! - [`GranularFall`]: falls straight down, else slides down-left, else
//!   down-right. Used for sand.
//! - [`FluidFall`]: falls, sinks through displaceable kinds by swapping,
//!   else spreads one slot sideways. Used for water.
//! - [`Inert`]: never moves. Used for solid and the placeholder kinds.
//!
//! [`standard_registry`] wires every material to its reference behavior.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fluid_fall;
pub mod granular_fall;
pub mod inert;
pub mod materials;

pub use fluid_fall::{FluidFall, FluidFallBuilder};
pub use granular_fall::GranularFall;
pub use inert::Inert;
pub use materials::{reference_behavior, standard_registry, Behavior};
