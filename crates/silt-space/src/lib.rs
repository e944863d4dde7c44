//! Grid storage for the Silt sandbox.
//!
//! [`Grid`] is a dense row-major array of [`Cell`](silt_core::Cell) values.
//! [`Extent`] holds the only coordinate arithmetic in the workspace: 2D ↔
//! 1D mapping and bounds checks live there and nowhere else.
//!
//! Reads past the edge never fail. [`Grid::get`] returns the canonical
//! Void cell; [`Grid::probe`] answers according to a [`BoundaryPolicy`].
//! Writes past the edge are dropped.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod error;
pub mod extent;
pub mod grid;
pub mod region;

pub use boundary::BoundaryPolicy;
pub use error::SpaceError;
pub use extent::Extent;
pub use grid::Grid;
pub use region::BlobRegion;
