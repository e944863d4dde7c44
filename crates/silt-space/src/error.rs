//! Error types for grid construction.

use std::fmt;

/// Errors arising from grid construction.
///
/// Coordinate access never produces an error; see the crate docs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpaceError {
    /// Attempted to construct a grid with zero cells.
    EmptySpace,
    /// A dimension does not fit the signed coordinate type.
    DimensionTooLarge {
        /// Name of the dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The value provided.
        value: u32,
        /// The maximum allowed value.
        max: u32,
    },
    /// `width * height` exceeds the addressable cell count.
    CellCountOverflow {
        /// The requested number of cells.
        cells: u64,
    },
}

impl fmt::Display for SpaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptySpace => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
            Self::CellCountOverflow { cells } => {
                write!(f, "cell count {cells} exceeds u32::MAX")
            }
        }
    }
}

impl std::error::Error for SpaceError {}
