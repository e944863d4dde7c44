//! What rules see when they probe past the grid edge.

use silt_core::{Cell, CellKind};

/// How off-grid probes are answered.
///
/// Only affects [`Grid::probe`](crate::Grid::probe). [`Grid::get`](crate::Grid::get)
/// always returns Void off-grid, and off-grid writes are always dropped.
///
/// # Examples
///
/// ```
/// use silt_space::{BoundaryPolicy, Grid};
/// use silt_core::CellKind;
///
/// let grid = Grid::new(4, 4).unwrap();
/// assert_eq!(grid.probe(-1, 0, BoundaryPolicy::Void).kind, CellKind::Void);
/// assert_eq!(grid.probe(-1, 0, BoundaryPolicy::Solid).kind, CellKind::Solid);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoundaryPolicy {
    /// Off-grid reads as empty space. Rules may stage moves off the edge;
    /// the ledger refuses them, so the cell stays put.
    #[default]
    Void,
    /// Off-grid reads as an immovable wall, so rules fall through to
    /// their next alternative (e.g. fluid spreading along the floor).
    Solid,
}

impl BoundaryPolicy {
    /// The cell reported for any off-grid coordinate.
    pub const fn outside_cell(self) -> Cell {
        match self {
            BoundaryPolicy::Void => Cell::VOID,
            BoundaryPolicy::Solid => Cell::new(CellKind::Solid),
        }
    }
}
