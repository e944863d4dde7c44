//! Dense row-major cell storage.

use indexmap::IndexMap;
use silt_core::{Cell, CellKind};

use crate::boundary::BoundaryPolicy;
use crate::error::SpaceError;
use crate::extent::Extent;
use crate::region::BlobRegion;

/// A fixed-size 2D grid of cells, stored row-major.
///
/// Coordinate `(x, y)` maps to index `y * width + x`. Coordinates are
/// signed so that neighbour probes like `x - 1` at the left edge stay
/// well-defined: they are simply out of bounds.
///
/// # Examples
///
/// ```
/// use silt_core::{Cell, CellKind};
/// use silt_space::Grid;
///
/// let mut grid = Grid::new(3, 2).unwrap();
/// assert_eq!(grid.index(2, 1), Some(5));
/// assert_eq!(grid.coords(5), Some((2, 1)));
///
/// grid.set(1, 0, Cell::new(CellKind::Sand));
/// assert_eq!(grid.get(1, 0).kind, CellKind::Sand);
///
/// // Off-grid reads are Void, off-grid writes are dropped.
/// assert!(grid.get(-1, 0).is_void());
/// assert!(!grid.set(3, 0, Cell::new(CellKind::Sand)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    extent: Extent,
    cells: Vec<Cell>,
}

impl Grid {
    /// Maximum size of either dimension: coordinates are `i32`.
    pub const MAX_DIM: u32 = Extent::MAX_DIM;

    /// Create an all-Void grid of `width × height` cells.
    ///
    /// Fails under the same conditions as [`Extent::new`].
    pub fn new(width: u32, height: u32) -> Result<Self, SpaceError> {
        let extent = Extent::new(width, height)?;
        Ok(Self {
            extent,
            cells: vec![Cell::VOID; extent.len()],
        })
    }

    /// Slot count of a `width × height` grid, without allocating it.
    pub fn check_dimensions(width: u32, height: u32) -> Result<usize, SpaceError> {
        Extent::new(width, height).map(|e| e.len())
    }

    /// Dimensions and coordinate mapping.
    pub fn extent(&self) -> Extent {
        self.extent
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.extent.width()
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.extent.height()
    }

    /// Total number of slots.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `(x, y)` names a stored slot.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.extent.in_bounds(x, y)
    }

    /// Row-major index of `(x, y)`, or `None` off-grid.
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        self.extent.index(x, y)
    }

    /// Coordinates of `index`, or `None` past the end.
    pub fn coords(&self, index: usize) -> Option<(i32, i32)> {
        self.extent.coords(index)
    }

    /// The cell at `(x, y)`; the canonical Void cell off-grid.
    pub fn get(&self, x: i32, y: i32) -> Cell {
        match self.index(x, y) {
            Some(i) => self.cells[i],
            None => Cell::VOID,
        }
    }

    /// Shorthand for `get(x, y).kind`.
    pub fn kind(&self, x: i32, y: i32) -> CellKind {
        self.get(x, y).kind
    }

    /// The cell at `(x, y)`, with off-grid answered by `policy`.
    pub fn probe(&self, x: i32, y: i32, policy: BoundaryPolicy) -> Cell {
        match self.index(x, y) {
            Some(i) => self.cells[i],
            None => policy.outside_cell(),
        }
    }

    /// Write `cell` at `(x, y)`. Returns `false` (and writes nothing) off-grid.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// The cell at a flat index, or `None` past the end.
    pub fn get_index(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Write `cell` at a flat index. Returns `false` past the end.
    pub fn set_index(&mut self, index: usize, cell: Cell) -> bool {
        match self.cells.get_mut(index) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// Exchange two slots. Returns `false` (and does nothing) if either
    /// index is past the end.
    pub fn swap_index(&mut self, a: usize, b: usize) -> bool {
        if a >= self.cells.len() || b >= self.cells.len() {
            return false;
        }
        self.cells.swap(a, b);
        true
    }

    /// All slots in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Non-Void slots as `(index, cell)` in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_void())
            .map(|(i, c)| (i, *c))
    }

    /// Write `cell` into every slot of `region`. Returns the slot count.
    pub fn fill_region(&mut self, region: &BlobRegion, cell: Cell) -> usize {
        let mut written = 0;
        for (x, y) in region.iter() {
            if self.set(x, y, cell) {
                written += 1;
            }
        }
        written
    }

    /// Reset every slot to Void.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::VOID);
    }

    /// Count of each non-Void kind present, in canonical kind order.
    ///
    /// Kinds with no cells are omitted.
    pub fn census(&self) -> IndexMap<CellKind, usize> {
        let mut counts = [0usize; CellKind::COUNT];
        for cell in &self.cells {
            counts[cell.kind.index()] += 1;
        }
        CellKind::ALL
            .iter()
            .filter(|k| !k.is_void())
            .filter(|k| counts[k.index()] > 0)
            .map(|k| (*k, counts[k.index()]))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sand() -> Cell {
        Cell::new(CellKind::Sand)
    }

    #[test]
    fn new_rejects_empty() {
        assert_eq!(Grid::new(0, 4), Err(SpaceError::EmptySpace));
        assert_eq!(Grid::new(4, 0), Err(SpaceError::EmptySpace));
    }

    #[test]
    fn new_rejects_oversized_dimension() {
        assert!(matches!(
            Grid::new(Grid::MAX_DIM + 1, 1),
            Err(SpaceError::DimensionTooLarge { name: "width", .. })
        ));
        assert!(matches!(
            Grid::new(1, Grid::MAX_DIM + 1),
            Err(SpaceError::DimensionTooLarge { name: "height", .. })
        ));
    }

    #[test]
    fn new_rejects_cell_count_overflow() {
        assert!(matches!(
            Grid::new(1 << 17, 1 << 17),
            Err(SpaceError::CellCountOverflow { .. })
        ));
    }

    #[test]
    fn check_dimensions_matches_new() {
        assert_eq!(Grid::check_dimensions(4, 3), Ok(12));
        assert_eq!(Grid::check_dimensions(0, 3), Err(SpaceError::EmptySpace));
        assert!(Grid::check_dimensions(1 << 17, 1 << 17).is_err());
    }

    #[test]
    fn fresh_grid_is_all_void() {
        let g = Grid::new(4, 3).unwrap();
        assert_eq!(g.len(), 12);
        assert!(g.cells().iter().all(Cell::is_void));
        assert!(g.census().is_empty());
        assert_eq!(g.occupied().count(), 0);
    }

    #[test]
    fn index_is_row_major() {
        let g = Grid::new(4, 3).unwrap();
        assert_eq!(g.index(0, 0), Some(0));
        assert_eq!(g.index(3, 0), Some(3));
        assert_eq!(g.index(0, 1), Some(4));
        assert_eq!(g.index(3, 2), Some(11));
        assert_eq!(g.index(4, 0), None);
        assert_eq!(g.index(-1, 1), None);
        assert_eq!(g.coords(12), None);
    }

    #[test]
    fn left_edge_probe_does_not_wrap_to_previous_row() {
        let mut g = Grid::new(3, 3).unwrap();
        g.set(2, 0, sand());
        // (-1, 1) would be index 2 under naive arithmetic.
        assert!(g.get(-1, 1).is_void());
    }

    #[test]
    fn probe_follows_policy_off_grid_only() {
        let mut g = Grid::new(2, 2).unwrap();
        g.set(0, 0, sand());
        assert_eq!(g.probe(0, 0, BoundaryPolicy::Solid).kind, CellKind::Sand);
        assert_eq!(g.probe(1, 1, BoundaryPolicy::Solid).kind, CellKind::Void);
        assert_eq!(g.probe(0, 2, BoundaryPolicy::Solid).kind, CellKind::Solid);
        assert_eq!(g.probe(0, 2, BoundaryPolicy::Void).kind, CellKind::Void);
    }

    #[test]
    fn index_access_bounds_checked() {
        let mut g = Grid::new(2, 2).unwrap();
        assert!(g.set_index(3, sand()));
        assert!(!g.set_index(4, sand()));
        assert_eq!(g.get_index(3).map(|c| c.kind), Some(CellKind::Sand));
        assert_eq!(g.get_index(4), None);
        assert!(g.swap_index(0, 3));
        assert_eq!(g.kind(0, 0), CellKind::Sand);
        assert!(!g.swap_index(0, 9));
    }

    #[test]
    fn fill_and_clear() {
        let mut g = Grid::new(8, 8).unwrap();
        let region = BlobRegion::around(0, 0, 2, 8, 8);
        assert_eq!(g.fill_region(&region, sand()), 4);
        assert_eq!(g.census().get(&CellKind::Sand), Some(&4));
        g.clear();
        assert!(g.census().is_empty());
    }

    #[test]
    fn census_is_in_kind_order() {
        let mut g = Grid::new(4, 1).unwrap();
        g.set(0, 0, Cell::new(CellKind::Solid));
        g.set(1, 0, Cell::new(CellKind::Water));
        g.set(2, 0, sand());
        let kinds: Vec<_> = g.census().keys().copied().collect();
        assert_eq!(kinds, vec![CellKind::Sand, CellKind::Water, CellKind::Solid]);
    }

    proptest! {
        #[test]
        fn index_coords_round_trip(w in 1u32..64, h in 1u32..64, i in 0usize..4096) {
            let g = Grid::new(w, h).unwrap();
            match g.coords(i) {
                Some((x, y)) => prop_assert_eq!(g.index(x, y), Some(i)),
                None => prop_assert!(i >= g.len()),
            }
        }

        #[test]
        fn off_grid_reads_are_void(x in -1000i32..1000, y in -1000i32..1000) {
            let mut g = Grid::new(8, 8).unwrap();
            for i in 0..g.len() {
                g.set_index(i, sand());
            }
            if !g.in_bounds(x, y) {
                prop_assert!(g.get(x, y).is_void());
                prop_assert!(!g.set(x, y, sand()));
            }
        }
    }
}
