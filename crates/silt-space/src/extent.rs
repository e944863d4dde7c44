//! Grid dimensions and the row-major coordinate mapping.

use crate::error::SpaceError;

/// Width and height of a grid, and the mapping between `(x, y)` and
/// row-major slot indices.
///
/// Every 2D ↔ 1D conversion in the workspace goes through this type.
/// [`Grid`](crate::Grid) owns one; views that outlive a borrow of the
/// grid, such as render snapshots, copy it.
///
/// # Examples
///
/// ```
/// use silt_space::Extent;
///
/// let e = Extent::new(4, 3).unwrap();
/// assert_eq!(e.index(1, 2), Some(9));
/// assert_eq!(e.coords(9), Some((1, 2)));
/// assert_eq!(e.index(4, 0), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Extent {
    width: u32,
    height: u32,
}

impl Extent {
    /// Maximum size of either dimension: coordinates are `i32`.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Validate `width × height`.
    ///
    /// Returns `Err(SpaceError::EmptySpace)` if either dimension is 0,
    /// `Err(SpaceError::DimensionTooLarge)` if either exceeds `i32::MAX`,
    /// and `Err(SpaceError::CellCountOverflow)` if the product exceeds
    /// `u32::MAX`.
    pub fn new(width: u32, height: u32) -> Result<Self, SpaceError> {
        if width == 0 || height == 0 {
            return Err(SpaceError::EmptySpace);
        }
        for (name, value) in [("width", width), ("height", height)] {
            if value > Self::MAX_DIM {
                return Err(SpaceError::DimensionTooLarge {
                    name,
                    value,
                    max: Self::MAX_DIM,
                });
            }
        }
        let cells = u64::from(width) * u64::from(height);
        if cells > u64::from(u32::MAX) {
            return Err(SpaceError::CellCountOverflow { cells });
        }
        Ok(Self { width, height })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of slots. Fits in `u32` by construction.
    pub fn len(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Always `false`: construction rejects empty extents.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `(x, y)` names a slot.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Row-major index of `(x, y)`, or `None` off-grid.
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    /// Coordinates of `index`, or `None` past the end.
    pub fn coords(&self, index: usize) -> Option<(i32, i32)> {
        if index >= self.len() {
            return None;
        }
        let w = self.width as usize;
        Some(((index % w) as i32, (index / w) as i32))
    }
}
