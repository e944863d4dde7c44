//! Clamped rectangular regions for blob placement.

/// A half-open rectangle of grid coordinates, already clipped to the grid.
///
/// Built by [`BlobRegion::around`]: the square `[x - r, x + r) × [y - r, y + r)`
/// intersected with `[0, width) × [0, height)`. Iteration is row-major.
///
/// # Examples
///
/// ```
/// use silt_space::BlobRegion;
///
/// let r = BlobRegion::around(5, 5, 2, 16, 16);
/// assert_eq!(r.cell_count(), 16);
///
/// // Clipped at the top-left corner.
/// let corner = BlobRegion::around(0, 0, 2, 16, 16);
/// assert_eq!(corner.cell_count(), 4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlobRegion {
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
}

impl BlobRegion {
    /// Square of side `2 * radius` anchored on `(x, y)`, clipped to a
    /// `width × height` grid. Radius 0 gives an empty region.
    pub fn around(x: i32, y: i32, radius: u32, width: u32, height: u32) -> Self {
        let r = i64::from(radius);
        let clip = |lo: i64, hi: i64, len: u32| {
            let len = i64::from(len);
            let lo = lo.clamp(0, len);
            let hi = hi.clamp(0, len);
            // Both ends lie in [0, len] and len fits in i32.
            (lo as i32, hi.max(lo) as i32)
        };
        let (x0, x1) = clip(i64::from(x) - r, i64::from(x) + r, width);
        let (y0, y1) = clip(i64::from(y) - r, i64::from(y) + r, height);
        Self { x0, y0, x1, y1 }
    }

    /// Inclusive top-left corner.
    pub fn min(&self) -> (i32, i32) {
        (self.x0, self.y0)
    }

    /// Exclusive bottom-right corner.
    pub fn max(&self) -> (i32, i32) {
        (self.x1, self.y1)
    }

    /// Whether the region covers no cells.
    pub fn is_empty(&self) -> bool {
        self.x0 >= self.x1 || self.y0 >= self.y1
    }

    /// Number of cells covered.
    pub fn cell_count(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.x1 - self.x0) as usize * (self.y1 - self.y0) as usize
    }

    /// Whether `(x, y)` lies inside the region.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }

    /// Covered coordinates in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        let (x0, x1) = (self.x0, self.x1);
        (self.y0..self.y1).flat_map(move |y| (x0..x1).map(move |x| (x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn interior_square_is_half_open() {
        let r = BlobRegion::around(4, 4, 1, 10, 10);
        assert_eq!(r.min(), (3, 3));
        assert_eq!(r.max(), (5, 5));
        let cells: Vec<_> = r.iter().collect();
        assert_eq!(cells, vec![(3, 3), (4, 3), (3, 4), (4, 4)]);
    }

    #[test]
    fn zero_radius_is_empty() {
        let r = BlobRegion::around(4, 4, 0, 10, 10);
        assert!(r.is_empty());
        assert_eq!(r.iter().count(), 0);
    }

    #[test]
    fn fully_off_grid_is_empty() {
        let r = BlobRegion::around(-50, -50, 3, 10, 10);
        assert!(r.is_empty());
        assert_eq!(r.cell_count(), 0);
        let r = BlobRegion::around(100, 2, 3, 10, 10);
        assert!(r.is_empty());
    }

    #[test]
    fn clipped_at_far_edge() {
        let r = BlobRegion::around(9, 9, 3, 10, 10);
        assert_eq!(r.min(), (6, 6));
        assert_eq!(r.max(), (10, 10));
        assert_eq!(r.cell_count(), 16);
        assert!(r.contains(9, 9));
        assert!(!r.contains(10, 9));
    }

    #[test]
    fn extreme_inputs_do_not_overflow() {
        let r = BlobRegion::around(i32::MAX, i32::MIN, u32::MAX, 8, 8);
        assert!(r.cell_count() <= 64);
    }

    proptest! {
        #[test]
        fn region_stays_on_grid(
            x in -40i32..40,
            y in -40i32..40,
            radius in 0u32..20,
            w in 1u32..24,
            h in 1u32..24,
        ) {
            let r = BlobRegion::around(x, y, radius, w, h);
            let mut n = 0;
            for (cx, cy) in r.iter() {
                prop_assert!(cx >= 0 && cx < w as i32);
                prop_assert!(cy >= 0 && cy < h as i32);
                n += 1;
            }
            prop_assert_eq!(n, r.cell_count());
            prop_assert!(n <= (2 * radius as usize).pow(2));
        }
    }
}
