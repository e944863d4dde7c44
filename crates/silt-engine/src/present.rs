//! Presentation buffer, render snapshots, and screen ↔ grid mapping.
//!
//! The renderer never touches the grid. It reads a [`RenderSnapshot`],
//! a borrowed view of the [`PresentationBuffer`] that is re-synced from
//! the grid only when something changed since the last sync.

use silt_core::{Rgba, TickId};
use silt_space::{Extent, Grid};

/// One color per grid slot, plus a dirty flag.
#[derive(Clone, Debug)]
pub struct PresentationBuffer {
    extent: Extent,
    colors: Vec<Rgba>,
    dirty: bool,
}

impl PresentationBuffer {
    /// A transparent buffer for a `grid`-sized board, marked dirty.
    pub fn for_grid(grid: &Grid) -> Self {
        Self {
            extent: grid.extent(),
            colors: vec![Rgba::TRANSPARENT; grid.len()],
            dirty: true,
        }
    }

    /// Flag the buffer as stale.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Whether the buffer is stale.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Rewrite every slot from `grid` and clear the dirty flag.
    ///
    /// Void slots take Void's transparent color, so a cell that moved
    /// leaves no trail.
    pub fn sync(&mut self, grid: &Grid) {
        self.extent = grid.extent();
        self.colors.clear();
        self.colors.extend(grid.cells().iter().map(|c| {
            if c.is_void() {
                Rgba::TRANSPARENT
            } else {
                c.color
            }
        }));
        self.dirty = false;
    }

    /// Sync only if dirty. Returns whether a sync happened.
    pub fn sync_if_dirty(&mut self, grid: &Grid) -> bool {
        if !self.dirty {
            return false;
        }
        self.sync(grid);
        true
    }

    /// Colors in row-major order.
    pub fn colors(&self) -> &[Rgba] {
        &self.colors
    }

    /// A read-only view stamped with `tick`.
    pub fn snapshot(&self, tick: TickId) -> RenderSnapshot<'_> {
        RenderSnapshot {
            extent: self.extent,
            tick,
            colors: &self.colors,
        }
    }
}

/// Read-only view of the presentation buffer after a sync.
#[derive(Clone, Copy, Debug)]
pub struct RenderSnapshot<'a> {
    extent: Extent,
    tick: TickId,
    colors: &'a [Rgba],
}

impl<'a> RenderSnapshot<'a> {
    /// Columns.
    pub fn width(&self) -> u32 {
        self.extent.width()
    }

    /// Rows.
    pub fn height(&self) -> u32 {
        self.extent.height()
    }

    /// Tick the snapshot reflects.
    pub fn tick(&self) -> TickId {
        self.tick
    }

    /// Colors in row-major order.
    pub fn colors(&self) -> &'a [Rgba] {
        self.colors
    }

    /// `(index, color)` for every slot.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Rgba)> + 'a {
        self.colors.iter().copied().enumerate()
    }

    /// Color at `(x, y)`, or `None` off-grid.
    pub fn color_at(&self, x: i32, y: i32) -> Option<Rgba> {
        self.colors.get(self.extent.index(x, y)?).copied()
    }

    /// Tightly packed RGBA8 bytes, row-major, ready for texture upload.
    pub fn as_bytes(&self) -> Vec<u8> {
        self.colors.iter().flat_map(|c| c.to_array()).collect()
    }
}

/// Uniform scale plus offset between screen pixels and grid cells.
///
/// `screen = grid * scale + offset`. Pure math; nothing here knows about
/// windows.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    /// Screen pixels per grid cell. Must be positive.
    pub scale: f32,
    /// Screen x of the grid's left edge.
    pub offset_x: f32,
    /// Screen y of the grid's top edge.
    pub offset_y: f32,
}

impl Viewport {
    /// A viewport at the screen origin.
    pub fn new(scale: f32) -> Self {
        Self {
            scale,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    /// Move the grid's top-left corner to `(x, y)` on screen.
    pub fn with_offset(mut self, x: f32, y: f32) -> Self {
        self.offset_x = x;
        self.offset_y = y;
        self
    }

    /// Grid cell under screen point `(sx, sy)`. May be off-grid.
    pub fn to_local(&self, sx: f32, sy: f32) -> (i32, i32) {
        (
            ((sx - self.offset_x) / self.scale).floor() as i32,
            ((sy - self.offset_y) / self.scale).floor() as i32,
        )
    }

    /// Screen position of grid cell `(x, y)`'s top-left corner.
    pub fn to_global(&self, x: i32, y: i32) -> (f32, f32) {
        (
            x as f32 * self.scale + self.offset_x,
            y as f32 * self.scale + self.offset_y,
        )
    }

    /// Screen size of a `width × height` grid.
    pub fn screen_size(&self, width: u32, height: u32) -> (f32, f32) {
        (width as f32 * self.scale, height as f32 * self.scale)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1.0)
    }
}
