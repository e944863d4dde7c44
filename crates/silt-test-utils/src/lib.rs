//! Test utilities and mock rules for Silt development.
//!
//! Provides ASCII grid fixtures ([`grid_from_ascii`], [`grid_to_ascii`]),
//! a deterministic grid hash for replay comparison ([`grid_hash`]), and
//! mock [`Rule`](silt_rule::Rule) implementations in [`fixtures`].
//!
//! # ASCII legend
//!
//! | char | kind  |
//! |------|-------|
//! | `.`  | Void  |
//! | `s`  | Sand  |
//! | `w`  | Water |
//! | `o`  | Oil   |
//! | `#`  | Solid |
//! | `f`  | Fire  |
//! | `a`  | Ash   |

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{CountingRule, GreedyRule, OffsetRule};

use silt_core::{Cell, CellKind};
use silt_space::Grid;

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

/// Character used for `kind` in ASCII fixtures.
pub fn kind_char(kind: CellKind) -> char {
    match kind {
        CellKind::Void => '.',
        CellKind::Sand => 's',
        CellKind::Water => 'w',
        CellKind::Oil => 'o',
        CellKind::Solid => '#',
        CellKind::Fire => 'f',
        CellKind::Ash => 'a',
    }
}

/// Kind for an ASCII fixture character, or `None` if unrecognised.
pub fn char_kind(c: char) -> Option<CellKind> {
    CellKind::ALL.iter().copied().find(|k| kind_char(*k) == c)
}

/// Build a grid from rows of equal-length ASCII. Row 0 is the top.
///
/// Panics on ragged rows, unknown characters, or an empty picture:
/// fixtures are test-only, so a malformed one should fail loudly.
pub fn grid_from_ascii(rows: &[&str]) -> Grid {
    let height = rows.len();
    let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
    let mut grid = Grid::new(width as u32, height as u32).expect("fixture must be non-empty");
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.chars().count(), width, "ragged fixture row {y}: {row:?}");
        for (x, c) in row.chars().enumerate() {
            let kind = char_kind(c).unwrap_or_else(|| panic!("unknown fixture char {c:?}"));
            grid.set(x as i32, y as i32, Cell::new(kind));
        }
    }
    grid
}

/// Render a grid back to ASCII rows, top row first.
pub fn grid_to_ascii(grid: &Grid) -> Vec<String> {
    (0..grid.height() as i32)
        .map(|y| {
            (0..grid.width() as i32)
                .map(|x| kind_char(grid.kind(x, y)))
                .collect()
        })
        .collect()
}

/// FNV-1a hash over every slot's kind and color.
///
/// Two grids hash equal iff (barring collisions) they hold the same cells
/// in the same slots. Dimensions are folded in first.
pub fn grid_hash(grid: &Grid) -> u64 {
    let mut hash = FNV_OFFSET;
    let mut feed = |bytes: &[u8]| {
        for &b in bytes {
            hash = (hash ^ b as u64).wrapping_mul(FNV_PRIME);
        }
    };
    feed(&grid.width().to_le_bytes());
    feed(&grid.height().to_le_bytes());
    for cell in grid.cells() {
        feed(&[cell.kind as u8]);
        feed(&cell.color.to_array());
    }
    hash
}

/// Number of non-Void cells.
pub fn occupied_count(grid: &Grid) -> usize {
    grid.occupied().count()
}
