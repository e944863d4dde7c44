//! Cell values: the material tag and its render color.
//!
//! A cell has no identity of its own. It is a value occupying a grid
//! slot, and moving a cell means copying that value into another slot.

use std::fmt;

/// An 8-bit-per-channel RGBA color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (255 = opaque).
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black. Used for Void.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    /// Construct a color from its four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Construct an opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Channels in `[r, g, b, a]` order.
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// The material tag of a grid slot.
///
/// A closed enumeration: behavior is looked up by discriminant, so the
/// discriminants double as table indices and must stay dense.
///
/// # Examples
///
/// ```
/// use silt_core::CellKind;
///
/// assert_eq!(CellKind::Sand.index(), 1);
/// assert_eq!(CellKind::Ash.next(), CellKind::Void);
/// assert_eq!(CellKind::Void.prev(), CellKind::Ash);
/// assert!(CellKind::Void.is_void());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum CellKind {
    /// Empty space. Has no presence and is never dispatched.
    #[default]
    Void = 0,
    /// Granular solid that falls and piles.
    Sand = 1,
    /// Fluid that falls, sinks through sand and oil, and spreads sideways.
    Water = 2,
    /// Viscous fluid. Inert until it gets its own behavior.
    Oil = 3,
    /// Immovable wall material.
    Solid = 4,
    /// Inert placeholder.
    Fire = 5,
    /// Inert placeholder.
    Ash = 6,
}

impl CellKind {
    /// Number of kinds, including Void.
    pub const COUNT: usize = 7;

    /// Every kind in discriminant order.
    pub const ALL: [CellKind; Self::COUNT] = [
        CellKind::Void,
        CellKind::Sand,
        CellKind::Water,
        CellKind::Oil,
        CellKind::Solid,
        CellKind::Fire,
        CellKind::Ash,
    ];

    /// Dense table index for this kind.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look a kind up by its discriminant.
    pub fn from_index(index: usize) -> Option<CellKind> {
        Self::ALL.get(index).copied()
    }

    /// Whether this is the empty-space sentinel.
    pub const fn is_void(self) -> bool {
        matches!(self, CellKind::Void)
    }

    /// Upper-case display label.
    pub const fn name(self) -> &'static str {
        match self {
            CellKind::Void => "VOID",
            CellKind::Sand => "SAND",
            CellKind::Water => "WATER",
            CellKind::Oil => "OIL",
            CellKind::Solid => "SOLID",
            CellKind::Fire => "FIRE",
            CellKind::Ash => "ASH",
        }
    }

    /// Palette color a freshly placed cell of this kind carries.
    pub const fn default_color(self) -> Rgba {
        match self {
            CellKind::Void => Rgba::TRANSPARENT,
            CellKind::Sand => Rgba::opaque(0, 228, 48),
            CellKind::Water => Rgba::opaque(0, 121, 241),
            CellKind::Oil => Rgba::opaque(24, 24, 24),
            CellKind::Solid => Rgba::opaque(130, 130, 130),
            CellKind::Fire => Rgba::opaque(200, 10, 10),
            CellKind::Ash => Rgba::opaque(190, 190, 190),
        }
    }

    /// The following kind, wrapping from the last back to Void.
    pub fn next(self) -> CellKind {
        Self::ALL[(self.index() + 1) % Self::COUNT]
    }

    /// The preceding kind, wrapping from Void to the last kind.
    pub fn prev(self) -> CellKind {
        Self::ALL[(self.index() + Self::COUNT - 1) % Self::COUNT]
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A grid slot's contents: material tag plus render payload.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Cell {
    /// Material tag.
    pub kind: CellKind,
    /// Color the renderer draws for this slot.
    pub color: Rgba,
}

impl Cell {
    /// The canonical Void cell.
    pub const VOID: Cell = Cell {
        kind: CellKind::Void,
        color: Rgba::TRANSPARENT,
    };

    /// A cell of `kind` carrying the kind's palette color.
    pub const fn new(kind: CellKind) -> Self {
        Self {
            kind,
            color: kind.default_color(),
        }
    }

    /// A cell of `kind` with an explicit color.
    pub const fn with_color(kind: CellKind, color: Rgba) -> Self {
        Self { kind, color }
    }

    /// Whether the slot is empty.
    pub const fn is_void(&self) -> bool {
        self.kind.is_void()
    }
}

impl From<CellKind> for Cell {
    fn from(kind: CellKind) -> Self {
        Cell::new(kind)
    }
}
