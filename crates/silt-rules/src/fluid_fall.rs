//! Falling, sinking, and sideways spread for fluids.
//!
//! Each tick a fluid cell tries, in order:
//!
//! 1. Fall into an open slot below.
//! 2. Swap with a displaceable kind below (it sinks, the other rises).
//! 3. Pick a random side and move one slot that way if it is open.
//!
//! The side is drawn from the tick's seeded generator, so a fixed seed
//! replays the same spread pattern.
//!
//! Constructed via [`FluidFall::new`] for the defaults or
//! [`FluidFall::builder`] to change the displaceable set.

use rand::Rng;
use silt_core::CellKind;
use silt_rule::{Rule, RuleContext};

/// A fluid that falls, sinks through lighter kinds, and spreads sideways.
#[derive(Clone, Debug)]
pub struct FluidFall {
    displaces: [bool; CellKind::COUNT],
    spread: bool,
}

/// Builder for [`FluidFall`].
///
/// Defaults: displaces Sand and Oil, lateral spread enabled.
#[derive(Clone, Debug)]
pub struct FluidFallBuilder {
    displaces: Vec<CellKind>,
    spread: bool,
}

impl FluidFall {
    /// A fluid with the default displaceable set (Sand, Oil) that spreads.
    pub fn new() -> Self {
        let mut displaces = [false; CellKind::COUNT];
        displaces[CellKind::Sand.index()] = true;
        displaces[CellKind::Oil.index()] = true;
        Self {
            displaces,
            spread: true,
        }
    }

    /// Create a new builder starting from the defaults.
    pub fn builder() -> FluidFallBuilder {
        FluidFallBuilder {
            displaces: vec![CellKind::Sand, CellKind::Oil],
            spread: true,
        }
    }

    /// Whether a cell of `kind` below this fluid is swapped upward.
    pub fn displaces(&self, kind: CellKind) -> bool {
        self.displaces[kind.index()]
    }

    /// Whether the fluid moves sideways when it cannot fall.
    pub fn spreads(&self) -> bool {
        self.spread
    }
}

impl Default for FluidFall {
    fn default() -> Self {
        Self::new()
    }
}

impl FluidFallBuilder {
    /// Replace the displaceable set.
    pub fn displaces(mut self, kinds: impl IntoIterator<Item = CellKind>) -> Self {
        self.displaces = kinds.into_iter().collect();
        self
    }

    /// Add one kind to the displaceable set.
    pub fn also_displaces(mut self, kind: CellKind) -> Self {
        self.displaces.push(kind);
        self
    }

    /// Enable or disable lateral spread (default: enabled).
    pub fn spread(mut self, spread: bool) -> Self {
        self.spread = spread;
        self
    }

    /// Build the rule, validating the displaceable set.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the displaceable set names Void: an open slot
    /// below is a fall, never a swap.
    pub fn build(self) -> Result<FluidFall, String> {
        let mut displaces = [false; CellKind::COUNT];
        for kind in self.displaces {
            if kind.is_void() {
                return Err("Void cannot be displaced; it is fallen into".to_string());
            }
            displaces[kind.index()] = true;
        }
        Ok(FluidFall {
            displaces,
            spread: self.spread,
        })
    }
}

impl Rule for FluidFall {
    fn name(&self) -> &str {
        "fluid_fall"
    }

    fn apply(&self, ctx: &mut RuleContext<'_>) {
        let below = ctx.kind_at(0, 1);
        if below.is_void() {
            // An off-grid "open" floor is refused by the ledger and the
            // cell stays put; it does not fall back to spreading.
            ctx.move_by(0, 1);
            return;
        }
        if self.displaces(below) {
            ctx.swap_by(0, 1);
            return;
        }
        if !self.spread {
            return;
        }
        let dx = if ctx.rng().random_bool(0.5) { 1 } else { -1 };
        if ctx.is_open(dx, 0) {
            ctx.move_by(dx, 0);
        }
    }
}
