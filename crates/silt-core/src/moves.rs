//! Staged move and swap requests.

/// A single intended relocation, staged by a rule during the Scan phase.
///
/// Indices are flat row-major grid indices. A request lives only for the
/// tick that staged it; the resolver consumes or discards every request
/// before the tick ends.
///
/// # Examples
///
/// ```
/// use silt_core::MoveRequest;
///
/// let m = MoveRequest::relocate(0, 3);
/// assert!(!m.is_swap);
///
/// let s = MoveRequest::swap(3, 6);
/// assert_eq!(s.inverse(), MoveRequest::swap(6, 3));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MoveRequest {
    /// Index of the cell that wants to move.
    pub source: usize,
    /// Index of the slot it wants to occupy.
    pub dest: usize,
    /// `true` = exchange contents with an occupied destination;
    /// `false` = plain move into a Void destination.
    pub is_swap: bool,
}

impl MoveRequest {
    /// A plain move into an empty slot.
    pub const fn relocate(source: usize, dest: usize) -> Self {
        Self {
            source,
            dest,
            is_swap: false,
        }
    }

    /// An exchange with an occupied slot.
    pub const fn swap(source: usize, dest: usize) -> Self {
        Self {
            source,
            dest,
            is_swap: true,
        }
    }

    /// The request that undoes this one when applied right after it.
    ///
    /// For a swap this exchanges source and destination. For a plain move
    /// the inverse is a plain move back into the vacated source slot.
    pub const fn inverse(self) -> Self {
        Self {
            source: self.dest,
            dest: self.source,
            is_swap: self.is_swap,
        }
    }
}
