//! Epoch-checked iteration cursors.
//!
//! An [`ArrayCursor`] names one element position plus the array epoch it
//! was issued in. The epoch makes staleness an O(1) check without keeping
//! any back-reference into the buffer.

use std::fmt;

/// Position of one element in a [`DynamicArray`](crate::DynamicArray).
///
/// Obtained from `first`/`next` and resolved with `at`/`at_mut`. Valid
/// until the array's next structural mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct ArrayCursor {
    /// Element index.
    pub(crate) index: usize,
    /// Array epoch when this cursor was issued.
    pub(crate) epoch: u64,
}

impl ArrayCursor {
    pub(crate) fn new(index: usize, epoch: u64) -> Self {
        Self { index, epoch }
    }

    /// The element index this cursor points at.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The epoch this cursor was issued in.
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// The cursor one position further, in the same epoch.
    pub(crate) fn advanced(self) -> Self {
        Self::new(self.index + 1, self.epoch)
    }
}

impl fmt::Display for ArrayCursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArrayCursor(idx={}, epoch={})", self.index, self.epoch)
    }
}
