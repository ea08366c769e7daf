//! Array configuration parameters.

/// Sizing configuration for a [`DynamicArray`](crate::DynamicArray).
///
/// Immutable after the array is built; capacity afterwards only changes by
/// doubling.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Initial number of element slots to allocate.
    ///
    /// `0` selects [`ArrayConfig::DEFAULT_CAPACITY`].
    pub capacity_hint: usize,
}

impl ArrayConfig {
    /// Slots allocated when the hint is zero.
    pub const DEFAULT_CAPACITY: usize = 16;

    /// Create a config with the given capacity hint.
    pub fn new(capacity_hint: usize) -> Self {
        Self { capacity_hint }
    }

    /// Number of slots the array starts with.
    pub fn initial_capacity(&self) -> usize {
        if self.capacity_hint == 0 {
            Self::DEFAULT_CAPACITY
        } else {
            self.capacity_hint
        }
    }
}

impl Default for ArrayConfig {
    fn default() -> Self {
        Self::new(0)
    }
}
