//! Map configuration parameters.

/// Sizing configuration for a [`ChainedMap`](crate::ChainedMap).
///
/// The bucket count is fixed for the map's lifetime: there is no rehash,
/// so a key set much larger than the bucket count degrades lookups
/// linearly in chain length.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapConfig {
    /// Number of buckets to allocate.
    ///
    /// `0` selects [`MapConfig::DEFAULT_BUCKETS`].
    pub bucket_hint: usize,
}

impl MapConfig {
    /// Buckets allocated when the hint is zero.
    pub const DEFAULT_BUCKETS: usize = 1023;

    /// Create a config with the given bucket hint.
    pub fn new(bucket_hint: usize) -> Self {
        Self { bucket_hint }
    }

    /// Number of buckets the map will have.
    pub fn bucket_count(&self) -> usize {
        if self.bucket_hint == 0 {
            Self::DEFAULT_BUCKETS
        } else {
            self.bucket_hint
        }
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_hint_selects_default_buckets() {
        assert_eq!(MapConfig::default().bucket_count(), 1023);
    }

    #[test]
    fn hint_preserved() {
        assert_eq!(MapConfig::new(4).bucket_count(), 4);
    }
}
