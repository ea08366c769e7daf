//! Chain-shape statistics.
//!
//! The bucket table never grows, so these numbers are the way to see a
//! key set outgrowing its map.

use std::fmt;

/// Snapshot of a map's bucket occupancy. Produced by
/// [`ChainedMap::stats`](crate::ChainedMap::stats).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapStats {
    /// Number of keys.
    pub entries: usize,
    /// Number of buckets.
    pub buckets: usize,
    /// Buckets holding at least one entry.
    pub occupied_buckets: usize,
    /// Length of the longest chain.
    pub longest_chain: usize,
    /// Entries whose key did not fit inline and owns a heap buffer.
    pub spilled_keys: usize,
}

impl MapStats {
    /// Keys per bucket.
    pub fn load_factor(&self) -> f64 {
        if self.buckets == 0 {
            return 0.0;
        }
        self.entries as f64 / self.buckets as f64
    }

    /// Average chain length over occupied buckets.
    pub fn mean_chain_length(&self) -> f64 {
        if self.occupied_buckets == 0 {
            return 0.0;
        }
        self.entries as f64 / self.occupied_buckets as f64
    }
}

impl fmt::Display for MapStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} entries in {}/{} buckets, longest chain {}, load {:.2}",
            self.entries,
            self.occupied_buckets,
            self.buckets,
            self.longest_chain,
            self.load_factor()
        )
    }
}
