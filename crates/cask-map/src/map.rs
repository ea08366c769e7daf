//! The chained hash map.

use std::fmt;

use cask_core::{fatal, require_nonzero_size, BoxedCleanup, Cleanup};
use cask_core::{ContractViolation, ResourceError};

use crate::config::MapConfig;
use crate::entry::{Entry, EntryIndex};
use crate::hash::hash_key;
use crate::iter::{Iter, Keys, Values, ValuesMut};
use crate::stats::MapStats;

/// String-keyed map with a fixed number of buckets and per-bucket chains.
///
/// Keys are unique. `put` replaces the value of an existing key in place
/// (running cleanup on the old value first) or links a new entry at the
/// head of the key's chain. Entries are never removed individually; they
/// all go when the map is disposed or dropped, with cleanup run once per
/// value.
///
/// Contract violations (zero-sized `V`, `next` with a key the map does not
/// hold) and allocation failure are fatal; see [`cask_core::fatal`].
pub struct ChainedMap<V> {
    /// Chain head per bucket; length fixed at creation.
    buckets: Vec<Option<EntryIndex>>,
    /// Entry slab. Never shrinks, so its length is the key count.
    entries: Vec<Entry<V>>,
    /// Run once per discarded value.
    cleanup: Option<BoxedCleanup<V>>,
}

impl<V> ChainedMap<V> {
    /// Create an empty map with the default bucket count and no cleanup.
    #[track_caller]
    pub fn new() -> Self {
        Self::from_config(&MapConfig::default(), None)
    }

    /// Create an empty map with `bucket_hint` buckets.
    ///
    /// A hint of `0` selects [`MapConfig::DEFAULT_BUCKETS`].
    #[track_caller]
    pub fn with_buckets(bucket_hint: usize) -> Self {
        Self::from_config(&MapConfig::new(bucket_hint), None)
    }

    /// Create an empty map that runs `cleanup` on each value it discards.
    #[track_caller]
    pub fn with_cleanup(bucket_hint: usize, cleanup: impl Cleanup<V> + 'static) -> Self {
        Self::from_config(&MapConfig::new(bucket_hint), Some(Box::new(cleanup)))
    }

    /// Create an empty map from a config and an optional cleanup callback.
    ///
    /// # Panics
    ///
    /// Panics if `V` is zero-sized or the bucket table cannot be allocated.
    #[track_caller]
    pub fn from_config(config: &MapConfig, cleanup: Option<BoxedCleanup<V>>) -> Self {
        let value_size = require_nonzero_size::<V>();
        let nbuckets = config.bucket_count();
        let mut buckets = Vec::new();
        if buckets.try_reserve_exact(nbuckets).is_err() {
            fatal(ResourceError::AllocationFailed {
                requested_bytes: nbuckets
                    .saturating_mul(std::mem::size_of::<Option<EntryIndex>>()),
            });
        }
        buckets.resize(nbuckets, None);
        tracing::debug!(nbuckets, value_size, "chained map created");
        Self {
            buckets,
            entries: Vec::new(),
            cleanup,
        }
    }

    /// Number of keys in the map.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map holds no keys.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of buckets (fixed at creation).
    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Bytes per value.
    #[inline]
    pub fn value_size(&self) -> usize {
        std::mem::size_of::<V>()
    }

    /// Associate `value` with `key`.
    ///
    /// If `key` is already present, cleanup runs on the old value, which is
    /// then overwritten in place; the key count is unchanged. Otherwise a
    /// new entry is linked at the head of the key's chain.
    ///
    /// # Panics
    ///
    /// Panics if the entry slab cannot grow.
    #[track_caller]
    pub fn put(&mut self, key: &str, value: V) {
        let bucket = self.bucket_of(key);
        if let Some(idx) = self.find_in_chain(bucket, key) {
            let entry = &mut self.entries[idx.0];
            if let Some(cleanup) = self.cleanup.as_mut() {
                cleanup.cleanup(&mut entry.value);
            }
            entry.value = value;
            return;
        }

        if self.entries.try_reserve(1).is_err() {
            fatal(ResourceError::AllocationFailed {
                requested_bytes: (self.entries.len() + 1)
                    .saturating_mul(std::mem::size_of::<Entry<V>>()),
            });
        }
        let idx = EntryIndex(self.entries.len());
        let entry = Entry::new(key, value, self.buckets[bucket]);
        tracing::trace!(
            entry = %idx,
            bucket,
            key_len = key.len(),
            spilled = entry.key_spilled(),
            "entry linked at chain head"
        );
        self.entries.push(entry);
        self.buckets[bucket] = Some(idx);
    }

    /// Value stored under `key`, or `None`.
    ///
    /// Matches on full key equality only: a stored `"ab"` is not found by
    /// a lookup of `"a"`.
    pub fn get(&self, key: &str) -> Option<&V> {
        let idx = self.find_in_chain(self.bucket_of(key), key)?;
        Some(&self.entries[idx.0].value)
    }

    /// Mutable value stored under `key`, or `None`.
    ///
    /// Writing through it replaces the value in place without cleanup.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let idx = self.find_in_chain(self.bucket_of(key), key)?;
        Some(&mut self.entries[idx.0].value)
    }

    /// Whether `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.find_in_chain(self.bucket_of(key), key).is_some()
    }

    /// Head key of the lowest-numbered non-empty bucket, or `None` if the
    /// map is empty.
    pub fn first(&self) -> Option<&str> {
        self.head_at_or_after(0).map(|idx| self.entries[idx.0].key_str())
    }

    /// Key following `prev_key` in iteration order, or `None` at the end.
    ///
    /// The successor is the next entry in `prev_key`'s chain if there is
    /// one, else the head of the next non-empty bucket after the one
    /// `prev_key` hashes to. This relies on the bucket count never
    /// changing.
    ///
    /// # Panics
    ///
    /// Panics if `prev_key` is not in the map.
    #[track_caller]
    pub fn next(&self, prev_key: &str) -> Option<&str> {
        let bucket = self.bucket_of(prev_key);
        let Some(idx) = self.find_in_chain(bucket, prev_key) else {
            fatal(ContractViolation::UnknownKey {
                key: prev_key.to_owned(),
            });
        };
        let successor = match self.entries[idx.0].next {
            Some(next) => Some(next),
            None => self.head_at_or_after(bucket + 1),
        };
        successor.map(|next| self.entries[next.0].key_str())
    }

    /// Iterate over `(key, value)` pairs in `first`/`next` order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(self)
    }

    /// Iterate over keys in `first`/`next` order.
    pub fn keys(&self) -> Keys<'_, V> {
        Keys::new(self.iter())
    }

    /// Iterate over values in `first`/`next` order.
    pub fn values(&self) -> Values<'_, V> {
        Values::new(self.iter())
    }

    /// Mutably iterate over values in `first`/`next` order.
    ///
    /// Writing through the references replaces values without cleanup.
    pub fn values_mut(&mut self) -> ValuesMut<'_, V> {
        let order = self.walk_order();
        ValuesMut::new(order, self.entries.iter_mut().map(|entry| &mut entry.value))
    }

    /// Chain-shape statistics.
    pub fn stats(&self) -> MapStats {
        let mut stats = MapStats {
            entries: self.entries.len(),
            buckets: self.buckets.len(),
            occupied_buckets: 0,
            longest_chain: 0,
            spilled_keys: self.entries.iter().filter(|e| e.key_spilled()).count(),
        };
        for bucket in 0..self.buckets.len() {
            let length = self.chain(bucket).count();
            if length > 0 {
                stats.occupied_buckets += 1;
                stats.longest_chain = stats.longest_chain.max(length);
            }
        }
        stats
    }

    /// Run cleanup over every value, bucket by bucket, then release all
    /// storage.
    ///
    /// Equivalent to dropping the map; provided so disposal is explicit at
    /// call sites that care about when cleanup runs.
    pub fn dispose(mut self) {
        self.run_cleanup();
    }

    pub(crate) fn bucket_head(&self, bucket: usize) -> Option<EntryIndex> {
        self.buckets[bucket]
    }

    pub(crate) fn entry(&self, idx: EntryIndex) -> &Entry<V> {
        &self.entries[idx.0]
    }

    #[inline]
    fn bucket_of(&self, key: &str) -> usize {
        hash_key(key, self.buckets.len())
    }

    /// Entry indices of one bucket's chain, head first.
    fn chain(&self, bucket: usize) -> impl Iterator<Item = EntryIndex> + '_ {
        std::iter::successors(self.buckets[bucket], move |idx| {
            self.entries[idx.0].next
        })
    }

    fn find_in_chain(&self, bucket: usize, key: &str) -> Option<EntryIndex> {
        self.chain(bucket)
            .find(|idx| self.entries[idx.0].key_matches(key))
    }

    /// Every entry index, bucket by bucket and head first.
    fn walk_order(&self) -> Vec<EntryIndex> {
        (0..self.buckets.len())
            .flat_map(move |bucket| self.chain(bucket))
            .collect()
    }

    /// Head of the first non-empty bucket at index `start` or later.
    fn head_at_or_after(&self, start: usize) -> Option<EntryIndex> {
        self.buckets.get(start..)?.iter().flatten().next().copied()
    }

    /// Pop every chain head, cleaning its value. The callback is taken out
    /// so a later drop cannot run it a second time.
    fn run_cleanup(&mut self) {
        let Some(mut cleanup) = self.cleanup.take() else {
            return;
        };
        let mut cleaned = 0usize;
        for bucket in 0..self.buckets.len() {
            while let Some(head) = self.buckets[bucket] {
                let entry = &mut self.entries[head.0];
                self.buckets[bucket] = entry.next;
                cleanup.cleanup(&mut entry.value);
                cleaned += 1;
            }
        }
        tracing::debug!(cleaned, "chained map disposed");
    }
}

impl<V> Drop for ChainedMap<V> {
    fn drop(&mut self) {
        self.run_cleanup();
    }
}

impl<V> Default for ChainedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for ChainedMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainedMap")
            .field("len", &self.len())
            .field("buckets", &self.buckets.len())
            .field("value_size", &self.value_size())
            .field("cleanup", &self.cleanup.is_some())
            .finish()
    }
}

impl<'a, V> IntoIterator for &'a ChainedMap<V> {
    type Item = (&'a str, &'a V);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
