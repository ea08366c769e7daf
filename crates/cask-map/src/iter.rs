//! Borrowing iterators over a [`ChainedMap`].
//!
//! All four walk buckets in index order and each chain head first, which
//! is the same order as `first`/`next`.

use std::iter::FusedIterator;

use crate::entry::EntryIndex;
use crate::map::ChainedMap;

/// Iterator over `(key, value)` pairs. Created by [`ChainedMap::iter`].
pub struct Iter<'a, V> {
    map: &'a ChainedMap<V>,
    /// Next bucket to load once the current chain runs out.
    bucket: usize,
    /// Next entry in the current chain.
    cursor: Option<EntryIndex>,
    remaining: usize,
}

impl<'a, V> Iter<'a, V> {
    pub(crate) fn new(map: &'a ChainedMap<V>) -> Self {
        Self {
            map,
            bucket: 0,
            cursor: None,
            remaining: map.len(),
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(idx) = self.cursor {
                let entry = self.map.entry(idx);
                self.cursor = entry.next;
                self.remaining -= 1;
                return Some((entry.key_str(), &entry.value));
            }
            if self.bucket >= self.map.bucket_count() {
                return None;
            }
            self.cursor = self.map.bucket_head(self.bucket);
            self.bucket += 1;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<V> FusedIterator for Iter<'_, V> {}

/// Iterator over keys. Created by [`ChainedMap::keys`].
pub struct Keys<'a, V> {
    inner: Iter<'a, V>,
}

impl<'a, V> Keys<'a, V> {
    pub(crate) fn new(inner: Iter<'a, V>) -> Self {
        Self { inner }
    }
}

impl<'a, V> Iterator for Keys<'a, V> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Keys<'_, V> {}

/// Iterator over values. Created by [`ChainedMap::values`].
pub struct Values<'a, V> {
    inner: Iter<'a, V>,
}

impl<'a, V> Values<'a, V> {
    pub(crate) fn new(inner: Iter<'a, V>) -> Self {
        Self { inner }
    }
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> ExactSizeIterator for Values<'_, V> {}

/// Mutable iterator over values. Created by [`ChainedMap::values_mut`].
///
/// The walk order is computed up front; each slab slot is then handed out
/// at most once, so the borrows stay disjoint.
pub struct ValuesMut<'a, V> {
    order: std::vec::IntoIter<EntryIndex>,
    /// Slab-ordered value borrows, taken as the walk reaches them.
    slots: Vec<Option<&'a mut V>>,
}

impl<'a, V> ValuesMut<'a, V> {
    pub(crate) fn new(
        order: Vec<EntryIndex>,
        values: impl Iterator<Item = &'a mut V>,
    ) -> Self {
        Self {
            order: order.into_iter(),
            slots: values.map(Some).collect(),
        }
    }
}

impl<'a, V> Iterator for ValuesMut<'a, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        let idx = self.order.next()?;
        self.slots[idx.0].take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.order.size_hint()
    }
}

impl<V> ExactSizeIterator for ValuesMut<'_, V> {}

impl<V> FusedIterator for ValuesMut<'_, V> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_map_yields_nothing() {
        let map: ChainedMap<u8> = ChainedMap::with_buckets(8);
        let mut it = map.iter();
        assert_eq!(it.len(), 0);
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }

    #[test]
    fn iter_pairs_keys_with_values() {
        let mut map = ChainedMap::with_buckets(5);
        for (i, key) in ["one", "two", "three"].iter().enumerate() {
            map.put(key, i as u32 + 1);
        }
        let mut pairs: Vec<(&str, u32)> = map.iter().map(|(k, v)| (k, *v)).collect();
        pairs.sort();
        assert_eq!(pairs, vec![("one", 1), ("three", 3), ("two", 2)]);
    }

    #[test]
    fn keys_and_values_follow_iter_order() {
        let mut map = ChainedMap::with_buckets(2);
        for i in 0..9u64 {
            map.put(&i.to_string(), i * 10);
        }
        let (keys, values): (Vec<&str>, Vec<&u64>) = map.iter().unzip();
        assert_eq!(map.keys().collect::<Vec<_>>(), keys);
        assert_eq!(map.values().collect::<Vec<_>>(), values);
        assert_eq!(map.keys().len(), 9);
    }

    #[test]
    fn into_iterator_for_reference() {
        let mut map = ChainedMap::with_buckets(3);
        map.put("a", 1i64);
        map.put("b", 2);
        let mut total = 0;
        for (_, v) in &map {
            total += v;
        }
        assert_eq!(total, 3);
    }

    #[test]
    fn values_mut_follows_first_next_order() {
        let mut map = ChainedMap::with_buckets(4);
        // One key per bucket 1, 2, 3, 0, so walk order differs from
        // insertion order.
        for (i, key) in ["a", "b", "c", "d"].into_iter().enumerate() {
            map.put(key, i as u32);
        }
        let expected: Vec<u32> = map.values().copied().collect();
        assert_eq!(expected, vec![3, 0, 1, 2]);

        let via_mut: Vec<u32> = map.values_mut().map(|v| *v).collect();
        assert_eq!(via_mut, expected);
        assert_eq!(map.values_mut().len(), 4);

        let mut walked = Vec::new();
        let mut key = map.first();
        while let Some(k) = key {
            walked.push(map.get(k).copied());
            key = map.next(k);
        }
        assert_eq!(walked, expected.iter().copied().map(Some).collect::<Vec<_>>());
    }

    #[test]
    fn values_mut_writes_through_in_walk_order() {
        let mut map = ChainedMap::with_buckets(1);
        for key in ["x", "y", "z"] {
            map.put(key, 0usize);
        }
        for (rank, value) in map.values_mut().enumerate() {
            *value = rank;
        }
        // A single chain is newest first.
        assert_eq!(map.get("z"), Some(&0));
        assert_eq!(map.get("y"), Some(&1));
        assert_eq!(map.get("x"), Some(&2));
    }
}
