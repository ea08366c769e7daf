//! Slab entries: successor link, key bytes, and value in one slot.

use std::fmt;

use smallvec::SmallVec;

/// Keys of at most this many bytes are stored inside the entry itself.
pub const INLINE_KEY_BYTES: usize = 24;

type KeyBytes = SmallVec<[u8; INLINE_KEY_BYTES]>;

/// Index of an entry in the map's slab.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct EntryIndex(pub(crate) usize);

impl fmt::Display for EntryIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One key/value pair plus its chain successor.
pub(crate) struct Entry<V> {
    /// Next entry in the same bucket chain.
    pub(crate) next: Option<EntryIndex>,
    /// UTF-8 key bytes, copied from the `&str` passed to `put`.
    key: KeyBytes,
    pub(crate) value: V,
}

impl<V> Entry<V> {
    pub(crate) fn new(key: &str, value: V, next: Option<EntryIndex>) -> Self {
        Self {
            next,
            key: SmallVec::from_slice(key.as_bytes()),
            value,
        }
    }

    /// Full equality against `key`; a stored key that merely starts with
    /// `key` does not match.
    #[inline]
    pub(crate) fn key_matches(&self, key: &str) -> bool {
        self.key.as_slice() == key.as_bytes()
    }

    pub(crate) fn key_str(&self) -> &str {
        std::str::from_utf8(&self.key).expect("entry keys are copied from &str")
    }

    /// Whether the key needed its own heap buffer.
    pub(crate) fn key_spilled(&self) -> bool {
        self.key.spilled()
    }
}
