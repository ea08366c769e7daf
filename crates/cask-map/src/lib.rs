//! String-keyed hash map with a fixed bucket table.
//!
//! [`ChainedMap`] hashes each key into one of a fixed number of buckets
//! (chosen at creation, never rehashed) and keeps a singly-linked chain of
//! entries per bucket. New keys go to the head of their chain.
//!
//! # Layout
//!
//! ```text
//! ChainedMap<V>
//! ├── buckets: [Option<EntryIndex>; nbuckets]   (chain heads)
//! └── entries: Vec<Entry<V>>                     (slab, one slot per key)
//!     └── Entry { next: Option<EntryIndex>, key: inline bytes, value: V }
//! ```
//!
//! Each entry bundles its successor link, key, and value in one slab slot.
//! Keys up to [`INLINE_KEY_BYTES`] long live inside the slot; longer keys
//! spill to their own heap buffer. Chain links are slab indices, so
//! entries never point at each other's memory.
//!
//! ```rust
//! use cask_map::ChainedMap;
//!
//! let mut map = ChainedMap::with_buckets(4);
//! map.put("a", 1u32);
//! map.put("b", 2);
//! map.put("a", 3);
//! assert_eq!(map.len(), 2);
//! assert_eq!(map.get("a"), Some(&3));
//!
//! let mut keys = Vec::new();
//! let mut key = map.first();
//! while let Some(k) = key {
//!     keys.push(k.to_string());
//!     key = map.next(k);
//! }
//! keys.sort();
//! assert_eq!(keys, ["a", "b"]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
mod entry;
pub mod hash;
pub mod iter;
pub mod map;
pub mod stats;

pub use config::MapConfig;
pub use entry::INLINE_KEY_BYTES;
pub use hash::{hash_key, HASH_MULTIPLIER};
pub use map::ChainedMap;
pub use stats::MapStats;
