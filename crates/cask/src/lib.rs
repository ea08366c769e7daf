//! Cask: a type-generic dynamic array and a fixed-bucket chained hash map,
//! both with caller-supplied cleanup callbacks.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Cask sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use cask::prelude::*;
//!
//! let mut names = DynamicArray::with_capacity(4);
//! for name in ["pear", "apple", "fig"] {
//!     names.append(name.to_string());
//! }
//! let by_name = |a: &String, b: &String| a.cmp(b);
//! names.sort(by_name);
//! assert_eq!(names.search(&"fig".to_string(), by_name, 0, true), Some(1));
//!
//! let mut lengths = ChainedMap::with_buckets(16);
//! for name in &names {
//!     lengths.put(name, name.len());
//! }
//! assert_eq!(lengths.get("apple"), Some(&5));
//! assert_eq!(lengths.len(), 3);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `cask-core` | Error types, `fatal`, `Cleanup` and `Compare` traits |
//! | [`vec`] | `cask-vec` | `DynamicArray`, `ArrayConfig`, `ArrayCursor` |
//! | [`map`] | `cask-map` | `ChainedMap`, `MapConfig`, `MapStats`, `hash_key` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Error types and callback traits (`cask-core`).
///
/// Contract violations and allocation failures are reported through
/// [`types::fatal`], which logs and panics.
pub use cask_core as types;

/// Contiguous doubling array (`cask-vec`).
pub use cask_vec as vec;

/// Fixed-bucket chained hash map (`cask-map`).
///
/// [`map::ChainedMap`] never rehashes; pick the bucket count up front with
/// [`map::MapConfig`].
pub use cask_map as map;

/// Common imports for typical Cask usage.
///
/// ```rust
/// use cask::prelude::*;
/// ```
pub mod prelude {
    // Containers
    pub use cask_map::ChainedMap;
    pub use cask_vec::{ArrayCursor, DynamicArray};

    // Configuration
    pub use cask_map::MapConfig;
    pub use cask_vec::ArrayConfig;

    // Callbacks
    pub use cask_core::{Cleanup, Compare};
}
