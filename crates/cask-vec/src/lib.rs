//! Contiguous growable array of fixed-size elements.
//!
//! [`DynamicArray`] owns one contiguous buffer, grows it by doubling when
//! full, and runs an optional [`Cleanup`](cask_core::Cleanup) callback over
//! every live element when disposed.
//!
//! # Invalidation
//!
//! Every structural mutation (`insert`, `append`, `sort`) advances the
//! array's epoch. Borrowed element references cannot outlive a mutation
//! (the borrow checker rejects it); [`ArrayCursor`]s can, so each cursor
//! records the epoch it was issued in and the array rejects cursors from
//! older epochs as a contract violation.
//!
//! ```rust
//! use cask_vec::DynamicArray;
//!
//! let mut arr = DynamicArray::with_capacity(2);
//! for v in [3u32, 1, 2] {
//!     arr.append(v);
//! }
//! assert_eq!(arr.capacity(), 4);
//!
//! arr.sort(|a: &u32, b: &u32| a.cmp(b));
//! let mut seen = Vec::new();
//! let mut cursor = arr.first();
//! while let Some(c) = cursor {
//!     seen.push(*arr.at(c));
//!     cursor = arr.next(c);
//! }
//! assert_eq!(seen, vec![1, 2, 3]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod config;
pub mod cursor;
mod search;

pub use array::DynamicArray;
pub use config::ArrayConfig;
pub use cursor::ArrayCursor;
