//! Core types and traits for the Cask containers.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! pieces shared by `DynamicArray` (`cask-vec`) and `ChainedMap`
//! (`cask-map`): the contract violation and resource error types, the
//! [`fatal`] reporting path, and the [`Cleanup`] and [`Compare`] callback
//! protocols.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod fatal;
pub mod traits;

pub use error::{CaskError, ContractViolation, ResourceError};
pub use fatal::{fatal, require_nonzero_size};
pub use traits::{BoxedCleanup, Cleanup, Compare};
