//! Error types for the Cask containers.
//!
//! There are two classes and no recoverable path: a caller that breaks an
//! operation's contract gets a [`ContractViolation`], and a container that
//! cannot obtain memory gets a [`ResourceError`]. Both are reported through
//! [`fatal`](crate::fatal::fatal). Not-found results are `Option::None`,
//! never errors.

use std::error::Error;
use std::fmt;

/// A programming-contract violation by the caller of a container operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContractViolation {
    /// The element or value type has size zero.
    ZeroSizedElement {
        /// `std::any::type_name` of the offending type.
        type_name: &'static str,
    },
    /// An element index outside `[0, len)` (or `[0, len]` for insertion).
    IndexOutOfRange {
        /// The index that was passed.
        index: usize,
        /// Number of live elements at the time of the call.
        len: usize,
    },
    /// A search start index greater than the element count.
    StartOutOfRange {
        /// The start index that was passed.
        start: usize,
        /// Number of live elements at the time of the call.
        len: usize,
    },
    /// A cursor issued before the most recent structural mutation.
    StaleCursor {
        /// Epoch recorded in the cursor.
        cursor_epoch: u64,
        /// Current epoch of the array.
        current_epoch: u64,
    },
    /// A key passed to `next` that is not stored in the map.
    UnknownKey {
        /// The key that was passed.
        key: String,
    },
}

impl fmt::Display for ContractViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroSizedElement { type_name } => {
                write!(f, "element type {type_name} has size zero")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::StartOutOfRange { start, len } => {
                write!(f, "search start {start} out of range for length {len}")
            }
            Self::StaleCursor {
                cursor_epoch,
                current_epoch,
            } => {
                write!(
                    f,
                    "stale cursor: issued at epoch {cursor_epoch}, array is at epoch {current_epoch}"
                )
            }
            Self::UnknownKey { key } => write!(f, "key {key:?} is not in the map"),
        }
    }
}

impl Error for ContractViolation {}

/// A container could not obtain the memory it needs to keep its invariants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResourceError {
    /// The allocator refused a reservation.
    AllocationFailed {
        /// Size of the reservation in bytes (saturated on overflow).
        requested_bytes: usize,
    },
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested_bytes } => {
                write!(f, "allocation of {requested_bytes} bytes failed")
            }
        }
    }
}

impl Error for ResourceError {}

/// Either error class, as carried by a [`fatal`](crate::fatal::fatal) panic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CaskError {
    /// The caller broke an operation's contract.
    Contract(ContractViolation),
    /// The container ran out of memory.
    Resource(ResourceError),
}

impl fmt::Display for CaskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Contract(e) => write!(f, "contract violation: {e}"),
            Self::Resource(e) => write!(f, "resource exhaustion: {e}"),
        }
    }
}

impl Error for CaskError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Contract(e) => Some(e),
            Self::Resource(e) => Some(e),
        }
    }
}

impl From<ContractViolation> for CaskError {
    fn from(e: ContractViolation) -> Self {
        Self::Contract(e)
    }
}

impl From<ResourceError> for CaskError {
    fn from(e: ResourceError) -> Self {
        Self::Resource(e)
    }
}
