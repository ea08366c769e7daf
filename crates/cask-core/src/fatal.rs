//! Fatal reporting for contract violations and resource exhaustion.
//!
//! Neither error class is recoverable: the container cannot continue with
//! its invariants broken. [`fatal`] logs the diagnostic through `tracing`
//! and then panics with it, so the panic message and the log line agree.

use crate::error::{CaskError, ContractViolation};

/// Report `err` and abort the current operation by panicking.
///
/// The panic location is the caller's (`#[track_caller]`), which points at
/// the container method that detected the violation.
#[cold]
#[track_caller]
pub fn fatal(err: impl Into<CaskError>) -> ! {
    let err = err.into();
    tracing::error!(error = %err, "container operation aborted");
    panic!("{err}");
}

/// Return `size_of::<T>()`, or report [`ContractViolation::ZeroSizedElement`].
///
/// Containers call this at creation: the fixed element size they account
/// for must be nonzero.
#[track_caller]
pub fn require_nonzero_size<T>() -> usize {
    let size = std::mem::size_of::<T>();
    if size == 0 {
        fatal(ContractViolation::ZeroSizedElement {
            type_name: std::any::type_name::<T>(),
        });
    }
    size
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ResourceError;

    #[test]
    fn nonzero_size_is_returned() {
        assert_eq!(require_nonzero_size::<u32>(), 4);
        assert_eq!(require_nonzero_size::<[u8; 3]>(), 3);
    }

    #[test]
    #[should_panic(expected = "contract violation: element type () has size zero")]
    fn zero_size_is_fatal() {
        require_nonzero_size::<()>();
    }

    #[test]
    #[should_panic(expected = "resource exhaustion: allocation of 8 bytes failed")]
    fn fatal_panics_with_display_text() {
        fatal(ResourceError::AllocationFailed { requested_bytes: 8 });
    }
}
