//! Callback protocols shared by both containers.
//!
//! Both traits have blanket implementations for closures, so callers
//! normally pass `|v: &mut T| ...` or `|a: &T, b: &T| a.cmp(b)` directly.

use std::cmp::Ordering;

/// Per-element cleanup, run once for every element or value a container
/// discards.
///
/// Invoked during disposal (and drop) and when a map value is replaced by
/// `put`. The callback only sees the element; it cannot re-enter the
/// container and must not stash the reference.
pub trait Cleanup<T> {
    /// Release whatever `value` holds outside the container.
    fn cleanup(&mut self, value: &mut T);
}

impl<T, F> Cleanup<T> for F
where
    F: FnMut(&mut T),
{
    fn cleanup(&mut self, value: &mut T) {
        self(value)
    }
}

/// Owned, type-erased cleanup callback as stored by the containers.
pub type BoxedCleanup<T> = Box<dyn Cleanup<T>>;

/// Three-way comparator used by array search and sort.
///
/// Must be a consistent total order when the caller asserts that an array
/// is sorted under it; otherwise binary search results are unspecified.
pub trait Compare<T: ?Sized> {
    /// Order `a` relative to `b`.
    fn compare(&mut self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: FnMut(&T, &T) -> Ordering,
{
    fn compare(&mut self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}
