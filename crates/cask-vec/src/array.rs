//! The contiguous growable array.

use std::fmt;

use cask_core::{fatal, require_nonzero_size, BoxedCleanup, Cleanup, Compare};
use cask_core::{ContractViolation, ResourceError};

use crate::config::ArrayConfig;
use crate::cursor::ArrayCursor;
use crate::search;

/// A contiguous, doubling array of `T`.
///
/// Elements occupy slots `[0, len)` with no gaps. `capacity` is the number
/// of slots the array has reserved and is tracked by the array itself: it
/// starts at the configured hint and only ever doubles, when an insertion
/// finds every slot in use.
///
/// Contract violations (zero-sized `T`, out-of-range index or search start,
/// stale cursor) and allocation failure are fatal; see [`cask_core::fatal`].
pub struct DynamicArray<T> {
    /// Backing storage, reserved to at least `capacity` slots.
    data: Vec<T>,
    /// Logical capacity in elements.
    capacity: usize,
    /// Structural-mutation counter for cursor validation.
    epoch: u64,
    /// Run once per live element on dispose/drop.
    cleanup: Option<BoxedCleanup<T>>,
}

impl<T> DynamicArray<T> {
    /// Create an empty array with the default capacity and no cleanup.
    #[track_caller]
    pub fn new() -> Self {
        Self::from_config(&ArrayConfig::default(), None)
    }

    /// Create an empty array with room for `capacity_hint` elements.
    ///
    /// A hint of `0` selects [`ArrayConfig::DEFAULT_CAPACITY`].
    #[track_caller]
    pub fn with_capacity(capacity_hint: usize) -> Self {
        Self::from_config(&ArrayConfig::new(capacity_hint), None)
    }

    /// Create an empty array that runs `cleanup` on each element it discards.
    #[track_caller]
    pub fn with_cleanup(capacity_hint: usize, cleanup: impl Cleanup<T> + 'static) -> Self {
        Self::from_config(&ArrayConfig::new(capacity_hint), Some(Box::new(cleanup)))
    }

    /// Create an empty array from a config and an optional cleanup callback.
    ///
    /// # Panics
    ///
    /// Panics if `T` is zero-sized or the initial buffer cannot be allocated.
    #[track_caller]
    pub fn from_config(config: &ArrayConfig, cleanup: Option<BoxedCleanup<T>>) -> Self {
        require_nonzero_size::<T>();
        let capacity = config.initial_capacity();
        let mut data = Vec::new();
        reserve_slots(&mut data, capacity);
        Self {
            data,
            capacity,
            epoch: 0,
            cleanup,
        }
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the array holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of element slots currently reserved.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Bytes per element.
    #[inline]
    pub fn element_size(&self) -> usize {
        std::mem::size_of::<T>()
    }

    /// Current structural-mutation epoch.
    #[inline]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Reference to the element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[track_caller]
    pub fn nth(&self, index: usize) -> &T {
        match self.data.get(index) {
            Some(element) => element,
            None => fatal(ContractViolation::IndexOutOfRange {
                index,
                len: self.data.len(),
            }),
        }
    }

    /// Mutable reference to the element at `index`.
    ///
    /// Writing through it replaces the element in place without cleanup.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[track_caller]
    pub fn nth_mut(&mut self, index: usize) -> &mut T {
        let len = self.data.len();
        match self.data.get_mut(index) {
            Some(element) => element,
            None => fatal(ContractViolation::IndexOutOfRange { index, len }),
        }
    }

    /// Reference to the element at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Mutable reference to the element at `index`, or `None` if out of range.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    /// Insert `element` at `index`, shifting `[index, len)` one slot right.
    ///
    /// `index == len()` appends. When every slot is in use the capacity
    /// doubles first. All cursors issued before this call become stale.
    ///
    /// # Panics
    ///
    /// Panics if `index > len()` or the grown buffer cannot be allocated.
    #[track_caller]
    pub fn insert(&mut self, element: T, index: usize) {
        let len = self.data.len();
        if index > len {
            fatal(ContractViolation::IndexOutOfRange { index, len });
        }
        if len == self.capacity {
            self.grow();
        }
        // Capacity is already reserved, so this is an overlapping move of
        // the tail and never a reallocation.
        self.data.insert(index, element);
        self.epoch += 1;
    }

    /// Append `element` after the last element.
    #[track_caller]
    pub fn append(&mut self, element: T) {
        self.insert(element, self.data.len());
    }

    /// Search `[start, len)` for an element equal to `key` under `compare`.
    ///
    /// With `sorted == true` this is a binary search and the caller
    /// guarantees the suffix is sorted under `compare`; otherwise it scans
    /// linearly and returns the first match. The result is an absolute
    /// index. `None` means not found.
    ///
    /// # Panics
    ///
    /// Panics if `start > len()`.
    #[track_caller]
    pub fn search<C>(&self, key: &T, mut compare: C, start: usize, sorted: bool) -> Option<usize>
    where
        C: Compare<T>,
    {
        let len = self.data.len();
        if start > len {
            fatal(ContractViolation::StartOutOfRange { start, len });
        }
        let suffix = &self.data[start..];
        let found = if sorted {
            search::binary(suffix, key, &mut compare)
        } else {
            search::linear(suffix, key, &mut compare)
        };
        found.map(|offset| start + offset)
    }

    /// Sort all elements in place under `compare`. Not stable.
    pub fn sort<C>(&mut self, mut compare: C)
    where
        C: Compare<T>,
    {
        self.data.sort_unstable_by(|a, b| compare.compare(a, b));
        self.epoch += 1;
    }

    /// Cursor at element 0, or `None` if the array is empty.
    pub fn first(&self) -> Option<ArrayCursor> {
        if self.data.is_empty() {
            None
        } else {
            Some(ArrayCursor::new(0, self.epoch))
        }
    }

    /// Cursor after `cursor`, or `None` if `cursor` is at the last element.
    ///
    /// # Panics
    ///
    /// Panics if `cursor` is stale or does not point at a live element.
    #[track_caller]
    pub fn next(&self, cursor: ArrayCursor) -> Option<ArrayCursor> {
        self.check_cursor(cursor);
        let next = cursor.advanced();
        (next.index < self.data.len()).then_some(next)
    }

    /// Element at `cursor`.
    ///
    /// # Panics
    ///
    /// Panics if `cursor` is stale or does not point at a live element.
    #[track_caller]
    pub fn at(&self, cursor: ArrayCursor) -> &T {
        self.check_cursor(cursor);
        &self.data[cursor.index]
    }

    /// Mutable element at `cursor`.
    ///
    /// # Panics
    ///
    /// Panics if `cursor` is stale or does not point at a live element.
    #[track_caller]
    pub fn at_mut(&mut self, cursor: ArrayCursor) -> &mut T {
        self.check_cursor(cursor);
        &mut self.data[cursor.index]
    }

    /// Iterate over the live elements in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Mutably iterate over the live elements in index order.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// The live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Run cleanup over every live element, then release the buffer.
    ///
    /// Equivalent to dropping the array; provided so disposal is explicit
    /// at call sites that care about when cleanup runs.
    pub fn dispose(mut self) {
        self.run_cleanup();
    }

    #[track_caller]
    fn check_cursor(&self, cursor: ArrayCursor) {
        if cursor.epoch != self.epoch {
            fatal(ContractViolation::StaleCursor {
                cursor_epoch: cursor.epoch,
                current_epoch: self.epoch,
            });
        }
        if cursor.index >= self.data.len() {
            fatal(ContractViolation::IndexOutOfRange {
                index: cursor.index,
                len: self.data.len(),
            });
        }
    }

    /// Double the reserved capacity, preserving every element.
    #[cold]
    #[inline(never)]
    #[track_caller]
    fn grow(&mut self) {
        let old_capacity = self.capacity;
        let new_capacity = match old_capacity.checked_mul(2) {
            Some(c) => c,
            None => fatal(ResourceError::AllocationFailed {
                requested_bytes: usize::MAX,
            }),
        };
        reserve_slots(&mut self.data, new_capacity);
        self.capacity = new_capacity;
        tracing::debug!(
            old_capacity,
            new_capacity,
            element_size = self.element_size(),
            "dynamic array grown"
        );
    }

    /// Invoke cleanup once per live element. The callback is taken out so
    /// a later drop cannot run it a second time.
    fn run_cleanup(&mut self) {
        let Some(mut cleanup) = self.cleanup.take() else {
            return;
        };
        for element in self.data.iter_mut() {
            cleanup.cleanup(element);
        }
        tracing::debug!(cleaned = self.data.len(), "dynamic array disposed");
    }
}

/// Reserve storage for exactly `slots` elements in total.
#[track_caller]
fn reserve_slots<T>(data: &mut Vec<T>, slots: usize) {
    let additional = slots.saturating_sub(data.len());
    if data.try_reserve_exact(additional).is_err() {
        fatal(ResourceError::AllocationFailed {
            requested_bytes: slots.saturating_mul(std::mem::size_of::<T>()),
        });
    }
}

impl<T> Drop for DynamicArray<T> {
    fn drop(&mut self) {
        self.run_cleanup();
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("len", &self.len())
            .field("capacity", &self.capacity)
            .field("element_size", &self.element_size())
            .field("epoch", &self.epoch)
            .field("cleanup", &self.cleanup.is_some())
            .finish()
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.append(element);
        }
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynamicArray<T> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::cmp::Ordering;
    use std::rc::Rc;

    fn ascending(a: &i32, b: &i32) -> Ordering {
        (a - b).cmp(&0)
    }

    #[test]
    fn new_array_is_empty_with_default_capacity() {
        let arr: DynamicArray<u64> = DynamicArray::new();
        assert_eq!(arr.len(), 0);
        assert!(arr.is_empty());
        assert_eq!(arr.capacity(), ArrayConfig::DEFAULT_CAPACITY);
        assert_eq!(arr.element_size(), 8);
        assert!(arr.first().is_none());
    }

    #[test]
    #[should_panic(expected = "has size zero")]
    fn zero_sized_element_is_fatal() {
        let _arr: DynamicArray<()> = DynamicArray::new();
    }

    #[test]
    fn insert_at_front_middle_and_end() {
        let mut arr = DynamicArray::with_capacity(4);
        arr.append(2);
        arr.insert(0, 0);
        arr.insert(1, 1);
        arr.insert(3, 3);
        assert_eq!(arr.as_slice(), &[0, 1, 2, 3]);
    }

    #[test]
    fn growth_doubles_capacity() {
        let mut arr = DynamicArray::with_capacity(2);
        arr.append(1u8);
        arr.append(2);
        assert_eq!(arr.capacity(), 2);
        arr.append(3);
        assert_eq!(arr.capacity(), 4);
        arr.extend([4, 5]);
        assert_eq!(arr.capacity(), 8);
        assert_eq!(arr.as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    #[should_panic(expected = "index 2 out of range for length 1")]
    fn insert_past_end_is_fatal() {
        let mut arr = DynamicArray::new();
        arr.append(1u32);
        arr.insert(9, 2);
    }

    #[test]
    #[should_panic(expected = "index 1 out of range for length 1")]
    fn nth_past_end_is_fatal() {
        let mut arr = DynamicArray::new();
        arr.append(1u32);
        arr.nth(1);
    }

    #[test]
    fn nth_mut_writes_in_place() {
        let mut arr = DynamicArray::new();
        arr.extend([10u32, 20]);
        *arr.nth_mut(1) = 21;
        assert_eq!(*arr.nth(1), 21);
        assert_eq!(arr.get(2), None);
    }

    #[test]
    fn search_linear_and_binary_from_start() {
        let mut arr = DynamicArray::new();
        arr.extend([5, 1, 4, 1]);
        assert_eq!(arr.search(&1, ascending, 0, false), Some(1));
        assert_eq!(arr.search(&1, ascending, 2, false), Some(3));
        assert_eq!(arr.search(&9, ascending, 0, false), None);

        arr.sort(ascending);
        assert_eq!(arr.as_slice(), &[1, 1, 4, 5]);
        assert_eq!(arr.search(&5, ascending, 0, true), Some(3));
        assert_eq!(arr.search(&4, ascending, 2, true), Some(2));
        assert_eq!(arr.search(&1, ascending, 2, true), None);
        assert_eq!(arr.search(&4, ascending, 4, true), None);
    }

    #[test]
    #[should_panic(expected = "search start 3 out of range for length 2")]
    fn search_start_past_end_is_fatal() {
        let mut arr = DynamicArray::new();
        arr.extend([1, 2]);
        arr.search(&1, ascending, 3, false);
    }

    #[test]
    fn cursor_walk_visits_every_element() {
        let mut arr = DynamicArray::new();
        arr.extend([7u16, 8, 9]);
        let mut seen = Vec::new();
        let mut cursor = arr.first();
        while let Some(c) = cursor {
            seen.push(*arr.at(c));
            cursor = arr.next(c);
        }
        assert_eq!(seen, vec![7, 8, 9]);
    }

    #[test]
    fn cursor_at_mut_writes_through() {
        let mut arr = DynamicArray::new();
        arr.extend([1u32, 2]);
        let c = arr.first().unwrap();
        *arr.at_mut(c) = 100;
        assert_eq!(*arr.nth(0), 100);
    }

    #[test]
    #[should_panic(expected = "stale cursor")]
    fn cursor_from_before_insert_is_stale() {
        let mut arr = DynamicArray::new();
        arr.append(1u32);
        let c = arr.first().unwrap();
        arr.append(2);
        arr.next(c);
    }

    #[test]
    fn epoch_advances_on_structural_mutation_only() {
        let mut arr = DynamicArray::new();
        assert_eq!(arr.epoch(), 0);
        arr.append(3);
        arr.insert(1, 0);
        assert_eq!(arr.epoch(), 2);
        *arr.nth_mut(0) = 4;
        assert_eq!(arr.epoch(), 2);
        arr.sort(ascending);
        assert_eq!(arr.epoch(), 3);
    }

    #[test]
    fn dispose_cleans_each_live_element_in_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let mut arr: DynamicArray<u32> =
            DynamicArray::with_cleanup(2, move |v: &mut u32| sink.borrow_mut().push(*v));
        arr.extend([1, 2, 3]);
        arr.dispose();
        assert_eq!(*log.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn drop_runs_cleanup_once() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        {
            let mut arr: DynamicArray<String> =
                DynamicArray::with_cleanup(0, move |v: &mut String| sink.borrow_mut().push(v.clone()));
            arr.append("a".to_string());
            arr.append("b".to_string());
        }
        assert_eq!(*log.borrow(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn debug_reports_shape_not_contents() {
        let mut arr = DynamicArray::with_capacity(4);
        arr.append(1u8);
        let s = format!("{arr:?}");
        assert!(s.contains("len: 1"));
        assert!(s.contains("capacity: 4"));
        assert!(s.contains("cleanup: false"));
    }
}
