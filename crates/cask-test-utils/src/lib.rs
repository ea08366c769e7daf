//! Test utilities for Cask development.
//!
//! Provides cleanup observers ([`CleanupCounter`], [`CleanupLog`]), a
//! drop-counting value ([`DropProbe`]), and comparator and key fixtures in
//! [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::cell::{Cell, RefCell};
use std::fmt::Display;
use std::rc::Rc;

use cask_core::BoxedCleanup;
use indexmap::IndexMap;

/// Counts cleanup invocations across every callback it hands out.
///
/// Clones share the same counter, so the counter can be moved into a
/// container and still be read after the container is gone.
#[derive(Clone, Default)]
pub struct CleanupCounter {
    count: Rc<Cell<usize>>,
}

impl CleanupCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cleanup closure that bumps this counter.
    pub fn callback<T: 'static>(&self) -> impl FnMut(&mut T) + 'static {
        let count = Rc::clone(&self.count);
        move |_: &mut T| count.set(count.get() + 1)
    }

    /// Same as [`callback`](CleanupCounter::callback), boxed for `from_config`.
    pub fn boxed<T: 'static>(&self) -> BoxedCleanup<T> {
        Box::new(self.callback::<T>())
    }

    /// Number of cleanups run so far.
    pub fn count(&self) -> usize {
        self.count.get()
    }
}

/// Records which values were cleaned up, and how often.
///
/// Values are labelled by their `Display` text; labels keep first-seen
/// order so tests can also assert cleanup order.
#[derive(Clone, Default)]
pub struct CleanupLog {
    seen: Rc<RefCell<IndexMap<String, usize>>>,
}

impl CleanupLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cleanup closure that records each value's label.
    pub fn callback<T: Display + 'static>(&self) -> impl FnMut(&mut T) + 'static {
        let seen = Rc::clone(&self.seen);
        move |value: &mut T| {
            *seen.borrow_mut().entry(value.to_string()).or_insert(0) += 1;
        }
    }

    /// How many times a value labelled `label` was cleaned up.
    pub fn times(&self, label: &str) -> usize {
        self.seen.borrow().get(label).copied().unwrap_or(0)
    }

    /// Labels in the order they were first cleaned up.
    pub fn labels(&self) -> Vec<String> {
        self.seen.borrow().keys().cloned().collect()
    }

    /// Total cleanups across all labels.
    pub fn total(&self) -> usize {
        self.seen.borrow().values().sum()
    }

    /// Whether every recorded label was cleaned up exactly once.
    pub fn all_exactly_once(&self) -> bool {
        self.seen.borrow().values().all(|&n| n == 1)
    }
}

/// A value that counts how many times it has been dropped.
///
/// Used to check that containers hand ownership back to the allocator
/// exactly once per element, independent of cleanup callbacks.
#[derive(Debug)]
pub struct DropProbe {
    pub id: u32,
    drops: Rc<Cell<usize>>,
}

impl DropProbe {
    /// Create a probe sharing `drops` with its siblings.
    pub fn new(id: u32, drops: &Rc<Cell<usize>>) -> Self {
        Self {
            id,
            drops: Rc::clone(drops),
        }
    }
}

impl Display for DropProbe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "probe-{}", self.id)
    }
}

impl Drop for DropProbe {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}
