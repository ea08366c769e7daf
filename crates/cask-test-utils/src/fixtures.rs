//! Reusable comparators and key sets.
//!
//! - [`ascending`] / [`descending`]: total orders for any `Ord` element.
//! - [`numeric_difference`]: the classic `a - b` comparator on integers.
//! - [`sequential_keys`]: distinct, deterministic string keys.

use std::cmp::Ordering;

/// Ascending order under `Ord`.
pub fn ascending<T: Ord>(a: &T, b: &T) -> Ordering {
    a.cmp(b)
}

/// Descending order under `Ord`.
pub fn descending<T: Ord>(a: &T, b: &T) -> Ordering {
    b.cmp(a)
}

/// Three-way comparison by the sign of `a - b`.
pub fn numeric_difference(a: &i64, b: &i64) -> Ordering {
    (a - b).cmp(&0)
}

/// `n` distinct keys of the form `"{prefix}{i}"`.
pub fn sequential_keys(prefix: &str, n: usize) -> Vec<String> {
    (0..n).map(|i| format!("{prefix}{i}")).collect()
}
