//! Suffix search strategies.
//!
//! Both functions return an index relative to the slice they are given;
//! the caller adds the suffix start.

use std::cmp::Ordering;

use cask_core::Compare;

/// Binary search over a slice sorted under `compare`.
///
/// With duplicate matches any matching position may be returned.
pub(crate) fn binary<T, C>(sorted: &[T], key: &T, compare: &mut C) -> Option<usize>
where
    C: Compare<T>,
{
    sorted
        .binary_search_by(|item| compare.compare(key, item).reverse())
        .ok()
}

/// Linear scan for the first element equal to `key` under `compare`.
pub(crate) fn linear<T, C>(items: &[T], key: &T, compare: &mut C) -> Option<usize>
where
    C: Compare<T>,
{
    items
        .iter()
        .position(|item| compare.compare(key, item) == Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numeric(a: &i64, b: &i64) -> Ordering {
        (a - b).cmp(&0)
    }

    #[test]
    fn binary_finds_present_and_rejects_absent() {
        let items = [1i64, 3, 5, 7, 9];
        assert_eq!(binary(&items, &7, &mut numeric), Some(3));
        assert_eq!(binary(&items, &4, &mut numeric), None);
        assert_eq!(binary(&[], &4, &mut numeric), None);
    }

    #[test]
    fn linear_returns_first_match() {
        let items = [4i64, 2, 4, 2];
        assert_eq!(linear(&items, &2, &mut numeric), Some(1));
        assert_eq!(linear(&items, &8, &mut numeric), None);
    }

    #[test]
    fn both_strategies_pass_the_key_first() {
        let items = [1i64, 3, 7, 9];
        let key = 5i64;
        let mut calls = Vec::new();
        let mut recording = |a: &i64, b: &i64| {
            calls.push((*a, *b));
            numeric(a, b)
        };
        assert_eq!(binary(&items, &key, &mut recording), None);
        assert_eq!(linear(&items, &key, &mut recording), None);
        assert!(!calls.is_empty());
        assert!(calls.iter().all(|&(a, _)| a == key), "calls: {calls:?}");
    }
}
