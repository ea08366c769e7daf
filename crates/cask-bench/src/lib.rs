//! Seeded workloads for benchmarking the Cask containers.
//!
//! Every generator takes a seed and draws from a ChaCha8 stream, so the
//! same seed always produces the same workload:
//!
//! - [`shuffled_values`]: a permutation of `0..n`, for sort and search
//! - [`insert_positions`]: valid positions for `n` successive inserts
//! - [`random_keys`]: distinct alphanumeric keys with lengths in a range

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::collections::HashSet;
use std::ops::RangeInclusive;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

const KEY_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// The values `0..n` in a seed-determined order.
pub fn shuffled_values(n: usize, seed: u64) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut values: Vec<i64> = (0..n as i64).collect();
    values.shuffle(&mut rng);
    values
}

/// Insertion positions for building an array of `n` elements one insert
/// at a time. Position `i` is always in `0..=i`.
pub fn insert_positions(n: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|len| rng.random_range(0..=len)).collect()
}

/// `n` distinct keys with lengths drawn from `len`.
///
/// # Panics
///
/// Panics if `len` is empty or cannot hold `n` distinct keys.
pub fn random_keys(n: usize, len: RangeInclusive<usize>, seed: u64) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut seen = HashSet::with_capacity(n);
    let mut keys = Vec::with_capacity(n);
    let mut attempts = 0usize;
    while keys.len() < n {
        attempts += 1;
        assert!(
            attempts <= n.saturating_mul(64).max(1024),
            "key space {len:?} too small for {n} distinct keys"
        );
        let key_len = rng.random_range(len.clone());
        let key: String = (0..key_len)
            .map(|_| char::from(KEY_ALPHABET[rng.random_range(0..KEY_ALPHABET.len())]))
            .collect();
        if seen.insert(key.clone()) {
            keys.push(key);
        }
    }
    keys
}
