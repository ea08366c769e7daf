//! Bucket hashing.
//!
//! Linear-congruence accumulation over the key's bytes:
//! `h = h * MULTIPLIER + byte` in wrapping 64-bit arithmetic, reduced
//! modulo the bucket count. The multiplier affects distribution only.

/// Odd multiplier for the accumulation step.
pub const HASH_MULTIPLIER: u64 = 2_630_849_305;

/// Bucket index of `key` in a table of `nbuckets` buckets.
///
/// Pure, case-sensitive, and stable: the same key and bucket count always
/// give the same index.
///
/// # Panics
///
/// Panics if `nbuckets` is zero.
pub fn hash_key(key: &str, nbuckets: usize) -> usize {
    let code = key.bytes().fold(0u64, |acc, byte| {
        acc.wrapping_mul(HASH_MULTIPLIER)
            .wrapping_add(u64::from(byte))
    });
    (code % nbuckets as u64) as usize
}
