//! Criterion micro-benchmarks for chained map insertion, lookup, and traversal.

use std::hint::black_box;

use cask_bench::random_keys;
use cask_map::ChainedMap;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const KEY_COUNT: usize = 10_000;

fn filled_map(keys: &[String], buckets: usize) -> ChainedMap<u64> {
    let mut map = ChainedMap::with_buckets(buckets);
    for (i, key) in keys.iter().enumerate() {
        map.put(key, i as u64);
    }
    map
}

/// Benchmark: insert 10K short keys at several bucket counts. With no
/// rehash, fewer buckets means longer chains.
fn bench_put(c: &mut Criterion) {
    let keys = random_keys(KEY_COUNT, 4..=16, 42);
    let mut group = c.benchmark_group("map_put_10k");
    group.throughput(Throughput::Elements(KEY_COUNT as u64));
    for buckets in [64, 1023, 16_381] {
        group.bench_with_input(BenchmarkId::from_parameter(buckets), &buckets, |b, &n| {
            b.iter(|| black_box(filled_map(&keys, n).len()));
        });
    }
    group.finish();
}

/// Benchmark: inline vs spilled key storage on insert.
fn bench_put_key_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("map_put_key_length");
    group.throughput(Throughput::Elements(KEY_COUNT as u64));
    for (label, lengths) in [("inline", 8..=20), ("spilled", 40..=80)] {
        let keys = random_keys(KEY_COUNT, lengths, 7);
        group.bench_function(label, |b| {
            b.iter(|| black_box(filled_map(&keys, 1023).len()));
        });
    }
    group.finish();
}

/// Benchmark: 10K lookups that all hit, and 10K that all miss.
fn bench_get(c: &mut Criterion) {
    let keys = random_keys(2 * KEY_COUNT, 4..=16, 42);
    let (present, absent) = keys.split_at(KEY_COUNT);
    let map = filled_map(present, 1023);

    let mut group = c.benchmark_group("map_get_10k");
    group.throughput(Throughput::Elements(KEY_COUNT as u64));
    group.bench_function("hit", |b| {
        b.iter(|| {
            for key in present {
                black_box(map.get(key));
            }
        });
    });
    group.bench_function("miss", |b| {
        b.iter(|| {
            for key in absent {
                black_box(map.get(key));
            }
        });
    });
    group.finish();
}

/// Benchmark: full traversal through `first`/`next` vs the iterator.
/// `next` rehashes its argument, so the protocol walk is the slower one.
fn bench_traversal(c: &mut Criterion) {
    let keys = random_keys(KEY_COUNT, 4..=16, 42);
    let map = filled_map(&keys, 1023);

    let mut group = c.benchmark_group("map_walk_10k");
    group.bench_function("first_next", |b| {
        b.iter(|| {
            let mut visited = 0usize;
            let mut key = map.first();
            while let Some(k) = key {
                visited += 1;
                key = map.next(k);
            }
            black_box(visited);
        });
    });
    group.bench_function("iter", |b| {
        b.iter(|| black_box(map.iter().map(|(_, v)| *v).sum::<u64>()));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_put,
    bench_put_key_length,
    bench_get,
    bench_traversal,
);
criterion_main!(benches);
