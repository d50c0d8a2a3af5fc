//! smcHash Comprehensive Criterion Benchmark
//!
//! Statistically rigorous performance measurements across all scenarios.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::prelude::*;
use rayon::prelude::*;
use std::hint::black_box;

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

// =============================================================================
// BENCHMARK 1: LATENCY
// =============================================================================

/// Hot path latency for small inputs (Hash Map keys, IDs), one size per path edge.
fn bench_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Latency");

    let sizes = [
        (3, "3B"),
        (8, "8B"),
        (16, "16B"),
        (17, "17B"),
        (64, "64B"),
        (128, "128B"),
        (129, "129B"),
        (256, "256B"),
        (KB, "1KB"),
    ];

    for (size, name) in sizes {
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::new("smchash", name),
            &input,
            |b, data| b.iter(|| smchash::hash(black_box(data))),
        );
        group.bench_with_input(
            criterion::BenchmarkId::new("xxh3", name),
            &input,
            |b, data| b.iter(|| xxhash_rust::xxh3::xxh3_64(black_box(data))),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: BULK THROUGHPUT
// =============================================================================

/// Throughput from L1-resident buffers up to RAM.
fn bench_bulk(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Bulk");
    group.sample_size(50);

    let sizes = [
        (4 * KB, "4KB"),
        (64 * KB, "64KB"),
        (512 * KB, "512KB"),
        (4 * MB, "4MB"),
        (64 * MB, "64MB"),
    ];

    for (size, name) in sizes {
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::new("smchash", name),
            &input,
            |b, data| b.iter(|| smchash::hash(black_box(data))),
        );
        group.bench_with_input(
            criterion::BenchmarkId::new("xxh3", name),
            &input,
            |b, data| b.iter(|| xxhash_rust::xxh3::xxh3_64(black_box(data))),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: HASH MAP KEYS
// =============================================================================

/// Integer and short-string keys through `SmcHashMap`.
fn bench_hash_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-HashMap");

    let mut state = 1u64;
    let keys: Vec<u64> = (0..10_000).map(|_| smchash::rand(&mut state)).collect();
    group.throughput(Throughput::Elements(keys.len() as u64));

    group.bench_function("insert-u64", |b| {
        b.iter(|| {
            let mut map = smchash::SmcHashMap::default();
            for &k in &keys {
                map.insert(black_box(k), ());
            }
            map
        })
    });

    let words: Vec<String> = keys.iter().map(|k| format!("key-{k:x}")).collect();
    group.bench_function("insert-str", |b| {
        b.iter(|| {
            let mut map = smchash::SmcHashMap::default();
            for w in &words {
                map.insert(black_box(w.as_str()), ());
            }
            map
        })
    });
    group.finish();
}

// =============================================================================
// BENCHMARK 4: THREAD SCALING
// =============================================================================

/// Many independent small inputs hashed concurrently (1 to N threads).
fn bench_thread_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("4-Thread-Scaling");
    group.sample_size(30);

    let records: Vec<Vec<u8>> = (0..100_000)
        .map(|i| {
            let mut rec = vec![0u8; 32 + i % 200];
            rand::rng().fill(&mut rec[..]);
            rec
        })
        .collect();
    let total: usize = records.iter().map(Vec::len).sum();
    group.throughput(Throughput::Bytes(total as u64));

    let max_threads = num_cpus::get();
    let thread_counts: Vec<usize> = [1, 2, 4, 8, 16, 32]
        .iter()
        .copied()
        .filter(|&t| t <= max_threads)
        .collect();

    for threads in thread_counts {
        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(format!("{}threads", threads)),
            &threads,
            |b, &t| {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(t)
                    .build()
                    .unwrap();
                pool.install(|| {
                    b.iter(|| {
                        records
                            .par_iter()
                            .map(|r| smchash::hash(black_box(r)))
                            .reduce(|| 0, |a, b| a ^ b)
                    })
                });
            },
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 5: SPECIAL OPERATIONS
// =============================================================================

/// PRNG, primality and secret validation.
fn bench_special_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("5-Special-Operations");

    group.bench_function("rand", |b| {
        let mut state = 42u64;
        b.iter(|| smchash::rand(black_box(&mut state)))
    });

    // Largest 64-bit prime: every witness runs to completion.
    group.bench_function("is_prime-2^64-59", |b| {
        b.iter(|| smchash::is_prime(black_box(0xFFFF_FFFF_FFFF_FFC5)))
    });

    // Odd composite surviving trial division: usually rejected at base 2.
    group.bench_function("is_prime-composite", |b| {
        b.iter(|| smchash::is_prime(black_box(0x9ad1_e8e2_aa5a_5c4b)))
    });

    let secret = smchash::make_secret(42);
    group.bench_function("validate_secret", |b| {
        b.iter(|| smchash::validate_secret(black_box(&secret)))
    });

    group.finish();
}

// =============================================================================
// MAIN
// =============================================================================

criterion_group!(
    benches,
    bench_latency,
    bench_bulk,
    bench_hash_map,
    bench_thread_scaling,
    bench_special_operations,
);

criterion_main!(benches);
