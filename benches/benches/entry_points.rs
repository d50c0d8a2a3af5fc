//! Entry Point Comparison Benchmark
//!
//! Compares the public entry points against the kernel they share, to
//! confirm the wrappers and the `Secret` indirection cost nothing. Also
//! times the pieces of secret generation.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use smchash::{is_prime, kernels, make_secret, validate_secret, Secret, SECRET};
use std::hint::black_box;

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_entry_points(c: &mut Criterion) {
    let mut group = c.benchmark_group("smcHash Entry Points");

    // Scenarios:
    // - Small (7B): short path
    // - Medium (100B): 64/32/16-byte strides
    // - Large (256KB): 8-lane bulk loop
    let sizes = [7, 100, 256 * 1024];
    let secret = Secret::DEFAULT;

    for size in sizes {
        let input = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        // 1. Default seed and table
        group.bench_function(format!("hash - {size} bytes"), |b| {
            b.iter(|| smchash::hash(black_box(&input)));
        });

        // 2. Caller seed
        group.bench_function(format!("hash_seeded - {size} bytes"), |b| {
            b.iter(|| smchash::hash_seeded(black_box(&input), black_box(7)));
        });

        // 3. Caller table passed by reference
        group.bench_function(format!("hash_with_secret - {size} bytes"), |b| {
            b.iter(|| smchash::hash_with_secret(black_box(&input), black_box(7), &SECRET));
        });

        // 4. Through the Secret wrapper
        group.bench_function(format!("Secret::hash - {size} bytes"), |b| {
            b.iter(|| secret.hash(black_box(&input), black_box(7)));
        });

        // 5. Kernel directly
        group.bench_function(format!("kernel - {size} bytes"), |b| {
            b.iter(|| {
                kernels::portable::oneshot(black_box(&input), black_box(7), &SECRET, SECRET[2])
            });
        });
    }
    group.finish();
}

fn bench_secret_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("smcHash Secret Generation");
    let table = make_secret(42);

    group.bench_function("rand", |b| {
        let mut seed = 42u64;
        b.iter(|| smchash::rand(black_box(&mut seed)));
    });

    // 64-bit prime with 32 bits set: the full witness set runs.
    group.bench_function("is_prime - accepted word", |b| {
        b.iter(|| is_prime(black_box(table[0])));
    });

    group.bench_function("validate_secret", |b| {
        b.iter(|| validate_secret(black_box(&table)));
    });

    group.sample_size(10);
    group.bench_function("make_secret - seed 42", |b| {
        b.iter(|| make_secret(black_box(42)));
    });
    group.finish();
}

criterion_group!(benches, bench_entry_points, bench_secret_generation);
criterion_main!(benches);
