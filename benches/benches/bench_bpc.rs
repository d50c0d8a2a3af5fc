//! Bytes-per-Cycle (bpC) Benchmark: smcHash
//!
//! Measures true algorithmic efficiency using hardware cycle counters (RDTSC).

#![allow(unsafe_code)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::unwrap_used)]

use rayon::prelude::*;
use std::arch::x86_64::_rdtsc;
use std::hint::black_box;

// =============================================================================
// UTILITIES
// =============================================================================

/// Measure RDTSC overhead to subtract from measurements.
fn measure_overhead(iterations: u64) -> f64 {
    let start = unsafe { _rdtsc() };
    for _ in 0..iterations {
        black_box(0);
    }
    let end = unsafe { _rdtsc() };
    (end - start) as f64 / iterations as f64
}

/// Average cycles per call of `func` on `input`.
fn measure(input: &[u8], iterations: u64, func: fn(&[u8]) -> u64) -> f64 {
    let start = unsafe { _rdtsc() };
    for _ in 0..iterations {
        black_box(func(black_box(input)));
    }
    let end = unsafe { _rdtsc() };
    (end - start) as f64 / iterations as f64
}

// =============================================================================
// MAIN BENCHMARK
// =============================================================================

fn main() {
    println!("BENCHMARK: Single-Core Bytes per Cycle");
    println!("=============================================================");
    println!(
        "{:<10} | {:<14} | {:<14} | {:<14}",
        "Size", "smcHash", "smcHash(seed)", "XXH3-64"
    );
    println!("{:-<10}-+-{:-<14}-+-{:-<14}-+-{:-<14}", "", "", "", "");

    let overhead = measure_overhead(1_000_000);

    let sizes = [16, 64, 256, 1024, 64 * 1024, 1024 * 1024, 16 * 1024 * 1024];

    for &size in &sizes {
        let input = vec![0u8; size];
        let iterations = if size < 4096 {
            2_000_000
        } else if size < 1024 * 1024 {
            10_000
        } else {
            100
        };

        let bpc = |cycles: f64| size as f64 / (cycles - overhead).max(1.0);
        let smc = bpc(measure(&input, iterations, smchash::hash));
        let seeded = bpc(measure(&input, iterations, |d| smchash::hash_seeded(d, 42)));
        let xxh3 = bpc(measure(&input, iterations, xxhash_rust::xxh3::xxh3_64));

        println!(
            "{:<10} | {:<14.2} | {:<14.2} | {:<14.2}",
            format!("{} B", size),
            smc,
            seeded,
            xxh3
        );
    }
    println!("=============================================================");
    println!("* Values in Bytes/Cycle (Higher is Better)");

    measure_cpu_limit();
}

// =============================================================================
// THEORETICAL LIMIT (L1 CACHE)
// =============================================================================

fn measure_cpu_limit() {
    println!("\nCPU SCALING LIMIT (L1 Cache Test - 32KB per Thread)");
    println!("===========================================================");
    println!(
        "{:<15} | {:<12} | {:<12}",
        "Hash", "Peak bpC", "Est. GB/s @ 4GHz"
    );
    println!("{:-<15}-+-{:-<12}-+-{:-<12}", "", "", "");

    let num_threads = rayon::current_num_threads();
    let chunk_size = 32 * 1024;
    let iterations = 100_000;
    let total_bytes = num_threads as f64 * chunk_size as f64 * iterations as f64;

    let run_bench = |name: &str, func: fn(&[u8]) -> u64| {
        let start = unsafe { _rdtsc() };
        (0..num_threads).into_par_iter().for_each(|_| {
            let buf = vec![0u8; chunk_size]; // Thread-local
            for _ in 0..iterations {
                black_box(func(black_box(&buf)));
            }
        });
        let end = unsafe { _rdtsc() };
        let cycles = (end - start) as f64;
        let bpc = total_bytes / cycles;
        println!("{:<15} | {:<12.2} | {:<12.0}", name, bpc, bpc * 4.0);
    };

    run_bench("smcHash", smchash::hash);
    run_bench("XXH3-64", xxhash_rust::xxh3::xxh3_64);

    println!("===========================================================");
    println!("* This test fits in CPU Cache. RAM Bandwidth is NOT a factor.");
}
