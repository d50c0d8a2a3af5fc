//! # `PractRand` Stream Generator
//!
//! High-performance stream generator for `PractRand` testing.
//!
//! This binary writes an endless stream of 64-bit words to stdout, either by
//! hashing an incrementing counter with smcHash or straight from the PRNG.

use clap::Parser;
use std::io::{self, Write};

/// Stream smcHash output for `PractRand` (`smchash_stream | RNG_test stdin64`).
#[derive(Parser)]
#[command(name = "smchash_stream")]
struct Args {
    /// Input size in bytes, `cyclic` (16/32/64/128/256) or `rand` (PRNG stream)
    #[arg(default_value = "8")]
    mode: String,

    /// Hash seed, or PRNG start state in `rand` mode
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

/// Input for `counter`: its little-endian bytes repeated to `size`.
fn counter_input(counter: u64, size: usize, input: &mut Vec<u8>) {
    let counter_bytes = counter.to_le_bytes();
    input.clear();
    input.extend((0..size).map(|i| counter_bytes[i % 8]));
}

/// Entry point for the `PractRand` stream generator.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let stdout = io::stdout();
    let mut handle = io::BufWriter::new(stdout.lock());

    if args.mode == "rand" {
        let mut state = args.seed;
        loop {
            let word = smchash::rand(&mut state);
            if handle.write_all(&word.to_le_bytes()).is_err() {
                return Ok(());
            }
        }
    }

    let fixed = if args.mode == "cyclic" {
        None
    } else {
        Some(args.mode.parse::<usize>()?)
    };

    let mut counter: u64 = 0;
    let mut input = Vec::with_capacity(256);
    loop {
        // Cycle through 16, 32, 64, 128, 256 bytes
        let size = fixed.unwrap_or(16 << (counter % 5));
        counter_input(counter, size, &mut input);

        let hash = smchash::hash_seeded(&input, args.seed);
        if handle.write_all(&hash.to_le_bytes()).is_err() {
            return Ok(());
        }

        counter = counter.wrapping_add(1);
    }
}
