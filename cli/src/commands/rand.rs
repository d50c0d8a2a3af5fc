//! Rand Command
//!
//! Print the built-in PRNG stream.

/// Print `count` words starting from `seed`.
pub fn print_rand(seed: u64, count: usize) {
    let mut state = seed;
    for _ in 0..count {
        println!("{:#018x}", smchash::rand(&mut state));
    }
}
