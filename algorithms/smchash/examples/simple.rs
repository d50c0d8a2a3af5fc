//! smcHash Basic Example
//!
//! Minimal usage: `let hash = smchash::hash(&data);`

#![allow(clippy::pedantic, clippy::nursery)]

use std::hash::BuildHasher;

fn main() {
    // Zero boilerplate:
    let data = b"Hello, World!";
    let hash = smchash::hash(data);

    println!("Data: {:?}", String::from_utf8_lossy(data));
    println!("Hash: {}", hex::encode(hash.to_be_bytes()));

    // Seeded, and through a hash-table builder:
    let build = smchash::SmcBuildHasher::new(42);
    println!("Seeded: {:016x}", smchash::hash_seeded(data, 42));
    println!("hash_one: {:016x}", build.hash_one("Hello, World!"));

    // Built-in PRNG:
    let mut state = 42;
    println!("rand: {:016x}", smchash::rand(&mut state));
}
