#![no_main]

use libfuzzer_sys::fuzz_target;
use smchash::{hash, hash_seeded, hash_with_secret, Secret, SmcHasher, SECRET};
use std::hash::Hasher;

fuzz_target!(|data: &[u8]| {
    // =============================================================================
    // PREPARATION
    // =============================================================================

    // First 8 bytes pick the seed, the rest is the message.
    let (seed, msg) = if data.len() >= 8 {
        let mut word = [0u8; 8];
        word.copy_from_slice(&data[..8]);
        (u64::from_le_bytes(word), &data[8..])
    } else {
        (0, data)
    };

    // =============================================================================
    // 1. ENTRY POINTS
    // =============================================================================

    let seeded = hash_seeded(msg, seed);
    assert_eq!(hash(msg), hash_seeded(msg, SECRET[0]));
    assert_eq!(Secret::DEFAULT.hash(msg, seed), seeded);
    if msg.len() <= 16 {
        assert_eq!(hash_with_secret(msg, seed, &SECRET), seeded);
    }

    // =============================================================================
    // 2. HASHER
    // =============================================================================

    let mut hasher = SmcHasher::new(seed);
    hasher.write(msg);
    assert_eq!(hasher.finish(), seeded, "single write must equal hash_seeded");
});
