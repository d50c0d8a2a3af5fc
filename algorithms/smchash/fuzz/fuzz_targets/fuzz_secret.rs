#![no_main]

use libfuzzer_sys::fuzz_target;
use smchash::{is_prime, validate_secret, SecretError};

fuzz_target!(|words: [u64; 9]| {
    // =============================================================================
    // VALIDATION
    // =============================================================================

    match validate_secret(&words) {
        Ok(()) => {
            for (i, &w) in words.iter().enumerate() {
                assert!(w & 1 == 1 && w.count_ones() == 32 && is_prime(w));
                for &other in &words[..i] {
                    assert_eq!((w ^ other).count_ones(), 32);
                }
            }
        }
        Err(SecretError::Even { index }) => assert_eq!(words[index] & 1, 0),
        Err(SecretError::Weight { index, ones }) => {
            assert_eq!(words[index].count_ones(), ones);
            assert_ne!(ones, 32);
        }
        Err(SecretError::Distance {
            first,
            second,
            distance,
        }) => {
            assert!(first < second);
            assert_eq!((words[first] ^ words[second]).count_ones(), distance);
        }
        Err(SecretError::Composite { index }) => assert!(!is_prime(words[index])),
        Err(SecretError::Exhausted { .. }) => unreachable!("validation never generates"),
    }
});
