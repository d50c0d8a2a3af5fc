//! Secret table generation and validation.
//!
//! Candidate words are assembled from eight bytes with exactly four bits set
//! each, so every candidate has 32 ones. A candidate is kept only if it is
//! odd, exactly 32 bits away from every word already kept, and prime.

use tracing::{debug, trace, warn};

use crate::kernels::constants::{CANDIDATE_BYTES, SECRET_DISTANCE, SECRET_POPCOUNT, SECRET_WORDS};
use crate::kernels::primitives::popcount;
use crate::math::is_prime;
use crate::prng::rand;
use crate::types::SecretError;

// =============================================================================
// PUBLIC API
// =============================================================================

/// Derive a nine-word secret table from `seed`.
///
/// Deterministic: the same seed always produces the same table. Every word is
/// odd, prime, has 32 bits set and is 32 bits away from every other word.
/// Search time varies by seed and can reach millions of candidates for the
/// last words; use [`try_make_secret`] to bound it.
///
/// # Example
/// ```rust,no_run
/// let secret = smchash::make_secret(42);
/// assert!(smchash::validate_secret(&secret).is_ok());
/// assert_eq!(smchash::hash_with_secret(b"a", 0, &secret),
///            smchash::hash_with_secret(b"a", 0, &smchash::make_secret(42)));
/// ```
#[must_use]
pub fn make_secret(seed: u64) -> [u64; SECRET_WORDS] {
    let mut state = seed;
    let mut secret = [0u64; SECRET_WORDS];

    for index in 0..SECRET_WORDS {
        let mut attempts = 0u64;
        let word = loop {
            attempts += 1;
            let word = candidate(&mut state);
            match check(word, &secret[..index]) {
                Ok(()) => break word,
                Err(reason) => trace!(index, word, ?reason, "candidate rejected"),
            }
        };
        debug!(index, word, attempts, "secret word accepted");
        secret[index] = word;
    }
    secret
}

/// [`make_secret`] with at most `max_attempts` candidates per word.
///
/// On success the table equals `make_secret(seed)`.
///
/// # Errors
/// [`SecretError::Exhausted`] naming the word that ran out of attempts.
pub fn try_make_secret(seed: u64, max_attempts: u64) -> Result<[u64; SECRET_WORDS], SecretError> {
    let mut state = seed;
    let mut secret = [0u64; SECRET_WORDS];

    for index in 0..SECRET_WORDS {
        let mut attempts = 0u64;
        let mut accepted = None;
        while attempts < max_attempts {
            attempts += 1;
            let word = candidate(&mut state);
            match check(word, &secret[..index]) {
                Ok(()) => {
                    accepted = Some(word);
                    break;
                }
                Err(reason) => trace!(index, word, ?reason, "candidate rejected"),
            }
        }

        let Some(word) = accepted else {
            warn!(index, attempts, seed, "secret generation gave up");
            return Err(SecretError::Exhausted { index, attempts });
        };
        debug!(index, word, attempts, "secret word accepted");
        secret[index] = word;
    }
    Ok(secret)
}

/// Check that `secret` is usable as a custom table.
///
/// Words are checked in order; for each one: odd, 32 bits set, 32 bits away
/// from every earlier word, prime.
///
/// # Errors
/// The first violation found.
pub fn validate_secret(secret: &[u64; SECRET_WORDS]) -> Result<(), SecretError> {
    for (index, &word) in secret.iter().enumerate() {
        if word & 1 == 0 {
            return Err(SecretError::Even { index });
        }
        let ones = popcount(word);
        if ones != SECRET_POPCOUNT {
            return Err(SecretError::Weight { index, ones });
        }
        for (first, &earlier) in secret[..index].iter().enumerate() {
            let distance = popcount(word ^ earlier);
            if distance != SECRET_DISTANCE {
                return Err(SecretError::Distance {
                    first,
                    second: index,
                    distance,
                });
            }
        }
        if !is_prime(word) {
            return Err(SecretError::Composite { index });
        }
    }
    Ok(())
}

// =============================================================================
// LOGIC
// =============================================================================

/// Why a candidate was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reject {
    Even,
    Distance,
    Composite,
}

/// Eight PRNG draws, one candidate byte each, lowest byte first.
#[allow(clippy::cast_possible_truncation)]
fn candidate(state: &mut u64) -> u64 {
    let mut word = 0u64;
    for shift in (0..64).step_by(8) {
        let pick = rand(state) % CANDIDATE_BYTES.len() as u64;
        word |= u64::from(CANDIDATE_BYTES[pick as usize]) << shift;
    }
    word
}

/// Cheap checks first; primality last.
fn check(word: u64, accepted: &[u64]) -> Result<(), Reject> {
    if word & 1 == 0 {
        return Err(Reject::Even);
    }
    if accepted
        .iter()
        .any(|&other| popcount(word ^ other) != SECRET_DISTANCE)
    {
        return Err(Reject::Distance);
    }
    if !is_prime(word) {
        return Err(Reject::Composite);
    }
    Ok(())
}
