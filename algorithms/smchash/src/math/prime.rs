//! Deterministic primality for 64-bit integers.

use super::montgomery::{mont_inv, mont_one, mont_sprp};
use crate::kernels::constants::{BASE2_BOUND, KNOWN_PSEUDOPRIME, WITNESSES};

/// Whether `n` is prime. Exact for every `u64`.
///
/// Trial division by 2, 3, 5 and 7, then strong probable-prime rounds in
/// Montgomery form: base 2 alone below 2047, otherwise base 2 plus the
/// witnesses 3..=37.
///
/// # Example
/// ```rust
/// assert!(smchash::is_prime(0xFFFF_FFFF_FFFF_FFC5));
/// assert!(!smchash::is_prime(3_215_031_751));
/// ```
#[must_use]
pub const fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n & 1 == 0 {
        return false;
    }
    if n < 9 {
        return true;
    }
    if n % 3 == 0 || n % 5 == 0 || n % 7 == 0 || n == KNOWN_PSEUDOPRIME {
        return false;
    }

    let n_inv = mont_inv(n);
    let one = mont_one(n);

    if !mont_sprp(n, 2, n_inv, one) {
        return false;
    }
    if n < BASE2_BOUND {
        return true;
    }

    let mut i = 0;
    while i < WITNESSES.len() {
        if !mont_sprp(n, WITNESSES[i], n_inv, one) {
            return false;
        }
        i += 1;
    }
    true
}
