//! Montgomery arithmetic modulo an odd 64-bit `n` with `R = 2^64`.
//!
//! Residues in Montgomery form are `x·R mod n`. Multiplication reduces the
//! 128-bit product with one extra multiply instead of a division.

use crate::kernels::primitives::mul128;

/// Inverse of odd `n` modulo 2^64.
///
/// `(3n) ^ 2` is correct to 5 low bits; each Newton step doubles that
/// (5 → 10 → 20 → 40 → 80), so four steps cover all 64 bits.
#[must_use]
pub const fn mont_inv(n: u64) -> u64 {
    debug_assert!(n & 1 == 1, "Montgomery modulus must be odd");
    let mut est = n.wrapping_mul(3) ^ 2;
    let mut step = 0;
    while step < 4 {
        est = 2u64.wrapping_sub(est.wrapping_mul(n)).wrapping_mul(est);
        step += 1;
    }
    est
}

/// Reduce the 128-bit value `hi:lo` to `hi:lo · R⁻¹ mod n`.
///
/// Requires `hi < n`, which holds for any product of two reduced residues.
#[inline]
const fn mont_reduce(lo: u64, hi: u64, n: u64, n_inv: u64) -> u64 {
    let m = lo.wrapping_mul(n_inv);
    let (_, t) = mul128(m, n);
    if hi < t {
        hi.wrapping_sub(t).wrapping_add(n)
    } else {
        hi - t
    }
}

/// `x` into Montgomery form: `x·R mod n`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn to_mont(x: u64, n: u64) -> u64 {
    (((x as u128) << 64) % (n as u128)) as u64
}

/// Leave Montgomery form: `x·R⁻¹ mod n`.
#[must_use]
pub const fn from_mont(x: u64, n: u64, n_inv: u64) -> u64 {
    mont_reduce(x, 0, n, n_inv)
}

/// Montgomery form of 1, i.e. `R mod n`.
#[must_use]
pub const fn mont_one(n: u64) -> u64 {
    (u64::MAX % n) + 1
}

/// Montgomery product `a·b·R⁻¹ mod n`.
#[must_use]
#[inline]
pub const fn mont_mul(a: u64, b: u64, n: u64, n_inv: u64) -> u64 {
    let (lo, hi) = mul128(a, b);
    mont_reduce(lo, hi, n, n_inv)
}

/// `base^exp` in Montgomery form by square-and-multiply, low bit first.
///
/// `base` and the result are in Montgomery form; `one` is [`mont_one`]`(n)`.
#[must_use]
pub const fn mont_pow(mut base: u64, mut exp: u64, n: u64, n_inv: u64, one: u64) -> u64 {
    let mut result = one;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mont_mul(result, base, n, n_inv);
        }
        base = mont_mul(base, base, n, n_inv);
        exp >>= 1;
    }
    result
}

/// Strong probable-prime test of odd `n > 2` to base `a`.
///
/// `false` proves `n` composite; `true` means `n` passed this base. A base
/// that is a multiple of `n` says nothing and passes.
#[must_use]
pub const fn mont_sprp(n: u64, a: u64, n_inv: u64, one: u64) -> bool {
    let mut d = n - 1;
    let mut s = 0u32;
    while d & 1 == 0 {
        d >>= 1;
        s += 1;
    }

    let a_mont = to_mont(a % n, n);
    if a_mont == 0 {
        return true;
    }

    let neg_one = n - one;
    let mut x = mont_pow(a_mont, d, n, n_inv, one);
    if x == one || x == neg_one {
        return true;
    }

    let mut r = 1;
    while r < s {
        x = mont_mul(x, x, n, n_inv);
        if x == neg_one {
            return true;
        }
        if x == one {
            return false;
        }
        r += 1;
    }
    false
}
