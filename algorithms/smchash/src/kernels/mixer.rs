//! Multiply-mix primitives.

use super::primitives::mul128;

/// Fold the 128-bit product of `a` and `b` into 64 bits (`lo ^ hi`).
///
/// # Example
/// ```rust
/// assert_eq!(smchash::mix(0, 0xDEAD_BEEF), 0);
/// assert_eq!(smchash::mix(1 << 63, 2), 1);
/// ```
#[allow(clippy::inline_always)]
#[inline(always)]
#[must_use]
pub const fn mix(a: u64, b: u64) -> u64 {
    let (lo, hi) = mul128(a, b);
    lo ^ hi
}

/// Multiply-update-mix: `*a = lo ^ hi`, `*b = hi` for the product of `*a` and `*b`.
///
/// Unlike [`mix`] the raw high half survives in `b` for a second combination step.
#[allow(clippy::inline_always)]
#[inline(always)]
pub const fn mum(a: &mut u64, b: &mut u64) {
    let (lo, hi) = mul128(*a, *b);
    *a = lo ^ hi;
    *b = hi;
}
