//! Public hashing API.
//!
//! All three entry points share one portable kernel and are `const fn`.

use crate::kernels::constants::{DEFAULT_SEED, SECRET, SECRET_WORDS};
use crate::kernels::portable;

// =============================================================================
// DEFAULT SECRET
// =============================================================================

/// Hash `data` with the built-in seed and secret.
///
/// Equivalent to `hash_seeded(data, SECRET[0])`.
///
/// # Example
/// ```rust
/// let h = smchash::hash(b"Hello, World!");
/// assert_eq!(h, 0x25bb_0982_c5c0_de6e);
/// ```
#[must_use]
#[inline]
pub const fn hash(data: &[u8]) -> u64 {
    hash_seeded(data, DEFAULT_SEED)
}

/// Hash `data` with a caller seed and the built-in secret.
///
/// # Example
/// ```rust
/// let a = smchash::hash_seeded(b"key", 1);
/// let b = smchash::hash_seeded(b"key", 2);
/// assert_ne!(a, b);
/// ```
#[must_use]
#[inline]
pub const fn hash_seeded(data: &[u8], seed: u64) -> u64 {
    portable::oneshot(data, seed, &SECRET, SECRET[2])
}

// =============================================================================
// CUSTOM SECRET
// =============================================================================

/// Hash `data` with a caller seed and a caller secret table.
///
/// The table is not validated here; pass it through
/// [`validate_secret`](crate::validate_secret) or build a
/// [`Secret`](crate::Secret) first. For inputs longer than 16 bytes the
/// result differs from [`hash_seeded`] even when `secret` is the built-in
/// table.
#[must_use]
#[inline]
pub const fn hash_with_secret(data: &[u8], seed: u64, secret: &[u64; SECRET_WORDS]) -> u64 {
    portable::oneshot(data, seed, secret, secret[0])
}
