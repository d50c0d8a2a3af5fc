//! Built-in pseudo-random generator.
//!
//! A counter advanced by `SECRET[0]` and folded through [`mix`]. One state
//! word, fully deterministic: the same seed always yields the same stream,
//! which is what makes `make_secret` reproducible.

use crate::kernels::constants::SECRET;
use crate::kernels::mixer::mix;

/// Advance `seed` and return the next pseudo-random word.
///
/// Not suitable for cryptographic use.
///
/// # Example
/// ```rust
/// let mut seed = 42u64;
/// let r1 = smchash::rand(&mut seed);
/// let r2 = smchash::rand(&mut seed);
/// assert_ne!(r1, r2);
/// ```
#[inline]
pub const fn rand(seed: &mut u64) -> u64 {
    *seed = seed.wrapping_add(SECRET[0]);
    mix(*seed, *seed ^ SECRET[1])
}
