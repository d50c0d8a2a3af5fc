#![cfg_attr(not(feature = "std"), no_std)]

//! # smcHash
//!
//! Fast 64-bit non-cryptographic hashing built on 128-bit multiply mixing,
//! with a tiny PRNG, deterministic 64-bit primality testing and a generator
//! for per-application secret tables.

//! # Usage
//! ```rust
//! // 1. One-shot hashing
//! let h = smchash::hash(b"Performance Matters");
//! let s = smchash::hash_seeded(b"Performance Matters", 42);
//! assert_ne!(h, s);
//!
//! // 2. Hash tables
//! # #[cfg(feature = "std")]
//! # {
//! let mut map = smchash::SmcHashMap::default();
//! map.insert("key", 1);
//! assert_eq!(map.get("key"), Some(&1));
//! # }
//!
//! // 3. Primality and randomness
//! assert!(smchash::is_prime(0x1bca_69c5_6565_8bc3));
//! let mut state = 7;
//! let _r = smchash::rand(&mut state);
//! ```

// =============================================================================
// MODULES
// =============================================================================

#[cfg(feature = "std")]
mod ffi;
mod hasher;
// Exposed for benchmarks and tests, hidden from docs
#[doc(hidden)]
pub mod kernels;
pub mod math;
mod oneshot;
mod prng;
mod secret;
mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use hasher::{SmcBuildHasher, SmcHasher};
#[cfg(feature = "std")]
pub use hasher::{SmcHashMap, SmcHashSet};
pub use kernels::constants::{SECRET, SECRET_WORDS};
pub use kernels::mixer::{mix, mum};
pub use math::is_prime;
pub use oneshot::{hash, hash_seeded, hash_with_secret};
pub use prng::rand;
pub use secret::{make_secret, try_make_secret, validate_secret};
pub use types::{Secret, SecretError};
