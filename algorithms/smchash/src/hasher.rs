//! `core::hash` integration.
//!
//! Every `write` folds its bytes into the running state with one full digest,
//! so the result depends on how the input was split. This is a hash-table
//! hasher, not an incremental form of [`hash`](crate::hash).

use core::hash::{BuildHasher, Hasher};

use crate::kernels::constants::DEFAULT_SEED;
use crate::types::Secret;

// =============================================================================
// HASHER
// =============================================================================

/// A [`Hasher`] backed by smcHash.
///
/// # Example
/// ```rust
/// use core::hash::{BuildHasher, Hash, Hasher};
/// use smchash::SmcBuildHasher;
///
/// let build = SmcBuildHasher::new(7);
/// let mut hasher = build.build_hasher();
/// "key".hash(&mut hasher);
/// assert_eq!(hasher.finish(), build.hash_one("key"));
/// ```
#[derive(Debug, Clone)]
pub struct SmcHasher {
    state: u64,
    secret: Secret,
}

impl SmcHasher {
    /// Start from `seed` with the built-in secret.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self::with_secret(seed, Secret::DEFAULT)
    }

    /// Start from `seed` with a caller secret.
    #[must_use]
    pub const fn with_secret(seed: u64, secret: Secret) -> Self {
        Self {
            state: seed,
            secret,
        }
    }
}

impl Default for SmcHasher {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl Hasher for SmcHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.state
    }

    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.state = self.secret.hash(bytes, self.state);
    }

    #[inline]
    fn write_u8(&mut self, i: u8) {
        self.write(&[i]);
    }

    #[inline]
    fn write_u16(&mut self, i: u16) {
        self.write(&i.to_le_bytes());
    }

    #[inline]
    fn write_u32(&mut self, i: u32) {
        self.write(&i.to_le_bytes());
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.write(&i.to_le_bytes());
    }

    #[inline]
    fn write_u128(&mut self, i: u128) {
        self.write(&i.to_le_bytes());
    }

    #[inline]
    fn write_usize(&mut self, i: usize) {
        self.write(&(i as u64).to_le_bytes());
    }
}

// =============================================================================
// BUILDER
// =============================================================================

/// Builds [`SmcHasher`]s that all start from the same seed and secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmcBuildHasher {
    seed: u64,
    secret: Secret,
}

impl SmcBuildHasher {
    /// Builder with the built-in secret.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self::with_secret(seed, Secret::DEFAULT)
    }

    /// Builder with a caller secret.
    #[must_use]
    pub const fn with_secret(seed: u64, secret: Secret) -> Self {
        Self { seed, secret }
    }

    /// Seed every hasher starts from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for SmcBuildHasher {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl BuildHasher for SmcBuildHasher {
    type Hasher = SmcHasher;

    fn build_hasher(&self) -> SmcHasher {
        SmcHasher::with_secret(self.seed, self.secret)
    }
}

// =============================================================================
// COLLECTIONS
// =============================================================================

/// `HashMap` using [`SmcBuildHasher`].
#[cfg(feature = "std")]
pub type SmcHashMap<K, V> = std::collections::HashMap<K, V, SmcBuildHasher>;

/// `HashSet` using [`SmcBuildHasher`].
#[cfg(feature = "std")]
pub type SmcHashSet<K> = std::collections::HashSet<K, SmcBuildHasher>;
