//! Shared types used across the smcHash library.

use core::fmt;
#[cfg(feature = "std")]
use std::error;

use crate::kernels::constants::{SECRET, SECRET_WORDS};
use crate::kernels::portable;

// =============================================================================
// SECRET TABLE
// =============================================================================

/// A secret table paired with the entry fold the hash uses for it.
///
/// Obtain one from [`Secret::generate`] (prime words from the built-in
/// generator), [`Secret::new`] (caller words, fully validated) or
/// [`Secret::DEFAULT`].
///
/// # Example
/// ```rust,no_run
/// use smchash::Secret;
///
/// let secret = Secret::generate(0x5EED);
/// let h1 = secret.hash(b"key", 0);
/// let h2 = Secret::DEFAULT.hash(b"key", 0);
/// assert_ne!(h1, h2);
/// assert_eq!(h2, smchash::hash_seeded(b"key", 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Secret {
    words: [u64; SECRET_WORDS],
    fold_key: u64,
}

impl Secret {
    /// The built-in table. Hashes exactly like [`hash_seeded`](crate::hash_seeded).
    ///
    /// Its words are odd, 32 bits wide and pairwise 32 bits apart, but only the
    /// last one is prime, so it is never passed through [`Secret::new`].
    pub const DEFAULT: Self = Self {
        words: SECRET,
        fold_key: SECRET[2],
    };

    /// Validate caller-supplied words.
    ///
    /// # Errors
    /// Returns the first violated invariant; see [`validate_secret`](crate::validate_secret).
    pub fn new(words: [u64; SECRET_WORDS]) -> Result<Self, SecretError> {
        crate::secret::validate_secret(&words)?;
        Ok(Self::from_words(words))
    }

    /// Derive a table from `seed` with [`make_secret`](crate::make_secret).
    #[must_use]
    pub fn generate(seed: u64) -> Self {
        Self::from_words(crate::secret::make_secret(seed))
    }

    /// Like [`Secret::generate`], giving up after `max_attempts` candidates for any one word.
    ///
    /// # Errors
    /// [`SecretError::Exhausted`] if a word could not be found in time.
    pub fn try_generate(seed: u64, max_attempts: u64) -> Result<Self, SecretError> {
        crate::secret::try_make_secret(seed, max_attempts).map(Self::from_words)
    }

    /// Custom tables fold on `words[0]`, matching [`hash_with_secret`](crate::hash_with_secret).
    pub(crate) const fn from_words(words: [u64; SECRET_WORDS]) -> Self {
        Self {
            words,
            fold_key: words[0],
        }
    }

    /// The nine table words.
    #[must_use]
    pub const fn words(&self) -> &[u64; SECRET_WORDS] {
        &self.words
    }

    /// Digest `data` under `seed` with this table.
    #[must_use]
    #[inline]
    pub const fn hash(&self, data: &[u8], seed: u64) -> u64 {
        portable::oneshot(data, seed, &self.words, self.fold_key)
    }
}

impl Default for Secret {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl AsRef<[u64; SECRET_WORDS]> for Secret {
    fn as_ref(&self) -> &[u64; SECRET_WORDS] {
        &self.words
    }
}

impl From<Secret> for [u64; SECRET_WORDS] {
    fn from(secret: Secret) -> Self {
        secret.words
    }
}

impl TryFrom<[u64; SECRET_WORDS]> for Secret {
    type Error = SecretError;

    fn try_from(words: [u64; SECRET_WORDS]) -> Result<Self, Self::Error> {
        Self::new(words)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Why a secret table was rejected or could not be generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecretError {
    /// A word is even.
    Even {
        /// Position of the word in the table.
        index: usize,
    },
    /// A word does not have exactly 32 bits set.
    Weight {
        /// Position of the word in the table.
        index: usize,
        /// Bits actually set.
        ones: u32,
    },
    /// Two words are not exactly 32 bits apart.
    Distance {
        /// Earlier word.
        first: usize,
        /// Later word.
        second: usize,
        /// Hamming distance found.
        distance: u32,
    },
    /// A word is composite.
    Composite {
        /// Position of the word in the table.
        index: usize,
    },
    /// Bounded generation ran out of candidates for one word.
    Exhausted {
        /// Word being generated.
        index: usize,
        /// Candidates tried for it.
        attempts: u64,
    },
}

impl fmt::Display for SecretError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Even { index } => write!(f, "secret word {index} is even"),
            Self::Weight { index, ones } => {
                write!(f, "secret word {index} has {ones} bits set, expected 32")
            }
            Self::Distance {
                first,
                second,
                distance,
            } => write!(
                f,
                "secret words {first} and {second} differ in {distance} bits, expected 32"
            ),
            Self::Composite { index } => write!(f, "secret word {index} is not prime"),
            Self::Exhausted { index, attempts } => write!(
                f,
                "no valid candidate for secret word {index} after {attempts} attempts"
            ),
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for SecretError {}
