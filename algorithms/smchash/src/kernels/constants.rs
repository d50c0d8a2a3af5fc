//! smcHash Kernel Constants
//!
//! The default secret table is a set of nine 64-bit words chosen so that:
//!
//! ```text
//! - every word is odd
//! - every word has exactly 32 bits set
//! - every pair of words has a Hamming distance of exactly 32
//! ```
//!
//! Custom tables produced by `make_secret` additionally consist of primes.
//! Of the default words only `SECRET[8]` is prime; the table is kept
//! bit-exact because every published digest depends on it.

use static_assertions::const_assert;
use static_assertions::const_assert_eq;

// =============================================================================
// SECRET TABLE
// =============================================================================

/// Number of words in a secret table.
pub const SECRET_WORDS: usize = 9;

/// Default secret table.
pub const SECRET: [u64; SECRET_WORDS] = [
    0x9ad1_e8e2_aa5a_5c4b,
    0xaaaa_d233_5647_d21b,
    0xb8ac_35e2_69d1_b495,
    0xa98d_653c_b2b4_c959,
    0x71a5_b853_b43c_a68b,
    0x2b55_934d_c35c_9655,
    0x746a_e48e_d4d4_1e4d,
    0xa3d8_c38e_78aa_a6a9,
    0x1bca_69c5_6565_8bc3,
];

/// Seed used by `hash` when the caller supplies none.
pub const DEFAULT_SEED: u64 = SECRET[0];

// =============================================================================
// STRUCTURAL CONSTANTS
// =============================================================================

/// Inputs up to this length take the short path.
pub const SHORT_MAX: usize = 16;

/// Inputs longer than this take the 8-lane bulk path.
pub const BULK_MIN: usize = 128;

/// Number of independent accumulator lanes in the bulk loop.
pub const NUM_LANES: usize = 8;

/// Bytes consumed by one lane per bulk iteration (two 64-bit reads).
pub const LANE_BYTES: usize = 16;

/// Bytes consumed per bulk iteration (two cache lines).
pub const BULK_BLOCK: usize = NUM_LANES * LANE_BYTES;

const_assert_eq!(BULK_BLOCK, BULK_MIN);
const_assert!(NUM_LANES < SECRET_WORDS);

// =============================================================================
// SECRET GENERATION
// =============================================================================

/// Bits every secret word must have set.
pub const SECRET_POPCOUNT: u32 = 32;

/// Required Hamming distance between any two words of one table.
pub const SECRET_DISTANCE: u32 = 32;

/// Candidate bytes for secret generation. Each has exactly four bits set,
/// so any word assembled from eight of them has exactly 32 bits set.
#[rustfmt::skip]
pub const CANDIDATE_BYTES: [u8; 70] = [
    15, 23, 27, 29, 30, 39, 43, 45, 46, 51, 53, 54, 57, 58, 60,
    71, 75, 77, 78, 83, 85, 86, 89, 90, 92, 99, 101, 102, 105, 106, 108,
    113, 114, 116, 120, 135, 139, 141, 142, 147, 149, 150, 153, 154, 156,
    163, 165, 166, 169, 170, 172, 177, 178, 180, 184, 195, 197, 198,
    201, 202, 204, 209, 210, 212, 216, 225, 226, 228, 232, 240,
];

// =============================================================================
// PRIMALITY
// =============================================================================

/// Smallest composite that passes the strong probable-prime test to base 2, 3, 5 and 7.
/// Rejected up front.
pub const KNOWN_PSEUDOPRIME: u64 = 3_215_031_751;

/// Below this bound a single base-2 round decides primality.
pub const BASE2_BOUND: u64 = 2047;

/// Witnesses that make the strong probable-prime test deterministic for all `u64`.
pub const WITNESSES: [u64; 11] = [3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37];
