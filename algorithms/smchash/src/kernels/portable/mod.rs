//! Portable implementation of smcHash.
//!
//! One length-dispatched algorithm serves every entry point:
//!
//! ```text
//! len <= 16        short path: overlapping windows, one MUM, one MIX
//! 16 < len <= 128  descending 64/32/16-byte strides
//! len > 128        8 lanes x 16 bytes per 128-byte block, then the strides
//! ```
//!
//! Medium and bulk inputs always finalize on the last 16 bytes of the whole
//! input, even when the strides already consumed them.
//!
//! Written as `const fn` so digests of constant data can be computed at
//! compile time.

use crate::kernels::constants::{
    BULK_BLOCK, BULK_MIN, LANE_BYTES, NUM_LANES, SECRET_WORDS, SHORT_MAX,
};
use crate::kernels::mixer::{mix, mum};
use crate::kernels::primitives::{read_le32, read_le64};

// =============================================================================
// ENTRY POINT
// =============================================================================

/// Digest `data` under `seed` and `secret`.
///
/// `fold_key` is the word mixed into the seed on entry to the medium and bulk
/// paths: `secret[2]` for the default-table path, `secret[0]` for custom tables.
#[must_use]
pub const fn oneshot(data: &[u8], seed: u64, secret: &[u64; SECRET_WORDS], fold_key: u64) -> u64 {
    if data.len() <= SHORT_MAX {
        return short(data, seed, secret);
    }

    let len = data.len();
    let mut seed = seed ^ mix(seed ^ fold_key, secret[1]);
    let mut at = 0;
    let mut remaining = len;

    if len > BULK_MIN {
        let mut lanes = [seed; NUM_LANES];

        // Strictly greater: a trailing full block is left for the strides.
        while remaining > BULK_MIN {
            let mut lane = 0;
            while lane < NUM_LANES {
                lanes[lane] = fold16(data, at + lane * LANE_BYTES, secret[lane], lanes[lane]);
                lane += 1;
            }
            at += BULK_BLOCK;
            remaining -= BULK_BLOCK;
        }

        seed = lanes[0] ^ lanes[1] ^ lanes[4] ^ lanes[5];
        lanes[2] ^= lanes[3] ^ lanes[6] ^ lanes[7];
        seed ^= lanes[2];
    }

    if remaining > 64 {
        seed = fold16(data, at, secret[0], seed);
        seed = fold16(data, at + 16, secret[1], seed);
        seed = fold16(data, at + 32, secret[2], seed);
        seed = fold16(data, at + 48, secret[3], seed);
        at += 64;
        remaining -= 64;
    }
    if remaining > 32 {
        seed = fold16(data, at, secret[0], seed);
        seed = fold16(data, at + 16, secret[1], seed);
        at += 32;
        remaining -= 32;
    }
    if remaining > 16 {
        seed = fold16(data, at, secret[0], seed);
    }

    let a = read_le64(data, len - 16) ^ len as u64;
    let b = read_le64(data, len - 8);
    finalize(a, b, seed, len, secret)
}

// =============================================================================
// LOGIC
// =============================================================================

/// Inputs of at most 16 bytes.
#[allow(clippy::cast_lossless)]
const fn short(data: &[u8], seed: u64, secret: &[u64; SECRET_WORDS]) -> u64 {
    let len = data.len();
    let seed = seed ^ mix(seed ^ secret[0], secret[1] ^ len as u64);

    let (a, b) = if len >= 8 {
        (read_le64(data, 0), read_le64(data, len - 8))
    } else if len >= 4 {
        (read_le32(data, 0) as u64, read_le32(data, len - 4) as u64)
    } else if len > 0 {
        let a = ((data[0] as u64) << 56) | ((data[len >> 1] as u64) << 32) | data[len - 1] as u64;
        (a, 0)
    } else {
        (0, 0)
    };

    finalize(a, b, seed, len, secret)
}

/// Mix one 16-byte block at `at` against `key` into `acc`.
#[allow(clippy::inline_always)]
#[inline(always)]
const fn fold16(data: &[u8], at: usize, key: u64, acc: u64) -> u64 {
    mix(read_le64(data, at) ^ key, read_le64(data, at + 8) ^ acc)
}

/// Shared tail of every path.
#[allow(clippy::inline_always)]
#[inline(always)]
const fn finalize(a: u64, b: u64, seed: u64, len: usize, secret: &[u64; SECRET_WORDS]) -> u64 {
    let mut a = a ^ secret[1];
    let mut b = b ^ seed;
    mum(&mut a, &mut b);
    mix(a ^ secret[8], b ^ secret[1] ^ len as u64)
}
