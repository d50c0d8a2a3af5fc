//! Portable numeric primitives.
//!
//! Everything above this module relies only on the documented semantics:
//! an exact 64×64→128-bit product, little-endian loads independent of the
//! host byte order, and an exact population count.

/// Full 128-bit product of `a` and `b`, returned as `(lo, hi)`.
#[allow(clippy::inline_always)]
#[inline(always)]
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn mul128(a: u64, b: u64) -> (u64, u64) {
    let r = (a as u128) * (b as u128);
    (r as u64, (r >> 64) as u64)
}

/// Little-endian `u64` at `data[at..at + 8]`.
///
/// Panics if fewer than eight bytes are available; callers only read
/// offsets the length dispatch has already proven in range.
#[allow(clippy::inline_always)]
#[inline(always)]
pub const fn read_le64(data: &[u8], at: usize) -> u64 {
    u64::from_le_bytes([
        data[at],
        data[at + 1],
        data[at + 2],
        data[at + 3],
        data[at + 4],
        data[at + 5],
        data[at + 6],
        data[at + 7],
    ])
}

/// Little-endian `u32` at `data[at..at + 4]`.
#[allow(clippy::inline_always)]
#[inline(always)]
pub const fn read_le32(data: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}

/// Number of set bits.
#[allow(clippy::inline_always)]
#[inline(always)]
pub const fn popcount(x: u64) -> u32 {
    x.count_ones()
}
