//! C-API Bindings
//!
//! Exposes smcHash to C/C++ via FFI with pointer safety and panic boundaries.
//! Status-returning functions use `0` for success, `-1` for a null pointer
//! and `-2` for a caught panic.

#![allow(unsafe_code)]

use std::panic;
use std::slice;

use crate::kernels::constants::SECRET_WORDS;
use crate::{math, oneshot, prng, secret};

// =============================================================================
// HELPERS
// =============================================================================

/// Borrow `len` bytes at `ptr`; a null `ptr` is accepted only for `len == 0`.
unsafe fn input<'a>(ptr: *const u8, len: usize) -> Option<&'a [u8]> {
    if ptr.is_null() {
        return (len == 0).then_some(&[][..]);
    }
    Some(slice::from_raw_parts(ptr, len))
}

// =============================================================================
// HASHING
// =============================================================================

/// Hash with the built-in seed and secret.
///
/// # Safety
/// - `input_ptr` must be valid for `input_len` bytes (may be null if `input_len == 0`)
/// - `output_ptr` must be valid for one writable `u64`
///
/// # Returns
/// - `0`: Success
/// - `-1`: Null pointer
/// - `-2`: Panic
#[no_mangle]
pub unsafe extern "C" fn smchash(input_ptr: *const u8, input_len: usize, output_ptr: *mut u64) -> i32 {
    smchash_seeded(
        input_ptr,
        input_len,
        crate::kernels::constants::DEFAULT_SEED,
        output_ptr,
    )
}

/// Hash with a caller seed and the built-in secret.
///
/// # Safety
/// - `input_ptr` must be valid for `input_len` bytes (may be null if `input_len == 0`)
/// - `output_ptr` must be valid for one writable `u64`
///
/// # Returns
/// - `0`: Success
/// - `-1`: Null pointer
/// - `-2`: Panic
#[no_mangle]
pub unsafe extern "C" fn smchash_seeded(
    input_ptr: *const u8,
    input_len: usize,
    seed: u64,
    output_ptr: *mut u64,
) -> i32 {
    let Some(data) = input(input_ptr, input_len) else {
        return -1;
    };
    if output_ptr.is_null() {
        return -1;
    }

    match panic::catch_unwind(|| oneshot::hash_seeded(data, seed)) {
        Ok(h) => {
            output_ptr.write(h);
            0
        }
        Err(_) => -2,
    }
}

/// Hash with a caller seed and a caller secret table.
///
/// # Safety
/// - `input_ptr` must be valid for `input_len` bytes (may be null if `input_len == 0`)
/// - `secret_ptr` must point to 9 readable `u64` words
/// - `output_ptr` must be valid for one writable `u64`
///
/// # Returns
/// - `0`: Success
/// - `-1`: Null pointer
/// - `-2`: Panic
#[no_mangle]
pub unsafe extern "C" fn smchash_secret(
    input_ptr: *const u8,
    input_len: usize,
    seed: u64,
    secret_ptr: *const u64,
    output_ptr: *mut u64,
) -> i32 {
    let Some(data) = input(input_ptr, input_len) else {
        return -1;
    };
    if secret_ptr.is_null() || output_ptr.is_null() {
        return -1;
    }

    let secret = secret_ptr.cast::<[u64; SECRET_WORDS]>().read_unaligned();
    match panic::catch_unwind(|| oneshot::hash_with_secret(data, seed, &secret)) {
        Ok(h) => {
            output_ptr.write(h);
            0
        }
        Err(_) => -2,
    }
}

// =============================================================================
// PRNG / SECRETS
// =============================================================================

/// Advance `*seed_ptr` and write the next pseudo-random word.
///
/// # Safety
/// - `seed_ptr` must be valid for reading and writing one `u64`
/// - `output_ptr` must be valid for one writable `u64`
///
/// # Returns
/// - `0`: Success
/// - `-1`: Null pointer
#[no_mangle]
pub unsafe extern "C" fn smc_rand(seed_ptr: *mut u64, output_ptr: *mut u64) -> i32 {
    if seed_ptr.is_null() || output_ptr.is_null() {
        return -1;
    }
    let mut state = seed_ptr.read();
    let r = prng::rand(&mut state);
    seed_ptr.write(state);
    output_ptr.write(r);
    0
}

/// Generate a secret table from `seed` into `output_ptr`.
///
/// # Safety
/// - `output_ptr` must be valid for 9 writable `u64` words
///
/// # Returns
/// - `0`: Success
/// - `-1`: Null pointer
/// - `-2`: Panic
#[no_mangle]
pub unsafe extern "C" fn smc_make_secret(seed: u64, output_ptr: *mut u64) -> i32 {
    if output_ptr.is_null() {
        return -1;
    }

    match panic::catch_unwind(|| secret::make_secret(seed)) {
        Ok(words) => {
            output_ptr
                .cast::<[u64; SECRET_WORDS]>()
                .write_unaligned(words);
            0
        }
        Err(_) => -2,
    }
}

/// Primality of `n`.
///
/// # Returns
/// - `1`: Prime
/// - `0`: Not prime
#[no_mangle]
pub extern "C" fn smc_is_prime(n: u64) -> i32 {
    i32::from(math::is_prime(n))
}
