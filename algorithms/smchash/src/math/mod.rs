//! Modular arithmetic used by secret generation.
//!
//! Montgomery multiplication modulo odd 64-bit integers and the
//! deterministic primality test built on it.

pub mod montgomery;
pub mod prime;

pub use montgomery::{from_mont, mont_inv, mont_mul, mont_one, mont_pow, mont_sprp, to_mont};
pub use prime::is_prime;
