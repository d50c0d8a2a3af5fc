//! CLI Commands
//!
//! All smchash CLI commands organized as separate modules.

mod check;
mod hash;
mod rand;
mod secret;

pub use check::check_mode;
pub use hash::{hash_files, Keying};
pub use rand::print_rand;
pub use secret::print_secret;

/// Parse a decimal or `0x`-prefixed hexadecimal `u64`.
pub fn parse_u64(s: &str) -> Result<u64, String> {
    let s = s.trim().replace('_', "");
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(digits) => u64::from_str_radix(digits, 16),
        None => s.parse::<u64>(),
    };
    parsed.map_err(|e| format!("invalid number '{s}': {e}"))
}
