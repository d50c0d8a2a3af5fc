//! Secret Command
//!
//! Print a generated secret table, one word per line.

/// Derive the table for `seed` and print it as hex words.
pub fn print_secret(seed: u64) {
    for (i, word) in smchash::make_secret(seed).iter().enumerate() {
        println!("{i}  {word:#018x}");
    }
}
