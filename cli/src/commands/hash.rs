//! Hash Command
//!
//! File hashing, one file per Rayon task.

use anyhow::{Context, Result};
use rayon::prelude::*;
use smchash::{Secret, SECRET};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

// =============================================================================
// KEYING
// =============================================================================

/// Secret table and seed every digest in one run is computed under.
#[derive(Debug, Clone, Copy)]
pub struct Keying {
    secret: Secret,
    seed: u64,
}

impl Keying {
    /// Default table and seed unless overridden. A derived table defaults to seed 0.
    pub fn new(seed: Option<u64>, secret_seed: Option<u64>) -> Self {
        match secret_seed {
            Some(n) => {
                info!(secret_seed = n, "deriving secret table");
                Self {
                    secret: Secret::generate(n),
                    seed: seed.unwrap_or(0),
                }
            }
            None => Self {
                secret: Secret::DEFAULT,
                seed: seed.unwrap_or(SECRET[0]),
            },
        }
    }

    /// Hex digest of `data`, most significant byte first.
    pub fn digest(&self, data: &[u8]) -> String {
        hex::encode(self.secret.hash(data, self.seed).to_be_bytes())
    }

    /// Read `path` whole and digest it.
    pub fn digest_file(&self, path: &Path) -> Result<String> {
        let data =
            std::fs::read(path).with_context(|| format!("Failed to read: {}", path.display()))?;
        debug!(path = %path.display(), bytes = data.len(), "hashing");
        Ok(self.digest(&data))
    }
}

// =============================================================================
// HASH
// =============================================================================

/// Hash files in parallel and print them in argument order.
pub fn hash_files(files: &[PathBuf], keying: &Keying) -> Result<()> {
    let results: Vec<(&PathBuf, Result<String>)> = files
        .par_iter()
        .map(|path| (path, keying.digest_file(path)))
        .collect();

    let mut failed = 0usize;
    for (path, result) in results {
        match result {
            Ok(hex_hash) => println!("{hex_hash}  {}", path.display()),
            Err(e) => {
                eprintln!("Error: {e:#}");
                failed += 1;
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("Failed to hash {failed} file(s)");
    }

    Ok(())
}
