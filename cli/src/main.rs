//! smcHash CLI
//!
//! File checksums, secret generation and PRNG output.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{check_mode, hash_files, parse_u64, print_rand, print_secret, Keying};
use std::path::PathBuf;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "smchash")]
#[command(about = "Fast 64-bit non-cryptographic hashing", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Files to hash (if no subcommand)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Hash seed (decimal or 0x-prefixed hex)
    #[arg(long, global = true, value_parser = parse_u64)]
    seed: Option<u64>,

    /// Derive a secret table from this seed and hash with it
    #[arg(long, global = true, value_parser = parse_u64)]
    secret_seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Verify checksums from file (like sha256sum -c)
    Check {
        #[arg(value_name = "FILE")]
        checksum_file: PathBuf,
    },
    /// Print the secret table derived from --seed
    Secret,
    /// Print PRNG output starting from --seed
    Rand {
        /// Number of words to print
        #[arg(short = 'n', long, default_value_t = 8)]
        count: usize,
    },
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    match &cli.command {
        Some(Commands::Check { checksum_file }) => {
            check_mode(checksum_file, &Keying::new(cli.seed, cli.secret_seed))?;
        }
        Some(Commands::Secret) => print_secret(cli.seed.unwrap_or(0)),
        Some(Commands::Rand { count }) => print_rand(cli.seed.unwrap_or(0), *count),
        None => {
            if cli.files.is_empty() {
                eprintln!("Error: No files specified");
                eprintln!("Usage: smchash [FILE]... or smchash --help");
                std::process::exit(1);
            }

            hash_files(&cli.files, &Keying::new(cli.seed, cli.secret_seed))?;
        }
    }

    Ok(())
}
