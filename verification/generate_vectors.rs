//! # Test Vector Generator
//!
//! Regenerates `algorithms/smchash/tests/test_vectors.json` from the
//! current implementation. Run only after a deliberate output change.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use smchash::{SECRET, SECRET_WORDS};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Write the canonical test vectors as JSON.
#[derive(Parser)]
#[command(name = "generate_vectors")]
struct Args {
    /// Output path
    #[arg(short, long, default_value = "algorithms/smchash/tests/test_vectors.json")]
    output: PathBuf,
}

// =============================================================================
// SCHEMA
// =============================================================================

#[derive(Serialize)]
struct Vector {
    name: String,
    input: String,
    hash: String,
}

#[derive(Serialize)]
struct SeededVector {
    name: String,
    input: String,
    seed: String,
    hash: String,
}

#[derive(Serialize)]
struct SecretVector {
    name: String,
    secret: String,
    input: String,
    seed: String,
    hash: String,
}

#[derive(Serialize)]
struct SecretTable {
    seed: String,
    words: Vec<String>,
}

#[derive(Serialize)]
struct TestVectors {
    vectors: Vec<Vector>,
    seeded: Vec<SeededVector>,
    custom_secret: Vec<SecretVector>,
    secrets: Vec<SecretTable>,
}

// =============================================================================
// INPUTS
// =============================================================================

const NAMED: [(&str, &str); 9] = [
    ("empty", ""),
    ("hello", "Hello, World!"),
    ("abc", "abc"),
    ("abcd", "abcd"),
    ("zero_200", "ZERO_200"),
    ("ff_200", "FF_200"),
    ("a_256", "A_256"),
    ("a_1kb", "A_1024"),
    ("zero_64", "ZERO_64"),
];

const SEQ_LENGTHS: [usize; 17] = [
    0, 1, 3, 4, 7, 8, 15, 16, 17, 32, 33, 64, 65, 128, 129, 256, 1000,
];

const EXTRA_SEEDS: [u64; 4] = [1, 12345, 0xdead_beef, u64::MAX];

const SECRET_CASES: [(&str, &str, u64); 7] = [
    ("empty", "", 0),
    ("hello", "Hello, World!", 0),
    ("seq_17", "SEQ_17", 0),
    ("seq_33", "SEQ_33", 0),
    ("seq_129", "SEQ_129", 0),
    ("seq_200", "SEQ_200", 7),
    ("seq_1000", "SEQ_1000", 0),
];

const SECRET_SEEDS: [u64; 2] = [0, 42];

/// Expand a named input pattern (`SEQ_n`, `ZERO_n`, `FF_n`, `A_n`) or take the literal text.
fn input_bytes(tag: &str) -> Vec<u8> {
    let sized = |prefix: &str| tag.strip_prefix(prefix).and_then(|n| n.parse::<usize>().ok());
    if let Some(n) = sized("SEQ_") {
        (0..n).map(|i| (i & 0xFF) as u8).collect()
    } else if let Some(n) = sized("ZERO_") {
        vec![0u8; n]
    } else if let Some(n) = sized("FF_") {
        vec![0xFF; n]
    } else if let Some(n) = sized("A_") {
        vec![b'A'; n]
    } else {
        tag.as_bytes().to_vec()
    }
}

fn encode(word: u64) -> String {
    hex::encode(word.to_be_bytes())
}

// =============================================================================
// GENERATION
// =============================================================================

fn build() -> TestVectors {
    let mut named: Vec<(String, String)> = NAMED
        .iter()
        .map(|&(name, input)| (name.to_owned(), input.to_owned()))
        .collect();
    named.extend(SEQ_LENGTHS.iter().map(|n| (format!("seq_{n}"), format!("SEQ_{n}"))));

    let vectors = named
        .iter()
        .map(|(name, input)| Vector {
            name: name.clone(),
            input: input.clone(),
            hash: encode(smchash::hash(&input_bytes(input))),
        })
        .collect();

    let seeded_case = |name: &str, input: &str, seed: u64| SeededVector {
        name: name.to_owned(),
        input: input.to_owned(),
        seed: encode(seed),
        hash: encode(smchash::hash_seeded(&input_bytes(input), seed)),
    };
    let mut seeded: Vec<SeededVector> = named
        .iter()
        .map(|(name, input)| seeded_case(name, input, 0))
        .collect();
    for seed in EXTRA_SEEDS {
        seeded.push(seeded_case("hello", "Hello, World!", seed));
        seeded.push(seeded_case("seq_300", "SEQ_300", seed));
    }

    let tables: Vec<(u64, [u64; SECRET_WORDS])> = SECRET_SEEDS
        .iter()
        .map(|&seed| (seed, smchash::make_secret(seed)))
        .collect();

    let mut custom_secret = Vec::new();
    let all_tables = std::iter::once(("default".to_owned(), SECRET)).chain(
        tables
            .iter()
            .map(|(seed, words)| (format!("make_secret_{seed}"), *words)),
    );
    for (table_name, words) in all_tables {
        for (name, input, seed) in SECRET_CASES {
            custom_secret.push(SecretVector {
                name: name.to_owned(),
                secret: table_name.clone(),
                input: input.to_owned(),
                seed: encode(seed),
                hash: encode(smchash::hash_with_secret(&input_bytes(input), seed, &words)),
            });
        }
    }

    let secrets = tables
        .iter()
        .map(|(seed, words)| SecretTable {
            seed: encode(*seed),
            words: words.iter().map(|&w| encode(w)).collect(),
        })
        .collect();

    TestVectors {
        vectors,
        seeded,
        custom_secret,
        secrets,
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let data = build();

    let file = File::create(&args.output)
        .with_context(|| format!("Failed to create: {}", args.output.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &data)?;
    writer.flush()?;

    println!(
        "Wrote {} vectors to {}",
        data.vectors.len() + data.seeded.len() + data.custom_secret.len(),
        args.output.display()
    );
    Ok(())
}
