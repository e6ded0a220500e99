//! Command-line interface for spectral-match.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **search**: Find every exact occurrence of a pattern in FASTA sequences
//! - **verify**: Run the spectral matcher and the scanning matcher side by side
//!
//! ## Usage
//!
//! ```text
//! # Search two genomes with whole-text correlation
//! spectral-match search ACGTTGCA genome1.fa genome2.fa.gz
//!
//! # Windowed correlation, window step equal to the pattern length
//! spectral-match search --chunking auto ACGTTGCA genome.fa
//!
//! # Pipe FASTA in and get JSON out
//! cat genome.fa | spectral-match --format json search ACGT -
//!
//! # Check the spectral results against a direct scan
//! spectral-match verify --chunking 64 ACGTTGCA genome.fa
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::alphabet::Alphabet;
use crate::core::types::Chunking;
use crate::matching::engine::MatchingConfig;
use crate::parsing::fasta::{parse_fasta_file, SequenceRecord};
use crate::utils::validation::{check_record_limit, parse_alphabet};

pub mod search;
pub mod verify;

#[derive(Parser)]
#[command(name = "spectral-match")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Find exact pattern occurrences in genomes with spectral cross-correlation")]
#[command(
    long_about = "spectral-match reports every offset at which a pattern occurs exactly in one or more FASTA sequences.\n\nMatches are detected as zeros of a cubic cross-correlation computed with FFTs:\n- Whole-text correlation costs O(n log n) per sequence\n- Windowed correlation bounds the cost to O(n log m)\n- Many sequences are correlated together in one batched pass"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find every occurrence of a pattern
    Search(search::SearchArgs),

    /// Compare spectral results against a direct scan
    Verify(verify::VerifyArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Options shared by every command that runs the spectral engine
#[derive(clap::Args, Clone, Debug)]
pub struct SpectralArgs {
    /// Correlation layout: 'full', 'auto' (window step = pattern length), or a
    /// positive window step
    #[arg(short, long, default_value = "full")]
    pub chunking: Chunking,

    /// Correlate sequences one at a time instead of in one batched pass
    #[arg(long)]
    pub per_text: bool,

    /// Restrict the alphabet ('dna' or the list of allowed characters);
    /// inferred from the inputs by default
    #[arg(long, value_parser = alphabet_arg)]
    pub alphabet: Option<Alphabet>,
}

impl SpectralArgs {
    pub fn to_config(&self) -> MatchingConfig {
        MatchingConfig {
            chunking: self.chunking,
            batched: !self.per_text,
            alphabet: self.alphabet.clone(),
        }
    }
}

fn alphabet_arg(s: &str) -> Result<Alphabet, String> {
    parse_alphabet(s).map_err(|e| e.to_string())
}

/// Load every record of every input, keeping input order
fn load_inputs(inputs: &[PathBuf], verbose: bool) -> anyhow::Result<Vec<SequenceRecord>> {
    let mut records = Vec::new();
    for input in inputs {
        let parsed = parse_fasta_file(input)
            .map_err(|e| anyhow::anyhow!("Failed to read '{}': {e}", input.display()))?;
        if verbose {
            eprintln!("Loaded {} sequence(s) from {}", parsed.len(), input.display());
        }
        for record in parsed {
            if let Some(msg) = check_record_limit(records.len()) {
                anyhow::bail!(msg);
            }
            records.push(record);
        }
    }
    Ok(records)
}
