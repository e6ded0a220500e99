use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::cli::{load_inputs, OutputFormat, SpectralArgs};
use crate::core::types::MatchSet;
use crate::matching::engine::{Matcher, MatchingEngine};
use crate::matching::scan::ScanMatcher;
use crate::parsing::fasta::SequenceRecord;

/// Which matcher answers the search
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum Algorithm {
    /// Cubic cross-correlation via FFT
    #[default]
    Spectral,
    /// Direct byte scanning
    Scan,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Pattern to search for
    #[arg(required = true)]
    pub pattern: String,

    /// FASTA inputs (.fa, .fasta, .fna, optionally gzipped); '-' reads stdin
    #[arg(required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    /// Matching algorithm
    #[arg(short, long, value_enum, default_value = "spectral")]
    pub algorithm: Algorithm,

    #[command(flatten)]
    pub spectral: SpectralArgs,
}

/// Matches for one labelled sequence
#[derive(Debug, Serialize)]
pub struct SearchHit<'a> {
    pub label: &'a str,
    pub length: usize,
    pub offsets: &'a MatchSet,
}

/// Execute search subcommand
///
/// # Errors
///
/// Returns an error if an input cannot be parsed or the matching
/// configuration is invalid.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: SearchArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let records = load_inputs(&args.inputs, verbose)?;

    let matcher: Box<dyn Matcher> = match args.algorithm {
        Algorithm::Spectral => Box::new(MatchingEngine::with_config(args.spectral.to_config())),
        Algorithm::Scan => Box::new(ScanMatcher::new()),
    };

    if verbose {
        eprintln!(
            "Searching {} sequence(s) for a {}-symbol pattern using {} (chunking: {})",
            records.len(),
            args.pattern.len(),
            matcher.name(),
            args.spectral.chunking,
        );
    }

    let texts: Vec<&[u8]> = records.iter().map(|r| r.sequence.as_slice()).collect();
    let sets = matcher.find_matches(&texts, args.pattern.as_bytes())?;

    match format {
        OutputFormat::Text => print_text_results(&records, &sets),
        OutputFormat::Json => print_json_results(&records, &sets)?,
        OutputFormat::Tsv => print_tsv_results(&records, &sets),
    }

    Ok(())
}

fn print_text_results(records: &[SequenceRecord], sets: &[MatchSet]) {
    for (record, set) in records.iter().zip(sets) {
        println!("{}: {set}", record.label);
    }
}

fn print_json_results(records: &[SequenceRecord], sets: &[MatchSet]) -> anyhow::Result<()> {
    let hits: Vec<SearchHit<'_>> = records
        .iter()
        .zip(sets)
        .map(|(record, offsets)| SearchHit {
            label: &record.label,
            length: record.sequence.len(),
            offsets,
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&hits)?);
    Ok(())
}

fn print_tsv_results(records: &[SequenceRecord], sets: &[MatchSet]) {
    println!("label\tlength\tcount\toffsets");
    for (record, set) in records.iter().zip(sets) {
        let offsets: Vec<String> = set.iter().map(ToString::to_string).collect();
        println!(
            "{}\t{}\t{}\t{}",
            record.label,
            record.sequence.len(),
            set.len(),
            offsets.join(",")
        );
    }
}
