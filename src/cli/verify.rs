use std::path::PathBuf;

use clap::Args;

use crate::cli::{load_inputs, OutputFormat, SpectralArgs};
use crate::core::types::MatchSet;
use crate::matching::engine::{Matcher, MatchingEngine};
use crate::matching::scan::ScanMatcher;
use crate::parsing::fasta::SequenceRecord;

#[derive(Args)]
pub struct VerifyArgs {
    /// Pattern to search for
    #[arg(required = true)]
    pub pattern: String,

    /// FASTA inputs (.fa, .fasta, .fna, optionally gzipped); '-' reads stdin
    #[arg(required = true, num_args = 1..)]
    pub inputs: Vec<PathBuf>,

    #[command(flatten)]
    pub spectral: SpectralArgs,
}

/// Execute verify subcommand
///
/// # Errors
///
/// Returns an error if an input cannot be parsed, the matching configuration
/// is invalid, or any sequence's spectral and scan results differ.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: VerifyArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let records = load_inputs(&args.inputs, verbose)?;
    let texts: Vec<&[u8]> = records.iter().map(|r| r.sequence.as_slice()).collect();
    let pattern = args.pattern.as_bytes();

    let engine = MatchingEngine::with_config(args.spectral.to_config());
    let spectral = engine.find_matches(&texts, pattern)?;
    let scanned = Matcher::find_matches(&ScanMatcher::new(), &texts, pattern)?;

    match format {
        OutputFormat::Text => print_text_comparison(&records, &spectral, &scanned),
        OutputFormat::Json => print_json_comparison(&records, &spectral, &scanned)?,
        OutputFormat::Tsv => print_tsv_comparison(&records, &spectral, &scanned),
    }

    let mismatches = spectral
        .iter()
        .zip(&scanned)
        .filter(|(a, b)| a != b)
        .count();
    if mismatches > 0 {
        anyhow::bail!(
            "{mismatches} of {} sequence(s) differ between spectral and scan results",
            records.len()
        );
    }

    if verbose {
        eprintln!("All {} sequence(s) agree", records.len());
    }

    Ok(())
}

fn print_text_comparison(records: &[SequenceRecord], spectral: &[MatchSet], scanned: &[MatchSet]) {
    for ((record, a), b) in records.iter().zip(spectral).zip(scanned) {
        if a == b {
            println!("{}: OK ({} matches)", record.label, a.len());
        } else {
            println!("{}: MISMATCH spectral={a} scan={b}", record.label);
        }
    }
}

fn print_json_comparison(
    records: &[SequenceRecord],
    spectral: &[MatchSet],
    scanned: &[MatchSet],
) -> anyhow::Result<()> {
    let output: Vec<serde_json::Value> = records
        .iter()
        .zip(spectral)
        .zip(scanned)
        .map(|((record, a), b)| {
            serde_json::json!({
                "label": record.label,
                "length": record.sequence.len(),
                "agree": a == b,
                "spectral": a,
                "scan": b,
            })
        })
        .collect();

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_comparison(records: &[SequenceRecord], spectral: &[MatchSet], scanned: &[MatchSet]) {
    println!("label\tspectral_count\tscan_count\tagree");
    for ((record, a), b) in records.iter().zip(spectral).zip(scanned) {
        println!("{}\t{}\t{}\t{}", record.label, a.len(), b.len(), a == b);
    }
}
