//! Parser for FASTA files using noodles.
//!
//! Reads labelled sequences to search. Supports both uncompressed and
//! gzip/bgzip compressed files, and `-` for standard input.
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz` (bgzip compressed)

use std::ffi::OsStr;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;

use crate::parsing::ParseError;
use crate::utils::validation::check_record_limit;

/// One labelled text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    /// Record name (first word of the definition line)
    pub label: String,

    /// Concatenated sequence lines
    pub sequence: Vec<u8>,
}

impl SequenceRecord {
    pub fn new(label: impl Into<String>, sequence: impl Into<Vec<u8>>) -> Self {
        Self {
            label: label.into(),
            sequence: sequence.into(),
        }
    }
}

/// Extensions accepted for FASTA input, before any compression suffix
const FASTA_EXTENSIONS: &[&str] = &["fa", "fasta", "fna"];

/// Compression suffixes read through a gzip decoder
const GZIP_EXTENSIONS: &[&str] = &["gz", "bgz"];

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(OsStr::to_str)
        .map(str::to_lowercase)
}

/// Whether `path` names FASTA input: a FASTA extension, optionally followed by
/// a gzip suffix, or `-` for standard input
pub fn is_fasta_file(path: &Path) -> bool {
    if path.as_os_str() == "-" {
        return true;
    }
    let inner = if is_gzipped(path) {
        path.file_stem().map(Path::new)
    } else {
        Some(path)
    };
    inner
        .and_then(extension_of)
        .is_some_and(|ext| FASTA_EXTENSIONS.contains(&ext.as_str()))
}

fn is_gzipped(path: &Path) -> bool {
    extension_of(path).is_some_and(|ext| GZIP_EXTENSIONS.contains(&ext.as_str()))
}

/// Parse every record of a FASTA file. A path of `-` reads standard input.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if the path lacks a FASTA extension or
/// no records are found, `ParseError::Io` if the file cannot be read,
/// `ParseError::Noodles` if parsing fails, or `ParseError::TooManyRecords` if
/// the limit is exceeded.
pub fn parse_fasta_file(path: &Path) -> Result<Vec<SequenceRecord>, ParseError> {
    if !is_fasta_file(path) {
        return Err(ParseError::InvalidFormat(format!(
            "'{}' is not a FASTA file (expected .fa, .fasta, or .fna, optionally .gz or .bgz)",
            path.display()
        )));
    }
    if path.as_os_str() == "-" {
        let stdin = std::io::stdin();
        return parse_fasta_reader(stdin.lock());
    }

    let file = std::fs::File::open(path)?;
    if is_gzipped(path) {
        parse_fasta_reader(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        parse_fasta_reader(BufReader::new(file))
    }
}

/// Parse FASTA records from any buffered reader.
///
/// # Errors
///
/// Returns `ParseError::Noodles` if parsing fails, `ParseError::InvalidFormat`
/// if no records are found, or `ParseError::TooManyRecords` if the limit is
/// exceeded.
pub fn parse_fasta_reader<R: BufRead>(reader: R) -> Result<Vec<SequenceRecord>, ParseError> {
    let mut fasta_reader = fasta::io::Reader::new(reader);
    let mut records = Vec::new();

    for result in fasta_reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        // Check record limit for DOS protection
        if check_record_limit(records.len()).is_some() {
            return Err(ParseError::TooManyRecords(records.len()));
        }

        let label = String::from_utf8_lossy(record.name()).to_string();
        let sequence = record.sequence().as_ref().to_vec();
        records.push(SequenceRecord { label, sequence });
    }

    if records.is_empty() {
        return Err(ParseError::InvalidFormat(
            "No sequences found in FASTA input".to_string(),
        ));
    }

    Ok(records)
}

/// Parse FASTA records from in-memory text
///
/// # Errors
///
/// See [`parse_fasta_reader`].
pub fn parse_fasta_text(text: &str) -> Result<Vec<SequenceRecord>, ParseError> {
    parse_fasta_reader(text.as_bytes())
}
