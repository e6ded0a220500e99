//! Loading of search texts.
//!
//! Texts are read from FASTA files: each record's name becomes the text's
//! label and its sequence lines are concatenated into one sequence.
//!
//! ## Example
//!
//! ```rust,no_run
//! use spectral_match::parsing::fasta::parse_fasta_file;
//! use std::path::Path;
//!
//! let records = parse_fasta_file(Path::new("genome.fa")).unwrap();
//! for record in &records {
//!     println!("{}: {} bases", record.label, record.sequence.len());
//! }
//! ```

pub mod fasta;

use crate::utils::validation::MAX_RECORDS;

/// Error type for input parsing
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid FASTA format: {0}")]
    InvalidFormat(String),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Too many records: {0} exceeds maximum allowed ({max})", max = MAX_RECORDS)]
    TooManyRecords(usize),
}
