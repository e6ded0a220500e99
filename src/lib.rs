//! # spectral-match
//!
//! A library for finding every exact occurrence of a pattern in one or more
//! sequences (genomes) using spectral cross-correlation.
//!
//! Instead of comparing characters directly, each text and the reversed
//! pattern are encoded as numbers and the cubic correlation
//! `Σ p·t·(p − t)²` is evaluated for every offset at once with FFTs. The
//! response is zero exactly where the pattern matches.
//!
//! ## Features
//!
//! - **Whole-text matching**: one `O(n log n)` transform per text
//! - **Windowed matching**: overlapping windows bound the cost to `O(n log m)`
//! - **Batched matching**: many texts correlated in one 2-D transform
//! - **Scan matcher**: a direct scanning peer with the same contract, for validation
//!
//! ## Example
//!
//! ```rust
//! use spectral_match::{match_texts, Chunking};
//!
//! let sets = match_texts(&["ABCDABCDABCDABCD"], "ABCD", Chunking::Full).unwrap();
//! assert_eq!(sets[0].as_slice(), &[0, 4, 8, 12]);
//!
//! let windowed = match_texts(&["AAAAAABBC"], "BC", "auto".parse().unwrap()).unwrap();
//! assert_eq!(windowed[0].as_slice(), &[7]);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Alphabets, encoding, match sets, and errors
//! - [`spectral`]: Transform capability and the cubic correlator
//! - [`matching`]: Chunk and batch drivers, engine, and scan matcher
//! - [`parsing`]: FASTA loading
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod matching;
pub mod parsing;
pub mod spectral;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::alphabet::Alphabet;
pub use crate::core::error::MatchError;
pub use crate::core::types::*;
pub use matching::engine::{match_texts, Matcher, MatchingConfig, MatchingEngine};
pub use matching::scan::ScanMatcher;
