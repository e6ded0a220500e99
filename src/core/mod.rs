//! Core data types for spectral pattern matching.
//!
//! - [`Alphabet`]: symbol codes and the padding sentinel
//! - [`Encoder`], [`EncodedMatrix`]: fixed-width numeric encoding of sequences
//! - [`MatchSet`]: sorted, de-duplicated match offsets for one text
//! - [`Chunking`], [`ChunkWidth`]: whole-text versus windowed matching
//! - [`MatchError`]: configuration errors
//!
//! ## Codes
//!
//! | Value | Meaning |
//! |-------|---------|
//! | `1..=k` | symbol codes, in byte order |
//! | `k + 1` | default padding sentinel |
//! | `0` | pattern padding (never a symbol) |

pub mod alphabet;
pub mod encoder;
pub mod error;
pub mod types;

pub use alphabet::{Alphabet, MAX_ALPHABET_SIZE};
pub use encoder::{EncodedMatrix, Encoder};
pub use error::MatchError;
pub use types::{ChunkWidth, Chunking, MatchSet};
