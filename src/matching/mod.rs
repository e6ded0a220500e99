//! Matching drivers built on the spectral correlator.
//!
//! - [`MatchingEngine`]: entry point; validates configuration and picks a driver
//! - [`chunked`]: overlapping windows over one text (`n log m`)
//! - [`batch`]: many texts per 2-D pass, whole or windowed
//! - [`ScanMatcher`]: direct scanning peer with the same [`Matcher`] contract
//!
//! ## Strategy selection
//!
//! | `chunking` | `batched` | Driver |
//! |------------|-----------|--------|
//! | `Full` | `true` | one 2-D pass over all texts |
//! | `Windowed` | `true` | one 2-D pass per window position |
//! | `Full` | `false` | one 1-D pass per text |
//! | `Windowed` | `false` | chunk driver per text |
//!
//! ## Example
//!
//! ```rust
//! use spectral_match::{ChunkWidth, Chunking, MatchingConfig, MatchingEngine};
//!
//! let engine = MatchingEngine::with_config(MatchingConfig {
//!     chunking: Chunking::Windowed(ChunkWidth::PatternLength),
//!     ..MatchingConfig::default()
//! });
//!
//! let texts: [&[u8]; 2] = [b"GATTACA", b"TACAT"];
//! let sets = engine.find_matches(&texts, b"TACA").unwrap();
//! assert_eq!(sets[0].as_slice(), &[3]);
//! assert_eq!(sets[1].as_slice(), &[0]);
//! ```

pub mod batch;
pub mod chunked;
pub mod engine;
pub mod scan;

pub use engine::{match_texts, Matcher, MatchingConfig, MatchingEngine};
pub use scan::ScanMatcher;
