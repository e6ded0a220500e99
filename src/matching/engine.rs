use std::iter;

use tracing::debug;

use crate::core::alphabet::Alphabet;
use crate::core::encoder::Encoder;
use crate::core::error::MatchError;
use crate::core::types::{Chunking, MatchSet};
use crate::matching::batch::{find_batch_full, find_batch_windowed, find_each};
use crate::spectral::correlator::SpectralCorrelator;
use crate::spectral::transform::RustFftTransform;

/// An exact matcher: one [`MatchSet`] per text, in input order
pub trait Matcher {
    /// Short name used in logs and reports
    fn name(&self) -> &'static str;

    /// Find every occurrence of `pattern` in each of `texts`.
    ///
    /// # Errors
    ///
    /// Returns a `MatchError` for invalid configuration; no partial results
    /// are produced.
    fn find_matches(&self, texts: &[&[u8]], pattern: &[u8]) -> Result<Vec<MatchSet>, MatchError>;
}

/// Configuration for the spectral engine
#[derive(Debug, Clone)]
pub struct MatchingConfig {
    /// Whole-text or windowed correlation
    pub chunking: Chunking,
    /// Correlate all texts in one 2-D pass instead of one pass per text
    pub batched: bool,
    /// Fixed alphabet; inferred from the inputs of each call when `None`
    pub alphabet: Option<Alphabet>,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            chunking: Chunking::Full,
            batched: true,
            alphabet: None,
        }
    }
}

/// The spectral matching engine
#[derive(Debug, Clone, Default)]
pub struct MatchingEngine {
    config: MatchingConfig,
}

impl MatchingEngine {
    /// Create a new matching engine with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new matching engine with custom configuration
    pub fn with_config(config: MatchingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatchingConfig {
        &self.config
    }

    /// Find every occurrence of `pattern` in each text.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::InvalidChunkWidth` or `MatchError::ChunkWidthTooSmall`
    /// for a bad chunk width, `MatchError::UnknownSymbol` when a configured
    /// alphabet does not cover the inputs, and `MatchError::AlphabetTooLarge`
    /// when the inputs use too many distinct symbols. All checks run before
    /// any transform.
    pub fn find_matches(
        &self,
        texts: &[&[u8]],
        pattern: &[u8],
    ) -> Result<Vec<MatchSet>, MatchError> {
        self.config.chunking.validate()?;

        let m = pattern.len();
        if m == 0 {
            return Ok(vec![MatchSet::empty(); texts.len()]);
        }

        let width = match self.config.chunking {
            Chunking::Full => None,
            Chunking::Windowed(chunk_width) => Some(chunk_width.resolve(m)?),
        };

        if texts.iter().all(|t| t.len() < m) {
            debug!(pattern_len = m, "pattern longer than every text");
            return Ok(vec![MatchSet::empty(); texts.len()]);
        }

        let alphabet = match &self.config.alphabet {
            Some(alphabet) => {
                if let Some(symbol) = texts
                    .iter()
                    .chain(iter::once(&pattern))
                    .flat_map(|s| s.iter())
                    .find(|&&b| alphabet.code(b).is_none())
                {
                    return Err(MatchError::UnknownSymbol {
                        symbol: char::from(*symbol),
                    });
                }
                alphabet.clone()
            }
            None => Alphabet::infer(texts.iter().copied().chain(iter::once(pattern)))?,
        };

        debug!(
            texts = texts.len(),
            pattern_len = m,
            chunking = %self.config.chunking,
            batched = self.config.batched,
            alphabet_size = alphabet.len(),
            "spectral match"
        );

        let encoder = Encoder::new(&alphabet);
        let mut correlator = SpectralCorrelator::new(RustFftTransform::new());

        match (self.config.batched, width) {
            (true, None) => find_batch_full(&mut correlator, &encoder, texts, pattern),
            (true, Some(width)) => {
                find_batch_windowed(&mut correlator, &encoder, texts, pattern, width)
            }
            (false, width) => find_each(&mut correlator, &encoder, texts, pattern, width),
        }
    }
}

impl Matcher for MatchingEngine {
    fn name(&self) -> &'static str {
        "spectral"
    }

    fn find_matches(&self, texts: &[&[u8]], pattern: &[u8]) -> Result<Vec<MatchSet>, MatchError> {
        MatchingEngine::find_matches(self, texts, pattern)
    }
}

/// Find every occurrence of `pattern` in each text using the spectral engine.
///
/// Returns one [`MatchSet`] per text, in the order of `texts`.
///
/// # Errors
///
/// Returns `MatchError::InvalidChunkWidth` or `MatchError::ChunkWidthTooSmall`
/// for a bad chunk width.
///
/// # Example
///
/// ```
/// use spectral_match::{match_texts, Chunking};
///
/// let sets = match_texts(&["ABCD", "ABC", "ABCDD"], "DD", Chunking::Full).unwrap();
/// assert_eq!(sets[2].as_slice(), &[3]);
/// assert!(sets[0].is_empty());
/// ```
pub fn match_texts<S, P>(
    texts: &[S],
    pattern: P,
    chunking: Chunking,
) -> Result<Vec<MatchSet>, MatchError>
where
    S: AsRef<[u8]>,
    P: AsRef<[u8]>,
{
    let texts: Vec<&[u8]> = texts.iter().map(AsRef::as_ref).collect();
    let engine = MatchingEngine::with_config(MatchingConfig {
        chunking,
        ..MatchingConfig::default()
    });
    engine.find_matches(&texts, pattern.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alphabet::MAX_ALPHABET_SIZE;
    use crate::core::types::ChunkWidth;

    const TEXTS: [&str; 3] = ["ABCD", "ABC", "ABCDD"];

    #[test]
    fn test_repeated_pattern() {
        for chunking in [Chunking::Full, Chunking::Windowed(ChunkWidth::PatternLength)] {
            let sets = match_texts(&["ABCDABCDABCDABCD"], "ABCD", chunking).unwrap();
            assert_eq!(sets, vec![vec![0, 4, 8, 12]]);
        }
    }

    #[test]
    fn test_match_at_end() {
        let sets = match_texts(&["AAAAAABBC"], "BC", Chunking::Full).unwrap();
        assert_eq!(sets, vec![vec![7]]);
    }

    #[test]
    fn test_batch_examples() {
        let prefix = match_texts(&TEXTS, "AB", Chunking::Full).unwrap();
        assert_eq!(prefix, vec![vec![0], vec![0], vec![0]]);

        let suffix = match_texts(&TEXTS, "DD", Chunking::Full).unwrap();
        assert_eq!(suffix, vec![vec![], vec![], vec![3]]);
    }

    #[test]
    fn test_pattern_longer_than_all_texts() {
        let sets = match_texts(&TEXTS, "ABCDEFG", Chunking::Full).unwrap();
        assert_eq!(sets.len(), 3);
        assert!(sets.iter().all(MatchSet::is_empty));
    }

    #[test]
    fn test_empty_pattern() {
        let sets = match_texts(&TEXTS, "", "auto".parse().unwrap()).unwrap();
        assert!(sets.iter().all(MatchSet::is_empty));
    }

    #[test]
    fn test_no_texts() {
        let texts: [&str; 0] = [];
        assert!(match_texts(&texts, "A", Chunking::Full).unwrap().is_empty());
    }

    #[test]
    fn test_zero_chunk_width_rejected() {
        let result = match_texts(&TEXTS, "AB", Chunking::Windowed(ChunkWidth::Fixed(0)));
        assert!(matches!(result, Err(MatchError::InvalidChunkWidth(_))));
    }

    #[test]
    fn test_chunk_width_below_pattern_rejected() {
        let result = match_texts(&TEXTS, "ABC", Chunking::Windowed(ChunkWidth::Fixed(2)));
        assert_eq!(
            result,
            Err(MatchError::ChunkWidthTooSmall {
                width: 2,
                pattern_len: 3
            })
        );
    }

    #[test]
    fn test_per_text_mode() {
        let engine = MatchingEngine::with_config(MatchingConfig {
            chunking: Chunking::Windowed(ChunkWidth::Fixed(3)),
            batched: false,
            alphabet: None,
        });
        let texts: Vec<&[u8]> = TEXTS.iter().map(|t| t.as_bytes()).collect();
        let sets = engine.find_matches(&texts, b"CD").unwrap();
        assert_eq!(sets, vec![vec![2], vec![], vec![2]]);
    }

    #[test]
    fn test_configured_alphabet_rejects_unknown_symbol() {
        let engine = MatchingEngine::with_config(MatchingConfig {
            alphabet: Some(Alphabet::dna()),
            ..MatchingConfig::default()
        });
        let texts: [&[u8]; 1] = [b"ACGTX"];
        assert_eq!(
            engine.find_matches(&texts, b"AC"),
            Err(MatchError::UnknownSymbol { symbol: 'X' })
        );
    }

    #[test]
    fn test_configured_alphabet() {
        let engine = MatchingEngine::with_config(MatchingConfig {
            alphabet: Some(Alphabet::dna()),
            ..MatchingConfig::default()
        });
        let texts: [&[u8]; 2] = [b"ACGTNACGT", b"GTAC"];
        let sets = engine.find_matches(&texts, b"ACG").unwrap();
        assert_eq!(sets, vec![vec![0, 5], vec![]]);
    }

    #[test]
    fn test_too_many_symbols_rejected() {
        let text: Vec<u8> = (0..=u8::MAX).collect();
        let texts = [text.as_slice()];
        for chunking in [Chunking::Full, Chunking::Windowed(ChunkWidth::PatternLength)] {
            let result = MatchingEngine::with_config(MatchingConfig {
                chunking,
                ..MatchingConfig::default()
            })
            .find_matches(&texts, &text[100..108]);
            assert_eq!(
                result,
                Err(MatchError::AlphabetTooLarge {
                    size: 256,
                    max: MAX_ALPHABET_SIZE
                })
            );
        }
    }

    #[test]
    fn test_matcher_trait_name() {
        let engine = MatchingEngine::new();
        assert_eq!(Matcher::name(&engine), "spectral");
    }
}
