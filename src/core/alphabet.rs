//! Symbol alphabets and their numeric codes.
//!
//! The spectral detector relies on every real symbol having a non-zero code:
//! the per-offset response `Σ p·t·(p − t)²` vanishes whenever either side is
//! zero, so a zero code would behave as a wildcard. Padding uses a sentinel
//! code that must be disjoint from every symbol code, otherwise a pattern
//! could "match" into padded space.
//!
//! Codes are dense (`rank + 1` in byte order) rather than raw byte ordinals.
//! Small codes keep the cubic terms small, which keeps transform round-off
//! well below [`MATCH_TOLERANCE`](crate::spectral::correlator::MATCH_TOLERANCE).
//!
//! The terms grow with the fourth power of the largest code, so alphabets are
//! capped at [`MAX_ALPHABET_SIZE`] symbols. Past that, round-off at a true
//! match can exceed the tolerance and the match would be missed. The cap
//! covers nucleotide, protein, and mixed-case letter alphabets.

use crate::core::error::MatchError;

/// Nucleotide symbols, including the ambiguous base `N`.
pub const DNA_SYMBOLS: &[u8] = b"ACGTN";

/// Largest number of distinct symbols an alphabet may hold
pub const MAX_ALPHABET_SIZE: usize = 64;

/// An ordered set of byte symbols with non-zero codes and a padding sentinel.
#[derive(Debug, Clone, PartialEq)]
pub struct Alphabet {
    /// Code for every byte value; 0.0 marks bytes outside the alphabet
    codes: [f64; 256],
    size: usize,
    sentinel: f64,
}

impl Alphabet {
    /// Build an alphabet from the given symbols. Duplicates are ignored.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::AlphabetTooLarge` for more than
    /// [`MAX_ALPHABET_SIZE`] distinct symbols.
    pub fn new(symbols: &[u8]) -> Result<Self, MatchError> {
        let mut present = [false; 256];
        for &symbol in symbols {
            present[usize::from(symbol)] = true;
        }
        Self::from_present(&present)
    }

    /// Build the smallest alphabet covering every symbol in `sequences`.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::AlphabetTooLarge` if the sequences use more than
    /// [`MAX_ALPHABET_SIZE`] distinct symbols.
    pub fn infer<'a, I>(sequences: I) -> Result<Self, MatchError>
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        let mut present = [false; 256];
        for sequence in sequences {
            for &symbol in sequence {
                present[usize::from(symbol)] = true;
            }
        }
        Self::from_present(&present)
    }

    fn from_present(present: &[bool; 256]) -> Result<Self, MatchError> {
        let size = present.iter().filter(|&&p| p).count();
        if size > MAX_ALPHABET_SIZE {
            return Err(MatchError::AlphabetTooLarge {
                size,
                max: MAX_ALPHABET_SIZE,
            });
        }
        Ok(Self::assign_codes(present))
    }

    fn assign_codes(present: &[bool; 256]) -> Self {
        let mut codes = [0.0; 256];
        let mut size = 0;
        for (byte, _) in present.iter().enumerate().filter(|(_, p)| **p) {
            size += 1;
            #[allow(clippy::cast_precision_loss)] // At most 256 byte values
            let code = size as f64;
            codes[byte] = code;
        }

        #[allow(clippy::cast_precision_loss)]
        let sentinel = (size + 1) as f64;

        Self {
            codes,
            size,
            sentinel,
        }
    }

    /// Upper-case nucleotide alphabet (`ACGTN`)
    pub fn dna() -> Self {
        let mut present = [false; 256];
        for &symbol in DNA_SYMBOLS {
            present[usize::from(symbol)] = true;
        }
        Self::assign_codes(&present)
    }

    /// Replace the padding sentinel.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::InvalidSentinel` if `code` is zero or not finite, or
    /// `MatchError::SentinelInAlphabet` if it equals the code of any symbol.
    #[allow(clippy::float_cmp)] // Codes are small exact integers
    pub fn with_sentinel(mut self, code: f64) -> Result<Self, MatchError> {
        if code == 0.0 || !code.is_finite() {
            return Err(MatchError::InvalidSentinel(code));
        }
        if self.codes.iter().any(|&c| c != 0.0 && c == code) {
            return Err(MatchError::SentinelInAlphabet(code));
        }
        self.sentinel = code;
        Ok(self)
    }

    /// Numeric code for `symbol`, or `None` if it is not in the alphabet
    #[must_use]
    pub fn code(&self, symbol: u8) -> Option<f64> {
        let code = self.codes[usize::from(symbol)];
        (code != 0.0).then_some(code)
    }

    /// Numeric code for `symbol`.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::UnknownSymbol` if the symbol is not in the alphabet.
    pub fn require_code(&self, symbol: u8) -> Result<f64, MatchError> {
        self.code(symbol).ok_or(MatchError::UnknownSymbol {
            symbol: char::from(symbol),
        })
    }

    #[must_use]
    pub fn sentinel(&self) -> f64 {
        self.sentinel
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Whether every byte of `sequence` belongs to this alphabet
    #[must_use]
    pub fn covers(&self, sequence: &[u8]) -> bool {
        sequence.iter().all(|&b| self.code(b).is_some())
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::dna()
    }
}
