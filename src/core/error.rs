/// Errors raised by the matching core.
///
/// Only configuration problems are errors. Degenerate inputs (empty pattern,
/// empty text, pattern longer than text) resolve to empty match sets instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MatchError {
    #[error("Invalid chunk width '{0}': expected 'full', 'auto', or a positive integer")]
    InvalidChunkWidth(String),

    #[error("Chunk width {width} is smaller than the pattern length {pattern_len}")]
    ChunkWidthTooSmall { width: usize, pattern_len: usize },

    #[error("Alphabet has {size} symbols; at most {max} are supported")]
    AlphabetTooLarge { size: usize, max: usize },

    #[error("Invalid alphabet '{0}': expected 'dna' or ASCII symbols")]
    InvalidAlphabet(String),

    #[error("Symbol {symbol:?} is not part of the alphabet")]
    UnknownSymbol { symbol: char },

    #[error("Padding sentinel {0} collides with an alphabet symbol code")]
    SentinelInAlphabet(f64),

    #[error("Padding sentinel must be a finite non-zero code, got {0}")]
    InvalidSentinel(f64),
}
