//! Matching many texts against one pattern.
//!
//! All texts are padded into one `rows × width` matrix and correlated with a
//! pattern matrix that is zero outside its first row. A 2-D circular
//! convolution with such a kernel never mixes rows:
//!
//! ```text
//! R[r][c] = Σ_c' P[0][c'] · T[r][c − c']
//! ```
//!
//! so one 2-D pass yields each text's 1-D response. [`find_each`] keeps the
//! plain per-text loop for comparison.

use tracing::debug;

use crate::core::encoder::Encoder;
use crate::core::error::MatchError;
use crate::core::types::MatchSet;
use crate::matching::chunked::{equal_length_match, find_in_windows};
use crate::spectral::correlator::SpectralCorrelator;
use crate::spectral::transform::SpectralTransform;

/// Per-row offset buffers that drop offsets a row cannot hold
struct RowAccumulator {
    /// Largest valid offset per row, `None` if the row is shorter than the pattern
    limits: Vec<Option<usize>>,
    offsets: Vec<Vec<usize>>,
}

impl RowAccumulator {
    fn new(texts: &[&[u8]], pattern_len: usize) -> Self {
        Self {
            limits: texts.iter().map(|t| t.len().checked_sub(pattern_len)).collect(),
            offsets: vec![Vec::new(); texts.len()],
        }
    }

    fn extend(&mut self, rows: Vec<Vec<usize>>, shift: usize) {
        for ((limit, acc), local) in self.limits.iter().zip(&mut self.offsets).zip(rows) {
            if let Some(limit) = *limit {
                acc.extend(
                    local
                        .into_iter()
                        .map(|o| o + shift)
                        .filter(|&o| o <= limit),
                );
            }
        }
    }

    fn finish(self) -> Vec<MatchSet> {
        self.offsets.into_iter().map(MatchSet::from_unsorted).collect()
    }
}

/// One 2-D pass over every text at full width.
///
/// # Errors
///
/// Returns `MatchError::UnknownSymbol` if the encoder's alphabet does not
/// cover the inputs.
pub fn find_batch_full<T: SpectralTransform>(
    correlator: &mut SpectralCorrelator<T>,
    encoder: &Encoder<'_>,
    texts: &[&[u8]],
    pattern: &[u8],
) -> Result<Vec<MatchSet>, MatchError> {
    let m = pattern.len();
    let mut acc = RowAccumulator::new(texts, m);
    if m == 0 || texts.iter().all(|t| t.len() < m) {
        return Ok(acc.finish());
    }

    let matrix = encoder.encode_batch(texts)?;
    let kernel = encoder.encode_pattern_matrix(pattern, matrix.rows(), matrix.width())?;
    debug!(
        rows = matrix.rows(),
        width = matrix.width(),
        pattern_len = m,
        "batched whole-text pass"
    );

    acc.extend(correlator.correlate_2d(&matrix, &kernel, m), 0);
    Ok(acc.finish())
}

/// Windowed 2-D passes: every window position is correlated across all rows
/// at once.
///
/// `width` must already be resolved against the pattern.
///
/// # Errors
///
/// Returns `MatchError::UnknownSymbol` if the encoder's alphabet does not
/// cover the inputs.
pub fn find_batch_windowed<T: SpectralTransform>(
    correlator: &mut SpectralCorrelator<T>,
    encoder: &Encoder<'_>,
    texts: &[&[u8]],
    pattern: &[u8],
    width: usize,
) -> Result<Vec<MatchSet>, MatchError> {
    let m = pattern.len();
    let mut acc = RowAccumulator::new(texts, m);
    let longest = texts.iter().map(|t| t.len()).max().unwrap_or(0);
    if m == 0 || longest < m {
        return Ok(acc.finish());
    }
    debug_assert!(width >= m, "chunk width must cover the pattern");

    let matrix = encoder.encode_batch(texts)?;
    let window = 2 * width;
    let kernel = encoder.encode_pattern_matrix(pattern, matrix.rows(), window)?;
    let sentinel = encoder.alphabet().sentinel();

    let mut windows = 0usize;
    for start in (0..=longest - m).step_by(width) {
        let slice = matrix.window(start, window, sentinel);
        acc.extend(correlator.correlate_2d(&slice, &kernel, m), start);
        windows += 1;
    }

    debug!(
        rows = matrix.rows(),
        width,
        windows,
        pattern_len = m,
        "batched windowed pass"
    );

    Ok(acc.finish())
}

/// Correlate each text on its own, whole or windowed.
///
/// # Errors
///
/// Returns `MatchError::UnknownSymbol` if the encoder's alphabet does not
/// cover the inputs.
pub fn find_each<T: SpectralTransform>(
    correlator: &mut SpectralCorrelator<T>,
    encoder: &Encoder<'_>,
    texts: &[&[u8]],
    pattern: &[u8],
    width: Option<usize>,
) -> Result<Vec<MatchSet>, MatchError> {
    texts
        .iter()
        .map(|text| match width {
            Some(width) => find_in_windows(correlator, encoder, text, pattern, width),
            None => find_in_text(correlator, encoder, text, pattern),
        })
        .collect()
}

/// One 1-D pass over a whole text.
///
/// # Errors
///
/// Returns `MatchError::UnknownSymbol` if the encoder's alphabet does not
/// cover the inputs.
pub fn find_in_text<T: SpectralTransform>(
    correlator: &mut SpectralCorrelator<T>,
    encoder: &Encoder<'_>,
    text: &[u8],
    pattern: &[u8],
) -> Result<MatchSet, MatchError> {
    let (n, m) = (text.len(), pattern.len());
    if m == 0 || n < m {
        return Ok(MatchSet::empty());
    }
    if n == m {
        return Ok(equal_length_match(text, pattern));
    }

    let encoded = encoder.encode(text, n, true)?;
    let kernel = encoder.encode_pattern(pattern, n)?;
    let offsets = correlator
        .correlate_1d(&encoded, &kernel, m)
        .into_iter()
        .filter(|&o| o <= n - m)
        .collect();
    Ok(MatchSet::from_unsorted(offsets))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alphabet::Alphabet;
    use crate::spectral::transform::RustFftTransform;

    const TEXTS: [&[u8]; 3] = [b"ABCD", b"ABC", b"ABCDD"];

    fn run<F>(texts: &[&[u8]], pattern: &[u8], f: F) -> Vec<MatchSet>
    where
        F: FnOnce(
            &mut SpectralCorrelator<RustFftTransform>,
            &Encoder<'_>,
            &[&[u8]],
            &[u8],
        ) -> Result<Vec<MatchSet>, MatchError>,
    {
        let alphabet = Alphabet::infer(texts.iter().copied().chain([pattern])).unwrap();
        let encoder = Encoder::new(&alphabet);
        let mut correlator = SpectralCorrelator::new(RustFftTransform::new());
        f(&mut correlator, &encoder, texts, pattern).unwrap()
    }

    fn full(texts: &[&[u8]], pattern: &[u8]) -> Vec<MatchSet> {
        run(texts, pattern, |c, e, t, p| find_batch_full(c, e, t, p))
    }

    fn windowed(texts: &[&[u8]], pattern: &[u8], width: usize) -> Vec<MatchSet> {
        run(texts, pattern, |c, e, t, p| {
            find_batch_windowed(c, e, t, p, width)
        })
    }

    fn each(texts: &[&[u8]], pattern: &[u8], width: Option<usize>) -> Vec<MatchSet> {
        run(texts, pattern, |c, e, t, p| find_each(c, e, t, p, width))
    }

    #[test]
    fn test_full_batch_prefix() {
        assert_eq!(full(&TEXTS, b"AB"), vec![vec![0], vec![0], vec![0]]);
    }

    #[test]
    fn test_full_batch_suffix_only_in_longest() {
        assert_eq!(full(&TEXTS, b"DD"), vec![vec![], vec![], vec![3]]);
    }

    #[test]
    fn test_windowed_batch() {
        assert_eq!(windowed(&TEXTS, b"AB", 2), vec![vec![0], vec![0], vec![0]]);
        assert_eq!(windowed(&TEXTS, b"DD", 2), vec![vec![], vec![], vec![3]]);
        assert_eq!(windowed(&TEXTS, b"CD", 3), vec![vec![2], vec![], vec![2]]);
    }

    #[test]
    fn test_pattern_longer_than_every_text() {
        let expected: Vec<MatchSet> = vec![MatchSet::empty(); 3];
        assert_eq!(full(&TEXTS, b"ABCDDD"), expected);
        assert_eq!(windowed(&TEXTS, b"ABCDDD", 6), expected);
    }

    #[test]
    fn test_empty_text_in_batch() {
        let texts: [&[u8]; 3] = [b"", b"ACGTAC", b"AC"];
        assert_eq!(full(&texts, b"AC"), vec![vec![], vec![0, 4], vec![0]]);
        assert_eq!(windowed(&texts, b"AC", 2), vec![vec![], vec![0, 4], vec![0]]);
    }

    #[test]
    fn test_per_text_agrees_with_batched() {
        let texts: [&[u8]; 4] = [b"GATTACAGATTACA", b"TACA", b"ACAGTACATAC", b"T"];
        let patterns: [&[u8]; 4] = [b"TACA", b"AC", b"A", b"GATTACAG"];
        for pattern in patterns {
            assert_eq!(each(&texts, pattern, None), full(&texts, pattern));
            let width = pattern.len() + 1;
            assert_eq!(
                each(&texts, pattern, Some(width)),
                windowed(&texts, pattern, width)
            );
        }
    }

    #[test]
    fn test_single_text_batch() {
        let texts: [&[u8]; 1] = [b"ABCDABCDABCDABCD"];
        assert_eq!(full(&texts, b"ABCD"), vec![vec![0, 4, 8, 12]]);
        assert_eq!(windowed(&texts, b"ABCD", 4), vec![vec![0, 4, 8, 12]]);
    }
}
