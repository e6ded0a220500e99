//! Exact-match detection by cubic cross-correlation.
//!
//! For a text `t` and pattern `p`, the response at offset `i` is
//!
//! ```text
//! S_i = Σ_j p_j³·t_{i+j} − 2·p_j²·t_{i+j}² + p_j·t_{i+j}³
//!     = Σ_j p_j·t_{i+j}·(p_j − t_{i+j})²
//! ```
//!
//! Every summand is non-negative when the codes share a sign, and is zero
//! only when the aligned codes are equal or one of them is zero. Symbol codes
//! are never zero and pattern padding always is, so `S_i == 0` exactly when
//! the pattern occurs at `i`. Each of the three terms is a correlation, so the
//! whole response costs three forward transforms of the text, three of the
//! pattern, and one inverse transform.
//!
//! The transform is circular. With the pattern reversed, the response at
//! index `k` belongs to the alignment starting at `k − (m − 1)`; indices
//! below `m − 1` come from alignments wrapping across the buffer boundary and
//! are discarded.

use rustfft::num_complex::Complex;
use tracing::trace;

use crate::core::encoder::EncodedMatrix;
use crate::spectral::transform::SpectralTransform;

/// Responses with magnitude below this are treated as exact matches.
///
/// The test is exact in infinite precision; the tolerance only absorbs
/// floating-point round-off and is not a similarity threshold.
pub const MATCH_TOLERANCE: f64 = 1.0e-6;

/// Cubic correlation response of a `rows × width` text matrix
#[derive(Debug, Clone)]
pub struct SpectralResponse {
    rows: usize,
    width: usize,
    values: Vec<Complex<f64>>,
}

impl SpectralResponse {
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn row(&self, index: usize) -> &[Complex<f64>] {
        &self.values[index * self.width..(index + 1) * self.width]
    }

    /// Match offsets in `row` for a pattern of length `pattern_len`, with the
    /// reversal skew removed and wrap-around candidates dropped.
    pub fn candidates(&self, row: usize, pattern_len: usize) -> impl Iterator<Item = usize> + '_ {
        let skew = pattern_len.saturating_sub(1);
        self.row(row)
            .iter()
            .enumerate()
            .filter(|(_, value)| value.norm() < MATCH_TOLERANCE)
            .filter_map(move |(k, _)| k.checked_sub(skew))
    }
}

/// Runs the cubic correlation through a [`SpectralTransform`]
pub struct SpectralCorrelator<T: SpectralTransform> {
    transform: T,
}

impl<T: SpectralTransform> SpectralCorrelator<T> {
    pub fn new(transform: T) -> Self {
        Self { transform }
    }

    /// Response for a single text row against a reversed, zero-padded
    /// pattern of the same width.
    pub fn response_1d(&mut self, text: &[f64], pattern: &[f64]) -> SpectralResponse {
        debug_assert_eq!(text.len(), pattern.len(), "text and pattern widths differ");
        let width = text.len();
        let values = self.combine(text, pattern, |transform, buffer| {
            transform.forward(buffer);
        });
        let values = self.finish(values, |transform, buffer| transform.inverse(buffer));
        SpectralResponse {
            rows: 1,
            width,
            values,
        }
    }

    /// Response for every row of `text` at once. `pattern` must have the same
    /// shape, holding the reversed pattern in row 0 and zeros elsewhere; the
    /// 2-D convolution then reduces to an independent 1-D convolution per row.
    pub fn response_2d(&mut self, text: &EncodedMatrix, pattern: &EncodedMatrix) -> SpectralResponse {
        debug_assert_eq!(text.rows(), pattern.rows(), "row counts differ");
        debug_assert_eq!(text.width(), pattern.width(), "widths differ");
        let (rows, width) = (text.rows(), text.width());
        let values = self.combine(text.as_slice(), pattern.as_slice(), |transform, buffer| {
            transform.forward_2d(buffer, rows, width);
        });
        let values = self.finish(values, |transform, buffer| {
            transform.inverse_2d(buffer, rows, width);
        });
        SpectralResponse {
            rows,
            width,
            values,
        }
    }

    /// Match offsets for one text row against an encoded pattern
    pub fn correlate_1d(&mut self, text: &[f64], pattern: &[f64], pattern_len: usize) -> Vec<usize> {
        self.response_1d(text, pattern)
            .candidates(0, pattern_len)
            .collect()
    }

    /// Match offsets for every row of `text`, in row order
    pub fn correlate_2d(
        &mut self,
        text: &EncodedMatrix,
        pattern: &EncodedMatrix,
        pattern_len: usize,
    ) -> Vec<Vec<usize>> {
        let response = self.response_2d(text, pattern);
        (0..response.rows())
            .map(|r| response.candidates(r, pattern_len).collect())
            .collect()
    }

    /// Forward-transform the powers of text and pattern and sum the three
    /// products in the frequency domain.
    fn combine<F>(&mut self, text: &[f64], pattern: &[f64], forward: F) -> Vec<Complex<f64>>
    where
        F: Fn(&mut T, &mut [Complex<f64>]),
    {
        let mut spectrum = |values: &[f64], power: i32| {
            let mut buffer: Vec<Complex<f64>> = values
                .iter()
                .map(|&v| Complex::new(v.powi(power), 0.0))
                .collect();
            forward(&mut self.transform, buffer.as_mut_slice());
            buffer
        };

        let t1 = spectrum(text, 1);
        let t2 = spectrum(text, 2);
        let t3 = spectrum(text, 3);
        let p1 = spectrum(pattern, 1);
        let p2 = spectrum(pattern, 2);
        let p3 = spectrum(pattern, 3);

        (0..t1.len())
            .map(|k| p3[k] * t1[k] - 2.0 * p2[k] * t2[k] + p1[k] * t3[k])
            .collect()
    }

    fn finish<F>(&mut self, mut values: Vec<Complex<f64>>, inverse: F) -> Vec<Complex<f64>>
    where
        F: Fn(&mut T, &mut [Complex<f64>]),
    {
        inverse(&mut self.transform, values.as_mut_slice());
        trace!(len = values.len(), "inverted cubic correlation spectrum");
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alphabet::Alphabet;
    use crate::core::encoder::Encoder;
    use crate::spectral::transform::RustFftTransform;

    fn correlate(text: &[u8], pattern: &[u8]) -> Vec<usize> {
        let alphabet = Alphabet::infer([text, pattern]).unwrap();
        let encoder = Encoder::new(&alphabet);
        let t = encoder.encode(text, text.len(), true).unwrap();
        let p = encoder.encode_pattern(pattern, text.len()).unwrap();
        let mut correlator = SpectralCorrelator::new(RustFftTransform::new());
        correlator.correlate_1d(&t, &p, pattern.len())
    }

    #[test]
    fn test_repeated_pattern() {
        assert_eq!(correlate(b"ABCDABCDABCDABCD", b"ABCD"), vec![0, 4, 8, 12]);
    }

    #[test]
    fn test_match_at_end() {
        assert_eq!(correlate(b"AAAAAABBC", b"BC"), vec![7]);
    }

    #[test]
    fn test_single_symbol_pattern() {
        assert_eq!(correlate(b"ABCD", b"D"), vec![3]);
    }

    #[test]
    fn test_overlapping_matches() {
        assert_eq!(correlate(b"AAAA", b"AA"), vec![0, 1, 2]);
    }

    #[test]
    fn test_no_match() {
        assert!(correlate(b"ACGTACGT", b"TT").is_empty());
    }

    #[test]
    fn test_wrap_around_is_discarded() {
        // "CA" occurs only across the circular boundary of "ABBC"
        assert!(correlate(b"ABBC", b"CA").is_empty());
    }

    #[test]
    fn test_response_is_near_zero_only_at_matches() {
        let alphabet = Alphabet::new(b"AB").unwrap();
        let encoder = Encoder::new(&alphabet);
        let t = encoder.encode(b"ABAB", 4, true).unwrap();
        let p = encoder.encode_pattern(b"AB", 4).unwrap();
        let mut correlator = SpectralCorrelator::new(RustFftTransform::new());
        let response = correlator.response_1d(&t, &p);

        // Raw indices are shifted by m - 1 = 1
        assert!(response.row(0)[1].norm() < MATCH_TOLERANCE);
        assert!(response.row(0)[3].norm() < MATCH_TOLERANCE);
        assert!(response.row(0)[2].norm() > 1.0);
    }

    #[test]
    fn test_2d_matches_per_row() {
        let texts: [&[u8]; 3] = [b"ABCD", b"ABC", b"ABCDD"];
        let alphabet = Alphabet::infer(texts).unwrap();
        let encoder = Encoder::new(&alphabet);
        let matrix = encoder.encode_batch(&texts).unwrap();
        let pattern = encoder
            .encode_pattern_matrix(b"DD", matrix.rows(), matrix.width())
            .unwrap();

        let mut correlator = SpectralCorrelator::new(RustFftTransform::new());
        let rows = correlator.correlate_2d(&matrix, &pattern, 2);
        assert_eq!(rows, vec![vec![], vec![], vec![3]]);
    }
}
