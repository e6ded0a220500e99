//! Encoding of sequences into fixed-width numeric buffers.

use crate::core::alphabet::Alphabet;
use crate::core::error::MatchError;

/// Row-major `rows × width` matrix of symbol codes
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedMatrix {
    rows: usize,
    width: usize,
    data: Vec<f64>,
}

impl EncodedMatrix {
    /// A matrix filled with `value`
    #[must_use]
    pub fn filled(rows: usize, width: usize, value: f64) -> Self {
        Self {
            rows,
            width,
            data: vec![value; rows * width],
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub fn row(&self, index: usize) -> &[f64] {
        &self.data[index * self.width..(index + 1) * self.width]
    }

    pub fn row_mut(&mut self, index: usize) -> &mut [f64] {
        &mut self.data[index * self.width..(index + 1) * self.width]
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Copy columns `start..start + width` of every row, filling columns past
    /// the right edge with `pad`.
    #[must_use]
    pub fn window(&self, start: usize, width: usize, pad: f64) -> Self {
        let mut out = Self::filled(self.rows, width, pad);
        let available = self.width.saturating_sub(start).min(width);
        if available == 0 {
            return out;
        }
        for r in 0..self.rows {
            out.row_mut(r)[..available].copy_from_slice(&self.row(r)[start..start + available]);
        }
        out
    }
}

/// Maps sequences to numeric vectors using an [`Alphabet`]
#[derive(Debug, Clone)]
pub struct Encoder<'a> {
    alphabet: &'a Alphabet,
}

impl<'a> Encoder<'a> {
    pub fn new(alphabet: &'a Alphabet) -> Self {
        Self { alphabet }
    }

    #[must_use]
    pub fn alphabet(&self) -> &Alphabet {
        self.alphabet
    }

    /// Encode `sequence` into a vector of length `width`.
    ///
    /// Positions past the sequence hold the sentinel when `pad` is set and
    /// zero otherwise. A sequence longer than `width` is truncated.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::UnknownSymbol` for a byte outside the alphabet.
    pub fn encode(&self, sequence: &[u8], width: usize, pad: bool) -> Result<Vec<f64>, MatchError> {
        let fill = if pad { self.alphabet.sentinel() } else { 0.0 };
        let mut out = vec![fill; width];
        self.encode_into(sequence, &mut out)?;
        Ok(out)
    }

    /// Encode `pattern` reversed, zero-padded to `width`.
    ///
    /// Reversal turns the correlation into a convolution under the transform;
    /// zero padding contributes nothing to any correlation term.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::UnknownSymbol` for a byte outside the alphabet.
    pub fn encode_pattern(&self, pattern: &[u8], width: usize) -> Result<Vec<f64>, MatchError> {
        let mut out = vec![0.0; width];
        for (slot, &symbol) in out.iter_mut().zip(pattern.iter().rev()) {
            *slot = self.alphabet.require_code(symbol)?;
        }
        Ok(out)
    }

    /// Encode every sequence to the width of the longest one, padding with the
    /// sentinel. Rows keep the input order.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::UnknownSymbol` for a byte outside the alphabet.
    pub fn encode_batch(&self, sequences: &[&[u8]]) -> Result<EncodedMatrix, MatchError> {
        let width = sequences.iter().map(|s| s.len()).max().unwrap_or(0);
        self.encode_batch_to_width(sequences, width)
    }

    /// Like [`encode_batch`](Self::encode_batch) with an explicit width.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::UnknownSymbol` for a byte outside the alphabet.
    pub fn encode_batch_to_width(
        &self,
        sequences: &[&[u8]],
        width: usize,
    ) -> Result<EncodedMatrix, MatchError> {
        let mut matrix = EncodedMatrix::filled(sequences.len(), width, self.alphabet.sentinel());
        for (r, sequence) in sequences.iter().enumerate() {
            self.encode_into(sequence, matrix.row_mut(r))?;
        }
        Ok(matrix)
    }

    /// Pattern matrix matching a `rows × width` text matrix: the reversed
    /// pattern in row 0, zeros everywhere else.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::UnknownSymbol` for a byte outside the alphabet.
    pub fn encode_pattern_matrix(
        &self,
        pattern: &[u8],
        rows: usize,
        width: usize,
    ) -> Result<EncodedMatrix, MatchError> {
        let mut matrix = EncodedMatrix::filled(rows, width, 0.0);
        if rows > 0 {
            let encoded = self.encode_pattern(pattern, width)?;
            matrix.row_mut(0).copy_from_slice(&encoded);
        }
        Ok(matrix)
    }

    fn encode_into(&self, sequence: &[u8], out: &mut [f64]) -> Result<(), MatchError> {
        for (slot, &symbol) in out.iter_mut().zip(sequence) {
            *slot = self.alphabet.require_code(symbol)?;
        }
        Ok(())
    }
}
