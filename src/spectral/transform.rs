//! Discrete Fourier transform capability.
//!
//! The correlator only needs forward and inverse transforms over complex
//! buffers, in one and two dimensions. [`RustFftTransform`] provides them with
//! `rustfft`; the planner is owned by the transform value, so each matching
//! call carries its own plans.

use rustfft::num_complex::Complex;
use rustfft::{FftDirection, FftPlanner};

/// Forward and inverse DFTs in `O(N log N)`.
///
/// Inverse transforms are normalized, so `inverse(forward(x)) == x` up to
/// round-off. Two-dimensional buffers are row-major `rows × cols`.
pub trait SpectralTransform {
    fn forward(&mut self, buffer: &mut [Complex<f64>]);

    fn inverse(&mut self, buffer: &mut [Complex<f64>]);

    fn forward_2d(&mut self, buffer: &mut [Complex<f64>], rows: usize, cols: usize);

    fn inverse_2d(&mut self, buffer: &mut [Complex<f64>], rows: usize, cols: usize);
}

/// [`SpectralTransform`] backed by `rustfft`
pub struct RustFftTransform {
    planner: FftPlanner<f64>,
}

impl RustFftTransform {
    pub fn new() -> Self {
        Self {
            planner: FftPlanner::new(),
        }
    }

    fn run(&mut self, buffer: &mut [Complex<f64>], len: usize, direction: FftDirection) {
        if len == 0 || buffer.is_empty() {
            return;
        }
        // Processes every consecutive `len`-sized chunk of the buffer
        let fft = self.planner.plan_fft(len, direction);
        fft.process(buffer);
    }

    fn run_2d(
        &mut self,
        buffer: &mut [Complex<f64>],
        rows: usize,
        cols: usize,
        direction: FftDirection,
    ) {
        debug_assert_eq!(buffer.len(), rows * cols, "2-D buffer shape mismatch");
        if rows == 0 || cols == 0 {
            return;
        }

        self.run(buffer, cols, direction);
        if rows > 1 {
            let mut columns = transpose(buffer, rows, cols);
            self.run(&mut columns, rows, direction);
            for (c, column) in columns.chunks_exact(rows).enumerate() {
                for (r, value) in column.iter().enumerate() {
                    buffer[r * cols + c] = *value;
                }
            }
        }
    }
}

impl Default for RustFftTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl SpectralTransform for RustFftTransform {
    fn forward(&mut self, buffer: &mut [Complex<f64>]) {
        let len = buffer.len();
        self.run(buffer, len, FftDirection::Forward);
    }

    fn inverse(&mut self, buffer: &mut [Complex<f64>]) {
        let len = buffer.len();
        self.run(buffer, len, FftDirection::Inverse);
        normalize(buffer, len);
    }

    fn forward_2d(&mut self, buffer: &mut [Complex<f64>], rows: usize, cols: usize) {
        self.run_2d(buffer, rows, cols, FftDirection::Forward);
    }

    fn inverse_2d(&mut self, buffer: &mut [Complex<f64>], rows: usize, cols: usize) {
        self.run_2d(buffer, rows, cols, FftDirection::Inverse);
        normalize(buffer, rows * cols);
    }
}

/// Row-major `rows × cols` into row-major `cols × rows`
fn transpose(buffer: &[Complex<f64>], rows: usize, cols: usize) -> Vec<Complex<f64>> {
    let mut out = vec![Complex::new(0.0, 0.0); rows * cols];
    for r in 0..rows {
        for c in 0..cols {
            out[c * rows + r] = buffer[r * cols + c];
        }
    }
    out
}

fn normalize(buffer: &mut [Complex<f64>], len: usize) {
    if len == 0 {
        return;
    }
    #[allow(clippy::cast_precision_loss)] // Transform sizes fit in f64 mantissa
    let scale = 1.0 / len as f64;
    for value in buffer.iter_mut() {
        *value *= scale;
    }
}
