//! Spectral correlation.
//!
//! - [`SpectralTransform`]: forward/inverse DFT capability (1-D and 2-D)
//! - [`SpectralCorrelator`]: cubic cross-correlation and match extraction

pub mod correlator;
pub mod transform;

pub use correlator::{SpectralCorrelator, SpectralResponse, MATCH_TOLERANCE};
pub use transform::{RustFftTransform, SpectralTransform};
