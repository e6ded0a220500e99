//! Windowed matching of one long text.
//!
//! Windows are `2·w` wide and start every `w` positions. Any alignment
//! starting at `i` lies inside the window starting at `⌊i/w⌋·w`, because
//! `i − start < w` and `m ≤ w`, so the windows together see every possible
//! match while each transform stays `O(w log w)`.

use tracing::debug;

use crate::core::encoder::Encoder;
use crate::core::error::MatchError;
use crate::core::types::MatchSet;
use crate::spectral::correlator::SpectralCorrelator;
use crate::spectral::transform::SpectralTransform;

/// Match a text exactly as long as the pattern by direct comparison
#[must_use]
pub fn equal_length_match(text: &[u8], pattern: &[u8]) -> MatchSet {
    if text == pattern {
        MatchSet::from_unsorted(vec![0])
    } else {
        MatchSet::empty()
    }
}

/// Find `pattern` in `text` using overlapping windows stepped by `width`.
///
/// `width` must already be resolved against the pattern (positive and at
/// least the pattern length).
///
/// # Errors
///
/// Returns `MatchError::UnknownSymbol` if the encoder's alphabet does not
/// cover the inputs.
pub fn find_in_windows<T: SpectralTransform>(
    correlator: &mut SpectralCorrelator<T>,
    encoder: &Encoder<'_>,
    text: &[u8],
    pattern: &[u8],
    width: usize,
) -> Result<MatchSet, MatchError> {
    let m = pattern.len();
    let n = text.len();
    if m == 0 || n < m {
        return Ok(MatchSet::empty());
    }
    if n == m {
        return Ok(equal_length_match(text, pattern));
    }
    debug_assert!(width >= m, "chunk width must cover the pattern");

    let window = 2 * width;
    let last_start = n - m;
    let encoded_pattern = encoder.encode_pattern(pattern, window)?;

    let mut offsets = Vec::new();
    let mut windows = 0usize;
    for start in (0..=last_start).step_by(width) {
        let end = (start + window).min(n);
        let encoded = encoder.encode(&text[start..end], window, true)?;
        offsets.extend(
            correlator
                .correlate_1d(&encoded, &encoded_pattern, m)
                .into_iter()
                .map(|local| start + local)
                .filter(|&offset| offset <= last_start),
        );
        windows += 1;
    }

    debug!(
        text_len = n,
        pattern_len = m,
        width,
        windows,
        candidates = offsets.len(),
        "windowed match complete"
    );

    Ok(MatchSet::from_unsorted(offsets))
}
