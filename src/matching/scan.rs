//! Direct byte-scanning matcher.
//!
//! Shares the [`Matcher`] contract with the spectral engine, so its results
//! serve as the brute-force reference when validating spectral output.

use memchr::memmem::Finder;

use crate::core::error::MatchError;
use crate::core::types::MatchSet;
use crate::matching::engine::Matcher;

/// Finds every (possibly overlapping) occurrence with a `memmem` searcher
#[derive(Debug, Clone, Copy, Default)]
pub struct ScanMatcher;

impl ScanMatcher {
    pub fn new() -> Self {
        Self
    }

    /// All starting offsets of `pattern` in `text`, overlapping included
    #[must_use]
    pub fn scan(text: &[u8], pattern: &[u8]) -> MatchSet {
        if pattern.is_empty() || pattern.len() > text.len() {
            return MatchSet::empty();
        }

        let finder = Finder::new(pattern);
        let mut offsets = Vec::new();
        let mut from = 0;
        while let Some(hit) = finder.find(&text[from..]) {
            offsets.push(from + hit);
            from += hit + 1;
            if from + pattern.len() > text.len() {
                break;
            }
        }
        MatchSet::from_unsorted(offsets)
    }
}

impl Matcher for ScanMatcher {
    fn name(&self) -> &'static str {
        "scan"
    }

    fn find_matches(&self, texts: &[&[u8]], pattern: &[u8]) -> Result<Vec<MatchSet>, MatchError> {
        Ok(texts.iter().map(|text| Self::scan(text, pattern)).collect())
    }
}
