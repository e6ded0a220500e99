use std::str::FromStr;

use serde::Serialize;

use crate::core::error::MatchError;

/// Sorted, de-duplicated starting offsets of a pattern within one text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MatchSet(Vec<usize>);

impl MatchSet {
    /// Build a match set from offsets in any order, possibly with repeats
    #[must_use]
    pub fn from_unsorted(mut offsets: Vec<usize>) -> Self {
        offsets.sort_unstable();
        offsets.dedup();
        Self(offsets)
    }

    #[must_use]
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.0.iter()
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }
}

impl PartialEq<Vec<usize>> for MatchSet {
    fn eq(&self, other: &Vec<usize>) -> bool {
        &self.0 == other
    }
}

impl<'a> IntoIterator for &'a MatchSet {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl std::fmt::Display for MatchSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Window width used by chunked matching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChunkWidth {
    /// Use the pattern length as the window step
    #[default]
    PatternLength,
    /// Fixed window step; must be positive and at least the pattern length
    Fixed(usize),
}

impl ChunkWidth {
    /// Resolve the window step for a pattern of length `pattern_len`.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::InvalidChunkWidth` for a zero width, or
    /// `MatchError::ChunkWidthTooSmall` if the width is below `pattern_len`.
    pub fn resolve(self, pattern_len: usize) -> Result<usize, MatchError> {
        match self {
            Self::PatternLength => Ok(pattern_len),
            Self::Fixed(0) => Err(MatchError::InvalidChunkWidth("0".to_string())),
            Self::Fixed(width) if width < pattern_len => Err(MatchError::ChunkWidthTooSmall {
                width,
                pattern_len,
            }),
            Self::Fixed(width) => Ok(width),
        }
    }
}

/// How each text is presented to the spectral correlator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Chunking {
    /// Transform every text as a whole (`n log n` per text)
    #[default]
    Full,
    /// Overlapping windows of twice the chunk width (`n log m` per text)
    Windowed(ChunkWidth),
}

impl Chunking {
    /// Check the configuration without knowing the pattern.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::InvalidChunkWidth` if a fixed width is zero.
    pub fn validate(self) -> Result<(), MatchError> {
        match self {
            Self::Windowed(ChunkWidth::Fixed(0)) => {
                Err(MatchError::InvalidChunkWidth("0".to_string()))
            }
            _ => Ok(()),
        }
    }
}

impl FromStr for Chunking {
    type Err = MatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "full" => Ok(Self::Full),
            "auto" | "pattern" => Ok(Self::Windowed(ChunkWidth::PatternLength)),
            other => match other.parse::<usize>() {
                Ok(width) if width > 0 => Ok(Self::Windowed(ChunkWidth::Fixed(width))),
                _ => Err(MatchError::InvalidChunkWidth(s.to_string())),
            },
        }
    }
}

impl std::fmt::Display for Chunking {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Full => write!(f, "full"),
            Self::Windowed(ChunkWidth::PatternLength) => write!(f, "auto"),
            Self::Windowed(ChunkWidth::Fixed(width)) => write!(f, "{width}"),
        }
    }
}
