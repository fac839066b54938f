use serde::Deserialize;

use crate::GenerationError;

/// Allowed word counts for a passphrase mode.
///
/// Requests outside `[min, max]` resolve to `default` instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhraseBounds {
    min: usize,
    max: usize,
    default: usize,
}

impl PhraseBounds {
    /// Bounds for phrases drawn from the curated corpus.
    pub const CORPUS: PhraseBounds = PhraseBounds {
        min: 2,
        max: 6,
        default: 3,
    };

    /// Bounds for phrases cut from phonetic strings.
    pub const PHONETIC: PhraseBounds = PhraseBounds {
        min: 2,
        max: 20,
        default: 6,
    };

    pub fn new(min: usize, max: usize, default: usize) -> Result<Self, GenerationError> {
        if min == 0 {
            return Err(GenerationError::invalid("minimum word count must be positive"));
        }
        if !(min <= default && default <= max) {
            return Err(GenerationError::invalid(format!(
                "default word count {default} must lie within {min}..={max}"
            )));
        }
        Ok(Self { min, max, default })
    }

    #[must_use]
    pub fn min(self) -> usize {
        self.min
    }

    #[must_use]
    pub fn max(self) -> usize {
        self.max
    }

    #[must_use]
    pub fn default_words(self) -> usize {
        self.default
    }

    #[must_use]
    pub fn contains(self, words: usize) -> bool {
        (self.min..=self.max).contains(&words)
    }

    /// The word count actually used for a request.
    #[must_use]
    pub fn resolve(self, requested: usize) -> usize {
        if self.contains(requested) {
            requested
        } else {
            self.default
        }
    }
}

/// One entry of a phonetic password response.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PhoneticEntry {
    pub password: String,
    pub phonetic: String,
}
