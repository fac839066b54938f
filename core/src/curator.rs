//! Word-list curation.
//!
//! Raw tokens go through a fixed pipeline so the same input always produces
//! the same corpus:
//!
//! 1. trim + lowercase, drop empties
//! 2. blacklist filter (a new sequence; the input is never edited in place)
//! 3. drop tokens shorter than the minimum, singularize the rest
//! 4. re-check length and blacklist on the singular form
//! 5. deduplicate + sort (via [`WordCorpus`])
//!
//! Persisting the result is the corpus store's job.

use keywright_types::{Blacklist, GenerationError, WordCorpus};
use tracing::debug;

use crate::singular::{RuleSingularizer, Singularize};

#[derive(Debug, Clone)]
pub struct WordListCurator<S = RuleSingularizer> {
    singularizer: S,
    min_word_length: usize,
}

impl WordListCurator<RuleSingularizer> {
    pub fn new(min_word_length: usize) -> Result<Self, GenerationError> {
        Self::with_singularizer(RuleSingularizer, min_word_length)
    }
}

impl<S: Singularize> WordListCurator<S> {
    pub fn with_singularizer(singularizer: S, min_word_length: usize) -> Result<Self, GenerationError> {
        if min_word_length == 0 {
            return Err(GenerationError::InvalidConfiguration(
                "minimum word length must be positive".to_string(),
            ));
        }
        Ok(Self {
            singularizer,
            min_word_length,
        })
    }

    pub fn curate<I, T>(&self, raw_tokens: I, blacklist: &Blacklist) -> WordCorpus
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut raw_count = 0usize;
        let allowed: Vec<String> = raw_tokens
            .into_iter()
            .inspect(|_| raw_count += 1)
            .map(|token| token.as_ref().trim().to_lowercase())
            .filter(|token| !token.is_empty() && !blacklist.contains(token))
            .collect();

        let normalized = allowed
            .into_iter()
            .filter(|token| self.long_enough(token))
            .map(|token| self.singularizer.singularize(&token).unwrap_or(token))
            .filter(|token| self.long_enough(token) && !blacklist.contains(token));

        let corpus = WordCorpus::from_words(normalized);
        debug!(
            raw = raw_count,
            curated = corpus.len(),
            min_word_length = self.min_word_length,
            blacklist = blacklist.len(),
            "Curated word list"
        );
        corpus
    }

    fn long_enough(&self, token: &str) -> bool {
        token.chars().count() >= self.min_word_length
    }
}

/// Split raw word-list text into tokens.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split_whitespace()
}
