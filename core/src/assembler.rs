//! Passphrase assembly from a curated corpus or phonetic strings.

use keywright_types::{CredentialKind, CredentialStore, GenerationError, PhraseBounds, WordCorpus};
use rand::Rng;
use rand::rngs::ThreadRng;
use rand::seq::IndexedRandom;
use tracing::{debug, warn};

/// Where passphrase words come from.
#[derive(Debug, Clone, Copy)]
pub enum WordSource<'a> {
    /// Draw words with replacement from a curated corpus.
    Corpus(&'a WordCorpus),
    /// Cut each supplied phonetic string down to the requested word count.
    /// One credential per string, in order.
    Phonetic(&'a [String]),
}

#[derive(Debug)]
pub struct PassphraseAssembler<R> {
    rng: R,
    bounds: PhraseBounds,
}

impl<R: Rng> PassphraseAssembler<R> {
    pub fn new(rng: R, bounds: PhraseBounds) -> Self {
        Self { rng, bounds }
    }

    /// Build `qty` passphrases.
    ///
    /// `words_per_phrase` outside the configured bounds falls back to the
    /// default word count. In phonetic mode a string with fewer words than
    /// requested contributes all of its words, and the source must supply at
    /// least `qty` strings.
    pub fn assemble(
        &mut self,
        source: WordSource<'_>,
        words_per_phrase: usize,
        qty: usize,
    ) -> Result<CredentialStore, GenerationError> {
        if qty == 0 {
            return Err(GenerationError::InvalidConfiguration(
                "quantity must be at least 1".to_string(),
            ));
        }
        let words = self.bounds.resolve(words_per_phrase);
        if words != words_per_phrase {
            warn!(
                requested = words_per_phrase,
                min = self.bounds.min(),
                max = self.bounds.max(),
                using = words,
                "Word count out of range; using default"
            );
        }

        let mut store = CredentialStore::with_capacity(qty);
        match source {
            WordSource::Corpus(corpus) => {
                if corpus.is_empty() {
                    return Err(GenerationError::EmptyCorpus);
                }
                for _ in 0..qty {
                    let phrase = (0..words)
                        .filter_map(|_| corpus.words().choose(&mut self.rng))
                        .map(String::as_str)
                        .collect::<Vec<_>>()
                        .join(" ");
                    store.push(CredentialKind::Passphrase, phrase);
                }
            }
            WordSource::Phonetic(strings) => {
                if strings.len() < qty {
                    return Err(GenerationError::SourceUnavailable(format!(
                        "phonetic source returned {} of {qty} strings",
                        strings.len()
                    )));
                }
                for phonetic in &strings[..qty] {
                    let phrase = phonetic
                        .split_whitespace()
                        .take(words)
                        .collect::<Vec<_>>()
                        .join(" ");
                    store.push(CredentialKind::Passphrase, phrase);
                }
            }
        }

        debug!(qty, words, "Assembled passphrases");
        Ok(store)
    }
}

impl PassphraseAssembler<ThreadRng> {
    #[must_use]
    pub fn from_thread_rng(bounds: PhraseBounds) -> Self {
        Self::new(rand::rng(), bounds)
    }
}
