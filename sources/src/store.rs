//! Persisted corpus file and the load-or-curate lifecycle.

use std::path::{Path, PathBuf};

use keywright_core::{Singularize, WordListCurator, tokenize};
use keywright_types::{Blacklist, GenerationError, WordCorpus};
use keywright_utils::{AtomicWriteOptions, atomic_write_with_options, read_lines};
use tracing::{debug, info};

use crate::SourceError;
use crate::wordlist::fetch_word_list;

/// The curated corpus on disk: one word per line, sorted.
#[derive(Debug, Clone)]
pub struct CorpusStore {
    path: PathBuf,
}

impl CorpusStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The persisted corpus, or `None` when the file is missing or holds no
    /// words.
    pub fn load(&self) -> Result<Option<WordCorpus>, SourceError> {
        let text = read_lines(&self.path)
            .map_err(|err| SourceError::file("failed to read corpus", &self.path, err))?;
        let corpus = text.map(|text| WordCorpus::from_lines(&text));
        Ok(corpus.filter(|corpus| !corpus.is_empty()))
    }

    /// Replace the persisted corpus.
    pub fn persist(&self, corpus: &WordCorpus) -> Result<(), SourceError> {
        atomic_write_with_options(
            &self.path,
            corpus.to_lines().as_bytes(),
            AtomicWriteOptions::default(),
        )
        .map_err(|err| SourceError::file("failed to write corpus", &self.path, err))?;
        info!(path = %self.path.display(), words = corpus.len(), "Persisted corpus");
        Ok(())
    }
}

/// Load the persisted corpus, curating a fresh one when it is missing or
/// empty.
pub async fn load_or_curate<S: Singularize>(
    store: &CorpusStore,
    curator: &WordListCurator<S>,
    client: &reqwest::Client,
    url: &str,
    blacklist: &Blacklist,
) -> Result<WordCorpus, GenerationError> {
    if let Some(corpus) = store.load()? {
        debug!(path = %store.path().display(), words = corpus.len(), "Loaded corpus");
        return Ok(corpus);
    }
    info!(path = %store.path().display(), "No usable corpus on disk; curating");
    refresh_corpus(store, curator, client, url, blacklist).await
}

/// Download, curate and persist, overwriting any existing corpus.
pub async fn refresh_corpus<S: Singularize>(
    store: &CorpusStore,
    curator: &WordListCurator<S>,
    client: &reqwest::Client,
    url: &str,
    blacklist: &Blacklist,
) -> Result<WordCorpus, GenerationError> {
    let raw = fetch_word_list(client, url).await?;
    let corpus = curator.curate(tokenize(&raw), blacklist);
    store.persist(&corpus)?;
    Ok(corpus)
}
