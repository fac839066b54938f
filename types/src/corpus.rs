use std::collections::BTreeSet;

/// Curated passphrase vocabulary.
///
/// Words are unique and sorted ascending by construction. Normalization
/// (case, length, blacklist) is the curator's job; this type only owns the
/// set semantics and the on-disk line format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordCorpus {
    words: Vec<String>,
}

impl WordCorpus {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let unique: BTreeSet<String> = words.into_iter().map(Into::into).collect();
        Self {
            words: unique.into_iter().collect(),
        }
    }

    /// Parse the persisted line format. Blank lines are skipped.
    #[must_use]
    pub fn from_lines(text: &str) -> Self {
        Self::from_words(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.is_empty()),
        )
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words
            .binary_search_by(|entry| entry.as_str().cmp(word))
            .is_ok()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// One word per line, sorted, newline-terminated.
    #[must_use]
    pub fn to_lines(&self) -> String {
        let mut out = String::with_capacity(self.words.iter().map(|w| w.len() + 1).sum());
        for word in &self.words {
            out.push_str(word);
            out.push('\n');
        }
        out
    }
}

/// Terms that must never reach the corpus.
///
/// Entries are trimmed and lowercased on the way in, matching how the curator
/// normalizes raw tokens before comparing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blacklist {
    terms: BTreeSet<String>,
}

impl Blacklist {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self { terms }
    }

    /// Parse a newline-separated list. Blank lines and `#` comments are skipped.
    #[must_use]
    pub fn from_lines(text: &str) -> Self {
        Self::from_words(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.starts_with('#')),
        )
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.terms.contains(word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
