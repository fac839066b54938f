//! Accepted credentials and the per-run store that owns them.

use std::fmt;
use std::slice;

use serde::Serialize;

/// 1-based position of a credential within its store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CredentialId(usize);

impl CredentialId {
    /// Returns `None` for zero; ids start at 1.
    #[must_use]
    pub fn new(id: usize) -> Option<Self> {
        (id > 0).then_some(Self(id))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl fmt::Display for CredentialId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialKind {
    Password,
    Passphrase,
}

#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credential {
    id: CredentialId,
    value: String,
    kind: CredentialKind,
}

impl Credential {
    #[must_use]
    pub fn id(&self) -> CredentialId {
        self.id
    }

    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn kind(&self) -> CredentialKind {
        self.kind
    }
}

// Manual Debug impl to keep credential values out of logs.
impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("id", &self.id)
            .field("value", &"[REDACTED]")
            .field("kind", &self.kind)
            .finish()
    }
}

/// Ordered mapping from sequential id to accepted credential.
///
/// Ids are assigned on insertion and are always contiguous from 1, so the
/// store is backed by a plain vector indexed by `id - 1`. Entries are never
/// mutated or removed once pushed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CredentialStore {
    entries: Vec<Credential>,
}

impl CredentialStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Accept `value` under the next sequential id.
    pub fn push(&mut self, kind: CredentialKind, value: impl Into<String>) -> CredentialId {
        let id = CredentialId(self.entries.len() + 1);
        self.entries.push(Credential {
            id,
            value: value.into(),
            kind,
        });
        id
    }

    #[must_use]
    pub fn get(&self, id: CredentialId) -> Option<&Credential> {
        self.entries.get(id.0 - 1)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, Credential> {
        self.entries.iter()
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(Credential::value)
    }

    /// One credential per line in acceptance order, newline-terminated.
    /// Empty store renders as an empty string.
    #[must_use]
    pub fn to_lines(&self) -> String {
        let mut out = String::new();
        for value in self.values() {
            out.push_str(value);
            out.push('\n');
        }
        out
    }
}

impl<'a> IntoIterator for &'a CredentialStore {
    type Item = &'a Credential;
    type IntoIter = slice::Iter<'a, Credential>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
