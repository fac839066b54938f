use thiserror::Error;

/// Failure modes shared by every generation path.
///
/// Any variant aborts the requested run; callers never receive a partially
/// filled store alongside an error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    /// The policy cannot be met, either structurally or because the bounded
    /// rejection loop ran out of attempts.
    #[error("policy cannot be satisfied: {reason}")]
    PolicyUnsatisfiable { reason: String, attempts: u64 },
    /// Sampling without replacement asked for more characters than exist.
    #[error("alphabet has {available} characters but {needed} were requested")]
    InsufficientAlphabet { needed: usize, available: usize },
    /// A word list, blacklist, or phonetic fetch failed.
    #[error("source unavailable: {0}")]
    SourceUnavailable(String),
    #[error("word corpus is empty")]
    EmptyCorpus,
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl GenerationError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }
}
