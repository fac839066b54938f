use std::io;
use std::path::PathBuf;

use keywright_types::GenerationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("{url} returned {status}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("invalid source URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("unexpected response from {url}: {message}")]
    Decode { url: String, message: String },
    #[error("{action} {}: {source}", path.display())]
    File {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SourceError {
    pub(crate) fn file(action: &'static str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        SourceError::File {
            action,
            path: path.into(),
            source,
        }
    }
}

impl From<SourceError> for GenerationError {
    fn from(err: SourceError) -> Self {
        GenerationError::SourceUnavailable(err.to_string())
    }
}
