//! Phonetic password API client.
//!
//! One GET returns `repeat` entries, each a password plus its spelled-out
//! phonetic form. Only the phonetic strings feed passphrase assembly.

use keywright_types::PhoneticEntry;
use tracing::info;
use url::Url;

use crate::SourceError;
use crate::client::get;

/// Query for the phonetic source. Flags are sent as `on`/`off`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneticRequest {
    pub length: usize,
    pub numbers: bool,
    pub upper: bool,
    pub lower: bool,
    pub special: bool,
    pub exclude: String,
    /// Number of entries to return.
    pub repeat: usize,
}

impl PhoneticRequest {
    #[must_use]
    pub fn new(length: usize, repeat: usize) -> Self {
        Self {
            length,
            numbers: true,
            upper: true,
            lower: true,
            special: true,
            exclude: String::new(),
            repeat,
        }
    }

    pub fn to_url(&self, base: &str) -> Result<Url, SourceError> {
        let mut url = Url::parse(base).map_err(|source| SourceError::InvalidUrl {
            url: base.to_string(),
            source,
        })?;
        url.query_pairs_mut()
            .append_pair("length", &self.length.to_string())
            .append_pair("numbers", switch(self.numbers))
            .append_pair("upper", switch(self.upper))
            .append_pair("lower", switch(self.lower))
            .append_pair("special", switch(self.special))
            .append_pair("exclude", &self.exclude)
            .append_pair("repeat", &self.repeat.to_string());
        Ok(url)
    }
}

fn switch(on: bool) -> &'static str {
    if on { "on" } else { "off" }
}

/// Fetch phonetic entries from `base`.
pub async fn fetch_phonetic(
    client: &reqwest::Client,
    base: &str,
    request: &PhoneticRequest,
) -> Result<Vec<PhoneticEntry>, SourceError> {
    let url = request.to_url(base)?;
    let response = get(client, url.as_str()).await?;
    let entries: Vec<PhoneticEntry> =
        response.json().await.map_err(|err| SourceError::Decode {
            url: base.to_string(),
            message: err.to_string(),
        })?;
    info!(requested = request.repeat, received = entries.len(), "Fetched phonetic entries");
    Ok(entries)
}
