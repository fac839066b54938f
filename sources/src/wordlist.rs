use tracing::info;

use crate::SourceError;
use crate::client::get;

/// Download a raw word list. The body is returned as-is; tokenizing is the
/// curator's job.
pub async fn fetch_word_list(client: &reqwest::Client, url: &str) -> Result<String, SourceError> {
    let response = get(client, url).await?;
    let text = response
        .text()
        .await
        .map_err(|source| SourceError::Transport {
            url: url.to_string(),
            source,
        })?;
    info!(%url, bytes = text.len(), "Downloaded word list");
    Ok(text)
}
