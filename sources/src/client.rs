use std::sync::OnceLock;
use std::time::Duration;

use tracing::{debug, error};

use crate::SourceError;

const CONNECT_TIMEOUT_SECS: u64 = 15;
const REQUEST_TIMEOUT_SECS: u64 = 60;
const MAX_ERROR_BODY_BYTES: usize = 4 * 1024;

/// Shared client for word-list and phonetic requests.
pub fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(|| {
        reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .user_agent(concat!("keywright/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|e| {
                error!("Failed to build HTTP client: {e}. Falling back to defaults.");
                reqwest::Client::new()
            })
    })
}

/// GET `url` and hand back the response if the status is a success.
pub(crate) async fn get(
    client: &reqwest::Client,
    url: &str,
) -> Result<reqwest::Response, SourceError> {
    debug!(%url, "Fetching");
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|source| SourceError::Transport {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = read_capped_error_body(response).await;
    Err(SourceError::Status {
        url: url.to_string(),
        status: status.as_u16(),
        body,
    })
}

async fn read_capped_error_body(response: reqwest::Response) -> String {
    let Ok(mut text) = response.text().await else {
        return String::new();
    };
    if text.len() > MAX_ERROR_BODY_BYTES {
        let mut cut = MAX_ERROR_BODY_BYTES;
        while !text.is_char_boundary(cut) {
            cut -= 1;
        }
        text.truncate(cut);
        text.push_str("...(truncated)");
    }
    text
}
