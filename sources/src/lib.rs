//! External collaborators for Keywright.
//!
//! Everything that touches the network or the corpus files lives here so the
//! generation engines in `keywright-core` stay pure:
//!
//! - **`client`**: shared HTTP client and status handling
//! - **`wordlist`**: raw word-list download
//! - **`phonetic`**: phonetic password API
//! - **`blacklist`**: expletive list loading
//! - **`store`**: persisted corpus file and the load-or-curate lifecycle
//!
//! Failures surface as [`SourceError`], which converts into
//! [`GenerationError::SourceUnavailable`](keywright_types::GenerationError).

mod blacklist;
mod client;
mod error;
mod phonetic;
mod store;
mod wordlist;

pub use blacklist::load_blacklist;
pub use client::http_client;
pub use error::SourceError;
pub use phonetic::{PhoneticRequest, fetch_phonetic};
pub use store::{CorpusStore, load_or_curate, refresh_corpus};
pub use wordlist::fetch_word_list;
