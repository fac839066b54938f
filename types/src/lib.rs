//! Core domain types for Keywright.
//!
//! This crate contains pure domain types with no IO, no async, and minimal dependencies.
//! Everything here can be used from any layer of the application.

#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

mod corpus;
mod credential;
mod error;
mod phrase;
mod policy;

pub use corpus::{Blacklist, WordCorpus};
pub use credential::{Credential, CredentialId, CredentialKind, CredentialStore};
pub use error::GenerationError;
pub use phrase::{PhoneticEntry, PhraseBounds};
pub use policy::{
    CharacterClass, CharacterClassPolicy, DEFAULT_SPECIAL_ALPHABET, DIGITS, LOWERCASE,
    PasswordStrategy, UPPERCASE,
};
