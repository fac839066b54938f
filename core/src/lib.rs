//! Credential generation engines for Keywright.
//!
//! Two engines live here, both synchronous and free of IO:
//!
//! - **Passwords**: a [`CandidateMutator`] builds candidates, [`validate`]
//!   checks them against a [`CharacterClassPolicy`], and the
//!   [`RejectionSampler`] loops with a bounded attempt budget until the
//!   requested quantity is accepted.
//! - **Passphrases**: the [`WordListCurator`] turns raw tokens into a
//!   [`WordCorpus`], and the [`PassphraseAssembler`] draws phrases from a
//!   corpus or truncates phonetic strings.
//!
//! Fetching word lists and persisting results belong to the collaborator
//! crates; everything here takes its inputs as values.
//!
//! [`CharacterClassPolicy`]: keywright_types::CharacterClassPolicy
//! [`WordCorpus`]: keywright_types::WordCorpus

#![allow(clippy::missing_errors_doc)]

mod assembler;
mod curator;
mod mutator;
mod sampler;
mod singular;
mod validator;

pub use assembler::{PassphraseAssembler, WordSource};
pub use curator::{WordListCurator, tokenize};
pub use mutator::{CandidateMutator, SampleMutator, SeedMutator};
pub use sampler::{RejectionSampler, attempt_budget, generate_passwords};
pub use singular::{RuleSingularizer, Singularize};
pub use validator::validate;
