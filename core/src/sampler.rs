//! Bounded rejection sampling.

use keywright_types::{
    CharacterClass, CharacterClassPolicy, CredentialKind, CredentialStore, GenerationError,
    PasswordStrategy,
};
use tracing::debug;

use crate::mutator::{CandidateMutator, SampleMutator, SeedMutator};
use crate::validator::validate;

/// Fewest attempts granted per credential, however easy the policy.
const MIN_ATTEMPTS_PER_CREDENTIAL: u64 = 64;
/// Most attempts granted per credential before giving up.
const MAX_ATTEMPTS_PER_CREDENTIAL: u64 = 100_000;
/// Target chance that a satisfiable policy exhausts its budget.
const EXHAUSTION_PROBABILITY: f64 = 1e-12;

/// Attempts allowed per accepted credential.
///
/// Estimates the acceptance probability with a union bound over required
/// classes, `P(miss class) = (1 - k/n)^len` for `k` class characters out of an
/// `n`-character alphabet, and grants enough attempts that a policy with that
/// acceptance rate fails with probability at most 1e-12. When the bound says
/// nothing (strict policies on short lengths) the maximum applies.
#[must_use]
pub fn attempt_budget(policy: &CharacterClassPolicy, source_alphabet: &[char]) -> u64 {
    let n = source_alphabet.len() as f64;
    if n == 0.0 {
        return MIN_ATTEMPTS_PER_CREDENTIAL;
    }
    let length = policy.length() as i32;
    let mut miss = 0.0;
    for class in policy.required_classes() {
        let k = source_alphabet
            .iter()
            .filter(|c| policy.belongs(**c, class))
            .count() as f64;
        miss += (1.0 - k / n).powi(length);
    }
    let accept = 1.0 - miss;
    if accept <= 0.0 {
        return MAX_ATTEMPTS_PER_CREDENTIAL;
    }
    if accept >= 1.0 {
        return MIN_ATTEMPTS_PER_CREDENTIAL;
    }
    let needed = (EXHAUSTION_PROBABILITY.ln() / (1.0 - accept).ln()).ceil() as u64;
    needed.clamp(MIN_ATTEMPTS_PER_CREDENTIAL, MAX_ATTEMPTS_PER_CREDENTIAL)
}

/// Generate-and-test loop over a [`CandidateMutator`].
#[derive(Debug)]
pub struct RejectionSampler<M> {
    mutator: M,
}

impl<M: CandidateMutator> RejectionSampler<M> {
    pub fn new(mutator: M) -> Self {
        Self { mutator }
    }

    /// Collect `qty` accepted passwords.
    ///
    /// Each credential gets its own attempt budget; running out fails the
    /// whole run with [`GenerationError::PolicyUnsatisfiable`] and the partial
    /// store is dropped. Duplicate passwords are not suppressed.
    pub fn generate(
        &mut self,
        policy: &CharacterClassPolicy,
        qty: usize,
    ) -> Result<CredentialStore, GenerationError> {
        if qty == 0 {
            return Err(GenerationError::InvalidConfiguration(
                "quantity must be at least 1".to_string(),
            ));
        }
        if let Some(reason) = policy.unsatisfiable_reason() {
            return Err(GenerationError::PolicyUnsatisfiable {
                reason,
                attempts: 0,
            });
        }

        let alphabet = policy.source_alphabet();
        let budget = attempt_budget(policy, &alphabet);
        let mut store = CredentialStore::with_capacity(qty);
        let mut total_attempts: u64 = 0;

        while store.len() < qty {
            let mut attempts: u64 = 0;
            loop {
                if attempts >= budget {
                    return Err(GenerationError::PolicyUnsatisfiable {
                        reason: format!(
                            "no candidate passed validation in {budget} attempts \
                             (credential {} of {qty})",
                            store.len() + 1
                        ),
                        attempts: total_attempts,
                    });
                }
                attempts += 1;
                total_attempts += 1;

                let candidate = self.mutator.build_candidate(policy, &alphabet)?;
                if validate(&candidate, policy) {
                    store.push(CredentialKind::Password, candidate);
                    break;
                }
            }
        }

        debug!(
            qty,
            length = policy.length(),
            special = policy.requires(CharacterClass::Special),
            attempts = total_attempts,
            budget,
            "Generated passwords"
        );
        Ok(store)
    }
}

/// Generate passwords with OS-seeded randomness and the chosen strategy.
pub fn generate_passwords(
    policy: &CharacterClassPolicy,
    qty: usize,
    strategy: PasswordStrategy,
) -> Result<CredentialStore, GenerationError> {
    match strategy {
        PasswordStrategy::Sample => {
            RejectionSampler::new(SampleMutator::from_thread_rng()).generate(policy, qty)
        }
        PasswordStrategy::Seed => {
            RejectionSampler::new(SeedMutator::from_os_rng()).generate(policy, qty)
        }
    }
}
