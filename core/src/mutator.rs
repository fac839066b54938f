//! Candidate construction.
//!
//! A [`CandidateMutator`] turns a policy and its source alphabet into one raw
//! candidate of exactly `policy.length()` characters. Candidates are not
//! guaranteed to pass validation; the sampler rejects the ones that fail.
//!
//! Two strategies ship:
//!
//! - [`SampleMutator`]: draw without replacement from the alphabet.
//! - [`SeedMutator`]: draw with replacement from secure seed text, substitute
//!   characters of the two most constrained required classes (a special and a
//!   digit by default) at two distinct positions, reverse, then shuffle.
//!
//! The seed mutator keeps its secure source (seed bytes, substitution
//! positions and characters) apart from its shuffle source, so either can be
//! swapped without touching the pipeline.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use keywright_types::{CharacterClass, CharacterClassPolicy, GenerationError};
use rand::rngs::{StdRng, ThreadRng};
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{CryptoRng, Rng, SeedableRng};

/// Builds one unvalidated candidate per call.
pub trait CandidateMutator {
    fn build_candidate(
        &mut self,
        policy: &CharacterClassPolicy,
        source_alphabet: &[char],
    ) -> Result<String, GenerationError>;
}

/// Uniform sample without replacement.
#[derive(Debug)]
pub struct SampleMutator<R> {
    rng: R,
}

impl<R: Rng> SampleMutator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl SampleMutator<ThreadRng> {
    #[must_use]
    pub fn from_thread_rng() -> Self {
        Self::new(rand::rng())
    }
}

impl<R: Rng> CandidateMutator for SampleMutator<R> {
    fn build_candidate(
        &mut self,
        policy: &CharacterClassPolicy,
        source_alphabet: &[char],
    ) -> Result<String, GenerationError> {
        let length = policy.length();
        if source_alphabet.len() < length {
            return Err(GenerationError::InsufficientAlphabet {
                needed: length,
                available: source_alphabet.len(),
            });
        }
        let mut pool = source_alphabet.to_vec();
        let (chosen, _) = pool.partial_shuffle(&mut self.rng, length);
        Ok(chosen.iter().collect())
    }
}

/// Random bytes drawn per seed; encodes to 72 URL-safe characters.
const SEED_BYTES: usize = 54;
/// Seed characters that are never used in candidates.
const SEED_FILLER: [char; 2] = ['-', '_'];
/// Redraws allowed when both substitution positions collide.
const MAX_POSITION_REDRAWS: usize = 16;
/// Order in which required classes claim the two substitution slots.
const SUBSTITUTION_ORDER: [CharacterClass; 4] = [
    CharacterClass::Special,
    CharacterClass::Digit,
    CharacterClass::Upper,
    CharacterClass::Lower,
];

/// Up to two required classes forced into every seed candidate.
fn substitution_classes(policy: &CharacterClassPolicy) -> impl Iterator<Item = CharacterClass> {
    SUBSTITUTION_ORDER
        .into_iter()
        .filter(|class| policy.requires(*class))
        .take(2)
}

/// Seed-and-mutate strategy.
///
/// `S` supplies seed bytes, substitution positions and substitution
/// characters. `G` only drives the final shuffle.
#[derive(Debug)]
pub struct SeedMutator<S, G> {
    secure: S,
    shuffle: G,
}

impl<S: Rng + CryptoRng, G: Rng> SeedMutator<S, G> {
    pub fn new(secure: S, shuffle: G) -> Self {
        Self { secure, shuffle }
    }

    /// URL-safe text from fresh secure bytes, filler and non-alphabet
    /// characters removed. Always longer than `length` before filtering.
    fn seed(&mut self, length: usize, source_alphabet: &[char]) -> Vec<char> {
        let mut bytes = vec![0u8; SEED_BYTES.max(length)];
        self.secure.fill_bytes(&mut bytes);
        URL_SAFE_NO_PAD
            .encode(&bytes)
            .chars()
            .filter(|c| !SEED_FILLER.contains(c) && source_alphabet.contains(c))
            .collect()
    }

    /// Two positions for the substitutions.
    ///
    /// Collisions are redrawn a bounded number of times; a one-character
    /// candidate can only ever collide.
    fn substitution_positions(&mut self, length: usize) -> (usize, usize) {
        let special_at = self.secure.random_range(0..length);
        let mut digit_at = self.secure.random_range(0..length);
        let mut redraws = 0;
        while digit_at == special_at && length > 1 && redraws < MAX_POSITION_REDRAWS {
            digit_at = self.secure.random_range(0..length);
            redraws += 1;
        }
        (special_at, digit_at)
    }
}

impl SeedMutator<StdRng, ThreadRng> {
    /// OS-seeded secure source with the thread-local generator for shuffling.
    #[must_use]
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng(), rand::rng())
    }
}

impl<S: Rng + CryptoRng, G: Rng> CandidateMutator for SeedMutator<S, G> {
    fn build_candidate(
        &mut self,
        policy: &CharacterClassPolicy,
        source_alphabet: &[char],
    ) -> Result<String, GenerationError> {
        let length = policy.length();
        if source_alphabet.is_empty() {
            return Err(GenerationError::InsufficientAlphabet {
                needed: 1,
                available: 0,
            });
        }

        let seed = self.seed(length, source_alphabet);
        let pool = if seed.is_empty() {
            source_alphabet
        } else {
            seed.as_slice()
        };
        let mut chars: Vec<char> = (0..length)
            .filter_map(|_| pool.choose(&mut self.secure).copied())
            .collect();

        let (first_at, second_at) = self.substitution_positions(length);
        for (at, class) in [first_at, second_at].into_iter().zip(substitution_classes(policy)) {
            let alphabet = policy.class_alphabet(class);
            if let Some(ch) = alphabet.choose(&mut self.secure) {
                chars[at] = *ch;
            }
        }

        chars.reverse();
        chars.shuffle(&mut self.shuffle);
        Ok(chars.into_iter().collect())
    }
}
