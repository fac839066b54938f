//! Password generation end to end through the public crates

use keywright_config::KeywrightConfig;
use keywright_core::{RejectionSampler, SampleMutator, SeedMutator, generate_passwords, validate};
use keywright_types::{CharacterClassPolicy, CredentialKind, GenerationError, PasswordStrategy};

use crate::common::seeded;

#[test]
fn twelve_character_policy_yields_five_valid_passwords() {
    let policy = CharacterClassPolicy::new(12).unwrap();
    let mut sampler = RejectionSampler::new(SeedMutator::new(seeded(1), seeded(2)));
    let store = sampler.generate(&policy, 5).unwrap();

    assert_eq!(store.len(), 5);
    for credential in &store {
        assert_eq!(credential.kind(), CredentialKind::Password);
        assert_eq!(credential.value().chars().count(), 12);
        assert!(validate(credential.value(), &policy), "{credential:?}");
    }
}

#[test]
fn two_character_policy_fails_instead_of_looping() {
    let policy = CharacterClassPolicy::new(2).unwrap();
    for strategy in [PasswordStrategy::Sample, PasswordStrategy::Seed] {
        let err = generate_passwords(&policy, 1, strategy).unwrap_err();
        assert!(
            matches!(err, GenerationError::PolicyUnsatisfiable { .. }),
            "{strategy:?}: {err:?}"
        );
    }
}

#[test]
fn seed_strategy_handles_three_character_alphanumeric_policy() {
    let policy = CharacterClassPolicy::new(3).unwrap().with_special(false);
    let store = generate_passwords(&policy, 5, PasswordStrategy::Seed).unwrap();
    assert_eq!(store.len(), 5);
    assert!(store.values().all(|v| validate(v, &policy)));
}

#[test]
fn configured_policy_drives_generation() {
    let config = KeywrightConfig::parse(
        "[password]\nlength = 14\nspecial_alphabet = \"#\"\nexclude = \"0O1lI\"\n",
    )
    .unwrap();
    let policy = config.password_policy(None, false).unwrap();
    let mut sampler = RejectionSampler::new(SampleMutator::new(seeded(3)));
    let store = sampler.generate(&policy, 10).unwrap();

    for value in store.values() {
        assert_eq!(value.len(), 14);
        assert!(value.contains('#'));
        assert!(!value.contains(['0', 'O', '1', 'l', 'I', '!', '?']));
    }
}

#[test]
fn no_special_passwords_are_alphanumeric() {
    let config = KeywrightConfig::default();
    let policy = config.password_policy(Some(20), true).unwrap();
    let store = generate_passwords(&policy, 20, PasswordStrategy::Seed).unwrap();
    assert!(store.values().all(|v| v.chars().all(|c| c.is_ascii_alphanumeric())));
}

#[test]
fn out_of_range_settings_are_invalid_configuration() {
    let config = KeywrightConfig::default();
    assert!(matches!(
        config.password_policy(Some(40), false),
        Err(GenerationError::InvalidConfiguration(_))
    ));
    assert!(matches!(
        config.check_qty(21),
        Err(GenerationError::InvalidConfiguration(_))
    ));
}
