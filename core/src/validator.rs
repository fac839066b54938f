use keywright_types::{CharacterClass, CharacterClassPolicy};

/// Decide whether `candidate` meets the class requirements of `policy`.
///
/// Every required class needs at least one character; when specials are not
/// required, any special character rejects the candidate. Exclusions are not
/// re-checked here because mutators never draw excluded characters.
#[must_use]
pub fn validate(candidate: &str, policy: &CharacterClassPolicy) -> bool {
    let mut seen = [false; CharacterClass::ALL.len()];
    for ch in candidate.chars() {
        for (slot, class) in seen.iter_mut().zip(CharacterClass::ALL) {
            if policy.belongs(ch, class) {
                *slot = true;
            }
        }
    }

    CharacterClass::ALL
        .into_iter()
        .zip(seen)
        .all(|(class, present)| match class {
            CharacterClass::Special if !policy.requires(class) => !present,
            _ => present || !policy.requires(class),
        })
}
