//! Character-class policy.
//!
//! A [`CharacterClassPolicy`] says which classes a password must contain,
//! which characters may never appear, and how long the password is. Length is
//! validated at construction; class and exclusion settings are free-form, and
//! [`CharacterClassPolicy::unsatisfiable_reason`] reports combinations that no
//! candidate can meet.

use std::collections::BTreeSet;
use std::fmt;

use serde::Deserialize;

use crate::GenerationError;

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const DEFAULT_SPECIAL_ALPHABET: &str = "!@#$%^&*()?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharacterClass {
    Lower,
    Upper,
    Digit,
    Special,
}

impl CharacterClass {
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lower,
        CharacterClass::Upper,
        CharacterClass::Digit,
        CharacterClass::Special,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CharacterClass::Lower => "lowercase",
            CharacterClass::Upper => "uppercase",
            CharacterClass::Digit => "digit",
            CharacterClass::Special => "special",
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How password candidates are built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PasswordStrategy {
    /// Uniform sample without replacement from the policy alphabet.
    Sample,
    /// Sample from secure seed text, then substitute, reverse and shuffle.
    #[default]
    Seed,
}

impl PasswordStrategy {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            PasswordStrategy::Sample => "sample",
            PasswordStrategy::Seed => "seed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterClassPolicy {
    length: usize,
    require_lower: bool,
    require_upper: bool,
    require_digit: bool,
    require_special: bool,
    special_alphabet: BTreeSet<char>,
    excluded_chars: BTreeSet<char>,
}

impl CharacterClassPolicy {
    /// Policy requiring all four classes with the default special alphabet.
    pub fn new(length: usize) -> Result<Self, GenerationError> {
        if length == 0 {
            return Err(GenerationError::invalid("password length must be positive"));
        }
        Ok(Self {
            length,
            require_lower: true,
            require_upper: true,
            require_digit: true,
            require_special: true,
            special_alphabet: DEFAULT_SPECIAL_ALPHABET.chars().collect(),
            excluded_chars: BTreeSet::new(),
        })
    }

    pub fn with_lower(mut self, required: bool) -> Self {
        self.require_lower = required;
        self
    }

    pub fn with_upper(mut self, required: bool) -> Self {
        self.require_upper = required;
        self
    }

    pub fn with_digit(mut self, required: bool) -> Self {
        self.require_digit = required;
        self
    }

    pub fn with_special(mut self, required: bool) -> Self {
        self.require_special = required;
        self
    }

    /// Replace the special alphabet. Whitespace is never a special character.
    pub fn with_special_alphabet(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.special_alphabet = chars.into_iter().filter(|c| !c.is_whitespace()).collect();
        self
    }

    pub fn with_excluded(mut self, chars: impl IntoIterator<Item = char>) -> Self {
        self.excluded_chars = chars.into_iter().collect();
        self
    }

    #[must_use]
    pub fn length(&self) -> usize {
        self.length
    }

    #[must_use]
    pub fn requires(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lower => self.require_lower,
            CharacterClass::Upper => self.require_upper,
            CharacterClass::Digit => self.require_digit,
            CharacterClass::Special => self.require_special,
        }
    }

    pub fn required_classes(&self) -> impl Iterator<Item = CharacterClass> + '_ {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| self.requires(*class))
    }

    #[must_use]
    pub fn special_alphabet(&self) -> &BTreeSet<char> {
        &self.special_alphabet
    }

    #[must_use]
    pub fn is_excluded(&self, ch: char) -> bool {
        self.excluded_chars.contains(&ch)
    }

    /// Whether `ch` counts toward `class`. Classes are checked independently,
    /// so a special alphabet that overlaps letters counts for both.
    #[must_use]
    pub fn belongs(&self, ch: char, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lower => ch.is_ascii_lowercase(),
            CharacterClass::Upper => ch.is_ascii_uppercase(),
            CharacterClass::Digit => ch.is_ascii_digit(),
            CharacterClass::Special => self.special_alphabet.contains(&ch),
        }
    }

    /// Characters of `class` that survive the exclusion list, in stable order.
    #[must_use]
    pub fn class_alphabet(&self, class: CharacterClass) -> Vec<char> {
        let base: Vec<char> = match class {
            CharacterClass::Lower => LOWERCASE.chars().collect(),
            CharacterClass::Upper => UPPERCASE.chars().collect(),
            CharacterClass::Digit => DIGITS.chars().collect(),
            CharacterClass::Special => self.special_alphabet.iter().copied().collect(),
        };
        base.into_iter().filter(|c| !self.is_excluded(*c)).collect()
    }

    /// Every character a candidate may be drawn from.
    ///
    /// Letters and digits are always eligible; specials only when required,
    /// because an unrequired special fails validation.
    #[must_use]
    pub fn source_alphabet(&self) -> Vec<char> {
        let mut alphabet = Vec::new();
        for class in [
            CharacterClass::Lower,
            CharacterClass::Upper,
            CharacterClass::Digit,
        ] {
            alphabet.extend(
                self.class_alphabet(class)
                    .into_iter()
                    .filter(|c| self.require_special || !self.special_alphabet.contains(c)),
            );
        }
        if self.require_special {
            for ch in self.class_alphabet(CharacterClass::Special) {
                if !alphabet.contains(&ch) {
                    alphabet.push(ch);
                }
            }
        }
        alphabet
    }

    /// Explain why no candidate can ever satisfy this policy, if that is the case.
    #[must_use]
    pub fn unsatisfiable_reason(&self) -> Option<String> {
        let required = self.required_classes().count();
        if required > self.length {
            return Some(format!(
                "length {} cannot hold {required} required character classes",
                self.length
            ));
        }
        for class in self.required_classes() {
            if self.class_alphabet(class).is_empty() {
                return Some(format!("every {class} character is excluded"));
            }
        }
        if self.source_alphabet().is_empty() {
            return Some("every candidate character is excluded".to_string());
        }
        None
    }
}
