//! Configuration for Keywright.
//!
//! Settings live in `~/.keywright/config.toml`. A missing file means every
//! default applies; string values support `${VAR}` expansion and a leading `~/`
//! in path settings resolves against the home directory.
//!
//! ```toml
//! [password]
//! length = 25
//! strategy = "seed"
//!
//! [passphrase]
//! words = 3
//! min_word_length = 6
//!
//! [output]
//! max_qty = 20
//! ```

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use keywright_types::{
    CharacterClassPolicy, DEFAULT_SPECIAL_ALPHABET, GenerationError, PasswordStrategy,
    PhraseBounds,
};
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

/// Shortest password the generator will produce.
pub const PASSWORD_LENGTH_MIN: usize = 12;
/// Longest password the generator will produce.
pub const PASSWORD_LENGTH_MAX: usize = 31;

pub const DEFAULT_CORPUS_URL: &str = "https://github.com/dolph/dictionary/raw/master/popular.txt";
pub const DEFAULT_PHONETIC_URL: &str = "https://passwordwolf.com/api/";

const APP_DIR: &str = ".keywright";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to parse config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::Read { path, .. } | ConfigError::Parse { path, .. } => path,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct KeywrightConfig {
    pub password: PasswordConfig,
    pub passphrase: PassphraseConfig,
    pub phonetic: PhoneticConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PasswordConfig {
    pub length: usize,
    pub strategy: PasswordStrategy,
    pub special_alphabet: String,
    /// Characters never used in passwords.
    pub exclude: String,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            length: 25,
            strategy: PasswordStrategy::Seed,
            special_alphabet: DEFAULT_SPECIAL_ALPHABET.to_string(),
            exclude: String::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PassphraseConfig {
    /// Word count used when a request falls outside `min_words..=max_words`.
    pub words: usize,
    pub min_words: usize,
    pub max_words: usize,
    pub min_word_length: usize,
    pub corpus_url: String,
    pub corpus_path: String,
    pub blacklist_path: String,
}

impl Default for PassphraseConfig {
    fn default() -> Self {
        Self {
            words: PhraseBounds::CORPUS.default_words(),
            min_words: PhraseBounds::CORPUS.min(),
            max_words: PhraseBounds::CORPUS.max(),
            min_word_length: 6,
            corpus_url: DEFAULT_CORPUS_URL.to_string(),
            corpus_path: format!("~/{APP_DIR}/dictionary.txt"),
            blacklist_path: format!("~/{APP_DIR}/english_expletive.txt"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct PhoneticConfig {
    pub api_url: String,
    pub words: usize,
    pub min_words: usize,
    pub max_words: usize,
    /// Length of the password the phonetic source spells out.
    pub length: usize,
}

impl PassphraseConfig {
    pub fn bounds(&self) -> Result<PhraseBounds, GenerationError> {
        PhraseBounds::new(self.min_words, self.max_words, self.words)
    }
}

impl Default for PhoneticConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_PHONETIC_URL.to_string(),
            words: PhraseBounds::PHONETIC.default_words(),
            min_words: PhraseBounds::PHONETIC.min(),
            max_words: PhraseBounds::PHONETIC.max(),
            length: 16,
        }
    }
}

impl PhoneticConfig {
    pub fn bounds(&self) -> Result<PhraseBounds, GenerationError> {
        PhraseBounds::new(self.min_words, self.max_words, self.words)
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub passwords_file: String,
    pub passphrases_file: String,
    pub max_qty: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            passwords_file: "passwords.txt".to_string(),
            passphrases_file: "passphrases.txt".to_string(),
            max_qty: 20,
        }
    }
}

impl KeywrightConfig {
    /// Load the user config. `Ok(None)` when there is no home directory or
    /// no config file.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        match config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(None),
        }
    }

    /// Load from `path`. A missing file yields `Ok(None)`.
    pub fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };
        Self::parse(&content).map(Some).map_err(|source| {
            warn!("Failed to parse config at {:?}: {}", path, source);
            ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            }
        })
    }

    /// Parse TOML text and expand `${VAR}` references in string values.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(content)?;
        config.expand_env();
        Ok(config)
    }

    fn expand_env(&mut self) {
        for value in [
            &mut self.password.special_alphabet,
            &mut self.password.exclude,
            &mut self.passphrase.corpus_url,
            &mut self.passphrase.corpus_path,
            &mut self.passphrase.blacklist_path,
            &mut self.phonetic.api_url,
            &mut self.output.passwords_file,
            &mut self.output.passphrases_file,
        ] {
            if value.contains("${") {
                *value = expand_env_vars(value);
            }
        }
    }

    /// Check a requested quantity against `[1, max_qty]`.
    pub fn check_qty(&self, qty: usize) -> Result<usize, GenerationError> {
        if (1..=self.output.max_qty).contains(&qty) {
            Ok(qty)
        } else {
            Err(GenerationError::InvalidConfiguration(format!(
                "quantity {qty} must be between 1 and {}",
                self.output.max_qty
            )))
        }
    }

    /// Build the password policy, overriding the configured length when
    /// `length` is given.
    pub fn password_policy(
        &self,
        length: Option<usize>,
        no_special: bool,
    ) -> Result<CharacterClassPolicy, GenerationError> {
        let length = length.unwrap_or(self.password.length);
        if !(PASSWORD_LENGTH_MIN..=PASSWORD_LENGTH_MAX).contains(&length) {
            return Err(GenerationError::InvalidConfiguration(format!(
                "password length {length} must be between {PASSWORD_LENGTH_MIN} and {PASSWORD_LENGTH_MAX}"
            )));
        }
        Ok(CharacterClassPolicy::new(length)?
            .with_special(!no_special)
            .with_special_alphabet(self.password.special_alphabet.chars())
            .with_excluded(self.password.exclude.chars()))
    }

    #[must_use]
    pub fn corpus_path(&self) -> PathBuf {
        expand_home(&self.passphrase.corpus_path)
    }

    #[must_use]
    pub fn blacklist_path(&self) -> PathBuf {
        expand_home(&self.passphrase.blacklist_path)
    }
}

/// Replace `${VAR}` with the variable's value; unset variables become empty.
/// An unclosed `${` is kept literally.
#[must_use]
pub fn expand_env_vars(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        match after.find('}') {
            Some(end) => {
                let var = &after[..end];
                if !var.is_empty() {
                    out.push_str(&env::var(var).unwrap_or_default());
                }
                rest = &after[end + 1..];
            }
            None => {
                out.push_str(&rest[start..]);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

/// Resolve a leading `~/` against the home directory.
#[must_use]
pub fn expand_home(raw: &str) -> PathBuf {
    if let Some(rest) = raw.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }
    PathBuf::from(raw)
}

/// `~/.keywright`, when a home directory exists.
#[must_use]
pub fn app_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(APP_DIR))
}

#[must_use]
pub fn config_path() -> Option<PathBuf> {
    app_dir().map(|dir| dir.join("config.toml"))
}
