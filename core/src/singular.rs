//! Plural-to-singular reduction for corpus tokens.

/// Maps a token to its singular form, or `None` when it has none.
///
/// Implementations must be deterministic and total, and should be stable:
/// a returned singular form must itself map to `None`, otherwise curating an
/// already-curated corpus would not be a fixed point.
pub trait Singularize {
    fn singularize(&self, token: &str) -> Option<String>;
}

impl<F> Singularize for F
where
    F: Fn(&str) -> Option<String>,
{
    fn singularize(&self, token: &str) -> Option<String> {
        self(token)
    }
}

const IRREGULAR: &[(&str, &str)] = &[
    ("calves", "calf"),
    ("children", "child"),
    ("feet", "foot"),
    ("geese", "goose"),
    ("halves", "half"),
    ("knives", "knife"),
    ("leaves", "leaf"),
    ("lives", "life"),
    ("loaves", "loaf"),
    ("men", "man"),
    ("mice", "mouse"),
    ("oxen", "ox"),
    ("people", "person"),
    ("shelves", "shelf"),
    ("teeth", "tooth"),
    ("thieves", "thief"),
    ("wives", "wife"),
    ("wolves", "wolf"),
    ("women", "woman"),
];

/// Words that end like plurals but are not, or do not change.
const UNINFLECTED: &[&str] = &[
    "athletics",
    "aircraft",
    "bison",
    "deer",
    "economics",
    "fish",
    "mathematics",
    "means",
    "moose",
    "news",
    "physics",
    "politics",
    "series",
    "sheep",
    "species",
    "trousers",
];

/// Endings that already read as singular.
const SINGULAR_ENDINGS: &[&str] = &["ss", "us", "is"];

/// Endings where the plural adds "es" rather than "s".
const ES_ENDINGS: &[&str] = &["sses", "shes", "ches", "xes", "zzes"];

/// Suffix rules for regular English plurals plus a small irregular table.
///
/// Matching is ASCII and case-sensitive; the curator lowercases tokens first.
/// Rules are reapplied until none match, so "peoples" reduces through
/// "people" to "person" and every output maps to `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleSingularizer;

impl RuleSingularizer {
    /// One rule application. Suffix rules always shorten the token and
    /// irregular forms never map onto another plural, so repeating terminates.
    fn reduce(token: &str) -> Option<String> {
        if UNINFLECTED.contains(&token) {
            return None;
        }
        if let Some((_, singular)) = IRREGULAR.iter().find(|(plural, _)| *plural == token) {
            return Some((*singular).to_string());
        }
        if SINGULAR_ENDINGS.iter().any(|ending| token.ends_with(ending)) {
            return None;
        }
        if let Some(stem) = token.strip_suffix("ies")
            && stem.len() > 1
        {
            return Some(format!("{stem}y"));
        }
        if ES_ENDINGS.iter().any(|ending| token.ends_with(ending)) {
            return Some(token[..token.len() - 2].to_string());
        }
        if token.len() > 3
            && let Some(stem) = token.strip_suffix('s')
        {
            return Some(stem.to_string());
        }
        None
    }
}

impl Singularize for RuleSingularizer {
    fn singularize(&self, token: &str) -> Option<String> {
        let mut singular = Self::reduce(token)?;
        while let Some(next) = Self::reduce(&singular) {
            singular = next;
        }
        Some(singular)
    }
}
