//! Terminal presentation of credentials.

/// One `*` per character, so the length stays visible but the value does not.
#[must_use]
pub fn mask(value: &str) -> String {
    "*".repeat(value.chars().count())
}

/// `"{id}. {value}"`, optionally masked.
#[must_use]
pub fn numbered(id: usize, value: &str, obfuscate: bool) -> String {
    if obfuscate {
        format!("{id}. {}", mask(value))
    } else {
        format!("{id}. {value}")
    }
}
