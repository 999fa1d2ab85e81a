//! Join-key validity
//!
//! Stray tokens and pronouns make terrible join keys: "it" appears as the
//! subject of half the claims in any document.

/// Words that never identify a concrete entity
const GENERIC_NAMES: &[&str] = &[
    "it", "its", "this", "that", "these", "those", "they", "them", "their", "which", "what", "who",
    "there", "here", "he", "she", "we", "you", "system", "systems", "data", "user", "users",
    "thing", "things", "something", "everything", "item", "items", "information", "value",
];

/// Why a join key was refused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRejection {
    /// Fewer characters than the configured minimum
    TooShort,
    /// No letters, or a pronoun / generic placeholder
    NotAnEntity,
}

/// Whether a normalized name plausibly identifies an entity
pub fn is_valid_entity_name(key: &str) -> bool {
    key.chars().any(char::is_alphabetic) && !GENERIC_NAMES.contains(&key)
}

/// Check a normalized join key
pub fn check_key(key: &str, min_chars: usize) -> Result<(), KeyRejection> {
    if key.chars().count() < min_chars {
        return Err(KeyRejection::TooShort);
    }
    if !is_valid_entity_name(key) {
        return Err(KeyRejection::NotAnEntity);
    }
    Ok(())
}
