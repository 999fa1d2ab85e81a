//! Lexical helpers shared by the clusterer and the detectors
//!
//! Every component must agree on what "the same entity" and "a negated
//! claim" mean, so normalization lives here rather than in each crate.

use std::collections::BTreeSet;

/// Words that carry no content for overlap scoring
const STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "by", "for", "from", "has", "have", "in", "is",
    "it", "its", "of", "on", "or", "that", "the", "this", "to", "was", "were", "will", "with",
    "does", "do", "did", "can", "must", "may", "should", "shall",
];

/// Tokens that flip the polarity of a statement
const NEGATION_CUES: &[&str] = &[
    "not", "no", "never", "none", "neither", "nor", "cannot", "without", "unsupported",
];

/// Leading articles dropped from entity names
const ARTICLES: &[&str] = &["the", "a", "an"];

/// Normalize an entity name for joining
///
/// Lowercases, trims surrounding punctuation and quotes, collapses internal
/// whitespace and drops a leading article.
///
/// # Examples
///
/// ```
/// use concord_domain::lexicon::normalize_entity;
///
/// assert_eq!(normalize_entity("  The  HANA "), "hana");
/// assert_eq!(normalize_entity("\"S/4HANA\""), "s/4hana");
/// ```
pub fn normalize_entity(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let trimmed = lowered.trim_matches(|c: char| {
        c.is_whitespace()
            || matches!(c, '"' | '\'' | '`' | '.' | ',' | ';' | ':' | '(' | ')' | '[' | ']')
    });

    let mut words: Vec<&str> = trimmed.split_whitespace().collect();
    if words.len() > 1 && ARTICLES.contains(&words[0]) {
        words.remove(0);
    }
    words.join(" ")
}

/// Lowercased word tokens, keeping apostrophes inside words
pub fn words(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|w| w.trim_matches('\''))
        .filter(|w| !w.is_empty())
        .map(str::to_string)
        .collect()
}

/// Whether a single token negates
pub fn is_negation_token(token: &str) -> bool {
    NEGATION_CUES.contains(&token) || token.ends_with("n't")
}

/// Whether the text asserts the negation of its content
pub fn is_negated(text: &str) -> bool {
    words(text).iter().any(|w| is_negation_token(w))
}

/// Content tokens: words minus stop words and negation cues
pub fn content_tokens(text: &str) -> BTreeSet<String> {
    words(text)
        .into_iter()
        .filter(|w| !STOP_WORDS.contains(&w.as_str()) && !is_negation_token(w))
        .collect()
}

/// Jaccard overlap of two token sets; empty sets overlap by 0
pub fn jaccard(a: &BTreeSet<String>, b: &BTreeSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    a.intersection(b).count() as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_entity() {
        assert_eq!(normalize_entity("HANA"), "hana");
        assert_eq!(normalize_entity("TLS   1.2."), "tls 1.2");
        assert_eq!(normalize_entity("The Database"), "database");
        assert_eq!(normalize_entity("a"), "a");
    }

    #[test]
    fn test_negation_detection() {
        assert!(is_negated("The service does not support TLS 1.0"));
        assert!(is_negated("Backups aren't encrypted"));
        assert!(is_negated("There is no limit"));
        assert!(!is_negated("The service supports TLS 1.2"));
        assert!(!is_negated("Notifications are sent"));
    }

    #[test]
    fn test_content_tokens_drop_noise() {
        let tokens = content_tokens("The API does not support TLS 1.0");
        let expected: BTreeSet<String> = ["api", "support", "tls", "1", "0"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(tokens, expected);
    }

    #[test]
    fn test_jaccard() {
        let a = content_tokens("backup retention is 30 days");
        let b = content_tokens("the backup retention is 30 days");
        let c = content_tokens("completely unrelated sentence");
        assert_eq!(jaccard(&a, &b), 1.0);
        assert_eq!(jaccard(&a, &c), 0.0);
        assert_eq!(jaccard(&BTreeSet::new(), &BTreeSet::new()), 0.0);
    }
}
