//! Lexical markers that narrow or sharpen a claim

use concord_domain::lexicon::content_tokens;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

static CONDITIONAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(if|when|whenever|unless|provided that|only when|in case)\b")
        .expect("Invalid conditional marker regex")
});

static SPECIFICITY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(specifically|in particular|namely|such as|including|only)\b")
        .expect("Invalid specificity marker regex")
});

/// Marker words removed before lexical overlap is measured
const MARKER_WORDS: &[&str] = &[
    "if", "when", "whenever", "unless", "provided", "case", "only", "specifically", "particular",
    "namely", "such", "including",
];

/// Whether the text restricts when it applies ("if", "when", "unless", ...)
pub fn has_conditional_marker(text: &str) -> bool {
    CONDITIONAL.is_match(text)
}

/// Whether the text singles out a narrower case ("specifically", "such as", ...)
pub fn has_specificity_marker(text: &str) -> bool {
    SPECIFICITY.is_match(text)
}

/// Content tokens without negation cues or marker words
pub fn property_tokens(text: &str) -> BTreeSet<String> {
    let mut tokens = content_tokens(text);
    tokens.retain(|t| !MARKER_WORDS.contains(&t.as_str()));
    tokens
}

/// Whether `longer` contains `shorter` as a whole-word run and says more
pub fn extends(longer: &str, shorter: &str) -> bool {
    !shorter.is_empty()
        && longer.len() > shorter.len()
        && format!(" {longer} ").contains(&format!(" {shorter} "))
}
