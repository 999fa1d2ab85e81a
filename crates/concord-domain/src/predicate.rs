//! Canonical predicate vocabulary

use serde::{Deserialize, Serialize};

/// Predicates eligible for chain detection
///
/// Anything outside this list is still a valid claim predicate, it simply
/// does not compose into chains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum CanonicalPredicate {
    Uses,
    Requires,
    DependsOn,
    Provides,
    Enables,
    Supports,
    Contains,
    PartOf,
    IntegratesWith,
    RunsOn,
    ConnectsTo,
    Replaces,
    Extends,
    Manages,
    Produces,
    Consumes,
    Stores,
    Exposes,
}

impl CanonicalPredicate {
    /// Every canonical predicate, in declaration order
    pub const ALL: [CanonicalPredicate; 18] = [
        CanonicalPredicate::Uses,
        CanonicalPredicate::Requires,
        CanonicalPredicate::DependsOn,
        CanonicalPredicate::Provides,
        CanonicalPredicate::Enables,
        CanonicalPredicate::Supports,
        CanonicalPredicate::Contains,
        CanonicalPredicate::PartOf,
        CanonicalPredicate::IntegratesWith,
        CanonicalPredicate::RunsOn,
        CanonicalPredicate::ConnectsTo,
        CanonicalPredicate::Replaces,
        CanonicalPredicate::Extends,
        CanonicalPredicate::Manages,
        CanonicalPredicate::Produces,
        CanonicalPredicate::Consumes,
        CanonicalPredicate::Stores,
        CanonicalPredicate::Exposes,
    ];

    /// Wire name of the predicate
    pub fn as_str(&self) -> &'static str {
        match self {
            CanonicalPredicate::Uses => "USES",
            CanonicalPredicate::Requires => "REQUIRES",
            CanonicalPredicate::DependsOn => "DEPENDS_ON",
            CanonicalPredicate::Provides => "PROVIDES",
            CanonicalPredicate::Enables => "ENABLES",
            CanonicalPredicate::Supports => "SUPPORTS",
            CanonicalPredicate::Contains => "CONTAINS",
            CanonicalPredicate::PartOf => "PART_OF",
            CanonicalPredicate::IntegratesWith => "INTEGRATES_WITH",
            CanonicalPredicate::RunsOn => "RUNS_ON",
            CanonicalPredicate::ConnectsTo => "CONNECTS_TO",
            CanonicalPredicate::Replaces => "REPLACES",
            CanonicalPredicate::Extends => "EXTENDS",
            CanonicalPredicate::Manages => "MANAGES",
            CanonicalPredicate::Produces => "PRODUCES",
            CanonicalPredicate::Consumes => "CONSUMES",
            CanonicalPredicate::Stores => "STORES",
            CanonicalPredicate::Exposes => "EXPOSES",
        }
    }

    /// Parse a predicate, accepting any case and spaces or hyphens for underscores
    pub fn parse(s: &str) -> Option<Self> {
        let wire: String = s
            .trim()
            .chars()
            .map(|c| if c == ' ' || c == '-' { '_' } else { c.to_ascii_uppercase() })
            .collect();

        Self::ALL.iter().copied().find(|p| p.as_str() == wire)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variants() {
        assert_eq!(CanonicalPredicate::parse("USES"), Some(CanonicalPredicate::Uses));
        assert_eq!(CanonicalPredicate::parse("depends on"), Some(CanonicalPredicate::DependsOn));
        assert_eq!(CanonicalPredicate::parse("part-of"), Some(CanonicalPredicate::PartOf));
        assert_eq!(CanonicalPredicate::parse("is_related_to"), None);
        assert_eq!(CanonicalPredicate::parse(""), None);
    }

    #[test]
    fn test_all_round_trip() {
        for predicate in CanonicalPredicate::ALL {
            assert_eq!(CanonicalPredicate::parse(predicate.as_str()), Some(predicate));
        }
    }
}
