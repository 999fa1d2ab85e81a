//! The ordered epistemic rule table
//!
//! Rules are evaluated top to bottom and the first that applies decides the
//! state. When none applies the neighborhood is `PARTIAL` and the sub-rules
//! explain which threshold was missed.

use crate::{ConfidenceConfig, KgSignals};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trust classification of a graph neighborhood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EpistemicState {
    /// Not enough structure to judge
    Incomplete,

    /// Sources disagree
    Debate,

    /// Supported, but below at least one threshold
    Partial,

    /// Mature, confident and corroborated
    Established,
}

impl EpistemicState {
    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            EpistemicState::Incomplete => "INCOMPLETE",
            EpistemicState::Debate => "DEBATE",
            EpistemicState::Partial => "PARTIAL",
            EpistemicState::Established => "ESTABLISHED",
        }
    }

    /// Short label for display next to an answer
    pub fn badge(&self) -> &'static str {
        match self {
            EpistemicState::Incomplete => "Incomplete",
            EpistemicState::Debate => "Debated",
            EpistemicState::Partial => "Partially supported",
            EpistemicState::Established => "Established",
        }
    }
}

impl fmt::Display for EpistemicState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a query falls inside declared domain coverage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractState {
    /// At least one matched domain is declared
    Covered,

    /// Nothing matched the declared domains
    OutOfScope,
}

/// Audit tag recorded for every rule that fired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleTag {
    /// No typed relation edges
    NoTypedEdges,
    /// Unresolved conflicts present
    UnresolvedConflicts,
    /// Concepts without edges
    OrphanConcepts,
    /// Expected edges absent
    MissingExpectedEdges,
    /// Every threshold met
    Established,
    /// Validated ratio below threshold
    WeakMaturity,
    /// Average confidence below threshold
    WeakConfidence,
    /// Too few independent sources
    SingleSource,
    /// Query inside declared coverage
    ContractCovered,
    /// Query outside declared coverage
    ContractOutOfScope,
}

impl RuleTag {
    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleTag::NoTypedEdges => "NO_TYPED_EDGES",
            RuleTag::UnresolvedConflicts => "UNRESOLVED_CONFLICTS",
            RuleTag::OrphanConcepts => "ORPHAN_CONCEPTS",
            RuleTag::MissingExpectedEdges => "MISSING_EXPECTED_EDGES",
            RuleTag::Established => "ESTABLISHED",
            RuleTag::WeakMaturity => "WEAK_MATURITY",
            RuleTag::WeakConfidence => "WEAK_CONFIDENCE",
            RuleTag::SingleSource => "SINGLE_SOURCE",
            RuleTag::ContractCovered => "CONTRACT_COVERED",
            RuleTag::ContractOutOfScope => "CONTRACT_OUT_OF_SCOPE",
        }
    }

    /// Consumer-facing warning text, if the tag warrants one
    pub fn warning(&self) -> Option<&'static str> {
        match self {
            RuleTag::UnresolvedConflicts => Some("Sources disagree on this topic"),
            RuleTag::OrphanConcepts => Some("Some concepts are not connected to any evidence"),
            RuleTag::MissingExpectedEdges => Some("Expected relationships are missing"),
            RuleTag::WeakMaturity => Some("Few of the supporting relations have been validated"),
            RuleTag::WeakConfidence => Some("Supporting relations have low confidence"),
            RuleTag::SingleSource => Some("Supported by a single source"),
            _ => None,
        }
    }

    /// Consumer-facing blocker text, if the tag prevents a confident answer
    pub fn blocker(&self) -> Option<&'static str> {
        match self {
            RuleTag::NoTypedEdges => Some("No typed relations support this topic"),
            RuleTag::ContractOutOfScope => Some("Query is outside the declared domain coverage"),
            _ => None,
        }
    }
}

impl fmt::Display for RuleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the rule table
#[derive(Clone, Copy)]
pub struct Rule {
    tag: RuleTag,
    state: EpistemicState,
    applies: fn(&KgSignals, &ConfidenceConfig) -> bool,
}

impl Rule {
    /// Tag recorded when the rule fires
    pub fn tag(&self) -> RuleTag {
        self.tag
    }

    /// State the rule assigns
    pub fn state(&self) -> EpistemicState {
        self.state
    }

    /// Whether the rule fires for these signals
    pub fn applies(&self, kg: &KgSignals, config: &ConfidenceConfig) -> bool {
        (self.applies)(kg, config)
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("tag", &self.tag)
            .field("state", &self.state)
            .finish()
    }
}

/// Rules in priority order
pub const RULES: [Rule; 5] = [
    Rule {
        tag: RuleTag::NoTypedEdges,
        state: EpistemicState::Incomplete,
        applies: |kg, _| kg.typed_edges() == 0,
    },
    Rule {
        tag: RuleTag::UnresolvedConflicts,
        state: EpistemicState::Debate,
        applies: |kg, _| kg.unresolved_conflicts() > 0,
    },
    Rule {
        tag: RuleTag::OrphanConcepts,
        state: EpistemicState::Incomplete,
        applies: |kg, _| kg.orphan_concepts() > 0,
    },
    Rule {
        tag: RuleTag::MissingExpectedEdges,
        state: EpistemicState::Incomplete,
        applies: |kg, _| kg.missing_expected_edges() > 0,
    },
    Rule {
        tag: RuleTag::Established,
        state: EpistemicState::Established,
        applies: |kg, config| partial_reasons(kg, config).is_empty(),
    },
];

/// Thresholds a neighborhood misses, in fixed order
pub fn partial_reasons(kg: &KgSignals, config: &ConfidenceConfig) -> Vec<RuleTag> {
    let mut tags = Vec::new();
    if kg.validated_ratio() < config.min_validated_ratio {
        tags.push(RuleTag::WeakMaturity);
    }
    if kg.avg_confidence() < config.min_avg_confidence {
        tags.push(RuleTag::WeakConfidence);
    }
    if kg.independent_sources() < config.min_independent_sources {
        tags.push(RuleTag::SingleSource);
    }
    tags
}
