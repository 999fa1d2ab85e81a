//! Relation module - typed, directed edges between claims

use crate::claim::ClaimId;
use crate::error::{ensure_confidence, DomainError};
use crate::evidence::EvidencePointer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Method tag for edges produced by subject/object joins
pub const METHOD_CHAIN_JOIN: &str = "chain_join";

/// Method tag for edges produced by pairwise heuristics
pub const METHOD_RELATION_HEURISTIC: &str = "relation_heuristic";

/// Type of relation between claims
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationKind {
    /// Source's object is target's subject
    ChainsTo,

    /// The claims cannot both hold
    Contradicts,

    /// Source is a more specific version of target
    Refines,

    /// Source narrows when target applies
    Qualifies,
}

impl RelationKind {
    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationKind::ChainsTo => "CHAINS_TO",
            RelationKind::Contradicts => "CONTRADICTS",
            RelationKind::Refines => "REFINES",
            RelationKind::Qualifies => "QUALIFIES",
        }
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stable composite key the persistence layer upserts on
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RelationKey {
    /// Source claim
    pub source: ClaimId,
    /// Target claim
    pub target: ClaimId,
    /// Method tag
    pub method: String,
}

impl fmt::Display for RelationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.source, self.target, self.method)
    }
}

/// A directed, typed edge between two claims
///
/// Relations are derived and recomputable. Two runs over the same inputs
/// yield equal relations, so the persistence layer can merge on
/// [`RelationKey`] instead of duplicating edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimRelation {
    /// Source claim ID
    pub source: ClaimId,

    /// Target claim ID
    pub target: ClaimId,

    /// Type of relation
    pub kind: RelationKind,

    /// Confidence [0.0, 1.0]
    pub confidence: f64,

    /// Short human-readable basis
    pub basis: String,

    /// Method tag that produced the edge
    pub method: String,

    /// Pointers to the claims the edge was derived from
    pub evidence: Vec<EvidencePointer>,
}

impl ClaimRelation {
    /// Create a new relation without evidence
    ///
    /// # Errors
    /// Fails if the confidence is outside [0.0, 1.0].
    pub fn new(
        source: ClaimId,
        target: ClaimId,
        kind: RelationKind,
        confidence: f64,
        method: impl Into<String>,
        basis: impl Into<String>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            source,
            target,
            kind,
            confidence: ensure_confidence(confidence)?,
            basis: basis.into(),
            method: method.into(),
            evidence: Vec::new(),
        })
    }

    /// Append an evidence pointer
    pub fn with_evidence(mut self, pointer: EvidencePointer) -> Self {
        self.evidence.push(pointer);
        self
    }

    /// Composite key for idempotent upserts
    pub fn key(&self) -> RelationKey {
        RelationKey {
            source: self.source,
            target: self.target,
            method: self.method.clone(),
        }
    }

    /// Check the fields the persistence layer requires before writing
    ///
    /// A relation must name its method, carry a confidence in [0.0, 1.0],
    /// connect two distinct claims and point at least one resolvable piece
    /// of evidence.
    pub fn validate_for_persistence(&self) -> Result<(), DomainError> {
        let reject = |issue: &str| DomainError::MissingEvidence {
            key: self.key().to_string(),
            issue: issue.to_string(),
        };

        if self.method.trim().is_empty() {
            return Err(reject("method tag is empty"));
        }
        if !(self.confidence.is_finite() && (0.0..=1.0).contains(&self.confidence)) {
            return Err(reject("confidence is outside [0.0, 1.0]"));
        }
        if self.source == self.target {
            return Err(reject("source and target are the same claim"));
        }
        if !self.evidence.iter().any(EvidencePointer::is_resolvable) {
            return Err(reject("no evidence pointer"));
        }
        Ok(())
    }
}
