//! Candidate-pair validation
//!
//! A candidate pair only becomes a graph edge once it passes every enabled
//! check. The first failing check is the rejection reason.

use crate::ClusterConfig;
use concord_domain::Modality;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Why a candidate pair was not merged
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairRejection {
    /// Modalities differ (e.g. FACTUAL vs PRESCRIPTIVE)
    ModalityMismatch,

    /// One side asserts X, the other asserts not-X
    NegationInverted,

    /// Both sides link entities but share none
    NoEntityOverlap,
}

impl PairRejection {
    /// Stable label used in statistics
    pub fn as_str(&self) -> &'static str {
        match self {
            PairRejection::ModalityMismatch => "modality_mismatch",
            PairRejection::NegationInverted => "negation_inverted",
            PairRejection::NoEntityOverlap => "no_entity_overlap",
        }
    }
}

/// Per-claim facts the validator looks at
#[derive(Debug, Clone)]
pub struct PairProfile<'a> {
    /// Claim modality
    pub modality: Modality,

    /// Whether the claim text is negated
    pub negated: bool,

    /// Linked entities
    pub entities: BTreeSet<&'a str>,
}

/// Validates candidate pairs against the configured rules
#[derive(Debug, Clone)]
pub struct PairValidator {
    require_same_modality: bool,
    reject_negation_inverted: bool,
    require_entity_overlap: bool,
}

impl PairValidator {
    /// Create a validator from the clusterer configuration
    pub fn new(config: &ClusterConfig) -> Self {
        Self {
            require_same_modality: config.require_same_modality,
            reject_negation_inverted: config.reject_negation_inverted,
            require_entity_overlap: config.require_entity_overlap,
        }
    }

    /// Check a candidate pair
    pub fn check(&self, a: &PairProfile<'_>, b: &PairProfile<'_>) -> Result<(), PairRejection> {
        if self.require_same_modality && a.modality != b.modality {
            return Err(PairRejection::ModalityMismatch);
        }
        if self.reject_negation_inverted && a.negated != b.negated {
            return Err(PairRejection::NegationInverted);
        }
        if self.require_entity_overlap
            && !a.entities.is_empty()
            && !b.entities.is_empty()
            && a.entities.is_disjoint(&b.entities)
        {
            return Err(PairRejection::NoEntityOverlap);
        }
        Ok(())
    }
}
