//! Per-invocation relation detection statistics

use concord_domain::RelationKind;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Counters for one detection run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationStats {
    /// Claims analyzed
    pub claims: usize,

    /// Claims dropped because they failed validation
    pub invalid_claims: usize,

    /// Ids dropped because differing claims shared them
    pub conflicting_ids: usize,

    /// Claims with no linked entity, never paired
    pub claims_without_entities: usize,

    /// Entities whose claim list tripped the hub guard
    pub hub_entities: usize,

    /// Entity memberships dropped by the hub guard
    pub hub_claims_skipped: usize,

    /// Distinct pairs sharing at least one entity
    pub pairs_considered: usize,

    /// Pairs no heuristic matched
    pub no_pattern: usize,

    /// Relations emitted, by kind
    pub emitted: BTreeMap<RelationKind, usize>,

    /// Candidates recorded as abstentions
    pub abstentions: usize,

    /// Candidates that failed relation construction and were skipped
    pub rejected_relations: usize,
}

impl RelationStats {
    /// Create empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Count an emitted relation
    pub fn record_emitted(&mut self, kind: RelationKind) {
        *self.emitted.entry(kind).or_insert(0) += 1;
    }

    /// Total relations emitted
    pub fn total_emitted(&self) -> usize {
        self.emitted.values().sum()
    }

    /// Fraction of matched candidates that were abstained on
    pub fn abstention_rate(&self) -> f64 {
        let matched = self.total_emitted() + self.abstentions;
        if matched == 0 {
            return 0.0;
        }
        self.abstentions as f64 / matched as f64
    }

    /// Human-readable summary
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Relation Statistics".to_string(),
            "===================".to_string(),
            format!(
                "Claims: {} ({} without entities)",
                self.claims, self.claims_without_entities
            ),
            format!(
                "Dropped claims: {} invalid, {} conflicting ids",
                self.invalid_claims, self.conflicting_ids
            ),
            format!(
                "Hub entities: {} ({} memberships skipped)",
                self.hub_entities, self.hub_claims_skipped
            ),
            format!(
                "Pairs considered: {} ({} without a pattern)",
                self.pairs_considered, self.no_pattern
            ),
            format!("Relations emitted: {}", self.total_emitted()),
        ];
        for (kind, count) in &self.emitted {
            lines.push(format!("  {}: {}", kind, count));
        }
        lines.push(format!(
            "Abstentions: {} ({:.1}%)",
            self.abstentions,
            self.abstention_rate() * 100.0
        ));
        if self.rejected_relations > 0 {
            lines.push(format!("Rejected relations: {}", self.rejected_relations));
        }
        lines.join("\n")
    }
}
