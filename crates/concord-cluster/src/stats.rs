//! Per-invocation clustering statistics

use crate::validator::PairRejection;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Counters for one clustering run
///
/// Returned inside [`crate::ClusterReport`]; nothing accumulates across calls.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterStats {
    /// Claims seen
    pub claims: usize,

    /// Tenants seen
    pub tenants: usize,

    /// Claims dropped because they failed validation
    pub invalid_claims: usize,

    /// Ids dropped because differing claims shared them
    pub conflicting_ids: usize,

    /// Candidate pairs found by embedding similarity
    pub embedding_candidates: usize,

    /// Candidate pairs found by token overlap
    pub lexical_candidates: usize,

    /// Candidate pairs rejected, by reason
    pub rejected: BTreeMap<PairRejection, usize>,

    /// Validated pairs merged into the forest
    pub accepted_edges: usize,

    /// Components of one claim, never emitted
    pub singletons_dropped: usize,

    /// Clusters emitted
    pub clusters_emitted: usize,

    /// Clusters cut down to the size bound
    pub clusters_trimmed: usize,

    /// Claims removed by trimming
    pub members_trimmed: usize,

    /// Components that failed cluster construction and were skipped
    pub rejected_clusters: usize,
}

impl ClusterStats {
    /// Create empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a rejected candidate pair
    pub fn record_rejection(&mut self, reason: PairRejection) {
        *self.rejected.entry(reason).or_insert(0) += 1;
    }

    /// Record a trimmed cluster
    pub fn record_trim(&mut self, removed: usize) {
        self.clusters_trimmed += 1;
        self.members_trimmed += removed;
    }

    /// Total candidate pairs
    pub fn total_candidates(&self) -> usize {
        self.embedding_candidates + self.lexical_candidates
    }

    /// Total rejected pairs
    pub fn total_rejected(&self) -> usize {
        self.rejected.values().sum()
    }

    /// Human-readable summary
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Cluster Statistics".to_string(),
            "==================".to_string(),
            format!("Claims: {} across {} tenant(s)", self.claims, self.tenants),
            format!(
                "Dropped claims: {} invalid, {} conflicting ids",
                self.invalid_claims, self.conflicting_ids
            ),
            format!(
                "Candidates: {} ({} embedding, {} lexical)",
                self.total_candidates(),
                self.embedding_candidates,
                self.lexical_candidates
            ),
            format!("Accepted edges: {}", self.accepted_edges),
        ];

        if !self.rejected.is_empty() {
            lines.push("Rejections:".to_string());
            for (reason, count) in &self.rejected {
                lines.push(format!("  {}: {}", reason.as_str(), count));
            }
            lines.push(format!("  Total: {}", self.total_rejected()));
        }

        lines.push(format!("Clusters emitted: {}", self.clusters_emitted));
        lines.push(format!(
            "Trimmed: {} cluster(s), {} member(s)",
            self.clusters_trimmed, self.members_trimmed
        ));
        lines.push(format!("Singletons dropped: {}", self.singletons_dropped));
        if self.rejected_clusters > 0 {
            lines.push(format!("Rejected clusters: {}", self.rejected_clusters));
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_totals() {
        let mut stats = ClusterStats::new();
        stats.record_rejection(PairRejection::NegationInverted);
        stats.record_rejection(PairRejection::NegationInverted);
        stats.record_rejection(PairRejection::ModalityMismatch);
        assert_eq!(stats.total_rejected(), 3);
        assert_eq!(stats.rejected[&PairRejection::NegationInverted], 2);
    }

    #[test]
    fn test_summary_mentions_trims() {
        let mut stats = ClusterStats::new();
        stats.record_trim(30);
        let summary = stats.summary();
        assert!(summary.contains("Trimmed: 1 cluster(s), 30 member(s)"));
    }
}
