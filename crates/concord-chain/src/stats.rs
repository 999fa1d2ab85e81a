//! Per-invocation chain detection statistics

use serde::{Deserialize, Serialize};

/// Counters for one detection run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainStats {
    /// Documents processed
    pub documents: usize,

    /// Claims dropped because they failed validation
    pub invalid_claims: usize,

    /// Ids dropped because differing claims shared them
    pub conflicting_ids: usize,

    /// Claims with a structured form and a canonical predicate
    pub eligible_claims: usize,

    /// Structured claims whose predicate is outside the canonical vocabulary
    pub skipped_non_canonical: usize,

    /// Claims without a structured form
    pub skipped_unstructured: usize,

    /// Keys present in both the object and subject index
    pub join_keys: usize,

    /// Join keys below the minimum length
    pub rejected_short_keys: usize,

    /// Join keys that are not entity names
    pub rejected_invalid_keys: usize,

    /// Pairs skipped because both sides are the same claim
    pub self_loops: usize,

    /// Pairs skipped because they would close a two-claim cycle
    pub two_cycles: usize,

    /// Pairs already emitted under another key
    pub duplicates: usize,

    /// Keys whose candidate product exceeded the cap
    pub capped_keys: usize,

    /// Candidate pairs dropped by the cap
    pub truncated_edges: usize,

    /// Edges that failed construction and were skipped
    pub rejected_edges: usize,

    /// Edges emitted
    pub emitted_edges: usize,
}

impl ChainStats {
    /// Create empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Total pairs suppressed by guards, excluding cap truncation
    pub fn total_guarded(&self) -> usize {
        self.self_loops + self.two_cycles + self.duplicates
    }

    /// Human-readable summary
    pub fn summary(&self) -> String {
        [
            "Chain Statistics".to_string(),
            "================".to_string(),
            format!("Documents: {}", self.documents),
            format!(
                "Dropped claims: {} invalid, {} conflicting ids",
                self.invalid_claims, self.conflicting_ids
            ),
            format!(
                "Eligible claims: {} (skipped {} non-canonical, {} unstructured)",
                self.eligible_claims, self.skipped_non_canonical, self.skipped_unstructured
            ),
            format!(
                "Join keys: {} ({} too short, {} invalid)",
                self.join_keys, self.rejected_short_keys, self.rejected_invalid_keys
            ),
            format!(
                "Guarded pairs: {} ({} self loops, {} two-cycles, {} duplicates)",
                self.total_guarded(),
                self.self_loops,
                self.two_cycles,
                self.duplicates
            ),
            format!("Capped keys: {} ({} pairs truncated)", self.capped_keys, self.truncated_edges),
            format!("Edges emitted: {} ({} rejected)", self.emitted_edges, self.rejected_edges),
        ]
        .join("\n")
    }
}
