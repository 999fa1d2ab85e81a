//! Clusterer configuration

use concord_domain::DEFAULT_MAX_CLUSTER_SIZE;
use serde::{Deserialize, Serialize};

/// Configuration for near-duplicate clustering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusterConfig {
    /// Minimum cosine similarity for an embedding candidate pair
    pub similarity_threshold: f64,

    /// Minimum Jaccard overlap of content tokens for a lexical candidate pair
    pub min_token_overlap: f64,

    /// Upper bound on cluster membership
    pub max_cluster_size: usize,

    /// Reject pairs whose modalities differ
    pub require_same_modality: bool,

    /// Reject pairs where exactly one side is negated
    pub reject_negation_inverted: bool,

    /// Reject pairs with disjoint entity links (when both sides have links)
    pub require_entity_overlap: bool,
}

impl Default for ClusterConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.85,
            min_token_overlap: 0.7,
            max_cluster_size: DEFAULT_MAX_CLUSTER_SIZE,
            require_same_modality: true,
            reject_negation_inverted: true,
            require_entity_overlap: true,
        }
    }
}

impl ClusterConfig {
    /// Strict preset: fewer, tighter clusters
    pub fn strict() -> Self {
        Self {
            similarity_threshold: 0.92,
            min_token_overlap: 0.85,
            max_cluster_size: 25,
            ..Self::default()
        }
    }

    /// Lenient preset: more recall, same validation rules
    pub fn lenient() -> Self {
        Self {
            similarity_threshold: 0.80,
            min_token_overlap: 0.6,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(self.similarity_threshold > 0.0 && self.similarity_threshold <= 1.0) {
            return Err("similarity_threshold must be in (0.0, 1.0]".to_string());
        }
        if !(self.min_token_overlap > 0.0 && self.min_token_overlap <= 1.0) {
            return Err("min_token_overlap must be in (0.0, 1.0]".to_string());
        }
        if self.max_cluster_size < 2 {
            return Err("max_cluster_size must be at least 2".to_string());
        }
        Ok(())
    }
}
