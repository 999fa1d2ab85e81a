//! Confidence engine thresholds

use serde::{Deserialize, Serialize};

/// Thresholds separating `ESTABLISHED` from `PARTIAL`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfidenceConfig {
    /// Minimum average edge confidence
    pub min_avg_confidence: f64,

    /// Minimum share of validated edges
    pub min_validated_ratio: f64,

    /// Minimum number of independent corroborating sources
    pub min_independent_sources: usize,
}

impl Default for ConfidenceConfig {
    fn default() -> Self {
        Self {
            min_avg_confidence: 0.80,
            min_validated_ratio: 0.70,
            min_independent_sources: 2,
        }
    }
}

impl ConfidenceConfig {
    /// Strict preset for regulated answers
    pub fn strict() -> Self {
        Self {
            min_avg_confidence: 0.90,
            min_validated_ratio: 0.85,
            min_independent_sources: 3,
        }
    }

    /// Lenient preset for exploratory answers
    pub fn lenient() -> Self {
        Self {
            min_avg_confidence: 0.70,
            min_validated_ratio: 0.50,
            min_independent_sources: 1,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.min_avg_confidence) {
            return Err("min_avg_confidence must be in [0.0, 1.0]".to_string());
        }
        if !(0.0..=1.0).contains(&self.min_validated_ratio) {
            return Err("min_validated_ratio must be in [0.0, 1.0]".to_string());
        }
        if self.min_independent_sources == 0 {
            return Err("min_independent_sources must be at least 1".to_string());
        }
        Ok(())
    }
}
