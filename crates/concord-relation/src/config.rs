//! Relation detector configuration

use serde::{Deserialize, Serialize};

/// Configuration for pairwise relation detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelationConfig {
    /// Relations below this confidence are recorded as abstentions
    pub min_confidence: f64,

    /// Claims one entity may contribute before the hub guard trips
    pub max_claims_per_entity: usize,

    /// Minimum token overlap for two unstructured claims to share a property
    pub min_property_overlap: f64,

    /// Heuristic strength of a polarity conflict
    pub contradiction_strength: f64,

    /// Heuristic strength of a conditional narrowing
    pub qualification_strength: f64,

    /// Heuristic strength of a specificity marker or object extension
    pub refinement_strength: f64,
}

impl Default for RelationConfig {
    fn default() -> Self {
        Self {
            min_confidence: 0.6,
            max_claims_per_entity: 100,
            min_property_overlap: 0.5,
            contradiction_strength: 0.9,
            qualification_strength: 0.8,
            refinement_strength: 0.75,
        }
    }
}

impl RelationConfig {
    /// Strict preset: abstain more often
    pub fn strict() -> Self {
        Self {
            min_confidence: 0.75,
            min_property_overlap: 0.7,
            ..Self::default()
        }
    }

    /// Lenient preset: emit more relations
    pub fn lenient() -> Self {
        Self {
            min_confidence: 0.5,
            max_claims_per_entity: 250,
            min_property_overlap: 0.4,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        let unit = |name: &str, v: f64| {
            if (0.0..=1.0).contains(&v) {
                Ok(())
            } else {
                Err(format!("{name} must be in [0.0, 1.0]"))
            }
        };
        unit("min_confidence", self.min_confidence)?;
        unit("min_property_overlap", self.min_property_overlap)?;
        unit("contradiction_strength", self.contradiction_strength)?;
        unit("qualification_strength", self.qualification_strength)?;
        unit("refinement_strength", self.refinement_strength)?;
        if self.max_claims_per_entity < 2 {
            return Err("max_claims_per_entity must be at least 2".to_string());
        }
        Ok(())
    }
}
