//! Engine configuration
//!
//! One TOML document configures every component. Missing sections and keys
//! fall back to their defaults:
//!
//! ```toml
//! tolerance = 0.01
//!
//! [cluster]
//! similarity_threshold = 0.9
//!
//! [chain]
//! max_edges_per_key = 5
//! ```

use crate::EngineError;
use concord_chain::ChainConfig;
use concord_cluster::ClusterConfig;
use concord_confidence::ConfidenceConfig;
use concord_relation::RelationConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for every engine component
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Relative tolerance for value comparisons
    pub tolerance: f64,

    /// Claim clusterer
    pub cluster: ClusterConfig,

    /// Chain detector
    pub chain: ChainConfig,

    /// Relation detector
    pub relation: RelationConfig,

    /// Confidence engine thresholds
    pub confidence: ConfidenceConfig,
}

impl EngineConfig {
    /// Strict presets for every component
    pub fn strict() -> Self {
        Self {
            tolerance: 0.0,
            cluster: ClusterConfig::strict(),
            chain: ChainConfig::strict(),
            relation: RelationConfig::strict(),
            confidence: ConfidenceConfig::strict(),
        }
    }

    /// Lenient presets for every component
    pub fn lenient() -> Self {
        Self {
            tolerance: 0.01,
            cluster: ClusterConfig::lenient(),
            chain: ChainConfig::lenient(),
            relation: RelationConfig::lenient(),
            confidence: ConfidenceConfig::lenient(),
        }
    }

    /// Validate every section
    pub fn validate(&self) -> Result<(), String> {
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err("tolerance must be finite and non-negative".to_string());
        }
        self.cluster.validate().map_err(|e| format!("cluster: {e}"))?;
        self.chain.validate().map_err(|e| format!("chain: {e}"))?;
        self.relation.validate().map_err(|e| format!("relation: {e}"))?;
        self.confidence.validate().map_err(|e| format!("confidence: {e}"))?;
        Ok(())
    }

    /// Parse and validate from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, EngineError> {
        let config: EngineConfig = toml::from_str(toml_str)?;
        config.validate().map_err(EngineError::Config)?;
        Ok(config)
    }

    /// Render as TOML
    pub fn to_toml(&self) -> Result<String, EngineError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load and validate from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, EngineError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = EngineConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.tolerance, 0.0);
        assert_eq!(config.chain.max_edges_per_key, 10);
        assert_eq!(config.cluster.max_cluster_size, 50);
    }

    #[test]
    fn test_presets_valid() {
        assert!(EngineConfig::strict().validate().is_ok());
        assert!(EngineConfig::lenient().validate().is_ok());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = EngineConfig::lenient();
        let toml_str = config.to_toml().unwrap();
        let parsed = EngineConfig::from_toml(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = EngineConfig::from_toml(
            r#"
            tolerance = 0.02

            [chain]
            max_edges_per_key = 4
            "#,
        )
        .unwrap();
        assert_eq!(config.tolerance, 0.02);
        assert_eq!(config.chain.max_edges_per_key, 4);
        assert_eq!(config.relation, RelationConfig::default());
    }

    #[test]
    fn test_invalid_section_named() {
        let err = EngineConfig::from_toml(
            r#"
            [relation]
            min_confidence = 3.0
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, EngineError::Config(ref msg) if msg.starts_with("relation:")));
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let err = EngineConfig::from_toml("tolerance = -0.5").unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn test_malformed_toml() {
        let err = EngineConfig::from_toml("tolerance = [").unwrap_err();
        assert!(matches!(err, EngineError::TomlParse(_)));
    }
}
