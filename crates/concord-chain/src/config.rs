//! Chain detector configuration

use serde::{Deserialize, Serialize};

/// Configuration for subject/object chain joins
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Upper bound on edges emitted per join key
    pub max_edges_per_key: usize,

    /// Minimum characters in a normalized join key
    pub min_key_chars: usize,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            max_edges_per_key: 10,
            min_key_chars: 3,
        }
    }
}

impl ChainConfig {
    /// Strict preset: fewer edges per hub, longer keys
    pub fn strict() -> Self {
        Self {
            max_edges_per_key: 5,
            min_key_chars: 4,
        }
    }

    /// Lenient preset: more edges per hub
    pub fn lenient() -> Self {
        Self {
            max_edges_per_key: 25,
            min_key_chars: 3,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_edges_per_key == 0 {
            return Err("max_edges_per_key must be greater than 0".to_string());
        }
        if self.min_key_chars == 0 {
            return Err("min_key_chars must be greater than 0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ChainConfig::default();
        assert_eq!(config.max_edges_per_key, 10);
        assert_eq!(config.min_key_chars, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(ChainConfig::strict().validate().is_ok());
        assert!(ChainConfig::lenient().validate().is_ok());
    }

    #[test]
    fn test_zero_cap_invalid() {
        let config = ChainConfig {
            max_edges_per_key: 0,
            ..ChainConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
