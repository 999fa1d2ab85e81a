//! Modality module - how a claim asserts its content

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Modality of a claim
///
/// - Factual: states how things are
/// - Prescriptive: states how things must be
/// - Permissive: states how things may be
/// - Conditional: states how things are under a condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Modality {
    /// Descriptive statement of fact
    Factual,

    /// Obligation ("must", "shall")
    Prescriptive,

    /// Permission ("may", "can")
    Permissive,

    /// Applies only under a stated condition
    Conditional,
}

impl Modality {
    /// Get the modality name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Modality::Factual => "FACTUAL",
            Modality::Prescriptive => "PRESCRIPTIVE",
            Modality::Permissive => "PERMISSIVE",
            Modality::Conditional => "CONDITIONAL",
        }
    }

    /// Parse a modality from a string (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "factual" => Some(Modality::Factual),
            "prescriptive" => Some(Modality::Prescriptive),
            "permissive" => Some(Modality::Permissive),
            "conditional" => Some(Modality::Conditional),
            _ => None,
        }
    }
}

impl std::str::FromStr for Modality {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| DomainError::InvalidModality(s.to_string()))
    }
}

impl std::fmt::Display for Modality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
