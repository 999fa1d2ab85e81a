//! Construction errors for domain values

use thiserror::Error;

/// Errors raised when a domain value is malformed
///
/// These are programmer or data errors. They surface at construction time
/// and halt processing of the single offending item, never the whole batch.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Identifier could not be parsed
    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    /// A numeric field was NaN or infinite
    #[error("Field '{field}' must be finite, got {value}")]
    NonFinite {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: f64,
    },

    /// Interval with low > high
    #[error("Interval lower bound {low} exceeds upper bound {high}")]
    InvalidInterval {
        /// Lower bound
        low: f64,
        /// Upper bound
        high: f64,
    },

    /// Set value without members
    #[error("Value set must contain at least one member")]
    EmptySet,

    /// Confidence outside [0.0, 1.0]
    #[error("Confidence {0} is outside [0.0, 1.0]")]
    ConfidenceOutOfRange(f64),

    /// Required text field was empty
    #[error("Field '{0}' must not be empty")]
    EmptyField(&'static str),

    /// Unit symbol could not be parsed
    #[error("Invalid unit: '{0}'")]
    InvalidUnit(String),

    /// Version string could not be parsed
    #[error("Invalid version: '{0}'")]
    InvalidVersion(String),

    /// Modality string could not be parsed
    #[error("Invalid modality: '{0}'")]
    InvalidModality(String),

    /// Cluster with fewer than two distinct members
    #[error("Cluster needs at least two distinct members, got {0}")]
    ClusterTooSmall(usize),

    /// Relation fails the persistence evidence contract
    #[error("Relation {key} rejected: {issue}")]
    MissingEvidence {
        /// Composite key of the relation
        key: String,
        /// What is missing
        issue: String,
    },
}

/// Reject NaN and infinities for a named field
pub(crate) fn ensure_finite(field: &'static str, value: f64) -> Result<f64, DomainError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DomainError::NonFinite { field, value })
    }
}

/// Reject confidences outside [0.0, 1.0]
pub(crate) fn ensure_confidence(value: f64) -> Result<f64, DomainError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(DomainError::ConfidenceOutOfRange(value))
    }
}
