//! Error types for the comparison engine

use thiserror::Error;

/// Errors constructing a comparator
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CompareError {
    /// Tolerance below zero
    #[error("Tolerance must be non-negative, got {0}")]
    NegativeTolerance(f64),

    /// Tolerance is NaN or infinite
    #[error("Tolerance must be finite, got {0}")]
    NonFiniteTolerance(f64),
}
