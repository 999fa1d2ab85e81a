//! Confidence engine error types

use thiserror::Error;

/// Errors that can occur while building signals or configuring the engine
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfidenceError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A signal value is out of range
    #[error("Invalid signal {field}: {reason}")]
    InvalidSignal {
        /// Signal name
        field: &'static str,
        /// What is wrong with it
        reason: String,
    },
}
