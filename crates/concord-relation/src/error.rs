//! Relation detector error types

use concord_domain::DomainError;
use thiserror::Error;

/// Errors that can occur during relation detection
#[derive(Error, Debug)]
pub enum RelationError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A relation could not be constructed
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}
