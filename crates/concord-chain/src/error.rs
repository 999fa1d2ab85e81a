//! Chain detector error types

use concord_domain::DomainError;
use thiserror::Error;

/// Errors that can occur during chain detection
#[derive(Error, Debug)]
pub enum ChainError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// An edge could not be constructed
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}
