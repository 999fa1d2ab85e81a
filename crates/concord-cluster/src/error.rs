//! Clusterer error types

use concord_domain::DomainError;
use thiserror::Error;

/// Errors that can occur while clustering
#[derive(Error, Debug)]
pub enum ClusterError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// A cluster could not be constructed
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}
