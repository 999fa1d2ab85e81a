//! Engine error types

use concord_chain::ChainError;
use concord_cluster::ClusterError;
use concord_compare::CompareError;
use concord_confidence::ConfidenceError;
use concord_relation::RelationError;
use thiserror::Error;

/// Errors surfaced by the engine facade
#[derive(Error, Debug)]
pub enum EngineError {
    /// Configuration failed validation
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failed to read a config file
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse TOML
    #[error("Failed to parse config TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to render TOML
    #[error("Failed to serialize config TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// Comparator could not be built
    #[error("Compare error: {0}")]
    Compare(#[from] CompareError),

    /// Clustering failed
    #[error("Cluster error: {0}")]
    Cluster(#[from] ClusterError),

    /// Chain detection failed
    #[error("Chain error: {0}")]
    Chain(#[from] ChainError),

    /// Relation detection failed
    #[error("Relation error: {0}")]
    Relation(#[from] RelationError),

    /// Confidence engine could not be built
    #[error("Confidence error: {0}")]
    Confidence(#[from] ConfidenceError),

    /// The graph sink refused a write
    #[error("Sink error: {0}")]
    Sink(String),
}
