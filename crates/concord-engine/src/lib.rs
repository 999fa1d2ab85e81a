//! Concord Engine
//!
//! Facade over the Concord components. An [`Engine`] is built from one
//! [`EngineConfig`] (usually loaded from TOML) and offers:
//!
//! - [`Engine::compare`]: value comparison at the configured tolerance
//! - [`Engine::analyze`]: clustering, chain detection and relation
//!   detection over a [`ClaimBatch`], with every relation checked against
//!   the persistence contract
//! - [`Engine::persist`]: idempotent writes through any
//!   [`concord_domain::traits::GraphSink`]
//! - [`Engine::evaluate`]: epistemic and contract classification
//!
//! The engine performs no I/O except optional config loading. It is
//! `Send + Sync` and may be shared across threads analyzing independent
//! batches.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod engine;
mod error;
mod memory;

pub use config::EngineConfig;
pub use engine::{AnalysisStats, BatchAnalysis, ClaimBatch, Engine, PersistReport};
pub use error::EngineError;
pub use memory::MemoryGraph;

pub use concord_chain as chain;
pub use concord_cluster as cluster;
pub use concord_compare as compare;
pub use concord_confidence as confidence;
pub use concord_domain as domain;
pub use concord_relation as relation;
