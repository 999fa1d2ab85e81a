//! Concord Chain Detector
//!
//! Finds `CHAINS_TO` edges inside a single document: when claim A's object
//! is claim B's subject, A chains to B.
//!
//! Joins run over two indexes per document (normalized object to claims,
//! normalized subject to claims) and only over claims whose predicate is in
//! the canonical vocabulary. Guards keep a hub entity from producing a
//! quadratic edge blow-up:
//!
//! - join keys must be long enough and look like entity names
//! - self loops and two-claim cycles are skipped
//! - each (source, target) pair is emitted once per document
//! - each key emits at most `max_edges_per_key` edges, highest confidence
//!   first
//!
//! Every trip of a guard is counted in [`ChainStats`].

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod detector;
mod error;
pub mod keys;
mod stats;

pub use config::ChainConfig;
pub use detector::{ChainDetector, ChainReport};
pub use error::ChainError;
pub use stats::ChainStats;
