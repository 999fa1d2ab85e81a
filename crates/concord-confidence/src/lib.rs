//! Concord Confidence Engine
//!
//! Classifies a knowledge-graph neighborhood from pre-aggregated signals.
//! This is a rule table, not a learned score: the first applicable rule
//! decides the [`EpistemicState`], and every rule that fired is recorded as
//! a [`RuleTag`] for audit.
//!
//! Domain coverage is judged separately as a [`ContractState`]. Scope and
//! trust are orthogonal; an out-of-scope query can still be `ESTABLISHED`.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod engine;
mod error;
pub mod rules;
mod signals;

pub use config::ConfidenceConfig;
pub use engine::{evaluate, ConfidenceEngine, ConfidenceResult};
pub use error::ConfidenceError;
pub use rules::{ContractState, EpistemicState, RuleTag};
pub use signals::{DomainSignals, DomainSignalsBuilder, KgSignals, KgSignalsBuilder};
