//! Concord Relation Detector
//!
//! Proposes `CONTRADICTS`, `QUALIFIES` and `REFINES` edges between claims
//! that share a linked entity. Claims without a common entity are never
//! compared.
//!
//! ## Heuristics
//!
//! Tried in order, first match wins:
//!
//! 1. **Contradicts**: one claim is negated, the other is not, and they say
//!    the same thing otherwise
//! 2. **Qualifies**: one claim carries a conditional marker ("if", "when",
//!    "unless") or conditional modality and the other does not
//! 3. **Refines**: one claim carries a specificity marker or names a
//!    narrower object than the other
//!
//! A match whose confidence is below the configured minimum is returned as
//! an [`Abstention`], never as a low-confidence edge.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod config;
mod detector;
mod error;
pub mod markers;
mod stats;

pub use config::RelationConfig;
pub use detector::{Abstention, RelationDetector, RelationReport};
pub use error::RelationError;
pub use stats::RelationStats;
