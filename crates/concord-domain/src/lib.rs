//! Concord Domain Layer
//!
//! This crate contains the data model shared by every Concord component.
//! It keeps its dependency footprint small (identifiers, serialization and
//! error derives only) and holds no engine logic beyond construction-time
//! validation and the lexical helpers every detector agrees on.
//!
//! ## Key Concepts
//!
//! - **Claim**: An atomic proposition extracted upstream, read-only here
//! - **ClaimForm**: A value-bearing assertion about a property
//! - **Value**: Closed sum of scalar, interval, set, inequality, boolean,
//!   version and text shapes
//! - **ClaimCluster**: Claims judged equivalent, bounded and sorted
//! - **ClaimRelation**: Typed, evidence-carrying edge between two claims
//!
//! ## Construction
//!
//! Malformed values fail at construction time with [`DomainError`]. Once a
//! value exists it is valid, so comparison and detection code never has to
//! re-check bounds.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod claim;
pub mod cluster;
pub mod error;
pub mod evidence;
pub mod form;
pub mod lexicon;
pub mod modality;
pub mod predicate;
pub mod relation;
pub mod traits;
pub mod unit;
pub mod value;

// Re-exports for convenience
pub use claim::{screen_claims, Claim, ClaimId, Embeddings, EntityLinks, Screening, StructuredForm};
pub use cluster::{ClaimCluster, DEFAULT_MAX_CLUSTER_SIZE};
pub use error::DomainError;
pub use evidence::EvidencePointer;
pub use form::{AuthorityLevel, ClaimForm, TruthRegime};
pub use modality::Modality;
pub use predicate::CanonicalPredicate;
pub use relation::{ClaimRelation, RelationKey, RelationKind};
pub use unit::{Dimension, Unit};
pub use value::{
    Bound, Direction, Interval, Quantity, Value, ValueKind, ValueSet, Version, VersionConstraint,
};
