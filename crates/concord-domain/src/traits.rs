//! Trait definitions for external interactions
//!
//! The engine never stores anything itself. These traits define the boundary
//! with the persistence collaborator.

use crate::{ClaimCluster, ClaimRelation};

/// Trait for writing derived clusters and relations
///
/// Implementations must upsert: writing the same cluster (by id) or the same
/// relation (by [`crate::RelationKey`]) twice updates the stored record
/// instead of duplicating it.
pub trait GraphSink {
    /// Error type for sink operations
    type Error;

    /// Insert or update a cluster keyed by its id
    fn upsert_cluster(&mut self, cluster: &ClaimCluster) -> Result<(), Self::Error>;

    /// Insert or update a relation keyed by `(source, target, method)`
    fn upsert_relation(&mut self, relation: &ClaimRelation) -> Result<(), Self::Error>;
}
