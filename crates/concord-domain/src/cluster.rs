//! Claim clusters - sets of claims judged equivalent

use crate::claim::ClaimId;
use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default upper bound on cluster membership
pub const DEFAULT_MAX_CLUSTER_SIZE: usize = 50;

/// Namespace for deterministic (UUIDv5) cluster identifiers
const CLUSTER_NAMESPACE: Uuid = Uuid::from_u128(0x3c5e_9d1a_7b42_4f0e_a6c8_12d4_90be_7f31);

/// A set of claims judged equivalent
///
/// `claim_ids` is sorted ascending with no duplicates, and the identifier is
/// derived from the tenant and the members, so re-clustering the same batch
/// yields byte-identical clusters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimCluster {
    /// Deterministic identifier
    pub id: String,

    /// Owning tenant
    pub tenant_id: String,

    /// Members, sorted ascending
    pub claim_ids: Vec<ClaimId>,

    /// Normalized mean embedding of the component, when every member had one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub centroid: Option<Vec<f32>>,
}

impl ClaimCluster {
    /// Build a cluster from its members
    ///
    /// Members are sorted and de-duplicated before the identifier is derived.
    ///
    /// # Errors
    /// Fails if fewer than two distinct members remain.
    pub fn from_members(
        tenant_id: impl Into<String>,
        mut claim_ids: Vec<ClaimId>,
        centroid: Option<Vec<f32>>,
    ) -> Result<Self, DomainError> {
        let tenant_id = tenant_id.into();
        claim_ids.sort();
        claim_ids.dedup();
        if claim_ids.len() < 2 {
            return Err(DomainError::ClusterTooSmall(claim_ids.len()));
        }

        let mut name = Vec::with_capacity(tenant_id.len() + 1 + 16 * claim_ids.len());
        name.extend_from_slice(tenant_id.as_bytes());
        name.push(0);
        for id in &claim_ids {
            name.extend_from_slice(&id.to_bytes());
        }
        let id = Uuid::new_v5(&CLUSTER_NAMESPACE, &name).to_string();

        Ok(Self {
            id,
            tenant_id,
            claim_ids,
            centroid,
        })
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.claim_ids.len()
    }

    /// Clusters always hold at least two members
    pub fn is_empty(&self) -> bool {
        self.claim_ids.is_empty()
    }

    /// Whether the cluster contains a claim
    pub fn contains(&self, id: ClaimId) -> bool {
        self.claim_ids.binary_search(&id).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[u128]) -> Vec<ClaimId> {
        values.iter().map(|v| ClaimId::from_value(*v)).collect()
    }

    #[test]
    fn test_members_sorted_and_deduplicated() {
        let cluster = ClaimCluster::from_members("t", ids(&[5, 1, 3, 1]), None).unwrap();
        assert_eq!(cluster.claim_ids, ids(&[1, 3, 5]));
        assert!(cluster.contains(ClaimId::from_value(3)));
        assert!(!cluster.contains(ClaimId::from_value(4)));
    }

    #[test]
    fn test_id_is_deterministic() {
        let a = ClaimCluster::from_members("t", ids(&[2, 1]), None).unwrap();
        let b = ClaimCluster::from_members("t", ids(&[1, 2]), None).unwrap();
        let c = ClaimCluster::from_members("other", ids(&[1, 2]), None).unwrap();
        assert_eq!(a.id, b.id);
        assert_ne!(a.id, c.id);
    }

    #[test]
    fn test_singleton_rejected() {
        let err = ClaimCluster::from_members("t", ids(&[1, 1]), None).unwrap_err();
        assert_eq!(err, DomainError::ClusterTooSmall(1));
    }
}
