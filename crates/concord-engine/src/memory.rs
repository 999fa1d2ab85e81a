//! In-memory graph sink

use concord_domain::traits::GraphSink;
use concord_domain::{ClaimCluster, ClaimRelation, RelationKey};
use std::collections::BTreeMap;

/// A [`GraphSink`] that keeps everything in ordered maps
///
/// Clusters are keyed by id and relations by [`RelationKey`], so writing the
/// same analysis twice leaves the graph unchanged. Relations that fail the
/// persistence contract are refused.
#[derive(Debug, Clone, Default)]
pub struct MemoryGraph {
    clusters: BTreeMap<String, ClaimCluster>,
    relations: BTreeMap<RelationKey, ClaimRelation>,
    writes: usize,
}

impl MemoryGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Stored clusters, ordered by id
    pub fn clusters(&self) -> impl Iterator<Item = &ClaimCluster> {
        self.clusters.values()
    }

    /// Stored relations, ordered by key
    pub fn relations(&self) -> impl Iterator<Item = &ClaimRelation> {
        self.relations.values()
    }

    /// Look up a relation by its composite key
    pub fn relation(&self, key: &RelationKey) -> Option<&ClaimRelation> {
        self.relations.get(key)
    }

    /// Number of stored clusters
    pub fn cluster_count(&self) -> usize {
        self.clusters.len()
    }

    /// Number of stored relations
    pub fn relation_count(&self) -> usize {
        self.relations.len()
    }

    /// Accepted upserts, including ones that replaced an existing record
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl GraphSink for MemoryGraph {
    type Error = String;

    fn upsert_cluster(&mut self, cluster: &ClaimCluster) -> Result<(), Self::Error> {
        self.clusters.insert(cluster.id.clone(), cluster.clone());
        self.writes += 1;
        Ok(())
    }

    fn upsert_relation(&mut self, relation: &ClaimRelation) -> Result<(), Self::Error> {
        relation.validate_for_persistence().map_err(|e| e.to_string())?;
        self.relations.insert(relation.key(), relation.clone());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use concord_domain::relation::METHOD_CHAIN_JOIN;
    use concord_domain::{ClaimId, EvidencePointer, RelationKind};

    fn relation(confidence: f64) -> ClaimRelation {
        ClaimRelation::new(
            ClaimId::from_value(1),
            ClaimId::from_value(2),
            RelationKind::ChainsTo,
            confidence,
            METHOD_CHAIN_JOIN,
            "join_key=hana",
        )
        .unwrap()
        .with_evidence(EvidencePointer::new(ClaimId::from_value(1), "doc"))
    }

    #[test]
    fn test_upsert_replaces() {
        let mut graph = MemoryGraph::new();
        graph.upsert_relation(&relation(0.7)).unwrap();
        graph.upsert_relation(&relation(0.9)).unwrap();

        assert_eq!(graph.relation_count(), 1);
        assert_eq!(graph.writes(), 2);
        let stored = graph.relation(&relation(0.9).key()).unwrap();
        assert_eq!(stored.confidence, 0.9);
    }

    #[test]
    fn test_relation_without_evidence_refused() {
        let bare = ClaimRelation::new(
            ClaimId::from_value(1),
            ClaimId::from_value(2),
            RelationKind::ChainsTo,
            0.8,
            METHOD_CHAIN_JOIN,
            "join_key=hana",
        )
        .unwrap();

        let mut graph = MemoryGraph::new();
        assert!(graph.upsert_relation(&bare).is_err());
        assert_eq!(graph.relation_count(), 0);
    }

    #[test]
    fn test_cluster_upsert_by_id() {
        let ids = vec![ClaimId::from_value(2), ClaimId::from_value(1)];
        let cluster = ClaimCluster::from_members("t", ids, None).unwrap();
        let mut graph = MemoryGraph::new();
        graph.upsert_cluster(&cluster).unwrap();
        graph.upsert_cluster(&cluster).unwrap();
        assert_eq!(graph.cluster_count(), 1);
    }
}
