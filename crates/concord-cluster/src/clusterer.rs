//! Two-stage conservative near-duplicate clustering

use crate::similarity::{centroid, cosine_similarity};
use crate::union_find::UnionFind;
use crate::validator::{PairProfile, PairValidator};
use crate::{ClusterConfig, ClusterError, ClusterStats};
use concord_domain::lexicon::{content_tokens, is_negated, jaccard};
use concord_domain::{screen_claims, Claim, ClaimCluster, Embeddings, EntityLinks};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Clusters and the statistics of the run that produced them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterReport {
    /// Emitted clusters, ordered by tenant then first member
    pub clusters: Vec<ClaimCluster>,

    /// Run statistics
    pub stats: ClusterStats,
}

/// Groups near-duplicate claims
///
/// Candidate pairs come from embedding similarity (when both claims have a
/// vector) or content-token overlap (otherwise). A candidate only becomes an
/// edge after validation; edges are merged with union-find and every
/// component of two or more claims becomes a cluster, trimmed to the size
/// bound.
///
/// # Examples
///
/// ```
/// use concord_cluster::ClaimClusterer;
/// use concord_domain::{Claim, ClaimId, Modality};
///
/// let claim = |id: u128, text: &str| {
///     Claim::new(ClaimId::from_value(id), "t", "d", text, Modality::Factual, 0.9).unwrap()
/// };
/// let claims = vec![
///     claim(1, "Backups are retained for 30 days"),
///     claim(2, "Backups are retained for 30 days."),
/// ];
///
/// let report = ClaimClusterer::with_defaults().cluster(&claims, None, None).unwrap();
/// assert_eq!(report.clusters.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct ClaimClusterer {
    config: ClusterConfig,
    validator: PairValidator,
}

impl ClaimClusterer {
    /// Create a clusterer with the given configuration
    pub fn new(config: ClusterConfig) -> Result<Self, ClusterError> {
        config.validate().map_err(ClusterError::Config)?;
        let validator = PairValidator::new(&config);
        Ok(Self { config, validator })
    }

    /// Create a clusterer with the default configuration
    pub fn with_defaults() -> Self {
        let config = ClusterConfig::default();
        let validator = PairValidator::new(&config);
        Self { config, validator }
    }

    /// Active configuration
    pub fn config(&self) -> &ClusterConfig {
        &self.config
    }

    /// Cluster a batch of claims
    ///
    /// Claims are partitioned by tenant first; no cluster spans tenants.
    /// Invalid claims are skipped. Identical copies of a claim are considered
    /// once; differing claims that share an id are all skipped.
    pub fn cluster(
        &self,
        claims: &[Claim],
        embeddings: Option<&Embeddings>,
        links: Option<&EntityLinks>,
    ) -> Result<ClusterReport, ClusterError> {
        let mut stats = ClusterStats::new();
        stats.claims = claims.len();
        let (claims, screening) = screen_claims(claims);
        stats.invalid_claims = screening.invalid;
        stats.conflicting_ids = screening.conflicting_ids;
        if screening.invalid + screening.conflicting_ids > 0 {
            tracing::warn!(
                "Skipping {} invalid claims and {} conflicting ids",
                screening.invalid,
                screening.conflicting_ids
            );
        }

        let mut by_tenant: BTreeMap<&str, Vec<&Claim>> = BTreeMap::new();
        for claim in claims {
            by_tenant.entry(claim.tenant_id.as_str()).or_default().push(claim);
        }
        stats.tenants = by_tenant.len();

        let mut clusters = Vec::new();
        for (tenant, members) in &by_tenant {
            self.cluster_tenant(tenant, members, embeddings, links, &mut stats, &mut clusters);
        }

        clusters.sort_by(|a, b| {
            (a.tenant_id.as_str(), a.claim_ids.first())
                .cmp(&(b.tenant_id.as_str(), b.claim_ids.first()))
        });
        stats.clusters_emitted = clusters.len();

        tracing::info!(
            "Clustered {} claims into {} clusters ({} trimmed, {} pairs rejected)",
            stats.claims,
            stats.clusters_emitted,
            stats.clusters_trimmed,
            stats.total_rejected()
        );

        Ok(ClusterReport { clusters, stats })
    }

    fn cluster_tenant(
        &self,
        tenant: &str,
        members: &[&Claim],
        embeddings: Option<&Embeddings>,
        links: Option<&EntityLinks>,
        stats: &mut ClusterStats,
        out: &mut Vec<ClaimCluster>,
    ) {
        let vectors: Vec<Option<&[f32]>> = members
            .iter()
            .map(|c| embeddings.and_then(|m| m.get(&c.id)).map(Vec::as_slice))
            .collect();
        let tokens: Vec<BTreeSet<String>> =
            members.iter().map(|c| content_tokens(&c.text)).collect();
        let profiles: Vec<PairProfile<'_>> = members
            .iter()
            .map(|c| PairProfile {
                modality: c.modality,
                negated: is_negated(&c.text),
                entities: entity_set(c, links),
            })
            .collect();

        let mut forest = UnionFind::new(members.len());
        for i in 0..members.len() {
            for j in (i + 1)..members.len() {
                let candidate = match (vectors[i], vectors[j]) {
                    (Some(a), Some(b)) => {
                        let hit = cosine_similarity(a, b)
                            .is_some_and(|s| f64::from(s) >= self.config.similarity_threshold);
                        stats.embedding_candidates += usize::from(hit);
                        hit
                    }
                    _ => {
                        let hit = jaccard(&tokens[i], &tokens[j]) >= self.config.min_token_overlap;
                        stats.lexical_candidates += usize::from(hit);
                        hit
                    }
                };
                if !candidate {
                    continue;
                }

                match self.validator.check(&profiles[i], &profiles[j]) {
                    Ok(()) => {
                        forest.union(i, j);
                        stats.accepted_edges += 1;
                    }
                    Err(reason) => stats.record_rejection(reason),
                }
            }
        }

        for component in forest.components() {
            if component.len() < 2 {
                stats.singletons_dropped += 1;
                continue;
            }

            let embedded: Option<Vec<&[f32]>> = component.iter().map(|&i| vectors[i]).collect();
            let center = embedded.and_then(centroid);

            let kept = if component.len() > self.config.max_cluster_size {
                let kept = self.trim(&component, members, &vectors, center.as_deref());
                stats.record_trim(component.len() - kept.len());
                tracing::debug!(
                    "Trimmed cluster in tenant {} from {} to {} members",
                    tenant,
                    component.len(),
                    kept.len()
                );
                kept
            } else {
                component
            };

            let ids = kept.iter().map(|&i| members[i].id).collect();
            match ClaimCluster::from_members(tenant, ids, center) {
                Ok(cluster) => out.push(cluster),
                Err(e) => {
                    tracing::warn!("Skipping cluster in tenant {}: {}", tenant, e);
                    stats.rejected_clusters += 1;
                }
            }
        }
    }

    /// Keep the `max_cluster_size` members closest to the centroid, or the
    /// most confident ones when the component is not fully embedded
    fn trim(
        &self,
        component: &[usize],
        members: &[&Claim],
        vectors: &[Option<&[f32]>],
        center: Option<&[f32]>,
    ) -> Vec<usize> {
        let mut ranked: Vec<(f64, usize)> = component
            .iter()
            .map(|&i| {
                let score = match (center, vectors[i]) {
                    (Some(c), Some(v)) => {
                        cosine_similarity(c, v).map_or(f64::NEG_INFINITY, f64::from)
                    }
                    _ => members[i].confidence,
                };
                (score, i)
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.0.total_cmp(&a.0)
                .then_with(|| members[a.1].id.cmp(&members[b.1].id))
        });
        ranked.truncate(self.config.max_cluster_size);
        ranked.into_iter().map(|(_, i)| i).collect()
    }
}

impl Default for ClaimClusterer {
    fn default() -> Self {
        Self::with_defaults()
    }
}

fn entity_set<'a>(claim: &'a Claim, links: Option<&'a EntityLinks>) -> BTreeSet<&'a str> {
    let linked = links.and_then(|m| m.get(&claim.id)).unwrap_or(&claim.entity_ids);
    linked
        .iter()
        .map(|e| e.trim())
        .filter(|e| !e.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::PairRejection;
    use concord_domain::{ClaimId, Modality};
    use std::collections::HashMap;

    fn claim(id: u128, text: &str) -> Claim {
        Claim::new(ClaimId::from_value(id), "tenant", "doc", text, Modality::Factual, 0.8).unwrap()
    }

    #[test]
    fn test_lexical_duplicates_cluster() {
        let claims = vec![
            claim(3, "Backups are retained for 30 days"),
            claim(1, "Backups are retained for 30 days."),
            claim(2, "The API gateway enforces rate limits"),
        ];
        let report = ClaimClusterer::with_defaults().cluster(&claims, None, None).unwrap();

        assert_eq!(report.clusters.len(), 1);
        assert_eq!(
            report.clusters[0].claim_ids,
            vec![ClaimId::from_value(1), ClaimId::from_value(3)]
        );
        assert_eq!(report.stats.lexical_candidates, 1);
        assert_eq!(report.stats.singletons_dropped, 1);
    }

    #[test]
    fn test_negation_inverted_pair_rejected() {
        let claims = vec![
            claim(1, "Backups are encrypted at rest"),
            claim(2, "Backups are not encrypted at rest"),
        ];
        let report = ClaimClusterer::with_defaults().cluster(&claims, None, None).unwrap();

        assert!(report.clusters.is_empty());
        assert_eq!(report.stats.rejected.get(&PairRejection::NegationInverted), Some(&1));
    }

    #[test]
    fn test_modality_mismatch_rejected() {
        let mut prescriptive = claim(2, "Backups are retained for 30 days");
        prescriptive.modality = Modality::Prescriptive;
        let claims = vec![claim(1, "Backups are retained for 30 days"), prescriptive];
        let report = ClaimClusterer::with_defaults().cluster(&claims, None, None).unwrap();

        assert!(report.clusters.is_empty());
        assert_eq!(report.stats.rejected.get(&PairRejection::ModalityMismatch), Some(&1));
    }

    #[test]
    fn test_side_map_links_override_claim_links() {
        let claims = vec![
            claim(1, "Backups are retained for 30 days").with_entities(["backup"]),
            claim(2, "Backups are retained for 30 days").with_entities(["retention"]),
        ];
        let report = ClaimClusterer::with_defaults().cluster(&claims, None, None).unwrap();
        assert!(report.clusters.is_empty());

        let mut links = HashMap::new();
        links.insert(ClaimId::from_value(1), vec!["backup".to_string()]);
        links.insert(ClaimId::from_value(2), vec!["backup".to_string()]);
        let report = ClaimClusterer::with_defaults().cluster(&claims, None, Some(&links)).unwrap();
        assert_eq!(report.clusters.len(), 1);
    }

    #[test]
    fn test_embeddings_take_precedence_over_text() {
        let claims = vec![
            claim(1, "Backups are retained for 30 days"),
            claim(2, "Backups are retained for 30 days"),
        ];
        let mut embeddings = HashMap::new();
        embeddings.insert(ClaimId::from_value(1), vec![1.0, 0.0]);
        embeddings.insert(ClaimId::from_value(2), vec![0.0, 1.0]);

        let report = ClaimClusterer::with_defaults()
            .cluster(&claims, Some(&embeddings), None)
            .unwrap();
        assert!(report.clusters.is_empty());
        assert_eq!(report.stats.total_candidates(), 0);
    }

    #[test]
    fn test_tenants_never_mix() {
        let mut other = claim(2, "Backups are retained for 30 days");
        other.tenant_id = "other".to_string();
        let claims = vec![claim(1, "Backups are retained for 30 days"), other];
        let report = ClaimClusterer::with_defaults().cluster(&claims, None, None).unwrap();

        assert!(report.clusters.is_empty());
        assert_eq!(report.stats.tenants, 2);
    }

    #[test]
    fn test_trim_by_confidence_without_embeddings() {
        let config = ClusterConfig {
            max_cluster_size: 3,
            ..ClusterConfig::default()
        };
        let claims: Vec<Claim> = (1..=5u128)
            .map(|i| {
                let mut c = claim(i, "Backups are retained for 30 days");
                c.confidence = [0.5, 0.9, 0.7, 0.9, 0.6][(i - 1) as usize];
                c
            })
            .collect();

        let report = ClaimClusterer::new(config).unwrap().cluster(&claims, None, None).unwrap();
        assert_eq!(report.clusters.len(), 1);
        // 0.9 (ids 2 and 4), then 0.7 (id 3)
        assert_eq!(
            report.clusters[0].claim_ids,
            vec![ClaimId::from_value(2), ClaimId::from_value(3), ClaimId::from_value(4)]
        );
        assert_eq!(report.stats.members_trimmed, 2);
        assert!(report.clusters[0].centroid.is_none());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ClusterConfig {
            max_cluster_size: 0,
            ..ClusterConfig::default()
        };
        assert!(matches!(ClaimClusterer::new(config), Err(ClusterError::Config(_))));
    }
}
