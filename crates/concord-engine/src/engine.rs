//! Batch orchestration over every component

use crate::{EngineConfig, EngineError};
use concord_chain::{ChainDetector, ChainStats};
use concord_cluster::{ClaimClusterer, ClusterStats};
use concord_compare::{Comparator, ComparisonOutcome};
use concord_confidence::{ConfidenceEngine, ConfidenceResult, DomainSignals, KgSignals};
use concord_domain::traits::GraphSink;
use concord_domain::{Claim, ClaimCluster, ClaimForm, ClaimRelation, Embeddings, EntityLinks};
use concord_relation::{Abstention, RelationDetector, RelationStats};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Input to one analysis run
#[derive(Debug, Clone, Default)]
pub struct ClaimBatch {
    /// Claims to analyze
    pub claims: Vec<Claim>,

    /// Optional embedding per claim id
    pub embeddings: Option<Embeddings>,

    /// Optional linked entities per claim id
    pub entity_links: Option<EntityLinks>,
}

impl ClaimBatch {
    /// Create a batch from claims alone
    pub fn new(claims: Vec<Claim>) -> Self {
        Self {
            claims,
            ..Self::default()
        }
    }

    /// Attach embeddings
    pub fn with_embeddings(mut self, embeddings: Embeddings) -> Self {
        self.embeddings = Some(embeddings);
        self
    }

    /// Attach entity links
    pub fn with_entity_links(mut self, links: EntityLinks) -> Self {
        self.entity_links = Some(links);
        self
    }
}

/// Statistics from every stage of one analysis run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisStats {
    /// Clusterer counters
    pub cluster: ClusterStats,

    /// Chain detector counters
    pub chain: ChainStats,

    /// Relation detector counters
    pub relation: RelationStats,

    /// Relations dropped at the persistence boundary
    pub rejected_relations: usize,
}

impl AnalysisStats {
    /// Human-readable summary of every stage
    pub fn summary(&self) -> String {
        [
            self.cluster.summary(),
            self.chain.summary(),
            self.relation.summary(),
            format!("Rejected relations: {}", self.rejected_relations),
        ]
        .join("\n\n")
    }
}

/// Everything derived from one batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchAnalysis {
    /// Clusters, ordered by tenant then first member
    pub clusters: Vec<ClaimCluster>,

    /// Relations that passed boundary validation, ordered by key
    pub relations: Vec<ClaimRelation>,

    /// Relation candidates held back for low confidence
    pub abstentions: Vec<Abstention>,

    /// Run statistics
    pub stats: AnalysisStats,
}

/// Counts from writing an analysis to a sink
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistReport {
    /// Clusters written
    pub clusters: usize,

    /// Relations written
    pub relations: usize,

    /// Relations skipped because they failed validation
    pub rejected: usize,
}

/// Facade over the comparator, detectors and confidence engine
///
/// Holds no state between calls; every report carries its own statistics.
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    comparator: Comparator,
    clusterer: ClaimClusterer,
    chains: ChainDetector,
    relations: RelationDetector,
    confidence: ConfidenceEngine,
}

impl Engine {
    /// Build every component from a configuration
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate().map_err(EngineError::Config)?;
        Ok(Self {
            comparator: Comparator::new(config.tolerance)?,
            clusterer: ClaimClusterer::new(config.cluster.clone())?,
            chains: ChainDetector::new(config.chain.clone())?,
            relations: RelationDetector::new(config.relation.clone())?,
            confidence: ConfidenceEngine::new(config.confidence.clone())?,
            config,
        })
    }

    /// Build an engine with default configuration
    pub fn with_defaults() -> Self {
        Self {
            config: EngineConfig::default(),
            comparator: Comparator::exact(),
            clusterer: ClaimClusterer::with_defaults(),
            chains: ChainDetector::with_defaults(),
            relations: RelationDetector::with_defaults(),
            confidence: ConfidenceEngine::with_defaults(),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Compare a value claim against an assertion at the configured tolerance
    pub fn compare(&self, assertion: &ClaimForm, claim: &ClaimForm) -> ComparisonOutcome {
        self.comparator.compare(assertion, claim)
    }

    /// Classify a neighborhood from aggregated signals
    pub fn evaluate(&self, kg: &KgSignals, domain: &DomainSignals) -> ConfidenceResult {
        self.confidence.evaluate(kg, domain)
    }

    /// Cluster the batch and detect chain and heuristic relations
    ///
    /// Every relation is checked against the persistence contract before it
    /// is returned; failures are logged and counted, never returned.
    pub fn analyze(&self, batch: &ClaimBatch) -> Result<BatchAnalysis, EngineError> {
        tracing::info!("Analyzing batch of {} claims", batch.claims.len());

        let clusters = self.clusterer.cluster(
            &batch.claims,
            batch.embeddings.as_ref(),
            batch.entity_links.as_ref(),
        )?;
        let chains = self.chains.detect(&batch.claims)?;
        let heuristics = self.relations.detect(&batch.claims, batch.entity_links.as_ref())?;

        let mut stats = AnalysisStats {
            cluster: clusters.stats,
            chain: chains.stats,
            relation: heuristics.stats,
            rejected_relations: 0,
        };

        let mut relations = Vec::with_capacity(chains.relations.len() + heuristics.relations.len());
        for relation in chains.relations.into_iter().chain(heuristics.relations) {
            match relation.validate_for_persistence() {
                Ok(()) => relations.push(relation),
                Err(e) => {
                    tracing::warn!("Dropping relation {}: {}", relation.key(), e);
                    stats.rejected_relations += 1;
                }
            }
        }
        relations.sort_by_key(ClaimRelation::key);

        tracing::info!(
            "Batch analysis complete: {} clusters, {} relations, {} abstentions",
            clusters.clusters.len(),
            relations.len(),
            heuristics.abstentions.len()
        );

        Ok(BatchAnalysis {
            clusters: clusters.clusters,
            relations,
            abstentions: heuristics.abstentions,
            stats,
        })
    }

    /// Write an analysis through a sink
    ///
    /// Relations failing the persistence contract are skipped and counted.
    /// The first sink error aborts the write.
    pub fn persist<S>(
        &self,
        analysis: &BatchAnalysis,
        sink: &mut S,
    ) -> Result<PersistReport, EngineError>
    where
        S: GraphSink,
        S::Error: Display,
    {
        let mut report = PersistReport::default();

        for cluster in &analysis.clusters {
            sink.upsert_cluster(cluster)
                .map_err(|e| EngineError::Sink(format!("cluster {}: {}", cluster.id, e)))?;
            report.clusters += 1;
        }

        for relation in &analysis.relations {
            if let Err(e) = relation.validate_for_persistence() {
                tracing::warn!("Refusing to persist relation {}: {}", relation.key(), e);
                report.rejected += 1;
                continue;
            }
            sink.upsert_relation(relation)
                .map_err(|e| EngineError::Sink(format!("relation {}: {}", relation.key(), e)))?;
            report.relations += 1;
        }

        tracing::debug!(
            "Persisted {} clusters and {} relations ({} rejected)",
            report.clusters,
            report.relations,
            report.rejected
        );
        Ok(report)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::with_defaults()
    }
}
