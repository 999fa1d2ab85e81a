//! Deterministic intra-document chain joins

use crate::keys::{check_key, KeyRejection};
use crate::{ChainConfig, ChainError, ChainStats};
use concord_domain::lexicon::normalize_entity;
use concord_domain::relation::METHOD_CHAIN_JOIN;
use concord_domain::{screen_claims, Claim, ClaimId, ClaimRelation, EvidencePointer, RelationKind};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Relations and the statistics of the run that produced them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainReport {
    /// `CHAINS_TO` edges, sorted by (source, target)
    pub relations: Vec<ClaimRelation>,

    /// Run statistics
    pub stats: ChainStats,
}

/// A claim whose structured form can take part in a join
struct Joinable<'a> {
    claim: &'a Claim,
    subject: String,
    object: String,
}

/// Links claims whose object is another claim's subject
///
/// Only claims from the same document with a canonical predicate are
/// joined. For every join key the guards run in order: self-loop, two-cycle,
/// duplicate, per-key cap.
///
/// # Examples
///
/// ```
/// use concord_chain::ChainDetector;
/// use concord_domain::{Claim, ClaimId, Modality, StructuredForm};
///
/// let claim = |id: u128, s: &str, p: &str, o: &str| {
///     let text = format!("{s} {p} {o}");
///     Claim::new(ClaimId::from_value(id), "t", "doc", text, Modality::Factual, 0.9)
///         .unwrap()
///         .with_structure(StructuredForm::new(s, p, o))
/// };
/// let a = claim(1, "S/4HANA", "USES", "HANA");
/// let b = claim(2, "HANA", "REQUIRES", "TLS 1.2");
///
/// let report = ChainDetector::with_defaults().detect(&[a, b]).unwrap();
/// assert_eq!(report.relations.len(), 1);
/// assert_eq!(report.relations[0].basis, "join_key=hana");
/// ```
#[derive(Debug, Clone)]
pub struct ChainDetector {
    config: ChainConfig,
}

impl ChainDetector {
    /// Create a detector with the given configuration
    pub fn new(config: ChainConfig) -> Result<Self, ChainError> {
        config.validate().map_err(ChainError::Config)?;
        Ok(Self { config })
    }

    /// Create a detector with the default configuration
    pub fn with_defaults() -> Self {
        Self {
            config: ChainConfig::default(),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// Detect `CHAINS_TO` edges in a claim batch
    ///
    /// The batch may span documents and tenants; joins never do.
    pub fn detect(&self, claims: &[Claim]) -> Result<ChainReport, ChainError> {
        let mut stats = ChainStats::new();
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

        let mut documents: BTreeMap<(&str, &str), Vec<&Claim>> = BTreeMap::new();
        for claim in claims {
            documents
                .entry((claim.tenant_id.as_str(), claim.document_id.as_str()))
                .or_default()
                .push(claim);
        }
        stats.documents = documents.len();

        let mut relations = Vec::new();
        for members in documents.values() {
            self.detect_document(members, &mut stats, &mut relations);
        }

        relations.sort_by(|a, b| (a.source, a.target).cmp(&(b.source, b.target)));
        stats.emitted_edges = relations.len();

        tracing::info!(
            "Chain detection over {} documents: {} edges, {} keys capped, {} non-canonical skipped",
            stats.documents,
            stats.emitted_edges,
            stats.capped_keys,
            stats.skipped_non_canonical
        );

        Ok(ChainReport { relations, stats })
    }

    fn detect_document(
        &self,
        members: &[&Claim],
        stats: &mut ChainStats,
        out: &mut Vec<ClaimRelation>,
    ) {
        let mut joinable = Vec::new();
        for claim in members {
            match &claim.structured {
                None => stats.skipped_unstructured += 1,
                Some(form) if form.canonical_predicate().is_none() => {
                    stats.skipped_non_canonical += 1;
                }
                Some(form) => joinable.push(Joinable {
                    claim,
                    subject: normalize_entity(&form.subject),
                    object: normalize_entity(&form.object),
                }),
            }
        }
        stats.eligible_claims += joinable.len();

        let mut by_object: BTreeMap<&str, Vec<&Joinable<'_>>> = BTreeMap::new();
        let mut by_subject: BTreeMap<&str, Vec<&Joinable<'_>>> = BTreeMap::new();
        for j in &joinable {
            by_object.entry(j.object.as_str()).or_default().push(j);
            by_subject.entry(j.subject.as_str()).or_default().push(j);
        }

        let mut seen: HashSet<(ClaimId, ClaimId)> = HashSet::new();
        for (key, sources) in &by_object {
            let Some(targets) = by_subject.get(key) else {
                continue;
            };
            stats.join_keys += 1;

            match check_key(key, self.config.min_key_chars) {
                Ok(()) => {}
                Err(KeyRejection::TooShort) => {
                    stats.rejected_short_keys += 1;
                    continue;
                }
                Err(KeyRejection::NotAnEntity) => {
                    stats.rejected_invalid_keys += 1;
                    continue;
                }
            }

            self.join_key(key, sources, targets, &mut seen, stats, out);
        }
    }

    fn join_key(
        &self,
        key: &str,
        sources: &[&Joinable<'_>],
        targets: &[&Joinable<'_>],
        seen: &mut HashSet<(ClaimId, ClaimId)>,
        stats: &mut ChainStats,
        out: &mut Vec<ClaimRelation>,
    ) {
        let cap = self.config.max_edges_per_key;
        let mut sources = ranked(sources);
        let mut targets = ranked(targets);

        if sources.len() * targets.len() > cap {
            stats.capped_keys += 1;
            tracing::debug!(
                "Join key '{}' capped: {} x {} candidates, keeping {}",
                key,
                sources.len(),
                targets.len(),
                cap
            );
            stats.truncated_edges += sources.len() * targets.len();
            sources.truncate(cap);
            targets.truncate(cap);
            stats.truncated_edges -= sources.len() * targets.len();
        }

        let mut pairs: Vec<(&Joinable<'_>, &Joinable<'_>)> = sources
            .iter()
            .flat_map(|a| targets.iter().map(move |b| (*a, *b)))
            .collect();
        pairs.sort_by(|(a1, b1), (a2, b2)| {
            let s1 = a1.claim.confidence + b1.claim.confidence;
            let s2 = a2.claim.confidence + b2.claim.confidence;
            s2.total_cmp(&s1)
                .then_with(|| a1.claim.id.cmp(&a2.claim.id))
                .then_with(|| b1.claim.id.cmp(&b2.claim.id))
        });

        let mut emitted = 0usize;
        for (a, b) in pairs {
            if a.claim.id == b.claim.id {
                stats.self_loops += 1;
                continue;
            }
            if a.subject == b.object {
                stats.two_cycles += 1;
                continue;
            }
            if seen.contains(&(a.claim.id, b.claim.id)) {
                stats.duplicates += 1;
                continue;
            }
            if emitted >= cap {
                stats.truncated_edges += 1;
                continue;
            }

            let relation = match ClaimRelation::new(
                a.claim.id,
                b.claim.id,
                RelationKind::ChainsTo,
                a.claim.confidence.min(b.claim.confidence),
                METHOD_CHAIN_JOIN,
                format!("join_key={key}"),
            ) {
                Ok(relation) => relation,
                Err(e) => {
                    tracing::warn!("Skipping edge {} -> {}: {}", a.claim.id, b.claim.id, e);
                    stats.rejected_edges += 1;
                    continue;
                }
            };

            seen.insert((a.claim.id, b.claim.id));
            out.push(
                relation
                    .with_evidence(EvidencePointer::from_claim(a.claim))
                    .with_evidence(EvidencePointer::from_claim(b.claim)),
            );
            emitted += 1;
        }
    }
}

impl Default for ChainDetector {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Confidence descending, id ascending
fn ranked<'a, 'b>(side: &[&'b Joinable<'a>]) -> Vec<&'b Joinable<'a>> {
    let mut side = side.to_vec();
    side.sort_by(|x, y| {
        y.claim
            .confidence
            .total_cmp(&x.claim.confidence)
            .then_with(|| x.claim.id.cmp(&y.claim.id))
    });
    side
}
