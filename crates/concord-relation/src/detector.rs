//! Entity-gated pairwise relation heuristics

use crate::markers::{extends, has_conditional_marker, has_specificity_marker, property_tokens};
use crate::{RelationConfig, RelationError, RelationStats};
use concord_domain::lexicon::{is_negated, jaccard, normalize_entity};
use concord_domain::relation::METHOD_RELATION_HEURISTIC;
use concord_domain::{
    screen_claims, Claim, ClaimId, ClaimRelation, EntityLinks, EvidencePointer, Modality,
    RelationKind,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// A matched heuristic whose confidence fell below the threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Abstention {
    /// Claim the relation would have started at
    pub source: ClaimId,

    /// Claim the relation would have pointed to
    pub target: ClaimId,

    /// Relation the heuristic proposed
    pub candidate: RelationKind,

    /// Confidence the relation would have carried
    pub confidence: f64,

    /// Why it was not emitted
    pub reason: String,
}

/// Relations, abstentions and the statistics of the run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationReport {
    /// Emitted relations, sorted by (source, target)
    pub relations: Vec<ClaimRelation>,

    /// Candidates held back, sorted by (source, target)
    pub abstentions: Vec<Abstention>,

    /// Run statistics
    pub stats: RelationStats,
}

/// Everything the heuristics read from one claim
struct Profile<'a> {
    claim: &'a Claim,
    negated: bool,
    conditional: bool,
    specific: bool,
    triple: Option<(String, String, String)>,
    tokens: BTreeSet<String>,
}

impl<'a> Profile<'a> {
    fn new(claim: &'a Claim) -> Self {
        let triple = claim.structured.as_ref().map(|form| {
            let predicate = match form.canonical_predicate() {
                Some(canonical) => canonical.as_str().to_string(),
                None => normalize_entity(&form.predicate),
            };
            (normalize_entity(&form.subject), predicate, normalize_entity(&form.object))
        });

        Self {
            claim,
            negated: is_negated(&claim.text),
            conditional: claim.modality == Modality::Conditional
                || has_conditional_marker(&claim.text),
            specific: has_specificity_marker(&claim.text),
            triple,
            tokens: property_tokens(&claim.text),
        }
    }
}

/// A heuristic match before the confidence threshold is applied
struct Candidate {
    kind: RelationKind,
    source: usize,
    target: usize,
    strength: f64,
    basis: &'static str,
}

/// Detects `CONTRADICTS`, `QUALIFIES` and `REFINES` between claims
///
/// Only pairs that share a linked entity are looked at. Heuristics are tried
/// in that order and the first match wins; a match whose confidence is below
/// `min_confidence` becomes an [`Abstention`] instead of an edge.
#[derive(Debug, Clone)]
pub struct RelationDetector {
    config: RelationConfig,
}

impl RelationDetector {
    /// Create a detector with the given configuration
    pub fn new(config: RelationConfig) -> Result<Self, RelationError> {
        config.validate().map_err(RelationError::Config)?;
        Ok(Self { config })
    }

    /// Create a detector with the default configuration
    pub fn with_defaults() -> Self {
        Self {
            config: RelationConfig::default(),
        }
    }

    /// Active configuration
    pub fn config(&self) -> &RelationConfig {
        &self.config
    }

    /// Detect relations in a claim batch
    ///
    /// `entity_links` overrides a claim's own `entity_ids` when it has an
    /// entry for that claim.
    pub fn detect(
        &self,
        claims: &[Claim],
        entity_links: Option<&EntityLinks>,
    ) -> Result<RelationReport, RelationError> {
        let mut stats = RelationStats::new();
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

        let mut tenants: BTreeMap<&str, Vec<&Claim>> = BTreeMap::new();
        for claim in claims {
            tenants.entry(claim.tenant_id.as_str()).or_default().push(claim);
        }

        let mut relations = Vec::new();
        let mut abstentions = Vec::new();
        for members in tenants.values() {
            stats.claims += members.len();
            self.detect_tenant(members, entity_links, &mut stats, &mut relations, &mut abstentions);
        }

        relations.sort_by(|a, b| (a.source, a.target).cmp(&(b.source, b.target)));
        abstentions.sort_by(|a, b| (a.source, a.target).cmp(&(b.source, b.target)));

        tracing::info!(
            "Relation detection over {} claims: {} pairs, {} relations, {} abstentions",
            stats.claims,
            stats.pairs_considered,
            stats.total_emitted(),
            stats.abstentions
        );

        Ok(RelationReport {
            relations,
            abstentions,
            stats,
        })
    }

    fn detect_tenant(
        &self,
        members: &[&Claim],
        links: Option<&EntityLinks>,
        stats: &mut RelationStats,
        relations: &mut Vec<ClaimRelation>,
        abstentions: &mut Vec<Abstention>,
    ) {
        let profiles: Vec<Profile<'_>> = members.iter().map(|c| Profile::new(c)).collect();

        let mut by_entity: BTreeMap<String, Vec<usize>> = BTreeMap::new();
        for (idx, claim) in members.iter().enumerate() {
            let linked = links.and_then(|m| m.get(&claim.id)).unwrap_or(&claim.entity_ids);
            let entities: BTreeSet<String> = linked
                .iter()
                .map(|e| normalize_entity(e))
                .filter(|e| !e.is_empty())
                .collect();
            if entities.is_empty() {
                stats.claims_without_entities += 1;
            }
            for entity in entities {
                by_entity.entry(entity).or_default().push(idx);
            }
        }

        let mut pairs: BTreeSet<(usize, usize)> = BTreeSet::new();
        for (entity, mut indices) in by_entity {
            let cap = self.config.max_claims_per_entity;
            if indices.len() > cap {
                stats.hub_entities += 1;
                stats.hub_claims_skipped += indices.len() - cap;
                tracing::debug!(
                    "Entity '{}' links {} claims, keeping top {}",
                    entity,
                    indices.len(),
                    cap
                );
                indices.sort_by(|&x, &y| {
                    members[y]
                        .confidence
                        .total_cmp(&members[x].confidence)
                        .then_with(|| members[x].id.cmp(&members[y].id))
                });
                indices.truncate(cap);
                indices.sort_unstable();
            }
            for (n, &i) in indices.iter().enumerate() {
                for &j in &indices[n + 1..] {
                    pairs.insert((i, j));
                }
            }
        }
        stats.pairs_considered += pairs.len();

        for (i, j) in pairs {
            let Some(candidate) = self.classify(&profiles, i, j) else {
                stats.no_pattern += 1;
                continue;
            };

            let source = profiles[candidate.source].claim;
            let target = profiles[candidate.target].claim;
            let confidence = candidate.strength * (source.confidence + target.confidence) / 2.0;

            if confidence < self.config.min_confidence {
                stats.abstentions += 1;
                abstentions.push(Abstention {
                    source: source.id,
                    target: target.id,
                    candidate: candidate.kind,
                    confidence,
                    reason: format!(
                        "{} below min_confidence {}",
                        candidate.basis, self.config.min_confidence
                    ),
                });
                continue;
            }

            let relation = match ClaimRelation::new(
                source.id,
                target.id,
                candidate.kind,
                confidence,
                METHOD_RELATION_HEURISTIC,
                candidate.basis,
            ) {
                Ok(relation) => relation,
                Err(e) => {
                    tracing::warn!(
                        "Skipping {} {} -> {}: {}",
                        candidate.kind,
                        source.id,
                        target.id,
                        e
                    );
                    stats.rejected_relations += 1;
                    continue;
                }
            };

            stats.record_emitted(candidate.kind);
            relations.push(
                relation
                    .with_evidence(EvidencePointer::from_claim(source))
                    .with_evidence(EvidencePointer::from_claim(target)),
            );
        }
    }

    /// First matching heuristic for a pair, `i` being the lower claim id
    fn classify(&self, profiles: &[Profile<'_>], i: usize, j: usize) -> Option<Candidate> {
        let (a, b) = (&profiles[i], &profiles[j]);
        let oriented = |a_is_source: bool| if a_is_source { (i, j) } else { (j, i) };

        if a.negated != b.negated && self.same_statement(a, b) {
            return Some(Candidate {
                kind: RelationKind::Contradicts,
                source: i,
                target: j,
                strength: self.config.contradiction_strength,
                basis: "polarity_conflict",
            });
        }

        if !self.same_property(a, b) {
            return None;
        }

        if a.conditional != b.conditional {
            let (source, target) = oriented(a.conditional);
            return Some(Candidate {
                kind: RelationKind::Qualifies,
                source,
                target,
                strength: self.config.qualification_strength,
                basis: "conditional_marker",
            });
        }

        if a.negated != b.negated {
            return None;
        }

        let refinement = if a.specific != b.specific {
            Some((a.specific, "specificity_marker"))
        } else {
            match (&a.triple, &b.triple) {
                (Some((_, _, oa)), Some((_, _, ob))) if extends(oa, ob) => {
                    Some((true, "object_extension"))
                }
                (Some((_, _, oa)), Some((_, _, ob))) if extends(ob, oa) => {
                    Some((false, "object_extension"))
                }
                _ => None,
            }
        };

        refinement.map(|(a_is_source, basis)| {
            let (source, target) = oriented(a_is_source);
            Candidate {
                kind: RelationKind::Refines,
                source,
                target,
                strength: self.config.refinement_strength,
                basis,
            }
        })
    }

    /// Same subject, predicate and object, or enough shared content
    fn same_statement(&self, a: &Profile<'_>, b: &Profile<'_>) -> bool {
        match (&a.triple, &b.triple) {
            (Some(ta), Some(tb)) => ta == tb,
            _ => self.lexical_match(a, b),
        }
    }

    /// Same subject and predicate, or enough shared content
    fn same_property(&self, a: &Profile<'_>, b: &Profile<'_>) -> bool {
        match (&a.triple, &b.triple) {
            (Some((sa, pa, _)), Some((sb, pb, _))) => sa == sb && pa == pb,
            _ => self.lexical_match(a, b),
        }
    }

    fn lexical_match(&self, a: &Profile<'_>, b: &Profile<'_>) -> bool {
        jaccard(&a.tokens, &b.tokens) >= self.config.min_property_overlap
    }
}

impl Default for RelationDetector {
    fn default() -> Self {
        Self::with_defaults()
    }
}
