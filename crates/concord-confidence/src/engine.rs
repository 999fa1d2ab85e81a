//! Rule-table evaluation

use crate::rules::{partial_reasons, ContractState, EpistemicState, RuleTag, RULES};
use crate::{ConfidenceConfig, ConfidenceError, DomainSignals, KgSignals};
use serde::{Deserialize, Serialize};

/// Outcome of evaluating one neighborhood
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfidenceResult {
    /// Trust classification
    pub state: EpistemicState,

    /// Domain coverage, independent of trust
    pub contract: ContractState,

    /// Tags that fired, in evaluation order
    pub tags: Vec<RuleTag>,

    /// Short display label for the state
    pub badge: String,

    /// Consumer-facing warnings
    pub warnings: Vec<String>,

    /// Consumer-facing blockers
    pub blockers: Vec<String>,
}

impl ConfidenceResult {
    /// Whether any tag blocks a confident answer
    pub fn is_blocked(&self) -> bool {
        !self.blockers.is_empty()
    }

    /// Whether a tag fired
    pub fn has_tag(&self, tag: RuleTag) -> bool {
        self.tags.contains(&tag)
    }
}

/// Classifies pre-aggregated graph signals
#[derive(Debug, Clone, Default)]
pub struct ConfidenceEngine {
    config: ConfidenceConfig,
}

impl ConfidenceEngine {
    /// Create an engine with the given thresholds
    pub fn new(config: ConfidenceConfig) -> Result<Self, ConfidenceError> {
        config.validate().map_err(ConfidenceError::Config)?;
        Ok(Self { config })
    }

    /// Create an engine with the default thresholds
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Active thresholds
    pub fn config(&self) -> &ConfidenceConfig {
        &self.config
    }

    /// Evaluate the rule table, first match wins
    ///
    /// The contract state is derived from `domain` alone and never changes
    /// the epistemic state.
    pub fn evaluate(&self, kg: &KgSignals, domain: &DomainSignals) -> ConfidenceResult {
        let mut tags = Vec::new();
        let state = match RULES.iter().find(|rule| rule.applies(kg, &self.config)) {
            Some(rule) => {
                tags.push(rule.tag());
                rule.state()
            }
            None => {
                tags.extend(partial_reasons(kg, &self.config));
                EpistemicState::Partial
            }
        };

        let contract = if domain.is_covered() {
            tags.push(RuleTag::ContractCovered);
            ContractState::Covered
        } else {
            tags.push(RuleTag::ContractOutOfScope);
            ContractState::OutOfScope
        };

        tracing::debug!(
            "Confidence evaluated: {} / {:?} via {:?}",
            state,
            contract,
            tags
        );

        ConfidenceResult {
            state,
            contract,
            badge: state.badge().to_string(),
            warnings: tags.iter().filter_map(RuleTag::warning).map(str::to_string).collect(),
            blockers: tags.iter().filter_map(RuleTag::blocker).map(str::to_string).collect(),
            tags,
        }
    }
}

/// Evaluate with the default thresholds
pub fn evaluate(kg: &KgSignals, domain: &DomainSignals) -> ConfidenceResult {
    ConfidenceEngine::with_defaults().evaluate(kg, domain)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn covered() -> DomainSignals {
        DomainSignals::builder().in_scope(["erp"]).matched(["erp"]).build().unwrap()
    }

    #[test]
    fn test_no_edges_blocks() {
        let kg = KgSignals::builder().build().unwrap();
        let result = evaluate(&kg, &covered());
        assert_eq!(result.state, EpistemicState::Incomplete);
        assert_eq!(result.tags, vec![RuleTag::NoTypedEdges, RuleTag::ContractCovered]);
        assert!(result.is_blocked());
        assert_eq!(result.badge, "Incomplete");
    }

    #[test]
    fn test_conflict_beats_orphans() {
        let kg = KgSignals::builder()
            .typed_edges(4)
            .unresolved_conflicts(2)
            .orphan_concepts(3)
            .build()
            .unwrap();
        let result = evaluate(&kg, &covered());
        assert_eq!(result.state, EpistemicState::Debate);
        assert!(!result.has_tag(RuleTag::OrphanConcepts));
        assert_eq!(result.warnings, vec!["Sources disagree on this topic".to_string()]);
    }

    #[test]
    fn test_scope_never_changes_state() {
        let kg = KgSignals::builder()
            .typed_edges(8)
            .avg_confidence(0.9)
            .validated_ratio(0.9)
            .independent_sources(3)
            .build()
            .unwrap();
        let out = DomainSignals::builder().in_scope(["erp"]).matched(["cooking"]).build().unwrap();

        let inside = evaluate(&kg, &covered());
        let outside = evaluate(&kg, &out);
        assert_eq!(inside.state, outside.state);
        assert_eq!(outside.contract, ContractState::OutOfScope);
        assert!(outside.is_blocked());
        assert!(!inside.is_blocked());
    }

    #[test]
    fn test_custom_thresholds() {
        let kg = KgSignals::builder()
            .typed_edges(8)
            .avg_confidence(0.85)
            .validated_ratio(0.80)
            .independent_sources(2)
            .build()
            .unwrap();
        let strict = ConfidenceEngine::new(ConfidenceConfig::strict()).unwrap();
        let result = strict.evaluate(&kg, &covered());
        assert_eq!(result.state, EpistemicState::Partial);
        assert!(result.has_tag(RuleTag::WeakConfidence));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = ConfidenceConfig {
            min_avg_confidence: 2.0,
            ..ConfidenceConfig::default()
        };
        assert!(matches!(ConfidenceEngine::new(config), Err(ConfidenceError::Config(_))));
    }
}
