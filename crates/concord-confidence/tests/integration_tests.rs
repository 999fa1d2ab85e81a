//! Integration tests for concord-confidence
//!
//! These tests verify the rule-table truth table, contract independence and
//! configuration loading.

use concord_confidence::{
    evaluate, ConfidenceConfig, ConfidenceEngine, ContractState, DomainSignals, EpistemicState,
    KgSignals, RuleTag,
};
use proptest::prelude::*;

fn in_scope() -> DomainSignals {
    DomainSignals::builder()
        .in_scope(["erp", "security"])
        .matched(["Security"])
        .build()
        .unwrap()
}

fn healthy() -> concord_confidence::KgSignalsBuilder {
    KgSignals::builder()
        .typed_edges(8)
        .avg_confidence(0.85)
        .validated_ratio(0.80)
        .unresolved_conflicts(0)
        .orphan_concepts(0)
        .independent_sources(2)
        .missing_expected_edges(0)
}

#[test]
fn test_no_typed_edges_is_incomplete() {
    let kg = KgSignals::builder().typed_edges(0).build().unwrap();
    let result = evaluate(&kg, &in_scope());
    assert_eq!(result.state, EpistemicState::Incomplete);
    assert_eq!(result.tags[0], RuleTag::NoTypedEdges);
}

#[test]
fn test_conflict_dominates_perfect_metrics() {
    let kg = KgSignals::builder()
        .typed_edges(5)
        .unresolved_conflicts(1)
        .avg_confidence(0.95)
        .validated_ratio(1.0)
        .independent_sources(5)
        .build()
        .unwrap();
    let result = evaluate(&kg, &in_scope());
    assert_eq!(result.state, EpistemicState::Debate);
    assert_eq!(result.badge, "Debated");
}

#[test]
fn test_conflict_without_edges_is_incomplete() {
    let kg = KgSignals::builder()
        .unresolved_conflicts(1)
        .avg_confidence(0.95)
        .validated_ratio(1.0)
        .independent_sources(5)
        .build()
        .unwrap();
    let result = evaluate(&kg, &in_scope());
    assert_eq!(result.state, EpistemicState::Incomplete);
    assert_eq!(result.tags, vec![RuleTag::NoTypedEdges, RuleTag::ContractCovered]);
    assert!(!result.has_tag(RuleTag::UnresolvedConflicts));
}

#[test]
fn test_healthy_neighborhood_is_established() {
    let result = evaluate(&healthy().build().unwrap(), &in_scope());
    assert_eq!(result.state, EpistemicState::Established);
    assert_eq!(result.contract, ContractState::Covered);
    assert_eq!(result.tags, vec![RuleTag::Established, RuleTag::ContractCovered]);
    assert!(result.warnings.is_empty());
    assert!(result.blockers.is_empty());
}

#[test]
fn test_single_source_is_partial() {
    let kg = healthy().independent_sources(1).build().unwrap();
    let result = evaluate(&kg, &in_scope());
    assert_eq!(result.state, EpistemicState::Partial);
    assert!(result.has_tag(RuleTag::SingleSource));
    assert_eq!(result.warnings, vec!["Supported by a single source".to_string()]);
    assert_eq!(result.badge, "Partially supported");
}

#[test]
fn test_orphans_and_gaps_are_incomplete() {
    let orphaned = evaluate(&healthy().orphan_concepts(1).build().unwrap(), &in_scope());
    assert_eq!(orphaned.state, EpistemicState::Incomplete);
    assert!(orphaned.has_tag(RuleTag::OrphanConcepts));

    let gaps = evaluate(&healthy().missing_expected_edges(2).build().unwrap(), &in_scope());
    assert_eq!(gaps.state, EpistemicState::Incomplete);
    assert!(gaps.has_tag(RuleTag::MissingExpectedEdges));
}

#[test]
fn test_out_of_scope_keeps_state() {
    let domain = DomainSignals::builder()
        .in_scope(["erp"])
        .matched(["astronomy"])
        .build()
        .unwrap();
    let result = evaluate(&healthy().build().unwrap(), &domain);
    assert_eq!(result.state, EpistemicState::Established);
    assert_eq!(result.contract, ContractState::OutOfScope);
    assert!(result.has_tag(RuleTag::ContractOutOfScope));
    assert!(result.is_blocked());
}

#[test]
fn test_config_from_toml() {
    let config: ConfidenceConfig = toml::from_str(
        r#"
        min_avg_confidence = 0.9
        "#,
    )
    .unwrap();
    assert_eq!(config.min_avg_confidence, 0.9);
    assert_eq!(config.min_independent_sources, 2);

    let engine = ConfidenceEngine::new(config).unwrap();
    let result = engine.evaluate(&healthy().build().unwrap(), &in_scope());
    assert_eq!(result.state, EpistemicState::Partial);
    assert_eq!(result.tags[0], RuleTag::WeakConfidence);
}

#[test]
fn test_result_serializes_with_wire_names() {
    let result = evaluate(&healthy().build().unwrap(), &in_scope());
    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"ESTABLISHED\""));
    assert!(json.contains("\"CONTRACT_COVERED\""));
}

proptest! {
    #[test]
    fn test_conflicts_always_debate_when_edges_exist(
        edges in 1usize..50,
        conflicts in 1usize..10,
        orphans in 0usize..10,
        missing in 0usize..10,
        avg in 0.0f64..=1.0,
        validated in 0.0f64..=1.0,
        sources in 0usize..10,
    ) {
        let kg = KgSignals::builder()
            .typed_edges(edges)
            .unresolved_conflicts(conflicts)
            .orphan_concepts(orphans)
            .missing_expected_edges(missing)
            .avg_confidence(avg)
            .validated_ratio(validated)
            .independent_sources(sources)
            .build()
            .unwrap();
        let result = evaluate(&kg, &in_scope());
        prop_assert_eq!(result.state, EpistemicState::Debate);
        prop_assert_eq!(result.tags.len(), 2);
    }

    #[test]
    fn test_partial_always_explains_itself(
        avg in 0.0f64..=1.0,
        validated in 0.0f64..=1.0,
        sources in 0usize..5,
    ) {
        let kg = healthy()
            .avg_confidence(avg)
            .validated_ratio(validated)
            .independent_sources(sources)
            .build()
            .unwrap();
        let result = evaluate(&kg, &in_scope());
        if result.state == EpistemicState::Partial {
            prop_assert!(result.tags.len() >= 2);
            prop_assert!(!result.warnings.is_empty());
        } else {
            prop_assert_eq!(result.state, EpistemicState::Established);
        }
    }
}
