//! Integration tests for concord-relation
//!
//! These tests verify entity gating, side-map links, abstention and
//! idempotence across reruns.

use concord_domain::{Claim, ClaimId, Modality, RelationKind};
use concord_relation::{RelationConfig, RelationDetector};
use proptest::prelude::*;
use std::collections::HashMap;

fn claim(id: u128, text: &str, confidence: f64, entities: &[&str]) -> Claim {
    Claim::new(ClaimId::from_value(id), "acme", "doc-1", text, Modality::Factual, confidence)
        .unwrap()
        .with_entities(entities.iter().copied())
}

fn batch() -> Vec<Claim> {
    vec![
        claim(1, "Backups are encrypted at rest", 0.9, &["backup"]),
        claim(2, "Backups are not encrypted at rest", 0.85, &["backup"]),
        claim(3, "If the vault is enabled, backups are encrypted at rest", 0.9, &["backup"]),
        claim(4, "The portal supports single sign-on", 0.9, &["portal"]),
        claim(5, "The portal specifically supports single sign-on via SAML", 0.8, &["portal"]),
    ]
}

#[test]
fn test_mixed_batch() {
    let report = RelationDetector::with_defaults().detect(&batch(), None).unwrap();

    let kinds: Vec<(u128, u128, RelationKind)> = report
        .relations
        .iter()
        .map(|r| (r.source.value(), r.target.value(), r.kind))
        .collect();

    assert!(kinds.contains(&(1, 2, RelationKind::Contradicts)));
    assert!(kinds.contains(&(2, 3, RelationKind::Contradicts)));
    assert!(kinds.contains(&(3, 1, RelationKind::Qualifies)));
    assert!(kinds.contains(&(5, 4, RelationKind::Refines)));
    assert!(report.relations.iter().all(|r| r.validate_for_persistence().is_ok()));
    assert!(report.abstentions.is_empty());
}

#[test]
fn test_side_map_overrides_claim_links() {
    let claims = vec![
        claim(1, "Backups are encrypted at rest", 0.9, &["backup"]),
        claim(2, "Backups are not encrypted at rest", 0.9, &["archive"]),
    ];

    let unlinked = RelationDetector::with_defaults().detect(&claims, None).unwrap();
    assert!(unlinked.relations.is_empty());

    let mut links = HashMap::new();
    links.insert(ClaimId::from_value(2), vec!["Backup".to_string()]);
    let linked = RelationDetector::with_defaults().detect(&claims, Some(&links)).unwrap();
    assert_eq!(linked.relations.len(), 1);
    assert_eq!(linked.relations[0].kind, RelationKind::Contradicts);
}

#[test]
fn test_strict_config_abstains_more() {
    let strict = RelationDetector::new(RelationConfig::strict()).unwrap();
    let report = strict.detect(&batch(), None).unwrap();
    let default = RelationDetector::with_defaults().detect(&batch(), None).unwrap();

    assert!(report.relations.len() <= default.relations.len());
    assert!(report.stats.abstentions >= default.stats.abstentions);
}

#[test]
fn test_rerun_is_identical() {
    let detector = RelationDetector::with_defaults();
    let first = detector.detect(&batch(), None).unwrap();

    let mut reversed = batch();
    reversed.reverse();
    let second = detector.detect(&reversed, None).unwrap();

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_summary() {
    let report = RelationDetector::with_defaults().detect(&batch(), None).unwrap();
    let summary = report.stats.summary();
    assert!(summary.contains("Pairs considered: 4"));
    assert!(summary.contains("CONTRADICTS: 2"));
}

proptest! {
    #[test]
    fn test_emitted_relations_clear_threshold(
        confidences in proptest::collection::vec(0.0f64..=1.0, 4),
        min_confidence in 0.0f64..=1.0,
    ) {
        let texts = [
            "Backups are encrypted at rest",
            "Backups are not encrypted at rest",
            "When enabled, backups are encrypted at rest",
            "Backups are specifically encrypted at rest",
        ];
        let claims: Vec<Claim> = texts
            .iter()
            .zip(&confidences)
            .enumerate()
            .map(|(i, (text, c))| claim(i as u128 + 1, text, *c, &["backup"]))
            .collect();
        let config = RelationConfig {
            min_confidence,
            ..RelationConfig::default()
        };
        let detector = RelationDetector::new(config).unwrap();
        let report = detector.detect(&claims, None).unwrap();

        prop_assert!(report.relations.iter().all(|r| r.confidence >= min_confidence));
        prop_assert!(report.abstentions.iter().all(|a| a.confidence < min_confidence));
        prop_assert!(report.relations.iter().all(|r| r.source != r.target));
        prop_assert_eq!(
            report.stats.total_emitted() + report.stats.abstentions + report.stats.no_pattern,
            report.stats.pairs_considered
        );
    }
}
