//! Integration tests for concord-chain
//!
//! These tests verify end-to-end joins, the per-key cap and idempotence.

use concord_chain::{ChainConfig, ChainDetector};
use concord_domain::{Claim, ClaimId, Modality, RelationKind, StructuredForm};
use proptest::prelude::*;

fn triple(id: u128, s: &str, p: &str, o: &str, confidence: f64) -> Claim {
    Claim::new(
        ClaimId::from_value(id),
        "acme",
        "doc-1",
        format!("{s} {p} {o}"),
        Modality::Factual,
        confidence,
    )
    .unwrap()
    .with_structure(StructuredForm::new(s, p, o))
}

#[test]
fn test_hana_chain_end_to_end() {
    let a = triple(1, "S/4HANA", "USES", "HANA", 0.9);
    let b = triple(2, "HANA", "REQUIRES", "TLS 1.2", 0.85);

    let report = ChainDetector::with_defaults().detect(&[a, b]).unwrap();

    assert_eq!(report.relations.len(), 1);
    let edge = &report.relations[0];
    assert_eq!(edge.source, ClaimId::from_value(1));
    assert_eq!(edge.target, ClaimId::from_value(2));
    assert_eq!(edge.kind, RelationKind::ChainsTo);
    assert_eq!(edge.basis, "join_key=hana");
    assert_eq!(report.stats.join_keys, 1);
}

#[test]
fn test_hub_key_is_capped() {
    let mut claims = Vec::new();
    for i in 0..20u128 {
        let producer = format!("Producer {i}");
        let consumer = format!("Consumer {i}");
        claims.push(triple(i + 1, &producer, "USES", "Kafka", 0.5 + i as f64 * 0.01));
        claims.push(triple(i + 101, "Kafka", "CONNECTS_TO", &consumer, 0.5 + i as f64 * 0.02));
    }

    let report = ChainDetector::with_defaults().detect(&claims).unwrap();

    assert_eq!(report.relations.len(), 10);
    assert_eq!(report.stats.capped_keys, 1);
    assert_eq!(report.stats.truncated_edges, 400 - 10);
    assert!(report.relations.iter().all(|r| r.source != r.target));

    // Highest-confidence producer (id 20) and consumer (id 120) pair first
    assert!(report
        .relations
        .iter()
        .any(|r| r.source == ClaimId::from_value(20) && r.target == ClaimId::from_value(120)));
}

#[test]
fn test_configured_cap() {
    let mut claims = Vec::new();
    for i in 0..4u128 {
        claims.push(triple(i + 1, &format!("Producer {i}"), "USES", "Kafka", 0.9));
        claims.push(triple(i + 11, "Kafka", "CONNECTS_TO", &format!("Consumer {i}"), 0.9));
    }
    let detector = ChainDetector::new(ChainConfig {
        max_edges_per_key: 3,
        ..ChainConfig::default()
    })
    .unwrap();

    let report = detector.detect(&claims).unwrap();
    assert_eq!(report.relations.len(), 3);
}

#[test]
fn test_rerun_is_identical() {
    let claims = vec![
        triple(1, "S/4HANA", "USES", "HANA", 0.9),
        triple(2, "HANA", "REQUIRES", "TLS 1.2", 0.85),
        triple(3, "TLS 1.2", "PROVIDES", "Encryption", 0.8),
        triple(4, "Fiori", "CONNECTS_TO", "HANA", 0.7),
    ];
    let detector = ChainDetector::with_defaults();
    let first = detector.detect(&claims).unwrap();

    let mut shuffled = claims.clone();
    shuffled.rotate_left(2);
    let second = detector.detect(&shuffled).unwrap();

    assert_eq!(first.relations.len(), 3);
    assert_eq!(
        serde_json::to_string(&first.relations).unwrap(),
        serde_json::to_string(&second.relations).unwrap()
    );
}

proptest! {
    #[test]
    fn test_cap_and_no_self_loops(
        producers in 1usize..30,
        consumers in 1usize..30,
        cap in 1usize..15,
    ) {
        let mut claims = Vec::new();
        for i in 0..producers {
            claims.push(triple(i as u128 + 1, &format!("Producer {i}"), "USES", "Kafka", 0.6));
        }
        for i in 0..consumers {
            let consumer = format!("Consumer {i}");
            claims.push(triple(i as u128 + 1001, "Kafka", "CONNECTS_TO", &consumer, 0.7));
        }
        let config = ChainConfig {
            max_edges_per_key: cap,
            ..ChainConfig::default()
        };
        let detector = ChainDetector::new(config).unwrap();
        let report = detector.detect(&claims).unwrap();

        prop_assert!(report.relations.len() <= cap);
        prop_assert_eq!(report.relations.len(), cap.min(producers * consumers));
        prop_assert!(report.relations.iter().all(|r| r.source != r.target));
    }
}
