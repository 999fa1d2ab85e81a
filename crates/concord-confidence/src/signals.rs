//! Pre-aggregated inputs to the confidence engine
//!
//! Both signal types are only obtainable through their builders, so an
//! evaluation never sees a ratio outside [0.0, 1.0] or a non-finite number.

use crate::ConfidenceError;
use serde::Serialize;
use std::collections::BTreeSet;

/// Aggregates describing a knowledge-graph neighborhood
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct KgSignals {
    typed_edges: usize,
    avg_confidence: f64,
    validated_ratio: f64,
    unresolved_conflicts: usize,
    orphan_concepts: usize,
    independent_sources: usize,
    missing_expected_edges: usize,
}

impl KgSignals {
    /// Start building signals; every count defaults to zero
    pub fn builder() -> KgSignalsBuilder {
        KgSignalsBuilder::default()
    }

    /// Typed relation edges in the neighborhood
    pub fn typed_edges(&self) -> usize {
        self.typed_edges
    }

    /// Average edge confidence
    pub fn avg_confidence(&self) -> f64 {
        self.avg_confidence
    }

    /// Share of edges that have been validated
    pub fn validated_ratio(&self) -> f64 {
        self.validated_ratio
    }

    /// Conflicts nobody has resolved yet
    pub fn unresolved_conflicts(&self) -> usize {
        self.unresolved_conflicts
    }

    /// Concepts with no connecting edge
    pub fn orphan_concepts(&self) -> usize {
        self.orphan_concepts
    }

    /// Independent corroborating sources
    pub fn independent_sources(&self) -> usize {
        self.independent_sources
    }

    /// Edges the domain model expects but the graph lacks
    pub fn missing_expected_edges(&self) -> usize {
        self.missing_expected_edges
    }
}

/// Builder for [`KgSignals`]
#[derive(Debug, Clone, Default)]
pub struct KgSignalsBuilder {
    signals: KgSignals,
}

impl KgSignalsBuilder {
    /// Set the typed edge count
    pub fn typed_edges(mut self, count: usize) -> Self {
        self.signals.typed_edges = count;
        self
    }

    /// Set the average edge confidence
    pub fn avg_confidence(mut self, value: f64) -> Self {
        self.signals.avg_confidence = value;
        self
    }

    /// Set the validated ratio
    pub fn validated_ratio(mut self, value: f64) -> Self {
        self.signals.validated_ratio = value;
        self
    }

    /// Set the unresolved conflict count
    pub fn unresolved_conflicts(mut self, count: usize) -> Self {
        self.signals.unresolved_conflicts = count;
        self
    }

    /// Set the orphan concept count
    pub fn orphan_concepts(mut self, count: usize) -> Self {
        self.signals.orphan_concepts = count;
        self
    }

    /// Set the independent source count
    pub fn independent_sources(mut self, count: usize) -> Self {
        self.signals.independent_sources = count;
        self
    }

    /// Set the missing expected edge count
    pub fn missing_expected_edges(mut self, count: usize) -> Self {
        self.signals.missing_expected_edges = count;
        self
    }

    /// Validate and build
    ///
    /// # Errors
    /// Fails if either ratio is non-finite or outside [0.0, 1.0].
    pub fn build(self) -> Result<KgSignals, ConfidenceError> {
        unit_ratio("avg_confidence", self.signals.avg_confidence)?;
        unit_ratio("validated_ratio", self.signals.validated_ratio)?;
        Ok(self.signals)
    }
}

fn unit_ratio(field: &'static str, value: f64) -> Result<(), ConfidenceError> {
    if !value.is_finite() {
        return Err(ConfidenceError::InvalidSignal {
            field,
            reason: format!("{} is not finite", value),
        });
    }
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfidenceError::InvalidSignal {
            field,
            reason: format!("{} is outside [0.0, 1.0]", value),
        });
    }
    Ok(())
}

/// Declared domain coverage against the domains a query matched
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DomainSignals {
    in_scope: BTreeSet<String>,
    matched: BTreeSet<String>,
}

impl DomainSignals {
    /// Start building domain signals
    pub fn builder() -> DomainSignalsBuilder {
        DomainSignalsBuilder::default()
    }

    /// Declared in-scope domains, lowercased
    pub fn in_scope(&self) -> &BTreeSet<String> {
        &self.in_scope
    }

    /// Domains the query matched, lowercased
    pub fn matched(&self) -> &BTreeSet<String> {
        &self.matched
    }

    /// Whether the query falls inside declared coverage
    ///
    /// With no declared scope, any match counts.
    pub fn is_covered(&self) -> bool {
        if self.in_scope.is_empty() {
            return !self.matched.is_empty();
        }
        self.matched.iter().any(|d| self.in_scope.contains(d))
    }
}

/// Builder for [`DomainSignals`]
#[derive(Debug, Clone, Default)]
pub struct DomainSignalsBuilder {
    in_scope: Vec<String>,
    matched: Vec<String>,
}

impl DomainSignalsBuilder {
    /// Add declared in-scope domains
    pub fn in_scope<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.in_scope.extend(domains.into_iter().map(Into::into));
        self
    }

    /// Add matched domains
    pub fn matched<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.matched.extend(domains.into_iter().map(Into::into));
        self
    }

    /// Validate and build
    ///
    /// # Errors
    /// Fails on a blank domain name.
    pub fn build(self) -> Result<DomainSignals, ConfidenceError> {
        Ok(DomainSignals {
            in_scope: normalize_domains("in_scope", self.in_scope)?,
            matched: normalize_domains("matched", self.matched)?,
        })
    }
}

fn normalize_domains(
    field: &'static str,
    domains: Vec<String>,
) -> Result<BTreeSet<String>, ConfidenceError> {
    domains
        .into_iter()
        .map(|d| {
            let d = d.trim().to_lowercase();
            if d.is_empty() {
                Err(ConfidenceError::InvalidSignal {
                    field,
                    reason: "blank domain name".to_string(),
                })
            } else {
                Ok(d)
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults_to_zero() {
        let kg = KgSignals::builder().build().unwrap();
        assert_eq!(kg.typed_edges(), 0);
        assert_eq!(kg.avg_confidence(), 0.0);
        assert_eq!(kg.missing_expected_edges(), 0);
    }

    #[test]
    fn test_ratio_out_of_range_rejected() {
        let err = KgSignals::builder().avg_confidence(1.5).build().unwrap_err();
        assert!(matches!(err, ConfidenceError::InvalidSignal { field: "avg_confidence", .. }));

        let err = KgSignals::builder().validated_ratio(f64::NAN).build().unwrap_err();
        assert!(matches!(err, ConfidenceError::InvalidSignal { field: "validated_ratio", .. }));
    }

    #[test]
    fn test_coverage_case_insensitive() {
        let domain = DomainSignals::builder()
            .in_scope(["ERP", "Security"])
            .matched(["security "])
            .build()
            .unwrap();
        assert!(domain.is_covered());
    }

    #[test]
    fn test_coverage_without_declared_scope() {
        let none = DomainSignals::builder().build().unwrap();
        assert!(!none.is_covered());

        let some = DomainSignals::builder().matched(["hr"]).build().unwrap();
        assert!(some.is_covered());
    }

    #[test]
    fn test_unmatched_scope_not_covered() {
        let domain = DomainSignals::builder()
            .in_scope(["erp"])
            .matched(["gardening"])
            .build()
            .unwrap();
        assert!(!domain.is_covered());
    }

    #[test]
    fn test_blank_domain_rejected() {
        let err = DomainSignals::builder().matched(["  "]).build().unwrap_err();
        assert!(matches!(err, ConfidenceError::InvalidSignal { field: "matched", .. }));
    }
}
