//! Comparison outcomes and the closed reason-code catalog

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Verdict of comparing an assertion against a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    /// The claim backs the assertion
    Supports,
    /// The claim rules the assertion out
    Contradicts,
    /// The claim backs part of the assertion
    Partial,
    /// Inconclusive until a scope qualifier is resolved
    NeedsScope,
    /// Not comparable; the engine abstains
    Unknown,
}

impl Outcome {
    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Supports => "SUPPORTS",
            Outcome::Contradicts => "CONTRADICTS",
            Outcome::Partial => "PARTIAL",
            Outcome::NeedsScope => "NEEDS_SCOPE",
            Outcome::Unknown => "UNKNOWN",
        }
    }

    /// Whether the outcome is an abstention rather than a verdict
    pub fn is_abstention(&self) -> bool {
        matches!(self, Outcome::NeedsScope | Outcome::Unknown)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Closed catalog of reasons
///
/// Every reason belongs to exactly one [`Outcome`], so an outcome and its
/// reason can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[allow(missing_docs)]
pub enum ReasonCode {
    // SUPPORTS
    ExactMatch,
    EquivalentMatch,
    ValueInInterval,
    ValueInSet,
    SetsEqual,
    ValueSatisfiesBound,
    IntervalWithinBound,
    SetWithinBound,
    BooleanMatch,
    VersionMatch,
    VersionCompatible,

    // CONTRADICTS
    ValueMismatch,
    ValueOutsideInterval,
    ValueNotInSet,
    IntervalsDisjoint,
    SetsDisjoint,
    SetOutsideInterval,
    ValueViolatesBound,
    IntervalViolatesBound,
    SetViolatesBound,
    BoundsDisjoint,
    BooleanMismatch,
    VersionMismatch,
    VersionBelowMinimum,

    // PARTIAL
    ValueInSetIncomplete,
    IntervalsOverlap,
    SetSubset,
    SetsOverlap,
    SetWithinInterval,
    SetIntervalOverlap,
    IntervalCrossesBound,
    SetCrossesBound,
    BoundsNested,
    BoundsOverlap,

    // NEEDS_SCOPE
    ScopeMissing,

    // UNKNOWN
    PropertyMismatch,
    ScopeMismatch,
    UnitMismatch,
    TypeMismatch,
    TextNotComparable,
}

impl ReasonCode {
    /// The outcome this reason implies
    pub fn outcome(&self) -> Outcome {
        use ReasonCode::*;
        match self {
            ExactMatch | EquivalentMatch | ValueInInterval | ValueInSet | SetsEqual
            | ValueSatisfiesBound | IntervalWithinBound | SetWithinBound | BooleanMatch
            | VersionMatch | VersionCompatible => Outcome::Supports,

            ValueMismatch | ValueOutsideInterval | ValueNotInSet | IntervalsDisjoint
            | SetsDisjoint | SetOutsideInterval | ValueViolatesBound | IntervalViolatesBound
            | SetViolatesBound | BoundsDisjoint | BooleanMismatch | VersionMismatch
            | VersionBelowMinimum => Outcome::Contradicts,

            ValueInSetIncomplete | IntervalsOverlap | SetSubset | SetsOverlap
            | SetWithinInterval | SetIntervalOverlap | IntervalCrossesBound | SetCrossesBound
            | BoundsNested | BoundsOverlap => Outcome::Partial,

            ScopeMissing => Outcome::NeedsScope,

            PropertyMismatch | ScopeMismatch | UnitMismatch | TypeMismatch
            | TextNotComparable => Outcome::Unknown,
        }
    }

    /// Confidence of the verdict before authority weighting
    pub fn base_confidence(&self) -> f64 {
        use ReasonCode::*;
        match self {
            ExactMatch | ValueInSet | SetsEqual | BooleanMatch | BooleanMismatch
            | VersionMatch => 1.0,
            EquivalentMatch | ValueMismatch | ValueOutsideInterval | ValueNotInSet
            | IntervalsDisjoint | SetsDisjoint | ValueViolatesBound => 0.95,
            ValueInInterval | ValueSatisfiesBound | IntervalWithinBound | SetWithinBound
            | SetOutsideInterval | IntervalViolatesBound | SetViolatesBound | BoundsDisjoint
            | VersionMismatch | VersionBelowMinimum => 0.9,
            VersionCompatible => 0.85,
            SetWithinInterval => 0.7,
            ValueInSetIncomplete | SetSubset | BoundsNested => 0.6,
            IntervalsOverlap | IntervalCrossesBound | SetCrossesBound => 0.5,
            SetsOverlap | SetIntervalOverlap | BoundsOverlap => 0.4,
            ScopeMissing | PropertyMismatch | ScopeMismatch | UnitMismatch | TypeMismatch
            | TextNotComparable => 0.0,
        }
    }

    /// Wire name, e.g. `VALUE_OUTSIDE_INTERVAL`
    pub fn as_str(&self) -> &'static str {
        use ReasonCode::*;
        match self {
            ExactMatch => "EXACT_MATCH",
            EquivalentMatch => "EQUIVALENT_MATCH",
            ValueInInterval => "VALUE_IN_INTERVAL",
            ValueInSet => "VALUE_IN_SET",
            SetsEqual => "SETS_EQUAL",
            ValueSatisfiesBound => "VALUE_SATISFIES_BOUND",
            IntervalWithinBound => "INTERVAL_WITHIN_BOUND",
            SetWithinBound => "SET_WITHIN_BOUND",
            BooleanMatch => "BOOLEAN_MATCH",
            VersionMatch => "VERSION_MATCH",
            VersionCompatible => "VERSION_COMPATIBLE",
            ValueMismatch => "VALUE_MISMATCH",
            ValueOutsideInterval => "VALUE_OUTSIDE_INTERVAL",
            ValueNotInSet => "VALUE_NOT_IN_SET",
            IntervalsDisjoint => "INTERVALS_DISJOINT",
            SetsDisjoint => "SETS_DISJOINT",
            SetOutsideInterval => "SET_OUTSIDE_INTERVAL",
            ValueViolatesBound => "VALUE_VIOLATES_BOUND",
            IntervalViolatesBound => "INTERVAL_VIOLATES_BOUND",
            SetViolatesBound => "SET_VIOLATES_BOUND",
            BoundsDisjoint => "BOUNDS_DISJOINT",
            BooleanMismatch => "BOOLEAN_MISMATCH",
            VersionMismatch => "VERSION_MISMATCH",
            VersionBelowMinimum => "VERSION_BELOW_MINIMUM",
            ValueInSetIncomplete => "VALUE_IN_SET_INCOMPLETE",
            IntervalsOverlap => "INTERVALS_OVERLAP",
            SetSubset => "SET_SUBSET",
            SetsOverlap => "SETS_OVERLAP",
            SetWithinInterval => "SET_WITHIN_INTERVAL",
            SetIntervalOverlap => "SET_INTERVAL_OVERLAP",
            IntervalCrossesBound => "INTERVAL_CROSSES_BOUND",
            SetCrossesBound => "SET_CROSSES_BOUND",
            BoundsNested => "BOUNDS_NESTED",
            BoundsOverlap => "BOUNDS_OVERLAP",
            ScopeMissing => "SCOPE_MISSING",
            PropertyMismatch => "PROPERTY_MISMATCH",
            ScopeMismatch => "SCOPE_MISMATCH",
            UnitMismatch => "UNIT_MISMATCH",
            TypeMismatch => "TYPE_MISMATCH",
            TextNotComparable => "TEXT_NOT_COMPARABLE",
        }
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Audit details attached to an outcome, ordered for stable serialization
pub type Details = BTreeMap<String, serde_json::Value>;

/// Result of comparing two claim forms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonOutcome {
    /// Verdict
    pub outcome: Outcome,

    /// Reason from the closed catalog
    pub reason: ReasonCode,

    /// Confidence [0.0, 1.0]
    pub confidence: f64,

    /// Offending bounds, values, qualifiers
    pub details: Details,
}

impl ComparisonOutcome {
    /// Build an outcome from a reason; the verdict follows from the reason
    pub fn from_reason(reason: ReasonCode, details: Details) -> Self {
        Self {
            outcome: reason.outcome(),
            reason,
            confidence: reason.base_confidence(),
            details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abstentions_carry_zero_confidence() {
        for reason in [
            ReasonCode::ScopeMissing,
            ReasonCode::PropertyMismatch,
            ReasonCode::UnitMismatch,
            ReasonCode::TextNotComparable,
        ] {
            assert!(reason.outcome().is_abstention());
            assert_eq!(reason.base_confidence(), 0.0);
        }
    }

    #[test]
    fn test_reason_wire_names_match_serde() {
        let json = serde_json::to_string(&ReasonCode::ValueInSetIncomplete).unwrap();
        assert_eq!(json, format!("\"{}\"", ReasonCode::ValueInSetIncomplete.as_str()));
    }

    #[test]
    fn test_from_reason_derives_outcome() {
        let outcome = ComparisonOutcome::from_reason(ReasonCode::ScopeMissing, Details::new());
        assert_eq!(outcome.outcome, Outcome::NeedsScope);
        assert_eq!(outcome.confidence, 0.0);
    }
}
