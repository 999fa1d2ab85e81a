//! Pairwise comparison of claim forms
//!
//! Gates run in a fixed order before any value is inspected:
//!
//! 1. property identity (`PROPERTY_MISMATCH`)
//! 2. scope qualifiers (`SCOPE_MISSING`, `SCOPE_MISMATCH`)
//! 3. unit compatibility (`UNIT_MISMATCH`)
//!
//! Value dispatch is an exhaustive match over both variants. There is no
//! fallback arm: a new [`Value`] shape does not compile until every cell
//! here has been decided.

use crate::error::CompareError;
use crate::outcome::{ComparisonOutcome, Details, Outcome, ReasonCode};
use crate::tolerance::{approx_eq, in_interval, satisfies, slack};
use concord_domain::{
    Bound, ClaimForm, Interval, Quantity, TruthRegime, Unit, Value, ValueSet, Version,
    VersionConstraint,
};
use serde_json::json;
use std::cmp::Ordering;

/// Penalty when a descriptive claim is the only support for a contractual assertion
pub const REGIME_DOWNGRADE: f64 = 0.8;

/// Compare an assertion against a claim
///
/// Pure and deterministic. A negative or non-finite tolerance is treated as
/// zero; use [`Comparator::new`] to reject it instead.
///
/// # Examples
///
/// ```
/// use concord_compare::{compare, Outcome, ReasonCode};
/// use concord_domain::{ClaimForm, Value};
///
/// let assertion = Value::scalar(99.5, Some("%")).unwrap();
/// let assertion = ClaimForm::new("SLA", "Availability", assertion).unwrap();
/// let claim = Value::interval(99.7, 99.9, Some("%")).unwrap();
/// let claim = ClaimForm::new("SLA", "Availability", claim).unwrap();
///
/// let result = compare(&assertion, &claim, 0.0);
/// assert_eq!(result.outcome, Outcome::Contradicts);
/// assert_eq!(result.reason, ReasonCode::ValueOutsideInterval);
/// ```
pub fn compare(assertion: &ClaimForm, claim: &ClaimForm, tolerance: f64) -> ComparisonOutcome {
    let tol = if tolerance.is_finite() && tolerance > 0.0 {
        tolerance
    } else {
        0.0
    };

    let mut details = Details::new();
    details.insert("assertion_type".into(), json!(assertion.value.kind().as_str()));
    details.insert("claim_type".into(), json!(claim.value.kind().as_str()));
    details.insert("tolerance".into(), json!(tol));

    let reason = gate(assertion, claim, &mut details)
        .unwrap_or_else(|| compare_values(&assertion.value, &claim.value, tol, &mut details));

    let mut result = ComparisonOutcome::from_reason(reason, details);
    result.confidence *= claim.authority.weight();
    if result.outcome == Outcome::Supports
        && assertion.truth_regime == TruthRegime::StrictNormative
        && claim.truth_regime == TruthRegime::Descriptive
    {
        result.confidence *= REGIME_DOWNGRADE;
        result.details.insert("regime_downgrade".into(), json!(true));
    }
    result.confidence = result.confidence.clamp(0.0, 1.0);
    result
}

/// Comparator bound to a validated tolerance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparator {
    tolerance: f64,
}

impl Comparator {
    /// Create a comparator
    ///
    /// # Errors
    /// Fails if the tolerance is negative or not finite.
    pub fn new(tolerance: f64) -> Result<Self, CompareError> {
        if !tolerance.is_finite() {
            return Err(CompareError::NonFiniteTolerance(tolerance));
        }
        if tolerance < 0.0 {
            return Err(CompareError::NegativeTolerance(tolerance));
        }
        Ok(Self { tolerance })
    }

    /// Comparator with zero tolerance
    pub fn exact() -> Self {
        Self { tolerance: 0.0 }
    }

    /// Relative tolerance in use
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Compare an assertion against a claim
    pub fn compare(&self, assertion: &ClaimForm, claim: &ClaimForm) -> ComparisonOutcome {
        compare(assertion, claim, self.tolerance)
    }
}

impl Default for Comparator {
    fn default() -> Self {
        Self::exact()
    }
}

fn normalize_scope(value: &str) -> String {
    value.trim().to_lowercase()
}

fn gate(assertion: &ClaimForm, claim: &ClaimForm, details: &mut Details) -> Option<ReasonCode> {
    if let (Some(a), Some(c)) = (assertion.normalized_key(), claim.normalized_key()) {
        if a != c {
            details.insert("assertion_key".into(), json!(a));
            details.insert("claim_key".into(), json!(c));
            return Some(ReasonCode::PropertyMismatch);
        }
    }

    let mut qualifiers: Vec<&String> = assertion.scope.keys().chain(claim.scope.keys()).collect();
    qualifiers.sort();
    qualifiers.dedup();
    for qualifier in qualifiers {
        match (assertion.scope.get(qualifier), claim.scope.get(qualifier)) {
            (Some(_), None) | (None, Some(_)) => {
                let missing_on = if claim.scope.contains_key(qualifier) {
                    "assertion"
                } else {
                    "claim"
                };
                details.insert("qualifier".into(), json!(qualifier));
                details.insert("missing_on".into(), json!(missing_on));
                return Some(ReasonCode::ScopeMissing);
            }
            (Some(a), Some(c)) if normalize_scope(a) != normalize_scope(c) => {
                details.insert("qualifier".into(), json!(qualifier));
                details.insert("assertion_scope".into(), json!(a));
                details.insert("claim_scope".into(), json!(c));
                return Some(ReasonCode::ScopeMismatch);
            }
            _ => {}
        }
    }

    if let (Some(a), Some(c)) = (assertion.value.unit(), claim.value.unit()) {
        if !a.is_compatible(c) {
            details.insert("assertion_unit".into(), json!(a.symbol()));
            details.insert("claim_unit".into(), json!(c.symbol()));
            return Some(ReasonCode::UnitMismatch);
        }
    }

    None
}

fn compare_values(assertion: &Value, claim: &Value, tol: f64, d: &mut Details) -> ReasonCode {
    match (assertion, claim) {
        (Value::Text(_), _) | (_, Value::Text(_)) => ReasonCode::TextNotComparable,

        (Value::Scalar(a), Value::Scalar(c)) => scalar_scalar(a, c, tol, d),
        (Value::Scalar(q), Value::Interval(i)) | (Value::Interval(i), Value::Scalar(q)) => {
            scalar_interval(q, i, tol, d)
        }
        (Value::Scalar(q), Value::Set(s)) | (Value::Set(s), Value::Scalar(q)) => {
            scalar_set(q, s, tol, d)
        }
        (Value::Scalar(q), Value::Inequality(b)) | (Value::Inequality(b), Value::Scalar(q)) => {
            scalar_bound(q, b, tol, d)
        }
        (Value::Interval(a), Value::Interval(c)) => interval_interval(a, c, tol, d),
        (Value::Interval(i), Value::Set(s)) | (Value::Set(s), Value::Interval(i)) => {
            interval_set(i, s, tol, d)
        }
        (Value::Interval(i), Value::Inequality(b)) | (Value::Inequality(b), Value::Interval(i)) => {
            interval_bound(i, b, tol, d)
        }
        (Value::Set(a), Value::Set(c)) => set_set(a, c, tol, d),
        (Value::Set(s), Value::Inequality(b)) | (Value::Inequality(b), Value::Set(s)) => {
            set_bound(s, b, tol, d)
        }
        (Value::Inequality(a), Value::Inequality(c)) => bound_bound(a, c, tol, d),

        (Value::Boolean(a), Value::Boolean(c)) => {
            if a == c {
                ReasonCode::BooleanMatch
            } else {
                ReasonCode::BooleanMismatch
            }
        }
        (Value::Version(a), Value::Version(c)) => version_version(a, c, d),

        (
            Value::Scalar(_) | Value::Interval(_) | Value::Set(_) | Value::Inequality(_),
            Value::Boolean(_) | Value::Version(_),
        )
        | (
            Value::Boolean(_) | Value::Version(_),
            Value::Scalar(_) | Value::Interval(_) | Value::Set(_) | Value::Inequality(_),
        )
        | (Value::Boolean(_), Value::Version(_))
        | (Value::Version(_), Value::Boolean(_)) => ReasonCode::TypeMismatch,
    }
}

fn same_unit(a: Option<&Unit>, b: Option<&Unit>) -> bool {
    a.map(Unit::symbol) == b.map(Unit::symbol)
}

fn scalar_scalar(a: &Quantity, c: &Quantity, tol: f64, d: &mut Details) -> ReasonCode {
    d.insert("assertion_value".into(), json!(a.value()));
    d.insert("claim_value".into(), json!(c.value()));
    if a.value() == c.value() && same_unit(a.unit(), c.unit()) {
        ReasonCode::ExactMatch
    } else if approx_eq(a.base_value(), c.base_value(), tol) {
        ReasonCode::EquivalentMatch
    } else {
        ReasonCode::ValueMismatch
    }
}

fn scalar_interval(q: &Quantity, i: &Interval, tol: f64, d: &mut Details) -> ReasonCode {
    d.insert("value".into(), json!(q.value()));
    d.insert("low".into(), json!(i.low()));
    d.insert("high".into(), json!(i.high()));
    if in_interval(q.base_value(), i.base_bounds(), tol) {
        ReasonCode::ValueInInterval
    } else {
        ReasonCode::ValueOutsideInterval
    }
}

fn scalar_set(q: &Quantity, s: &ValueSet, tol: f64, d: &mut Details) -> ReasonCode {
    let value = q.base_value();
    let missing: Vec<f64> = s
        .values()
        .iter()
        .zip(s.base_values())
        .filter(|(_, base)| !approx_eq(*base, value, tol))
        .map(|(raw, _)| *raw)
        .collect();

    d.insert("value".into(), json!(q.value()));
    d.insert("values".into(), json!(s.values()));
    if missing.len() == s.values().len() {
        ReasonCode::ValueNotInSet
    } else if missing.is_empty() {
        ReasonCode::ValueInSet
    } else {
        d.insert("missing".into(), json!(missing));
        ReasonCode::ValueInSetIncomplete
    }
}

fn scalar_bound(q: &Quantity, b: &Bound, tol: f64, d: &mut Details) -> ReasonCode {
    insert_bound(d, "", b);
    d.insert("value".into(), json!(q.value()));
    if satisfies(q.base_value(), b, tol) {
        ReasonCode::ValueSatisfiesBound
    } else {
        ReasonCode::ValueViolatesBound
    }
}

fn interval_interval(a: &Interval, c: &Interval, tol: f64, d: &mut Details) -> ReasonCode {
    d.insert("assertion_bounds".into(), json!([a.low(), a.high()]));
    d.insert("claim_bounds".into(), json!([c.low(), c.high()]));

    let (al, ah) = a.base_bounds();
    let (cl, ch) = c.base_bounds();
    if a.low() == c.low() && a.high() == c.high() && same_unit(a.unit(), c.unit()) {
        ReasonCode::ExactMatch
    } else if approx_eq(al, cl, tol) && approx_eq(ah, ch, tol) {
        ReasonCode::EquivalentMatch
    } else if al - slack(al, tol) <= ch + slack(ch, tol)
        && cl - slack(cl, tol) <= ah + slack(ah, tol)
    {
        ReasonCode::IntervalsOverlap
    } else {
        ReasonCode::IntervalsDisjoint
    }
}

fn interval_set(i: &Interval, s: &ValueSet, tol: f64, d: &mut Details) -> ReasonCode {
    d.insert("low".into(), json!(i.low()));
    d.insert("high".into(), json!(i.high()));
    d.insert("values".into(), json!(s.values()));

    let bounds = i.base_bounds();
    let outside: Vec<f64> = s
        .values()
        .iter()
        .zip(s.base_values())
        .filter(|(_, base)| !in_interval(*base, bounds, tol))
        .map(|(raw, _)| *raw)
        .collect();

    if outside.is_empty() {
        if let [only] = s.values() {
            if i.low() == i.high() {
                if *only == i.low() && same_unit(i.unit(), s.unit()) {
                    return ReasonCode::ExactMatch;
                }
                return ReasonCode::EquivalentMatch;
            }
        }
        ReasonCode::SetWithinInterval
    } else if outside.len() == s.values().len() {
        ReasonCode::SetOutsideInterval
    } else {
        d.insert("outside".into(), json!(outside));
        ReasonCode::SetIntervalOverlap
    }
}

fn interval_bound(i: &Interval, b: &Bound, tol: f64, d: &mut Details) -> ReasonCode {
    insert_bound(d, "", b);
    d.insert("low".into(), json!(i.low()));
    d.insert("high".into(), json!(i.high()));

    // A half-line is convex: checking both endpoints decides the whole range
    let (low, high) = i.base_bounds();
    match (satisfies(low, b, tol), satisfies(high, b, tol)) {
        (true, true) => ReasonCode::IntervalWithinBound,
        (false, false) => ReasonCode::IntervalViolatesBound,
        _ => ReasonCode::IntervalCrossesBound,
    }
}

fn set_set(a: &ValueSet, c: &ValueSet, tol: f64, d: &mut Details) -> ReasonCode {
    let a_base = a.base_values();
    let c_base = c.base_values();
    let unmatched = |raw: &[f64], base: &[f64], other: &[f64]| -> Vec<f64> {
        raw.iter()
            .zip(base)
            .filter(|(_, x)| !other.iter().any(|y| approx_eq(**x, *y, tol)))
            .map(|(r, _)| *r)
            .collect()
    };
    let only_in_assertion = unmatched(a.values(), &a_base, &c_base);
    let only_in_claim = unmatched(c.values(), &c_base, &a_base);

    let shared = a.values().len() - only_in_assertion.len();
    let reason = match (only_in_assertion.is_empty(), only_in_claim.is_empty()) {
        (true, true) => ReasonCode::SetsEqual,
        (true, false) | (false, true) => ReasonCode::SetSubset,
        (false, false) if shared == 0 => ReasonCode::SetsDisjoint,
        (false, false) => ReasonCode::SetsOverlap,
    };

    d.insert("only_in_assertion".into(), json!(only_in_assertion));
    d.insert("only_in_claim".into(), json!(only_in_claim));
    reason
}

fn set_bound(s: &ValueSet, b: &Bound, tol: f64, d: &mut Details) -> ReasonCode {
    insert_bound(d, "", b);
    d.insert("values".into(), json!(s.values()));

    let violating: Vec<f64> = s
        .values()
        .iter()
        .zip(s.base_values())
        .filter(|(_, base)| !satisfies(*base, b, tol))
        .map(|(raw, _)| *raw)
        .collect();

    if violating.is_empty() {
        ReasonCode::SetWithinBound
    } else if violating.len() == s.values().len() {
        ReasonCode::SetViolatesBound
    } else {
        d.insert("violating".into(), json!(violating));
        ReasonCode::SetCrossesBound
    }
}

fn bound_bound(a: &Bound, c: &Bound, tol: f64, d: &mut Details) -> ReasonCode {
    insert_bound(d, "assertion_", a);
    insert_bound(d, "claim_", c);

    let (ad, cd) = (a.direction(), c.direction());
    if ad == cd {
        if a.bound() == c.bound() && same_unit(a.unit(), c.unit()) {
            return ReasonCode::ExactMatch;
        }
        if approx_eq(a.base_bound(), c.base_bound(), tol) {
            return ReasonCode::EquivalentMatch;
        }
    }
    if ad.is_lower_bound() == cd.is_lower_bound() {
        return ReasonCode::BoundsNested;
    }

    let (floor, ceiling) = if ad.is_lower_bound() { (a, c) } else { (c, a) };
    let (lo, hi) = (floor.base_bound(), ceiling.base_bound());
    if approx_eq(lo, hi, tol) {
        if floor.direction().is_inclusive() && ceiling.direction().is_inclusive() {
            ReasonCode::BoundsOverlap
        } else {
            ReasonCode::BoundsDisjoint
        }
    } else if lo < hi {
        ReasonCode::BoundsOverlap
    } else {
        ReasonCode::BoundsDisjoint
    }
}

fn version_version(a: &Version, c: &Version, d: &mut Details) -> ReasonCode {
    d.insert("assertion_version".into(), json!(a.to_string()));
    d.insert("claim_version".into(), json!(c.to_string()));

    let order = a.cmp_release(c);
    match (a.constraint(), c.constraint()) {
        (VersionConstraint::Exact, VersionConstraint::Exact) => {
            if order == Ordering::Equal {
                ReasonCode::VersionMatch
            } else {
                ReasonCode::VersionMismatch
            }
        }
        // Two minimums are always jointly satisfiable by the higher one
        (VersionConstraint::AtLeast, VersionConstraint::AtLeast) => {
            if order == Ordering::Equal {
                ReasonCode::VersionMatch
            } else {
                ReasonCode::VersionCompatible
            }
        }
        (VersionConstraint::Exact, VersionConstraint::AtLeast) => {
            if order == Ordering::Less {
                ReasonCode::VersionBelowMinimum
            } else {
                ReasonCode::VersionCompatible
            }
        }
        (VersionConstraint::AtLeast, VersionConstraint::Exact) => {
            if order == Ordering::Greater {
                ReasonCode::VersionBelowMinimum
            } else {
                ReasonCode::VersionCompatible
            }
        }
    }
}

fn insert_bound(d: &mut Details, prefix: &str, b: &Bound) {
    d.insert(format!("{prefix}bound"), json!(b.bound()));
    d.insert(format!("{prefix}direction"), json!(b.direction().symbol()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use concord_domain::{AuthorityLevel, Direction};

    fn form(value: Value) -> ClaimForm {
        ClaimForm::new("SLA", "Availability", value)
            .unwrap()
            .with_authority(AuthorityLevel::Contractual)
    }

    fn scalar(value: f64, unit: Option<&str>) -> Value {
        Value::scalar(value, unit).unwrap()
    }

    fn reason(a: Value, c: Value, tol: f64) -> ReasonCode {
        compare(&form(a), &form(c), tol).reason
    }

    #[test]
    fn test_scalar_exact_vs_equivalent() {
        assert_eq!(
            reason(scalar(60.0, Some("min")), scalar(60.0, Some("min")), 0.0),
            ReasonCode::ExactMatch
        );
        assert_eq!(
            reason(scalar(1.0, Some("h")), scalar(60.0, Some("min")), 0.0),
            ReasonCode::EquivalentMatch
        );
        assert_eq!(
            reason(Value::scalar(100.0, None).unwrap(), Value::scalar(101.0, None).unwrap(), 0.0),
            ReasonCode::ValueMismatch
        );
        assert_eq!(
            reason(Value::scalar(100.0, None).unwrap(), Value::scalar(101.0, None).unwrap(), 0.02),
            ReasonCode::EquivalentMatch
        );
    }

    #[test]
    fn test_property_gate_runs_before_values() {
        let a = form(Value::scalar(1.0, None).unwrap()).with_key("sla.availability");
        let c = form(Value::scalar(1.0, None).unwrap()).with_key("sla.latency");
        let result = compare(&a, &c, 0.0);
        assert_eq!(result.reason, ReasonCode::PropertyMismatch);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn test_key_on_one_side_is_not_a_mismatch() {
        let a = form(Value::scalar(1.0, None).unwrap()).with_key("sla.availability");
        let c = form(Value::scalar(1.0, None).unwrap());
        assert_eq!(compare(&a, &c, 0.0).reason, ReasonCode::ExactMatch);
    }

    #[test]
    fn test_scope_missing_and_mismatch() {
        let a = form(Value::boolean(true)).with_scope("edition", "private");
        let c = form(Value::boolean(true));
        let result = compare(&a, &c, 0.0);
        assert_eq!(result.outcome, Outcome::NeedsScope);
        assert_eq!(result.details["missing_on"], json!("claim"));

        let c = form(Value::boolean(true)).with_scope("edition", "Public");
        let result = compare(&a, &c, 0.0);
        assert_eq!(result.reason, ReasonCode::ScopeMismatch);
        assert_eq!(result.outcome, Outcome::Unknown);

        let c = form(Value::boolean(true)).with_scope("edition", " PRIVATE ");
        assert_eq!(compare(&a, &c, 0.0).reason, ReasonCode::BooleanMatch);
    }

    #[test]
    fn test_unit_gate() {
        assert_eq!(
            reason(scalar(5.0, Some("GB")), scalar(5.0, Some("min")), 0.0),
            ReasonCode::UnitMismatch
        );
    }

    #[test]
    fn test_text_never_compared() {
        assert_eq!(
            reason(Value::text("fast"), Value::text("fast"), 0.0),
            ReasonCode::TextNotComparable
        );
        assert_eq!(
            reason(Value::scalar(1.0, None).unwrap(), Value::text("one"), 0.0),
            ReasonCode::TextNotComparable
        );
    }

    #[test]
    fn test_cross_type_is_type_mismatch() {
        assert_eq!(
            reason(Value::boolean(true), Value::version("1.2").unwrap(), 0.0),
            ReasonCode::TypeMismatch
        );
        assert_eq!(
            reason(Value::scalar(1.0, None).unwrap(), Value::boolean(true), 0.0),
            ReasonCode::TypeMismatch
        );
    }

    #[test]
    fn test_bounds_overlap_and_disjoint() {
        let at_least_10 = Value::inequality(10.0, Direction::AtLeast, None).unwrap();
        let at_most_20 = Value::inequality(20.0, Direction::AtMost, None).unwrap();
        let at_most_10 = Value::inequality(10.0, Direction::AtMost, None).unwrap();
        let below_10 = Value::inequality(10.0, Direction::LessThan, None).unwrap();
        let at_most_5 = Value::inequality(5.0, Direction::AtMost, None).unwrap();

        assert_eq!(reason(at_least_10.clone(), at_most_20.clone(), 0.0), ReasonCode::BoundsOverlap);
        assert_eq!(reason(at_least_10.clone(), at_most_10, 0.0), ReasonCode::BoundsOverlap);
        assert_eq!(reason(at_least_10.clone(), below_10, 0.0), ReasonCode::BoundsDisjoint);
        assert_eq!(reason(at_least_10, at_most_5.clone(), 0.0), ReasonCode::BoundsDisjoint);
        assert_eq!(reason(at_most_20, at_most_5, 0.0), ReasonCode::BoundsNested);
    }

    #[test]
    fn test_version_cells() {
        let v = |s: &str| Value::version(s).unwrap();
        assert_eq!(reason(v("1.2"), v("1.2.0"), 0.0), ReasonCode::VersionMatch);
        assert_eq!(reason(v("1.2"), v("1.3"), 0.0), ReasonCode::VersionMismatch);
        assert_eq!(reason(v("1.3"), v(">=1.2"), 0.0), ReasonCode::VersionCompatible);
        assert_eq!(reason(v(">=1.2"), v("1.3"), 0.0), ReasonCode::VersionCompatible);
        assert_eq!(reason(v("1.1"), v(">=1.2"), 0.0), ReasonCode::VersionBelowMinimum);
        assert_eq!(reason(v(">=1.2"), v(">=2.0"), 0.0), ReasonCode::VersionCompatible);
    }

    #[test]
    fn test_authority_weights_confidence() {
        let a = form(Value::boolean(true));
        let c = form(Value::boolean(true)).with_authority(AuthorityLevel::Community);
        let result = compare(&a, &c, 0.0);
        assert!((result.confidence - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_regime_downgrade_only_on_support() {
        let a = form(Value::boolean(true)).with_regime(TruthRegime::StrictNormative);
        let c = form(Value::boolean(true)).with_regime(TruthRegime::Descriptive);
        let result = compare(&a, &c, 0.0);
        assert!((result.confidence - 0.8).abs() < 1e-12);
        assert_eq!(result.details["regime_downgrade"], json!(true));

        let c = form(Value::boolean(false)).with_regime(TruthRegime::Descriptive);
        let result = compare(&a, &c, 0.0);
        assert_eq!(result.confidence, 1.0);
        assert!(!result.details.contains_key("regime_downgrade"));
    }

    #[test]
    fn test_comparator_rejects_bad_tolerance() {
        assert_eq!(Comparator::new(-0.1), Err(CompareError::NegativeTolerance(-0.1)));
        assert!(matches!(Comparator::new(f64::NAN), Err(CompareError::NonFiniteTolerance(_))));
        assert_eq!(Comparator::new(0.05).unwrap().tolerance(), 0.05);
    }

    #[test]
    fn test_free_function_sanitizes_tolerance() {
        let result = compare(
            &form(Value::scalar(100.0, None).unwrap()),
            &form(Value::scalar(101.0, None).unwrap()),
            -5.0,
        );
        assert_eq!(result.reason, ReasonCode::ValueMismatch);
        assert_eq!(result.details["tolerance"], json!(0.0));
    }
}
