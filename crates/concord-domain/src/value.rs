//! Typed values carried by claim forms
//!
//! [`Value`] is a closed sum type. Adding a shape forces every `match` in the
//! comparison engine to be revisited at compile time.
//!
//! Payload structs keep their fields private and validate in their
//! constructors, so an `Interval` with `low > high` or a `ValueSet` without
//! members cannot exist.

use crate::error::{ensure_finite, DomainError};
use crate::unit::Unit;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

fn parse_unit(unit: Option<&str>) -> Result<Option<Unit>, DomainError> {
    unit.map(Unit::parse).transpose()
}

fn to_base(unit: Option<&Unit>, value: f64) -> f64 {
    unit.map_or(value, |u| u.to_base(value))
}

/// A single number with an optional unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "QuantityRepr")]
pub struct Quantity {
    value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    unit: Option<Unit>,
}

#[derive(Deserialize)]
struct QuantityRepr {
    value: f64,
    #[serde(default)]
    unit: Option<Unit>,
}

impl TryFrom<QuantityRepr> for Quantity {
    type Error = DomainError;

    fn try_from(repr: QuantityRepr) -> Result<Self, Self::Error> {
        Ok(Self {
            value: ensure_finite("value", repr.value)?,
            unit: repr.unit,
        })
    }
}

impl Quantity {
    /// Create a quantity
    pub fn new(value: f64, unit: Option<&str>) -> Result<Self, DomainError> {
        Ok(Self {
            value: ensure_finite("value", value)?,
            unit: parse_unit(unit)?,
        })
    }

    /// Raw value as stated
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Unit, if stated
    pub fn unit(&self) -> Option<&Unit> {
        self.unit.as_ref()
    }

    /// Value converted to the unit's base
    pub fn base_value(&self) -> f64 {
        to_base(self.unit(), self.value)
    }
}

/// Closed numeric range `[low, high]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "IntervalRepr")]
pub struct Interval {
    low: f64,
    high: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    unit: Option<Unit>,
}

#[derive(Deserialize)]
struct IntervalRepr {
    low: f64,
    high: f64,
    #[serde(default)]
    unit: Option<Unit>,
}

impl TryFrom<IntervalRepr> for Interval {
    type Error = DomainError;

    fn try_from(repr: IntervalRepr) -> Result<Self, Self::Error> {
        Interval::build(repr.low, repr.high, repr.unit)
    }
}

impl Interval {
    /// Create an interval
    ///
    /// # Errors
    /// Fails if either bound is not finite or `low > high`.
    pub fn new(low: f64, high: f64, unit: Option<&str>) -> Result<Self, DomainError> {
        Self::build(low, high, parse_unit(unit)?)
    }

    fn build(low: f64, high: f64, unit: Option<Unit>) -> Result<Self, DomainError> {
        let low = ensure_finite("low", low)?;
        let high = ensure_finite("high", high)?;
        if low > high {
            return Err(DomainError::InvalidInterval { low, high });
        }
        Ok(Self { low, high, unit })
    }

    /// Lower bound as stated
    pub fn low(&self) -> f64 {
        self.low
    }

    /// Upper bound as stated
    pub fn high(&self) -> f64 {
        self.high
    }

    /// Unit, if stated
    pub fn unit(&self) -> Option<&Unit> {
        self.unit.as_ref()
    }

    /// Bounds converted to the unit's base
    pub fn base_bounds(&self) -> (f64, f64) {
        (to_base(self.unit(), self.low), to_base(self.unit(), self.high))
    }
}

/// Finite set of allowed numeric values
///
/// Members are stored sorted ascending with exact duplicates removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ValueSetRepr")]
pub struct ValueSet {
    values: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unit: Option<Unit>,
}

#[derive(Deserialize)]
struct ValueSetRepr {
    values: Vec<f64>,
    #[serde(default)]
    unit: Option<Unit>,
}

impl TryFrom<ValueSetRepr> for ValueSet {
    type Error = DomainError;

    fn try_from(repr: ValueSetRepr) -> Result<Self, Self::Error> {
        ValueSet::build(repr.values, repr.unit)
    }
}

impl ValueSet {
    /// Create a value set
    ///
    /// # Errors
    /// Fails on an empty set or a non-finite member.
    pub fn new<I>(values: I, unit: Option<&str>) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = f64>,
    {
        Self::build(values.into_iter().collect(), parse_unit(unit)?)
    }

    fn build(mut values: Vec<f64>, unit: Option<Unit>) -> Result<Self, DomainError> {
        if values.is_empty() {
            return Err(DomainError::EmptySet);
        }
        for v in &values {
            ensure_finite("values", *v)?;
        }
        values.sort_by(f64::total_cmp);
        values.dedup();
        Ok(Self { values, unit })
    }

    /// Members as stated, sorted ascending
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Unit, if stated
    pub fn unit(&self) -> Option<&Unit> {
        self.unit.as_ref()
    }

    /// Members converted to the unit's base
    pub fn base_values(&self) -> Vec<f64> {
        self.values.iter().map(|v| to_base(self.unit(), *v)).collect()
    }
}

/// Side of an inequality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// value > bound
    GreaterThan,
    /// value >= bound
    AtLeast,
    /// value < bound
    LessThan,
    /// value <= bound
    AtMost,
}

impl Direction {
    /// Whether the bound is a floor (value must lie above it)
    pub fn is_lower_bound(&self) -> bool {
        matches!(self, Direction::GreaterThan | Direction::AtLeast)
    }

    /// Whether the bound itself satisfies the inequality
    pub fn is_inclusive(&self) -> bool {
        matches!(self, Direction::AtLeast | Direction::AtMost)
    }

    /// Mathematical symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Direction::GreaterThan => ">",
            Direction::AtLeast => ">=",
            Direction::LessThan => "<",
            Direction::AtMost => "<=",
        }
    }

    /// Parse a symbol such as `>=` or `≤`
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            ">" => Some(Direction::GreaterThan),
            ">=" | "≥" => Some(Direction::AtLeast),
            "<" => Some(Direction::LessThan),
            "<=" | "≤" => Some(Direction::AtMost),
            _ => None,
        }
    }
}

/// One-sided numeric constraint, e.g. `>= 99.9 %`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoundRepr")]
pub struct Bound {
    bound: f64,
    direction: Direction,
    #[serde(skip_serializing_if = "Option::is_none")]
    unit: Option<Unit>,
}

#[derive(Deserialize)]
struct BoundRepr {
    bound: f64,
    direction: Direction,
    #[serde(default)]
    unit: Option<Unit>,
}

impl TryFrom<BoundRepr> for Bound {
    type Error = DomainError;

    fn try_from(repr: BoundRepr) -> Result<Self, Self::Error> {
        Ok(Self {
            bound: ensure_finite("bound", repr.bound)?,
            direction: repr.direction,
            unit: repr.unit,
        })
    }
}

impl Bound {
    /// Create an inequality bound
    pub fn new(bound: f64, direction: Direction, unit: Option<&str>) -> Result<Self, DomainError> {
        Ok(Self {
            bound: ensure_finite("bound", bound)?,
            direction,
            unit: parse_unit(unit)?,
        })
    }

    /// Bound as stated
    pub fn bound(&self) -> f64 {
        self.bound
    }

    /// Direction of the inequality
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Unit, if stated
    pub fn unit(&self) -> Option<&Unit> {
        self.unit.as_ref()
    }

    /// Bound converted to the unit's base
    pub fn base_bound(&self) -> f64 {
        to_base(self.unit(), self.bound)
    }
}

/// How a version number is asserted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VersionConstraint {
    /// Exactly this release
    Exact,
    /// This release or any later one
    AtLeast,
}

/// Dotted numeric version, e.g. `1.2` or `>=2.0.1`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "VersionRepr")]
pub struct Version {
    components: Vec<u64>,
    constraint: VersionConstraint,
}

#[derive(Deserialize)]
struct VersionRepr {
    components: Vec<u64>,
    constraint: VersionConstraint,
}

impl TryFrom<VersionRepr> for Version {
    type Error = DomainError;

    fn try_from(repr: VersionRepr) -> Result<Self, Self::Error> {
        Version::new(repr.components, repr.constraint)
    }
}

impl Version {
    /// Create a version from parsed components
    pub fn new(components: Vec<u64>, constraint: VersionConstraint) -> Result<Self, DomainError> {
        if components.is_empty() {
            return Err(DomainError::InvalidVersion(String::new()));
        }
        Ok(Self { components, constraint })
    }

    /// Parse a version string
    ///
    /// Accepts a `>=`/`≥` prefix or a `+` suffix for minimum versions, an
    /// optional leading label (`TLS 1.2`, `v2.0`) and stops at the first
    /// non-numeric component (`2.1-beta` parses as `2.1`).
    ///
    /// # Examples
    ///
    /// ```
    /// use concord_domain::{Version, VersionConstraint};
    ///
    /// let v = Version::parse(">= 1.2").unwrap();
    /// assert_eq!(v.components(), &[1, 2]);
    /// assert_eq!(v.constraint(), VersionConstraint::AtLeast);
    /// ```
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let invalid = || DomainError::InvalidVersion(raw.to_string());
        let trimmed = raw.trim();

        let (constraint, rest) = if let Some(rest) = trimmed.strip_prefix(">=") {
            (VersionConstraint::AtLeast, rest)
        } else if let Some(rest) = trimmed.strip_prefix('≥') {
            (VersionConstraint::AtLeast, rest)
        } else {
            (VersionConstraint::Exact, trimmed)
        };
        let (constraint, rest) = match rest.trim_end().strip_suffix('+') {
            Some(rest) => (VersionConstraint::AtLeast, rest),
            None => (constraint, rest),
        };

        let start = rest.find(|c: char| c.is_ascii_digit()).ok_or_else(invalid)?;
        let mut components = Vec::new();
        for part in rest[start..].split('.') {
            let digits: String = part.chars().take_while(|c| c.is_ascii_digit()).collect();
            if digits.is_empty() {
                break;
            }
            components.push(digits.parse::<u64>().map_err(|_| invalid())?);
            if digits.len() != part.len() {
                break;
            }
        }

        Self::new(components, constraint).map_err(|_| invalid())
    }

    /// Numeric components as stated
    pub fn components(&self) -> &[u64] {
        &self.components
    }

    /// Exact or minimum
    pub fn constraint(&self) -> VersionConstraint {
        self.constraint
    }

    /// Compare release numbers, treating missing trailing components as zero
    pub fn cmp_release(&self, other: &Version) -> Ordering {
        let len = self.components.len().max(other.components.len());
        for i in 0..len {
            let a = self.components.get(i).copied().unwrap_or(0);
            let b = other.components.get(i).copied().unwrap_or(0);
            match a.cmp(&b) {
                Ordering::Equal => continue,
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.constraint == VersionConstraint::AtLeast {
            f.write_str(">=")?;
        }
        let parts: Vec<String> = self.components.iter().map(u64::to_string).collect();
        f.write_str(&parts.join("."))
    }
}

/// Name of a value variant, used in audit details
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum ValueKind {
    Scalar,
    Interval,
    Set,
    Inequality,
    Boolean,
    Version,
    Text,
}

impl ValueKind {
    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Scalar => "scalar",
            ValueKind::Interval => "interval",
            ValueKind::Set => "set",
            ValueKind::Inequality => "inequality",
            ValueKind::Boolean => "boolean",
            ValueKind::Version => "version",
            ValueKind::Text => "text",
        }
    }
}

/// A typed value asserted about a property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Value {
    /// Single number
    Scalar(Quantity),
    /// Closed range
    Interval(Interval),
    /// Set of allowed numbers
    Set(ValueSet),
    /// One-sided constraint
    Inequality(Bound),
    /// Yes / no
    Boolean(bool),
    /// Release number
    Version(Version),
    /// Unstructured text, never compared
    Text(String),
}

impl Value {
    /// Scalar value
    pub fn scalar(value: f64, unit: Option<&str>) -> Result<Self, DomainError> {
        Quantity::new(value, unit).map(Value::Scalar)
    }

    /// Interval value
    pub fn interval(low: f64, high: f64, unit: Option<&str>) -> Result<Self, DomainError> {
        Interval::new(low, high, unit).map(Value::Interval)
    }

    /// Set value
    pub fn set<I>(values: I, unit: Option<&str>) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = f64>,
    {
        ValueSet::new(values, unit).map(Value::Set)
    }

    /// Inequality value
    pub fn inequality(
        bound: f64,
        direction: Direction,
        unit: Option<&str>,
    ) -> Result<Self, DomainError> {
        Bound::new(bound, direction, unit).map(Value::Inequality)
    }

    /// Boolean value
    pub fn boolean(value: bool) -> Self {
        Value::Boolean(value)
    }

    /// Version value parsed from a string
    pub fn version(raw: &str) -> Result<Self, DomainError> {
        Version::parse(raw).map(Value::Version)
    }

    /// Free-text value
    pub fn text(raw: impl Into<String>) -> Self {
        Value::Text(raw.into())
    }

    /// Variant name
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Scalar(_) => ValueKind::Scalar,
            Value::Interval(_) => ValueKind::Interval,
            Value::Set(_) => ValueKind::Set,
            Value::Inequality(_) => ValueKind::Inequality,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Version(_) => ValueKind::Version,
            Value::Text(_) => ValueKind::Text,
        }
    }

    /// Unit of a numeric value, if any
    pub fn unit(&self) -> Option<&Unit> {
        match self {
            Value::Scalar(q) => q.unit(),
            Value::Interval(i) => i.unit(),
            Value::Set(s) => s.unit(),
            Value::Inequality(b) => b.unit(),
            Value::Boolean(_) | Value::Version(_) | Value::Text(_) => None,
        }
    }
}
