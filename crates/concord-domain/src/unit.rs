//! Units of measure and their conversion to a base unit per dimension

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical or logical dimension of a unit
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Durations, base unit seconds
    Time,
    /// Percentages, base unit percent
    Ratio,
    /// Data sizes, base unit bytes
    DataSize,
    /// Throughput, base unit per second
    Rate,
    /// Unrecognized symbol, comparable only to itself
    Other(String),
}

/// A parsed unit: canonical symbol, dimension and factor to the base unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Unit {
    symbol: String,
    dimension: Dimension,
    factor: f64,
}

/// (aliases, canonical symbol, dimension, factor)
const KNOWN_UNITS: &[(&[&str], &str, Dimension, f64)] = &[
    (&["ms", "msec", "millisecond", "milliseconds"], "ms", Dimension::Time, 0.001),
    (&["s", "sec", "secs", "second", "seconds"], "s", Dimension::Time, 1.0),
    (&["min", "mins", "minute", "minutes"], "min", Dimension::Time, 60.0),
    (&["h", "hr", "hrs", "hour", "hours"], "h", Dimension::Time, 3600.0),
    (&["d", "day", "days"], "d", Dimension::Time, 86_400.0),
    (&["%", "pct", "percent"], "%", Dimension::Ratio, 1.0),
    (&["b", "byte", "bytes"], "B", Dimension::DataSize, 1.0),
    (&["kb", "kilobyte", "kilobytes"], "KB", Dimension::DataSize, 1e3),
    (&["mb", "megabyte", "megabytes"], "MB", Dimension::DataSize, 1e6),
    (&["gb", "gigabyte", "gigabytes"], "GB", Dimension::DataSize, 1e9),
    (&["tb", "terabyte", "terabytes"], "TB", Dimension::DataSize, 1e12),
    (&["kib"], "KiB", Dimension::DataSize, 1024.0),
    (&["mib"], "MiB", Dimension::DataSize, 1_048_576.0),
    (&["gib"], "GiB", Dimension::DataSize, 1_073_741_824.0),
    (&["rps", "req/s", "requests/s"], "rps", Dimension::Rate, 1.0),
    (&["rpm", "req/min", "requests/min"], "rpm", Dimension::Rate, 1.0 / 60.0),
];

impl Unit {
    /// Parse a unit symbol
    ///
    /// Known symbols are normalized ("minutes" → "min"); anything else is
    /// kept verbatim as its own dimension.
    ///
    /// # Examples
    ///
    /// ```
    /// use concord_domain::Unit;
    ///
    /// let minutes = Unit::parse("minutes").unwrap();
    /// let hours = Unit::parse("h").unwrap();
    /// assert!(minutes.is_compatible(&hours));
    /// assert_eq!(minutes.to_base(60.0), hours.to_base(1.0));
    /// ```
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidUnit(raw.to_string()));
        }
        let lowered = trimmed.to_lowercase();

        for (aliases, symbol, dimension, factor) in KNOWN_UNITS {
            if aliases.contains(&lowered.as_str()) {
                return Ok(Self {
                    symbol: (*symbol).to_string(),
                    dimension: dimension.clone(),
                    factor: *factor,
                });
            }
        }

        Ok(Self {
            symbol: trimmed.to_string(),
            dimension: Dimension::Other(lowered),
            factor: 1.0,
        })
    }

    /// Canonical symbol
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Dimension of the unit
    pub fn dimension(&self) -> &Dimension {
        &self.dimension
    }

    /// Whether values in the two units can be converted into each other
    pub fn is_compatible(&self, other: &Unit) -> bool {
        self.dimension == other.dimension
    }

    /// Convert a value expressed in this unit to the dimension's base unit
    pub fn to_base(&self, value: f64) -> f64 {
        value * self.factor
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}

impl TryFrom<String> for Unit {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Unit::parse(&value)
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.symbol
    }
}
