//! Relative tolerance arithmetic
//!
//! One rule everywhere: two numbers match when `|a - b| <= tol * max(|a|, |b|)`.
//! Interval bounds, set members and inequality bounds each get the same
//! relative slack independently.

use concord_domain::{Bound, Direction};

/// Whether two base-unit numbers are equal within relative tolerance
pub fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
    a == b || (a - b).abs() <= tol * a.abs().max(b.abs())
}

/// Slack granted around a single number
pub fn slack(value: f64, tol: f64) -> f64 {
    tol * value.abs()
}

/// Interval bounds widened by relative tolerance on each side
pub fn widen(low: f64, high: f64, tol: f64) -> (f64, f64) {
    (low - slack(low, tol), high + slack(high, tol))
}

/// Inclusive containment in a widened interval
pub fn in_interval(value: f64, (low, high): (f64, f64), tol: f64) -> bool {
    let (low, high) = widen(low, high, tol);
    value >= low && value <= high
}

/// Whether a base-unit value satisfies an inequality
pub fn satisfies(value: f64, bound: &Bound, tol: f64) -> bool {
    let b = bound.base_bound();
    let s = slack(b, tol);
    match bound.direction() {
        Direction::AtLeast => value >= b - s,
        Direction::GreaterThan => value > b - s,
        Direction::AtMost => value <= b + s,
        Direction::LessThan => value < b + s,
    }
}
