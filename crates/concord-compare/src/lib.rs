//! Concord Comparison Engine
//!
//! A pure, deterministic comparator between two [`ClaimForm`]s: an assertion
//! (what an answer wants to say) and a claim (what a document says).
//!
//! ## Outcomes
//!
//! Every comparison yields exactly one [`Outcome`] and one [`ReasonCode`]
//! from a closed catalog. Ambiguity is a result, not an error:
//!
//! - `NEEDS_SCOPE` when a scope qualifier is present on one side only
//! - `UNKNOWN` for different properties, incompatible units, conflicting
//!   scopes, mixed types or free text
//!
//! ## Tolerance
//!
//! Relative: `|a - b| <= tol * max(|a|, |b|)`, applied independently to
//! every scalar, interval bound, set member and inequality bound.
//!
//! [`ClaimForm`]: concord_domain::ClaimForm

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod comparator;
pub mod error;
pub mod outcome;
pub mod tolerance;

pub use comparator::{compare, Comparator, REGIME_DOWNGRADE};
pub use error::CompareError;
pub use outcome::{ComparisonOutcome, Details, Outcome, ReasonCode};
