//! Concord Claim Clusterer
//!
//! Conservative near-duplicate detection over a claim batch.
//!
//! 1. **Candidates**: cosine similarity over embeddings when both claims
//!    have one, content-token overlap otherwise
//! 2. **Validation**: same modality, not negation-inverted, overlapping
//!    linked entities when both sides have links
//! 3. **Merge**: validated pairs join components in an index-based
//!    union-find
//! 4. **Bound**: components above the size cap are trimmed by proximity to
//!    the centroid, or by confidence without full embeddings
//!
//! Output is deterministic: the same batch and side inputs always produce
//! the same clusters, in the same order, with the same identifiers.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod clusterer;
mod config;
mod error;
pub mod similarity;
mod stats;
pub mod union_find;
mod validator;

pub use clusterer::{ClaimClusterer, ClusterReport};
pub use config::ClusterConfig;
pub use error::ClusterError;
pub use stats::ClusterStats;
pub use validator::{PairProfile, PairRejection, PairValidator};
