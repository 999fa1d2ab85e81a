//! Claim module - the atomic proposition every component reads

use crate::error::{ensure_confidence, DomainError};
use crate::modality::Modality;
use crate::predicate::CanonicalPredicate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;

/// Side input: claim id to embedding vector
pub type Embeddings = HashMap<ClaimId, Vec<f32>>;

/// Side input: claim id to linked entity identifiers
pub type EntityLinks = HashMap<ClaimId, Vec<String>>;

/// Unique identifier for a claim based on UUIDv7
///
/// UUIDv7 provides:
/// - Chronological sortability
/// - 128-bit uniqueness
/// - A total order used wherever output must be sorted for determinism
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClaimId(u128);

impl ClaimId {
    /// Generate a new UUIDv7-based ClaimId
    ///
    /// # Examples
    ///
    /// ```
    /// use concord_domain::ClaimId;
    ///
    /// let id = ClaimId::new();
    /// assert!(id.value() > 0);
    /// ```
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7().as_u128())
    }

    /// Create a ClaimId from a raw u128 value
    pub fn from_value(value: u128) -> Self {
        Self(value)
    }

    /// Parse a ClaimId from its UUID string form
    ///
    /// # Examples
    ///
    /// ```
    /// use concord_domain::ClaimId;
    ///
    /// let id = ClaimId::new();
    /// let parsed = ClaimId::from_string(&id.to_string()).unwrap();
    /// assert_eq!(id, parsed);
    /// ```
    pub fn from_string(s: &str) -> Result<Self, DomainError> {
        uuid::Uuid::parse_str(s)
            .map(|u| Self(u.as_u128()))
            .map_err(|e| DomainError::InvalidId(format!("{}: {}", s, e)))
    }

    /// Get the raw u128 value
    pub fn value(&self) -> u128 {
        self.0
    }

    /// Big-endian bytes, used when deriving stable identifiers
    pub fn to_bytes(&self) -> [u8; 16] {
        self.0.to_be_bytes()
    }
}

impl Default for ClaimId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", uuid::Uuid::from_u128(self.0))
    }
}

impl Serialize for ClaimId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClaimId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        ClaimId::from_string(&raw).map_err(serde::de::Error::custom)
    }
}

/// Subject / predicate / object structure of a claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredForm {
    /// Subject entity name as extracted
    pub subject: String,

    /// Predicate, ideally drawn from the canonical vocabulary
    pub predicate: String,

    /// Object entity name or value as extracted
    pub object: String,
}

impl StructuredForm {
    /// Create a structured form
    pub fn new(
        subject: impl Into<String>,
        predicate: impl Into<String>,
        object: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: object.into(),
        }
    }

    /// The predicate parsed into the canonical vocabulary, if it belongs to it
    pub fn canonical_predicate(&self) -> Option<CanonicalPredicate> {
        CanonicalPredicate::parse(&self.predicate)
    }
}

/// An extracted proposition
///
/// Claims are created by the extraction collaborator and never mutated by
/// this engine; every component takes them by shared reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ClaimRepr")]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,

    /// Owning tenant
    pub tenant_id: String,

    /// Source document the claim was extracted from
    pub document_id: String,

    /// Free text of the claim
    pub text: String,

    /// Verbatim quote from the source document
    pub source_quote: String,

    /// How the claim asserts its content
    pub modality: Modality,

    /// Extraction confidence [0.0, 1.0]
    pub confidence: f64,

    /// Optional subject/predicate/object structure
    pub structured: Option<StructuredForm>,

    /// Linked entity identifiers
    pub entity_ids: Vec<String>,
}

#[derive(Deserialize)]
struct ClaimRepr {
    id: ClaimId,
    tenant_id: String,
    document_id: String,
    text: String,
    #[serde(default)]
    source_quote: String,
    modality: Modality,
    confidence: f64,
    #[serde(default)]
    structured: Option<StructuredForm>,
    #[serde(default)]
    entity_ids: Vec<String>,
}

impl TryFrom<ClaimRepr> for Claim {
    type Error = DomainError;

    fn try_from(repr: ClaimRepr) -> Result<Self, Self::Error> {
        let claim = Claim::new(
            repr.id,
            repr.tenant_id,
            repr.document_id,
            repr.text,
            repr.modality,
            repr.confidence,
        )?;
        Ok(Self {
            source_quote: repr.source_quote,
            structured: repr.structured,
            entity_ids: repr.entity_ids,
            ..claim
        })
    }
}

impl Claim {
    /// Create a new claim
    ///
    /// # Errors
    /// Returns an error if the tenant or document id is empty, or if the
    /// confidence is outside [0.0, 1.0].
    pub fn new(
        id: ClaimId,
        tenant_id: impl Into<String>,
        document_id: impl Into<String>,
        text: impl Into<String>,
        modality: Modality,
        confidence: f64,
    ) -> Result<Self, DomainError> {
        let claim = Self {
            id,
            tenant_id: tenant_id.into(),
            document_id: document_id.into(),
            text: text.into(),
            source_quote: String::new(),
            modality,
            confidence,
            structured: None,
            entity_ids: Vec::new(),
        };
        claim.validate()?;
        Ok(claim)
    }

    /// Check the invariants [`Claim::new`] enforces
    ///
    /// Fields are public, so a claim assembled by hand can break them.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.tenant_id.trim().is_empty() {
            return Err(DomainError::EmptyField("tenant_id"));
        }
        if self.document_id.trim().is_empty() {
            return Err(DomainError::EmptyField("document_id"));
        }
        ensure_confidence(self.confidence)?;
        Ok(())
    }

    /// Attach the verbatim source quote
    pub fn with_quote(mut self, quote: impl Into<String>) -> Self {
        self.source_quote = quote.into();
        self
    }

    /// Attach a subject/predicate/object structure
    pub fn with_structure(mut self, structured: StructuredForm) -> Self {
        self.structured = Some(structured);
        self
    }

    /// Attach linked entity identifiers
    pub fn with_entities<I, S>(mut self, entities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entity_ids = entities.into_iter().map(Into::into).collect();
        self
    }
}

/// Claims dropped while screening a batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Screening {
    /// Claims that failed [`Claim::validate`]
    pub invalid: usize,

    /// Ids carried by two or more differing claims
    pub conflicting_ids: usize,
}

/// Drop invalid claims and collapse repeated ids, ordered by id
///
/// Identical copies of a claim collapse to one. When claims sharing an id
/// differ, all of them are dropped, so the result never depends on the
/// input order.
pub fn screen_claims<'a, I>(claims: I) -> (Vec<&'a Claim>, Screening)
where
    I: IntoIterator<Item = &'a Claim>,
{
    let mut screening = Screening::default();
    let mut valid: Vec<&Claim> = claims
        .into_iter()
        .filter(|claim| {
            let ok = claim.validate().is_ok();
            screening.invalid += usize::from(!ok);
            ok
        })
        .collect();
    valid.sort_by_key(|c| c.id);

    let mut kept = Vec::with_capacity(valid.len());
    for run in valid.chunk_by(|a, b| a.id == b.id) {
        if run.iter().all(|c| *c == run[0]) {
            kept.push(run[0]);
        } else {
            screening.conflicting_ids += 1;
        }
    }
    (kept, screening)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: ClaimId ordering matches u128 ordering
        #[test]
        fn test_id_ordering_property(a: u128, b: u128) {
            let id_a = ClaimId::from_value(a);
            let id_b = ClaimId::from_value(b);

            prop_assert_eq!(id_a < id_b, a < b);
            prop_assert_eq!(id_a == id_b, a == b);
        }

        /// Property: Round-trip through string representation preserves ID
        #[test]
        fn test_id_string_roundtrip(value: u128) {
            let id = ClaimId::from_value(value);
            match ClaimId::from_string(&id.to_string()) {
                Ok(parsed) => prop_assert_eq!(id, parsed),
                Err(e) => return Err(TestCaseError::fail(e.to_string())),
            }
        }
    }
}
