//! Claim forms - value-bearing assertions about a property

use crate::error::DomainError;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How strictly a value claim should be read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TruthRegime {
    /// Contractual guarantee (an SLA, a hard limit)
    StrictNormative,
    /// Documented rule or default
    Normative,
    /// Observation or typical behavior
    Descriptive,
}

/// Trust weight of the source a claim form came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthorityLevel {
    /// Contract or legally binding document
    Contractual,
    /// Vendor documentation
    Official,
    /// Community or third-party material
    Community,
    /// Unknown provenance
    Unverified,
}

impl AuthorityLevel {
    /// Multiplier applied to comparison confidence
    pub fn weight(&self) -> f64 {
        match self {
            AuthorityLevel::Contractual => 1.0,
            AuthorityLevel::Official => 0.9,
            AuthorityLevel::Community => 0.7,
            AuthorityLevel::Unverified => 0.5,
        }
    }
}

/// A typed assertion about a property
///
/// `property` is the human-facing label. `claim_key`, when both sides of a
/// comparison carry one, is the strict identity used to decide whether two
/// forms talk about the same thing at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClaimForm {
    /// Form-type tag, e.g. "SLA" or "LIMIT"
    pub form_type: String,

    /// Human-facing property label
    pub property: String,

    /// Canonical property key for strict identity matching
    #[serde(default)]
    pub claim_key: Option<String>,

    /// The asserted value
    pub value: Value,

    /// How strictly the value is meant
    pub truth_regime: TruthRegime,

    /// Trust weight of the source
    pub authority: AuthorityLevel,

    /// Scope qualifiers (e.g. edition → "private")
    #[serde(default)]
    pub scope: BTreeMap<String, String>,
}

impl ClaimForm {
    /// Create a claim form with descriptive regime and official authority
    ///
    /// # Errors
    /// Fails if the form type or property label is empty.
    pub fn new(
        form_type: impl Into<String>,
        property: impl Into<String>,
        value: Value,
    ) -> Result<Self, DomainError> {
        let form_type = form_type.into();
        let property = property.into();
        if form_type.trim().is_empty() {
            return Err(DomainError::EmptyField("form_type"));
        }
        if property.trim().is_empty() {
            return Err(DomainError::EmptyField("property"));
        }

        Ok(Self {
            form_type,
            property,
            claim_key: None,
            value,
            truth_regime: TruthRegime::Descriptive,
            authority: AuthorityLevel::Official,
            scope: BTreeMap::new(),
        })
    }

    /// Set the canonical property key
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.claim_key = Some(key.into());
        self
    }

    /// Set the truth regime
    pub fn with_regime(mut self, regime: TruthRegime) -> Self {
        self.truth_regime = regime;
        self
    }

    /// Set the authority level
    pub fn with_authority(mut self, authority: AuthorityLevel) -> Self {
        self.authority = authority;
        self
    }

    /// Add a scope qualifier
    pub fn with_scope(mut self, qualifier: impl Into<String>, value: impl Into<String>) -> Self {
        self.scope.insert(qualifier.into(), value.into());
        self
    }

    /// Claim key normalized for identity comparison
    pub fn normalized_key(&self) -> Option<String> {
        self.claim_key
            .as_deref()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty())
    }
}
