//! Evidence pointers carried by every emitted relation

use crate::claim::{Claim, ClaimId};
use serde::{Deserialize, Serialize};

/// Points back at the claim (and quote) a relation was derived from
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct EvidencePointer {
    /// Claim the evidence comes from
    pub claim_id: ClaimId,

    /// Document the claim was extracted from
    pub document_id: String,

    /// Verbatim quote, when the extractor kept one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
}

impl EvidencePointer {
    /// Create an evidence pointer
    pub fn new(claim_id: ClaimId, document_id: impl Into<String>) -> Self {
        Self {
            claim_id,
            document_id: document_id.into(),
            quote: None,
        }
    }

    /// Attach a quote
    pub fn with_quote(mut self, quote: impl Into<String>) -> Self {
        self.quote = Some(quote.into());
        self
    }

    /// Evidence pointer for a claim, carrying its source quote if non-empty
    pub fn from_claim(claim: &Claim) -> Self {
        let pointer = Self::new(claim.id, claim.document_id.clone());
        if claim.source_quote.trim().is_empty() {
            pointer
        } else {
            pointer.with_quote(claim.source_quote.clone())
        }
    }

    /// Whether the pointer identifies a source document
    pub fn is_resolvable(&self) -> bool {
        !self.document_id.trim().is_empty()
    }
}
