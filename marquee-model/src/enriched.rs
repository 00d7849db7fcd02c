use crate::metadata::{CreditMetadata, DetailMetadata};
use crate::reference::{CollectionReference, ReferenceKey};

/// A reference with whatever catalog metadata could be fetched for it.
///
/// At least one of `detail` / `credit` is always present; a reference for
/// which both lookups failed never becomes an `EnrichedReference`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EnrichedReference {
    pub reference: CollectionReference,
    detail: Option<DetailMetadata>,
    credit: Option<CreditMetadata>,
}

impl EnrichedReference {
    /// Returns `None` when neither lookup produced anything.
    pub fn from_parts(
        reference: CollectionReference,
        detail: Option<DetailMetadata>,
        credit: Option<CreditMetadata>,
    ) -> Option<Self> {
        if detail.is_none() && credit.is_none() {
            return None;
        }
        Some(Self {
            reference,
            detail,
            credit,
        })
    }

    pub fn key(&self) -> ReferenceKey {
        self.reference.key()
    }

    pub fn title(&self) -> &str {
        &self.reference.title
    }

    pub fn detail(&self) -> Option<&DetailMetadata> {
        self.detail.as_ref()
    }

    pub fn credit(&self) -> Option<&CreditMetadata> {
        self.credit.as_ref()
    }
}
