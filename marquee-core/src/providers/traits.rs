use std::sync::Arc;

use async_trait::async_trait;
use marquee_model::{CreditMetadata, DetailMetadata, MediaKind};

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("API error: {0}")]
    ApiError(String),

    #[error("Not found")]
    NotFound,

    #[error("Rate limited")]
    RateLimited,

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Read access to the external catalog.
///
/// Either call may fail independently for any reference. The enricher turns
/// every failure into an absent field, so implementations should report
/// errors rather than retry forever.
#[async_trait]
pub trait CatalogLookup: Send + Sync {
    async fn get_detail(
        &self,
        reference_id: u64,
        kind: MediaKind,
    ) -> Result<DetailMetadata, ProviderError>;

    async fn get_credits(
        &self,
        reference_id: u64,
        kind: MediaKind,
    ) -> Result<CreditMetadata, ProviderError>;
}

#[async_trait]
impl<T> CatalogLookup for Arc<T>
where
    T: CatalogLookup + ?Sized,
{
    async fn get_detail(
        &self,
        reference_id: u64,
        kind: MediaKind,
    ) -> Result<DetailMetadata, ProviderError> {
        (**self).get_detail(reference_id, kind).await
    }

    async fn get_credits(
        &self,
        reference_id: u64,
        kind: MediaKind,
    ) -> Result<CreditMetadata, ProviderError> {
        (**self).get_credits(reference_id, kind).await
    }
}
