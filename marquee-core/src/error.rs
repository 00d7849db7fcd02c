use marquee_model::ListId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InsightsError {
    /// Raised only when there is nothing to enrich at all. Callers are
    /// expected to check for this up front and show an empty state.
    #[error("Collection has no references")]
    EmptyCollection,

    #[error("List not found: {0}")]
    ListNotFound(ListId),

    #[error("Collection store error: {0}")]
    Store(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Operation cancelled: {0}")]
    Cancelled(String),
}

pub type Result<T> = std::result::Result<T, InsightsError>;
