//! Read-only access to a user's saved lists and personal ratings.

pub mod memory;

pub use memory::{CollectionSnapshot, InMemoryCollectionStore, RatingRecord};

use async_trait::async_trait;
use marquee_model::{CollectionList, ListId, PersonalRating, UserId};

use crate::error::Result;

/// Source of collection data. The insights engine only ever reads from it.
#[async_trait]
pub trait CollectionStore: Send + Sync {
    /// All lists owned by `user`, in the store's display order.
    async fn lists_for_user(&self, user: UserId) -> Result<Vec<CollectionList>>;

    async fn list(
        &self,
        user: UserId,
        list: ListId,
    ) -> Result<Option<CollectionList>>;

    async fn personal_ratings(
        &self,
        user: UserId,
    ) -> Result<Vec<PersonalRating>>;
}
