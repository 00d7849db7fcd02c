use std::path::Path;

use async_trait::async_trait;
use marquee_model::{CollectionList, ListId, PersonalRating, UserId};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use super::CollectionStore;
use crate::error::{InsightsError, Result};

/// A personal rating together with the user who recorded it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RatingRecord {
    pub owner: UserId,
    #[serde(flatten)]
    pub rating: PersonalRating,
}

/// Serialized export of a collection store.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CollectionSnapshot {
    #[serde(default)]
    pub lists: Vec<CollectionList>,
    #[serde(default)]
    pub ratings: Vec<RatingRecord>,
}

/// [`CollectionStore`] held entirely in memory, seeded from a snapshot.
#[derive(Debug, Default)]
pub struct InMemoryCollectionStore {
    snapshot: RwLock<CollectionSnapshot>,
}

impl InMemoryCollectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: CollectionSnapshot) -> Self {
        Self {
            snapshot: RwLock::new(snapshot),
        }
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let snapshot: CollectionSnapshot = serde_json::from_str(raw)?;
        Ok(Self::from_snapshot(snapshot))
    }

    pub async fn load(path: &Path) -> Result<Self> {
        let raw = tokio::fs::read_to_string(path).await.map_err(|e| {
            InsightsError::Store(format!(
                "failed to read snapshot {}: {e}",
                path.display()
            ))
        })?;
        Self::from_json(&raw)
    }

    /// Adds a list, replacing any list with the same id.
    pub async fn upsert_list(&self, list: CollectionList) {
        let mut guard = self.snapshot.write().await;
        match guard.lists.iter_mut().find(|existing| existing.id == list.id) {
            Some(existing) => *existing = list,
            None => guard.lists.push(list),
        }
    }

    pub async fn push_rating(&self, owner: UserId, rating: PersonalRating) {
        self.snapshot
            .write()
            .await
            .ratings
            .push(RatingRecord { owner, rating });
    }
}

#[async_trait]
impl CollectionStore for InMemoryCollectionStore {
    async fn lists_for_user(&self, user: UserId) -> Result<Vec<CollectionList>> {
        let guard = self.snapshot.read().await;
        Ok(guard
            .lists
            .iter()
            .filter(|list| list.owner == user)
            .cloned()
            .collect())
    }

    async fn list(
        &self,
        user: UserId,
        list: ListId,
    ) -> Result<Option<CollectionList>> {
        let guard = self.snapshot.read().await;
        Ok(guard
            .lists
            .iter()
            .find(|candidate| candidate.owner == user && candidate.id == list)
            .cloned())
    }

    async fn personal_ratings(
        &self,
        user: UserId,
    ) -> Result<Vec<PersonalRating>> {
        let guard = self.snapshot.read().await;
        Ok(guard
            .ratings
            .iter()
            .filter(|record| record.owner == user)
            .map(|record| record.rating.clone())
            .collect())
    }
}
