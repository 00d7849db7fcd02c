use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use crate::error::ModelError;
use crate::media_kind::MediaKind;

/// A saved pointer to an external catalog entry, prior to enrichment.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollectionReference {
    /// Catalog (TMDB) id of the referenced title.
    pub reference_id: u64,
    /// Row id of the saved item in the collection store.
    pub local_id: Uuid,
    pub media_kind: MediaKind,
    pub title: String,
    /// Raw timestamp of when the item was saved. Kept unparsed because the
    /// store does not guarantee a single format.
    #[cfg_attr(feature = "serde", serde(default))]
    pub added_at: Option<String>,
}

impl CollectionReference {
    pub fn new(
        reference_id: u64,
        media_kind: MediaKind,
        title: impl Into<String>,
    ) -> Self {
        Self {
            reference_id,
            local_id: Uuid::now_v7(),
            media_kind,
            title: title.into(),
            added_at: None,
        }
    }

    pub fn with_added_at(mut self, added_at: impl Into<String>) -> Self {
        self.added_at = Some(added_at.into());
        self
    }

    pub fn key(&self) -> ReferenceKey {
        ReferenceKey::new(self.reference_id, self.media_kind)
    }
}

/// Identity of a reference across lists: the same catalog id can name both
/// a movie and a series, so the kind is part of the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReferenceKey {
    pub reference_id: u64,
    pub media_kind: MediaKind,
}

impl ReferenceKey {
    pub fn new(reference_id: u64, media_kind: MediaKind) -> Self {
        Self {
            reference_id,
            media_kind,
        }
    }
}

impl fmt::Display for ReferenceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.media_kind, self.reference_id)
    }
}

impl FromStr for ReferenceKey {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, id) = s
            .split_once(':')
            .ok_or_else(|| ModelError::InvalidReferenceKey(s.to_string()))?;
        let media_kind = kind.parse::<MediaKind>()?;
        let reference_id = id
            .parse::<u64>()
            .map_err(|_| ModelError::InvalidReferenceKey(s.to_string()))?;
        Ok(Self::new(reference_id, media_kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_ignores_local_id_and_title() {
        let a = CollectionReference::new(550, MediaKind::Movie, "Fight Club");
        let b = CollectionReference::new(550, MediaKind::Movie, "fight club");
        assert_ne!(a.local_id, b.local_id);
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn key_distinguishes_media_kind() {
        let movie = ReferenceKey::new(1399, MediaKind::Movie);
        let series = ReferenceKey::new(1399, MediaKind::Series);
        assert_ne!(movie, series);
        assert_eq!(series.to_string(), "series:1399");
    }

    #[test]
    fn key_parse_rejects_malformed_input() {
        assert_eq!(
            "movie:42".parse::<ReferenceKey>(),
            Ok(ReferenceKey::new(42, MediaKind::Movie))
        );
        assert!("movie-42".parse::<ReferenceKey>().is_err());
        assert!("movie:abc".parse::<ReferenceKey>().is_err());
        assert!("album:42".parse::<ReferenceKey>().is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn snapshot_entries_accept_tv_kind_and_missing_timestamp() {
        let raw = r#"{
            "reference_id": 1399,
            "local_id": "0191d5a4-6b8e-7c3e-9f00-000000000001",
            "media_kind": "tv",
            "title": "Game of Thrones"
        }"#;

        let reference: CollectionReference =
            serde_json::from_str(raw).expect("valid reference");

        assert_eq!(reference.key(), ReferenceKey::new(1399, MediaKind::Series));
        assert_eq!(reference.added_at, None);
        let rendered = serde_json::to_value(&reference).expect("serializes");
        assert_eq!(rendered["media_kind"], "series");
    }
}
