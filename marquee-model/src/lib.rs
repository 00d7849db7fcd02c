//! Core data model definitions shared across Marquee crates.
#![allow(missing_docs)]

pub mod enriched;
pub mod error;
pub mod ids;
pub mod insights;
pub mod list;
pub mod media_kind;
pub mod metadata;
pub mod rating;
pub mod reference;

// Intentionally curated re-exports for downstream consumers.
pub use enriched::EnrichedReference;
pub use error::{ModelError, Result as ModelResult};
pub use ids::{ListId, UserId};
pub use insights::{
    ActivePeriod, GenreShare, InsightsReport, PersonRole, PersonTally,
    RatingComparison, ReleaseYear,
};
pub use list::CollectionList;
pub use media_kind::MediaKind;
pub use metadata::{CastCredit, CreditMetadata, CrewCredit, DetailMetadata, Genre};
pub use rating::PersonalRating;
pub use reference::{CollectionReference, ReferenceKey};
