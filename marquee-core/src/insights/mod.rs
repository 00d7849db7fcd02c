//! The insights pipeline: enrich, deduplicate, aggregate, assemble.
//!
//! Enrichment is the only async, fallible-per-item stage. Everything after it
//! is a pure function over the enriched set, so a report can be recomputed
//! at any time from the same inputs and will come out identical, including
//! the order of tied entries.

pub mod activity;
pub mod dedup;
pub mod enrich;
pub mod genres;
pub mod people;
pub mod ratings;
pub mod release;
pub mod report;
pub mod service;

mod tally;

#[cfg(test)]
pub(crate) mod test_support;

pub use activity::most_active_month;
pub use dedup::deduplicate;
pub use enrich::{Enricher, EnrichmentSummary};
pub use genres::{genre_distribution, top_genres};
pub use people::{TOP_BILLED_CAST, top_actors, top_directors};
pub use ratings::rating_comparison;
pub use release::release_year_breakdown;
pub use report::{Aggregation, build_report, generate_report};
pub use service::{InsightsScope, InsightsService};
