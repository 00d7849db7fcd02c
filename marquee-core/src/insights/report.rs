use std::sync::Arc;

use marquee_model::{
    CollectionReference, EnrichedReference, InsightsReport, PersonalRating,
};
use tracing::debug;

use super::dedup::deduplicate;
use super::enrich::Enricher;
use super::{
    activity, genres, people, ratings as rating_metrics, release,
};
use crate::error::{InsightsError, Result};
use crate::providers::CatalogLookup;
use crate::settings::ReportSettings;

/// Whether the references come from one list or from several.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aggregation {
    /// A single list. Its items are taken as-is.
    SingleList,
    /// Several lists that may overlap; duplicates are collapsed.
    CrossList,
}

/// Runs every aggregator once over `items` and packages the results.
///
/// Pure: the same items and ratings always produce the same report.
pub fn build_report(
    items: &[EnrichedReference],
    ratings: &[PersonalRating],
    settings: &ReportSettings,
) -> InsightsReport {
    let genres = match settings.genre_limit {
        Some(limit) => genres::top_genres(items, limit),
        None => genres::genre_distribution(items),
    };

    InsightsReport {
        total_count: items.len(),
        genres,
        top_actors: people::top_actors(items, settings.actor_limit),
        top_directors: people::top_directors(items, settings.director_limit),
        rating_comparison: rating_metrics::rating_comparison(items, ratings),
        most_active_month: activity::most_active_month(items),
        release_years: release::release_year_breakdown(items),
    }
}

/// Full pipeline for a set of references: enrich, collapse duplicates when
/// aggregating across lists, then build the report.
///
/// Fails only when `references` is empty. Lookups that fail merely thin out
/// the enriched set; if every lookup fails the report is empty.
pub async fn generate_report<L>(
    enricher: &Enricher<L>,
    references: Vec<CollectionReference>,
    ratings: &[PersonalRating],
    aggregation: Aggregation,
    settings: &ReportSettings,
) -> Result<Arc<InsightsReport>>
where
    L: CatalogLookup + ?Sized,
{
    if references.is_empty() {
        return Err(InsightsError::EmptyCollection);
    }

    // Every occurrence is enriched on its own; collapsing happens only
    // once the lookups have settled.
    let enriched = enricher.enrich(&references).await;
    let items = match aggregation {
        Aggregation::SingleList => enriched,
        Aggregation::CrossList => deduplicate(enriched),
    };

    debug!(items = items.len(), ?aggregation, "assembling insights report");
    Ok(Arc::new(build_report(&items, ratings, settings)))
}
