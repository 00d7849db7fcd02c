use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use marquee_model::{
    CollectionReference, EnrichedReference, InsightsReport, ListId,
    PersonalRating, ReferenceKey, UserId,
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use super::dedup::deduplicate;
use super::enrich::Enricher;
use super::report::{Aggregation, build_report};
use crate::cache::{EnrichmentCache, Fingerprint};
use crate::error::{InsightsError, Result};
use crate::providers::CatalogLookup;
use crate::settings::InsightsSettings;
use crate::store::CollectionStore;

/// What a report request covers. Requests for the same scope supersede one
/// another; requests for different scopes run independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsightsScope {
    List { user: UserId, list: ListId },
    Collection { user: UserId },
}

impl InsightsScope {
    fn aggregation(&self) -> Aggregation {
        match self {
            InsightsScope::List { .. } => Aggregation::SingleList,
            InsightsScope::Collection { .. } => Aggregation::CrossList,
        }
    }
}

#[derive(Debug)]
struct InFlight {
    generation: u64,
    cancel: CancellationToken,
}

/// Produces insights reports for users' saved lists.
///
/// Each request takes a fresh generation number. Starting a request cancels
/// the previous in-flight request for the same scope, and a request that has
/// been superseded by the time its enrichment settles is discarded without
/// touching the cache or returning a report.
pub struct InsightsService<S: ?Sized, L: ?Sized> {
    store: Arc<S>,
    enricher: Enricher<L>,
    cache: EnrichmentCache,
    settings: InsightsSettings,
    generation: AtomicU64,
    in_flight: DashMap<InsightsScope, InFlight>,
}

impl<S: ?Sized, L: ?Sized> std::fmt::Debug for InsightsService<S, L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InsightsService")
            .field("enricher", &self.enricher)
            .field("cache_entries", &self.cache.len())
            .field("settings", &self.settings)
            .finish()
    }
}

impl<S, L> InsightsService<S, L>
where
    S: CollectionStore + ?Sized,
    L: CatalogLookup + ?Sized,
{
    pub fn new(store: Arc<S>, lookup: Arc<L>, settings: InsightsSettings) -> Self {
        let enricher = Enricher::new(lookup)
            .with_max_concurrent_lookups(settings.enrichment.max_concurrent_lookups);
        Self {
            store,
            enricher,
            cache: EnrichmentCache::new(settings.cache.ttl()),
            settings,
            generation: AtomicU64::new(0),
            in_flight: DashMap::new(),
        }
    }

    pub fn settings(&self) -> &InsightsSettings {
        &self.settings
    }

    pub fn cache(&self) -> &EnrichmentCache {
        &self.cache
    }

    /// Report over a single list, without deduplication.
    pub async fn list_insights(
        &self,
        user: UserId,
        list: ListId,
    ) -> Result<Arc<InsightsReport>> {
        let (found, ratings) = tokio::try_join!(
            self.store.list(user, list),
            self.store.personal_ratings(user)
        )?;
        let found = found.ok_or(InsightsError::ListNotFound(list))?;

        self.run(InsightsScope::List { user, list }, found.items, ratings)
            .await
    }

    /// Report over every list the user owns, with titles that appear in
    /// several lists counted once.
    pub async fn collection_insights(
        &self,
        user: UserId,
    ) -> Result<Arc<InsightsReport>> {
        let (lists, ratings) = tokio::try_join!(
            self.store.lists_for_user(user),
            self.store.personal_ratings(user)
        )?;
        let references: Vec<CollectionReference> =
            lists.into_iter().flat_map(|list| list.items).collect();

        self.run(InsightsScope::Collection { user }, references, ratings)
            .await
    }

    /// Fingerprint of everything a [`Self::collection_insights`] call for
    /// `user` would enrich.
    pub async fn collection_fingerprint(&self, user: UserId) -> Result<Fingerprint> {
        let lists = self.store.lists_for_user(user).await?;
        Ok(Fingerprint::of(lists.iter().flat_map(|list| list.items.iter())))
    }

    /// Aborts the in-flight request for `scope`, if any.
    pub fn cancel(&self, scope: InsightsScope) {
        if let Some((_, previous)) = self.in_flight.remove(&scope) {
            previous.cancel.cancel();
        }
    }

    pub fn invalidate(&self, fingerprint: &Fingerprint) {
        self.cache.invalidate(fingerprint);
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    async fn run(
        &self,
        scope: InsightsScope,
        references: Vec<CollectionReference>,
        ratings: Vec<PersonalRating>,
    ) -> Result<Arc<InsightsReport>> {
        if references.is_empty() {
            return Err(InsightsError::EmptyCollection);
        }

        let fingerprint = Fingerprint::of(&references);
        let (generation, cancel) = self.begin(scope);

        // Keys a previous request enriched successfully are reused; every
        // other occurrence gets its own lookups.
        let cached = self.cache.get(&fingerprint).unwrap_or_default();
        let known: HashMap<ReferenceKey, &EnrichedReference> =
            cached.iter().map(|item| (item.key(), item)).collect();
        let mut slots: Vec<Option<EnrichedReference>> = references
            .iter()
            .map(|reference| {
                let found = known.get(&reference.key())?;
                rebind(reference, found)
            })
            .collect();
        let pending: Vec<usize> = slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.is_none().then_some(index))
            .collect();

        if !pending.is_empty() {
            let lookups: Vec<CollectionReference> = pending
                .iter()
                .map(|&index| references[index].clone())
                .collect();
            let settled = self
                .enricher
                .enrich_cancellable(&lookups, &cancel)
                .await;
            let fresh = match settled {
                Ok((fresh, _summary)) => fresh,
                Err(err) => {
                    warn!(?scope, generation, "insights request aborted");
                    self.finish(scope, generation);
                    return Err(err);
                }
            };

            if !self.is_current(scope, generation) {
                warn!(
                    ?scope,
                    generation, "discarding superseded insights result"
                );
                return Err(InsightsError::Cancelled(format!(
                    "request {generation} for {scope:?} was superseded"
                )));
            }

            for (index, item) in pending.into_iter().zip(fresh) {
                slots[index] = item;
            }
            // Only keys that resolved are shared; failed ones are retried by
            // the next request.
            let shared = deduplicate(slots.iter().flatten().cloned().collect());
            self.cache
                .insert_if_newer(fingerprint.clone(), Arc::new(shared), generation);
        }
        self.finish(scope, generation);

        let enriched: Vec<EnrichedReference> = slots.into_iter().flatten().collect();
        let items = match scope.aggregation() {
            Aggregation::SingleList => enriched,
            Aggregation::CrossList => deduplicate(enriched),
        };

        let report = build_report(&items, &ratings, &self.settings.report);
        info!(
            ?scope,
            %fingerprint,
            total = report.total_count,
            "insights report ready"
        );
        Ok(Arc::new(report))
    }

    /// Registers a new request for `scope`, cancelling whichever request
    /// held it before.
    fn begin(&self, scope: InsightsScope) -> (u64, CancellationToken) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let cancel = CancellationToken::new();
        let previous = self.in_flight.insert(
            scope,
            InFlight {
                generation,
                cancel: cancel.clone(),
            },
        );
        if let Some(previous) = previous {
            debug!(
                ?scope,
                superseded = previous.generation,
                generation,
                "cancelling superseded insights request"
            );
            previous.cancel.cancel();
        }
        (generation, cancel)
    }

    fn is_current(&self, scope: InsightsScope, generation: u64) -> bool {
        self.in_flight
            .get(&scope)
            .is_some_and(|entry| entry.generation == generation)
    }

    fn finish(&self, scope: InsightsScope, generation: u64) {
        self.in_flight
            .remove_if(&scope, |_, entry| entry.generation == generation);
    }
}

/// Pairs a caller reference with metadata enriched earlier for its key.
///
/// Cached sets are shared between requests whose references differ in title,
/// saved timestamp or duplication, so the caller's own reference is what ends
/// up in the report.
fn rebind(
    reference: &CollectionReference,
    enriched: &EnrichedReference,
) -> Option<EnrichedReference> {
    EnrichedReference::from_parts(
        reference.clone(),
        enriched.detail().cloned(),
        enriched.credit().cloned(),
    )
}
