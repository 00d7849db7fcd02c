use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use marquee_model::EnrichedReference;
use tokio::time::Instant;
use tracing::debug;

use super::fingerprint::Fingerprint;

pub type EnrichedSet = Arc<Vec<EnrichedReference>>;

#[derive(Debug, Clone)]
struct CachedEnrichment {
    items: EnrichedSet,
    generation: u64,
    stored_at: Instant,
}

/// Enriched sets keyed by [`Fingerprint`], each valid for `ttl`.
///
/// Every write carries the generation of the request that produced it. A
/// live entry is never replaced by output from an older generation, so a
/// slow request that finishes late cannot clobber fresher data.
#[derive(Debug)]
pub struct EnrichmentCache {
    entries: DashMap<Fingerprint, CachedEnrichment>,
    ttl: Duration,
}

impl EnrichmentCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the cached set if present and not expired. Expired entries are
    /// evicted on the way out.
    pub fn get(&self, fingerprint: &Fingerprint) -> Option<EnrichedSet> {
        let now = Instant::now();
        let hit = self
            .entries
            .get(fingerprint)
            .map(|entry| (self.is_fresh(&entry, now), Arc::clone(&entry.items)));

        match hit {
            Some((true, items)) => {
                debug!(%fingerprint, "enrichment cache hit");
                Some(items)
            }
            Some((false, _)) => {
                debug!(%fingerprint, "enrichment cache entry expired");
                self.entries
                    .remove_if(fingerprint, |_, entry| !self.is_fresh(entry, now));
                None
            }
            None => {
                debug!(%fingerprint, "enrichment cache miss");
                None
            }
        }
    }

    /// Stores `items` unless a live entry from a newer generation is already
    /// there. Returns whether the write happened.
    pub fn insert_if_newer(
        &self,
        fingerprint: Fingerprint,
        items: EnrichedSet,
        generation: u64,
    ) -> bool {
        let now = Instant::now();
        let fresh = CachedEnrichment {
            items,
            generation,
            stored_at: now,
        };

        match self.entries.entry(fingerprint) {
            Entry::Occupied(mut occupied) => {
                let current = occupied.get();
                if current.generation > generation && self.is_fresh(current, now) {
                    debug!(
                        fingerprint = %occupied.key(),
                        stored = current.generation,
                        incoming = generation,
                        "refusing stale enrichment write"
                    );
                    return false;
                }
                occupied.insert(fresh);
                true
            }
            Entry::Vacant(vacant) => {
                vacant.insert(fresh);
                true
            }
        }
    }

    pub fn invalidate(&self, fingerprint: &Fingerprint) {
        self.entries.remove(fingerprint);
    }

    pub fn clear(&self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn is_fresh(&self, entry: &CachedEnrichment, now: Instant) -> bool {
        now.saturating_duration_since(entry.stored_at) < self.ttl
    }
}

#[cfg(test)]
mod tests {
    use marquee_model::{CollectionReference, DetailMetadata, MediaKind};

    use super::*;

    fn set(title: &str) -> EnrichedSet {
        let reference = CollectionReference::new(1, MediaKind::Movie, title);
        Arc::new(vec![
            EnrichedReference::from_parts(
                reference,
                Some(DetailMetadata::default()),
                None,
            )
            .expect("detail present"),
        ])
    }

    fn fingerprint() -> Fingerprint {
        Fingerprint::of(&[CollectionReference::new(1, MediaKind::Movie, "x")])
    }

    #[tokio::test(start_paused = true)]
    async fn entries_expire_after_ttl() {
        let cache = EnrichmentCache::new(Duration::from_secs(60));
        assert!(cache.insert_if_newer(fingerprint(), set("a"), 1));
        assert!(cache.get(&fingerprint()).is_some());

        tokio::time::advance(Duration::from_secs(61)).await;

        assert!(cache.get(&fingerprint()).is_none());
        assert!(cache.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn older_generation_cannot_overwrite_newer_entry() {
        let cache = EnrichmentCache::new(Duration::from_secs(60));
        assert!(cache.insert_if_newer(fingerprint(), set("newer"), 5));
        assert!(!cache.insert_if_newer(fingerprint(), set("older"), 3));

        let cached = cache.get(&fingerprint()).expect("entry");
        assert_eq!(cached[0].title(), "newer");

        assert!(cache.insert_if_newer(fingerprint(), set("newest"), 6));
        assert_eq!(cache.get(&fingerprint()).unwrap()[0].title(), "newest");
    }

    #[tokio::test(start_paused = true)]
    async fn expired_newer_entry_can_be_replaced() {
        let cache = EnrichmentCache::new(Duration::from_secs(10));
        cache.insert_if_newer(fingerprint(), set("newer"), 5);
        tokio::time::advance(Duration::from_secs(11)).await;

        assert!(cache.insert_if_newer(fingerprint(), set("late"), 3));
        assert_eq!(cache.get(&fingerprint()).unwrap()[0].title(), "late");
    }

    #[test]
    fn invalidate_and_clear_remove_entries() {
        let cache = EnrichmentCache::new(Duration::from_secs(60));
        cache.insert_if_newer(fingerprint(), set("a"), 1);
        cache.invalidate(&fingerprint());
        assert!(cache.is_empty());

        cache.insert_if_newer(fingerprint(), set("a"), 1);
        cache.clear();
        assert_eq!(cache.len(), 0);
    }
}
