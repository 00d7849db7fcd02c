use std::fmt;
use std::sync::Arc;

use futures::{StreamExt, stream};
use marquee_model::{
    CollectionReference, CreditMetadata, DetailMetadata, EnrichedReference,
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::error::{InsightsError, Result};
use crate::providers::CatalogLookup;

/// Counters for one enrichment batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EnrichmentSummary {
    pub requested: usize,
    pub enriched: usize,
    /// References where both lookups failed.
    pub dropped: usize,
    pub detail_failures: usize,
    pub credit_failures: usize,
}

struct LookupOutcome {
    reference: CollectionReference,
    detail: Option<DetailMetadata>,
    credit: Option<CreditMetadata>,
}

/// Attaches catalog metadata to collection references.
///
/// Every reference gets a detail lookup and a credit lookup. The two run
/// concurrently with each other and with the lookups of other references.
/// A failed lookup only blanks its own field; the batch always waits for
/// every lookup to settle before returning.
pub struct Enricher<L: ?Sized> {
    lookup: Arc<L>,
    max_concurrent_lookups: usize,
}

impl<L: ?Sized> Clone for Enricher<L> {
    fn clone(&self) -> Self {
        Self {
            lookup: Arc::clone(&self.lookup),
            max_concurrent_lookups: self.max_concurrent_lookups,
        }
    }
}

impl<L: ?Sized> fmt::Debug for Enricher<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Enricher")
            .field("max_concurrent_lookups", &self.max_concurrent_lookups)
            .finish()
    }
}

impl<L> Enricher<L>
where
    L: CatalogLookup + ?Sized,
{
    pub fn new(lookup: Arc<L>) -> Self {
        Self {
            lookup,
            max_concurrent_lookups: 0,
        }
    }

    /// Caps how many references are in flight at once. Zero means no cap.
    pub fn with_max_concurrent_lookups(mut self, limit: usize) -> Self {
        self.max_concurrent_lookups = limit;
        self
    }

    pub async fn enrich(
        &self,
        references: &[CollectionReference],
    ) -> Vec<EnrichedReference> {
        self.enrich_with_summary(references).await.0
    }

    /// Enriches `references` in input order. References for which both
    /// lookups failed are left out of the result.
    pub async fn enrich_with_summary(
        &self,
        references: &[CollectionReference],
    ) -> (Vec<EnrichedReference>, EnrichmentSummary) {
        let (slots, summary) = self.settle(references).await;
        (slots.into_iter().flatten().collect(), summary)
    }

    /// One slot per input reference, in input order. A slot is `None` when
    /// both of its lookups failed. Duplicate references are looked up
    /// independently of one another.
    pub async fn settle(
        &self,
        references: &[CollectionReference],
    ) -> (Vec<Option<EnrichedReference>>, EnrichmentSummary) {
        let mut summary = EnrichmentSummary {
            requested: references.len(),
            ..EnrichmentSummary::default()
        };
        if references.is_empty() {
            return (Vec::new(), summary);
        }

        let in_flight = match self.max_concurrent_lookups {
            0 => references.len(),
            limit => limit,
        };

        // `buffered` keeps input order regardless of completion order.
        let outcomes: Vec<LookupOutcome> = stream::iter(references.iter().cloned())
            .map(|reference| self.lookup_both(reference))
            .buffered(in_flight)
            .collect()
            .await;

        let slots: Vec<Option<EnrichedReference>> = outcomes
            .into_iter()
            .map(|outcome| {
                if outcome.detail.is_none() {
                    summary.detail_failures += 1;
                }
                if outcome.credit.is_none() {
                    summary.credit_failures += 1;
                }
                EnrichedReference::from_parts(
                    outcome.reference,
                    outcome.detail,
                    outcome.credit,
                )
            })
            .collect();
        summary.enriched = slots.iter().flatten().count();
        summary.dropped = summary.requested - summary.enriched;

        info!(
            requested = summary.requested,
            enriched = summary.enriched,
            dropped = summary.dropped,
            detail_failures = summary.detail_failures,
            credit_failures = summary.credit_failures,
            "enrichment batch settled"
        );

        (slots, summary)
    }

    /// Like [`Self::settle`], but gives up as soon as `cancel` fires.
    /// Lookups still in flight are dropped and nothing is returned for the
    /// batch.
    pub async fn enrich_cancellable(
        &self,
        references: &[CollectionReference],
        cancel: &CancellationToken,
    ) -> Result<(Vec<Option<EnrichedReference>>, EnrichmentSummary)> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(InsightsError::Cancelled(format!(
                "enrichment of {} references aborted",
                references.len()
            ))),
            settled = self.settle(references) => Ok(settled),
        }
    }

    async fn lookup_both(&self, reference: CollectionReference) -> LookupOutcome {
        let id = reference.reference_id;
        let kind = reference.media_kind;

        let (detail, credit) = futures::join!(
            self.lookup.get_detail(id, kind),
            self.lookup.get_credits(id, kind)
        );

        let detail = detail
            .inspect_err(|err| {
                debug!(reference_id = id, %kind, error = %err, "detail lookup failed");
            })
            .ok();
        let credit = credit
            .inspect_err(|err| {
                debug!(reference_id = id, %kind, error = %err, "credit lookup failed");
            })
            .ok();

        LookupOutcome {
            reference,
            detail,
            credit,
        }
    }
}
