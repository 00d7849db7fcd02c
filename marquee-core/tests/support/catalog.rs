use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use marquee_core::providers::{CatalogLookup, ProviderError};
use marquee_model::{CreditMetadata, DetailMetadata, MediaKind};

/// Catalog double answering from fixed tables. Ids missing from a table
/// fail that lookup with `NotFound`.
#[derive(Debug, Default)]
pub struct FakeCatalog {
    details: HashMap<u64, DetailMetadata>,
    credits: HashMap<u64, CreditMetadata>,
    delay: Option<Duration>,
    transient: HashMap<u64, usize>,
    attempts: Mutex<HashMap<(u64, &'static str), usize>>,
    calls: AtomicUsize,
}

impl FakeCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_detail(mut self, id: u64, detail: DetailMetadata) -> Self {
        self.details.insert(id, detail);
        self
    }

    pub fn with_credits(mut self, id: u64, credits: CreditMetadata) -> Self {
        self.credits.insert(id, credits);
        self
    }

    /// Every lookup sleeps this long before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// The first `times` detail calls and the first `times` credit calls for
    /// `id` fail before the tables are consulted.
    pub fn with_transient_failures(mut self, id: u64, times: usize) -> Self {
        self.transient.insert(id, times);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn flaked(&self, id: u64, lookup: &'static str) -> bool {
        let Some(&times) = self.transient.get(&id) else {
            return false;
        };
        let mut attempts = self.attempts.lock().unwrap();
        let seen = attempts.entry((id, lookup)).or_insert(0);
        *seen += 1;
        *seen <= times
    }

    async fn pause(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
    }
}

#[async_trait]
impl CatalogLookup for FakeCatalog {
    async fn get_detail(
        &self,
        reference_id: u64,
        _kind: MediaKind,
    ) -> Result<DetailMetadata, ProviderError> {
        let flaked = self.flaked(reference_id, "detail");
        self.pause().await;
        if flaked {
            return Err(ProviderError::RateLimited);
        }
        self.details
            .get(&reference_id)
            .cloned()
            .ok_or(ProviderError::NotFound)
    }

    async fn get_credits(
        &self,
        reference_id: u64,
        _kind: MediaKind,
    ) -> Result<CreditMetadata, ProviderError> {
        let flaked = self.flaked(reference_id, "credits");
        self.pause().await;
        if flaked {
            return Err(ProviderError::RateLimited);
        }
        self.credits
            .get(&reference_id)
            .cloned()
            .ok_or_else(|| ProviderError::ApiError("credits unavailable".into()))
    }
}
