//! Tunables for the insights engine.
//!
//! These are plain serde structs with defaults so the configuration crate can
//! load them from TOML or JSON and leave unspecified fields alone.

use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct InsightsSettings {
    pub report: ReportSettings,
    pub enrichment: EnrichmentSettings,
    pub cache: CacheSettings,
}

/// Output sizing for the person and genre rankings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ReportSettings {
    pub actor_limit: usize,
    pub director_limit: usize,
    /// Keep only the first N genres of the distribution. `None` keeps all.
    pub genre_limit: Option<usize>,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            actor_limit: 10,
            director_limit: 10,
            genre_limit: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct EnrichmentSettings {
    /// References enriched at once (each issues two lookups). Zero removes
    /// the bound.
    pub max_concurrent_lookups: usize,
}

impl Default for EnrichmentSettings {
    fn default() -> Self {
        Self {
            max_concurrent_lookups: 16,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct CacheSettings {
    /// How long an enriched collection stays reusable, in seconds.
    pub ttl_secs: u64,
}

impl Default for CacheSettings {
    fn default() -> Self {
        Self { ttl_secs: 300 }
    }
}

impl CacheSettings {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}
