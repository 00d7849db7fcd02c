//! # Marquee Core
//!
//! Insights engine for Marquee: turns a user's saved lists into a statistical
//! report about their taste.
//!
//! ## Overview
//!
//! - **Enrichment**: every saved reference is looked up in the external
//!   catalog (details and credits, concurrently). Failed lookups degrade a
//!   single field; a reference is dropped only when both lookups fail.
//! - **Deduplication**: titles saved in several lists count once when a
//!   report spans lists.
//! - **Aggregation**: genre mix, top actors and directors, personal versus
//!   catalog rating bias, most active month and release-year breakdown.
//! - **Caching**: enriched sets are memoized per reference-set fingerprint
//!   with a TTL, and superseded requests never overwrite newer results.
//!
//! ## Architecture
//!
//! - [`providers`]: the [`providers::CatalogLookup`] port and its TMDB adapter
//! - [`store`]: the read-only [`store::CollectionStore`] port
//! - [`insights`]: pipeline stages, aggregators and [`insights::InsightsService`]
//! - [`cache`]: fingerprints and the enrichment cache
//! - [`settings`]: tunables loaded by `marquee-config`
//!
//! ## Examples
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use marquee_core::{
//!     insights::InsightsService, providers::TmdbCatalogLookup,
//!     settings::InsightsSettings, store::InMemoryCollectionStore,
//! };
//! use marquee_model::UserId;
//!
//! async fn report_for(
//!     user: UserId,
//!     snapshot: &str,
//! ) -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(InMemoryCollectionStore::from_json(snapshot)?);
//!     let lookup = Arc::new(TmdbCatalogLookup::from_env());
//!     let service =
//!         InsightsService::new(store, lookup, InsightsSettings::default());
//!
//!     let report = service.collection_insights(user).await?;
//!     println!("{} titles analysed", report.total_count);
//!     Ok(())
//! }
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Fingerprints and the TTL cache for enriched sets
pub mod cache;

/// Error types and error handling utilities
pub mod error;

/// Enrichment, deduplication, aggregators and the report service
pub mod insights;

/// External catalog providers (TMDB integration)
pub mod providers;

/// Engine tunables
pub mod settings;

/// Collection store port and the in-memory implementation
pub mod store;

pub use error::{InsightsError, Result};
pub use marquee_model as model;
