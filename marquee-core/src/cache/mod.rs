//! In-memory cache for enriched collections.
//!
//! Enrichment is the expensive part of producing a report, so its output is
//! kept per reference-set fingerprint for a bounded time. Reports themselves
//! are rebuilt from the cached set on every request.

pub mod enrichment;
pub mod fingerprint;

pub use enrichment::EnrichmentCache;
pub use fingerprint::Fingerprint;
