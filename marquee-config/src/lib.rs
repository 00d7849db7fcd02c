//! Configuration for Marquee insights.
//!
//! Loads [`InsightsConfig`] from a file, inline JSON or defaults, installs
//! the tracing subscriber, and builds the TMDB-backed catalog lookup that
//! the `marquee-insights` binary hands to the engine.

pub mod config;
pub mod logging;
pub mod lookup;

pub use config::{ConfigFormat, ConfigSource, InsightsConfig, TmdbSettings};
pub use logging::init_tracing;
pub use lookup::build_lookup;
