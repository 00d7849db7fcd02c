use anyhow::{Context, bail};
use marquee_core::providers::TmdbCatalogLookup;
use url::Url;

use crate::config::TmdbSettings;

/// Builds the TMDB adapter from configuration. An API key is required.
pub fn build_lookup(settings: &TmdbSettings) -> anyhow::Result<TmdbCatalogLookup> {
    let Some(api_key) = settings
        .api_key
        .as_deref()
        .map(str::trim)
        .filter(|key| !key.is_empty())
    else {
        bail!("no TMDB API key configured; set TMDB_API_KEY or [tmdb].api_key");
    };

    let mut lookup =
        TmdbCatalogLookup::new(api_key).with_language(settings.language.clone());

    if let Some(raw) = settings.base_url.as_deref() {
        let base_url = Url::parse(raw)
            .with_context(|| format!("invalid TMDB base url {raw:?}"))?;
        lookup = lookup.with_base_url(base_url);
    }

    Ok(lookup)
}
