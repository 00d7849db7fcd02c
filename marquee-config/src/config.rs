use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, anyhow};
use marquee_core::settings::InsightsSettings;
use serde::{Deserialize, Serialize};

pub const CONFIG_PATH_ENV: &str = "MARQUEE_CONFIG_PATH";
pub const CONFIG_JSON_ENV: &str = "MARQUEE_CONFIG_JSON";
pub const TMDB_API_KEY_ENV: &str = "TMDB_API_KEY";
pub const TMDB_LANG_ENV: &str = "TMDB_LANG";

const DEFAULT_LOG_FILTER: &str = "info,marquee_core=info";

/// Where the configuration came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConfigSource {
    #[default]
    Default,
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

/// Everything the insights binary needs at startup.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct InsightsConfig {
    /// Engine tunables: ranking limits, lookup concurrency and cache TTL.
    pub insights: InsightsSettings,
    pub tmdb: TmdbSettings,
    /// Tracing filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for InsightsConfig {
    fn default() -> Self {
        Self {
            insights: InsightsSettings::default(),
            tmdb: TmdbSettings::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Connection settings for the TMDB catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TmdbSettings {
    pub api_key: Option<String>,
    /// Overrides the public v3 endpoint, e.g. for a caching proxy.
    pub base_url: Option<String>,
    /// ISO 639-1 language tag sent with every request.
    pub language: Option<String>,
}

impl InsightsConfig {
    /// Load the configuration using the following precedence:
    /// 1) `$MARQUEE_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$MARQUEE_CONFIG_JSON` (inline JSON),
    /// 3) `marquee.toml` / `marquee.json` in the working directory or its
    ///    `config/` subdirectory,
    /// 4) defaults.
    ///
    /// `TMDB_API_KEY` and `TMDB_LANG` override the `[tmdb]` section
    /// whichever source won.
    pub fn load_from_env() -> anyhow::Result<(Self, ConfigSource)> {
        Self::load_with(|key| env::var(key).ok())
    }

    /// Same as [`Self::load_from_env`] with an explicit variable lookup.
    pub fn load_with<F>(var: F) -> anyhow::Result<(Self, ConfigSource)>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| var(key).filter(|value| !value.trim().is_empty());

        let (mut config, source) = if let Some(path_str) = present(CONFIG_PATH_ENV) {
            let path = PathBuf::from(path_str);
            let config = Self::load_from_file(&path)?;
            (config, ConfigSource::EnvPath(path))
        } else if let Some(raw) = present(CONFIG_JSON_ENV) {
            let config = Self::parse(&raw, Some(ConfigFormat::Json))
                .context("failed to parse MARQUEE_CONFIG_JSON")?;
            (config, ConfigSource::EnvInline)
        } else if let Some(path) = Self::default_file() {
            let config = Self::load_from_file(&path)?;
            (config, ConfigSource::File(path))
        } else {
            (Self::default(), ConfigSource::Default)
        };

        if let Some(api_key) = present(TMDB_API_KEY_ENV) {
            config.tmdb.api_key = Some(api_key);
        }
        if let Some(language) = present(TMDB_LANG_ENV) {
            config.tmdb.language = Some(language);
        }

        Ok((config, source))
    }

    /// Reads a config file. The extension picks the format; anything other
    /// than `.toml` or `.json` is tried as both.
    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("cannot read {}", path.display()))?;
        Self::parse(&contents, ConfigFormat::from_path(path))
            .with_context(|| format!("invalid insights config {}", path.display()))
    }

    pub fn parse(
        contents: &str,
        format: Option<ConfigFormat>,
    ) -> anyhow::Result<Self> {
        match format {
            Some(ConfigFormat::Toml) => Ok(toml::from_str(contents)?),
            Some(ConfigFormat::Json) => Ok(serde_json::from_str(contents)?),
            None => toml::from_str(contents).or_else(|toml_err| {
                serde_json::from_str(contents).map_err(|json_err| {
                    anyhow!("neither TOML ({toml_err}) nor JSON ({json_err})")
                })
            }),
        }
    }

    fn default_file() -> Option<PathBuf> {
        ["", "config"]
            .into_iter()
            .flat_map(|dir| {
                ConfigFormat::ALL
                    .map(|format| Path::new(dir).join(format.file_name()))
            })
            .find(|path| path.is_file())
    }
}

/// Serialization formats a config can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    const ALL: [ConfigFormat; 2] = [ConfigFormat::Toml, ConfigFormat::Json];

    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        Self::ALL
            .into_iter()
            .find(|format| ext.eq_ignore_ascii_case(format.extension()))
    }

    fn extension(self) -> &'static str {
        match self {
            ConfigFormat::Toml => "toml",
            ConfigFormat::Json => "json",
        }
    }

    fn file_name(self) -> String {
        format!("marquee.{}", self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_keeps_defaults_for_missing_fields() {
        let config = InsightsConfig::parse(
            r#"
            [insights.report]
            actor_limit = 3

            [tmdb]
            language = "de-DE"
            "#,
            None,
        )
        .unwrap();

        assert_eq!(config.insights.report.actor_limit, 3);
        assert_eq!(config.insights.report.director_limit, 10);
        assert_eq!(config.insights.cache.ttl_secs, 300);
        assert_eq!(config.tmdb.language.as_deref(), Some("de-DE"));
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
    }

    #[test]
    fn unparseable_input_reports_both_formats() {
        let err = InsightsConfig::parse("{ not valid", None)
            .unwrap_err()
            .to_string();
        assert!(err.contains("neither TOML"));
        assert!(err.contains("JSON"));
    }

    #[test]
    fn format_follows_extension_case_insensitively() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("conf/Marquee.TOML")),
            Some(ConfigFormat::Toml)
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("marquee.json")),
            Some(ConfigFormat::Json)
        );
        assert_eq!(ConfigFormat::from_path(Path::new("marquee.conf")), None);
        assert_eq!(ConfigFormat::from_path(Path::new("marquee")), None);
    }
}
