use std::fmt;

use async_trait::async_trait;
use marquee_model::{
    CastCredit, CreditMetadata, CrewCredit, DetailMetadata, Genre, MediaKind,
};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use super::traits::{CatalogLookup, ProviderError};

pub const TMDB_V3_BASE: &str = "https://api.themoviedb.org/3";

/// [`CatalogLookup`] backed by the TMDB v3 REST API.
pub struct TmdbCatalogLookup {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    language: Option<String>,
}

impl fmt::Debug for TmdbCatalogLookup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TmdbCatalogLookup")
            .field("base_url", &self.base_url)
            .field("language", &self.language)
            .finish()
    }
}

impl TmdbCatalogLookup {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: TMDB_V3_BASE.to_string(),
            language: None,
        }
    }

    /// Reads `TMDB_API_KEY` and `TMDB_LANG`.
    pub fn from_env() -> Self {
        let api_key =
            std::env::var("TMDB_API_KEY").unwrap_or_else(|_| String::new());
        let language = std::env::var("TMDB_LANG").ok();
        Self::new(api_key).with_language(language)
    }

    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url.to_string();
        self
    }

    pub fn with_language(mut self, language: Option<String>) -> Self {
        self.language = language.filter(|lang| !lang.trim().is_empty());
        self
    }

    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    fn endpoint(&self, kind: MediaKind, id: u64, suffix: &str) -> String {
        format!(
            "{}/{}/{}{}",
            self.base_url.trim_end_matches('/'),
            kind.tmdb_segment(),
            id,
            suffix
        )
    }

    /// GETs `url` with the key and language attached and decodes the body.
    async fn fetch<T>(&self, url: &str) -> Result<T, ProviderError>
    where
        T: DeserializeOwned,
    {
        let query = TmdbQuery {
            api_key: &self.api_key,
            language: self.language.as_deref(),
        };
        let response = self.http.get(url).query(&query).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<TmdbErrorBody>()
                .await
                .ok()
                .and_then(|body| body.status_message);
            debug!(%url, %status, ?message, "TMDB rejected request");
            return Err(status_error(status, message));
        }

        response
            .json::<T>()
            .await
            .map_err(|err| ProviderError::ParseError(err.to_string()))
    }
}

/// Maps a non-success TMDB status onto the provider error taxonomy.
fn status_error(status: StatusCode, message: Option<String>) -> ProviderError {
    match status {
        StatusCode::UNAUTHORIZED => ProviderError::InvalidApiKey,
        StatusCode::NOT_FOUND => ProviderError::NotFound,
        StatusCode::TOO_MANY_REQUESTS => ProviderError::RateLimited,
        other => ProviderError::ApiError(
            message.unwrap_or_else(|| format!("TMDB answered {other}")),
        ),
    }
}

#[async_trait]
impl CatalogLookup for TmdbCatalogLookup {
    async fn get_detail(
        &self,
        reference_id: u64,
        kind: MediaKind,
    ) -> Result<DetailMetadata, ProviderError> {
        let url = self.endpoint(kind, reference_id, "");
        let body: TmdbDetailsResponse = self.fetch(&url).await?;
        Ok(body.into_detail())
    }

    async fn get_credits(
        &self,
        reference_id: u64,
        kind: MediaKind,
    ) -> Result<CreditMetadata, ProviderError> {
        let url = self.endpoint(kind, reference_id, "/credits");
        let body: TmdbCreditsResponse = self.fetch(&url).await?;
        Ok(body.into_credits())
    }
}

#[derive(Debug, Serialize)]
struct TmdbQuery<'a> {
    api_key: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    language: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct TmdbErrorBody {
    #[serde(default)]
    status_message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TmdbGenre {
    name: String,
}

#[derive(Debug, Deserialize)]
struct TmdbDetailsResponse {
    #[serde(default)]
    genres: Vec<TmdbGenre>,
    #[serde(default)]
    release_date: Option<String>,
    #[serde(default)]
    first_air_date: Option<String>,
    #[serde(default)]
    vote_average: Option<f64>,
    #[serde(default)]
    vote_count: Option<u64>,
}

impl TmdbDetailsResponse {
    fn into_detail(self) -> DetailMetadata {
        // TMDB reports 0.0 for titles nobody voted on; that is not a rating.
        let average_rating = match self.vote_count {
            Some(0) => None,
            _ => self.vote_average,
        };

        DetailMetadata {
            genres: self
                .genres
                .into_iter()
                .map(|genre| Genre::new(genre.name))
                .collect(),
            release_date: self.release_date.filter(|d| !d.is_empty()),
            first_air_date: self.first_air_date.filter(|d| !d.is_empty()),
            average_rating,
        }
    }
}

#[derive(Debug, Deserialize)]
struct TmdbCastMember {
    id: u64,
    name: String,
    #[serde(default)]
    character: Option<String>,
    #[serde(default)]
    order: Option<u32>,
    #[serde(default)]
    profile_path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TmdbCrewMember {
    id: u64,
    name: String,
    #[serde(default)]
    job: String,
    #[serde(default)]
    profile_path: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TmdbCreditsResponse {
    #[serde(default)]
    cast: Vec<TmdbCastMember>,
    #[serde(default)]
    crew: Vec<TmdbCrewMember>,
}

impl TmdbCreditsResponse {
    fn into_credits(self) -> CreditMetadata {
        CreditMetadata {
            cast: self
                .cast
                .into_iter()
                .map(|member| CastCredit {
                    person_id: member.id,
                    name: member.name,
                    // Unordered entries sort behind every billed one.
                    billing_order: member.order.unwrap_or(u32::MAX),
                    character: member.character.unwrap_or_default(),
                    profile_path: member.profile_path,
                })
                .collect(),
            crew: self
                .crew
                .into_iter()
                .map(|member| CrewCredit {
                    person_id: member.id,
                    name: member.name,
                    job: member.job,
                    profile_path: member.profile_path,
                })
                .collect(),
        }
    }
}
