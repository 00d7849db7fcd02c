//! Value types produced by the insights aggregators.
//!
//! Everything here is an immutable snapshot: the engine builds a report once
//! per request and hands it out behind an `Arc`.

/// One genre bucket. `percentage` is relative to the sum of all genre tags,
/// not to the number of titles.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenreShare {
    pub name: String,
    pub count: u32,
    pub percentage: f64,
}

/// Where a person showed up: the title and the character played or the job
/// held.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonRole {
    pub title: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonTally {
    pub person_id: u64,
    pub name: String,
    pub profile_path: Option<String>,
    pub count: u32,
    pub roles: Vec<PersonRole>,
}

/// Personal versus catalog rating averages over the titles that have a
/// catalog rating.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RatingComparison {
    pub user_average: f64,
    pub tmdb_average: f64,
    /// `user_average - tmdb_average`; positive means the user rates higher.
    pub difference: f64,
    pub item_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActivePeriod {
    /// `YYYY-MM`
    pub period_key: String,
    pub year: i32,
    pub count: u32,
    /// e.g. `March 2024`
    pub display_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReleaseYear {
    pub year: i32,
    /// e.g. `1990s`
    pub decade: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InsightsReport {
    /// Number of titles the metrics were computed over.
    pub total_count: usize,
    pub genres: Vec<GenreShare>,
    pub top_actors: Vec<PersonTally>,
    pub top_directors: Vec<PersonTally>,
    pub rating_comparison: RatingComparison,
    pub most_active_month: Option<ActivePeriod>,
    pub release_years: Vec<ReleaseYear>,
}

impl InsightsReport {
    pub fn is_empty(&self) -> bool {
        self.total_count == 0
    }
}
