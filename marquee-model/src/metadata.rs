//! Catalog metadata attached to a reference during enrichment.

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Genre {
    pub name: String,
}

impl Genre {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Title-level details. Movies carry `release_date`, series carry
/// `first_air_date`; either may be missing for unreleased titles.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DetailMetadata {
    #[cfg_attr(feature = "serde", serde(default))]
    pub genres: Vec<Genre>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub release_date: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub first_air_date: Option<String>,
    /// Catalog-wide average rating on a 0-10 scale.
    #[cfg_attr(feature = "serde", serde(default))]
    pub average_rating: Option<f64>,
}

impl DetailMetadata {
    /// The release date for movies or first air date for series, whichever
    /// is present and non-empty.
    pub fn premiere_date(&self) -> Option<&str> {
        self.release_date
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .or_else(|| {
                self.first_air_date
                    .as_deref()
                    .filter(|d| !d.trim().is_empty())
            })
    }
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CastCredit {
    pub person_id: u64,
    pub name: String,
    /// Catalog billing position; lower is more prominent.
    pub billing_order: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub character: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CrewCredit {
    pub person_id: u64,
    pub name: String,
    pub job: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub profile_path: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreditMetadata {
    #[cfg_attr(feature = "serde", serde(default))]
    pub cast: Vec<CastCredit>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub crew: Vec<CrewCredit>,
}
