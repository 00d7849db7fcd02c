pub mod tmdb;
pub mod traits;

pub use tmdb::TmdbCatalogLookup;
pub use traits::{CatalogLookup, ProviderError};
