//! Typed clients for the annuaire REST API.
//!
//! The directory backend owns search, ranking and reference data; this crate
//! only shapes requests and normalizes responses and failures. The two
//! autocomplete endpoints are exposed as [`Lookup`] collaborators so they
//! can drive a [`TypeaheadController`] directly:
//!
//! ```no_run
//! use annuaire_api::{ApiClient, ApiConfig, CityFilters, CityLookup, Session};
//! use annuaire_typeahead::{TypeaheadConfig, TypeaheadController};
//!
//! # fn main() -> annuaire_api::Result<()> {
//! let client = ApiClient::new(ApiConfig::default(), Session::new())?;
//! let mut cities = TypeaheadController::new(CityLookup::new(client), TypeaheadConfig::default());
//! cities.set_input("Lyo", CityFilters::default());
//! # Ok(())
//! # }
//! ```
//!
//! [`Lookup`]: annuaire_typeahead::Lookup
//! [`TypeaheadController`]: annuaire_typeahead::TypeaheadController

mod client;
mod config;
mod error;
mod lookup;
mod models;
mod search;
mod session;

pub use client::{ApiClient, MAX_AUTOCOMPLETE_LIMIT, clamp_limit};
pub use config::{ApiConfig, ConfigError, DEFAULT_BASE_URL, DEFAULT_SEARCH_CAP, SearchConfig};
pub use error::ApiError;
pub use lookup::{CityLookup, SubCategoryLookup};
pub use models::{City, CityFilters, CityPage, Professional, SearchQuery, SearchResponse, SubCategory, SubCategoryFilters};
pub use search::SearchPage;
pub use session::Session;

/// Result alias for API calls.
pub type Result<T, E = ApiError> = std::result::Result<T, E>;

/// City typeahead over the remote autocomplete endpoint.
pub type CityTypeahead = annuaire_typeahead::TypeaheadController<CityLookup>;

/// Sub-category typeahead over the remote autocomplete endpoint.
pub type SubCategoryTypeahead = annuaire_typeahead::TypeaheadController<SubCategoryLookup>;
