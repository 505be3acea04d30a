//! Wire shapes of the REST API.
//!
//! Field names follow the backend's French naming; the Rust side keeps them
//! verbatim so payloads round-trip without rename tables.

use serde::{Deserialize, Serialize};

/// City suggestion from the city autocomplete endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
	pub id: u64,
	pub nom: String,
	#[serde(default)]
	pub code_postal_principal: String,
	#[serde(default)]
	pub departement: String,
	pub slug: String,
}

/// Envelope returned by the city autocomplete endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CityPage {
	pub results: Vec<City>,
}

/// Optional constraints for city lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityFilters {
	pub code_postal: Option<String>,
	pub region: Option<String>,
	pub departement: Option<String>,
}

/// Sub-category suggestion from the sub-category autocomplete endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubCategory {
	pub id: u64,
	pub nom: String,
	pub slug: String,
	/// Parent category id.
	pub categorie: u64,
	#[serde(default)]
	pub categorie_nom: String,
}

/// Optional constraints for sub-category lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubCategoryFilters {
	/// Restrict to one parent category.
	pub categorie: Option<u64>,
}

/// Professional listing as returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Professional {
	pub id: u64,
	pub nom: String,
	pub slug: String,
	#[serde(default)]
	pub ville: Option<String>,
	#[serde(default)]
	pub sous_categorie: Option<String>,
	#[serde(default)]
	pub note_moyenne: Option<f32>,
	#[serde(default)]
	pub nombre_avis: u32,
}

/// Professional search parameters, by slug.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
	pub categorie: Option<String>,
	pub sous_categorie: Option<String>,
	pub ville: Option<String>,
	/// 1-based page number.
	pub page: Option<u32>,
}

/// Raw search response: paid placements and organic ranking, both already
/// ordered by the backend.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct SearchResponse {
	#[serde(default)]
	pub sponsorises: Vec<Professional>,
	#[serde(default)]
	pub organiques: Vec<Professional>,
	#[serde(default)]
	pub total: Option<u64>,
}
