use annuaire_typeahead::{Lookup, LookupError};
use async_trait::async_trait;

use crate::{ApiClient, City, CityFilters, SubCategory, SubCategoryFilters};

/// City autocomplete collaborator.
#[derive(Debug, Clone)]
pub struct CityLookup {
	client: ApiClient,
}

impl CityLookup {
	pub fn new(client: ApiClient) -> Self {
		Self { client }
	}
}

#[async_trait]
impl Lookup for CityLookup {
	type Item = City;
	type Filters = CityFilters;

	async fn lookup(&self, query: &str, filters: &CityFilters, limit: usize) -> Result<Vec<City>, LookupError> {
		Ok(self.client.autocomplete_cities(query, filters, limit).await?)
	}
}

/// Sub-category autocomplete collaborator.
#[derive(Debug, Clone)]
pub struct SubCategoryLookup {
	client: ApiClient,
}

impl SubCategoryLookup {
	pub fn new(client: ApiClient) -> Self {
		Self { client }
	}
}

#[async_trait]
impl Lookup for SubCategoryLookup {
	type Item = SubCategory;
	type Filters = SubCategoryFilters;

	async fn lookup(&self, query: &str, filters: &SubCategoryFilters, limit: usize) -> Result<Vec<SubCategory>, LookupError> {
		Ok(self.client.autocomplete_sub_categories(query, filters, limit).await?)
	}
}
