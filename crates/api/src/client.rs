//! HTTP client for the directory REST API.
//!
//! Requests are plain JSON GETs. Every failure is normalized into
//! [`ApiError`] before it leaves this module.

use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::{
	ApiConfig, ApiError, City, CityFilters, CityPage, Result, SearchPage, SearchQuery, SearchResponse, Session,
	SubCategory, SubCategoryFilters,
};

/// Largest `limit` the autocomplete endpoints accept.
pub const MAX_AUTOCOMPLETE_LIMIT: usize = 50;

const CITY_AUTOCOMPLETE: &str = "villes/autocomplete/";
const SUB_CATEGORY_AUTOCOMPLETE: &str = "sous-categories/autocomplete/";
const PROFESSIONAL_SEARCH: &str = "professionnels/recherche/";

/// Clamps a requested result count into `1..=MAX_AUTOCOMPLETE_LIMIT`.
pub fn clamp_limit(limit: usize) -> usize {
	limit.clamp(1, MAX_AUTOCOMPLETE_LIMIT)
}

type Params = Vec<(&'static str, String)>;

/// Cheaply cloneable API client bound to one [`Session`].
#[derive(Debug, Clone)]
pub struct ApiClient {
	http: Client,
	base: Url,
	config: ApiConfig,
	session: Session,
}

impl ApiClient {
	pub fn new(config: ApiConfig, session: Session) -> Result<Self> {
		config.validate()?;
		let http = Client::builder()
			.timeout(config.timeout())
			.user_agent(config.user_agent.clone())
			.build()
			.map_err(|e| ApiError::Client(e.to_string()))?;
		Ok(Self {
			http,
			base: config.base(),
			config,
			session,
		})
	}

	pub fn config(&self) -> &ApiConfig {
		&self.config
	}

	pub fn session(&self) -> &Session {
		&self.session
	}

	/// Resolves an endpoint path against the configured base URL.
	pub fn endpoint(&self, path: &str) -> Result<Url> {
		Ok(self.base.join(path)?)
	}

	/// Cities matching `q`, best match first.
	pub async fn autocomplete_cities(&self, q: &str, filters: &CityFilters, limit: usize) -> Result<Vec<City>> {
		let page: CityPage = self.get_json(CITY_AUTOCOMPLETE, city_params(q, filters, limit)).await?;
		Ok(page.results)
	}

	/// Sub-categories matching `q`, best match first.
	pub async fn autocomplete_sub_categories(
		&self,
		q: &str,
		filters: &SubCategoryFilters,
		limit: usize,
	) -> Result<Vec<SubCategory>> {
		self.get_json(SUB_CATEGORY_AUTOCOMPLETE, sub_category_params(q, filters, limit))
			.await
	}

	/// Raw professional search response.
	pub async fn search_professionals(&self, query: &SearchQuery) -> Result<SearchResponse> {
		self.get_json(PROFESSIONAL_SEARCH, search_params(query)).await
	}

	/// One display page of professionals, sponsored entries first.
	pub async fn search_page(&self, query: &SearchQuery, cap: usize) -> Result<SearchPage> {
		let response = self.search_professionals(query).await?;
		Ok(SearchPage::assemble(response, cap))
	}

	async fn get_json<T: DeserializeOwned>(&self, path: &str, params: Params) -> Result<T> {
		let url = self.endpoint(path)?;
		let mut request = self.http.get(url.clone()).query(&params).header(ACCEPT, "application/json");
		if let Some(bearer) = self.session.bearer() {
			request = request.header(AUTHORIZATION, bearer);
		}

		debug!(url = %url, params = params.len(), "api.get");
		let response = request.send().await.map_err(ApiError::from_transport)?;
		let status = response.status();
		let body = response.text().await.map_err(ApiError::from_transport)?;

		if !status.is_success() {
			let err = ApiError::from_status(status.as_u16(), &body);
			warn!(url = %url, status = status.as_u16(), error = %err, "api.status");
			return Err(err);
		}

		serde_json::from_str(&body).map_err(|e| {
			warn!(url = %url, error = %e, "api.decode");
			ApiError::Decode(e.to_string())
		})
	}
}

fn push_opt(params: &mut Params, key: &'static str, value: Option<&str>) {
	if let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) {
		params.push((key, value.to_string()));
	}
}

pub(crate) fn city_params(q: &str, filters: &CityFilters, limit: usize) -> Params {
	let mut params = vec![("q", q.to_string())];
	push_opt(&mut params, "code_postal", filters.code_postal.as_deref());
	push_opt(&mut params, "region", filters.region.as_deref());
	push_opt(&mut params, "departement", filters.departement.as_deref());
	params.push(("limit", clamp_limit(limit).to_string()));
	params
}

pub(crate) fn sub_category_params(q: &str, filters: &SubCategoryFilters, limit: usize) -> Params {
	let mut params = vec![("q", q.to_string())];
	if let Some(categorie) = filters.categorie {
		params.push(("categorie", categorie.to_string()));
	}
	params.push(("limit", clamp_limit(limit).to_string()));
	params
}

pub(crate) fn search_params(query: &SearchQuery) -> Params {
	let mut params = Params::new();
	push_opt(&mut params, "categorie", query.categorie.as_deref());
	push_opt(&mut params, "sous_categorie", query.sous_categorie.as_deref());
	push_opt(&mut params, "ville", query.ville.as_deref());
	if let Some(page) = query.page {
		params.push(("page", page.max(1).to_string()));
	}
	params
}

#[cfg(test)]
mod tests;
