use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

/// Production API root. Endpoint paths are joined onto it.
pub const DEFAULT_BASE_URL: &str = "https://api.annuaire-pro.fr/api/";

/// Number of professionals shown on one search page.
pub const DEFAULT_SEARCH_CAP: usize = 20;

const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Connection settings for [`ApiClient`](crate::ApiClient).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiConfig {
	pub base_url: Url,
	/// Whole-request timeout applied by the HTTP client.
	pub timeout_secs: u64,
	pub user_agent: String,
}

impl Default for ApiConfig {
	fn default() -> Self {
		Self {
			base_url: Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid URL"),
			timeout_secs: DEFAULT_TIMEOUT_SECS,
			user_agent: concat!("annuaire/", env!("CARGO_PKG_VERSION")).to_string(),
		}
	}
}

impl ApiConfig {
	pub fn with_base_url(mut self, base_url: Url) -> Self {
		self.base_url = base_url;
		self
	}

	pub fn timeout(&self) -> Duration {
		Duration::from_secs(self.timeout_secs)
	}

	/// Base URL with a trailing slash, so relative joins keep its path.
	pub fn base(&self) -> Url {
		let mut base = self.base_url.clone();
		if !base.path().ends_with('/') {
			let path = format!("{}/", base.path());
			base.set_path(&path);
		}
		base
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		match self.base_url.scheme() {
			"http" | "https" => {}
			other => return Err(ConfigError::UnsupportedScheme(other.to_string())),
		}
		if self.base_url.cannot_be_a_base() {
			return Err(ConfigError::NotABase(self.base_url.to_string()));
		}
		if self.timeout_secs == 0 {
			return Err(ConfigError::ZeroTimeout);
		}
		Ok(())
	}
}

/// Professional search presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
	/// Maximum combined sponsored + organic entries per page.
	pub cap: usize,
}

impl Default for SearchConfig {
	fn default() -> Self {
		Self { cap: DEFAULT_SEARCH_CAP }
	}
}

/// Invalid API settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
	#[error("unsupported URL scheme {0:?} (expected http or https)")]
	UnsupportedScheme(String),
	#[error("{0} cannot be used as a base URL")]
	NotABase(String),
	#[error("timeout_secs must be at least 1")]
	ZeroTimeout,
}
