//! Configuration file loading.
//!
//! The file is TOML with three optional tables:
//!
//! ```toml
//! [api]
//! base_url = "https://api.annuaire-pro.fr/api/"
//! timeout_secs = 15
//!
//! [typeahead]
//! min_query_length = 2
//! debounce_ms = 300
//! limit = 10
//!
//! [search]
//! cap = 20
//! ```
//!
//! `ANNUAIRE_API_URL` overrides `api.base_url`.

use std::path::{Path, PathBuf};

use annuaire_api::{ApiConfig, SearchConfig};
use annuaire_typeahead::TypeaheadConfig;
use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// Environment variable overriding the API base URL.
pub const API_URL_ENV: &str = "ANNUAIRE_API_URL";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Error parsing TOML syntax or an unexpected key.
	#[error("invalid configuration in {path}: {error}")]
	Parse {
		path: PathBuf,
		error: toml::de::Error,
	},

	/// The API URL override is not a URL.
	#[error("invalid ANNUAIRE_API_URL: {0}")]
	ApiUrl(#[from] url::ParseError),

	#[error(transparent)]
	Typeahead(#[from] annuaire_typeahead::ConfigError),

	#[error(transparent)]
	Api(#[from] annuaire_api::ConfigError),
}

/// Whole-application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	pub api: ApiConfig,
	pub typeahead: TypeaheadConfig,
	pub search: SearchConfig,
}

impl Config {
	/// `$XDG_CONFIG_HOME/annuaire/config.toml` or the platform equivalent.
	pub fn default_path() -> Option<PathBuf> {
		dirs::config_dir().map(|dir| dir.join("annuaire").join("config.toml"))
	}

	/// Loads configuration for the CLI.
	///
	/// An explicit path must exist. The default path is optional and falls
	/// back to built-in defaults when absent.
	pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
		let mut config = match explicit {
			Some(path) => Self::from_file(path)?,
			None => match Self::default_path() {
				Some(path) if path.exists() => Self::from_file(&path)?,
				_ => Self::default(),
			},
		};
		config.apply_overrides(std::env::var(API_URL_ENV).ok().as_deref())?;
		config.validate()?;
		Ok(config)
	}

	pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
		let text = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		toml::from_str(&text).map_err(|error| ConfigError::Parse {
			path: path.to_path_buf(),
			error,
		})
	}

	pub fn apply_overrides(&mut self, api_url: Option<&str>) -> Result<(), ConfigError> {
		if let Some(url) = api_url.map(str::trim).filter(|u| !u.is_empty()) {
			self.api.base_url = Url::parse(url)?;
		}
		Ok(())
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		self.api.validate()?;
		self.typeahead.validate()?;
		Ok(())
	}
}
