use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shortest query that reaches the collaborator.
pub const DEFAULT_MIN_QUERY_LENGTH: usize = 2;

/// Quiet period required after the last change before a lookup fires.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Result ceiling requested from the collaborator.
pub const DEFAULT_LIMIT: usize = 10;

/// Tuning for one [`TypeaheadController`](crate::TypeaheadController).
///
/// Deserializes from a `[typeahead]` table:
///
/// ```toml
/// [typeahead]
/// min_query_length = 2
/// debounce_ms = 300
/// limit = 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TypeaheadConfig {
	/// Queries with fewer characters than this are gated.
	///
	/// The empty query is always gated, so `0` behaves like `1`.
	pub min_query_length: usize,
	/// Trailing debounce delay. Zero still defers the lookup to a task.
	#[serde(rename = "debounce_ms", with = "duration_ms")]
	pub debounce: Duration,
	/// Maximum number of results requested per lookup.
	pub limit: usize,
}

impl Default for TypeaheadConfig {
	fn default() -> Self {
		Self {
			min_query_length: DEFAULT_MIN_QUERY_LENGTH,
			debounce: DEFAULT_DEBOUNCE,
			limit: DEFAULT_LIMIT,
		}
	}
}

impl TypeaheadConfig {
	pub fn min_query_length(mut self, min: usize) -> Self {
		self.min_query_length = min;
		self
	}

	pub fn debounce(mut self, debounce: Duration) -> Self {
		self.debounce = debounce;
		self
	}

	pub fn limit(mut self, limit: usize) -> Self {
		self.limit = limit;
		self
	}

	/// Rejects settings that cannot describe a working typeahead.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.min_query_length == 0 {
			return Err(ConfigError::ZeroMinQueryLength);
		}
		if self.limit == 0 {
			return Err(ConfigError::ZeroLimit);
		}
		Ok(())
	}

	/// Returns true if `query` is long enough to be looked up.
	pub fn accepts(&self, query: &str) -> bool {
		!query.is_empty() && query.chars().count() >= self.min_query_length
	}
}

/// Invalid typeahead settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
	#[error("min_query_length must be at least 1")]
	ZeroMinQueryLength,
	#[error("limit must be at least 1")]
	ZeroLimit,
}

mod duration_ms {
	use std::time::Duration;

	use serde::{Deserialize, Deserializer, Serializer};

	pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_u64(u64::try_from(value.as_millis()).unwrap_or(u64::MAX))
	}

	pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
		u64::deserialize(deserializer).map(Duration::from_millis)
	}
}
