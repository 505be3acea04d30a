use annuaire_typeahead::LookupError;
use serde_json::Value;
use thiserror::Error;

use crate::ConfigError;

/// Normalized API failure.
///
/// Every variant renders as a message fit for display; callers never need
/// to interpret HTTP status codes themselves.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
	/// The request never produced a response.
	#[error("network error: {0}")]
	Network(String),
	/// No response within the configured timeout.
	#[error("request timed out")]
	Timeout,
	/// The server answered with a non-2xx status.
	#[error("{message}")]
	Status {
		status: u16,
		message: String,
	},
	/// The payload did not match the expected shape.
	#[error("invalid response: {0}")]
	Decode(String),
	#[error("invalid endpoint URL: {0}")]
	Url(#[from] url::ParseError),
	#[error("invalid configuration: {0}")]
	Config(#[from] ConfigError),
	/// The HTTP client could not be built.
	#[error("HTTP client setup failed: {0}")]
	Client(String),
}

impl ApiError {
	/// Builds a [`ApiError::Status`] from a non-2xx response body.
	pub fn from_status(status: u16, body: &str) -> Self {
		Self::Status {
			status,
			message: status_message(status, body),
		}
	}

	pub(crate) fn from_transport(err: reqwest::Error) -> Self {
		if err.is_timeout() {
			Self::Timeout
		} else if err.is_decode() {
			Self::Decode(err.to_string())
		} else {
			Self::Network(err.to_string())
		}
	}

	/// HTTP status, when the server answered.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Status { status, .. } => Some(*status),
			_ => None,
		}
	}
}

impl From<ApiError> for LookupError {
	fn from(err: ApiError) -> Self {
		LookupError::new(err.to_string())
	}
}

/// Picks the human-readable part of an error body.
///
/// Looks at `detail`, `message` and `error` in that order, then
/// `non_field_errors`, then a bare JSON string.
fn status_message(status: u16, body: &str) -> String {
	let fallback = || format!("HTTP {status}");
	let Ok(value) = serde_json::from_str::<Value>(body) else {
		return fallback();
	};

	if let Value::String(text) = &value {
		return non_blank(text).unwrap_or_else(fallback);
	}

	["detail", "message", "error"]
		.iter()
		.find_map(|key| value.get(*key).and_then(Value::as_str).and_then(non_blank))
		.or_else(|| {
			value
				.get("non_field_errors")
				.and_then(Value::as_array)
				.and_then(|errors| errors.iter().find_map(Value::as_str))
				.and_then(non_blank)
		})
		.unwrap_or_else(fallback)
}

fn non_blank(text: &str) -> Option<String> {
	let trimmed = text.trim();
	(!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn detail_key_wins() {
		let err = ApiError::from_status(404, r#"{"detail": "Ville introuvable.", "message": "ignored"}"#);
		assert_eq!(err.to_string(), "Ville introuvable.");
		assert_eq!(err.status(), Some(404));
	}

	#[test]
	fn message_and_error_keys_are_fallbacks() {
		assert_eq!(ApiError::from_status(400, r#"{"message": "q trop court"}"#).to_string(), "q trop court");
		assert_eq!(ApiError::from_status(500, r#"{"error": "boom"}"#).to_string(), "boom");
		assert_eq!(ApiError::from_status(400, r#"{"non_field_errors": ["limite dépassée"]}"#).to_string(), "limite dépassée");
	}

	#[test]
	fn string_body_is_used_verbatim() {
		assert_eq!(ApiError::from_status(503, r#""maintenance""#).to_string(), "maintenance");
	}

	#[test]
	fn unusable_bodies_fall_back_to_status() {
		assert_eq!(ApiError::from_status(502, "<html>Bad Gateway</html>").to_string(), "HTTP 502");
		assert_eq!(ApiError::from_status(500, r#"{"detail": "   "}"#).to_string(), "HTTP 500");
		assert_eq!(ApiError::from_status(500, "").to_string(), "HTTP 500");
	}

	#[test]
	fn converts_into_lookup_error_message() {
		let lookup: LookupError = ApiError::from_status(429, r#"{"detail": "Trop de requêtes"}"#).into();
		assert_eq!(lookup.message(), "Trop de requêtes");
		let lookup: LookupError = ApiError::Timeout.into();
		assert_eq!(lookup.message(), "request timed out");
	}
}
