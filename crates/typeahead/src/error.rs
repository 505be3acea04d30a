use thiserror::Error;

/// Message shown when a collaborator fails without saying why.
pub const FALLBACK_ERROR_MESSAGE: &str = "lookup failed";

/// Failure reported by a [`Lookup`](crate::Lookup) collaborator.
///
/// Only the human-readable message survives into controller state; status
/// codes and transport details are the collaborator's business.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", display_message(.message))]
pub struct LookupError {
	message: String,
}

impl LookupError {
	pub fn new(message: impl Into<String>) -> Self {
		Self { message: message.into() }
	}

	/// Raw message as reported by the collaborator.
	pub fn message(&self) -> &str {
		&self.message
	}

	/// Message suitable for display, falling back to
	/// [`FALLBACK_ERROR_MESSAGE`] when the collaborator gave none.
	pub fn user_message(&self) -> &str {
		display_message(&self.message)
	}
}

fn display_message(message: &str) -> &str {
	if message.trim().is_empty() { FALLBACK_ERROR_MESSAGE } else { message }
}

impl From<String> for LookupError {
	fn from(message: String) -> Self {
		Self::new(message)
	}
}

impl From<&str> for LookupError {
	fn from(message: &str) -> Self {
		Self::new(message)
	}
}
