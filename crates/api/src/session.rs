use std::sync::Arc;

use parking_lot::RwLock;

/// Authentication session shared by everything that talks to the API.
///
/// Clones share one token slot: logging in through any handle is visible
/// to every client built from the same session.
#[derive(Debug, Clone, Default)]
pub struct Session {
	token: Arc<RwLock<Option<String>>>,
}

impl Session {
	/// Creates an anonymous session.
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_token(token: impl Into<String>) -> Self {
		let session = Self::new();
		session.set_token(token);
		session
	}

	pub fn set_token(&self, token: impl Into<String>) {
		*self.token.write() = Some(token.into());
	}

	pub fn clear(&self) {
		*self.token.write() = None;
	}

	pub fn token(&self) -> Option<String> {
		self.token.read().clone()
	}

	pub fn is_authenticated(&self) -> bool {
		self.token.read().is_some()
	}

	/// `Authorization` header value, if logged in.
	pub(crate) fn bearer(&self) -> Option<String> {
		self.token.read().as_ref().map(|token| format!("Bearer {token}"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn clones_share_token() {
		let session = Session::new();
		let other = session.clone();
		assert!(!other.is_authenticated());

		session.set_token("abc");
		assert_eq!(other.token().as_deref(), Some("abc"));
		assert_eq!(other.bearer().as_deref(), Some("Bearer abc"));

		other.clear();
		assert!(!session.is_authenticated());
		assert_eq!(session.bearer(), None);
	}
}
