//! Generation bookkeeping for "latest wins" task pipelines.
//!
//! A [`GenerationClock`] mints strictly increasing ids. Work started under
//! one id is only allowed to publish while that id is still the newest one
//! the owner knows about; anything older is stale.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio_util::sync::CancellationToken;

/// Monotonic generation clock. Generation `0` is never minted, so it can
/// stand for "nothing scheduled yet".
#[derive(Debug, Default)]
pub struct GenerationClock {
	current: AtomicU64,
}

impl GenerationClock {
	/// Creates a clock whose first minted generation is 1.
	pub fn new() -> Self {
		Self::default()
	}

	/// Mints and returns the next generation.
	pub fn next(&self) -> u64 {
		self.current.fetch_add(1, Ordering::AcqRel).wrapping_add(1)
	}

	/// Returns the most recently minted generation.
	pub fn current(&self) -> u64 {
		self.current.load(Ordering::Acquire)
	}
}

/// Generation-scoped cancellation token for one unit of scheduled work.
#[derive(Debug, Clone)]
pub struct GenerationToken {
	generation: u64,
	cancel: CancellationToken,
}

impl GenerationToken {
	/// Creates a token for `generation` with a fresh cancellation source.
	pub fn new(generation: u64) -> Self {
		Self {
			generation,
			cancel: CancellationToken::new(),
		}
	}

	/// Returns generation ID.
	pub const fn generation(&self) -> u64 {
		self.generation
	}

	/// Returns true when cancellation is requested.
	pub fn is_cancelled(&self) -> bool {
		self.cancel.is_cancelled()
	}

	/// Requests cancellation.
	pub fn cancel(&self) {
		self.cancel.cancel();
	}

	/// Future resolving when cancellation is requested.
	pub async fn cancelled(&self) {
		self.cancel.cancelled().await;
	}
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use super::*;

	#[test]
	fn clock_starts_at_one_and_increases() {
		let clock = GenerationClock::new();
		assert_eq!(clock.current(), 0);
		assert_eq!(clock.next(), 1);
		assert_eq!(clock.next(), 2);
		assert_eq!(clock.current(), 2);
	}

	#[test]
	fn clocks_are_independent() {
		let cities = GenerationClock::new();
		let categories = GenerationClock::new();
		cities.next();
		cities.next();
		assert_eq!(categories.next(), 1);
		assert_eq!(cities.current(), 2);
	}

	#[tokio::test(start_paused = true)]
	async fn clones_share_cancellation() {
		let token = GenerationToken::new(7);
		let observer = token.clone();
		assert!(!observer.is_cancelled());

		let waiter = tokio::spawn(async move {
			observer.cancelled().await;
			observer.generation()
		});
		tokio::time::sleep(Duration::from_millis(10)).await;
		token.cancel();

		assert_eq!(waiter.await.unwrap(), 7);
		assert!(token.is_cancelled());
	}
}
