/// How a settled lookup ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
	Success,
	Error,
}

/// Lifecycle position of a controller.
///
/// `Disposed` is terminal; every other phase can move back to `Debouncing`
/// on a qualifying change or to `Idle` when the query becomes too short.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
	/// Query too short; nothing scheduled.
	#[default]
	Idle,
	/// Waiting for the debounce timer.
	Debouncing,
	/// Lookup in flight.
	Loading,
	/// Latest lookup finished.
	Settled(Outcome),
	/// Controller disposed; no further updates.
	Disposed,
}

/// Snapshot of what the presentation layer renders.
#[derive(Debug, Clone, PartialEq)]
pub struct TypeaheadState<T> {
	/// Results of the latest applied lookup, in collaborator order.
	pub results: Vec<T>,
	/// True from scheduling until the matching response is applied.
	pub loading: bool,
	/// Message of the latest applied failure.
	pub error: Option<String>,
	pub phase: Phase,
	/// Generation this state belongs to. Responses carrying any other
	/// generation are stale.
	pub generation: u64,
}

impl<T> Default for TypeaheadState<T> {
	fn default() -> Self {
		Self::idle(0)
	}
}

impl<T> TypeaheadState<T> {
	/// Gated state: no results, not loading, no error.
	pub fn idle(generation: u64) -> Self {
		Self {
			results: Vec::new(),
			loading: false,
			error: None,
			phase: Phase::Idle,
			generation,
		}
	}

	pub fn is_disposed(&self) -> bool {
		self.phase == Phase::Disposed
	}

	/// The `{results, loading, error}` triple without bookkeeping fields.
	pub fn view(&self) -> (&[T], bool, Option<&str>) {
		(&self.results, self.loading, self.error.as_deref())
	}
}
