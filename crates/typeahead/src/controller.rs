//! Debounced, generation-guarded lookup scheduling.
//!
//! The controller is driven from a single owner (the input handler) and
//! publishes through a [`watch`] channel. Two pieces of bookkeeping keep it
//! correct under arbitrary response reordering:
//!
//! - a [`GenerationToken`] per scheduled lookup, whose cancellation stops a
//!   pending debounce timer;
//! - the generation stored in the published [`TypeaheadState`], advanced on
//!   every schedule, gate and disposal.
//!
//! Responses check their generation against the published one inside the
//! sender's critical section, so a gate or newer schedule can never be
//! overwritten by a response that was already on its way.

use std::sync::Arc;
use std::time::Duration;

use annuaire_worker::{GenerationClock, GenerationToken, TaskClass, WorkerRuntime, join_error_panic_message};
use tokio::sync::watch;
use tokio::time::sleep;
use tracing::{debug, trace, warn};

use crate::{Lookup, LookupError, Outcome, Phase, TypeaheadConfig, TypeaheadState};

/// Typeahead query controller over a [`Lookup`] collaborator.
///
/// Each instance owns its generation clock and timer; instances never share
/// staleness state. Dropping the controller disposes it.
pub struct TypeaheadController<L: Lookup> {
	lookup: Arc<L>,
	config: TypeaheadConfig,
	worker_runtime: WorkerRuntime,
	clock: GenerationClock,
	state: Arc<watch::Sender<TypeaheadState<L::Item>>>,
	query: String,
	filters: L::Filters,
	pending: Option<GenerationToken>,
	disposed: bool,
}

impl<L: Lookup> std::fmt::Debug for TypeaheadController<L> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TypeaheadController")
			.field("config", &self.config)
			.field("query", &self.query)
			.field("generation", &self.clock.current())
			.field("pending", &self.pending.is_some())
			.field("disposed", &self.disposed)
			.finish()
	}
}

impl<L: Lookup> TypeaheadController<L> {
	/// Creates an idle controller that spawns on the ambient runtime.
	pub fn new(lookup: L, config: TypeaheadConfig) -> Self {
		Self::with_runtime(lookup, config, WorkerRuntime::new())
	}

	/// Creates an idle controller that spawns through `worker_runtime`.
	pub fn with_runtime(lookup: L, config: TypeaheadConfig, worker_runtime: WorkerRuntime) -> Self {
		let (state, _) = watch::channel(TypeaheadState::default());
		Self {
			lookup: Arc::new(lookup),
			config,
			worker_runtime,
			clock: GenerationClock::new(),
			state: Arc::new(state),
			query: String::new(),
			filters: L::Filters::default(),
			pending: None,
			disposed: false,
		}
	}

	pub fn config(&self) -> &TypeaheadConfig {
		&self.config
	}

	pub fn query(&self) -> &str {
		&self.query
	}

	pub fn filters(&self) -> &L::Filters {
		&self.filters
	}

	pub fn is_disposed(&self) -> bool {
		self.disposed
	}

	/// Returns the current state without waiting on in-flight work.
	pub fn state(&self) -> TypeaheadState<L::Item> {
		self.state.borrow().clone()
	}

	/// Subscribes to every state the controller publishes.
	pub fn subscribe(&self) -> watch::Receiver<TypeaheadState<L::Item>> {
		self.state.subscribe()
	}

	/// Feeds a new `(query, filters)` pair.
	///
	/// An input equal to the current one is ignored. Anything else either
	/// gates synchronously or restarts the debounce timer.
	pub fn set_input(&mut self, query: impl Into<String>, filters: L::Filters) {
		if self.disposed {
			trace!("typeahead.input_after_dispose");
			return;
		}
		let query = query.into();
		if query == self.query && filters == self.filters {
			return;
		}
		self.query = query;
		self.filters = filters;
		self.schedule();
	}

	/// Changes the query, keeping the current filters.
	pub fn set_query(&mut self, query: impl Into<String>) {
		let filters = self.filters.clone();
		self.set_input(query, filters);
	}

	/// Changes the filters, keeping the current query.
	pub fn set_filters(&mut self, filters: L::Filters) {
		let query = self.query.clone();
		self.set_input(query, filters);
	}

	/// Re-runs the gate/debounce cycle for the current input, e.g. to retry
	/// after a failure.
	pub fn refresh(&mut self) {
		if self.disposed {
			return;
		}
		self.schedule();
	}

	/// Cancels pending work and freezes the state.
	///
	/// Responses that arrive afterwards are discarded.
	pub fn dispose(&mut self) {
		if self.disposed {
			return;
		}
		self.disposed = true;
		self.cancel_pending();
		let generation = self.clock.next();
		self.state.send_modify(|state| {
			state.loading = false;
			state.phase = Phase::Disposed;
			state.generation = generation;
		});
		debug!(generation, "typeahead.disposed");
	}

	fn cancel_pending(&mut self) {
		if let Some(pending) = self.pending.take() {
			pending.cancel();
		}
	}

	fn schedule(&mut self) {
		self.cancel_pending();
		let generation = self.clock.next();

		if !self.config.accepts(&self.query) {
			self.state.send_replace(TypeaheadState::idle(generation));
			trace!(generation, "typeahead.gated");
			return;
		}

		self.state.send_modify(|state| {
			state.loading = true;
			state.error = None;
			state.phase = Phase::Debouncing;
			state.generation = generation;
		});

		let token = GenerationToken::new(generation);
		self.pending = Some(token.clone());

		debug!(
			generation,
			query = %self.query,
			debounce_ms = u64::try_from(self.config.debounce.as_millis()).unwrap_or(u64::MAX),
			"typeahead.scheduled"
		);

		let scheduled = ScheduledLookup {
			token,
			lookup: Arc::clone(&self.lookup),
			query: self.query.clone(),
			filters: self.filters.clone(),
			limit: self.config.limit,
			debounce: self.config.debounce,
			state: Arc::clone(&self.state),
			worker_runtime: self.worker_runtime.clone(),
		};
		self.worker_runtime.spawn(TaskClass::Interactive, scheduled.run());
	}
}

impl<L: Lookup> Drop for TypeaheadController<L> {
	fn drop(&mut self) {
		self.dispose();
	}
}

/// One debounced lookup, owned by its spawned task.
struct ScheduledLookup<L: Lookup> {
	token: GenerationToken,
	lookup: Arc<L>,
	query: String,
	filters: L::Filters,
	limit: usize,
	debounce: Duration,
	state: Arc<watch::Sender<TypeaheadState<L::Item>>>,
	worker_runtime: WorkerRuntime,
}

impl<L: Lookup> ScheduledLookup<L> {
	async fn run(self) {
		let generation = self.token.generation();

		if self.debounce > Duration::ZERO {
			tokio::select! {
				_ = self.token.cancelled() => {
					trace!(generation, "typeahead.debounce_cancelled");
					return;
				}
				_ = sleep(self.debounce) => {}
			}
		} else if self.token.is_cancelled() {
			return;
		}

		let started = self.state.send_if_modified(|state| {
			if state.generation != generation || state.is_disposed() {
				return false;
			}
			state.phase = Phase::Loading;
			true
		});
		if !started {
			trace!(generation, "typeahead.superseded_before_fire");
			return;
		}

		debug!(generation, query = %self.query, limit = self.limit, "typeahead.lookup");

		// The lookup runs in its own task so a panicking collaborator turns
		// into an error state instead of a stuck `loading`.
		let lookup = Arc::clone(&self.lookup);
		let query = self.query.clone();
		let filters = self.filters.clone();
		let limit = self.limit;
		let joined = self
			.worker_runtime
			.spawn(TaskClass::Interactive, async move { lookup.lookup(&query, &filters, limit).await })
			.await;

		let outcome = match joined {
			Ok(outcome) => outcome,
			Err(err) => Err(LookupError::new(join_error_panic_message(err).unwrap_or_default())),
		};

		if let Err(err) = &outcome {
			warn!(generation, query = %self.query, error = %err, "typeahead.lookup_failed");
		}

		self.publish(outcome);
	}

	fn publish(&self, outcome: Result<Vec<L::Item>, LookupError>) {
		let generation = self.token.generation();
		let applied = self.state.send_if_modified(|state| {
			if state.generation != generation || state.is_disposed() {
				return false;
			}
			match outcome {
				Ok(results) => {
					state.results = results;
					state.error = None;
					state.phase = Phase::Settled(Outcome::Success);
				}
				Err(err) => {
					state.results.clear();
					state.error = Some(err.user_message().to_owned());
					state.phase = Phase::Settled(Outcome::Error);
				}
			}
			state.loading = false;
			true
		});

		if applied {
			debug!(generation, "typeahead.published");
		} else {
			trace!(generation, "typeahead.stale_response_dropped");
		}
	}
}
