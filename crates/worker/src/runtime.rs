use std::future::Future;

use tokio::runtime::Handle;

use crate::TaskClass;
use crate::spawn::{runtime_handle, spawn_on};

/// Spawning entrypoint that can be pinned to a specific runtime.
///
/// The default instance resolves the runtime at spawn time, so a controller
/// created on one runtime keeps following whichever runtime is current when
/// it schedules work.
#[derive(Debug, Clone, Default)]
pub struct WorkerRuntime {
	handle: Option<Handle>,
}

impl WorkerRuntime {
	/// Creates a runtime that spawns on the ambient (or global) tokio runtime.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a runtime that always spawns on `handle`.
	pub fn from_handle(handle: Handle) -> Self {
		Self { handle: Some(handle) }
	}

	/// Spawns an async task.
	pub fn spawn<F>(&self, class: TaskClass, fut: F) -> tokio::task::JoinHandle<F::Output>
	where
		F: Future + Send + 'static,
		F::Output: Send + 'static,
	{
		match &self.handle {
			Some(handle) => spawn_on(handle, class, fut),
			None => spawn_on(&runtime_handle(), class, fut),
		}
	}
}
