use std::future::Future;
use std::sync::OnceLock;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::TaskClass;

pub(crate) fn runtime_handle() -> Handle {
	if let Ok(handle) = Handle::try_current() {
		return handle;
	}

	static GLOBAL_RT: OnceLock<tokio::runtime::Runtime> = OnceLock::new();
	let runtime = GLOBAL_RT.get_or_init(|| {
		tokio::runtime::Builder::new_multi_thread()
			.enable_all()
			.worker_threads(2)
			.thread_name("annuaire-worker-global")
			.build()
			.expect("failed to build annuaire-worker global tokio runtime")
	});
	runtime.handle().clone()
}

/// Spawns an async task on the ambient runtime, or on the shared global
/// runtime when called outside of one.
pub fn spawn<F>(class: TaskClass, fut: F) -> JoinHandle<F::Output>
where
	F: Future + Send + 'static,
	F::Output: Send + 'static,
{
	spawn_on(&runtime_handle(), class, fut)
}

#[allow(clippy::disallowed_methods)]
pub(crate) fn spawn_on<F>(handle: &Handle, class: TaskClass, fut: F) -> JoinHandle<F::Output>
where
	F: Future + Send + 'static,
	F::Output: Send + 'static,
{
	tracing::trace!(worker_class = class.as_str(), "worker.spawn");
	handle.spawn(fut)
}
