use tokio::task::JoinError;

/// Extracts the panic message from a failed join, if the task panicked.
///
/// Returns `None` for cancelled tasks.
pub fn join_error_panic_message(err: JoinError) -> Option<String> {
	if !err.is_panic() {
		return None;
	}
	let payload = err.into_panic();
	if let Some(msg) = payload.downcast_ref::<&'static str>() {
		return Some((*msg).to_string());
	}
	if let Some(msg) = payload.downcast_ref::<String>() {
		return Some(msg.clone());
	}
	Some("task panicked".to_string())
}
