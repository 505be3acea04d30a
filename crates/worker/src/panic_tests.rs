use std::time::Duration;

use super::join_error_panic_message;
use crate::{TaskClass, WorkerRuntime};

#[tokio::test]
async fn lookup_panic_message_survives_the_join() {
	let handle = WorkerRuntime::new().spawn(TaskClass::Interactive, async { panic!("backend exploded") });
	let err = handle.await.unwrap_err();
	assert_eq!(join_error_panic_message(err).as_deref(), Some("backend exploded"));
}

#[tokio::test]
async fn formatted_panic_is_reported_verbatim() {
	let query = "lyon";
	let handle = WorkerRuntime::new().spawn(TaskClass::Interactive, async move {
		panic!("no city matches {query}");
	});
	let err = handle.await.unwrap_err();
	assert_eq!(join_error_panic_message(err).as_deref(), Some("no city matches lyon"));
}

#[tokio::test]
async fn opaque_payload_gets_a_generic_message() {
	let handle = WorkerRuntime::new().spawn(TaskClass::Background, async {
		std::panic::panic_any(42_u32);
	});
	let err = handle.await.unwrap_err();
	assert_eq!(join_error_panic_message(err).as_deref(), Some("task panicked"));
}

#[tokio::test]
async fn aborted_task_is_not_a_panic() {
	let handle = WorkerRuntime::new().spawn(TaskClass::Background, async {
		tokio::time::sleep(Duration::from_secs(60)).await;
	});
	handle.abort();
	let err = handle.await.unwrap_err();
	assert!(join_error_panic_message(err).is_none());
}
