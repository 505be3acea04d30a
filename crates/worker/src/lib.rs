//! Worker primitives for the annuaire query pipeline.
//!
//! Everything asynchronous in the workspace is spawned through this crate so
//! that tasks carry a [`TaskClass`] in their trace events and still run when
//! the caller has no ambient tokio runtime. The generation types in
//! [`token`] are what the typeahead controller uses to tell current work
//! from stale work.

mod class;
mod panic;
mod runtime;
mod spawn;
pub mod token;

#[cfg(test)]
mod panic_tests;

pub use class::TaskClass;
pub use panic::join_error_panic_message;
pub use runtime::WorkerRuntime;
pub use spawn::spawn;
pub use token::{GenerationClock, GenerationToken};
