//! Typeahead query controller.
//!
//! [`TypeaheadController`] turns a rapidly changing `(query, filters)` pair
//! into a debounced stream of calls to a [`Lookup`] collaborator and exposes
//! the latest non-stale outcome as a [`TypeaheadState`].
//!
//! # Contract
//!
//! - Queries shorter than [`TypeaheadConfig::min_query_length`] reset the
//!   state synchronously and never reach the collaborator.
//! - Qualifying changes mark the state as loading right away and schedule a
//!   trailing-edge debounced lookup. Each change restarts the timer.
//! - Every schedule, gate and disposal advances the controller's generation.
//!   A response publishes only if its generation is still current, so a slow
//!   early response can never overwrite a faster later one.
//! - Collaborator failures become `error` text in the state. They are never
//!   returned to the caller and never retried by the controller.
//!
//! State is observable either by snapshot ([`TypeaheadController::state`])
//! or by subscription ([`TypeaheadController::subscribe`]).

mod config;
mod controller;
mod error;
mod lookup;
mod state;

pub use config::{ConfigError, DEFAULT_DEBOUNCE, DEFAULT_LIMIT, DEFAULT_MIN_QUERY_LENGTH, TypeaheadConfig};
pub use controller::TypeaheadController;
pub use error::{FALLBACK_ERROR_MESSAGE, LookupError};
pub use lookup::{FnLookup, Lookup, lookup_fn};
pub use state::{Outcome, Phase, TypeaheadState};

/// Result alias for lookup collaborators.
pub type Result<T, E = LookupError> = std::result::Result<T, E>;
