use std::fs::OpenOptions;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Environment variable redirecting logs to a per-process file.
const LOG_DIR_ENV: &str = "ANNUAIRE_LOG_DIR";

fn default_filter(verbose: bool) -> EnvFilter {
	EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("annuaire=debug,annuaire_typeahead=debug,annuaire_api=debug,warn")
		} else {
			EnvFilter::new("annuaire=info,annuaire_typeahead=info,annuaire_api=info,warn")
		}
	})
}

/// Installs the global subscriber. Logs go to stderr so stdout stays
/// reserved for results.
pub fn setup_tracing(verbose: bool) {
	if let Some(log_dir) = std::env::var(LOG_DIR_ENV).ok().map(PathBuf::from)
		&& std::fs::create_dir_all(&log_dir).is_ok()
	{
		let log_path = log_dir.join(format!("annuaire.{}.log", std::process::id()));

		if let Ok(file) = OpenOptions::new().create(true).append(true).open(&log_path) {
			let file_layer = tracing_subscriber::fmt::layer()
				.with_writer(file)
				.with_ansi(false)
				.with_target(true);

			tracing_subscriber::registry()
				.with(default_filter(verbose))
				.with(file_layer)
				.init();

			tracing::info!(path = ?log_path, "tracing initialized");
			return;
		}
	}

	tracing_subscriber::registry()
		.with(default_filter(verbose))
		.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
		.init();
}
