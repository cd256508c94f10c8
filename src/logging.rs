//! File-backed `tracing` setup.
//!
//! The terminal belongs to the UI while the application runs, so events are
//! appended to `formsmith.log` in the cache directory instead of stderr.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::app_dirs;

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "FORMSMITH_LOG";
const LOG_FILE: &str = "formsmith.log";

/// Directive used when [`LOG_ENV`] is unset or invalid.
#[must_use]
pub fn default_directive(verbose: bool) -> &'static str {
	if verbose {
		"formsmith=debug,formsmith_core=debug"
	} else {
		"formsmith=info,formsmith_core=info"
	}
}

/// Install the global subscriber writing into the cache directory.
pub fn initialize(verbose: bool) -> Result<PathBuf> {
	let dir = app_dirs::get_cache_dir()?;
	initialize_in(&dir, verbose)
}

/// Install the global subscriber writing into `dir`, returning the log path.
pub fn initialize_in(dir: &Path, verbose: bool) -> Result<PathBuf> {
	fs::create_dir_all(dir)
		.with_context(|| format!("failed to create log directory {}", dir.display()))?;
	let path = dir.join(LOG_FILE);
	let file = File::options()
		.create(true)
		.append(true)
		.open(&path)
		.with_context(|| format!("failed to open log file {}", path.display()))?;

	let filter = EnvFilter::try_from_env(LOG_ENV)
		.unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

	tracing_subscriber::registry()
		.with(filter)
		.with(
			fmt::layer()
				.with_writer(Mutex::new(file))
				.with_ansi(false)
				.with_target(false)
				.compact(),
		)
		.try_init()
		.context("failed to install the log subscriber")?;

	Ok(path)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn verbose_raises_default_level() {
		assert!(default_directive(true).contains("debug"));
		assert!(default_directive(false).contains("info"));
	}

	#[test]
	fn log_file_is_created_in_directory() {
		let dir = tempfile::tempdir().expect("tempdir");
		let nested = dir.path().join("logs");
		// A subscriber may already be installed by another test; the file
		// must exist either way.
		let _ = initialize_in(&nested, false);
		assert!(nested.join(LOG_FILE).exists());
	}
}
