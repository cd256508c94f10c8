use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, File};
use formsmith::app_dirs;

use crate::cli::CliArgs;

/// Prefix of environment overrides, e.g. `FORMSMITH__CATALOG__SIZE`.
pub(super) const ENV_PREFIX: &str = "FORMSMITH";

/// Build a [`Config`] instance by combining default locations with CLI overrides.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix(ENV_PREFIX)
			.separator("__")
			.try_parsing(true),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".formsmith.toml"));
		files.push(current_dir.join("formsmith.toml"));
	}

	files
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;
	use tempfile::tempdir;

	use super::*;

	#[test]
	fn default_files_include_current_directory_variants() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".formsmith.toml")));
		assert!(files.iter().any(|path| path.ends_with("formsmith.toml")));
	}

	#[test]
	fn later_files_override_earlier_ones() {
		let dir = tempdir().expect("tempdir");
		let first = dir.path().join("first.toml");
		let second = dir.path().join("second.toml");
		fs::write(&first, "[catalog]\nsize = 10\nlabel = \"Part\"\n").expect("write");
		fs::write(&second, "[catalog]\nsize = 20\n").expect("write");
		let cli = CliArgs::parse_from([
			"formsmith",
			"--no-config",
			"-c",
			first.to_str().expect("utf-8"),
			"-c",
			second.to_str().expect("utf-8"),
		]);

		let config = build_config(&cli).expect("builds");
		assert_eq!(config.get_int("catalog.size").expect("size"), 20);
		assert_eq!(config.get_string("catalog.label").expect("label"), "Part");
	}
}
