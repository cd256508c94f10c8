//! Configuration and log directories for `formsmith`, with environment
//! overrides taking precedence over the `directories` defaults.

use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "formsmith";
const APPLICATION: &str = "formsmith";

const CONFIG_DIR_ENV: &str = "FORMSMITH_CONFIG_DIR";
const CACHE_DIR_ENV: &str = "FORMSMITH_CACHE_DIR";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for formsmith"))
}

fn dir_from_env(name: &str) -> Option<PathBuf> {
	override_dir(env::var_os(name))
}

/// An empty override counts as unset.
fn override_dir(value: Option<OsString>) -> Option<PathBuf> {
	value.filter(|value| !value.is_empty()).map(PathBuf::from)
}

/// Return the directory searched for `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Return the directory the log file is written to.
pub fn get_cache_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CACHE_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.cache_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn blank_override_falls_back() {
		assert_eq!(override_dir(None), None);
		assert_eq!(override_dir(Some(OsString::new())), None);
		assert_eq!(
			override_dir(Some(OsString::from("/tmp/formsmith"))),
			Some(PathBuf::from("/tmp/formsmith"))
		);
	}
}
