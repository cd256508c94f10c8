use formsmith::Screen;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
	pub catalog_size: usize,
	pub catalog_label: String,
	pub people_rows: usize,
	/// `None` draws a fresh seed on every run.
	pub people_seed: Option<u64>,
	pub template_name: String,
	/// When set, the add dialog opens on start with this query.
	pub initial_query: Option<String>,
	pub theme: String,
	pub start_screen: Screen,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
