use formsmith::ui::style;

use super::{ConfigError, ConfigSources, ResolvedConfig};

/// Upper bound for generated catalogs and people tables.
pub(crate) const MAX_GENERATED_ROWS: usize = 100_000;

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	check_row_count(
		"catalog.size",
		config.catalog_size,
		|| sources.source_for_catalog_size(),
	)?;
	check_row_count(
		"people.rows",
		config.people_rows,
		|| sources.source_for_people_rows(),
	)?;

	if config.catalog_label.trim().is_empty() {
		return Err(ConfigError::invalid(
			"catalog.label",
			config.catalog_label.clone(),
			sources.source_for_catalog_label(),
			"must not be blank",
		));
	}

	if style::by_name(&config.theme).is_none() {
		let known = style::names().collect::<Vec<_>>().join(", ");
		return Err(ConfigError::invalid(
			"ui.theme",
			config.theme.clone(),
			sources.source_for_theme(),
			format!("unknown theme (expected one of: {known})"),
		));
	}

	Ok(())
}

fn check_row_count(
	key: &'static str,
	value: usize,
	origin: impl FnOnce() -> super::SettingSource,
) -> Result<(), ConfigError> {
	if value == 0 {
		return Err(ConfigError::invalid(
			key,
			value.to_string(),
			origin(),
			"must be greater than zero",
		));
	}
	if value > MAX_GENERATED_ROWS {
		return Err(ConfigError::invalid(
			key,
			value.to_string(),
			origin(),
			format!("must be at most {MAX_GENERATED_ROWS}"),
		));
	}
	Ok(())
}
