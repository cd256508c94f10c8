use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod catalog;
mod people;
mod ui;

use catalog::CatalogSection;
use people::PeopleSection;
use ui::UiSection;

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	catalog: CatalogSection,
	people: PeopleSection,
	ui: UiSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.catalog.apply_cli_overrides(cli);
		self.people.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let sources = ConfigSources {
			catalog_size: detect_source(
				cli.catalog_size.is_some(),
				self.catalog.size.is_some(),
				"FORMSMITH__CATALOG__SIZE",
				"--catalog-size",
				"catalog.size",
			),
			catalog_label: detect_source(
				cli.catalog_label.is_some(),
				self.catalog.label.is_some(),
				"FORMSMITH__CATALOG__LABEL",
				"--catalog-label",
				"catalog.label",
			),
			people_rows: detect_source(
				cli.people_rows.is_some(),
				self.people.rows.is_some(),
				"FORMSMITH__PEOPLE__ROWS",
				"--people",
				"people.rows",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				"FORMSMITH__UI__THEME",
				"--theme",
				"ui.theme",
			),
			start_screen: detect_source(
				cli.start_screen.is_some(),
				self.ui.start_screen.is_some(),
				"FORMSMITH__UI__START_SCREEN",
				"--screen",
				"ui.start_screen",
			),
		};

		let catalog = self.catalog.finalize();
		let people = self.people.finalize();
		let ui = self.ui.finalize(&sources).map_err(Error::new)?;

		let config = ResolvedConfig {
			catalog_size: catalog.size,
			catalog_label: catalog.label,
			people_rows: people.rows,
			people_seed: people.seed,
			template_name: ui.template_name,
			initial_query: ui.initial_query,
			theme: ui.theme,
			start_screen: ui.start_screen,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_var: &'static str,
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if env::var_os(env_var).is_some() {
		return Some(SettingSource::Environment(env_var));
	}

	Some(SettingSource::ConfigKey(key))
}
