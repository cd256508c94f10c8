use formsmith::Screen;
use formsmith::ui::style::DEFAULT_THEME;
use serde::Deserialize;

use super::super::resolved::{ConfigError, ConfigSources};
use super::super::util::non_blank;
use crate::cli::CliArgs;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) template_name: Option<String>,
	pub(super) initial_query: Option<String>,
	pub(super) theme: Option<String>,
	pub(super) start_screen: Option<String>,
}

pub(super) struct UiResolution {
	pub(super) template_name: String,
	pub(super) initial_query: Option<String>,
	pub(super) theme: String,
	pub(super) start_screen: Screen,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(name) = cli.template_name.clone() {
			self.template_name = Some(name);
		}
		if let Some(query) = cli.initial_query.clone() {
			self.initial_query = Some(query);
		}
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(screen) = cli.start_screen {
			self.start_screen = Some(screen.as_str().to_string());
		}
	}

	pub(super) fn finalize(self, sources: &ConfigSources) -> Result<UiResolution, ConfigError> {
		let start_screen = match non_blank(self.start_screen) {
			Some(raw) => raw.parse::<Screen>().map_err(|err| {
				ConfigError::invalid(
					"ui.start_screen",
					raw.clone(),
					sources.source_for_start_screen(),
					err.to_string(),
				)
			})?,
			None => Screen::default(),
		};
		let theme = non_blank(self.theme)
			.map(|theme| theme.trim().to_string())
			.unwrap_or_else(|| DEFAULT_THEME.to_string());

		Ok(UiResolution {
			template_name: self.template_name.unwrap_or_default(),
			initial_query: non_blank(self.initial_query),
			theme,
			start_screen,
		})
	}
}
