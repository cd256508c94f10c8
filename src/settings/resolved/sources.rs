use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(&'static str),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from, for error messages.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	pub(crate) catalog_size: Option<SettingSource>,
	pub(crate) catalog_label: Option<SettingSource>,
	pub(crate) people_rows: Option<SettingSource>,
	pub(crate) theme: Option<SettingSource>,
	pub(crate) start_screen: Option<SettingSource>,
}

impl ConfigSources {
	pub(crate) fn source_for_catalog_size(&self) -> SettingSource {
		self.catalog_size
			.clone()
			.unwrap_or(SettingSource::ConfigKey("catalog.size"))
	}

	pub(crate) fn source_for_catalog_label(&self) -> SettingSource {
		self.catalog_label
			.clone()
			.unwrap_or(SettingSource::ConfigKey("catalog.label"))
	}

	pub(crate) fn source_for_people_rows(&self) -> SettingSource {
		self.people_rows
			.clone()
			.unwrap_or(SettingSource::ConfigKey("people.rows"))
	}

	pub(crate) fn source_for_theme(&self) -> SettingSource {
		self.theme
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.theme"))
	}

	pub(crate) fn source_for_start_screen(&self) -> SettingSource {
		self.start_screen
			.clone()
			.unwrap_or(SettingSource::ConfigKey("ui.start_screen"))
	}
}
