use serde::Deserialize;

use crate::cli::CliArgs;

pub(super) const DEFAULT_PEOPLE_ROWS: usize = 20;

/// People table settings as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct PeopleSection {
	pub(super) rows: Option<usize>,
	pub(super) seed: Option<u64>,
}

pub(super) struct PeopleResolution {
	pub(super) rows: usize,
	pub(super) seed: Option<u64>,
}

impl PeopleSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(rows) = cli.people_rows {
			self.rows = Some(rows);
		}
		if let Some(seed) = cli.seed {
			self.seed = Some(seed);
		}
	}

	pub(super) fn finalize(self) -> PeopleResolution {
		PeopleResolution {
			rows: self.rows.unwrap_or(DEFAULT_PEOPLE_ROWS),
			seed: self.seed,
		}
	}
}
