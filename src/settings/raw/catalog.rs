use formsmith_core::catalog::{DEFAULT_CATALOG_LABEL, DEFAULT_CATALOG_SIZE};
use serde::Deserialize;

use crate::cli::CliArgs;

/// Catalog generation settings as read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct CatalogSection {
	pub(super) size: Option<usize>,
	pub(super) label: Option<String>,
}

pub(super) struct CatalogResolution {
	pub(super) size: usize,
	pub(super) label: String,
}

impl CatalogSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(size) = cli.catalog_size {
			self.size = Some(size);
		}
		if let Some(label) = cli.catalog_label.clone() {
			self.label = Some(label);
		}
	}

	pub(super) fn finalize(self) -> CatalogResolution {
		CatalogResolution {
			size: self.size.unwrap_or(DEFAULT_CATALOG_SIZE),
			label: self
				.label
				.map(|label| label.trim().to_string())
				.unwrap_or_else(|| DEFAULT_CATALOG_LABEL.to_string()),
		}
	}
}
