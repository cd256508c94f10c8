use anyhow::Result;
use formsmith::{Catalog, PeopleOptions, TemplateOutcome, TemplateUi};
use tracing::info;

use crate::settings::ResolvedConfig;

/// Coordinates building and running the interactive template editor.
pub(crate) struct TemplateWorkflow {
	template_ui: TemplateUi,
}

impl TemplateWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Self {
		Self {
			template_ui: build_ui(config),
		}
	}

	pub(crate) fn run(self) -> Result<TemplateOutcome> {
		let outcome = self.template_ui.run()?;
		match &outcome {
			TemplateOutcome::Submitted(payload) => {
				info!(name = %payload.name, sections = payload.sections.len(), "template submitted");
			}
			TemplateOutcome::Cancelled => info!("template creation cancelled"),
		}
		Ok(outcome)
	}
}

/// Translate resolved configuration into a configured [`TemplateUi`].
fn build_ui(config: ResolvedConfig) -> TemplateUi {
	let ResolvedConfig {
		catalog_size,
		catalog_label,
		people_rows,
		people_seed,
		template_name,
		initial_query,
		theme,
		start_screen,
	} = config;

	let catalog = Catalog::generated(&catalog_label, catalog_size);
	let mut ui = TemplateUi::new(catalog)
		.with_name(template_name)
		.with_theme_name(&theme)
		.with_start_screen(start_screen)
		.with_people(PeopleOptions {
			rows: people_rows,
			seed: people_seed,
		});
	if let Some(query) = initial_query {
		ui = ui.with_initial_query(query);
	}
	ui
}

#[cfg(test)]
mod tests {
	use formsmith::Screen;

	use super::*;

	#[test]
	fn resolved_config_reaches_the_app() {
		let config = ResolvedConfig {
			catalog_size: 3,
			catalog_label: "Part".into(),
			people_rows: 2,
			people_seed: Some(4),
			template_name: "Manual".into(),
			initial_query: Some("Part 3".into()),
			theme: "light".into(),
			start_screen: Screen::Template,
		};

		let app = build_ui(config).build();
		assert_eq!(app.form.name(), "Manual");
		assert_eq!(app.form.catalog().items(), ["Part 1", "Part 2", "Part 3"]);
		assert!(app.form.is_dialog_open());
		assert_eq!(app.people.len(), 2);
		assert_eq!(app.seed(), 4);
	}
}
