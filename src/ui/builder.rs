use anyhow::Result;
use formsmith_core::{Catalog, TemplateAction, TemplateForm};

use super::state::{PeopleOptions, Screen};
use super::style::{self, Theme};
use super::{App, TemplateOutcome};

/// A small builder for configuring the interactive template editor before
/// running it.
pub struct TemplateUi {
	catalog: Catalog,
	name: Option<String>,
	initial_query: Option<String>,
	theme: Option<Theme>,
	start_screen: Option<Screen>,
	people: PeopleOptions,
}

impl TemplateUi {
	/// Create an editor offering sections from `catalog`.
	pub fn new(catalog: Catalog) -> Self {
		Self {
			catalog,
			name: None,
			initial_query: None,
			theme: None,
			start_screen: None,
			people: PeopleOptions::default(),
		}
	}

	pub fn with_name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Open the add dialog on start with `query` already typed.
	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.initial_query = Some(query.into());
		self
	}

	/// Unknown names keep the default theme.
	pub fn with_theme_name(mut self, name: &str) -> Self {
		if let Some(theme) = style::by_name(name) {
			self.theme = Some(theme);
		}
		self
	}

	pub fn with_start_screen(mut self, screen: Screen) -> Self {
		self.start_screen = Some(screen);
		self
	}

	pub fn with_people(mut self, people: PeopleOptions) -> Self {
		self.people = people;
		self
	}

	/// Build the [`App`] without touching the terminal.
	pub fn build(self) -> App<'static> {
		let mut form = TemplateForm::new(self.catalog);
		if let Some(name) = self.name {
			form.apply(TemplateAction::SetName(name));
		}
		let mut app = App::new(form, self.people);
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		if let Some(query) = self.initial_query.filter(|query| !query.is_empty()) {
			app.open_dialog(Some(&query));
		}
		if let Some(screen) = self.start_screen {
			app.set_screen(screen);
		}
		app
	}

	/// Run the interactive editor with the configured options.
	pub fn run(self) -> Result<TemplateOutcome> {
		self.build().run()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn build_applies_every_option() {
		let app = TemplateUi::new(Catalog::generated("Chapter", 4))
			.with_name("Handbook")
			.with_initial_query("2")
			.with_theme_name("light")
			.with_start_screen(Screen::People)
			.with_people(PeopleOptions {
				rows: 7,
				seed: Some(1),
			})
			.build();

		assert_eq!(app.form.name(), "Handbook");
		assert_eq!(app.name_input.text(), "Handbook");
		let dialog = app.form.open_dialog().expect("dialog open");
		assert_eq!(dialog.query(), "2");
		assert_eq!(app.available_names(), vec!["Chapter 2"]);
		assert_eq!(app.theme, style::by_name("light").expect("theme"));
		assert_eq!(app.screen, Screen::People);
		assert_eq!(app.people.len(), 7);
		assert_eq!(app.seed(), 1);
	}

	#[test]
	fn unknown_theme_keeps_default() {
		let app = TemplateUi::new(Catalog::generated("Section", 1))
			.with_theme_name("neon")
			.build();
		assert_eq!(app.theme, Theme::default());
	}
}
