use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Margin};

use super::App;
use super::components::tabs::key_hints;
use super::components::{render_dialog, render_help, render_people, render_tabs, render_template};
use super::state::Screen;

impl<'a> App<'a> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});
		let [tabs_area, body_area, help_area] = Layout::vertical([
			Constraint::Length(1),
			Constraint::Min(1),
			Constraint::Length(1),
		])
		.areas(area);

		render_tabs(frame, tabs_area, self.screen, &self.theme);
		match self.screen {
			Screen::Template => {
				render_template(frame, body_area, self);
				if self.form.is_dialog_open() {
					render_dialog(frame, body_area, self);
				}
			}
			Screen::People => render_people(frame, body_area, self),
		}

		let hints = key_hints(
			self.screen,
			self.focus,
			self.form.is_dialog_open(),
			self.drag.is_dragging(),
		);
		render_help(frame, help_area, hints, &self.theme);
	}
}

#[cfg(test)]
mod tests {
	use formsmith_core::{Catalog, TemplateAction, TemplateForm};
	use insta::assert_snapshot;
	use ratatui::Terminal;
	use ratatui::backend::TestBackend;

	use super::*;
	use crate::ui::state::{Focus, PeopleOptions};

	fn app() -> App<'static> {
		App::new(
			TemplateForm::new(Catalog::generated("Section", 8)),
			PeopleOptions {
				rows: 5,
				seed: Some(3),
			},
		)
	}

	fn named_app(sections: usize) -> App<'static> {
		let mut form = TemplateForm::new(Catalog::generated("Section", sections));
		form.apply(TemplateAction::SetName("Onboarding".into()));
		App::new(
			form,
			PeopleOptions {
				rows: 2,
				seed: Some(3),
			},
		)
	}

	fn render(app: &mut App<'_>) -> String {
		render_sized(app, 90, 24)
	}

	fn render_sized(app: &mut App<'_>, width: u16, height: u16) -> String {
		let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
		terminal.draw(|frame| app.draw(frame)).expect("draw");
		terminal.backend().to_string()
	}

	#[test]
	fn template_screen_snapshot() {
		let mut app = named_app(5);
		app.open_dialog(None);
		app.toggle_dialog_check();
		app.move_dialog_cursor(1);
		app.toggle_dialog_check();
		app.add_checked();
		assert_snapshot!(render_sized(&mut app, 50, 14), @r#"
		" formsmith >  Template   People                   "
		" ┌ Create Template ─────────────────────────────┐ "
		" │┌Template Name───────────────────────────────┐│ "
		" ││Onboarding                                  ││ "
		" │└────────────────────────────────────────────┘│ "
		" │Sections (2)                  [a] Add Sections│ "
		" │  Section Name               Order   Actions  │ "
		" │ ──────────────────────────────────────────── │ "
		" │▶ Section 1                  1       ↕  ✕     │ "
		" │  Section 2                  2       ↕  ✕     │ "
		" │Added 2 section(s)                            │ "
		" │              [ Create Template ]             │ "
		" └──────────────────────────────────────────────┘ "
		" a add · d remove · J/K move · m swap · Tab next  "
		"#);
	}

	#[test]
	fn dialog_snapshot() {
		let mut app = named_app(12);
		app.open_dialog(Some("1"));
		app.toggle_dialog_check();
		assert_snapshot!(render_sized(&mut app, 82, 22), @r#"
		" formsmith >  Template   People                                                   "
		" ┌ Create Template ─────────────────────────────────────────────────────────────┐ "
		" │┌Template Name───────────────────────────────────────────────────────────────┐│ "
		" ││Onboarding┌ Add Sections ────────────────────────────────────────┐          ││ "
		" │└──────────│┌Search──────────────────────────────────────────────┐│──────────┘│ "
		" │Sections (0││1                                                   ││dd Sections│ "
		" │  Section N│└────────────────────────────────────────────────────┘│  Actions  │ "
		" │ ──────────│▶ [x]  Section 1                                      │────────── │ "
		" │           │  [ ]  Section 10                                     │           │ "
		" │           │  [ ]  Section 11                                     │           │ "
		" │           │  [ ]  Section 12                                     │           │ "
		" │           │                                                      │           │ "
		" │           │                                                      │           │ "
		" │           │                                                      │           │ "
		" │           │                                                      │           │ "
		" │           │                                                      │           │ "
		" │           │                                                      │           │ "
		" │           │1 section(s) selected    [Enter] Add Selected Sections│           │ "
		" │           └──────────────────────────────────────────────────────┘           │ "
		" │                              [ Create Template ]                             │ "
		" └──────────────────────────────────────────────────────────────────────────────┘ "
		" type to search · ↑/↓ move · Tab check · Enter add selected · Esc cancel          "
		"#);
	}

	#[test]
	fn template_screen_shows_empty_sections() {
		let mut app = app();
		let view = render(&mut app);
		assert!(view.contains("Create Template"));
		assert!(view.contains("Template Name"));
		assert!(view.contains("Sections (0)"));
		assert!(view.contains("No sections yet"));
	}

	#[test]
	fn dialog_overlays_filtered_candidates() {
		let mut app = app();
		app.open_dialog(Some("Section 7"));
		let view = render(&mut app);
		assert!(view.contains("Add Sections"));
		assert!(view.contains("Section 7"));
		assert!(!view.contains("Section 6"));
		assert!(view.contains("0 section(s) selected"));
	}

	#[test]
	fn added_sections_are_listed_with_order() {
		let mut app = app();
		app.open_dialog(None);
		app.toggle_dialog_check();
		app.move_dialog_cursor(1);
		app.toggle_dialog_check();
		app.add_checked();
		assert_eq!(app.focus, Focus::Sections);
		let view = render(&mut app);
		assert!(view.contains("Sections (2)"));
		assert!(view.contains("Section 1"));
		assert!(view.contains("Section 2"));
		assert!(view.contains("Added 2 section(s)"));
	}

	#[test]
	fn people_screen_lists_every_row() {
		let mut app = app();
		app.set_screen(Screen::People);
		let view = render(&mut app);
		assert!(view.contains("First Name"));
		assert!(view.contains("Profile Progress"));
		for person in &app.people {
			assert!(view.contains(&person.first_name));
		}
		assert!(app.people_area.height > 0);
	}
}
