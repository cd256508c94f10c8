use anyhow::Result;
use formsmith_core::Direction;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};

use super::App;
use super::TemplateOutcome;
use super::state::{Focus, Screen};

impl<'a> App<'a> {
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<TemplateOutcome>> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Char('c') if ctrl => {
				info!("session cancelled");
				return Ok(Some(TemplateOutcome::Cancelled));
			}
			KeyCode::Char('s') if ctrl => return Ok(self.submit_from_anywhere()),
			KeyCode::Char('t') if ctrl && !self.form.is_dialog_open() => {
				self.set_screen(self.screen.next());
				return Ok(None);
			}
			_ => {}
		}

		match self.screen {
			Screen::Template if self.form.is_dialog_open() => {
				self.handle_dialog_key(key);
				Ok(None)
			}
			Screen::Template => Ok(self.handle_template_key(key)),
			Screen::People => Ok(self.handle_people_key(key)),
		}
	}

	/// Ctrl+S: sections checked in an open dialog are added first, an active
	/// drag is aborted, and a rejected submit lands on the template screen so
	/// the error is visible.
	fn submit_from_anywhere(&mut self) -> Option<TemplateOutcome> {
		if self.form.is_dialog_open() {
			self.add_checked();
			self.close_dialog();
		}
		self.cancel_drag();
		let outcome = self.submit();
		if outcome.is_none() {
			self.set_screen(Screen::Template);
		}
		outcome
	}

	fn handle_dialog_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Esc => self.close_dialog(),
			KeyCode::Enter => self.add_checked(),
			KeyCode::Tab => self.toggle_dialog_check(),
			KeyCode::Up => self.move_dialog_cursor(-1),
			KeyCode::Down => self.move_dialog_cursor(1),
			KeyCode::PageUp => self.move_dialog_cursor(-10),
			KeyCode::PageDown => self.move_dialog_cursor(10),
			_ => {
				if self.dialog_search.input(key) {
					self.sync_query();
				}
			}
		}
	}

	fn handle_template_key(&mut self, key: KeyEvent) -> Option<TemplateOutcome> {
		match key.code {
			KeyCode::Esc => {
				info!("session cancelled");
				return Some(TemplateOutcome::Cancelled);
			}
			KeyCode::Tab => self.set_focus(self.focus.next()),
			KeyCode::BackTab => self.set_focus(self.focus.previous()),
			_ => match self.focus {
				Focus::Name => self.handle_name_key(key),
				Focus::Sections => self.handle_sections_key(key),
				Focus::Submit => {
					if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
						return self.submit();
					}
				}
			},
		}
		None
	}

	fn handle_name_key(&mut self, key: KeyEvent) {
		match key.code {
			KeyCode::Enter | KeyCode::Down => self.set_focus(Focus::Sections),
			_ => {
				if self.name_input.input(key) {
					self.sync_name();
				}
			}
		}
	}

	fn handle_sections_key(&mut self, key: KeyEvent) {
		let shift = key.modifiers.contains(KeyModifiers::SHIFT);
		match key.code {
			KeyCode::Char('a' | '+') | KeyCode::Enter => self.open_dialog(None),
			KeyCode::Char('d') | KeyCode::Delete => self.remove_selected_section(),
			KeyCode::Char('K') => self.move_selected_section(Direction::Up),
			KeyCode::Char('J') => self.move_selected_section(Direction::Down),
			KeyCode::Up if shift => self.move_selected_section(Direction::Up),
			KeyCode::Down if shift => self.move_selected_section(Direction::Down),
			KeyCode::Char('m') => self.toggle_move_selected(),
			KeyCode::Up | KeyCode::Char('k') => self.move_sections_cursor(-1),
			KeyCode::Down | KeyCode::Char('j') => self.move_sections_cursor(1),
			_ => {}
		}
	}

	fn handle_people_key(&mut self, key: KeyEvent) -> Option<TemplateOutcome> {
		let dragging = self.drag.is_dragging();
		match key.code {
			KeyCode::Esc if dragging => {
				self.cancel_drag();
			}
			KeyCode::Esc => {
				info!("session cancelled");
				return Some(TemplateOutcome::Cancelled);
			}
			KeyCode::Char(' ') | KeyCode::Enter if dragging => {
				if let Some(reorder) = self.drop_drag() {
					debug!(from = reorder.from, to = reorder.to, "keyboard drop");
				}
			}
			KeyCode::Char(' ') | KeyCode::Enter => {
				if let Some(key) = self.selected_person_key() {
					self.begin_drag(key);
				}
			}
			KeyCode::Up if dragging => self.step_drag(Direction::Up),
			KeyCode::Down if dragging => self.step_drag(Direction::Down),
			KeyCode::Up | KeyCode::Char('k') => self.move_people_cursor(-1),
			KeyCode::Down | KeyCode::Char('j') => self.move_people_cursor(1),
			KeyCode::PageUp => self.move_people_cursor(-10),
			KeyCode::PageDown => self.move_people_cursor(10),
			KeyCode::Char('r') if !dragging => self.regenerate_people(),
			_ => {}
		}
		None
	}
}
