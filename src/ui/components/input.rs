use ratatui::Frame;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders};
use tui_textarea::{CursorMove, TextArea};

use crate::ui::style::Theme;

/// Single-line text field backed by `tui-textarea`.
pub struct TextInput<'a> {
	textarea: TextArea<'a>,
	focused: bool,
}

impl<'a> TextInput<'a> {
	pub fn new(initial: impl Into<String>, placeholder: &str) -> Self {
		let mut textarea = TextArea::new(vec![initial.into()]);
		textarea.move_cursor(CursorMove::End);
		textarea.set_cursor_line_style(Style::default());
		textarea.set_placeholder_text(placeholder);
		let mut input = Self {
			textarea,
			focused: false,
		};
		input.set_focused(false);
		input
	}

	/// Current contents.
	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Feed a key press to the field. Returns `true` when the text changed.
	///
	/// Keys that would insert a line break are ignored.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		let newline = matches!(key.code, KeyCode::Enter)
			|| (key.modifiers.contains(KeyModifiers::CONTROL)
				&& matches!(key.code, KeyCode::Char('m') | KeyCode::Char('j')));
		if newline {
			return false;
		}
		self.textarea.input(key)
	}

	/// Show or hide the cursor.
	pub fn set_focused(&mut self, focused: bool) {
		self.focused = focused;
		let cursor = if focused {
			Style::default().add_modifier(Modifier::REVERSED)
		} else {
			Style::default()
		};
		self.textarea.set_cursor_style(cursor);
	}

	/// Render inside a bordered box titled `title`.
	pub fn render(&mut self, frame: &mut Frame, area: Rect, title: &str, theme: &Theme) {
		let block = Block::default()
			.borders(Borders::ALL)
			.border_style(theme.border_style(self.focused))
			.title(title.to_string())
			.title_style(theme.prompt_style());
		self.textarea.set_block(block);
		self.textarea.set_placeholder_style(theme.empty_style());
		frame.render_widget(&self.textarea, area);
	}
}

#[cfg(test)]
mod tests {
	use ratatui::crossterm::event::KeyEventKind;

	use super::*;

	fn press(code: KeyCode) -> KeyEvent {
		KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Press)
	}

	#[test]
	fn typing_updates_text() {
		let mut input = TextInput::new("", "Search");
		assert!(input.input(press(KeyCode::Char('4'))));
		assert!(input.input(press(KeyCode::Char('2'))));
		assert_eq!(input.text(), "42");
		assert!(input.input(press(KeyCode::Backspace)));
		assert_eq!(input.text(), "4");
	}

	#[test]
	fn enter_never_adds_lines() {
		let mut input = TextInput::new("Weekly", "Name");
		assert!(!input.input(press(KeyCode::Enter)));
		assert_eq!(input.text(), "Weekly");
	}

	#[test]
	fn initial_text_keeps_cursor_at_end() {
		let mut input = TextInput::new("Week", "Name");
		input.input(press(KeyCode::Char('s')));
		assert_eq!(input.text(), "Weeks");
	}
}
