use ratatui::style::{Color, Modifier, Style};

/// A theme containing styles for the UI elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
	/// Table headers and the active tab.
	pub header: Style,
	/// The selected table row.
	pub row_highlight: Style,
	/// Field labels and prompts.
	pub prompt: Style,
	/// Placeholder and empty-state text.
	pub empty: Style,
	/// Search matches inside list entries.
	pub highlight: Style,
	/// Focused borders and enabled buttons.
	pub accent: Style,
	/// Validation messages.
	pub error: Style,
	/// The row being dragged.
	pub drag: Style,
}

impl Theme {
	#[must_use]
	pub fn header_style(&self) -> Style {
		self.header
	}

	#[must_use]
	pub fn header_bg(&self) -> Color {
		self.header.bg.unwrap_or(Color::Reset)
	}

	#[must_use]
	pub fn header_fg(&self) -> Color {
		self.header.fg.unwrap_or(Color::Reset)
	}

	#[must_use]
	pub fn row_highlight_style(&self) -> Style {
		self.row_highlight
	}

	#[must_use]
	pub fn prompt_style(&self) -> Style {
		self.prompt
	}

	#[must_use]
	pub fn empty_style(&self) -> Style {
		self.empty
	}

	#[must_use]
	pub fn highlight_style(&self) -> Style {
		self.highlight
	}

	#[must_use]
	pub fn error_style(&self) -> Style {
		self.error
	}

	#[must_use]
	pub fn drag_style(&self) -> Style {
		self.drag
	}

	/// Returns the style for inactive tabs.
	#[must_use]
	pub fn tab_inactive_style(&self) -> Style {
		Style::new()
			.fg(self.header.fg.unwrap_or(Color::Reset))
			.bg(self.row_highlight.bg.unwrap_or(Color::Reset))
	}

	/// Returns the style for the selected tab.
	#[must_use]
	pub fn tab_highlight_style(&self) -> Style {
		Style::new()
			.bg(self.header.bg.unwrap_or(Color::Reset))
			.add_modifier(Modifier::BOLD)
	}

	#[must_use]
	pub fn border_style(&self, focused: bool) -> Style {
		if focused { self.accent } else { self.empty }
	}

	#[must_use]
	pub fn button_style(&self, focused: bool, enabled: bool) -> Style {
		match (enabled, focused) {
			(false, _) => self.empty,
			(true, true) => self.accent.add_modifier(Modifier::REVERSED | Modifier::BOLD),
			(true, false) => self.accent,
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		super::default_theme()
	}
}
