use ratatui::style::{Color, Modifier, Style};

use super::Theme;

pub const DEFAULT_THEME: &str = "slate";

const SLATE: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.bg(Color::Rgb(15, 23, 42)),
	row_highlight: Style::new()
		.bg(Color::Rgb(30, 41, 59))
		.fg(Color::Rgb(250, 204, 21)),
	prompt: Style::new().fg(Color::LightCyan),
	empty: Style::new().fg(Color::DarkGray),
	highlight: Style::new()
		.fg(Color::Yellow)
		.add_modifier(Modifier::BOLD),
	accent: Style::new().fg(Color::Rgb(56, 189, 248)),
	error: Style::new().fg(Color::Rgb(248, 113, 113)),
	drag: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(56, 189, 248)),
};

const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(226, 232, 240)),
	row_highlight: Style::new()
		.bg(Color::Rgb(200, 200, 200))
		.fg(Color::Rgb(120, 120, 0)),
	prompt: Style::new().fg(Color::Rgb(0, 102, 153)),
	empty: Style::new().fg(Color::Rgb(100, 100, 100)),
	highlight: Style::new()
		.fg(Color::Rgb(120, 120, 0))
		.add_modifier(Modifier::BOLD),
	accent: Style::new().fg(Color::Rgb(2, 132, 199)),
	error: Style::new().fg(Color::Rgb(185, 28, 28)),
	drag: Style::new()
		.fg(Color::Rgb(255, 255, 255))
		.bg(Color::Rgb(2, 132, 199)),
};

const BUILTINS: &[(&str, Theme)] = &[(DEFAULT_THEME, SLATE), ("light", LIGHT)];

#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}

/// Look up a theme by case-insensitive name.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let name = name.trim();
	BUILTINS
		.iter()
		.find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
		.map(|(_, theme)| *theme)
}

/// Names of every built-in theme.
pub fn names() -> impl Iterator<Item = &'static str> {
	BUILTINS.iter().map(|(name, _)| *name)
}
