use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Tabs};
use unicode_width::UnicodeWidthStr;

use crate::ui::state::{Focus, Screen};
use crate::ui::style::Theme;

const APP_TITLE: &str = "formsmith";

/// Render the title and the screen tabs on one row.
pub fn render_tabs(frame: &mut Frame, area: Rect, selected: Screen, theme: &Theme) {
	let title = format!("{APP_TITLE} > ");
	let title_width = UnicodeWidthStr::width(title.as_str()) as u16;
	let [title_area, tabs_area] =
		Layout::horizontal([Constraint::Length(title_width), Constraint::Fill(1)]).areas(area);

	frame.render_widget(
		Paragraph::new(title).style(theme.prompt_style()),
		title_area,
	);

	let titles = Screen::ALL
		.iter()
		.map(|screen| {
			let style = if *screen == selected {
				theme.tab_highlight_style()
			} else {
				theme.tab_inactive_style()
			};
			Line::from(Span::styled(format!(" {} ", screen.label()), style))
		})
		.collect::<Vec<_>>();
	let index = Screen::ALL
		.iter()
		.position(|screen| *screen == selected)
		.unwrap_or(0);

	let tabs = Tabs::new(titles)
		.select(index)
		.divider("")
		.padding("", " ")
		.highlight_style(theme.tab_highlight_style());
	frame.render_widget(tabs, tabs_area);
}

/// Key hints for the current interaction.
#[must_use]
pub fn key_hints(screen: Screen, focus: Focus, dialog_open: bool, dragging: bool) -> &'static str {
	match screen {
		Screen::Template if dialog_open => {
			"type to search · ↑/↓ move · Tab check · Enter add selected · Esc cancel"
		}
		Screen::Template => match focus {
			Focus::Name => "Tab next field · Ctrl+S create · Ctrl+T people · Esc quit",
			Focus::Sections => {
				"a add · d remove · J/K move · m swap · Tab next · Ctrl+S create · Esc quit"
			}
			Focus::Submit => "Enter create · Tab next field · Ctrl+T people · Esc quit",
		},
		Screen::People if dragging => "↑/↓ choose slot · Space/Enter drop · Esc cancel drag",
		Screen::People => {
			"drag ⠿ with the mouse or Space to pick up · r regenerate · Ctrl+S create · Ctrl+T template · Esc quit"
		}
	}
}

pub fn render_help(frame: &mut Frame, area: Rect, text: &str, theme: &Theme) {
	frame.render_widget(Paragraph::new(text).style(theme.empty_style()), area);
}
