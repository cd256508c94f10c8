use formsmith_core::catalog::match_range;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, HighlightSpacing, Paragraph, Row, Table};

use super::table::{HIGHLIGHT_SYMBOL, TABLE_COLUMN_SPACING};
use crate::ui::App;
use crate::ui::style::Theme;

const DIALOG_TITLE: &str = " Add Sections ";
const SEARCH_LABEL: &str = "Search";
const ADD_SELECTED: &str = "[Enter] Add Selected Sections";
const NO_MATCHES: &str = "No matching sections";

/// Render the add dialog centred over `area`. Does nothing while closed.
pub fn render_dialog(frame: &mut Frame, area: Rect, app: &mut App<'_>) {
	let Some(dialog) = app.form.open_dialog() else {
		return;
	};
	let theme = app.theme;
	let query = dialog.query().to_string();
	let checked_count = dialog.checked().len();
	let rows = app
		.available_names()
		.into_iter()
		.map(|name| {
			let checked = dialog.checked().contains(name);
			candidate_row(name, &query, checked, &theme)
		})
		.collect::<Vec<_>>();
	let is_empty = rows.is_empty();

	let popup = popup_area(area, 70, 80);
	frame.render_widget(Clear, popup);
	let block = Block::default()
		.borders(Borders::ALL)
		.border_style(theme.border_style(true))
		.title(DIALOG_TITLE)
		.title_style(theme.header_style());
	let inner = block.inner(popup);
	frame.render_widget(block, popup);

	let [search_area, list_area, footer_area] = Layout::vertical([
		Constraint::Length(3),
		Constraint::Min(1),
		Constraint::Length(1),
	])
	.areas(inner);

	app.dialog_search
		.render(frame, search_area, SEARCH_LABEL, &theme);

	let table = Table::new(rows, [Constraint::Length(4), Constraint::Fill(1)])
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::Always)
		.row_highlight_style(theme.row_highlight_style())
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, list_area, &mut app.dialog_state);
	if is_empty {
		frame.render_widget(
			Paragraph::new(NO_MATCHES)
				.alignment(Alignment::Center)
				.style(theme.empty_style()),
			list_area,
		);
	}

	let [count_area, button_area] = Layout::horizontal([
		Constraint::Fill(1),
		Constraint::Length(ADD_SELECTED.len() as u16),
	])
	.areas(footer_area);
	frame.render_widget(
		Paragraph::new(format!("{checked_count} section(s) selected")).style(theme.empty_style()),
		count_area,
	);
	frame.render_widget(
		Paragraph::new(ADD_SELECTED).style(theme.button_style(false, checked_count > 0)),
		button_area,
	);
}

fn candidate_row<'a>(name: &str, query: &str, checked: bool, theme: &Theme) -> Row<'a> {
	let checkbox = if checked { "[x]" } else { "[ ]" };
	Row::new(vec![
		Cell::from(checkbox),
		Cell::from(highlight_match(name, query, theme)),
	])
}

/// Split `name` into spans, emphasising the first match of `query`.
fn highlight_match<'a>(name: &str, query: &str, theme: &Theme) -> Line<'a> {
	match match_range(name, query) {
		Some(range) => Line::from(vec![
			Span::raw(name[..range.start].to_string()),
			Span::styled(name[range.clone()].to_string(), theme.highlight_style()),
			Span::raw(name[range.end..].to_string()),
		]),
		None => Line::from(name.to_string()),
	}
}

/// Centred rectangle taking the given percentages of `area`.
fn popup_area(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
	let [vertical] = Layout::vertical([Constraint::Percentage(percent_y)])
		.flex(Flex::Center)
		.areas(area);
	let [popup] = Layout::horizontal([Constraint::Percentage(percent_x)])
		.flex(Flex::Center)
		.areas(vertical);
	popup
}
