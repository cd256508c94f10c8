use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, HighlightSpacing, Paragraph, Row, Table};

use super::table::{
	HEADER_HEIGHT, HIGHLIGHT_SYMBOL, TABLE_COLUMN_SPACING, header_row, render_header_separator,
};
use crate::ui::App;
use crate::ui::state::{Focus, StatusKind};

const FORM_TITLE: &str = " Create Template ";
const NAME_LABEL: &str = "Template Name";
const SECTIONS_LABEL: &str = "Sections";
const ADD_BUTTON: &str = "[a] Add Sections";
const SUBMIT_BUTTON: &str = "[ Create Template ]";
const EMPTY_MESSAGE: &str = "No sections yet. Press a to add some.";

/// Render the template form: name field, sections table, status and button.
pub fn render_template(frame: &mut Frame, area: Rect, app: &mut App<'_>) {
	let block = Block::default()
		.borders(Borders::ALL)
		.border_style(app.theme.border_style(false))
		.title(FORM_TITLE)
		.title_style(app.theme.header_style());
	let inner = block.inner(area);
	frame.render_widget(block, area);

	let [name_area, label_area, table_area, status_area, button_area] = Layout::vertical([
		Constraint::Length(3),
		Constraint::Length(1),
		Constraint::Min(HEADER_HEIGHT + 1),
		Constraint::Length(1),
		Constraint::Length(1),
	])
	.areas(inner);

	let theme = app.theme;
	app.name_input.render(frame, name_area, NAME_LABEL, &theme);
	render_sections_label(frame, label_area, app);
	render_sections_table(frame, table_area, app);
	render_status(frame, status_area, app);

	let button = Paragraph::new(SUBMIT_BUTTON)
		.alignment(Alignment::Center)
		.style(theme.button_style(app.focus == Focus::Submit, true));
	frame.render_widget(button, button_area);
}

fn render_sections_label(frame: &mut Frame, area: Rect, app: &App<'_>) {
	let theme = &app.theme;
	let focused = app.focus == Focus::Sections;
	let [label_area, button_area] = Layout::horizontal([
		Constraint::Fill(1),
		Constraint::Length(ADD_BUTTON.len() as u16),
	])
	.areas(area);

	let count = app.form.selection().len();
	let label = Line::from(vec![
		Span::styled(SECTIONS_LABEL, theme.prompt_style()),
		Span::styled(format!(" ({count})"), theme.empty_style()),
	]);
	frame.render_widget(Paragraph::new(label), label_area);
	frame.render_widget(
		Paragraph::new(ADD_BUTTON).style(theme.button_style(focused, true)),
		button_area,
	);
}

fn render_sections_table(frame: &mut Frame, area: Rect, app: &mut App<'_>) {
	let theme = app.theme;
	let focused = app.focus == Focus::Sections;
	let rows = app
		.form
		.selection()
		.entries()
		.iter()
		.map(|entry| {
			Row::new(vec![
				Cell::from(entry.name.clone()),
				Cell::from((entry.sort_order + 1).to_string()),
				Cell::from("↕  ✕"),
			])
		})
		.collect::<Vec<_>>();
	let is_empty = rows.is_empty();

	let widths = [
		Constraint::Fill(1),
		Constraint::Length(7),
		Constraint::Length(9),
	];
	let highlight = if focused {
		theme.row_highlight_style()
	} else {
		Style::default()
	};
	let table = Table::new(rows, widths)
		.header(header_row(["Section Name", "Order", "Actions"], &theme))
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::Always)
		.row_highlight_style(highlight)
		.highlight_symbol(if focused { HIGHLIGHT_SYMBOL } else { "  " });
	frame.render_stateful_widget(table, area, &mut app.sections_state);
	render_header_separator(frame, area, &theme);

	if is_empty && area.height > HEADER_HEIGHT {
		let message_area = Rect {
			y: area.y + HEADER_HEIGHT,
			height: area.height - HEADER_HEIGHT,
			..area
		};
		let empty = Paragraph::new(EMPTY_MESSAGE)
			.alignment(Alignment::Center)
			.style(theme.empty_style());
		frame.render_widget(empty, message_area);
	}
}

fn render_status(frame: &mut Frame, area: Rect, app: &App<'_>) {
	let Some(status) = &app.status else {
		return;
	};
	let style = match status.kind {
		StatusKind::Info => app.theme.prompt_style(),
		StatusKind::Error => app.theme.error_style(),
	};
	frame.render_widget(
		Paragraph::new(status.text.as_str()).style(style),
		area,
	);
}
