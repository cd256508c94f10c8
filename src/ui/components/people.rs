use formsmith_core::PersonRecord;
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Cell, HighlightSpacing, Row, Table};

use super::table::{
	HIGHLIGHT_SYMBOL, TABLE_COLUMN_SPACING, header_row, render_header_separator,
};
use crate::ui::App;

const PEOPLE_TITLE: &str = " People ";
pub(crate) const DRAG_HANDLE: &str = "⠿";
/// Width of the drag handle column, in cells.
pub(crate) const HANDLE_WIDTH: u16 = 3;
const PROGRESS_BAR_WIDTH: usize = 10;

const HEADERS: [&str; 7] = [
	"",
	"First Name",
	"Last Name",
	"Age",
	"Visits",
	"Status",
	"Profile Progress",
];

/// Render the people table, previewing an in-flight drag.
pub fn render_people(frame: &mut Frame, area: Rect, app: &mut App<'_>) {
	let theme = app.theme;
	let block = Block::default()
		.borders(Borders::ALL)
		.border_style(theme.border_style(app.drag.is_dragging()))
		.title(PEOPLE_TITLE)
		.title_style(theme.header_style());
	let inner = block.inner(area);
	frame.render_widget(block, area);
	app.people_area = inner;

	let source = app.drag.source().copied();
	let rows = app
		.display_order()
		.into_iter()
		.filter_map(|index| app.people.get(index))
		.map(|person| {
			let style = if source.as_ref() == Some(&person.user_id) {
				theme.drag_style()
			} else {
				Style::default()
			};
			person_row(person).style(style)
		})
		.collect::<Vec<_>>();

	let widths = [
		Constraint::Length(HANDLE_WIDTH),
		Constraint::Fill(2),
		Constraint::Fill(2),
		Constraint::Length(5),
		Constraint::Length(7),
		Constraint::Length(14),
		Constraint::Length(PROGRESS_BAR_WIDTH as u16 + 6),
	];
	let table = Table::new(rows, widths)
		.header(header_row(HEADERS, &theme))
		.column_spacing(TABLE_COLUMN_SPACING)
		.highlight_spacing(HighlightSpacing::Always)
		.row_highlight_style(theme.row_highlight_style())
		.highlight_symbol(HIGHLIGHT_SYMBOL);
	frame.render_stateful_widget(table, inner, &mut app.people_state);
	render_header_separator(frame, inner, &theme);
}

fn person_row<'a>(person: &PersonRecord) -> Row<'a> {
	Row::new(vec![
		Cell::from(format!(" {DRAG_HANDLE}")),
		Cell::from(person.first_name.clone()),
		Cell::from(person.last_name.clone()),
		Cell::from(person.age.to_string()),
		Cell::from(person.visits.to_string()),
		Cell::from(person.status.label()),
		Cell::from(progress_bar(person.progress)),
	])
}

/// A fixed-width bar followed by the percentage, e.g. `█████░░░░░  50%`.
fn progress_bar(progress: u8) -> String {
	let progress = progress.min(100);
	let filled = usize::from(progress) * PROGRESS_BAR_WIDTH / 100;
	format!(
		"{}{} {progress:>3}%",
		"█".repeat(filled),
		"░".repeat(PROGRESS_BAR_WIDTH - filled)
	)
}
