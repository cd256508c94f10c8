//! Shared table chrome: header row, separator line and highlight settings.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Cell, Paragraph, Row};

use crate::ui::style::Theme;

pub const HIGHLIGHT_SYMBOL: &str = "▶ ";
pub const TABLE_COLUMN_SPACING: u16 = 1;
/// Rows taken by the header and the separator beneath it.
pub const HEADER_HEIGHT: u16 = 2;

pub fn header_row<'a, I, S>(headers: I, theme: &Theme) -> Row<'a>
where
	I: IntoIterator<Item = S>,
	S: Into<String>,
{
	let cells = headers
		.into_iter()
		.map(|header| Cell::from(header.into()))
		.collect::<Vec<_>>();
	Row::new(cells)
		.style(theme.header_style())
		.height(1)
		.bottom_margin(1)
}

/// Draw a rule under the header row inside `area`.
pub fn render_header_separator(frame: &mut Frame, area: Rect, theme: &Theme) {
	let header_height = 1;
	if header_height >= area.height {
		return;
	}
	let width = area.width as usize;
	if width == 0 {
		return;
	}

	let sep_rect = Rect {
		x: area.x,
		y: area.y + header_height,
		width: area.width,
		height: 1,
	};
	let base_style = Style::new().bg(theme.header_bg());
	if width <= 2 {
		let para = Paragraph::new(" ".repeat(width)).style(base_style);
		frame.render_widget(para, sep_rect);
		return;
	}

	let middle_style = Style::new().bg(theme.header_bg()).fg(theme.header_fg());
	let spans = vec![
		Span::styled(" ", base_style),
		Span::styled("─".repeat(width - 2), middle_style),
		Span::styled(" ", base_style),
	];
	frame.render_widget(Paragraph::new(Text::from(Line::from(spans))), sep_rect);
}

/// Index into the table's rows for terminal row `y`, given the first visible
/// row `offset`.
#[must_use]
pub fn row_at(area: Rect, offset: usize, y: u16) -> Option<usize> {
	let first = area.y.checked_add(HEADER_HEIGHT)?;
	if y < first || y >= area.y.saturating_add(area.height) {
		return None;
	}
	Some(offset + usize::from(y - first))
}
