use formsmith_core::UserId;
use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;
use tracing::debug;

use super::App;
use super::components::people::HANDLE_WIDTH;
use super::components::table::{HIGHLIGHT_SYMBOL, row_at};
use super::state::Screen;

impl<'a> App<'a> {
	/// Pointer drag on the people table. Other screens ignore the mouse.
	pub(crate) fn handle_mouse(&mut self, mouse: MouseEvent) {
		if self.screen != Screen::People {
			return;
		}
		match mouse.kind {
			MouseEventKind::Down(MouseButton::Left) => {
				if self.on_handle(mouse.column)
					&& let Some(key) = self.key_at(mouse.column, mouse.row)
				{
					self.begin_drag(key);
				}
			}
			MouseEventKind::Drag(MouseButton::Left) if self.drag.is_dragging() => {
				let target = self.key_at(mouse.column, mouse.row);
				self.hover_drag(target);
			}
			MouseEventKind::Up(MouseButton::Left) if self.drag.is_dragging() => {
				if self.key_at(mouse.column, mouse.row).is_some() {
					if let Some(reorder) = self.drop_drag() {
						debug!(from = reorder.from, to = reorder.to, "pointer drop");
					}
				} else {
					self.cancel_drag();
				}
			}
			MouseEventKind::ScrollUp if !self.drag.is_dragging() => self.move_people_cursor(-1),
			MouseEventKind::ScrollDown if !self.drag.is_dragging() => self.move_people_cursor(1),
			_ => {}
		}
	}

	/// Key of the slot under the pointer, if it is over a table row.
	fn key_at(&self, column: u16, row: u16) -> Option<UserId> {
		let area = self.people_area;
		if !area.contains(Position::new(column, row)) {
			return None;
		}
		let slot = row_at(area, self.people_state.offset(), row)?;
		self.slot_key(slot)
	}

	fn on_handle(&self, column: u16) -> bool {
		let start = self.people_area.x + HIGHLIGHT_SYMBOL.chars().count() as u16;
		(start..start + HANDLE_WIDTH).contains(&column)
	}
}
