//! Core state container for the terminal front-end.
//!
//! [`App`] owns one [`TemplateForm`] for the template screen and the people
//! dataset plus its [`DragController`] for the table screen. Widget state
//! (text fields, table cursors, the last rendered table area) lives next to
//! them; every domain change goes through the form reducer or the drag
//! controller.

use std::fmt;
use std::str::FromStr;

use formsmith_core::reorder::position_of;
use formsmith_core::{
	Direction, DragController, Keyed, PersonRecord, Reorder, TemplateAction, TemplateForm, UserId,
	generate_people, random_seed,
};
use ratatui::layout::Rect;
use ratatui::widgets::TableState;
use tracing::{debug, info};

use super::TemplateOutcome;
use super::components::TextInput;
use super::style::Theme;

/// Top-level screens, switched with `Ctrl+T`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
	#[default]
	Template,
	People,
}

impl Screen {
	pub const ALL: [Screen; 2] = [Screen::Template, Screen::People];

	#[must_use]
	pub fn as_str(self) -> &'static str {
		match self {
			Screen::Template => "template",
			Screen::People => "people",
		}
	}

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			Screen::Template => "Template",
			Screen::People => "People",
		}
	}

	#[must_use]
	pub fn next(self) -> Self {
		match self {
			Screen::Template => Screen::People,
			Screen::People => Screen::Template,
		}
	}
}

impl fmt::Display for Screen {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown screen `{0}` (expected one of: template, people)")]
pub struct UnknownScreen(pub String);

impl FromStr for Screen {
	type Err = UnknownScreen;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		let value = value.trim();
		Screen::ALL
			.into_iter()
			.find(|screen| screen.as_str().eq_ignore_ascii_case(value))
			.ok_or_else(|| UnknownScreen(value.to_string()))
	}
}

/// Focusable regions of the template screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
	#[default]
	Name,
	Sections,
	Submit,
}

impl Focus {
	#[must_use]
	pub fn next(self) -> Self {
		match self {
			Focus::Name => Focus::Sections,
			Focus::Sections => Focus::Submit,
			Focus::Submit => Focus::Name,
		}
	}

	#[must_use]
	pub fn previous(self) -> Self {
		match self {
			Focus::Name => Focus::Submit,
			Focus::Sections => Focus::Name,
			Focus::Submit => Focus::Sections,
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
	Info,
	Error,
}

/// One-line message shown under the sections table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
	pub text: String,
	pub kind: StatusKind,
}

impl StatusMessage {
	pub fn info(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			kind: StatusKind::Info,
		}
	}

	pub fn error(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			kind: StatusKind::Error,
		}
	}
}

/// Parameters for the generated people dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeopleOptions {
	pub rows: usize,
	pub seed: Option<u64>,
}

impl Default for PeopleOptions {
	fn default() -> Self {
		Self {
			rows: 20,
			seed: None,
		}
	}
}

/// Aggregate state shared across the terminal UI.
pub struct App<'a> {
	pub screen: Screen,
	pub form: TemplateForm,
	pub focus: Focus,
	pub theme: Theme,
	pub people: Vec<PersonRecord>,
	pub(crate) name_input: TextInput<'a>,
	pub(crate) sections_state: TableState,
	pub(crate) dialog_search: TextInput<'a>,
	pub(crate) dialog_state: TableState,
	pub(crate) people_state: TableState,
	pub(crate) drag: DragController<UserId>,
	pub(crate) people_rows: usize,
	pub(crate) seed: u64,
	pub(crate) status: Option<StatusMessage>,
	pub(crate) people_area: Rect,
}

impl<'a> App<'a> {
	pub fn new(form: TemplateForm, people: PeopleOptions) -> Self {
		let seed = people.seed.unwrap_or_else(random_seed);
		let mut name_input = TextInput::new(form.name().to_string(), "Enter template name");
		name_input.set_focused(true);
		let mut people_state = TableState::default();
		people_state.select(Some(0));

		let mut app = Self {
			screen: Screen::Template,
			form,
			focus: Focus::Name,
			theme: Theme::default(),
			people: generate_people(people.rows, seed),
			name_input,
			sections_state: TableState::default(),
			dialog_search: TextInput::new("", "Search sections..."),
			dialog_state: TableState::default(),
			people_state,
			drag: DragController::new(),
			people_rows: people.rows,
			seed,
			status: None,
			people_area: Rect::default(),
		};
		app.ensure_people_selection();
		debug!(seed, rows = people.rows, "generated people dataset");
		app
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	pub fn set_screen(&mut self, screen: Screen) {
		if self.screen != screen {
			self.drag.cancel();
			self.screen = screen;
		}
	}

	/// Seed of the current people dataset.
	#[must_use]
	pub fn seed(&self) -> u64 {
		self.seed
	}

	pub(crate) fn set_focus(&mut self, focus: Focus) {
		self.focus = focus;
		self.name_input.set_focused(focus == Focus::Name);
		if focus == Focus::Sections {
			self.ensure_sections_selection();
		}
	}

	pub(crate) fn sync_name(&mut self) {
		let name = self.name_input.text().to_string();
		self.form.apply(TemplateAction::SetName(name));
	}

	// Add dialog

	/// Open the add dialog, optionally with a pre-filled search query.
	pub fn open_dialog(&mut self, query: Option<&str>) {
		if !self.form.apply(TemplateAction::OpenDialog) {
			return;
		}
		self.dialog_search = TextInput::new(query.unwrap_or_default(), "Search sections...");
		self.dialog_search.set_focused(true);
		self.name_input.set_focused(false);
		if let Some(query) = query {
			self.form.apply(TemplateAction::SetQuery(query.to_string()));
		}
		self.dialog_state = TableState::default();
		self.ensure_dialog_selection();
	}

	pub(crate) fn close_dialog(&mut self) {
		if self.form.apply(TemplateAction::CloseDialog) {
			self.restore_focus_after_dialog();
		}
	}

	pub(crate) fn sync_query(&mut self) {
		let query = self.dialog_search.text().to_string();
		if self.form.apply(TemplateAction::SetQuery(query)) {
			self.dialog_state.select(Some(0));
			self.ensure_dialog_selection();
		}
	}

	/// Names offered by the open dialog, in catalog order.
	pub(crate) fn available_names(&self) -> Vec<&str> {
		self.form.available().collect()
	}

	pub(crate) fn dialog_cursor_name(&self) -> Option<String> {
		let selected = self.dialog_state.selected()?;
		self.form.available().nth(selected).map(str::to_string)
	}

	pub(crate) fn toggle_dialog_check(&mut self) {
		let Some(name) = self.dialog_cursor_name() else {
			return;
		};
		let checked = self
			.form
			.open_dialog()
			.is_some_and(|dialog| !dialog.checked().contains(&name));
		self.form
			.apply(TemplateAction::ToggleCheck { name, checked });
	}

	pub(crate) fn add_checked(&mut self) {
		let before = self.form.selection().len();
		if !self.form.apply(TemplateAction::AddChecked) {
			return;
		}
		let added = self.form.selection().len() - before;
		self.status = Some(StatusMessage::info(format!("Added {added} section(s)")));
		if added > 0 {
			self.sections_state.select(Some(before));
		}
		self.restore_focus_after_dialog();
	}

	pub(crate) fn move_dialog_cursor(&mut self, delta: isize) {
		let len = self.form.available().count();
		move_cursor(&mut self.dialog_state, len, delta);
	}

	fn ensure_dialog_selection(&mut self) {
		let len = self.form.available().count();
		clamp_selection(&mut self.dialog_state, len);
	}

	fn restore_focus_after_dialog(&mut self) {
		self.dialog_search.set_focused(false);
		self.set_focus(Focus::Sections);
	}

	// Sections table

	pub(crate) fn move_sections_cursor(&mut self, delta: isize) {
		let len = self.form.selection().len();
		move_cursor(&mut self.sections_state, len, delta);
	}

	pub(crate) fn remove_selected_section(&mut self) {
		let Some(position) = self.sections_state.selected() else {
			return;
		};
		if self.form.apply(TemplateAction::Remove(position)) {
			self.ensure_sections_selection();
		}
	}

	pub(crate) fn move_selected_section(&mut self, direction: Direction) {
		let Some(position) = self.sections_state.selected() else {
			return;
		};
		let len = self.form.selection().len();
		if self.form.apply(TemplateAction::Move {
			position,
			direction,
		}) {
			self.sections_state
				.select(direction.neighbour(position, len));
		}
	}

	/// The single "move" button: first row down, any other row up.
	pub(crate) fn toggle_move_selected(&mut self) {
		let Some(position) = self.sections_state.selected() else {
			return;
		};
		if let Some(target) = self.form.toggle_move(position) {
			self.sections_state.select(Some(target));
		}
	}

	fn ensure_sections_selection(&mut self) {
		let len = self.form.selection().len();
		clamp_selection(&mut self.sections_state, len);
	}

	/// Validate and package the template, or report why it cannot be sent.
	pub(crate) fn submit(&mut self) -> Option<TemplateOutcome> {
		self.sync_name();
		match self.form.submit() {
			Ok(payload) => Some(TemplateOutcome::Submitted(payload)),
			Err(err) => {
				info!(%err, "submission rejected");
				self.status = Some(StatusMessage::error(capitalize(&err.to_string())));
				self.set_focus(Focus::Name);
				None
			}
		}
	}

	// People table

	pub(crate) fn selected_person_key(&self) -> Option<UserId> {
		let selected = self.people_state.selected()?;
		let order = self.display_order();
		let index = *order.get(selected)?;
		self.people.get(index).map(|person| *person.key())
	}

	pub(crate) fn move_people_cursor(&mut self, delta: isize) {
		move_cursor(&mut self.people_state, self.people.len(), delta);
	}

	pub(crate) fn begin_drag(&mut self, key: UserId) {
		self.drag.pick_up(key);
		self.select_drag_target();
	}

	pub(crate) fn hover_drag(&mut self, target: Option<UserId>) {
		self.drag.hover(target);
		self.select_drag_target();
	}

	pub(crate) fn step_drag(&mut self, direction: Direction) {
		if self.drag.step(&self.people, direction) {
			self.select_drag_target();
		}
	}

	pub(crate) fn drop_drag(&mut self) -> Option<Reorder> {
		let reorder = self.drag.drop_on(&mut self.people);
		if let Some(Reorder { to, .. }) = reorder {
			self.people_state.select(Some(to));
		}
		reorder
	}

	pub(crate) fn cancel_drag(&mut self) -> bool {
		let source = self.drag.source().and_then(|key| position_of(&self.people, key));
		let cancelled = self.drag.cancel();
		if cancelled && let Some(position) = source {
			self.people_state.select(Some(position));
		}
		cancelled
	}

	/// Replace the people dataset with a freshly seeded one.
	pub(crate) fn regenerate_people(&mut self) {
		self.drag.cancel();
		self.seed = random_seed();
		self.people = generate_people(self.people_rows, self.seed);
		self.people_state.select(Some(0));
		self.ensure_people_selection();
		info!(seed = self.seed, rows = self.people_rows, "regenerated people");
	}

	/// Row indices in the order they are drawn. While dragging, the source row
	/// is shown in the slot of the hovered target.
	pub(crate) fn display_order(&self) -> Vec<usize> {
		let mut order: Vec<usize> = (0..self.people.len()).collect();
		if let (Some(source), Some(target)) = (self.drag.source(), self.drag.target())
			&& let (Some(from), Some(to)) = (
				position_of(&self.people, source),
				position_of(&self.people, target),
			) {
			let row = order.remove(from);
			order.insert(to, row);
		}
		order
	}

	/// Key of the row whose slot is at display position `slot`.
	pub(crate) fn slot_key(&self, slot: usize) -> Option<UserId> {
		self.people.get(slot).map(|person| *person.key())
	}

	fn select_drag_target(&mut self) {
		let target = self
			.drag
			.target()
			.or(self.drag.source())
			.and_then(|key| position_of(&self.people, key));
		if let Some(position) = target {
			self.people_state.select(Some(position));
		}
	}

	fn ensure_people_selection(&mut self) {
		clamp_selection(&mut self.people_state, self.people.len());
	}
}

fn move_cursor(state: &mut TableState, len: usize, delta: isize) {
	if len == 0 {
		state.select(None);
		return;
	}
	let current = state.selected().unwrap_or(0);
	let next = current.saturating_add_signed(delta).min(len - 1);
	state.select(Some(next));
}

fn clamp_selection(state: &mut TableState, len: usize) {
	if len == 0 {
		state.select(None);
	} else if let Some(selected) = state.selected() {
		if selected >= len {
			state.select(Some(len - 1));
		}
	} else {
		state.select(Some(0));
	}
}

fn capitalize(text: &str) -> String {
	let mut chars = text.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}
