//! Template form state and its reducer.
//!
//! [`TemplateForm`] is the single owner of everything the template screen
//! edits: the template name, the ordered selection and the add-dialog. All
//! transitions go through [`TemplateForm::apply`].

use tracing::{debug, info};

use crate::catalog::{Available, Catalog};
use crate::checked::CheckedSet;
use crate::error::SubmitError;
use crate::payload::TemplatePayload;
use crate::selection::{Direction, SelectionList};

/// Working state of an open add-dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddDialog {
	query: String,
	checked: CheckedSet,
}

impl AddDialog {
	#[must_use]
	pub fn query(&self) -> &str {
		&self.query
	}

	#[must_use]
	pub fn checked(&self) -> &CheckedSet {
		&self.checked
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DialogState {
	#[default]
	Closed,
	Open(AddDialog),
}

/// Every transition the template form accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateAction {
	SetName(String),
	OpenDialog,
	CloseDialog,
	SetQuery(String),
	ToggleCheck { name: String, checked: bool },
	AddChecked,
	Remove(usize),
	Move { position: usize, direction: Direction },
	ToggleMove(usize),
}

#[derive(Debug, Clone, Default)]
pub struct TemplateForm {
	catalog: Catalog,
	name: String,
	selection: SelectionList,
	dialog: DialogState,
}

impl TemplateForm {
	#[must_use]
	pub fn new(catalog: Catalog) -> Self {
		Self {
			catalog,
			..Self::default()
		}
	}

	#[must_use]
	pub fn catalog(&self) -> &Catalog {
		&self.catalog
	}

	#[must_use]
	pub fn name(&self) -> &str {
		&self.name
	}

	#[must_use]
	pub fn selection(&self) -> &SelectionList {
		&self.selection
	}

	#[must_use]
	pub fn dialog(&self) -> &DialogState {
		&self.dialog
	}

	/// The open dialog, if any.
	#[must_use]
	pub fn open_dialog(&self) -> Option<&AddDialog> {
		match &self.dialog {
			DialogState::Open(dialog) => Some(dialog),
			DialogState::Closed => None,
		}
	}

	#[must_use]
	pub fn is_dialog_open(&self) -> bool {
		matches!(self.dialog, DialogState::Open(_))
	}

	/// Catalog items on offer for the current dialog query.
	///
	/// With the dialog closed the query is treated as empty.
	pub fn available(&self) -> Available<'_> {
		let query = self.open_dialog().map(AddDialog::query).unwrap_or("");
		self.catalog.available(&self.selection, query)
	}

	/// Apply `action`, returning whether any state changed.
	pub fn apply(&mut self, action: TemplateAction) -> bool {
		match action {
			TemplateAction::SetName(name) => {
				if self.name == name {
					return false;
				}
				self.name = name;
				true
			}
			TemplateAction::OpenDialog => {
				if self.is_dialog_open() {
					return false;
				}
				self.dialog = DialogState::Open(AddDialog::default());
				true
			}
			TemplateAction::CloseDialog => {
				if !self.is_dialog_open() {
					return false;
				}
				self.dialog = DialogState::Closed;
				true
			}
			TemplateAction::SetQuery(query) => match &mut self.dialog {
				DialogState::Open(dialog) if dialog.query != query => {
					dialog.query = query;
					true
				}
				_ => false,
			},
			TemplateAction::ToggleCheck { name, checked } => match &mut self.dialog {
				DialogState::Open(dialog) => dialog.checked.toggle(&name, checked),
				DialogState::Closed => false,
			},
			TemplateAction::AddChecked => self.add_checked(),
			TemplateAction::Remove(position) => match self.selection.remove(position) {
				Some(entry) => {
					info!(section = %entry.name, position, "removed section");
					true
				}
				None => false,
			},
			TemplateAction::Move {
				position,
				direction,
			} => {
				let moved = self.selection.move_entry(position, direction);
				if moved {
					debug!(position, ?direction, "moved section");
				}
				moved
			}
			TemplateAction::ToggleMove(position) => self.toggle_move(position).is_some(),
		}
	}

	/// Apply the single move button to the entry at `position`, returning
	/// where it ended up.
	pub fn toggle_move(&mut self, position: usize) -> Option<usize> {
		let target = self.selection.toggle_move(position)?;
		debug!(position, to = target, "toggled section position");
		Some(target)
	}

	/// Build the submission payload from the current state.
	pub fn submit(&self) -> Result<TemplatePayload, SubmitError> {
		let name = self.name.trim();
		if name.is_empty() {
			return Err(SubmitError::MissingName);
		}
		info!(
			template = name,
			sections = self.selection.len(),
			"template submitted"
		);
		Ok(TemplatePayload {
			name: name.to_string(),
			sections: self.selection.entries().to_vec(),
		})
	}

	fn add_checked(&mut self) -> bool {
		let DialogState::Open(dialog) = &mut self.dialog else {
			return false;
		};
		if dialog.checked.is_empty() {
			return false;
		}
		let names = dialog.checked.take();
		let requested = names.len();
		let added = self.selection.add(names);
		info!(requested, added, total = self.selection.len(), "added sections");
		self.dialog = DialogState::Closed;
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::selection::SelectionEntry;

	fn three_sections() -> TemplateForm {
		TemplateForm::new(Catalog::new(["Section 1", "Section 2", "Section 3"]))
	}

	fn check(form: &mut TemplateForm, name: &str) {
		form.apply(TemplateAction::ToggleCheck {
			name: name.to_string(),
			checked: true,
		});
	}

	#[test]
	fn search_check_add_remove_scenario() {
		let mut form = three_sections();
		assert!(form.apply(TemplateAction::OpenDialog));
		assert!(form.apply(TemplateAction::SetQuery("2".into())));
		let offered: Vec<_> = form.available().collect();
		assert_eq!(offered, vec!["Section 2"]);

		check(&mut form, "Section 2");
		assert!(form.apply(TemplateAction::AddChecked));
		assert_eq!(
			form.selection().entries(),
			&[SelectionEntry {
				name: "Section 2".into(),
				sort_order: 0,
			}]
		);
		assert!(!form.is_dialog_open());

		assert!(form.apply(TemplateAction::Remove(0)));
		assert!(form.selection().is_empty());
	}

	#[test]
	fn reopened_dialog_starts_fresh() {
		let mut form = three_sections();
		form.apply(TemplateAction::OpenDialog);
		form.apply(TemplateAction::SetQuery("3".into()));
		check(&mut form, "Section 3");
		form.apply(TemplateAction::CloseDialog);

		form.apply(TemplateAction::OpenDialog);
		let dialog = form.open_dialog().expect("dialog open");
		assert_eq!(dialog.query(), "");
		assert!(dialog.checked().is_empty());
		assert!(form.selection().is_empty());
	}

	#[test]
	fn add_with_nothing_checked_keeps_dialog_open() {
		let mut form = three_sections();
		form.apply(TemplateAction::OpenDialog);
		assert!(!form.apply(TemplateAction::AddChecked));
		assert!(form.is_dialog_open());
	}

	#[test]
	fn dialog_actions_ignored_while_closed() {
		let mut form = three_sections();
		assert!(!form.apply(TemplateAction::SetQuery("1".into())));
		assert!(!form.apply(TemplateAction::ToggleCheck {
			name: "Section 1".into(),
			checked: true,
		}));
		assert!(!form.apply(TemplateAction::AddChecked));
		assert!(!form.apply(TemplateAction::CloseDialog));
	}

	#[test]
	fn added_sections_leave_the_available_list() {
		let mut form = three_sections();
		form.apply(TemplateAction::OpenDialog);
		check(&mut form, "Section 3");
		check(&mut form, "Section 1");
		form.apply(TemplateAction::AddChecked);

		let names: Vec<_> = form.selection().names().collect();
		assert_eq!(names, vec!["Section 3", "Section 1"]);
		let offered: Vec<_> = form.available().collect();
		assert_eq!(offered, vec!["Section 2"]);
	}

	#[test]
	fn checked_items_hidden_by_query_are_still_added() {
		let mut form = three_sections();
		form.apply(TemplateAction::OpenDialog);
		check(&mut form, "Section 1");
		form.apply(TemplateAction::SetQuery("3".into()));
		check(&mut form, "Section 3");
		form.apply(TemplateAction::AddChecked);
		assert_eq!(form.selection().len(), 2);
	}

	#[test]
	fn moves_route_through_reducer() {
		let mut form = TemplateForm::new(Catalog::new(["A", "B", "C"]));
		form.apply(TemplateAction::OpenDialog);
		for name in ["A", "B", "C"] {
			check(&mut form, name);
		}
		form.apply(TemplateAction::AddChecked);

		assert!(form.apply(TemplateAction::Move {
			position: 1,
			direction: Direction::Up,
		}));
		let names: Vec<_> = form.selection().names().collect();
		assert_eq!(names, vec!["B", "A", "C"]);
		assert!(form.selection().is_dense());

		assert!(!form.apply(TemplateAction::Move {
			position: 0,
			direction: Direction::Up,
		}));
		assert!(form.apply(TemplateAction::ToggleMove(0)));
		let names: Vec<_> = form.selection().names().collect();
		assert_eq!(names, vec!["A", "B", "C"]);
		assert_eq!(form.toggle_move(2), Some(1));
		let names: Vec<_> = form.selection().names().collect();
		assert_eq!(names, vec!["A", "C", "B"]);
	}

	#[test]
	fn submit_requires_a_name() {
		let mut form = three_sections();
		assert_eq!(form.submit(), Err(SubmitError::MissingName));
		form.apply(TemplateAction::SetName("   ".into()));
		assert_eq!(form.submit(), Err(SubmitError::MissingName));
	}

	#[test]
	fn submit_allows_empty_sections() {
		let mut form = three_sections();
		form.apply(TemplateAction::SetName(" Weekly report ".into()));
		let payload = form.submit().expect("payload");
		assert_eq!(payload.name, "Weekly report");
		assert!(payload.sections.is_empty());
	}

	#[test]
	fn set_name_reports_changes_only() {
		let mut form = three_sections();
		assert!(form.apply(TemplateAction::SetName("x".into())));
		assert!(!form.apply(TemplateAction::SetName("x".into())));
	}
}
