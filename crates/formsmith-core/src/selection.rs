//! Ordered selection list with a dense sort index.
//!
//! Every mutation leaves `sort_order` equal to the entry's position, so the
//! list can be serialised as-is without a separate normalisation pass.

use serde::Serialize;
use tracing::debug;

/// A catalog name placed in the template at a given position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionEntry {
	pub name: String,
	pub sort_order: usize,
}

/// Direction of a single-step move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
	Up,
	Down,
}

impl Direction {
	/// Neighbour of `position` in this direction within `len` slots.
	#[must_use]
	pub fn neighbour(self, position: usize, len: usize) -> Option<usize> {
		match self {
			Self::Up => position.checked_sub(1).filter(|_| position < len),
			Self::Down => position.checked_add(1).filter(|next| *next < len),
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SelectionList {
	entries: Vec<SelectionEntry>,
}

impl SelectionList {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Build a list from names in display order.
	pub fn from_names<I, S>(names: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let mut list = Self::new();
		list.add(names);
		list
	}

	#[must_use]
	pub fn entries(&self) -> &[SelectionEntry] {
		&self.entries
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	#[must_use]
	pub fn get(&self, position: usize) -> Option<&SelectionEntry> {
		self.entries.get(position)
	}

	#[must_use]
	pub fn contains(&self, name: &str) -> bool {
		self.entries.iter().any(|entry| entry.name == name)
	}

	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.entries.iter().map(|entry| entry.name.as_str())
	}

	/// Append `names` in iteration order, numbering them after the existing
	/// entries. Names already present are skipped. Returns how many entries
	/// were appended.
	pub fn add<I, S>(&mut self, names: I) -> usize
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let before = self.entries.len();
		for name in names {
			let name = name.into();
			if self.contains(&name) {
				debug!(%name, "skipping section already in the selection");
				continue;
			}
			let sort_order = self.entries.len();
			self.entries.push(SelectionEntry { name, sort_order });
		}
		self.entries.len() - before
	}

	/// Remove the entry at `position`. Out-of-range positions are ignored.
	pub fn remove(&mut self, position: usize) -> Option<SelectionEntry> {
		if position >= self.entries.len() {
			return None;
		}
		let removed = self.entries.remove(position);
		self.renormalize();
		Some(removed)
	}

	/// Swap the entry at `position` with its neighbour. Returns `false` when
	/// the move would leave the list bounds.
	pub fn move_entry(&mut self, position: usize, direction: Direction) -> bool {
		let Some(target) = direction.neighbour(position, self.entries.len()) else {
			return false;
		};
		self.entries.swap(position, target);
		self.renormalize();
		true
	}

	/// Single-button move: the first entry moves down, every other entry moves
	/// up. Returns the entry's new position, or `None` when it could not move.
	pub fn toggle_move(&mut self, position: usize) -> Option<usize> {
		let direction = if position == 0 {
			Direction::Down
		} else {
			Direction::Up
		};
		let target = direction.neighbour(position, self.entries.len())?;
		self.move_entry(position, direction).then_some(target)
	}

	/// Whether every `sort_order` equals its position.
	#[must_use]
	pub fn is_dense(&self) -> bool {
		self.entries
			.iter()
			.enumerate()
			.all(|(position, entry)| entry.sort_order == position)
	}

	fn renormalize(&mut self) {
		for (position, entry) in self.entries.iter_mut().enumerate() {
			entry.sort_order = position;
		}
	}
}

#[cfg(test)]
mod tests {
	use rand_chacha::ChaCha8Rng;
	use rand_chacha::rand_core::{RngCore, SeedableRng};

	use super::*;

	fn entry(name: &str, sort_order: usize) -> SelectionEntry {
		SelectionEntry {
			name: name.to_string(),
			sort_order,
		}
	}

	#[test]
	fn add_numbers_after_existing_entries() {
		let mut list = SelectionList::from_names(["A", "B"]);
		assert_eq!(list.add(["C", "D"]), 2);
		assert_eq!(
			list.entries(),
			&[entry("A", 0), entry("B", 1), entry("C", 2), entry("D", 3)]
		);
	}

	#[test]
	fn add_preserves_batch_order() {
		let mut list = SelectionList::new();
		list.add(["Section 9", "Section 3", "Section 5"]);
		let names: Vec<_> = list.names().collect();
		assert_eq!(names, vec!["Section 9", "Section 3", "Section 5"]);
	}

	#[test]
	fn add_skips_names_already_selected() {
		let mut list = SelectionList::from_names(["A"]);
		assert_eq!(list.add(["B", "A", "B", "C"]), 2);
		assert_eq!(list.entries(), &[entry("A", 0), entry("B", 1), entry("C", 2)]);
	}

	#[test]
	fn remove_in_range_renormalizes() {
		let mut list = SelectionList::from_names(["A", "B", "C"]);
		let removed = list.remove(0);
		assert_eq!(removed, Some(entry("A", 0)));
		assert_eq!(list.entries(), &[entry("B", 0), entry("C", 1)]);
	}

	#[test]
	fn remove_out_of_range_is_noop() {
		let mut list = SelectionList::from_names(["A", "B"]);
		assert_eq!(list.remove(2), None);
		assert_eq!(list.len(), 2);
		assert!(SelectionList::new().remove(0).is_none());
	}

	#[test]
	fn move_up_swaps_with_previous() {
		let mut list = SelectionList::from_names(["A", "B", "C"]);
		assert!(list.move_entry(1, Direction::Up));
		assert_eq!(list.entries(), &[entry("B", 0), entry("A", 1), entry("C", 2)]);
	}

	#[test]
	fn move_past_either_end_is_noop() {
		let mut list = SelectionList::from_names(["A", "B", "C"]);
		let before = list.clone();
		assert!(!list.move_entry(0, Direction::Up));
		assert!(!list.move_entry(2, Direction::Down));
		assert!(!list.move_entry(7, Direction::Up));
		assert_eq!(list, before);
	}

	#[test]
	fn toggle_move_sends_first_row_down() {
		let mut list = SelectionList::from_names(["A", "B", "C"]);
		assert_eq!(list.toggle_move(0), Some(1));
		assert_eq!(list.entries(), &[entry("B", 0), entry("A", 1), entry("C", 2)]);
		assert_eq!(list.toggle_move(2), Some(1));
		assert_eq!(list.entries(), &[entry("B", 0), entry("C", 1), entry("A", 2)]);
	}

	#[test]
	fn toggle_move_on_single_entry_is_noop() {
		let mut list = SelectionList::from_names(["A"]);
		assert_eq!(list.toggle_move(0), None);
		assert_eq!(list.entries(), &[entry("A", 0)]);
	}

	#[test]
	fn serializes_with_camel_case_sort_order() {
		let list = SelectionList::from_names(["Section 2"]);
		let json = serde_json::to_value(&list).expect("json");
		assert_eq!(
			json,
			serde_json::json!([{ "name": "Section 2", "sortOrder": 0 }])
		);
	}

	#[test]
	fn random_operation_sequences_keep_dense_order() {
		let mut rng = ChaCha8Rng::seed_from_u64(0x5eed);
		for _ in 0..64 {
			let mut list = SelectionList::new();
			let mut next_name = 0usize;
			for _ in 0..200 {
				let len = list.len();
				match rng.next_u32() % 4 {
					0 => {
						let batch = (rng.next_u32() % 4) as usize;
						let names: Vec<String> = (0..batch)
							.map(|offset| format!("Section {}", next_name + offset))
							.collect();
						next_name += batch;
						assert_eq!(list.add(names.clone()), batch);
						let tail: Vec<_> = list.names().skip(len).collect();
						assert_eq!(tail, names);
					}
					1 => {
						let position = (rng.next_u32() as usize) % (len + 2);
						list.remove(position);
						let expected = if position < len { len - 1 } else { len };
						assert_eq!(list.len(), expected);
					}
					2 => {
						let position = (rng.next_u32() as usize) % (len + 1);
						list.move_entry(position, Direction::Up);
						assert_eq!(list.len(), len);
					}
					_ => {
						let position = (rng.next_u32() as usize) % (len + 1);
						list.move_entry(position, Direction::Down);
						assert_eq!(list.len(), len);
					}
				}
				assert!(list.is_dense(), "sort order drifted: {:?}", list.entries());
			}
		}
	}
}
