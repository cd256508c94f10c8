use indexmap::IndexSet;

/// Catalog names ticked in the add dialog but not yet committed.
///
/// Iteration follows the order in which names were checked, which is the
/// order they are appended to the selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckedSet {
	names: IndexSet<String>,
}

impl CheckedSet {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the checked state of `name`. Returns `true` when the set changed.
	pub fn toggle(&mut self, name: &str, checked: bool) -> bool {
		if checked {
			if self.names.contains(name) {
				return false;
			}
			self.names.insert(name.to_string())
		} else {
			self.names.shift_remove(name)
		}
	}

	/// Invert the checked state of `name` and return the new state.
	pub fn flip(&mut self, name: &str) -> bool {
		let checked = !self.contains(name);
		self.toggle(name, checked);
		checked
	}

	#[must_use]
	pub fn contains(&self, name: &str) -> bool {
		self.names.contains(name)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.names.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &str> {
		self.names.iter().map(String::as_str)
	}

	/// Remove every name, returning them in check order.
	pub fn take(&mut self) -> Vec<String> {
		self.names.drain(..).collect()
	}
}
