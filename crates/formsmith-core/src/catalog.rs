//! The fixed universe of selectable section names and the filter that decides
//! which of them are still on offer.

use std::collections::HashSet;
use std::ops::Range;
use std::slice;

use crate::selection::SelectionList;

/// Number of generated catalog entries when nothing else is configured.
pub const DEFAULT_CATALOG_SIZE: usize = 500;
/// Label prefix used for generated catalog entries.
pub const DEFAULT_CATALOG_LABEL: &str = "Section";

/// Immutable, ordered list of candidate section names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
	items: Vec<String>,
}

impl Default for Catalog {
	fn default() -> Self {
		Self::generated(DEFAULT_CATALOG_LABEL, DEFAULT_CATALOG_SIZE)
	}
}

impl Catalog {
	/// Build a catalog from explicit names, keeping their order.
	pub fn new<I, S>(items: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			items: items.into_iter().map(Into::into).collect(),
		}
	}

	/// Generate `"{label} 1"` through `"{label} {size}"`.
	#[must_use]
	pub fn generated(label: &str, size: usize) -> Self {
		Self {
			items: (1..=size).map(|n| format!("{label} {n}")).collect(),
		}
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.items.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}

	#[must_use]
	pub fn items(&self) -> &[String] {
		&self.items
	}

	/// Lazily yield the catalog items that are not part of `selection` and
	/// contain `query` as a case-insensitive substring, in catalog order.
	pub fn available<'a>(&'a self, selection: &'a SelectionList, query: &str) -> Available<'a> {
		Available {
			items: self.items.iter(),
			selected: selection.names().collect(),
			needle: query.to_lowercase(),
		}
	}
}

/// Iterator returned by [`Catalog::available`].
pub struct Available<'a> {
	items: slice::Iter<'a, String>,
	selected: HashSet<&'a str>,
	needle: String,
}

impl<'a> Iterator for Available<'a> {
	type Item = &'a str;

	fn next(&mut self) -> Option<Self::Item> {
		for item in self.items.by_ref() {
			let item = item.as_str();
			if self.selected.contains(item) {
				continue;
			}
			if self.needle.is_empty() || item.to_lowercase().contains(&self.needle) {
				return Some(item);
			}
		}
		None
	}

	fn size_hint(&self) -> (usize, Option<usize>) {
		(0, self.items.size_hint().1)
	}
}

/// Byte range of the first case-insensitive occurrence of `query` in `name`.
///
/// Returns `None` for an empty query or when lowercasing changes the byte
/// length of `name`, since offsets would no longer line up.
#[must_use]
pub fn match_range(name: &str, query: &str) -> Option<Range<usize>> {
	if query.is_empty() {
		return None;
	}
	let haystack = name.to_lowercase();
	if haystack.len() != name.len() {
		return None;
	}
	let needle = query.to_lowercase();
	let start = haystack.find(&needle)?;
	let end = start + needle.len();
	(name.is_char_boundary(start) && name.is_char_boundary(end)).then_some(start..end)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn small() -> Catalog {
		Catalog::new(["Section 1", "Section 2", "Section 3"])
	}

	#[test]
	fn generated_catalog_uses_one_based_labels() {
		let catalog = Catalog::default();
		assert_eq!(catalog.len(), 500);
		assert_eq!(catalog.items()[0], "Section 1");
		assert_eq!(catalog.items()[499], "Section 500");
	}

	#[test]
	fn search_matches_substring() {
		let catalog = small();
		let selection = SelectionList::new();
		let found: Vec<_> = catalog.available(&selection, "2").collect();
		assert_eq!(found, vec!["Section 2"]);
	}

	#[test]
	fn search_ignores_case() {
		let catalog = small();
		let selection = SelectionList::new();
		let found: Vec<_> = catalog.available(&selection, "sEcTiOn 3").collect();
		assert_eq!(found, vec!["Section 3"]);
	}

	#[test]
	fn empty_query_returns_catalog_minus_selection_in_order() {
		let catalog = Catalog::generated("Section", 10);
		let selection = SelectionList::from_names(["Section 7", "Section 2"]);
		let found: Vec<_> = catalog.available(&selection, "").collect();
		let expected: Vec<_> = catalog
			.items()
			.iter()
			.map(String::as_str)
			.filter(|name| *name != "Section 7" && *name != "Section 2")
			.collect();
		assert_eq!(found, expected);
	}

	#[test]
	fn selected_names_never_returned() {
		let catalog = Catalog::default();
		let selection = SelectionList::from_names(["Section 1", "Section 10", "Section 100"]);
		for query in ["", "1", "section 1", "10", "100", "0", "zzz"] {
			assert!(
				catalog
					.available(&selection, query)
					.all(|name| !selection.contains(name)),
				"query {query:?} leaked a selected name"
			);
		}
	}

	#[test]
	fn generated_search_keeps_catalog_order() {
		let catalog = Catalog::generated("Section", 30);
		let selection = SelectionList::new();
		let found: Vec<_> = catalog.available(&selection, "2").collect();
		assert_eq!(
			found,
			vec![
				"Section 2",
				"Section 12",
				"Section 20",
				"Section 21",
				"Section 22",
				"Section 23",
				"Section 24",
				"Section 25",
				"Section 26",
				"Section 27",
				"Section 28",
				"Section 29",
			]
		);
	}

	#[test]
	fn match_range_locates_case_insensitive_hit() {
		assert_eq!(match_range("Section 12", "ion 1"), Some(4..9));
		assert_eq!(match_range("Section 12", "SECT"), Some(0..4));
		assert_eq!(match_range("Section 12", ""), None);
		assert_eq!(match_range("Section 12", "x"), None);
	}
}
