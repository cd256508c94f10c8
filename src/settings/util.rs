/// Treat whitespace-only text as absent.
pub(super) fn non_blank(value: Option<String>) -> Option<String> {
	value.filter(|text| !text.trim().is_empty())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn blank_values_are_dropped() {
		assert_eq!(non_blank(Some("  ".into())), None);
		assert_eq!(non_blank(None), None);
		assert_eq!(non_blank(Some(" q ".into())), Some(" q ".into()));
	}
}
