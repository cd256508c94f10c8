use serde::Serialize;

use crate::selection::SelectionEntry;

/// Structured result of submitting a template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplatePayload {
	pub name: String,
	pub sections: Vec<SelectionEntry>,
}

impl TemplatePayload {
	/// Render the payload as indented JSON.
	pub fn to_json_pretty(&self) -> serde_json::Result<String> {
		serde_json::to_string_pretty(self)
	}
}

#[cfg(test)]
mod tests {
	use serde_json::{Value, json};

	use super::*;

	#[test]
	fn json_shape_matches_submission_format() {
		let payload = TemplatePayload {
			name: "Onboarding".into(),
			sections: vec![
				SelectionEntry {
					name: "Section 4".into(),
					sort_order: 0,
				},
				SelectionEntry {
					name: "Section 1".into(),
					sort_order: 1,
				},
			],
		};

		let rendered = payload.to_json_pretty().expect("json");
		let value: Value = serde_json::from_str(&rendered).expect("parse");
		assert_eq!(
			value,
			json!({
				"name": "Onboarding",
				"sections": [
					{ "name": "Section 4", "sortOrder": 0 },
					{ "name": "Section 1", "sortOrder": 1 },
				],
			})
		);
		assert!(rendered.contains('\n'), "expected indented output");
	}
}
