use anyhow::{Context, Result};
use formsmith::{TemplateOutcome, TemplatePayload};

const CANCELLED: &str = "Template creation cancelled";

/// Format the outcome as the template name followed by numbered sections.
pub(crate) fn format_outcome_plain(outcome: &TemplateOutcome) -> String {
	match outcome {
		TemplateOutcome::Submitted(payload) => format_payload_plain(payload),
		TemplateOutcome::Cancelled => CANCELLED.to_string(),
	}
}

fn format_payload_plain(payload: &TemplatePayload) -> String {
	let mut lines = vec![payload.name.clone()];
	lines.extend(
		payload
			.sections
			.iter()
			.map(|entry| format!("{}. {}", entry.sort_order + 1, entry.name)),
	);
	lines.join("\n")
}

/// Print a plain-text representation of the outcome.
pub(crate) fn print_plain(outcome: &TemplateOutcome) {
	println!("{}", format_outcome_plain(outcome));
}

/// Format the outcome as pretty JSON. A cancelled session has no payload and
/// keeps the plain message.
pub(crate) fn format_outcome_json(outcome: &TemplateOutcome) -> Result<String> {
	match outcome {
		TemplateOutcome::Submitted(payload) => payload
			.to_json_pretty()
			.context("failed to encode template payload"),
		TemplateOutcome::Cancelled => Ok(CANCELLED.to_string()),
	}
}

/// Print the JSON representation of the outcome.
pub(crate) fn print_json(outcome: &TemplateOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}
