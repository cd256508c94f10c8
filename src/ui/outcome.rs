use formsmith_core::TemplatePayload;

/// How an interactive session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateOutcome {
	/// The user submitted a valid template.
	Submitted(TemplatePayload),
	/// The user left without submitting.
	Cancelled,
}

impl TemplateOutcome {
	#[must_use]
	pub fn payload(&self) -> Option<&TemplatePayload> {
		match self {
			Self::Submitted(payload) => Some(payload),
			Self::Cancelled => None,
		}
	}
}
