use thiserror::Error;

/// Reasons a template cannot be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
	#[error("template name is required")]
	MissingName,
}
