use std::fmt;

use serde::Serialize;

/// Severity of a [`Feedback`] message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
	Success,
	Error,
	Warning,
}

/// Short user-facing status message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Feedback {
	pub message: String,
	pub kind: FeedbackKind,
}

impl Feedback {
	pub fn new(kind: FeedbackKind, message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			kind,
		}
	}

	pub fn success(message: impl Into<String>) -> Self {
		Self::new(FeedbackKind::Success, message)
	}

	pub fn error(message: impl Into<String>) -> Self {
		Self::new(FeedbackKind::Error, message)
	}

	pub fn warning(message: impl Into<String>) -> Self {
		Self::new(FeedbackKind::Warning, message)
	}

	pub fn is_success(&self) -> bool {
		self.kind == FeedbackKind::Success
	}
}

impl fmt::Display for Feedback {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.message)
	}
}
