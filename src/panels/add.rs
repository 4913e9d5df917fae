use tracing::warn;

use super::Feedback;
use crate::api::{AddRequest, ApiError};

pub const MISSING_FIELDS_MESSAGE: &str = "Please enter both a word and its synonyms.";
pub const ADD_SUCCESS_MESSAGE: &str = "Synonyms added successfully!";
pub const ADD_ERROR_MESSAGE: &str = "There was an error adding the synonyms.";

/// Split a comma-separated list and trim every entry.
///
/// Empty entries produced by doubled or trailing commas are kept.
pub fn parse_synonyms(raw: &str) -> Vec<String> {
	raw.split(',')
		.map(|synonym| synonym.trim().to_string())
		.collect()
}

/// Input fields on the add screen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AddField {
	#[default]
	Word,
	Synonyms,
}

impl AddField {
	pub fn next(self) -> Self {
		match self {
			Self::Word => Self::Synonyms,
			Self::Synonyms => Self::Word,
		}
	}

	pub fn label(self) -> &'static str {
		match self {
			Self::Word => "Word",
			Self::Synonyms => "Synonyms (comma-separated)",
		}
	}

	pub fn placeholder(self) -> &'static str {
		match self {
			Self::Word => "Enter a word",
			Self::Synonyms => "Enter synonyms (e.g., clean, tidy)",
		}
	}
}

/// State of the add screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddPanel {
	word: String,
	synonyms: String,
	feedback: Option<Feedback>,
}

impl AddPanel {
	pub fn word(&self) -> &str {
		&self.word
	}

	pub fn raw_synonyms(&self) -> &str {
		&self.synonyms
	}

	pub fn field(&self, field: AddField) -> &str {
		match field {
			AddField::Word => &self.word,
			AddField::Synonyms => &self.synonyms,
		}
	}

	pub fn set_field(&mut self, field: AddField, value: impl Into<String>) {
		match field {
			AddField::Word => self.word = value.into(),
			AddField::Synonyms => self.synonyms = value.into(),
		}
	}

	pub fn feedback(&self) -> Option<&Feedback> {
		self.feedback.as_ref()
	}

	/// Focusing either field dismisses feedback.
	pub fn focus(&mut self, _field: AddField) {
		self.feedback = None;
	}

	/// Validate the form and build the request to send.
	///
	/// Returns `None` after flagging the form when either field is blank.
	pub fn submit(&mut self) -> Option<AddRequest> {
		if self.word.trim().is_empty() || self.synonyms.trim().is_empty() {
			self.feedback = Some(Feedback::warning(MISSING_FIELDS_MESSAGE));
			return None;
		}

		Some(AddRequest::new(
			self.word.trim(),
			parse_synonyms(&self.synonyms),
		))
	}

	/// Apply the outcome of a create request, returning whether it succeeded.
	pub fn apply_create(&mut self, result: Result<(), ApiError>) -> bool {
		match result {
			Ok(()) => {
				self.word.clear();
				self.synonyms.clear();
				self.feedback = Some(Feedback::success(ADD_SUCCESS_MESSAGE));
				true
			}
			Err(err) => {
				warn!(word = %self.word, error = %err, "adding synonyms failed");
				self.feedback = Some(Feedback::error(ADD_ERROR_MESSAGE));
				false
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::panels::FeedbackKind;

	fn filled(word: &str, synonyms: &str) -> AddPanel {
		let mut panel = AddPanel::default();
		panel.set_field(AddField::Word, word);
		panel.set_field(AddField::Synonyms, synonyms);
		panel
	}

	#[test]
	fn synonyms_are_split_and_trimmed() {
		assert_eq!(parse_synonyms("joyful, content"), vec!["joyful", "content"]);
	}

	#[test]
	fn empty_entries_pass_through() {
		assert_eq!(parse_synonyms("a,,b,"), vec!["a", "", "b", ""]);
	}

	#[test]
	fn submit_builds_trimmed_request() {
		let mut panel = filled("happy", "joyful, content");
		let request = panel.submit().expect("request");
		assert_eq!(
			request,
			AddRequest::new("happy", vec!["joyful".into(), "content".into()])
		);
		assert!(panel.feedback().is_none());
	}

	#[test]
	fn blank_fields_are_rejected_with_warning() {
		for (word, synonyms) in [("", ""), ("happy", ""), ("", "joyful"), ("happy", "  ")] {
			let mut panel = filled(word, synonyms);
			assert_eq!(panel.submit(), None, "word={word:?} synonyms={synonyms:?}");
			let feedback = panel.feedback().expect("feedback");
			assert_eq!(feedback.kind, FeedbackKind::Warning);
			assert_eq!(feedback.message, MISSING_FIELDS_MESSAGE);
		}
	}

	#[test]
	fn success_clears_fields() {
		let mut panel = filled("happy", "joyful, content");
		assert!(panel.apply_create(Ok(())));
		assert_eq!(panel.word(), "");
		assert_eq!(panel.raw_synonyms(), "");
		let feedback = panel.feedback().expect("feedback");
		assert_eq!(feedback.kind, FeedbackKind::Success);
		assert_eq!(feedback.message, ADD_SUCCESS_MESSAGE);
	}

	#[test]
	fn failure_keeps_fields() {
		let mut panel = filled("happy", "joyful, content");
		let err = ApiError::Status {
			url: "stub://".into(),
			status: 500,
		};
		assert!(!panel.apply_create(Err(err)));
		assert_eq!(panel.word(), "happy");
		assert_eq!(panel.raw_synonyms(), "joyful, content");
		let feedback = panel.feedback().expect("feedback");
		assert_eq!(feedback.kind, FeedbackKind::Error);
		assert_eq!(feedback.message, ADD_ERROR_MESSAGE);
	}

	#[test]
	fn focusing_a_field_clears_feedback() {
		let mut panel = AddPanel::default();
		panel.submit();
		panel.focus(AddField::Synonyms);
		assert!(panel.feedback().is_none());
	}

	#[test]
	fn fields_cycle() {
		assert_eq!(AddField::Word.next(), AddField::Synonyms);
		assert_eq!(AddField::Synonyms.next(), AddField::Word);
	}
}
