use tracing::warn;

use super::Feedback;
use crate::api::ApiError;

pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a word to search for synonyms";

/// Message shown when a lookup produced nothing to display.
pub fn no_synonyms_message(word: &str) -> String {
	format!("No synonyms found for \"{word}\"")
}

/// State of the search screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPanel {
	query: String,
	synonyms: Vec<String>,
	results_word: Option<String>,
	feedback: Option<Feedback>,
}

impl SearchPanel {
	pub fn new(query: impl Into<String>) -> Self {
		Self {
			query: query.into(),
			..Self::default()
		}
	}

	pub fn query(&self) -> &str {
		&self.query
	}

	pub fn set_query(&mut self, query: impl Into<String>) {
		self.query = query.into();
	}

	pub fn synonyms(&self) -> &[String] {
		&self.synonyms
	}

	/// The word the current results belong to.
	pub fn results_word(&self) -> Option<&str> {
		self.results_word.as_deref()
	}

	pub fn feedback(&self) -> Option<&Feedback> {
		self.feedback.as_ref()
	}

	pub fn set_feedback(&mut self, feedback: Feedback) {
		self.feedback = Some(feedback);
	}

	/// Focusing the input only dismisses feedback.
	pub fn focus_input(&mut self) {
		self.feedback = None;
	}

	/// Resolve which word to look up.
	///
	/// A non-blank `word` wins over the query field. Returns `None` after
	/// flagging the empty query when there is nothing to search for.
	pub fn search(&mut self, word: Option<&str>) -> Option<String> {
		let resolved = word
			.map(str::trim)
			.filter(|word| !word.is_empty())
			.or_else(|| Some(self.query.trim()).filter(|word| !word.is_empty()))
			.map(str::to_string);

		if resolved.is_none() {
			self.feedback = Some(Feedback::warning(EMPTY_QUERY_MESSAGE));
			self.synonyms.clear();
			self.results_word = None;
		}
		resolved
	}

	/// Apply the outcome of looking up `word`.
	///
	/// An empty list and a failed request look the same to the user.
	pub fn apply_lookup(&mut self, word: &str, result: Result<Vec<String>, ApiError>) {
		let synonyms = match result {
			Ok(synonyms) => synonyms,
			Err(err) => {
				warn!(
					%word,
					transport = err.is_transport(),
					error = %err,
					"lookup failed, showing empty result"
				);
				Vec::new()
			}
		};

		if synonyms.is_empty() {
			self.synonyms.clear();
			self.results_word = None;
			self.feedback = Some(Feedback::error(no_synonyms_message(word)));
		} else {
			self.synonyms = synonyms;
			self.results_word = Some(word.to_string());
			self.query = word.to_string();
			self.feedback = None;
		}
	}

	/// Drop the query, results and feedback.
	pub fn reset(&mut self) {
		*self = Self::default();
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::panels::FeedbackKind;

	fn failure() -> ApiError {
		ApiError::Status {
			url: "stub://".into(),
			status: 503,
		}
	}

	#[test]
	fn search_without_override_uses_query_field() {
		let mut panel = SearchPanel::new("same");
		assert_eq!(panel.search(None).as_deref(), Some("same"));
		assert!(panel.feedback().is_none());
	}

	#[test]
	fn override_wins_over_query_field() {
		let mut panel = SearchPanel::new("same");
		assert_eq!(panel.search(Some("alike")).as_deref(), Some("alike"));
	}

	#[test]
	fn blank_override_falls_back_to_query_field() {
		let mut panel = SearchPanel::new("same");
		assert_eq!(panel.search(Some("  ")).as_deref(), Some("same"));
	}

	#[test]
	fn blank_query_asks_for_a_word_and_clears_results() {
		let mut panel = SearchPanel::new("same");
		panel.apply_lookup("same", Ok(vec!["alike".into()]));
		panel.set_query("   ");

		assert_eq!(panel.search(None), None);
		assert!(panel.synonyms().is_empty());
		let feedback = panel.feedback().expect("feedback");
		assert_eq!(feedback.message, EMPTY_QUERY_MESSAGE);
		assert_eq!(feedback.kind, FeedbackKind::Warning);
	}

	#[test]
	fn successful_lookup_replaces_results_and_header() {
		let mut panel = SearchPanel::new("same");
		panel.set_feedback(Feedback::warning("stale"));

		panel.apply_lookup("alike", Ok(vec!["same".into(), "similar".into()]));

		assert_eq!(panel.synonyms(), ["same", "similar"]);
		assert_eq!(panel.results_word(), Some("alike"));
		assert_eq!(panel.query(), "alike");
		assert!(panel.feedback().is_none());
	}

	#[test]
	fn empty_and_failed_lookups_share_feedback() {
		let mut empty = SearchPanel::new("error");
		empty.apply_lookup("error", Ok(Vec::new()));
		let mut failed = SearchPanel::new("error");
		failed.apply_lookup("error", Err(failure()));

		assert_eq!(empty.feedback(), failed.feedback());
		assert_eq!(
			failed.feedback().map(|feedback| feedback.message.as_str()),
			Some("No synonyms found for \"error\"")
		);
		assert!(failed.synonyms().is_empty());
	}

	#[test]
	fn failed_lookup_keeps_query_field() {
		let mut panel = SearchPanel::new("same");
		panel.apply_lookup("same", Ok(vec!["alike".into()]));

		panel.apply_lookup("akin", Err(failure()));

		assert_eq!(panel.query(), "same");
		assert!(panel.synonyms().is_empty());
		assert_eq!(panel.results_word(), None);
	}

	#[test]
	fn focusing_input_only_clears_feedback() {
		let mut panel = SearchPanel::new("same");
		panel.apply_lookup("same", Ok(vec!["alike".into()]));
		panel.set_feedback(Feedback::error("boom"));

		panel.focus_input();

		assert!(panel.feedback().is_none());
		assert_eq!(panel.synonyms(), ["alike"]);
		assert_eq!(panel.query(), "same");
	}
}
