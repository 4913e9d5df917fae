use serde::{Deserialize, Serialize};

/// Body returned by the lookup endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LookupResponse {
	#[serde(default)]
	pub synonyms: Option<Vec<String>>,
}

impl LookupResponse {
	/// Consume the response, treating a missing list as an empty one.
	#[must_use]
	pub fn into_synonyms(self) -> Vec<String> {
		self.synonyms.unwrap_or_default()
	}
}

/// Body posted to the create endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AddRequest {
	pub word: String,
	pub synonyms: Vec<String>,
}

impl AddRequest {
	pub fn new(word: impl Into<String>, synonyms: Vec<String>) -> Self {
		Self {
			word: word.into(),
			synonyms,
		}
	}
}
