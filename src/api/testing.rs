//! In-memory [`SynonymsApi`] used by unit tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::thread;
use std::time::Duration;

use super::{AddRequest, ApiError, SynonymsApi};

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Call {
	Lookup(String),
	Create(AddRequest),
}

#[derive(Debug, Clone)]
enum Canned {
	Synonyms(Vec<String>),
	Status(u16),
}

/// Answers lookups from a fixed table and records every call.
///
/// Unknown words return an empty list; creates succeed unless
/// [`StubApi::failing_create`] was used. Delays make answers arrive late.
#[derive(Debug, Default)]
pub(crate) struct StubApi {
	lookups: HashMap<String, Canned>,
	lookup_delays: HashMap<String, Duration>,
	create_status: Option<u16>,
	create_delay: Option<Duration>,
	calls: Mutex<Vec<Call>>,
}

impl StubApi {
	pub(crate) fn with_synonyms<I, S>(mut self, word: &str, synonyms: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let synonyms = synonyms.into_iter().map(Into::into).collect();
		self.lookups
			.insert(word.to_string(), Canned::Synonyms(synonyms));
		self
	}

	pub(crate) fn failing_lookup(mut self, word: &str, status: u16) -> Self {
		self.lookups.insert(word.to_string(), Canned::Status(status));
		self
	}

	pub(crate) fn failing_create(mut self, status: u16) -> Self {
		self.create_status = Some(status);
		self
	}

	pub(crate) fn delayed_lookup(mut self, word: &str, delay: Duration) -> Self {
		self.lookup_delays.insert(word.to_string(), delay);
		self
	}

	pub(crate) fn delayed_create(mut self, delay: Duration) -> Self {
		self.create_delay = Some(delay);
		self
	}

	pub(crate) fn calls(&self) -> Vec<Call> {
		self.calls
			.lock()
			.unwrap_or_else(|poisoned| poisoned.into_inner())
			.clone()
	}

	fn record(&self, call: Call) {
		self.calls
			.lock()
			.unwrap_or_else(|poisoned| poisoned.into_inner())
			.push(call);
	}
}

impl SynonymsApi for StubApi {
	fn lookup(&self, word: &str) -> Result<Vec<String>, ApiError> {
		self.record(Call::Lookup(word.to_string()));
		if let Some(delay) = self.lookup_delays.get(word) {
			thread::sleep(*delay);
		}
		match self.lookups.get(word) {
			Some(Canned::Synonyms(synonyms)) => Ok(synonyms.clone()),
			Some(Canned::Status(status)) => Err(ApiError::Status {
				url: format!("stub://{word}"),
				status: *status,
			}),
			None => Ok(Vec::new()),
		}
	}

	fn create(&self, request: &AddRequest) -> Result<(), ApiError> {
		self.record(Call::Create(request.clone()));
		if let Some(delay) = self.create_delay {
			thread::sleep(delay);
		}
		match self.create_status {
			Some(status) => Err(ApiError::Status {
				url: "stub://".to_string(),
				status,
			}),
			None => Ok(()),
		}
	}
}
