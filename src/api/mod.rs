//! Access to the remote synonym lookup service.
//!
//! [`SynonymsApi`] is the seam between the UI and the network. The HTTP
//! implementation lives in [`http`], and [`worker`] runs requests on a
//! background thread so the event loop never blocks on the network.

mod commands;
mod error;
mod http;
mod types;
pub(crate) mod worker;

#[cfg(test)]
pub(crate) mod testing;

pub use commands::{ApiCommand, ApiResult};
pub use error::ApiError;
pub use http::{ClientOptions, HttpSynonymsApi};
pub use types::{AddRequest, LookupResponse};

/// Operations offered by the synonym lookup service.
pub trait SynonymsApi: Send + Sync {
	/// Fetch the synonyms stored for `word`.
	///
	/// An empty vector means the service knows no synonyms for the word.
	fn lookup(&self, word: &str) -> Result<Vec<String>, ApiError>;

	/// Store a new word together with its synonyms.
	fn create(&self, request: &AddRequest) -> Result<(), ApiError>;
}
