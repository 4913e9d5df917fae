use super::{AddRequest, ApiError};

/// Commands understood by the background request worker.
#[derive(Debug)]
pub enum ApiCommand {
	/// Fetch synonyms for a word.
	Lookup {
		/// Identifier that lets the UI correlate the response with its request.
		id: u64,
		word: String,
	},
	/// Store a new word and its synonyms.
	Create { id: u64, request: AddRequest },
	/// Stop the background worker thread.
	Shutdown,
}

/// Completed requests reported back by the worker.
#[derive(Debug)]
pub enum ApiResult {
	Lookup {
		id: u64,
		word: String,
		result: Result<Vec<String>, ApiError>,
	},
	Create {
		id: u64,
		result: Result<(), ApiError>,
	},
}
