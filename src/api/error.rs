use thiserror::Error;

/// Failures raised while talking to the synonym service.
#[derive(Debug, Error)]
pub enum ApiError {
	#[error("failed to build HTTP client: {0}")]
	Client(#[source] reqwest::Error),
	#[error("request to {url} failed: {source}")]
	Transport {
		url: String,
		#[source]
		source: reqwest::Error,
	},
	#[error("{url} responded with status {status}")]
	Status { url: String, status: u16 },
	#[error("could not decode response from {url}: {source}")]
	Decode {
		url: String,
		#[source]
		source: reqwest::Error,
	},
}

impl ApiError {
	/// Whether the service answered at all, as opposed to the request never
	/// reaching it.
	#[must_use]
	pub fn is_transport(&self) -> bool {
		matches!(self, Self::Client(_) | Self::Transport { .. })
	}
}
