use serde::Deserialize;

use crate::cli::CliArgs;

/// Lookup service settings as they are read from disk.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct ApiSection {
	pub(super) base_url: Option<String>,
	pub(super) timeout_secs: Option<u64>,
}

pub(super) struct ApiResolution {
	pub(super) base_url: String,
	pub(super) timeout_secs: Option<u64>,
}

impl ApiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(url) = cli.api_url.clone() {
			self.base_url = Some(url);
		}
		if let Some(timeout) = cli.timeout {
			self.timeout_secs = Some(timeout);
		}
	}

	pub(super) fn finalize(self) -> ApiResolution {
		ApiResolution {
			base_url: self.base_url.unwrap_or_default(),
			timeout_secs: self.timeout_secs,
		}
	}
}
