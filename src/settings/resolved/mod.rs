use std::path::PathBuf;
use std::time::Duration;

use synonyms::logging;
use tracing::Level;

mod errors;
mod sources;
mod summary;
mod validation;

pub(crate) use errors::ConfigError;
pub(crate) use sources::{ConfigSources, SettingSource};

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	/// Prefix for lookups (`<base_url><word>`) and target of creates.
	pub base_url: String,
	pub timeout_secs: Option<u64>,
	pub theme: String,
	pub initial_word: Option<String>,
	pub return_to_search_on_add: bool,
	pub log_level: String,
	pub log_file: Option<PathBuf>,
}

impl ResolvedConfig {
	pub(super) fn validate(&self, sources: &ConfigSources) -> Result<(), ConfigError> {
		validation::validate(self, sources)
	}

	pub fn timeout(&self) -> Option<Duration> {
		self.timeout_secs.map(Duration::from_secs)
	}

	/// The configured log level. `validate` has already rejected bad names.
	pub fn tracing_level(&self) -> Level {
		logging::parse_level(&self.log_level).unwrap_or(Level::INFO)
	}

	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		summary::print_summary(self);
	}
}
