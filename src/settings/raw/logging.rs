use std::path::PathBuf;

use serde::Deserialize;

use crate::cli::CliArgs;

const DEFAULT_LEVEL: &str = "info";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct LoggingSection {
	pub(super) level: Option<String>,
	pub(super) file: Option<PathBuf>,
}

pub(super) struct LoggingResolution {
	pub(super) level: String,
	pub(super) file: Option<PathBuf>,
}

impl LoggingSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(file) = cli.log_file.clone() {
			self.file = Some(file);
		}
	}

	pub(super) fn finalize(self) -> LoggingResolution {
		LoggingResolution {
			level: self.level.unwrap_or_else(|| DEFAULT_LEVEL.to_string()),
			file: self.file,
		}
	}
}
