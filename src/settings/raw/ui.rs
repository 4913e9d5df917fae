use serde::Deserialize;
use synonyms::ui::style::DEFAULT_THEME_NAME;

use crate::cli::CliArgs;

/// UI related configuration values prior to validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct UiSection {
	pub(super) theme: Option<String>,
	pub(super) initial_word: Option<String>,
	pub(super) return_to_search_on_add: Option<bool>,
}

pub(super) struct UiResolution {
	pub(super) theme: String,
	pub(super) initial_word: Option<String>,
	pub(super) return_to_search_on_add: bool,
}

impl UiSection {
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(theme) = cli.theme.clone() {
			self.theme = Some(theme);
		}
		if let Some(word) = cli.word.clone() {
			self.initial_word = Some(word);
		}
		if let Some(enabled) = cli.return_to_search {
			self.return_to_search_on_add = Some(enabled);
		}
	}

	pub(super) fn finalize(self) -> UiResolution {
		UiResolution {
			theme: self
				.theme
				.unwrap_or_else(|| DEFAULT_THEME_NAME.to_string()),
			initial_word: self
				.initial_word
				.map(|word| word.trim().to_string())
				.filter(|word| !word.is_empty()),
			return_to_search_on_add: self.return_to_search_on_add.unwrap_or(true),
		}
	}
}
