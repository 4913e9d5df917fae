use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;
use synonyms::{
	AddField, AddPanel, ClientOptions, Feedback, HttpSynonymsApi, SearchPanel, SynonymsApi,
	SynonymsUi,
};
use tracing::info;

use crate::cli::Command;
use crate::settings::ResolvedConfig;

/// Result of a one-shot command, printed by [`crate::cli`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct Report {
	pub(crate) word: String,
	pub(crate) synonyms: Vec<String>,
	pub(crate) feedback: Option<Feedback>,
}

impl Report {
	/// Warnings and errors make the process exit non-zero.
	pub(crate) fn succeeded(&self) -> bool {
		self.feedback
			.as_ref()
			.is_none_or(Feedback::is_success)
	}
}

/// Coordinates building the API client and running either the interactive UI
/// or a one-shot command.
pub(crate) struct SynonymsWorkflow {
	api: Arc<dyn SynonymsApi>,
	config: ResolvedConfig,
}

impl SynonymsWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let options = ClientOptions::new(config.base_url.clone()).with_timeout(config.timeout());
		let api = HttpSynonymsApi::new(options).context("failed to build HTTP client")?;
		Ok(Self::with_api(Arc::new(api), config))
	}

	pub(crate) fn with_api(api: Arc<dyn SynonymsApi>, config: ResolvedConfig) -> Self {
		Self { api, config }
	}

	pub(crate) fn run_interactive(self) -> Result<()> {
		info!(base_url = %self.config.base_url, "starting synonyms UI");
		SynonymsUiFactory::build(self.api, self.config).run()
	}

	pub(crate) fn run_command(&self, command: &Command) -> Report {
		match command {
			Command::Lookup { word } => self.lookup(word),
			Command::Add { word, synonyms } => self.add(word, synonyms),
		}
	}

	/// Run the search panel flow once, synchronously.
	pub(crate) fn lookup(&self, word: &str) -> Report {
		let mut panel = SearchPanel::default();
		let Some(resolved) = panel.search(Some(word)) else {
			return Report {
				word: word.trim().to_string(),
				synonyms: Vec::new(),
				feedback: panel.feedback().cloned(),
			};
		};

		let result = self.api.lookup(&resolved);
		panel.apply_lookup(&resolved, result);

		Report {
			word: resolved,
			synonyms: panel.synonyms().to_vec(),
			feedback: panel.feedback().cloned(),
		}
	}

	/// Run the add panel flow once, synchronously.
	pub(crate) fn add(&self, word: &str, raw_synonyms: &str) -> Report {
		let mut panel = AddPanel::default();
		panel.set_field(AddField::Word, word);
		panel.set_field(AddField::Synonyms, raw_synonyms);

		let Some(request) = panel.submit() else {
			return Report {
				word: word.trim().to_string(),
				synonyms: Vec::new(),
				feedback: panel.feedback().cloned(),
			};
		};

		let result = self.api.create(&request);
		panel.apply_create(result);

		Report {
			word: request.word,
			synonyms: request.synonyms,
			feedback: panel.feedback().cloned(),
		}
	}
}

/// Helper for translating resolved configuration into a configured `SynonymsUi`.
struct SynonymsUiFactory {
	ui: SynonymsUi,
}

impl SynonymsUiFactory {
	fn build(api: Arc<dyn SynonymsApi>, config: ResolvedConfig) -> SynonymsUi {
		let ResolvedConfig {
			theme,
			initial_word,
			return_to_search_on_add,
			..
		} = config;

		Self::new(api)
			.with_theme(&theme)
			.with_initial_word(initial_word)
			.with_return_to_search_on_add(return_to_search_on_add)
			.finish()
	}

	fn new(api: Arc<dyn SynonymsApi>) -> Self {
		Self {
			ui: SynonymsUi::new(api),
		}
	}

	fn with_theme(mut self, theme: &str) -> Self {
		self.ui = self.ui.with_theme_name(theme);
		self
	}

	fn with_initial_word(mut self, word: Option<String>) -> Self {
		if let Some(word) = word {
			self.ui = self.ui.with_initial_word(word);
		}
		self
	}

	fn with_return_to_search_on_add(mut self, enabled: bool) -> Self {
		self.ui = self.ui.with_return_to_search_on_add(enabled);
		self
	}

	fn finish(self) -> SynonymsUi {
		self.ui
	}
}
