use std::sync::Arc;

use anyhow::Result;

use super::App;
use super::style::{self, Theme};
use crate::api::SynonymsApi;

/// A small builder for configuring the interactive UI before running it.
pub struct SynonymsUi {
	api: Arc<dyn SynonymsApi>,
	initial_word: Option<String>,
	theme: Option<Theme>,
	return_to_search_on_add: bool,
}

impl SynonymsUi {
	pub fn new(api: Arc<dyn SynonymsApi>) -> Self {
		Self {
			api,
			initial_word: None,
			theme: None,
			return_to_search_on_add: true,
		}
	}

	pub fn with_initial_word(mut self, word: impl Into<String>) -> Self {
		self.initial_word = Some(word.into());
		self
	}

	pub fn with_theme_name(mut self, name: &str) -> Self {
		if let Some(theme) = style::by_name(name) {
			self.theme = Some(theme);
		}
		self
	}

	pub fn with_return_to_search_on_add(mut self, enabled: bool) -> Self {
		self.return_to_search_on_add = enabled;
		self
	}

	/// Assemble the [`App`] without starting the event loop.
	pub fn build<'a>(self) -> App<'a> {
		let mut app = App::new(self.api);
		if let Some(word) = self.initial_word {
			app.set_initial_word(word);
		}
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		app.set_return_to_search_on_add(self.return_to_search_on_add);
		app
	}

	/// Run the interactive UI with the configured options.
	pub fn run(self) -> Result<()> {
		self.build().run()
	}
}
