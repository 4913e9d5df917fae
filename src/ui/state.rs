use std::sync::Arc;
use std::sync::mpsc::TryRecvError;
use std::thread;
use std::time::{Duration, Instant};

use throbber_widgets_tui::ThrobberState;
use tracing::{debug, info};

use super::components::TextInput;
use super::style::Theme;
use crate::api::{ApiResult, SynonymsApi, worker};
use crate::panels::{AddField, AddPanel, FeedbackKind, SearchPanel};

mod requests;

use requests::RequestRuntime;

pub const SEARCH_PLACEHOLDER: &str = "Search word...";

/// Which panel the container shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PanelMode {
	#[default]
	Search,
	Add,
}

/// Focus within the search panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum SearchFocus {
	#[default]
	Input,
	Results,
}

/// The container: owns both panels, the mode switch between them and the
/// requests they issue.
pub struct App<'a> {
	pub(crate) mode: PanelMode,
	pub(crate) search: SearchPanel,
	pub(crate) add: AddPanel,
	pub(crate) search_input: TextInput<'a>,
	pub(crate) word_input: TextInput<'a>,
	pub(crate) synonyms_input: TextInput<'a>,
	pub(crate) search_focus: SearchFocus,
	pub(crate) chip_cursor: usize,
	pub(crate) add_focus: AddField,
	pub theme: Theme,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) return_to_search_on_add: bool,
	pub(super) requests: RequestRuntime,
	pub(crate) initial_results_timeout: Option<Duration>,
}

impl<'a> App<'a> {
	pub fn new(api: Arc<dyn SynonymsApi>) -> Self {
		let (tx, rx, latest_lookup_id) = worker::spawn(api);
		Self {
			mode: PanelMode::Search,
			search: SearchPanel::default(),
			add: AddPanel::default(),
			search_input: TextInput::new("", SEARCH_PLACEHOLDER),
			word_input: TextInput::new("", AddField::Word.placeholder()),
			synonyms_input: TextInput::new("", AddField::Synonyms.placeholder()),
			search_focus: SearchFocus::Input,
			chip_cursor: 0,
			add_focus: AddField::Word,
			theme: Theme::default(),
			throbber_state: ThrobberState::default(),
			return_to_search_on_add: true,
			requests: RequestRuntime::new(tx, rx, latest_lookup_id),
			initial_results_timeout: Some(Duration::from_millis(250)),
		}
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	/// Pre-fill the search field. The word is looked up when the UI starts.
	pub fn set_initial_word(&mut self, word: impl Into<String>) {
		self.search.set_query(word);
		self.sync_search_input();
	}

	pub fn set_return_to_search_on_add(&mut self, enabled: bool) {
		self.return_to_search_on_add = enabled;
	}

	pub fn mode(&self) -> PanelMode {
		self.mode
	}

	pub fn search_panel(&self) -> &SearchPanel {
		&self.search
	}

	pub fn add_panel(&self) -> &AddPanel {
		&self.add
	}

	/// Show `mode`. Entering add mode forgets the search word, results,
	/// feedback and any lookup still in flight. The add form starts fresh
	/// unless a create is still pending or the last one failed; those forms
	/// come back as they were left.
	pub fn switch_to(&mut self, mode: PanelMode) {
		debug!(?mode, "switching panel");
		if mode == PanelMode::Add {
			self.requests.forget_lookup();
			self.search.reset();
			self.sync_search_input();
			self.search_focus = SearchFocus::Input;
			self.chip_cursor = 0;

			let failed = self
				.add
				.feedback()
				.is_some_and(|feedback| feedback.kind == FeedbackKind::Error);
			if !failed && !self.requests.create_in_flight() {
				self.add = AddPanel::default();
				self.sync_add_inputs();
				self.add_focus = AddField::Word;
			}
		}
		self.mode = mode;
	}

	/// Look up `word`, or the search field when `word` is `None`.
	pub fn request_search(&mut self, word: Option<&str>) {
		if let Some(resolved) = self.search.search(word) {
			self.requests.issue_lookup(resolved);
		} else {
			self.requests.forget_lookup();
			self.search_focus = SearchFocus::Input;
		}
	}

	/// Validate the add form and send it.
	pub fn submit_add(&mut self) {
		if let Some(request) = self.add.submit() {
			self.requests.issue_create(request);
		}
	}

	pub(crate) fn focus_search_input(&mut self) {
		self.search_focus = SearchFocus::Input;
		self.search.focus_input();
	}

	pub(crate) fn focus_results(&mut self) {
		if !self.search.synonyms().is_empty() {
			self.search_focus = SearchFocus::Results;
			self.chip_cursor = self.chip_cursor.min(self.search.synonyms().len() - 1);
		}
	}

	pub(crate) fn focus_add_field(&mut self, field: AddField) {
		self.add_focus = field;
		self.add.focus(field);
	}

	pub(crate) fn selected_chip(&self) -> Option<&str> {
		if self.search_focus != SearchFocus::Results {
			return None;
		}
		self.search
			.synonyms()
			.get(self.chip_cursor)
			.map(String::as_str)
	}

	pub fn is_busy(&self) -> bool {
		self.requests.is_in_flight()
	}

	/// Apply every result the worker has delivered so far.
	pub fn pump_results(&mut self) {
		loop {
			match self.requests.try_recv() {
				Ok(result) => self.apply_result(result),
				Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
			}
		}
	}

	fn apply_result(&mut self, result: ApiResult) {
		match result {
			ApiResult::Lookup { id, word, result } => {
				if !self.requests.complete_lookup(id) {
					return;
				}
				self.search.apply_lookup(&word, result);
				self.chip_cursor = 0;
				if self.search.synonyms().is_empty() {
					self.search_focus = SearchFocus::Input;
				}
				self.sync_search_input();
			}
			ApiResult::Create { id, result } => {
				if !self.requests.complete_create(id) {
					return;
				}
				let succeeded = self.add.apply_create(result);
				self.sync_add_inputs();
				// Already back on search: the outcome shows there either way.
				let show_on_search = self.mode == PanelMode::Search
					|| (succeeded && self.return_to_search_on_add);
				if show_on_search {
					if succeeded {
						info!("synonyms added, returning to search");
					}
					self.switch_to(PanelMode::Search);
					if let Some(feedback) = self.add.feedback().cloned() {
						self.search.set_feedback(feedback);
					}
				}
			}
		}
	}

	/// Wait up to `timeout` for outstanding requests, applying results as
	/// they arrive.
	pub fn settle(&mut self, timeout: Duration) {
		let deadline = Instant::now() + timeout;
		loop {
			self.pump_results();
			if !self.is_busy() || Instant::now() >= deadline {
				break;
			}
			thread::sleep(Duration::from_millis(5));
		}
	}

	pub(crate) fn sync_search_input(&mut self) {
		self.search_input.set_text(self.search.query());
	}

	pub(crate) fn sync_add_inputs(&mut self) {
		self.word_input.set_text(self.add.word());
		self.synonyms_input.set_text(self.add.raw_synonyms());
	}

	pub(crate) fn add_input_mut(&mut self, field: AddField) -> &mut TextInput<'a> {
		match field {
			AddField::Word => &mut self.word_input,
			AddField::Synonyms => &mut self.synonyms_input,
		}
	}
}

impl<'a> Drop for App<'a> {
	fn drop(&mut self) {
		self.requests.shutdown();
	}
}
