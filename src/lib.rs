//! Core crate exports for searching and adding synonyms from the terminal.
//!
//! The library holds the panel state machines, the HTTP client for the lookup
//! service, the background request worker and the ratatui front end. The
//! `synonyms` binary layers CLI parsing and configuration on top.

pub mod api;
pub mod app_dirs;
pub mod logging;
pub mod panels;
pub mod ui;

pub use api::{AddRequest, ApiError, ClientOptions, HttpSynonymsApi, SynonymsApi};
pub use panels::{AddField, AddPanel, Feedback, FeedbackKind, SearchPanel, parse_synonyms};
pub use ui::style::{
	Theme, ThemeDefinition, by_name as theme_by_name, default_theme,
	definitions as theme_definitions, names as theme_names,
};
pub use ui::{App, KeyOutcome, PanelMode, SynonymsUi};
