//! Interactive terminal UI.
//!
//! [`App`] is the container that owns the search and add panels. The
//! remaining submodules implement the event loop, key handling, rendering,
//! and the widgets and themes they use.

mod actions;
mod builder;
pub mod components;
mod render;
mod runtime;
mod state;
pub mod style;

pub use actions::KeyOutcome;
pub use builder::SynonymsUi;
pub use state::{App, PanelMode};
