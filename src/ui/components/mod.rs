//! Reusable widgets for the panels.

mod chips;
mod feedback;
mod input;

pub(crate) use chips::{chip_lines, scroll_offset};
pub(crate) use feedback::render_feedback;
pub use input::TextInput;
