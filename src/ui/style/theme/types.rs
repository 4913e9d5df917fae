use ratatui::style::Style;

use crate::panels::FeedbackKind;

/// Styles for every element the UI draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
	/// Panel title.
	pub title: Style,
	/// Input labels.
	pub prompt: Style,
	/// Border of an unfocused input or block.
	pub border: Style,
	/// Border of the focused input or block.
	pub border_focused: Style,
	/// Synonym chips.
	pub chip: Style,
	/// The chip under the cursor while the results are focused.
	pub chip_selected: Style,
	/// Separators, placeholders and the key hint footer.
	pub muted: Style,
	pub success: Style,
	pub error: Style,
	pub warning: Style,
}

impl Theme {
	/// Returns the banner style for a feedback message.
	#[must_use]
	pub fn feedback_style(&self, kind: FeedbackKind) -> Style {
		match kind {
			FeedbackKind::Success => self.success,
			FeedbackKind::Error => self.error,
			FeedbackKind::Warning => self.warning,
		}
	}

	#[must_use]
	pub fn border_style(&self, focused: bool) -> Style {
		if focused {
			self.border_focused
		} else {
			self.border
		}
	}
}

/// A named theme together with its alternate names.
#[derive(Debug, Clone, Copy)]
pub struct ThemeDefinition {
	pub name: &'static str,
	pub aliases: &'static [&'static str],
	pub theme: Theme,
}

impl ThemeDefinition {
	pub(super) fn matches(&self, normalized: &str) -> bool {
		self.name.eq_ignore_ascii_case(normalized)
			|| self
				.aliases
				.iter()
				.any(|alias| alias.eq_ignore_ascii_case(normalized))
	}
}
