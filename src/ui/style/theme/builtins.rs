use ratatui::style::{Color, Modifier, Style};

use super::types::{Theme, ThemeDefinition};

pub const SLATE: Theme = Theme {
	title: Style::new()
		.fg(Color::Rgb(226, 232, 240))
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::Rgb(148, 163, 184)),
	border: Style::new().fg(Color::Rgb(71, 85, 105)),
	border_focused: Style::new().fg(Color::Rgb(14, 165, 233)),
	chip: Style::new().fg(Color::Rgb(96, 165, 250)),
	chip_selected: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.bg(Color::Rgb(96, 165, 250))
		.add_modifier(Modifier::BOLD),
	muted: Style::new().fg(Color::Rgb(100, 116, 139)),
	success: Style::new()
		.fg(Color::Rgb(255, 255, 255))
		.bg(Color::Rgb(34, 197, 94)),
	error: Style::new()
		.fg(Color::Rgb(255, 255, 255))
		.bg(Color::Rgb(220, 38, 38)),
	warning: Style::new()
		.fg(Color::Rgb(255, 255, 255))
		.bg(Color::Rgb(234, 179, 8)),
};

pub const LIGHT: Theme = Theme {
	title: Style::new()
		.fg(Color::Rgb(15, 23, 42))
		.add_modifier(Modifier::BOLD),
	prompt: Style::new().fg(Color::Rgb(55, 65, 81)),
	border: Style::new().fg(Color::Rgb(209, 213, 219)),
	border_focused: Style::new().fg(Color::Rgb(2, 132, 199)),
	chip: Style::new().fg(Color::Rgb(37, 99, 235)),
	chip_selected: Style::new()
		.fg(Color::Rgb(255, 255, 255))
		.bg(Color::Rgb(30, 64, 175))
		.add_modifier(Modifier::BOLD),
	muted: Style::new().fg(Color::Rgb(107, 114, 128)),
	success: Style::new()
		.fg(Color::Rgb(255, 255, 255))
		.bg(Color::Rgb(34, 197, 94)),
	error: Style::new()
		.fg(Color::Rgb(255, 255, 255))
		.bg(Color::Rgb(220, 38, 38)),
	warning: Style::new()
		.fg(Color::Rgb(17, 24, 39))
		.bg(Color::Rgb(250, 204, 21)),
};

/// Name of the theme returned by [`default_theme`].
pub const DEFAULT_THEME_NAME: &str = "slate";

pub(super) const BUILT_IN_DEFINITIONS: &[ThemeDefinition] = &[
	ThemeDefinition {
		name: DEFAULT_THEME_NAME,
		aliases: &["dark", "default"],
		theme: SLATE,
	},
	ThemeDefinition {
		name: "light",
		aliases: &["day"],
		theme: LIGHT,
	},
];

/// The theme used when none is configured.
#[must_use]
pub fn default_theme() -> Theme {
	SLATE
}
