mod builtins;
mod registry;
mod types;

pub use builtins::{DEFAULT_THEME_NAME, default_theme};
pub use registry::{by_name, definitions, names};
pub use types::{Theme, ThemeDefinition};

impl Default for Theme {
	fn default() -> Self {
		default_theme()
	}
}
