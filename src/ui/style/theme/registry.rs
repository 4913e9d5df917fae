use super::builtins::BUILT_IN_DEFINITIONS;
use super::types::{Theme, ThemeDefinition};

fn normalize_name(name: &str) -> String {
	name.trim().replace([' ', '_'], "-").to_ascii_lowercase()
}

/// Lookup a theme by case-insensitive name or alias.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let normalized = normalize_name(name);
	BUILT_IN_DEFINITIONS
		.iter()
		.find(|definition| definition.matches(&normalized))
		.map(|definition| definition.theme)
}

/// Return the canonical theme names, sorted.
#[must_use]
pub fn names() -> Vec<&'static str> {
	let mut names: Vec<&'static str> = BUILT_IN_DEFINITIONS
		.iter()
		.map(|definition| definition.name)
		.collect();
	names.sort_unstable_by_key(|name| name.to_ascii_lowercase());
	names
}

/// Every built-in theme definition.
#[must_use]
pub fn definitions() -> &'static [ThemeDefinition] {
	BUILT_IN_DEFINITIONS
}
