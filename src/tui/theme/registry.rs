use super::builtins::DEFINITIONS;
use super::types::Theme;

/// Resolve a theme by name or alias, ignoring case.
#[must_use]
pub fn by_name(name: &str) -> Option<Theme> {
	let name = name.trim();
	DEFINITIONS
		.iter()
		.find(|definition| definition.answers_to(name))
		.map(|definition| definition.theme)
}

/// Names of the bundled themes in registration order.
#[must_use]
pub fn names() -> Vec<&'static str> {
	DEFINITIONS.iter().map(|definition| definition.name).collect()
}
