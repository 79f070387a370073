use ratatui::style::{Color, Modifier, Style};

use super::types::{Theme, ThemeDefinition};

const DEFAULT: Theme = Theme {
	header: Style::new()
		.fg(Color::Black)
		.bg(Color::Cyan)
		.add_modifier(Modifier::BOLD),
	row_highlight: Style::new().bg(Color::DarkGray),
	prompt: Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD),
	empty: Style::new().fg(Color::DarkGray),
	highlight: Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
	error: Style::new().fg(Color::LightRed),
};

const LIGHT: Theme = Theme {
	header: Style::new()
		.fg(Color::White)
		.bg(Color::Blue)
		.add_modifier(Modifier::BOLD),
	row_highlight: Style::new().bg(Color::Gray),
	prompt: Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD),
	empty: Style::new().fg(Color::Gray),
	highlight: Style::new().fg(Color::Magenta).add_modifier(Modifier::BOLD),
	error: Style::new().fg(Color::Red),
};

const SOLARIZED: Theme = Theme {
	header: Style::new()
		.fg(Color::Rgb(0xfd, 0xf6, 0xe3))
		.bg(Color::Rgb(0x26, 0x8b, 0xd2))
		.add_modifier(Modifier::BOLD),
	row_highlight: Style::new().bg(Color::Rgb(0x07, 0x36, 0x42)),
	prompt: Style::new().fg(Color::Rgb(0x2a, 0xa1, 0x98)),
	empty: Style::new().fg(Color::Rgb(0x58, 0x6e, 0x75)),
	highlight: Style::new()
		.fg(Color::Rgb(0xb5, 0x89, 0x00))
		.add_modifier(Modifier::BOLD),
	error: Style::new().fg(Color::Rgb(0xdc, 0x32, 0x2f)),
};

pub(super) const DEFINITIONS: [ThemeDefinition; 3] = [
	ThemeDefinition::new("default", DEFAULT).with_aliases(&["dark"]),
	ThemeDefinition::new("light", LIGHT),
	ThemeDefinition::new("solarized", SOLARIZED).with_aliases(&["solarized-dark"]),
];

pub fn default_theme() -> Theme {
	DEFAULT
}
