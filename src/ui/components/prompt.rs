use pkgscope_api::StatusFilter;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Tabs};
use throbber_widgets_tui::{Throbber, ThrobberState};
use unicode_width::UnicodeWidthStr;

use crate::tui::input::SearchInput;
use crate::tui::theme::Theme;

/// Argument bundle for rendering the prompt row.
pub struct PromptContext<'a> {
	pub search_input: &'a SearchInput<'a>,
	pub prompt_label: &'a str,
	pub filter_label: &'a str,
	pub filter: StatusFilter,
	pub loading: bool,
	pub throbber_state: &'a ThrobberState,
	pub area: Rect,
	pub theme: &'a Theme,
}

const THROBBER_WIDTH: u16 = 2;

/// Render `label > input` with the status filter options on the right.
pub fn render_prompt_with_filter(frame: &mut Frame, prompt: PromptContext<'_>) {
	let PromptContext {
		search_input,
		prompt_label,
		filter_label,
		filter,
		loading,
		throbber_state,
		area,
		theme,
	} = prompt;

	let prompt_text = format!("{prompt_label} > ");
	let filter_width = calculate_filter_width(filter_label);
	let horizontal = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([
			Constraint::Length(prompt_text.width() as u16),
			Constraint::Min(1),
			Constraint::Length(THROBBER_WIDTH),
			Constraint::Length(filter_width),
		])
		.split(area);

	frame.render_widget(
		Paragraph::new(prompt_text).style(theme.prompt_style()),
		horizontal[0],
	);
	search_input.render_textarea(frame, horizontal[1]);

	if loading {
		let throbber = Throbber::default().style(theme.highlight_style());
		frame.render_stateful_widget(throbber, horizontal[2], &mut throbber_state.clone());
	}

	render_filter(frame, horizontal[3], filter_label, filter, theme);
}

fn render_filter(frame: &mut Frame, area: Rect, label: &str, filter: StatusFilter, theme: &Theme) {
	let label_width = label.width() as u16 + 1;
	let split = Layout::default()
		.direction(Direction::Horizontal)
		.constraints([Constraint::Length(label_width), Constraint::Min(1)])
		.split(area);

	frame.render_widget(
		Paragraph::new(format!("{label} ")).style(theme.prompt_style()),
		split[0],
	);

	let selected = StatusFilter::OPTIONS
		.iter()
		.position(|option| *option == filter)
		.unwrap_or(0);
	let titles = build_option_titles(theme, selected);
	let options = Tabs::new(titles)
		.select(selected)
		.divider("")
		.padding("", " ")
		.highlight_style(theme.option_highlight_style());
	frame.render_widget(options, split[1]);
}

fn build_option_titles(theme: &Theme, selected: usize) -> Vec<Line<'static>> {
	let active = theme.header_style();
	let inactive = theme.option_inactive_style();
	StatusFilter::OPTIONS
		.iter()
		.enumerate()
		.map(|(index, option)| {
			let style = if index == selected { active } else { inactive };
			Line::from(Span::styled(format!(" {} ", option.label()), style))
		})
		.collect()
}

fn calculate_filter_width(label: &str) -> u16 {
	let options: usize = StatusFilter::OPTIONS
		.iter()
		.map(|option| option.label().width() + 3)
		.sum();
	(label.width() + 1 + options) as u16
}
