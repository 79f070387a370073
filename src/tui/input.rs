use ratatui::Frame;
use ratatui::crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use tui_textarea::{CursorMove, TextArea};

const PLACEHOLDER: &str = "Search for Python packages";

/// Single-line text prompt backed by `tui-textarea`.
pub struct SearchInput<'a> {
	textarea: TextArea<'a>,
}

impl<'a> SearchInput<'a> {
	pub fn new(initial: impl Into<String>) -> Self {
		let mut input = Self {
			textarea: TextArea::default(),
		};
		input.set_text(initial);
		input
	}

	/// Replace the prompt contents and park the cursor at the end.
	pub fn set_text(&mut self, text: impl Into<String>) {
		let mut textarea = TextArea::new(vec![text.into()]);
		textarea.set_cursor_line_style(Style::default());
		textarea.set_placeholder_text(PLACEHOLDER);
		textarea.set_placeholder_style(Style::default().add_modifier(Modifier::DIM));
		textarea.move_cursor(CursorMove::End);
		self.textarea = textarea;
	}

	#[must_use]
	pub fn text(&self) -> &str {
		self.textarea
			.lines()
			.first()
			.map(String::as_str)
			.unwrap_or("")
	}

	/// Feed a key to the editor. Returns true when the text changed.
	pub fn input(&mut self, key: KeyEvent) -> bool {
		self.textarea.input(key)
	}

	pub fn render_textarea(&self, frame: &mut Frame, area: Rect) {
		frame.render_widget(&self.textarea, area);
	}
}
