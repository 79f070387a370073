use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, TableState};

use super::App;
use super::config::UiConfig;
use super::components::{
	PromptContext, StatusBar, render_graph_panel, render_message, render_prompt_with_filter,
	render_results_table, render_status_bar,
};
use super::state::ScreenPhase;
use super::view::{LOADING_TEXT, ResultsView, ScreenView};
use crate::tui::theme::Theme;

const GRAPH_PANEL_WIDTH: u16 = 32;
const KEY_HINTS: &str =
	"Enter search · F5 refresh · Tab filter · ↑↓ select · Ctrl-L clear · Esc quit";

impl<'a> App<'a> {
	pub(crate) fn draw(&mut self, frame: &mut Frame) {
		let area = frame.area().inner(Margin {
			vertical: 0,
			horizontal: 1,
		});

		let layout = Layout::default()
			.direction(Direction::Vertical)
			.constraints([
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Length(1),
				Constraint::Min(1),
				Constraint::Length(1),
			])
			.split(area);

		self.render_title(frame, layout[0]);

		let loading = self.is_loading();
		render_prompt_with_filter(
			frame,
			PromptContext {
				search_input: &self.search_input,
				prompt_label: &self.ui.prompt_label,
				filter_label: &self.ui.filter_label,
				filter: self.screen.status_filter(),
				loading,
				throbber_state: &self.throbber_state,
				area: layout[1],
				theme: &self.theme,
			},
		);

		let App {
			screen,
			table_state,
			ui,
			theme,
			notifications,
			..
		} = self;
		let view = ScreenView::from_state(screen);
		render_status_bar(
			frame,
			layout[2],
			StatusBar {
				show_exports: view.show_exports,
				notification: notifications.current(),
			},
			theme,
		);

		let body = Body {
			phase: screen.phase(),
			table_state,
			ui,
			theme,
		};
		body.render(frame, layout[3], view);

		frame.render_widget(Paragraph::new(KEY_HINTS).style(theme.empty_style()), layout[4]);
	}

	fn render_title(&self, frame: &mut Frame, area: Rect) {
		let line = Line::from(vec![
			Span::styled(self.ui.title.as_str(), self.theme.highlight_style()),
			Span::raw("  "),
			Span::styled(self.ui.tagline.as_str(), self.theme.empty_style()),
		]);
		frame.render_widget(Paragraph::new(line), area);
	}
}

/// Results area plus the optional graph panel on its right.
struct Body<'s> {
	phase: ScreenPhase,
	table_state: &'s mut TableState,
	ui: &'s UiConfig,
	theme: &'s Theme,
}

impl Body<'_> {
	fn render(self, frame: &mut Frame, area: Rect, view: ScreenView<'_>) {
		let Body {
			phase,
			table_state,
			ui,
			theme,
		} = self;

		let results_area = match view.graph {
			Some(panel) => {
				let split = Layout::default()
					.direction(Direction::Horizontal)
					.constraints([Constraint::Min(1), Constraint::Length(GRAPH_PANEL_WIDTH)])
					.split(area);
				render_graph_panel(frame, split[1], &ui.graph_title, panel, theme);
				split[0]
			}
			None => area,
		};

		let results_area = Rect {
			y: results_area.y.saturating_add(1),
			height: results_area.height.saturating_sub(1),
			..results_area
		};

		match view.results {
			None => {}
			Some(ResultsView::Loading) => {
				render_message(frame, results_area, LOADING_TEXT, theme.prompt_style());
			}
			Some(ResultsView::Message(message)) => {
				let style = if phase == ScreenPhase::Error {
					theme.error_style()
				} else {
					theme.prompt_style()
				};
				render_message(frame, results_area, message, style);
			}
			Some(ResultsView::Table(rows)) => {
				render_results_table(frame, results_area, table_state, &ui.headers, rows, theme);
			}
			Some(ResultsView::Empty) => {
				render_results_table(frame, results_area, table_state, &ui.headers, &[], theme);
			}
		}
	}
}
