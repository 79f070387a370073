//! Presentation model: a pure function of [`ScreenState`].

use pkgscope_api::{GraphSummary, SearchResult, StatusFilter};

use super::state::ScreenState;

pub const LOADING_TEXT: &str = "Loading...";
pub const NO_RESULTS_TEXT: &str = "No results found";

/// What the results area shows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResultsView<'a> {
	Loading,
	Message(&'a str),
	Table(&'a [SearchResult]),
	Empty,
}

/// Input for the graph panel. `summary` is absent when the last search
/// produced no graph payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphPanel<'a> {
	pub summary: Option<&'a GraphSummary>,
}

/// Everything the renderer needs, derived from the screen state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenView<'a> {
	pub query: &'a str,
	pub status_filter: StatusFilter,
	/// Export actions and the graph panel share one visibility rule.
	pub show_exports: bool,
	pub graph: Option<GraphPanel<'a>>,
	/// `None` until a search has completed at least once.
	pub results: Option<ResultsView<'a>>,
}

impl<'a> ScreenView<'a> {
	#[must_use]
	pub fn from_state(state: &'a ScreenState) -> Self {
		let show_exports = state.has_searched() && !state.is_soft_empty();
		let graph = show_exports.then(|| GraphPanel {
			summary: state.graph_summary(),
		});
		let results = state.has_searched().then(|| results_view(state));
		Self {
			query: state.query_text(),
			status_filter: state.status_filter(),
			show_exports,
			graph,
			results,
		}
	}

	#[must_use]
	pub fn show_graph(&self) -> bool {
		self.graph.is_some()
	}

	#[must_use]
	pub fn rows(&self) -> &'a [SearchResult] {
		match self.results {
			Some(ResultsView::Table(rows)) => rows,
			_ => &[],
		}
	}
}

fn results_view(state: &ScreenState) -> ResultsView<'_> {
	if state.loading() {
		return ResultsView::Loading;
	}
	if let Some(message) = state.error_message().filter(|message| !message.is_empty()) {
		return ResultsView::Message(message);
	}
	let rows = state.visible_results();
	if rows.is_empty() {
		ResultsView::Empty
	} else {
		ResultsView::Table(rows)
	}
}
