//! Query state controller for the search screen.
//!
//! [`ScreenState`] owns everything the screen shows and is mutated only on
//! the UI thread. Operations that need network work return the query to
//! search for instead of performing it, so the same controller drives both
//! the interactive runtime and headless runs.

use pkgscope_api::{
	ApiError, GraphPayload, GraphSummary, PendingNotice, SearchResponse, SearchResult, StatusFilter,
};

use crate::location::Location;

/// Message shown when a search fails in transport or decoding.
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching data. Please try again.";

/// Screen-level state machine position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenPhase {
	Idle,
	Loading,
	Success,
	SoftEmpty,
	Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum StatusMessage {
	Pending(PendingNotice),
	Failure(String),
}

impl StatusMessage {
	fn text(&self) -> &str {
		match self {
			StatusMessage::Pending(notice) => notice.message(),
			StatusMessage::Failure(message) => message,
		}
	}
}

#[derive(Debug, Clone, Default)]
pub struct ScreenState {
	query_text: String,
	status_filter: StatusFilter,
	all_results: Vec<SearchResult>,
	visible_results: Vec<SearchResult>,
	loading: bool,
	has_searched: bool,
	message: Option<StatusMessage>,
	graph: Option<GraphPayload>,
	graph_summary: Option<GraphSummary>,
}

impl ScreenState {
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Adopt the location's `searchText` if it differs from the current
	/// query. Returns the query to search for when one was adopted.
	pub fn init_from_location(&mut self, location: &Location) -> Option<String> {
		let text = location.search_text()?;
		if text == self.query_text {
			return None;
		}
		self.set_query(text)
	}

	/// Replace the query text. A non-empty query is returned for fetching;
	/// an empty one never triggers a search.
	pub fn set_query(&mut self, text: impl Into<String>) -> Option<String> {
		self.query_text = text.into();
		(!self.query_text.is_empty()).then(|| self.query_text.clone())
	}

	/// Replace the filter and recompute the visible rows. Never refetches.
	pub fn set_status_filter(&mut self, filter: StatusFilter) {
		self.status_filter = filter;
		self.refresh_visible();
	}

	/// Return every field to its initial value.
	pub fn clear(&mut self) {
		*self = Self::default();
	}

	/// Mark a search as in flight.
	pub fn begin_search(&mut self) {
		self.loading = true;
	}

	/// Fold a finished search into the screen.
	pub fn apply_response(&mut self, response: Result<SearchResponse, ApiError>) {
		match response {
			Ok(SearchResponse::Ready(payload)) => {
				self.all_results = payload.results;
				self.graph_summary = Some(payload.graph.summary());
				self.graph = Some(payload.graph);
				self.message = None;
			}
			Ok(SearchResponse::Pending(notice)) => {
				self.all_results.clear();
				self.graph = None;
				self.graph_summary = None;
				self.message = Some(StatusMessage::Pending(notice));
			}
			Err(err) => {
				tracing::debug!(error = %err, "search failed");
				self.all_results.clear();
				self.graph = None;
				self.graph_summary = None;
				self.message = Some(StatusMessage::Failure(FETCH_ERROR_MESSAGE.to_string()));
			}
		}
		self.refresh_visible();
		self.loading = false;
		self.has_searched = true;
	}

	fn refresh_visible(&mut self) {
		self.visible_results = self.status_filter.apply(&self.all_results);
	}

	#[must_use]
	pub fn phase(&self) -> ScreenPhase {
		if self.loading {
			return ScreenPhase::Loading;
		}
		if !self.has_searched {
			return ScreenPhase::Idle;
		}
		match &self.message {
			None => ScreenPhase::Success,
			Some(StatusMessage::Pending(_)) => ScreenPhase::SoftEmpty,
			Some(StatusMessage::Failure(_)) => ScreenPhase::Error,
		}
	}

	#[must_use]
	pub fn query_text(&self) -> &str {
		&self.query_text
	}

	#[must_use]
	pub fn status_filter(&self) -> StatusFilter {
		self.status_filter
	}

	#[must_use]
	pub fn all_results(&self) -> &[SearchResult] {
		&self.all_results
	}

	#[must_use]
	pub fn visible_results(&self) -> &[SearchResult] {
		&self.visible_results
	}

	#[must_use]
	pub fn loading(&self) -> bool {
		self.loading
	}

	#[must_use]
	pub fn has_searched(&self) -> bool {
		self.has_searched
	}

	#[must_use]
	pub fn error_message(&self) -> Option<&str> {
		self.message.as_ref().map(StatusMessage::text)
	}

	/// True while the last search reported that results are still pending.
	#[must_use]
	pub fn is_soft_empty(&self) -> bool {
		matches!(self.message, Some(StatusMessage::Pending(_)))
	}

	#[must_use]
	pub fn graph_payload(&self) -> Option<&GraphPayload> {
		self.graph.as_ref()
	}

	#[must_use]
	pub fn graph_summary(&self) -> Option<&GraphSummary> {
		self.graph_summary.as_ref()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pkgscope_api::{PENDING_SENTINELS, SearchPayload};
	use serde_json::json;

	fn flask_payload() -> SearchResponse {
		let body = serde_json::to_vec(&json!({
			"result": [
				{"v_id": "flask", "v_type": "Package", "attributes": {
					"author": "A", "author_email": "a@x.com", "dev_status": "5 - Production/Stable"}},
				{"v_id": "quart", "v_type": "Package", "attributes": {
					"author": "B", "author_email": "b@x.com", "dev_status": "4 - Beta"}},
				{"v_id": "bottle", "v_type": "Package", "attributes": {
					"author": "C", "author_email": "c@x.com", "dev_status": "5 - Production/Stable"}}
			]
		}))
		.unwrap();
		SearchResponse::decode(&body).unwrap()
	}

	fn pending(index: usize) -> SearchResponse {
		let body = serde_json::to_vec(PENDING_SENTINELS[index]).unwrap();
		SearchResponse::decode(&body).unwrap()
	}

	fn searched(response: Result<SearchResponse, ApiError>) -> ScreenState {
		let mut state = ScreenState::new();
		state.set_query("flask").unwrap();
		state.begin_search();
		state.apply_response(response);
		state
	}

	#[test]
	fn new_state_is_idle() {
		let state = ScreenState::new();
		assert_eq!(state.phase(), ScreenPhase::Idle);
		assert!(!state.has_searched());
		assert!(state.error_message().is_none());
	}

	#[test]
	fn set_query_only_requests_non_empty_text() {
		let mut state = ScreenState::new();
		assert_eq!(state.set_query(""), None);
		assert_eq!(state.set_query("flask"), Some("flask".to_string()));
		assert_eq!(state.query_text(), "flask");
		assert_eq!(state.set_query("flask"), Some("flask".to_string()));
	}

	#[test]
	fn location_seeds_query_once() {
		let mut state = ScreenState::new();
		let location = Location::with_search_text("numpy");
		assert_eq!(state.init_from_location(&location), Some("numpy".to_string()));
		assert_eq!(state.query_text(), "numpy");
		assert_eq!(state.init_from_location(&location), None);
		assert_eq!(state.init_from_location(&Location::default()), None);
	}

	#[test]
	fn begin_search_enters_loading_and_loading_wins_over_message() {
		let mut state = searched(Err(ApiError::Timeout));
		state.begin_search();
		assert_eq!(state.phase(), ScreenPhase::Loading);
	}

	#[test]
	fn ready_response_adopts_results_and_graph() {
		let state = searched(Ok(flask_payload()));
		assert_eq!(state.phase(), ScreenPhase::Success);
		assert!(!state.loading());
		assert!(state.has_searched());
		assert_eq!(state.all_results().len(), 3);
		assert_eq!(state.visible_results(), state.all_results());
		assert!(state.error_message().is_none());
		assert_eq!(state.graph_summary().unwrap().vertices["Package"], 3);
		assert!(state.graph_payload().is_some());
	}

	#[test]
	fn filter_recomputes_view_without_touching_results() {
		let mut state = searched(Ok(flask_payload()));
		for filter in StatusFilter::OPTIONS {
			state.set_status_filter(filter);
			let expected: Vec<_> = state
				.all_results()
				.iter()
				.filter(|row| filter == StatusFilter::All || row.dev_status == filter.value())
				.cloned()
				.collect();
			assert_eq!(state.visible_results(), expected.as_slice());
			assert_eq!(state.all_results().len(), 3);
		}
	}

	#[test]
	fn new_results_respect_active_filter() {
		let mut state = ScreenState::new();
		state.set_status_filter(StatusFilter::Beta);
		state.set_query("flask");
		state.begin_search();
		state.apply_response(Ok(flask_payload()));
		let ids: Vec<_> = state.visible_results().iter().map(|row| row.id.as_str()).collect();
		assert_eq!(ids, ["quart"]);
	}

	#[test]
	fn sentinel_is_soft_empty() {
		for index in 0..PENDING_SENTINELS.len() {
			let mut state = searched(Ok(flask_payload()));
			state.begin_search();
			state.apply_response(Ok(pending(index)));
			assert_eq!(state.phase(), ScreenPhase::SoftEmpty);
			assert!(state.is_soft_empty());
			assert_eq!(state.error_message(), Some(PENDING_SENTINELS[index]));
			assert!(state.all_results().is_empty());
			assert!(state.visible_results().is_empty());
			assert!(state.graph_payload().is_none());
		}
	}

	#[test]
	fn failure_sets_generic_message_and_empties_results() {
		for error in [
			ApiError::Timeout,
			ApiError::Status(502),
			ApiError::UnexpectedShape("missing `result` field".into()),
		] {
			let mut state = searched(Ok(flask_payload()));
			state.begin_search();
			state.apply_response(Err(error));
			assert_eq!(state.phase(), ScreenPhase::Error);
			assert_eq!(state.error_message(), Some(FETCH_ERROR_MESSAGE));
			assert!(state.all_results().is_empty());
			assert!(state.visible_results().is_empty());
			assert!(state.has_searched());
			assert!(!state.loading());
		}
	}

	#[test]
	fn empty_result_set_is_success() {
		let state = searched(Ok(SearchResponse::Ready(SearchPayload {
			results: Vec::new(),
			graph: GraphPayload::new(json!({"result": []})),
		})));
		assert_eq!(state.phase(), ScreenPhase::Success);
		assert!(state.visible_results().is_empty());
	}

	#[test]
	fn clear_resets_from_any_state() {
		let mut states = vec![
			searched(Ok(flask_payload())),
			searched(Ok(pending(1))),
			searched(Err(ApiError::Timeout)),
		];
		let mut loading = searched(Ok(flask_payload()));
		loading.set_status_filter(StatusFilter::Alpha);
		loading.begin_search();
		states.push(loading);

		for mut state in states {
			state.clear();
			assert_eq!(state.query_text(), "");
			assert!(state.all_results().is_empty());
			assert!(state.visible_results().is_empty());
			assert!(!state.has_searched());
			assert_eq!(state.status_filter(), StatusFilter::All);
			assert_eq!(state.phase(), ScreenPhase::Idle);
			assert!(state.graph_payload().is_none());
		}
	}

	#[test]
	fn empty_query_after_clear_does_not_search() {
		let mut state = searched(Ok(flask_payload()));
		state.clear();
		assert_eq!(state.set_query(""), None);
		assert_eq!(state.phase(), ScreenPhase::Idle);
	}
}
