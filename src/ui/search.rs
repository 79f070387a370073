use std::sync::mpsc::TryRecvError;

use pkgscope_api::{ExportKind, StatusFilter};

use super::App;
use super::view::ScreenView;
use crate::location::Location;
use crate::systems::fetch::FetchResult;

impl<'a> App<'a> {
	/// Seed the query from the launch location, searching when it changes.
	pub fn init_from_location(&mut self, location: &Location) {
		if let Some(query) = self.screen.init_from_location(location) {
			self.search_input.set_text(query.clone());
			self.dispatch_search(query);
		}
	}

	/// Adopt `text` as the query and search for it when non-empty.
	pub fn submit_query(&mut self, text: String) {
		if let Some(query) = self.screen.set_query(text) {
			self.dispatch_search(query);
		}
	}

	/// Search again for the current query.
	pub(crate) fn refresh(&mut self) {
		let query = self.screen.query_text().to_string();
		self.submit_query(query);
	}

	pub fn set_status_filter(&mut self, filter: StatusFilter) {
		self.screen.set_status_filter(filter);
		self.table_state.select(None);
		self.ensure_selection();
	}

	/// Reset the whole screen. Any in-flight search is forgotten.
	pub fn clear(&mut self) {
		self.screen.clear();
		self.fetch.invalidate_search();
		self.search_input.set_text("");
		self.table_state.select(None);
		self.notifications.clear();
	}

	fn dispatch_search(&mut self, query: String) {
		self.screen.begin_search();
		self.fetch.issue_search(query);
	}

	/// Request an export for the current query. Ignored while the export
	/// actions are hidden or the same export is already running.
	pub fn request_export(&mut self, kind: ExportKind) {
		if !ScreenView::from_state(&self.screen).show_exports {
			return;
		}
		if self.fetch.export_pending(kind) {
			self.notifications
				.info(format!("{} is already downloading", kind.file_name()));
			return;
		}
		let query = self.screen.query_text().to_string();
		self.fetch.issue_export(kind, query);
		self.notifications
			.info(format!("Downloading {}...", kind.file_name()));
	}

	/// Drain completed fetches into the screen.
	pub fn pump_fetch_results(&mut self) {
		loop {
			match self.fetch.try_recv() {
				Ok(result) => self.apply_fetch_result(result),
				Err(TryRecvError::Empty | TryRecvError::Disconnected) => break,
			}
		}
	}

	fn apply_fetch_result(&mut self, result: FetchResult) {
		match result {
			FetchResult::Search {
				id,
				query,
				response,
			} => {
				if !self.fetch.matches_latest(id) {
					tracing::trace!(id, query, "ignoring stale search response");
					return;
				}
				self.fetch.record_search_completion();
				self.screen.apply_response(response);
				self.ensure_selection();
			}
			FetchResult::Export { id, kind, outcome } => {
				self.fetch.record_export_completion(id);
				match outcome {
					Ok(path) => self
						.notifications
						.info(format!("Saved {}", path.display())),
					Err(err) => self
						.notifications
						.error(format!("Could not download {}: {err:#}", kind.file_name())),
				}
			}
		}
	}

	pub(crate) fn is_loading(&self) -> bool {
		self.screen.loading() || self.fetch.is_in_flight()
	}
}
