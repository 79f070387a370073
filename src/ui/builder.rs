use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use pkgscope_api::{SearchClient, StatusFilter};

use super::App;
use super::config::UiConfig;
use super::outcome::SearchOutcome;
use crate::location::Location;
use crate::tui::theme::{self, Theme};

/// Builder for the interactive package search screen.
///
/// Collects the launch location, initial filter and presentation options,
/// then hands them to a fresh [`App`].
pub struct SearchUi {
	client: SearchClient,
	download_dir: PathBuf,
	location: Location,
	status_filter: StatusFilter,
	ui_config: Option<UiConfig>,
	theme: Option<Theme>,
	notification_ttl: Option<Duration>,
}

impl SearchUi {
	pub fn new(client: SearchClient, download_dir: impl Into<PathBuf>) -> Self {
		Self {
			client,
			download_dir: download_dir.into(),
			location: Location::default(),
			status_filter: StatusFilter::default(),
			ui_config: None,
			theme: None,
			notification_ttl: None,
		}
	}

	/// Launch location; its `searchText` parameter seeds the first search.
	pub fn with_location(mut self, location: Location) -> Self {
		self.location = location;
		self
	}

	pub fn with_initial_query(mut self, query: impl Into<String>) -> Self {
		self.location = Location::with_search_text(query);
		self
	}

	pub fn with_status_filter(mut self, filter: StatusFilter) -> Self {
		self.status_filter = filter;
		self
	}

	pub fn with_ui_config(mut self, config: UiConfig) -> Self {
		self.ui_config = Some(config);
		self
	}

	/// Unknown names leave the current theme in place.
	pub fn with_theme_name(mut self, name: &str) -> Self {
		if let Some(theme) = theme::by_name(name) {
			self.theme = Some(theme);
		}
		self
	}

	pub fn with_notification_ttl(mut self, ttl: Duration) -> Self {
		self.notification_ttl = Some(ttl);
		self
	}

	pub(crate) fn build_app(self) -> App<'static> {
		let mut app = App::new(self.client, self.download_dir);
		if let Some(ui) = self.ui_config {
			app.set_ui_config(ui);
		}
		if let Some(theme) = self.theme {
			app.set_theme(theme);
		}
		if let Some(ttl) = self.notification_ttl {
			app.set_notification_ttl(ttl);
		}
		app.set_status_filter(self.status_filter);
		app.init_from_location(&self.location);
		app
	}

	/// Run the interactive search UI with the configured options.
	pub fn run(self) -> Result<SearchOutcome> {
		let mut app = self.build_app();
		app.run()
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;
	use std::sync::atomic::{AtomicUsize, Ordering};

	use pkgscope_api::{ApiError, Endpoint, Transport};

	use super::*;
	use crate::ui::state::ScreenPhase;

	#[derive(Default)]
	struct Counting {
		searches: AtomicUsize,
	}

	impl Transport for Counting {
		fn get(&self, _endpoint: Endpoint, _query: &str) -> Result<Vec<u8>, ApiError> {
			self.searches.fetch_add(1, Ordering::SeqCst);
			Ok(br#"{"result": []}"#.to_vec())
		}
	}

	#[test]
	fn initial_query_starts_a_search_with_the_chosen_filter() {
		let service = Arc::new(Counting::default());
		let app = SearchUi::new(SearchClient::new(Arc::clone(&service)), ".")
			.with_initial_query("requests")
			.with_status_filter(StatusFilter::Alpha)
			.with_theme_name("light")
			.build_app();

		assert_eq!(app.search_input.text(), "requests");
		assert_eq!(app.screen.query_text(), "requests");
		assert_eq!(app.screen.status_filter(), StatusFilter::Alpha);
		assert_eq!(app.screen.phase(), ScreenPhase::Loading);
		assert_eq!(Some(app.theme), theme::by_name("light"));
	}

	#[test]
	fn without_location_the_screen_stays_idle() {
		let service = Arc::new(Counting::default());
		let app = SearchUi::new(SearchClient::new(Arc::clone(&service)), ".")
			.with_theme_name("no-such-theme")
			.build_app();

		assert_eq!(app.screen.phase(), ScreenPhase::Idle);
		assert_eq!(app.theme, Theme::default());
		assert_eq!(service.searches.load(Ordering::SeqCst), 0);
	}
}
