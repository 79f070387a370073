use std::path::PathBuf;
use std::time::Duration;

use pkgscope_api::SearchClient;
use ratatui::widgets::TableState;
use throbber_widgets_tui::ThrobberState;

use super::config::UiConfig;
use super::notifications::Notifications;
use crate::systems::fetch;
use crate::tui::input::SearchInput;
pub use crate::tui::theme::Theme;

mod fetch_runtime;
mod screen;

pub(crate) use fetch_runtime::FetchRuntime;
pub use screen::{FETCH_ERROR_MESSAGE, ScreenPhase, ScreenState};

/// How long notifications stay visible unless configured otherwise.
pub const DEFAULT_NOTIFICATION_TTL: Duration = Duration::from_secs(4);

impl<'a> Drop for App<'a> {
	fn drop(&mut self) {
		self.fetch.shutdown();
	}
}

pub struct App<'a> {
	pub screen: ScreenState,
	pub search_input: SearchInput<'a>,
	pub table_state: TableState,
	pub(crate) ui: UiConfig,
	pub theme: Theme,
	pub(crate) throbber_state: ThrobberState,
	pub(crate) notifications: Notifications,
	pub(super) fetch: FetchRuntime,
}

impl<'a> App<'a> {
	pub fn new(client: SearchClient, download_dir: PathBuf) -> Self {
		let (fetch_tx, fetch_rx, latest_search_id) = fetch::spawn(client, download_dir);
		let fetch = FetchRuntime::new(fetch_tx, fetch_rx, latest_search_id);

		Self {
			screen: ScreenState::new(),
			search_input: SearchInput::new(""),
			table_state: TableState::default(),
			ui: UiConfig::default(),
			theme: Theme::default(),
			throbber_state: ThrobberState::default(),
			notifications: Notifications::new(DEFAULT_NOTIFICATION_TTL),
			fetch,
		}
	}

	pub fn set_theme(&mut self, theme: Theme) {
		self.theme = theme;
	}

	pub fn set_ui_config(&mut self, ui: UiConfig) {
		self.ui = ui;
	}

	pub fn set_notification_ttl(&mut self, ttl: Duration) {
		self.notifications = Notifications::new(ttl);
	}

	pub(crate) fn visible_len(&self) -> usize {
		self.screen.visible_results().len()
	}

	pub(crate) fn ensure_selection(&mut self) {
		let len = self.visible_len();
		if len == 0 {
			self.table_state.select(None);
		} else if let Some(selected) = self.table_state.selected() {
			if selected >= len {
				self.table_state.select(Some(len - 1));
			}
		} else {
			self.table_state.select(Some(0));
		}
	}

	pub(crate) fn current_selection(&self) -> Option<&pkgscope_api::SearchResult> {
		let selected = self.table_state.selected()?;
		self.screen.visible_results().get(selected)
	}
}
