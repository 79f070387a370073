use anyhow::Result;
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use pkgscope_api::ExportKind;

use super::App;
use super::outcome::SearchOutcome;
use super::state::ScreenPhase;

impl<'a> App<'a> {
	pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Result<Option<SearchOutcome>> {
		let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
		match key.code {
			KeyCode::Esc => return Ok(Some(self.cancel())),
			KeyCode::Char('c') if ctrl => return Ok(Some(self.cancel())),
			KeyCode::Char('l') if ctrl => self.clear(),
			KeyCode::Enter => {
				if let Some(outcome) = self.accept() {
					return Ok(Some(outcome));
				}
				let text = self.search_input.text().to_string();
				self.submit_query(text);
			}
			KeyCode::F(5) => self.refresh(),
			KeyCode::F(2) => self.request_export(ExportKind::GraphJson),
			KeyCode::F(3) => self.request_export(ExportKind::Gml),
			KeyCode::Tab => {
				let next = self.screen.status_filter().next();
				self.set_status_filter(next);
			}
			KeyCode::BackTab => {
				let previous = self.screen.status_filter().previous();
				self.set_status_filter(previous);
			}
			KeyCode::Up => self.move_selection_up(),
			KeyCode::Down => self.move_selection_down(),
			_ => {
				self.search_input.input(key);
			}
		}
		Ok(None)
	}

	fn cancel(&self) -> SearchOutcome {
		SearchOutcome::cancelled(self.search_input.text())
	}

	/// Accept the highlighted row once the typed query has been searched.
	fn accept(&self) -> Option<SearchOutcome> {
		let typed = self.search_input.text();
		if typed.is_empty()
			|| typed != self.screen.query_text()
			|| self.screen.phase() != ScreenPhase::Success
		{
			return None;
		}
		let selection = self.current_selection()?.clone();
		Some(SearchOutcome::accepted(typed, selection))
	}

	fn move_selection_up(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected > 0
		{
			self.table_state.select(Some(selected - 1));
		}
	}

	fn move_selection_down(&mut self) {
		if let Some(selected) = self.table_state.selected()
			&& selected + 1 < self.visible_len()
		{
			self.table_state.select(Some(selected + 1));
		}
	}
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use pkgscope_api::{
		ApiError, Endpoint, SearchClient, SearchResponse, StatusFilter, Transport,
	};
	use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

	use crate::ui::App;
	use crate::ui::state::ScreenPhase;

	struct Offline;

	impl Transport for Offline {
		fn get(&self, _endpoint: Endpoint, _query: &str) -> Result<Vec<u8>, ApiError> {
			Err(ApiError::Transport("offline".into()))
		}
	}

	const TWO_ROWS: &[u8] = br#"{"result": [
		{"v_id": "flask", "attributes": {"author": "A", "author_email": "a@x.com", "dev_status": "5 - Production/Stable"}},
		{"v_id": "quart", "attributes": {"author": "B", "author_email": "b@x.com", "dev_status": "4 - Beta"}}
	]}"#;

	fn app() -> App<'static> {
		App::new(SearchClient::new(Offline), PathBuf::from("."))
	}

	fn searched(query: &str) -> App<'static> {
		let mut app = app();
		app.search_input.set_text(query);
		app.screen.set_query(query);
		app.screen.begin_search();
		app.screen.apply_response(SearchResponse::decode(TWO_ROWS));
		app.ensure_selection();
		app
	}

	fn press(app: &mut App, code: KeyCode) -> Option<crate::ui::SearchOutcome> {
		app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
			.unwrap()
	}

	#[test]
	fn escape_cancels_with_typed_query() {
		let mut app = app();
		app.search_input.set_text("num");
		let outcome = press(&mut app, KeyCode::Esc).expect("outcome");
		assert!(!outcome.accepted);
		assert_eq!(outcome.query, "num");
		assert!(outcome.selection.is_none());
	}

	#[test]
	fn ctrl_c_cancels() {
		let mut app = app();
		let outcome = app
			.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
			.unwrap()
			.expect("outcome");
		assert!(!outcome.accepted);
	}

	#[test]
	fn enter_on_edited_query_searches() {
		let mut app = searched("flask");
		app.search_input.set_text("django");
		assert!(press(&mut app, KeyCode::Enter).is_none());
		assert_eq!(app.screen.query_text(), "django");
		assert_eq!(app.screen.phase(), ScreenPhase::Loading);
	}

	#[test]
	fn enter_on_searched_query_accepts_highlighted_row() {
		let mut app = searched("flask");
		press(&mut app, KeyCode::Down);
		let outcome = press(&mut app, KeyCode::Enter).expect("outcome");
		assert!(outcome.accepted);
		assert_eq!(outcome.query, "flask");
		assert_eq!(outcome.selection.map(|row| row.id), Some("quart".to_string()));
	}

	#[test]
	fn enter_on_cleared_input_never_accepts_old_rows() {
		let mut app = searched("flask");
		app.search_input.set_text("");
		assert!(press(&mut app, KeyCode::Enter).is_none());
		assert!(press(&mut app, KeyCode::Enter).is_none());
		assert_eq!(app.screen.query_text(), "");
	}

	#[test]
	fn selection_stays_within_bounds() {
		let mut app = searched("flask");
		press(&mut app, KeyCode::Up);
		assert_eq!(app.table_state.selected(), Some(0));
		press(&mut app, KeyCode::Down);
		press(&mut app, KeyCode::Down);
		assert_eq!(app.table_state.selected(), Some(1));
	}

	#[test]
	fn tab_cycles_status_filter() {
		let mut app = searched("flask");
		press(&mut app, KeyCode::Tab);
		assert_eq!(app.screen.status_filter(), StatusFilter::Beta);
		assert_eq!(app.visible_len(), 1);
		assert_eq!(app.table_state.selected(), Some(0));

		press(&mut app, KeyCode::BackTab);
		press(&mut app, KeyCode::BackTab);
		assert_eq!(app.screen.status_filter(), StatusFilter::PreAlpha);
		assert_eq!(app.visible_len(), 0);
		assert_eq!(app.table_state.selected(), None);
	}

	#[test]
	fn ctrl_l_resets_screen_and_input() {
		let mut app = searched("flask");
		app.handle_key(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL))
			.unwrap();
		assert_eq!(app.screen.phase(), ScreenPhase::Idle);
		assert_eq!(app.search_input.text(), "");
		assert_eq!(app.visible_len(), 0);
	}

	#[test]
	fn typing_edits_the_input_only() {
		let mut app = app();
		press(&mut app, KeyCode::Char('n'));
		press(&mut app, KeyCode::Char('p'));
		assert_eq!(app.search_input.text(), "np");
		assert_eq!(app.screen.phase(), ScreenPhase::Idle);
	}
}
