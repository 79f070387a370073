use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use super::App;
use super::outcome::SearchOutcome;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const INPUT_POLL: Duration = Duration::from_millis(50);

impl<'a> App<'a> {
	/// Pump the terminal event loop until the user accepts or cancels.
	pub fn run(&mut self) -> Result<SearchOutcome> {
		let mut terminal = ratatui::init();
		terminal.clear()?;

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(INPUT_POLL)? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();

		let result: Result<SearchOutcome> = 'event_loop: loop {
			self.tick(Instant::now());

			loop {
				match event_rx.try_recv() {
					Ok(Event::Resize(_, _)) => {}
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break Err(err.into());
			}

			let mut maybe_outcome = None;
			while let Some(event) = pending_events.pop_front() {
				if let Event::Key(key) = event
					&& key.kind == KeyEventKind::Press
				{
					match self.handle_key(key) {
						Ok(Some(outcome)) => {
							maybe_outcome = Some(outcome);
							break;
						}
						Ok(None) => {}
						Err(err) => break 'event_loop Err(err),
					}
				}
			}

			if let Some(outcome) = maybe_outcome {
				break Ok(outcome);
			}

			thread::sleep(FRAME_INTERVAL);
		};

		ratatui::restore();

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		tracing::debug!(accepted = result.as_ref().map(|o| o.accepted).ok(), "search ui closed");
		result
	}

	/// Advance one frame: apply finished fetches, expire notifications and
	/// spin the throbber while a search is running.
	pub(crate) fn tick(&mut self, now: Instant) {
		self.pump_fetch_results();
		self.notifications.prune(now);
		if self.is_loading() {
			self.throbber_state.calc_next();
		}
	}
}

#[cfg(test)]
mod tests {
	use std::time::{Duration, Instant};

	use pkgscope_api::{ApiError, Endpoint, ExportKind, SearchClient, Transport};

	use crate::ui::App;
	use crate::ui::state::ScreenPhase;

	struct Fixed;

	impl Transport for Fixed {
		fn get(&self, endpoint: Endpoint, _query: &str) -> Result<Vec<u8>, ApiError> {
			match endpoint {
				Endpoint::Search => Ok(br#"{"result": []}"#.to_vec()),
				_ => Ok(b"graph".to_vec()),
			}
		}
	}

	#[test]
	fn tick_applies_results_and_expires_notifications() {
		let dir = tempfile::tempdir().unwrap();
		let mut app = App::new(
			SearchClient::new(Fixed),
			dir.path().to_path_buf(),
		);
		app.set_notification_ttl(Duration::from_millis(20));

		app.submit_query("numpy".into());
		let deadline = Instant::now() + Duration::from_secs(2);
		while app.is_loading() && Instant::now() < deadline {
			std::thread::sleep(Duration::from_millis(10));
			app.tick(Instant::now());
		}
		assert_eq!(app.screen.phase(), ScreenPhase::Success);

		app.request_export(ExportKind::GraphJson);
		assert!(app.notifications.current().is_some());
		app.tick(Instant::now() + Duration::from_secs(1));
		assert!(app.notifications.current().is_none());
	}
}
