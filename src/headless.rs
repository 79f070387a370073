//! Single-shot searches without the terminal UI.

use pkgscope_api::{SearchClient, StatusFilter};

use crate::location::Location;
use crate::ui::ScreenState;

/// Seed a screen from `location`, run its search synchronously and return
/// the settled state. Without a search text the screen stays idle.
pub fn run_search(client: &SearchClient, location: &Location, filter: StatusFilter) -> ScreenState {
	let mut screen = ScreenState::new();
	screen.set_status_filter(filter);
	let Some(query) = screen.init_from_location(location) else {
		return screen;
	};

	screen.begin_search();
	let response = client.search(&query);
	if let Err(err) = &response {
		tracing::warn!(query, error = %err, "search failed");
	}
	screen.apply_response(response);
	screen
}
