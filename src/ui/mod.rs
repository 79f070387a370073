//! Interactive terminal UI for `pkgscope`.
//!
//! [`SearchUi`] is the public entry point. The remaining submodules hold the
//! screen state, the event loop, rendering and the widgets it is drawn with.

mod actions;
mod builder;
pub mod components;
mod config;
pub mod notifications;
mod outcome;
mod render;
mod runtime;
mod search;
mod state;
pub mod view;

pub use builder::SearchUi;
pub use config::{DEFAULT_HEADERS, UiConfig};
pub use outcome::SearchOutcome;
pub use state::{App, DEFAULT_NOTIFICATION_TTL, FETCH_ERROR_MESSAGE, ScreenPhase, ScreenState};
pub use view::ScreenView;
