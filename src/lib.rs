//! Core crate exports for building and running the `pkgscope` terminal client.
//!
//! The root module re-exports the screen state, view model and API types so
//! that embedders (and the binary) can drive a search without digging through
//! the module hierarchy.

pub mod app_dirs;
pub mod headless;
pub mod location;
pub mod logging;
mod systems;
pub mod tui;
pub mod ui;

pub use pkgscope_api::{
	ApiError, Endpoint, ExportKind, GraphPayload, GraphSummary, HttpTransport, SearchClient, SearchResponse,
	SearchResult, StatusFilter, Transport,
};
pub use location::Location;
pub use systems::fetch::download_export;
pub use tui::theme::{Theme, default_theme};
pub use ui::{ScreenPhase, ScreenState, ScreenView, SearchOutcome, SearchUi, UiConfig};
