use std::path::PathBuf;

use pkgscope_api::{ApiError, ExportKind, SearchResponse};

/// Work requested from the fetch worker.
#[derive(Debug)]
pub(crate) enum FetchCommand {
	Search { id: u64, query: String },
	Export { id: u64, kind: ExportKind, query: String },
	Shutdown,
}

/// Completed work reported back to the UI thread.
#[derive(Debug)]
pub(crate) enum FetchResult {
	Search {
		id: u64,
		query: String,
		response: Result<SearchResponse, ApiError>,
	},
	Export {
		id: u64,
		kind: ExportKind,
		outcome: anyhow::Result<PathBuf>,
	},
}
