use pkgscope_api::SearchResult;

/// How an interactive session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
	/// True when the user accepted a row rather than cancelling.
	pub accepted: bool,
	pub query: String,
	pub selection: Option<SearchResult>,
}

impl SearchOutcome {
	pub fn cancelled(query: impl Into<String>) -> Self {
		Self {
			accepted: false,
			query: query.into(),
			selection: None,
		}
	}

	pub fn accepted(query: impl Into<String>, selection: SearchResult) -> Self {
		Self {
			accepted: true,
			query: query.into(),
			selection: Some(selection),
		}
	}
}
