//! Launch location handling.
//!
//! A search can be seeded from a link such as
//! `https://pkgscope.example/?searchText=numpy`. Only the `searchText`
//! parameter is read, and only once when the screen starts.

use anyhow::{Context, Result};
use pkgscope_api::Url;

/// Query parameter carrying the initial search text.
pub const SEARCH_TEXT_PARAM: &str = "searchText";

const RELATIVE_BASE: &str = "http://localhost/";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
	search_text: Option<String>,
}

impl Location {
	/// Parse an absolute URL, a path with a query (`/?searchText=x`), a bare
	/// query string (`?searchText=x`), or a query without the leading `?`.
	pub fn parse(input: &str) -> Result<Self> {
		let trimmed = input.trim();
		let url = match Url::parse(trimmed) {
			Ok(url) => url,
			Err(_) => {
				let relative = if !trimmed.contains('?') && trimmed.contains('=') {
					format!("?{trimmed}")
				} else {
					trimmed.to_string()
				};
				Url::parse(RELATIVE_BASE)
					.and_then(|base| base.join(&relative))
					.with_context(|| format!("invalid location `{input}`"))?
			}
		};
		Ok(Self::from_url(&url))
	}

	#[must_use]
	pub fn from_url(url: &Url) -> Self {
		let search_text = url
			.query_pairs()
			.find(|(key, _)| key == SEARCH_TEXT_PARAM)
			.map(|(_, value)| value.into_owned())
			.filter(|value| !value.is_empty());
		Self { search_text }
	}

	/// Location carrying `text` as its search parameter.
	#[must_use]
	pub fn with_search_text(text: impl Into<String>) -> Self {
		let text = text.into();
		Self {
			search_text: (!text.is_empty()).then_some(text),
		}
	}

	#[must_use]
	pub fn search_text(&self) -> Option<&str> {
		self.search_text.as_deref()
	}
}
