use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ApiError;
use crate::graph::GraphPayload;

/// Bodies the search endpoint returns while the result set is still being
/// prepared upstream. They arrive as bare JSON strings.
pub const PENDING_SENTINELS: [&str; 2] = [
	"Please check back again",
	"Check back after few minutes result is being prepared.",
];

/// One package record from the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WireResult")]
pub struct SearchResult {
	pub id: String,
	pub author: String,
	pub author_email: String,
	pub dev_status: String,
}

impl SearchResult {
	pub fn new(
		id: impl Into<String>,
		author: impl Into<String>,
		author_email: impl Into<String>,
		dev_status: impl Into<String>,
	) -> Self {
		Self {
			id: id.into(),
			author: author.into(),
			author_email: author_email.into(),
			dev_status: dev_status.into(),
		}
	}
}

#[derive(Deserialize)]
struct WireResult {
	v_id: String,
	#[serde(default)]
	attributes: WireAttributes,
}

// Upstream fills absent metadata with nulls or leaves keys out entirely.
#[derive(Default, Deserialize)]
#[serde(default)]
struct WireAttributes {
	author: Option<String>,
	author_email: Option<String>,
	dev_status: Option<String>,
}

impl From<WireResult> for SearchResult {
	fn from(wire: WireResult) -> Self {
		let WireAttributes {
			author,
			author_email,
			dev_status,
		} = wire.attributes;
		Self {
			id: wire.v_id,
			author: author.unwrap_or_default(),
			author_email: author_email.unwrap_or_default(),
			dev_status: dev_status.unwrap_or_default(),
		}
	}
}

/// Informational "not ready yet" reply. Not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingNotice {
	message: &'static str,
}

impl PendingNotice {
	/// Match `text` byte-for-byte against the known sentinels.
	#[must_use]
	pub fn recognise(text: &str) -> Option<Self> {
		PENDING_SENTINELS
			.iter()
			.find(|sentinel| **sentinel == text)
			.map(|message| Self { message })
	}

	#[must_use]
	pub fn message(&self) -> &'static str {
		self.message
	}
}

/// A completed search: the package rows plus the full response body, which
/// doubles as the graph payload.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPayload {
	pub results: Vec<SearchResult>,
	pub graph: GraphPayload,
}

/// Decoded body of the `/search` endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResponse {
	Pending(PendingNotice),
	Ready(SearchPayload),
}

impl SearchResponse {
	pub fn decode(body: &[u8]) -> Result<Self, ApiError> {
		let value: Value = serde_json::from_slice(body)?;
		match value {
			Value::String(text) => PendingNotice::recognise(&text)
				.map(SearchResponse::Pending)
				.ok_or_else(|| ApiError::UnexpectedShape(format!("unrecognised message `{text}`"))),
			Value::Object(ref fields) => {
				let results = fields
					.get("result")
					.ok_or_else(|| ApiError::UnexpectedShape("missing `result` field".into()))?;
				let results = Vec::<SearchResult>::deserialize(results)?;
				Ok(SearchResponse::Ready(SearchPayload {
					results,
					graph: GraphPayload::new(value),
				}))
			}
			other => Err(ApiError::UnexpectedShape(format!(
				"expected an object, found {}",
				json_kind(&other)
			))),
		}
	}
}

fn json_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "a boolean",
		Value::Number(_) => "a number",
		Value::String(_) => "a string",
		Value::Array(_) => "an array",
		Value::Object(_) => "an object",
	}
}
