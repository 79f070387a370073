use std::sync::Arc;
use std::time::Duration;

use crate::error::ApiError;
use crate::model::SearchResponse;
use crate::transport::{Endpoint, HttpTransport, Transport};

/// Files the service can export for a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportKind {
	GraphJson,
	Gml,
}

impl ExportKind {
	pub const ALL: [ExportKind; 2] = [ExportKind::GraphJson, ExportKind::Gml];

	#[must_use]
	pub fn endpoint(self) -> Endpoint {
		match self {
			ExportKind::GraphJson => Endpoint::GraphJson,
			ExportKind::Gml => Endpoint::Gml,
		}
	}

	/// Fixed name the export is saved under.
	#[must_use]
	pub fn file_name(self) -> &'static str {
		match self {
			ExportKind::GraphJson => "graph_file.json",
			ExportKind::Gml => "graph_file.gml",
		}
	}

	#[must_use]
	pub fn label(self) -> &'static str {
		match self {
			ExportKind::GraphJson => "Graph File",
			ExportKind::Gml => "GML File",
		}
	}
}

/// Cheaply cloneable handle that issues searches and exports.
#[derive(Clone)]
pub struct SearchClient {
	transport: Arc<dyn Transport>,
}

impl SearchClient {
	pub fn new(transport: impl Transport + 'static) -> Self {
		Self {
			transport: Arc::new(transport),
		}
	}

	/// Client backed by [`HttpTransport`].
	pub fn http(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
		Ok(Self::new(HttpTransport::new(base_url, timeout)?))
	}

	pub fn search(&self, query: &str) -> Result<SearchResponse, ApiError> {
		let body = self.transport.get(Endpoint::Search, query)?;
		let response = SearchResponse::decode(&body)?;
		match &response {
			SearchResponse::Pending(notice) => {
				tracing::debug!(query, message = notice.message(), "search result pending upstream");
			}
			SearchResponse::Ready(payload) => {
				tracing::debug!(query, rows = payload.results.len(), "search result ready");
			}
		}
		Ok(response)
	}

	pub fn export(&self, kind: ExportKind, query: &str) -> Result<Vec<u8>, ApiError> {
		self.transport.get(kind.endpoint(), query)
	}
}
