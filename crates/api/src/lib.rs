//! Wire types and client plumbing for the package search service.
//!
//! The service exposes three GET endpoints that all take the same
//! `Search_Text` parameter. [`SearchClient`] issues those requests through a
//! [`Transport`] and decodes the search body into a [`SearchResponse`], so
//! callers never compare raw strings against the "not ready yet" sentinels.

mod client;
mod error;
pub mod graph;
mod model;
mod status;
mod transport;

pub use client::{ExportKind, SearchClient};
pub use error::ApiError;
pub use graph::{GraphPayload, GraphSummary};
pub use model::{PENDING_SENTINELS, PendingNotice, SearchPayload, SearchResponse, SearchResult};
pub use status::StatusFilter;
pub use reqwest::Url;
pub use transport::{Endpoint, HttpTransport, QUERY_PARAM, Transport};
