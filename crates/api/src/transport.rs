use std::sync::Arc;
use std::time::Duration;

use reqwest::Url;
use reqwest::blocking::Client;

use crate::error::ApiError;

/// Query parameter every endpoint reads the search text from.
pub const QUERY_PARAM: &str = "Search_Text";

/// The three GET endpoints exposed by the search service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
	Search,
	GraphJson,
	Gml,
}

impl Endpoint {
	#[must_use]
	pub fn path(self) -> &'static str {
		match self {
			Endpoint::Search => "/search",
			Endpoint::GraphJson => "/get_json_file",
			Endpoint::Gml => "/get_gml_file",
		}
	}
}

/// Issues a GET against an endpoint and returns the raw body.
///
/// Implementations must treat non-success statuses as errors.
pub trait Transport: Send + Sync {
	fn get(&self, endpoint: Endpoint, query: &str) -> Result<Vec<u8>, ApiError>;
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
	fn get(&self, endpoint: Endpoint, query: &str) -> Result<Vec<u8>, ApiError> {
		(**self).get(endpoint, query)
	}
}

/// Blocking `reqwest` transport. Meant to be driven from a worker thread.
#[derive(Debug, Clone)]
pub struct HttpTransport {
	client: Client,
	base_url: String,
}

impl HttpTransport {
	pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
		let trimmed = base_url.trim().trim_end_matches('/');
		let parsed = Url::parse(trimmed).map_err(|err| ApiError::InvalidBaseUrl {
			url: base_url.to_string(),
			reason: err.to_string(),
		})?;
		if !matches!(parsed.scheme(), "http" | "https") {
			return Err(ApiError::InvalidBaseUrl {
				url: base_url.to_string(),
				reason: format!("unsupported scheme `{}`", parsed.scheme()),
			});
		}

		let client = Client::builder()
			.timeout(timeout)
			.user_agent(concat!("pkgscope/", env!("CARGO_PKG_VERSION")))
			.build()?;

		Ok(Self {
			client,
			base_url: trimmed.to_string(),
		})
	}

	fn endpoint_url(&self, endpoint: Endpoint) -> String {
		format!("{}{}", self.base_url, endpoint.path())
	}
}

impl Transport for HttpTransport {
	fn get(&self, endpoint: Endpoint, query: &str) -> Result<Vec<u8>, ApiError> {
		let url = self.endpoint_url(endpoint);
		tracing::debug!(%url, query, "issuing request");
		let response = self
			.client
			.get(&url)
			.query(&[(QUERY_PARAM, query)])
			.send()?
			.error_for_status()?;
		let body = response.bytes()?;
		tracing::debug!(%url, bytes = body.len(), "received response");
		Ok(body.to_vec())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::io::{BufRead, BufReader, Write};
	use std::net::TcpListener;
	use std::sync::mpsc;
	use std::thread;

	/// Serve exactly one request with a canned response and report the
	/// request line back to the test.
	fn one_shot_server(status: &str, body: &'static str) -> (String, mpsc::Receiver<String>) {
		let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
		let address = listener.local_addr().expect("address");
		let status = status.to_string();
		let (tx, rx) = mpsc::channel();
		thread::spawn(move || {
			let (stream, _) = listener.accept().expect("accept");
			let mut reader = BufReader::new(stream.try_clone().expect("clone"));
			let mut request_line = String::new();
			reader.read_line(&mut request_line).expect("request line");
			loop {
				let mut header = String::new();
				if reader.read_line(&mut header).expect("header") == 0 || header == "\r\n" {
					break;
				}
			}
			let mut stream = stream;
			write!(
				stream,
				"HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
				body.len()
			)
			.expect("write response");
			let _ = tx.send(request_line.trim_end().to_string());
		});
		(format!("http://{address}"), rx)
	}

	#[test]
	fn sends_search_text_as_query_parameter() {
		let (base, requests) = one_shot_server("200 OK", r#"{"result": []}"#);
		let transport = HttpTransport::new(&format!("{base}/"), Duration::from_secs(5)).unwrap();

		let body = transport.get(Endpoint::Search, "numpy").unwrap();

		assert_eq!(body, br#"{"result": []}"#);
		let request_line = requests.recv().unwrap();
		assert_eq!(request_line, "GET /search?Search_Text=numpy HTTP/1.1");
	}

	#[test]
	fn error_status_is_reported() {
		let (base, _requests) = one_shot_server("500 Internal Server Error", "{}");
		let transport = HttpTransport::new(&base, Duration::from_secs(5)).unwrap();

		let error = transport.get(Endpoint::Gml, "numpy").unwrap_err();
		assert!(matches!(error, ApiError::Status(500)), "got {error:?}");
	}

	#[test]
	fn rejects_non_http_base_url() {
		assert!(matches!(
			HttpTransport::new("ftp://example.com", Duration::from_secs(1)),
			Err(ApiError::InvalidBaseUrl { .. })
		));
		assert!(matches!(
			HttpTransport::new("not a url", Duration::from_secs(1)),
			Err(ApiError::InvalidBaseUrl { .. })
		));
	}
}
