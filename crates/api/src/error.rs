use thiserror::Error;

/// Failures raised while talking to the search service.
#[derive(Debug, Error)]
pub enum ApiError {
	#[error("invalid base url `{url}`: {reason}")]
	InvalidBaseUrl { url: String, reason: String },
	#[error("request failed: {0}")]
	Transport(String),
	#[error("request timed out")]
	Timeout,
	#[error("server responded with status {0}")]
	Status(u16),
	#[error("response body is not valid JSON: {0}")]
	Decode(#[from] serde_json::Error),
	#[error("unexpected response shape: {0}")]
	UnexpectedShape(String),
}

impl From<reqwest::Error> for ApiError {
	fn from(error: reqwest::Error) -> Self {
		if error.is_timeout() {
			return ApiError::Timeout;
		}
		if let Some(status) = error.status() {
			return ApiError::Status(status.as_u16());
		}
		ApiError::Transport(error.to_string())
	}
}
