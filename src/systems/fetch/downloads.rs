use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use pkgscope_api::{ExportKind, SearchClient};

/// Write an export payload under its fixed file name inside `directory`,
/// replacing any earlier export of the same kind.
fn save_export(directory: &Path, kind: ExportKind, bytes: &[u8]) -> Result<PathBuf> {
	fs::create_dir_all(directory).with_context(|| {
		format!("failed to create download directory {}", directory.display())
	})?;
	let path = directory.join(kind.file_name());
	fs::write(&path, bytes).with_context(|| format!("failed to write {}", path.display()))?;
	Ok(path)
}

/// Fetch an export for `query` and save it.
pub fn download_export(
	client: &SearchClient,
	kind: ExportKind,
	query: &str,
	directory: &Path,
) -> Result<PathBuf> {
	let bytes = client
		.export(kind, query)
		.with_context(|| format!("failed to download {}", kind.file_name()))?;
	let path = save_export(directory, kind, &bytes)?;
	tracing::info!(path = %path.display(), bytes = bytes.len(), "saved export");
	Ok(path)
}

#[cfg(test)]
mod tests {
	use super::*;
	use pkgscope_api::{ApiError, Endpoint, Transport};

	struct StaticExports;

	impl Transport for StaticExports {
		fn get(&self, endpoint: Endpoint, query: &str) -> Result<Vec<u8>, ApiError> {
			match endpoint {
				Endpoint::GraphJson => Ok(format!("{{\"query\":\"{query}\"}}").into_bytes()),
				Endpoint::Gml => Err(ApiError::Transport("connection refused".into())),
				Endpoint::Search => Ok(b"{\"result\": []}".to_vec()),
			}
		}
	}

	#[test]
	fn saves_under_fixed_name_and_overwrites() {
		let dir = tempfile::tempdir().unwrap();
		let target = dir.path().join("exports");

		let first = save_export(&target, ExportKind::Gml, b"graph [ ]").unwrap();
		let second = save_export(&target, ExportKind::Gml, b"graph [ node [ id 1 ] ]").unwrap();

		assert_eq!(first, second);
		assert_eq!(first, target.join("graph_file.gml"));
		assert_eq!(fs::read(&second).unwrap(), b"graph [ node [ id 1 ] ]");
	}

	#[test]
	fn download_writes_fetched_bytes() {
		let dir = tempfile::tempdir().unwrap();
		let client = SearchClient::new(StaticExports);

		let path = download_export(&client, ExportKind::GraphJson, "flask", dir.path()).unwrap();

		assert_eq!(path, dir.path().join("graph_file.json"));
		assert_eq!(fs::read_to_string(path).unwrap(), "{\"query\":\"flask\"}");
	}

	#[test]
	fn failed_download_leaves_no_file() {
		let dir = tempfile::tempdir().unwrap();
		let client = SearchClient::new(StaticExports);

		let error = download_export(&client, ExportKind::Gml, "flask", dir.path()).unwrap_err();

		assert!(format!("{error:#}").contains("connection refused"));
		assert!(!dir.path().join("graph_file.gml").exists());
	}
}
