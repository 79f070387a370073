use std::path::PathBuf;

use anyhow::{Context, Result};
use pkgscope::headless;
use pkgscope::{
	ExportKind, ScreenPhase, ScreenState, SearchClient, SearchOutcome, SearchUi, download_export,
};

use crate::settings::ResolvedConfig;

/// Result of a headless run: the settled screen, saved exports and the
/// exports that could not be downloaded.
pub(crate) struct HeadlessReport {
	pub(crate) screen: ScreenState,
	pub(crate) exports: Vec<PathBuf>,
	pub(crate) failed: Vec<(ExportKind, String)>,
}

/// Coordinates building and running a search from resolved configuration.
pub(crate) struct SearchWorkflow {
	config: ResolvedConfig,
	client: SearchClient,
}

impl SearchWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let client = SearchClient::http(&config.base_url, config.timeout)
			.with_context(|| format!("cannot use search service at {}", config.base_url))?;
		Ok(Self { config, client })
	}

	#[cfg(test)]
	fn with_client(config: ResolvedConfig, client: SearchClient) -> Self {
		Self { config, client }
	}

	pub(crate) fn run_interactive(self) -> Result<SearchOutcome> {
		let ResolvedConfig {
			download_dir,
			theme,
			ui,
			location,
			status_filter,
			notification_ttl,
			..
		} = self.config;

		let mut search_ui = SearchUi::new(self.client, download_dir)
			.with_ui_config(ui)
			.with_location(location)
			.with_status_filter(status_filter)
			.with_notification_ttl(notification_ttl);
		if let Some(theme) = theme {
			search_ui = search_ui.with_theme_name(&theme);
		}
		search_ui.run()
	}

	/// Run one search synchronously. Exports are saved only when the search
	/// produced results; otherwise they are skipped with a warning.
	pub(crate) fn run_headless(self, exports: &[ExportKind]) -> Result<HeadlessReport> {
		let screen = headless::run_search(
			&self.client,
			&self.config.location,
			self.config.status_filter,
		);

		let mut saved = Vec::new();
		let mut failed = Vec::new();
		if !exports.is_empty() {
			if screen.phase() == ScreenPhase::Success {
				for kind in exports {
					match download_export(
						&self.client,
						*kind,
						screen.query_text(),
						&self.config.download_dir,
					) {
						Ok(path) => saved.push(path),
						Err(err) => {
							let error = format!("{err:#}");
							tracing::warn!(file = kind.file_name(), %error, "export failed");
							failed.push((*kind, error));
						}
					}
				}
			} else {
				tracing::warn!(phase = ?screen.phase(), "skipping exports; search did not succeed");
			}
		}

		Ok(HeadlessReport {
			screen,
			exports: saved,
			failed,
		})
	}
}

#[cfg(test)]
mod tests {
	use std::time::Duration;

	use pkgscope::{ApiError, Endpoint, Location, StatusFilter, Transport, UiConfig};

	use super::*;

	struct Service {
		search: &'static str,
		gml_status: Option<u16>,
	}

	impl Transport for Service {
		fn get(&self, endpoint: Endpoint, _query: &str) -> Result<Vec<u8>, ApiError> {
			match endpoint {
				Endpoint::Search => Ok(self.search.as_bytes().to_vec()),
				Endpoint::GraphJson => Ok(b"{\"graph\": true}".to_vec()),
				Endpoint::Gml => match self.gml_status {
					Some(status) => Err(ApiError::Status(status)),
					None => Ok(b"graph [ ]".to_vec()),
				},
			}
		}
	}

	fn config(dir: PathBuf, query: Option<&str>) -> ResolvedConfig {
		ResolvedConfig {
			base_url: "http://localhost:8000".into(),
			timeout: Duration::from_secs(1),
			download_dir: dir,
			theme: None,
			ui: UiConfig::default(),
			location: query.map(Location::with_search_text).unwrap_or_default(),
			status_filter: StatusFilter::All,
			notification_ttl: Duration::from_secs(4),
		}
	}

	fn workflow(dir: PathBuf, query: Option<&str>, search: &'static str) -> SearchWorkflow {
		let client = SearchClient::new(Service {
			search,
			gml_status: None,
		});
		SearchWorkflow::with_client(config(dir, query), client)
	}

	#[test]
	fn headless_run_saves_requested_exports() {
		let dir = tempfile::tempdir().unwrap();
		let report = workflow(
			dir.path().to_path_buf(),
			Some("flask"),
			r#"{"result": [{"v_id": "flask", "attributes": {}}]}"#,
		)
		.run_headless(&[ExportKind::GraphJson, ExportKind::Gml])
		.expect("runs");

		assert_eq!(report.screen.phase(), ScreenPhase::Success);
		assert_eq!(
			report.exports,
			[
				dir.path().join("graph_file.json"),
				dir.path().join("graph_file.gml")
			]
		);
		assert_eq!(
			std::fs::read_to_string(dir.path().join("graph_file.gml")).unwrap(),
			"graph [ ]"
		);
	}

	#[test]
	fn failed_export_keeps_search_and_other_exports() {
		let dir = tempfile::tempdir().unwrap();
		let client = SearchClient::new(Service {
			search: r#"{"result": [{"v_id": "flask", "attributes": {}}]}"#,
			gml_status: Some(500),
		});
		let report = SearchWorkflow::with_client(
			config(dir.path().to_path_buf(), Some("flask")),
			client,
		)
		.run_headless(&[ExportKind::GraphJson, ExportKind::Gml])
		.expect("runs");

		assert_eq!(report.screen.phase(), ScreenPhase::Success);
		assert_eq!(report.screen.visible_results().len(), 1);
		assert_eq!(report.exports, [dir.path().join("graph_file.json")]);
		assert_eq!(report.failed.len(), 1);
		assert_eq!(report.failed[0].0, ExportKind::Gml);
		assert!(report.failed[0].1.contains("500"), "{}", report.failed[0].1);
		assert!(!dir.path().join("graph_file.gml").exists());
	}

	#[test]
	fn pending_result_skips_exports() {
		let dir = tempfile::tempdir().unwrap();
		let report = workflow(
			dir.path().to_path_buf(),
			Some("flask"),
			r#""Check back after few minutes result is being prepared.""#,
		)
		.run_headless(&[ExportKind::Gml])
		.expect("runs");

		assert_eq!(report.screen.phase(), ScreenPhase::SoftEmpty);
		assert!(report.exports.is_empty());
		assert!(!dir.path().join("graph_file.gml").exists());
	}

	#[test]
	fn invalid_base_url_fails_to_build() {
		let dir = tempfile::tempdir().unwrap();
		let mut config = config(dir.path().to_path_buf(), None);
		config.base_url = "ftp://example.com".into();
		assert!(SearchWorkflow::from_config(config).is_err());
	}
}
