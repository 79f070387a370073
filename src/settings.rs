use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail, ensure};
use config::{Config, ConfigError, File};
use serde::Deserialize;

use pkgscope::{Location, StatusFilter, UiConfig, app_dirs};

use crate::cli::CliArgs;

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_NOTIFICATION_SECS: u64 = 4;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
	api: ApiSection,
	downloads: DownloadsSection,
	ui: UiSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ApiSection {
	base_url: Option<String>,
	timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct DownloadsSection {
	directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct UiSection {
	theme: Option<String>,
	title: Option<String>,
	headers: Option<Vec<String>>,
	initial_query: Option<String>,
	status_filter: Option<String>,
	notification_secs: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
	pub base_url: String,
	pub timeout: Duration,
	pub download_dir: PathBuf,
	pub theme: Option<String>,
	pub ui: UiConfig,
	pub location: Location,
	pub status_filter: StatusFilter,
	pub notification_ttl: Duration,
}

impl ResolvedConfig {
	pub fn print_summary(&self) {
		println!("Effective configuration:");
		println!("  Base URL: {}", self.base_url);
		println!("  Timeout: {}s", self.timeout.as_secs());
		println!("  Download directory: {}", self.download_dir.display());
		println!(
			"  UI theme: {}",
			self.theme.as_deref().unwrap_or("(use the library default)")
		);
		println!("  Title: {}", self.ui.title);
		println!("  Columns: {}", self.ui.headers.join(" | "));
		println!("  Status filter: {}", self.status_filter.label());
		println!("  Notifications: {}s", self.notification_ttl.as_secs());
		if let Some(query) = self.location.search_text() {
			println!("  Initial query: {query}");
		}
	}
}

pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let builder = build_config(cli)?;
	let mut raw: RawConfig = builder
		.try_deserialize()
		.map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
	raw.apply_cli_overrides(cli);
	raw.resolve(cli.location.as_deref())
}

fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix("pkgscope")
			.prefix_separator("__")
			.separator("__")
			.try_parsing(true),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".pkgscope.toml"));
		files.push(current_dir.join("pkgscope.toml"));
	}

	files
}

impl RawConfig {
	fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(url) = cli.base_url.clone() {
			self.api.base_url = Some(url);
		}
		if let Some(secs) = cli.timeout {
			self.api.timeout_secs = Some(secs);
		}
		if let Some(dir) = cli.download_dir.clone() {
			self.downloads.directory = Some(dir);
		}
		if let Some(theme) = cli.theme.clone() {
			self.ui.theme = Some(theme);
		}
		if let Some(query) = cli.query.clone() {
			self.ui.initial_query = Some(query);
		}
		if let Some(status) = cli.status {
			self.ui.status_filter = Some(StatusFilter::from(status).label().to_string());
		}
	}

	/// Validate the merged sources. A `location` with a `searchText`
	/// parameter wins over the configured initial query.
	fn resolve(self, location: Option<&str>) -> Result<ResolvedConfig> {
		let base_url = self
			.api
			.base_url
			.map(|url| url.trim().to_string())
			.filter(|url| !url.is_empty())
			.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

		let timeout_secs = self.api.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS);
		ensure!(timeout_secs > 0, "api.timeout_secs must be greater than zero");

		let mut download_dir = match self.downloads.directory {
			Some(path) => path,
			None => env::current_dir().context("failed to determine working directory")?,
		};
		if download_dir.is_relative() {
			download_dir = env::current_dir()
				.context("failed to resolve current directory for downloads")?
				.join(download_dir);
		}

		let status_filter = match self.ui.status_filter {
			Some(value) => parse_status(&value)?,
			None => StatusFilter::default(),
		};

		let mut ui = UiConfig::default();
		if let Some(title) = self.ui.title.filter(|title| !title.trim().is_empty()) {
			ui.title = title;
		}
		if let Some(headers) = self.ui.headers {
			ui.set_headers(headers);
		}

		let location = match location {
			Some(raw) => Location::parse(raw)
				.with_context(|| format!("invalid launch location '{raw}'"))?,
			None => Location::default(),
		};
		let location = match (location.search_text(), self.ui.initial_query) {
			(None, Some(query)) => Location::with_search_text(query),
			_ => location,
		};

		Ok(ResolvedConfig {
			base_url,
			timeout: Duration::from_secs(timeout_secs),
			download_dir,
			theme: self.ui.theme,
			ui,
			location,
			status_filter,
			notification_ttl: Duration::from_secs(
				self.ui.notification_secs.unwrap_or(DEFAULT_NOTIFICATION_SECS),
			),
		})
	}
}

fn parse_status(value: &str) -> Result<StatusFilter> {
	match StatusFilter::parse(value) {
		Some(filter) => Ok(filter),
		None => bail!("unknown status filter '{}'", value.trim()),
	}
}
