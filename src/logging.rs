//! Tracing setup.
//!
//! The interactive UI owns the terminal, so records go to a file under the
//! data directory. Headless runs log to stderr instead.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

/// Environment variable holding a `tracing` filter directive.
pub const LOG_ENV: &str = "PKGSCOPE_LOG";
const DEFAULT_DIRECTIVE: &str = "warn";
const LOG_FILE_NAME: &str = "pkgscope.log";

/// Where log records are written.
#[derive(Debug, Clone)]
pub enum LogTarget {
	File(PathBuf),
	Stderr,
}

impl LogTarget {
	/// Log file inside the data directory.
	pub fn default_file() -> Result<Self> {
		Ok(LogTarget::File(app_dirs::get_data_dir()?.join(LOG_FILE_NAME)))
	}
}

/// Build the filter from `PKGSCOPE_LOG`, then `level`, then the default.
fn build_filter(level: Option<&str>) -> EnvFilter {
	EnvFilter::try_from_env(LOG_ENV)
		.ok()
		.or_else(|| level.and_then(|directive| EnvFilter::try_new(directive).ok()))
		.unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Install the global subscriber. Calling this twice is harmless; the second
/// installation is ignored.
pub fn initialize(level: Option<&str>, target: LogTarget) -> Result<()> {
	let filter = build_filter(level);
	let builder = tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_target(false);

	match target {
		LogTarget::File(path) => {
			let file = open_log_file(&path)?;
			let _ = builder
				.with_ansi(false)
				.with_writer(Mutex::new(file))
				.try_init();
		}
		LogTarget::Stderr => {
			let _ = builder.with_writer(std::io::stderr).try_init();
		}
	}
	Ok(())
}

fn open_log_file(path: &Path) -> Result<fs::File> {
	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent)
			.with_context(|| format!("failed to create log directory {}", parent.display()))?;
	}
	OpenOptions::new()
		.create(true)
		.append(true)
		.open(path)
		.with_context(|| format!("failed to open log file {}", path.display()))
}
