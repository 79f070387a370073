use std::fmt::Write;
use std::path::PathBuf;

use clap::{
	ArgAction, ColorChoice, CommandFactory, FromArgMatches, Parser, ValueEnum,
	builder::{
		Styles,
		styling::{AnsiColor, Effects},
	},
};
use pkgscope::app_dirs;
use pkgscope::{ExportKind, StatusFilter};

/// Produce the full version banner including config and data directories.
fn long_version() -> &'static str {
	let config_dir = match app_dirs::get_config_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};
	let data_dir = match app_dirs::get_data_dir() {
		Ok(path) => path.display().to_string(),
		Err(err) => format!("unavailable ({err})"),
	};

	let mut details = format!("pkgscope {}", env!("CARGO_PKG_VERSION"));
	let _ = writeln!(details);
	let _ = writeln!(details, "config directory: {config_dir}");
	let _ = writeln!(details, "data directory: {data_dir}");

	Box::leak(details.into_boxed_str())
}

/// Create the clap styles used for custom colour output.
fn cli_styles() -> Styles {
	Styles::styled()
		.header(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
		.literal(AnsiColor::Cyan.on_default())
		.placeholder(AnsiColor::Yellow.on_default())
}

/// Parse command line arguments into the strongly typed [`CliArgs`] structure.
pub(crate) fn parse_cli() -> CliArgs {
	let mut matches = CliArgs::command().get_matches();
	CliArgs::from_arg_matches_mut(&mut matches).unwrap_or_else(|err| err.exit())
}

#[derive(Parser, Debug)]
#[command(
	name = "pkgscope",
	version,
	long_version = long_version(),
	about = "Search Python packages and their dependency graph from the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
/// Command-line arguments accepted by the `pkgscope` binary.
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "PKGSCOPE_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'q',
		long = "query",
		value_name = "TEXT",
		help = "Search for TEXT on startup (default: empty)"
	)]
	pub(crate) query: Option<String>,
	#[arg(
		long,
		value_name = "URL",
		help = "Launch location whose searchText parameter seeds the query (default: none)"
	)]
	pub(crate) location: Option<String>,
	#[arg(
		short = 's',
		long = "status",
		value_enum,
		help = "Initial development status filter (default: all)"
	)]
	pub(crate) status: Option<StatusArg>,
	#[arg(
		long = "base-url",
		value_name = "URL",
		help = "Search service base URL (default: http://localhost:8000)"
	)]
	pub(crate) base_url: Option<String>,
	#[arg(
		long,
		value_name = "SECS",
		help = "Request timeout in seconds (default: 30)"
	)]
	pub(crate) timeout: Option<u64>,
	#[arg(
		long = "download-dir",
		value_name = "PATH",
		help = "Directory receiving graph exports (default: current directory)"
	)]
	pub(crate) download_dir: Option<PathBuf>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: default)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		long,
		help = "Run a single search without the terminal UI (default: disabled)"
	)]
	pub(crate) headless: bool,
	#[arg(
		long = "export",
		value_enum,
		action = ArgAction::Append,
		requires = "headless",
		help = "Save an export after a successful headless search (default: none)"
	)]
	pub(crate) export: Vec<ExportArg>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		long = "log-level",
		value_name = "FILTER",
		help = "Tracing filter used when PKGSCOPE_LOG is unset (default: warn)"
	)]
	pub(crate) log_level: Option<String>,
	#[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, help = "Choose how to print the result")]
	pub(crate) output: OutputFormat,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Development status filters accepted on the command line.
pub(crate) enum StatusArg {
	All,
	Beta,
	Stable,
	Alpha,
	PreAlpha,
}

impl From<StatusArg> for StatusFilter {
	fn from(arg: StatusArg) -> Self {
		match arg {
			StatusArg::All => StatusFilter::All,
			StatusArg::Beta => StatusFilter::Beta,
			StatusArg::Stable => StatusFilter::ProductionStable,
			StatusArg::Alpha => StatusFilter::Alpha,
			StatusArg::PreAlpha => StatusFilter::PreAlpha,
		}
	}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Export files that can be saved from a headless run.
pub(crate) enum ExportArg {
	Json,
	Gml,
}

impl From<ExportArg> for ExportKind {
	fn from(arg: ExportArg) -> Self {
		match arg {
			ExportArg::Json => ExportKind::GraphJson,
			ExportArg::Gml => ExportKind::Gml,
		}
	}
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
/// Output formats supported by the CLI utility.
pub(crate) enum OutputFormat {
	Plain,
	Json,
}

#[cfg(test)]
mod tests {
	use super::*;

	fn parse(args: &[&str]) -> CliArgs {
		let mut matches = CliArgs::command()
			.try_get_matches_from(args)
			.expect("parses");
		CliArgs::from_arg_matches_mut(&mut matches).expect("parses")
	}

	#[test]
	fn command_definition_is_consistent() {
		CliArgs::command().debug_assert();
	}

	#[test]
	fn defaults_to_plain_interactive_run() {
		let parsed = parse(&["pkgscope"]);
		assert_eq!(parsed.output, OutputFormat::Plain);
		assert!(!parsed.headless);
		assert!(parsed.export.is_empty());
		assert!(parsed.status.is_none());
	}

	#[test]
	fn parses_headless_search_with_exports() {
		let parsed = parse(&[
			"pkgscope",
			"--headless",
			"-q",
			"flask",
			"-s",
			"pre-alpha",
			"--export",
			"json",
			"--export",
			"gml",
			"-o",
			"json",
		]);
		assert!(parsed.headless);
		assert_eq!(parsed.query.as_deref(), Some("flask"));
		assert_eq!(parsed.status.map(StatusFilter::from), Some(StatusFilter::PreAlpha));
		let kinds: Vec<ExportKind> = parsed.export.into_iter().map(Into::into).collect();
		assert_eq!(kinds, [ExportKind::GraphJson, ExportKind::Gml]);
		assert_eq!(parsed.output, OutputFormat::Json);
	}

	#[test]
	fn export_requires_headless() {
		let result = CliArgs::command().try_get_matches_from(["pkgscope", "--export", "gml"]);
		assert!(result.is_err());
	}
}
