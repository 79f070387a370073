mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{
	CliArgs, OutputFormat, parse_cli, print_json, print_plain, print_report_json, print_report_plain,
};
use pkgscope::ExportKind;
use pkgscope::logging::{self, LogTarget};
use workflow::SearchWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	if cli.list_themes {
		for name in pkgscope::tui::theme::names() {
			println!("{name}");
		}
		return Ok(());
	}

	let target = if cli.headless {
		LogTarget::Stderr
	} else {
		LogTarget::default_file().unwrap_or(LogTarget::Stderr)
	};
	logging::initialize(cli.log_level.as_deref(), target)?;

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	let workflow = SearchWorkflow::from_config(resolved)?;
	if cli.headless {
		run_headless(&cli, workflow)
	} else {
		run_interactive(cli.output, workflow)
	}
}

/// Run the terminal UI and print the outcome in the chosen format.
fn run_interactive(format: OutputFormat, workflow: SearchWorkflow) -> Result<()> {
	let outcome = workflow.run_interactive()?;

	match format {
		OutputFormat::Plain => print_plain(&outcome),
		OutputFormat::Json => print_json(&outcome)?,
	}

	Ok(())
}

fn run_headless(cli: &CliArgs, workflow: SearchWorkflow) -> Result<()> {
	let exports: Vec<ExportKind> = cli.export.iter().copied().map(Into::into).collect();
	let report = workflow.run_headless(&exports)?;

	match cli.output {
		OutputFormat::Plain => print_report_plain(&report),
		OutputFormat::Json => print_report_json(&report)?,
	}

	Ok(())
}
