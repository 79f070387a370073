use anyhow::Result;
use pkgscope::{ScreenPhase, SearchOutcome, SearchResult};
use serde_json::{Value, json};

use crate::workflow::HeadlessReport;

/// Print a plain-text representation of the search outcome.
pub(crate) fn print_plain(outcome: &SearchOutcome) {
	if !outcome.accepted {
		println!("Search cancelled (query: '{}')", outcome.query);
		return;
	}

	match &outcome.selection {
		Some(result) => println!("{}", result.id),
		None => println!("No selection"),
	}
}

/// Format the search outcome as a JSON string.
pub(crate) fn format_outcome_json(outcome: &SearchOutcome) -> Result<String> {
	let selection = outcome
		.selection
		.as_ref()
		.map(result_json)
		.unwrap_or(Value::Null);

	let payload = json!({
		"accepted": outcome.accepted,
		"query": outcome.query,
		"selection": selection,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the search outcome.
pub(crate) fn print_json(outcome: &SearchOutcome) -> Result<()> {
	println!("{}", format_outcome_json(outcome)?);
	Ok(())
}

/// Render a headless run as tab-separated rows or the screen message,
/// followed by one line per export.
pub(crate) fn format_report_plain(report: &HeadlessReport) -> String {
	let screen = &report.screen;
	let mut lines = Vec::new();
	match screen.phase() {
		ScreenPhase::Idle | ScreenPhase::Loading => lines.push("No query".to_string()),
		ScreenPhase::SoftEmpty | ScreenPhase::Error => {
			lines.push(screen.error_message().unwrap_or_default().to_string());
		}
		ScreenPhase::Success if screen.visible_results().is_empty() => {
			lines.push("No results found".to_string());
		}
		ScreenPhase::Success => {
			lines.extend(screen.visible_results().iter().map(|result| {
				format!(
					"{}\t{}\t{}\t{}",
					result.id, result.author, result.author_email, result.dev_status
				)
			}));
		}
	}
	lines.extend(
		report
			.exports
			.iter()
			.map(|path| format!("Saved {}", path.display())),
	);
	lines.extend(
		report
			.failed
			.iter()
			.map(|(kind, error)| format!("Could not download {}: {error}", kind.file_name())),
	);
	lines.join("\n")
}

pub(crate) fn print_report_plain(report: &HeadlessReport) {
	println!("{}", format_report_plain(report));
}

/// Format a headless run as a JSON document.
pub(crate) fn format_report_json(report: &HeadlessReport) -> Result<String> {
	let screen = &report.screen;
	let graph = screen
		.graph_summary()
		.map(|summary| {
			json!({
				"vertices": summary.vertices,
				"edges": summary.edges,
			})
		})
		.unwrap_or(Value::Null);
	let results: Vec<Value> = screen.visible_results().iter().map(result_json).collect();

	let payload = json!({
		"query": screen.query_text(),
		"status_filter": screen.status_filter().label(),
		"phase": phase_name(screen.phase()),
		"message": screen.error_message(),
		"total": screen.all_results().len(),
		"results": results,
		"graph": graph,
		"exports": report
			.exports
			.iter()
			.map(|path| path.display().to_string())
			.collect::<Vec<_>>(),
		"failed_exports": report
			.failed
			.iter()
			.map(|(kind, error)| json!({ "file": kind.file_name(), "error": error }))
			.collect::<Vec<_>>(),
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

pub(crate) fn print_report_json(report: &HeadlessReport) -> Result<()> {
	println!("{}", format_report_json(report)?);
	Ok(())
}

fn result_json(result: &SearchResult) -> Value {
	json!({
		"name": result.id,
		"author": result.author,
		"author_email": result.author_email,
		"dev_status": result.dev_status,
	})
}

fn phase_name(phase: ScreenPhase) -> &'static str {
	match phase {
		ScreenPhase::Idle => "idle",
		ScreenPhase::Loading => "loading",
		ScreenPhase::Success => "success",
		ScreenPhase::SoftEmpty => "pending",
		ScreenPhase::Error => "error",
	}
}
