use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use pkgscope_api::SearchClient;

use super::commands::{FetchCommand, FetchResult};
use super::downloads::download_export;

/// Launches the background fetch worker and returns its channels plus the id
/// of the most recently issued search.
///
/// Each request runs on its own short-lived thread so a slow export never
/// delays a search. Search responses whose id is no longer the latest are
/// dropped before they reach the UI.
pub(crate) fn spawn(
	client: SearchClient,
	download_dir: PathBuf,
) -> (Sender<FetchCommand>, Receiver<FetchResult>, Arc<AtomicU64>) {
	let (command_tx, command_rx) = mpsc::channel();
	let (result_tx, result_rx) = mpsc::channel();
	let latest_search_id = Arc::new(AtomicU64::new(0));
	let thread_latest = Arc::clone(&latest_search_id);

	thread::spawn(move || worker_loop(&client, &download_dir, command_rx, result_tx, thread_latest));

	(command_tx, result_rx, latest_search_id)
}

fn worker_loop(
	client: &SearchClient,
	download_dir: &Path,
	command_rx: Receiver<FetchCommand>,
	result_tx: Sender<FetchResult>,
	latest_search_id: Arc<AtomicU64>,
) {
	while let Ok(command) = command_rx.recv() {
		if !handle_command(client, download_dir, &result_tx, &latest_search_id, command) {
			break;
		}
	}
	tracing::debug!("fetch worker stopped");
}

fn handle_command(
	client: &SearchClient,
	download_dir: &Path,
	result_tx: &Sender<FetchResult>,
	latest_search_id: &Arc<AtomicU64>,
	command: FetchCommand,
) -> bool {
	match command {
		FetchCommand::Search { id, query } => {
			let client = client.clone();
			let result_tx = result_tx.clone();
			let latest = Arc::clone(latest_search_id);
			thread::spawn(move || {
				let response = client.search(&query);
				if latest.load(Ordering::Acquire) != id {
					tracing::trace!(id, query, "dropping superseded search response");
					return;
				}
				if let Err(err) = &response {
					tracing::warn!(id, query, error = %err, "search request failed");
				}
				let _ = result_tx.send(FetchResult::Search {
					id,
					query,
					response,
				});
			});
			true
		}
		FetchCommand::Export { id, kind, query } => {
			let client = client.clone();
			let result_tx = result_tx.clone();
			let directory = download_dir.to_path_buf();
			thread::spawn(move || {
				let outcome = download_export(&client, kind, &query, &directory);
				if let Err(err) = &outcome {
					tracing::warn!(id, file = kind.file_name(), error = %format!("{err:#}"), "export failed");
				}
				let _ = result_tx.send(FetchResult::Export { id, kind, outcome });
			});
			true
		}
		FetchCommand::Shutdown => false,
	}
}
