use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use pkgscope_api::ExportKind;

use crate::systems::fetch::{FetchCommand, FetchResult};

/// UI-side handle on the fetch worker.
///
/// Searches and exports draw ids from separate counters. Only the latest
/// search id is honoured; anything older, or anything issued before a clear,
/// is discarded when it resolves.
pub(crate) struct FetchRuntime {
	tx: Sender<FetchCommand>,
	rx: Receiver<FetchResult>,
	latest_search_id: Arc<AtomicU64>,
	next_search_id: u64,
	current_search_id: Option<u64>,
	in_flight: bool,
	next_export_id: u64,
	pending_exports: Vec<(u64, ExportKind)>,
}

impl FetchRuntime {
	pub(crate) fn new(
		tx: Sender<FetchCommand>,
		rx: Receiver<FetchResult>,
		latest_search_id: Arc<AtomicU64>,
	) -> Self {
		Self {
			tx,
			rx,
			latest_search_id,
			next_search_id: 0,
			current_search_id: None,
			in_flight: false,
			next_export_id: 0,
			pending_exports: Vec::new(),
		}
	}

	pub(crate) fn shutdown(&self) {
		let _ = self.tx.send(FetchCommand::Shutdown);
	}

	fn bump_search_id(&mut self) -> u64 {
		self.next_search_id = self.next_search_id.saturating_add(1);
		self.latest_search_id
			.store(self.next_search_id, AtomicOrdering::Release);
		self.next_search_id
	}

	pub(crate) fn issue_search(&mut self, query: String) -> u64 {
		let id = self.bump_search_id();
		self.current_search_id = Some(id);
		self.in_flight = true;
		tracing::debug!(id, query, "issuing search");
		let _ = self.tx.send(FetchCommand::Search { id, query });
		id
	}

	/// Forget the in-flight search so its response is ignored.
	pub(crate) fn invalidate_search(&mut self) {
		self.bump_search_id();
		self.current_search_id = None;
		self.in_flight = false;
	}

	pub(crate) fn matches_latest(&self, result_id: u64) -> bool {
		Some(result_id) == self.current_search_id
	}

	pub(crate) fn record_search_completion(&mut self) {
		self.in_flight = false;
	}

	pub(crate) fn is_in_flight(&self) -> bool {
		self.in_flight
	}

	pub(crate) fn issue_export(&mut self, kind: ExportKind, query: String) -> u64 {
		self.next_export_id = self.next_export_id.saturating_add(1);
		let id = self.next_export_id;
		self.pending_exports.push((id, kind));
		tracing::debug!(id, file = kind.file_name(), query, "issuing export");
		let _ = self.tx.send(FetchCommand::Export { id, kind, query });
		id
	}

	pub(crate) fn record_export_completion(&mut self, id: u64) {
		self.pending_exports.retain(|(pending, _)| *pending != id);
	}

	pub(crate) fn export_pending(&self, kind: ExportKind) -> bool {
		self.pending_exports
			.iter()
			.any(|(_, pending)| *pending == kind)
	}

	pub(crate) fn try_recv(&mut self) -> Result<FetchResult, TryRecvError> {
		self.rx.try_recv()
	}
}
