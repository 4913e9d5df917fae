use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use tracing::debug;

use crate::api::{AddRequest, ApiCommand, ApiResult};

/// Tracks which request each panel is waiting on.
///
/// Ids come from one counter, so a result only applies when its id is the
/// panel's latest request. Anything older is stale and gets dropped.
pub(crate) struct RequestRuntime {
	tx: Sender<ApiCommand>,
	rx: Receiver<ApiResult>,
	latest_lookup_id: Arc<AtomicU64>,
	next_id: u64,
	current_lookup: Option<u64>,
	current_create: Option<u64>,
}

impl RequestRuntime {
	pub(crate) fn new(
		tx: Sender<ApiCommand>,
		rx: Receiver<ApiResult>,
		latest_lookup_id: Arc<AtomicU64>,
	) -> Self {
		Self {
			tx,
			rx,
			latest_lookup_id,
			next_id: 0,
			current_lookup: None,
			current_create: None,
		}
	}

	pub(crate) fn shutdown(&self) {
		let _ = self.tx.send(ApiCommand::Shutdown);
	}

	fn allocate_id(&mut self) -> u64 {
		self.next_id = self.next_id.saturating_add(1);
		self.next_id
	}

	pub(crate) fn issue_lookup(&mut self, word: String) -> u64 {
		let id = self.allocate_id();
		self.current_lookup = Some(id);
		self.latest_lookup_id.store(id, AtomicOrdering::Release);
		debug!(id, %word, "issuing lookup");
		let _ = self.tx.send(ApiCommand::Lookup { id, word });
		id
	}

	pub(crate) fn issue_create(&mut self, request: AddRequest) -> u64 {
		let id = self.allocate_id();
		self.current_create = Some(id);
		debug!(id, word = %request.word, "issuing create");
		let _ = self.tx.send(ApiCommand::Create { id, request });
		id
	}

	/// Stop waiting for the pending lookup; queued lookups are skipped too.
	pub(crate) fn forget_lookup(&mut self) {
		if self.current_lookup.take().is_some() {
			let fence = self.allocate_id();
			self.latest_lookup_id.store(fence, AtomicOrdering::Release);
		}
	}

	/// Accept a lookup result if it answers the latest lookup.
	pub(crate) fn complete_lookup(&mut self, id: u64) -> bool {
		if self.current_lookup == Some(id) {
			self.current_lookup = None;
			true
		} else {
			debug!(id, "dropping stale lookup result");
			false
		}
	}

	/// Accept a create result if it answers the latest create.
	pub(crate) fn complete_create(&mut self, id: u64) -> bool {
		if self.current_create == Some(id) {
			self.current_create = None;
			true
		} else {
			debug!(id, "dropping stale create result");
			false
		}
	}

	pub(crate) fn lookup_in_flight(&self) -> bool {
		self.current_lookup.is_some()
	}

	pub(crate) fn create_in_flight(&self) -> bool {
		self.current_create.is_some()
	}

	pub(crate) fn is_in_flight(&self) -> bool {
		self.lookup_in_flight() || self.create_in_flight()
	}

	pub(crate) fn try_recv(&mut self) -> Result<ApiResult, TryRecvError> {
		self.rx.try_recv()
	}
}
