use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use tracing::debug;

use super::{ApiCommand, ApiResult, SynonymsApi};

/// Launches the background request worker and returns its channels together
/// with the id of the most recently issued lookup.
///
/// The UI stores the latest lookup id before sending the command, which lets
/// the worker skip lookups that were superseded while they sat in the queue.
pub(crate) fn spawn(
	api: Arc<dyn SynonymsApi>,
) -> (Sender<ApiCommand>, Receiver<ApiResult>, Arc<AtomicU64>) {
	let (command_tx, command_rx) = mpsc::channel();
	let (result_tx, result_rx) = mpsc::channel();
	let latest_lookup_id = Arc::new(AtomicU64::new(0));
	let thread_latest = Arc::clone(&latest_lookup_id);

	thread::spawn(move || worker_loop(api.as_ref(), command_rx, result_tx, &thread_latest));

	(command_tx, result_rx, latest_lookup_id)
}

fn worker_loop(
	api: &dyn SynonymsApi,
	command_rx: Receiver<ApiCommand>,
	result_tx: Sender<ApiResult>,
	latest_lookup_id: &AtomicU64,
) {
	while let Ok(command) = command_rx.recv() {
		if !handle_command(api, &result_tx, latest_lookup_id, command) {
			break;
		}
	}
	debug!("request worker stopped");
}

fn handle_command(
	api: &dyn SynonymsApi,
	result_tx: &Sender<ApiResult>,
	latest_lookup_id: &AtomicU64,
	command: ApiCommand,
) -> bool {
	match command {
		ApiCommand::Lookup { id, word } => {
			if id < latest_lookup_id.load(Ordering::Acquire) {
				debug!(id, %word, "skipping superseded lookup");
				return true;
			}
			let result = api.lookup(&word);
			result_tx.send(ApiResult::Lookup { id, word, result }).is_ok()
		}
		ApiCommand::Create { id, request } => {
			let result = api.create(&request);
			result_tx.send(ApiResult::Create { id, result }).is_ok()
		}
		ApiCommand::Shutdown => false,
	}
}
