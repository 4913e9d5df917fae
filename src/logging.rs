//! Logging set-up using `tracing` and `tracing-subscriber`.
//!
//! The interactive UI owns the terminal, so it logs to a file; one-shot
//! commands log to stderr unless a file is given. `RUST_LOG` always wins over
//! the configured level.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use tracing::Level;
use tracing_subscriber::{
	EnvFilter,
	fmt::{self, MakeWriter},
	layer::SubscriberExt,
	util::SubscriberInitExt,
};

/// Where and how much to log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
	pub level: Level,
	/// Append to this file instead of writing to stderr.
	pub file: Option<PathBuf>,
}

impl Default for LogConfig {
	fn default() -> Self {
		Self {
			level: Level::WARN,
			file: None,
		}
	}
}

impl LogConfig {
	#[must_use]
	pub fn with_level(mut self, level: Level) -> Self {
		self.level = level;
		self
	}

	#[must_use]
	pub fn with_file(mut self, file: Option<PathBuf>) -> Self {
		self.file = file;
		self
	}
}

/// Map a `-v` count onto a level: none keeps `base`, one is debug, more is
/// trace.
pub fn level_from_verbosity(base: Level, verbosity: u8) -> Level {
	match verbosity {
		0 => base,
		1 => Level::DEBUG.max(base),
		_ => Level::TRACE,
	}
}

/// Parse a level name such as `info` or `DEBUG`.
pub fn parse_level(value: &str) -> Option<Level> {
	value.trim().parse().ok()
}

/// Install the global subscriber.
///
/// # Errors
///
/// Returns an error when the log file cannot be opened or a subscriber is
/// already installed.
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
	let filter = build_env_filter(config.level);
	let layer = fmt::layer().with_target(false);

	let result = if let Some(path) = &config.file {
		if let Some(parent) = path.parent()
			&& !parent.as_os_str().is_empty()
		{
			fs::create_dir_all(parent)?;
		}
		let file = OpenOptions::new().create(true).append(true).open(path)?;
		tracing_subscriber::registry()
			.with(filter)
			.with(layer.with_ansi(false).with_writer(SharedFileWriter::new(file)))
			.try_init()
	} else {
		tracing_subscriber::registry()
			.with(filter)
			.with(layer.with_writer(io::stderr))
			.try_init()
	};

	result.map_err(io::Error::other)
}

fn build_env_filter(level: Level) -> EnvFilter {
	EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		let level = level.as_str().to_lowercase();
		EnvFilter::new(format!("warn,synonyms={level}"))
	})
}

#[derive(Clone)]
struct SharedFileWriter {
	file: Arc<Mutex<File>>,
}

impl SharedFileWriter {
	fn new(file: File) -> Self {
		Self {
			file: Arc::new(Mutex::new(file)),
		}
	}
}

struct SharedFileGuard {
	file: Arc<Mutex<File>>,
}

impl Write for SharedFileGuard {
	fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
		let mut guard = self
			.file
			.lock()
			.map_err(|_| io::Error::other("log file lock poisoned"))?;
		guard.write(buf)
	}

	fn flush(&mut self) -> io::Result<()> {
		let mut guard = self
			.file
			.lock()
			.map_err(|_| io::Error::other("log file lock poisoned"))?;
		guard.flush()
	}
}

impl<'a> MakeWriter<'a> for SharedFileWriter {
	type Writer = SharedFileGuard;

	fn make_writer(&'a self) -> Self::Writer {
		SharedFileGuard {
			file: Arc::clone(&self.file),
		}
	}
}
