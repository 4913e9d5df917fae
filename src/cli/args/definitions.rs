use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, ColorChoice, Parser, Subcommand};

use super::options::OutputFormat;
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `synonyms` binary.
#[derive(Parser, Debug)]
#[command(
	name = "synonyms",
	version,
	long_version = long_version(),
	about = "Search for synonyms and add new ones through a lookup service",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "SYNONYMS_CONFIG",
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
		short = 'a',
		long = "api-url",
		value_name = "URL",
		env = "SYNONYMS_API_URL",
		help = "Base URL of the lookup service; the word is appended for lookups (default: none)"
	)]
	pub(crate) api_url: Option<String>,
	#[arg(
		long = "timeout",
		value_name = "SECS",
		help = "Request timeout in seconds (default: client default)"
	)]
	pub(crate) timeout: Option<u64>,
	#[arg(
		short = 'w',
		long,
		value_name = "WORD",
		help = "Look this word up when the UI starts (default: none)"
	)]
	pub(crate) word: Option<String>,
	#[arg(
		long,
		value_name = "THEME",
		help = "Select a theme by name (default: slate)"
	)]
	pub(crate) theme: Option<String>,
	#[arg(
		long = "return-to-search",
		value_name = "BOOL",
		value_parser = BoolishValueParser::new(),
		help = "Go back to the search panel after adding synonyms (default: enabled)"
	)]
	pub(crate) return_to_search: Option<bool>,
	#[arg(
		long = "log-file",
		value_name = "FILE",
		help = "Write logs to this file (default: data directory for the UI, stderr otherwise)"
	)]
	pub(crate) log_file: Option<PathBuf>,
	#[arg(
		short = 'v',
		long = "verbose",
		action = ArgAction::Count,
		global = true,
		help = "Increase log verbosity; repeat for more detail"
	)]
	pub(crate) verbose: u8,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		short = 'l',
		long = "list-themes",
		help = "List supported themes and exit (default: disabled)"
	)]
	pub(crate) list_themes: bool,
	#[arg(
		short = 'o',
		long = "output",
		value_enum,
		global = true,
		default_value_t = OutputFormat::Plain,
		help = "Choose how one-shot commands print their result"
	)]
	pub(crate) output: OutputFormat,
	#[command(subcommand)]
	pub(crate) command: Option<Command>,
}

/// One-shot commands that skip the interactive UI.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub(crate) enum Command {
	/// Look a word up and print its synonyms.
	Lookup {
		#[arg(value_name = "WORD")]
		word: String,
	},
	/// Add synonyms for a word.
	Add {
		#[arg(value_name = "WORD")]
		word: String,
		/// Comma-separated synonyms, e.g. "clean, tidy".
		#[arg(value_name = "SYNONYMS")]
		synonyms: String,
	},
}
