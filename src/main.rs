mod cli;
mod settings;
mod workflow;

use std::process::ExitCode;

use anyhow::{Context, Result};
use cli::{CliArgs, Command, OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use synonyms::app_dirs;
use synonyms::logging::{self, LogConfig};
use workflow::SynonymsWorkflow;

fn main() -> Result<ExitCode> {
	let cli = parse_cli();

	if cli.list_themes {
		for definition in synonyms::theme_definitions() {
			if definition.aliases.is_empty() {
				println!("{}", definition.name);
			} else {
				println!("{} (aliases: {})", definition.name, definition.aliases.join(", "));
			}
		}
		return Ok(ExitCode::SUCCESS);
	}

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	init_logging(&cli, &resolved)?;

	let workflow = SynonymsWorkflow::from_config(resolved)?;
	match &cli.command {
		Some(command) => run_command(&workflow, command, cli.output),
		None => {
			workflow.run_interactive()?;
			Ok(ExitCode::SUCCESS)
		}
	}
}

/// The UI owns the terminal, so it always logs to a file.
fn init_logging(cli: &CliArgs, config: &ResolvedConfig) -> Result<()> {
	let level = logging::level_from_verbosity(config.tracing_level(), cli.verbose);
	let file = match (&config.log_file, &cli.command) {
		(Some(path), _) => Some(path.clone()),
		(None, None) => Some(app_dirs::default_log_file()?),
		(None, Some(_)) => None,
	};

	let log_config = LogConfig::default().with_level(level).with_file(file);
	logging::init_logging(&log_config).context("failed to initialise logging")
}

/// Execute a one-shot command and print its report in the chosen format.
fn run_command(
	workflow: &SynonymsWorkflow,
	command: &Command,
	format: OutputFormat,
) -> Result<ExitCode> {
	let report = workflow.run_command(command);

	match format {
		OutputFormat::Plain => print_plain(&report),
		OutputFormat::Json => print_json(&report)?,
	}

	Ok(if report.succeeded() {
		ExitCode::SUCCESS
	} else {
		ExitCode::FAILURE
	})
}
