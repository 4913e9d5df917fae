use clap::{CommandFactory, Parser};

use super::{CliArgs, Command, OutputFormat};

#[test]
fn command_definition_is_consistent() {
	CliArgs::command().debug_assert();
}

#[test]
fn parse_cli_accepts_default_arguments() {
	let parsed = CliArgs::try_parse_from(["synonyms"]).expect("parses");
	assert_eq!(parsed.output, OutputFormat::Plain);
	assert!(parsed.command.is_none());
	assert_eq!(parsed.verbose, 0);
}

#[test]
fn lookup_subcommand_takes_a_word() {
	let parsed = CliArgs::try_parse_from(["synonyms", "lookup", "same", "-o", "json"]).expect("parses");
	assert_eq!(
		parsed.command,
		Some(Command::Lookup {
			word: "same".into()
		})
	);
	assert_eq!(parsed.output, OutputFormat::Json);
}

#[test]
fn add_subcommand_keeps_raw_synonyms() {
	let parsed =
		CliArgs::try_parse_from(["synonyms", "add", "happy", "joyful, content"]).expect("parses");
	assert_eq!(
		parsed.command,
		Some(Command::Add {
			word: "happy".into(),
			synonyms: "joyful, content".into(),
		})
	);
}

#[test]
fn add_subcommand_requires_synonyms() {
	assert!(CliArgs::try_parse_from(["synonyms", "add", "happy"]).is_err());
}

#[test]
fn boolish_and_count_flags_parse() {
	let parsed = CliArgs::try_parse_from(["synonyms", "--return-to-search", "off", "-vv"])
		.expect("parses");
	assert_eq!(parsed.return_to_search, Some(false));
	assert_eq!(parsed.verbose, 2);
}
