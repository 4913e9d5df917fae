use anyhow::{Error, Result};
use serde::Deserialize;
use std::env;

use crate::cli::CliArgs;

use super::resolved::{ConfigSources, ResolvedConfig, SettingSource};

mod api;
mod logging;
mod ui;

use api::ApiSection;
use logging::LoggingSection;
use ui::UiSection;

const API_URL_ENV: &str = "SYNONYMS_API_URL";

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	api: ApiSection,
	ui: UiSection,
	logging: LoggingSection,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		self.api.apply_cli_overrides(cli);
		self.ui.apply_cli_overrides(cli);
		self.logging.apply_cli_overrides(cli);
	}

	/// Convert the raw configuration into a [`ResolvedConfig`], validating and
	/// filling defaults where required.
	pub(super) fn resolve(self, cli: &CliArgs) -> Result<ResolvedConfig> {
		let url_from_flag = cli.api_url.is_some() && env::var_os(API_URL_ENV).is_none();
		let sources = ConfigSources {
			base_url: detect_source(
				url_from_flag,
				self.api.base_url.is_some(),
				&[API_URL_ENV, "SYNONYMS__API__BASE_URL"],
				"--api-url",
				"api.base_url",
			),
			timeout_secs: detect_source(
				cli.timeout.is_some(),
				self.api.timeout_secs.is_some(),
				&["SYNONYMS__API__TIMEOUT_SECS"],
				"--timeout",
				"api.timeout_secs",
			),
			theme: detect_source(
				cli.theme.is_some(),
				self.ui.theme.is_some(),
				&["SYNONYMS__UI__THEME"],
				"--theme",
				"ui.theme",
			),
			log_level: detect_source(
				false,
				self.logging.level.is_some(),
				&["SYNONYMS__LOGGING__LEVEL"],
				"",
				"logging.level",
			),
		};

		let api = self.api.finalize();
		let ui = self.ui.finalize();
		let logging = self.logging.finalize();

		let config = ResolvedConfig {
			base_url: api.base_url,
			timeout_secs: api.timeout_secs,
			theme: ui.theme,
			initial_word: ui.initial_word,
			return_to_search_on_add: ui.return_to_search_on_add,
			log_level: logging.level,
			log_file: logging.file,
		};

		config.validate(&sources).map_err(Error::new)?;

		Ok(config)
	}
}

fn detect_source(
	cli_present: bool,
	value_present: bool,
	env_vars: &[&'static str],
	cli_flag: &'static str,
	key: &'static str,
) -> Option<SettingSource> {
	if !value_present {
		return None;
	}

	if cli_present {
		return Some(SettingSource::CliFlag(cli_flag));
	}

	if let Some(var) = env_vars
		.iter()
		.find(|var| env::var_os(var).is_some())
	{
		return Some(SettingSource::Environment(*var));
	}

	Some(SettingSource::ConfigKey(key))
}
