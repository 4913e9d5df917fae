use synonyms::{logging, ui::style};

use super::{ConfigError, ConfigSources, ResolvedConfig};

pub(super) fn validate(
	config: &ResolvedConfig,
	sources: &ConfigSources,
) -> Result<(), ConfigError> {
	if config.base_url.trim().is_empty() {
		return Err(ConfigError::invalid(
			"api.base_url",
			config.base_url.clone(),
			sources.source_for_base_url(),
			"must be set (use --api-url, SYNONYMS_API_URL or api.base_url)",
		));
	}

	if let Some(secs) = config.timeout_secs
		&& secs == 0
	{
		return Err(ConfigError::invalid(
			"api.timeout_secs",
			secs.to_string(),
			sources.source_for_timeout(),
			"must be greater than zero",
		));
	}

	if style::by_name(&config.theme).is_none() {
		return Err(ConfigError::invalid(
			"ui.theme",
			config.theme.clone(),
			sources.source_for_theme(),
			format!("unknown theme; expected one of {}", style::names().join(", ")),
		));
	}

	if logging::parse_level(&config.log_level).is_none() {
		return Err(ConfigError::invalid(
			"logging.level",
			config.log_level.clone(),
			sources.source_for_log_level(),
			"expected one of error, warn, info, debug, trace",
		));
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::super::SettingSource;
	use super::*;

	fn config() -> ResolvedConfig {
		ResolvedConfig {
			base_url: "http://localhost:4000/synonyms/".into(),
			timeout_secs: None,
			theme: "slate".into(),
			initial_word: None,
			return_to_search_on_add: true,
			log_level: "info".into(),
			log_file: None,
		}
	}

	#[test]
	fn valid_config_passes() {
		assert!(validate(&config(), &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_blank_base_url() {
		let config = ResolvedConfig {
			base_url: "  ".into(),
			..config()
		};
		let sources = ConfigSources {
			base_url: Some(SettingSource::Environment("SYNONYMS_API_URL")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "api.base_url");
		assert!(err.to_string().contains("environment variable"));
	}

	#[test]
	fn validation_rejects_zero_timeout() {
		let config = ResolvedConfig {
			timeout_secs: Some(0),
			..config()
		};
		let sources = ConfigSources {
			timeout_secs: Some(SettingSource::CliFlag("--timeout")),
			..ConfigSources::default()
		};

		let err = validate(&config, &sources).unwrap_err();
		assert_eq!(err.key, "api.timeout_secs");
		let message = err.to_string();
		assert!(message.contains("value: 0"));
		assert!(message.contains("CLI flag"));
	}

	#[test]
	fn theme_aliases_are_accepted() {
		let config = ResolvedConfig {
			theme: "Dark".into(),
			..config()
		};
		assert!(validate(&config, &ConfigSources::default()).is_ok());
	}

	#[test]
	fn validation_rejects_unknown_log_level() {
		let config = ResolvedConfig {
			log_level: "loud".into(),
			..config()
		};

		let err = validate(&config, &ConfigSources::default()).unwrap_err();
		assert_eq!(err.key, "logging.level");
		assert!(err.to_string().contains("configuration key `logging.level`"));
	}
}
