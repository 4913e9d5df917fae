use super::ResolvedConfig;

pub(super) fn print_summary(config: &ResolvedConfig) {
	println!("Effective configuration:");
	println!("  API base URL: {}", config.base_url);
	match config.timeout_secs {
		Some(secs) => println!("  Request timeout: {secs}s"),
		None => println!("  Request timeout: (client default)"),
	}
	println!("  UI theme: {}", config.theme);
	if let Some(word) = &config.initial_word {
		println!("  Initial word: {word}");
	}
	println!(
		"  Return to search after adding: {}",
		bool_to_word(config.return_to_search_on_add)
	);
	println!("  Log level: {}", config.log_level);
	match &config.log_file {
		Some(path) => println!("  Log file: {}", path.display()),
		None => println!("  Log file: (default)"),
	}
}

fn bool_to_word(value: bool) -> &'static str {
	if value { "yes" } else { "no" }
}
