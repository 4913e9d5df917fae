use clap::ValueEnum;

/// Output formats supported by the one-shot commands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
