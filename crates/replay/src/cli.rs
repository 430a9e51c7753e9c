use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments.
#[derive(Parser, Debug)]
#[command(name = "keyfold-replay")]
#[command(about = "Replay host keyboard signals through the key normalization engine")]
#[command(version)]
pub struct Cli {
	/// Trace file (TOML) describing the consumer policy and the signals to replay
	pub trace: PathBuf,

	/// Output format
	#[arg(long, short = 'f', value_enum, default_value_t = Format::Text)]
	pub format: Format,

	/// Verbose logging (overridden by KEYFOLD_LOG)
	#[arg(long, short = 'v')]
	pub verbose: bool,
}

/// Report output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
	/// One line per signal.
	Text,
	/// Pretty-printed JSON array.
	Json,
}
