//! `keyfold-replay` binary.
//!
//! Loads a trace, replays it and prints one record per signal.

mod cli;

use clap::Parser;
use cli::{Cli, Format};
use keyfold_replay::{Trace, render_text, replay};
use tracing::info;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();

	setup_tracing(cli.verbose);

	let trace = Trace::load(&cli.trace)?;
	let records = replay(&trace);
	info!(signals = records.len(), handled = records.iter().filter(|r| r.handled).count(), "replay finished");

	match cli.format {
		Format::Text => print!("{}", render_text(&records)),
		Format::Json => println!("{}", serde_json::to_string_pretty(&records)?),
	}

	Ok(())
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_env("KEYFOLD_LOG").unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("keyfold_input=trace,keyfold_replay=debug")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(true)
		.init();
}
