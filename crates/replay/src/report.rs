//! Replaying a trace and rendering the outcome.

use std::fmt::Write as _;

use keyfold_input::{CompositionSignal, KeyProcessor, Modifiers};
use serde::Serialize;
use tracing::debug;

use crate::trace::{Signal, Trace};

/// What happened to one signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignalRecord {
	/// Position in the trace, from 1.
	pub index: usize,
	/// Human-readable signal description.
	pub signal: String,
	/// Value returned to the host.
	pub handled: bool,
	/// Keys offered to the consumer, in key notation.
	pub offered: Vec<String>,
	/// Keys the consumer accepted and processed, in key notation.
	pub processed: Vec<String>,
}

/// Runs every signal of `trace` through a fresh processor.
pub fn replay(trace: &Trace) -> Vec<SignalRecord> {
	let mut processor = KeyProcessor::new(trace.consumer.clone());

	trace
		.signals
		.iter()
		.enumerate()
		.map(|(i, signal)| {
			let handled = match signal {
				Signal::KeyDown(key_down) => processor.on_key_down(*key_down),
				Signal::Text { text, modifiers } => {
					processor.on_text_composition(CompositionSignal::new(text, *modifiers))
				}
			};

			let consumer = processor.consumer_mut();
			let offered = consumer.offered().iter().map(ToString::to_string).collect();
			let processed = consumer.take_processed().iter().map(ToString::to_string).collect();

			let record = SignalRecord {
				index: i + 1,
				signal: describe(signal),
				handled,
				offered,
				processed,
			};
			debug!(index = record.index, signal = %record.signal, handled, "replayed signal");
			record
		})
		.collect()
}

/// Renders records as one line per signal.
pub fn render_text(records: &[SignalRecord]) -> String {
	let mut out = String::new();
	for record in records {
		let verdict = if record.handled { "handled" } else { "unhandled" };
		let _ = write!(out, "#{} {} -> {verdict}", record.index, record.signal);
		if !record.offered.is_empty() {
			let _ = write!(out, " [{}]", record.offered.join(" "));
		}
		if record.processed.len() != record.offered.len() {
			let _ = write!(out, " processed [{}]", record.processed.join(" "));
		}
		out.push('\n');
	}
	out
}

fn describe(signal: &Signal) -> String {
	match signal {
		Signal::KeyDown(key_down) => {
			let names = modifier_names(key_down.modifiers);
			let mut desc = if names.is_empty() {
				format!("key-down {}", key_down.key)
			} else {
				format!("key-down {names}-{}", key_down.key)
			};
			if key_down.dead_key {
				desc.push_str(" (dead)");
			}
			desc
		}
		Signal::Text { text, modifiers } => {
			let names = modifier_names(*modifiers);
			if names.is_empty() {
				format!("text {text:?}")
			} else {
				format!("text {text:?} ({names})")
			}
		}
	}
}

fn modifier_names(modifiers: Modifiers) -> String {
	[(Modifiers::CONTROL, "ctrl"), (Modifiers::ALT, "alt"), (Modifiers::SHIFT, "shift")]
		.into_iter()
		.filter(|(flag, _)| modifiers.contains(*flag))
		.map(|(_, name)| name)
		.collect::<Vec<_>>()
		.join("-")
}
