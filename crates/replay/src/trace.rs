//! Trace file schema.
//!
//! ```toml
//! [consumer]
//! default = "handled"
//! reject = ["ctrl-r"]
//! not-handled = ["f12"]
//! need-more-input = ["g"]
//!
//! [[signal]]
//! kind = "key-down"
//! key = "oem-222"
//! dead = true
//!
//! [[signal]]
//! kind = "text"
//! text = "é"
//! modifiers = ["ctrl", "alt"]
//! ```

use std::path::Path;

use keyfold_input::{Modifiers, PhysicalKey, PhysicalKeySignal, ProcessResult, RecordingConsumer};
use keyfold_keymap_parser::Modifier;
use keyfold_primitives::KeyInput;
use serde::Deserialize;
use tracing::info;

use crate::error::{Result, TraceError};

/// A loaded trace: the consumer to replay against and the signals to deliver.
#[derive(Debug, Clone)]
pub struct Trace {
	/// Scripted consumer built from the `[consumer]` table.
	pub consumer: RecordingConsumer,
	/// Signals in delivery order.
	pub signals: Vec<Signal>,
}

/// One host signal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Signal {
	/// Raw key-down.
	KeyDown(PhysicalKeySignal),
	/// Composed text with its modifier snapshot.
	Text {
		/// Composed text.
		text: String,
		/// Modifiers held at delivery time.
		modifiers: Modifiers,
	},
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawTrace {
	#[serde(default)]
	consumer: RawConsumer,
	#[serde(default, rename = "signal")]
	signals: Vec<RawSignal>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
struct RawConsumer {
	default: RawResult,
	reject: Vec<String>,
	not_handled: Vec<String>,
	need_more_input: Vec<String>,
	error: Vec<String>,
}

#[derive(Debug, Default, Clone, Copy, Deserialize)]
#[serde(rename_all = "kebab-case")]
enum RawResult {
	#[default]
	Handled,
	NeedMoreInput,
	NotHandled,
	Error,
}

impl From<RawResult> for ProcessResult {
	fn from(raw: RawResult) -> Self {
		match raw {
			RawResult::Handled => ProcessResult::Handled,
			RawResult::NeedMoreInput => ProcessResult::HandledNeedMoreInput,
			RawResult::NotHandled => ProcessResult::NotHandled,
			RawResult::Error => ProcessResult::Error,
		}
	}
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
enum RawSignal {
	KeyDown {
		key: String,
		#[serde(default)]
		modifiers: Vec<String>,
		#[serde(default)]
		dead: bool,
	},
	Text {
		text: String,
		#[serde(default)]
		modifiers: Vec<String>,
	},
}

impl Trace {
	/// Reads and parses a trace file.
	///
	/// # Errors
	///
	/// Returns [`TraceError::Io`] if the file cannot be read, or any error from
	/// [`Trace::parse`].
	pub fn load(path: &Path) -> Result<Self> {
		let content = std::fs::read_to_string(path).map_err(|error| TraceError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let trace = Self::parse(&content)?;
		info!(path = %path.display(), signals = trace.signals.len(), "loaded trace");
		Ok(trace)
	}

	/// Parses trace TOML.
	///
	/// # Errors
	///
	/// Returns an error for malformed TOML, unknown physical keys or modifiers, and
	/// consumer entries that are not valid key notation.
	pub fn parse(content: &str) -> Result<Self> {
		let raw: RawTrace = toml::from_str(content)?;

		let consumer = build_consumer(raw.consumer)?;
		let signals = raw.signals.into_iter().map(build_signal).collect::<Result<Vec<_>>>()?;

		Ok(Self { consumer, signals })
	}
}

fn build_consumer(raw: RawConsumer) -> Result<RecordingConsumer> {
	let mut consumer = RecordingConsumer::new().with_default(raw.default.into());

	for notation in &raw.reject {
		consumer = consumer.reject(parse_key(notation)?);
	}
	for (entries, result) in [
		(&raw.not_handled, ProcessResult::NotHandled),
		(&raw.need_more_input, ProcessResult::HandledNeedMoreInput),
		(&raw.error, ProcessResult::Error),
	] {
		for notation in entries {
			consumer = consumer.respond(parse_key(notation)?, result);
		}
	}

	Ok(consumer)
}

fn build_signal(raw: RawSignal) -> Result<Signal> {
	match raw {
		RawSignal::KeyDown { key, modifiers, dead } => {
			let key: PhysicalKey = key.parse()?;
			let modifiers = parse_modifiers(&modifiers)?;
			Ok(Signal::KeyDown(if dead {
				PhysicalKeySignal::dead(key, modifiers)
			} else {
				PhysicalKeySignal::new(key, modifiers)
			}))
		}
		RawSignal::Text { text, modifiers } => Ok(Signal::Text {
			text,
			modifiers: parse_modifiers(&modifiers)?,
		}),
	}
}

fn parse_key(notation: &str) -> Result<KeyInput> {
	notation.parse().map_err(|error| TraceError::Notation {
		notation: notation.to_string(),
		error,
	})
}

fn parse_modifiers(names: &[String]) -> Result<Modifiers> {
	names.iter().try_fold(Modifiers::NONE, |acc, name| {
		let modifier: Modifier = name.parse().map_err(|()| TraceError::Modifier(name.clone()))?;
		Ok(acc | Modifiers::from_notation(modifier as u8))
	})
}
