//! Error types for trace loading.

use std::path::PathBuf;

use keyfold_input::UnknownKeyError;
use keyfold_primitives::NotationError;
use thiserror::Error;

/// Errors that can occur when loading a trace.
#[derive(Debug, Error)]
pub enum TraceError {
	/// Error reading the trace file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// The file is not valid TOML or does not match the trace schema.
	#[error("invalid trace: {0}")]
	Toml(#[from] toml::de::Error),

	/// A `key-down` signal names an unknown physical key.
	#[error(transparent)]
	PhysicalKey(#[from] UnknownKeyError),

	/// A modifier name is not `shift`, `ctrl` or `alt`.
	#[error("unknown modifier `{0}`")]
	Modifier(String),

	/// A consumer policy entry is not valid key notation.
	#[error("invalid key notation `{notation}`: {error}")]
	Notation {
		/// The offending entry.
		notation: String,
		/// The underlying notation error.
		error: NotationError,
	},
}

/// Result type for trace operations.
pub type Result<T> = std::result::Result<T, TraceError>;
