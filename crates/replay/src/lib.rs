//! Trace replay for the key normalization engine.
//!
//! A trace is a TOML file holding a scripted consumer policy and an ordered list of host
//! signals. [`replay`] runs the signals through a [`KeyProcessor`](keyfold_input::KeyProcessor)
//! and returns one [`SignalRecord`] per signal.

mod error;
mod report;
mod trace;

pub use error::{Result, TraceError};
pub use report::{SignalRecord, render_text, replay};
pub use trace::{Signal, Trace};
