//! Keyboard signal normalization.
//!
//! Hosts deliver keyboard input on two channels: raw key-down events and composed text.
//! [`KeyProcessor`] folds both into one ordered stream of [`KeyInput`] values offered to a
//! [`KeyConsumer`], so each physical keystroke reaches the consumer at most once.
//!
//! * [`resolver`] — physical key / character to [`KeyInput`]
//! * [`KeyProcessor`] — host entry points for both channels
//! * [`KeyConsumer`] — the editor core's two-phase accept/process contract
//! * [`RecordingConsumer`] — scripted consumer that records what it was offered

pub mod dispatch;
pub mod processor;
pub mod recording;
pub mod resolver;
pub mod signal;

pub use dispatch::{KeyConsumer, ProcessResult, dispatch};
pub use keyfold_primitives::{KeyInput, Modifiers, VimKey};
pub use processor::{KeyDownDecision, KeyProcessor, classify};
pub use recording::RecordingConsumer;
pub use resolver::{resolve_char, resolve_key};
pub use signal::{CompositionSignal, PhysicalKey, PhysicalKeySignal, UnknownKeyError};
