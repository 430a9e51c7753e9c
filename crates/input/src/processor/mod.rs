//! Host-facing entry points for both keyboard channels.
//!
//! * [`KeyProcessor::on_key_down`] — raw key-down channel, symbolic keys only
//! * [`KeyProcessor::on_text_composition`] — composed text, one key input per character
//!
//! Both channels end in [`dispatch`](crate::dispatch::dispatch). Whenever a key-down
//! signal is ambiguous (dead key, AltGr) the key channel stands down and lets the
//! composed text carry the keystroke, so no keystroke is dispatched twice.

mod composition;
mod key_down;
#[cfg(test)]
mod tests;

pub use key_down::{KeyDownDecision, classify};

use crate::dispatch::KeyConsumer;
use crate::signal::{CompositionSignal, PhysicalKeySignal};

/// Normalizes host keyboard signals into key inputs for a [`KeyConsumer`].
///
/// Holds no state between signals besides the consumer itself. The return value of both
/// entry points tells the host whether to suppress its own default handling.
#[derive(Debug, Default, Clone)]
pub struct KeyProcessor<C> {
	consumer: C,
}

impl<C: KeyConsumer> KeyProcessor<C> {
	/// Creates a processor delivering to `consumer`.
	pub fn new(consumer: C) -> Self {
		Self { consumer }
	}

	/// Handles a raw key-down signal. Returns true if the consumer handled it.
	pub fn on_key_down(&mut self, signal: PhysicalKeySignal) -> bool {
		key_down::handle_key_down(&mut self.consumer, &signal)
	}

	/// Handles a composed-text signal. Returns the handled result of the last character.
	pub fn on_text_composition(&mut self, signal: CompositionSignal<'_>) -> bool {
		composition::handle_text_composition(&mut self.consumer, &signal)
	}

	/// Returns the consumer.
	pub fn consumer(&self) -> &C {
		&self.consumer
	}

	/// Returns the consumer mutably.
	pub fn consumer_mut(&mut self) -> &mut C {
		&mut self.consumer
	}

	/// Consumes the processor, returning the consumer.
	pub fn into_consumer(self) -> C {
		self.consumer
	}
}
