//! Raw key-down channel.

use keyfold_primitives::KeyInput;
use tracing::trace;

use crate::dispatch::{KeyConsumer, dispatch};
use crate::resolver::resolve_key;
use crate::signal::PhysicalKeySignal;

/// How the key-down channel treats a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDownDecision {
	/// Part of a dead-key sequence; the composed character follows as text.
	DeadKey,
	/// Control and Alt both held. Indistinguishable from AltGr, so the composed text
	/// (if any) carries the keystroke and Control+Alt chords never reach the consumer
	/// from this channel.
	AltGr,
	/// No symbolic mapping; left to the host.
	Unmapped,
	/// Dispatch this key input.
	Dispatch(KeyInput),
}

/// Classifies a key-down signal. Checks run in order: dead key, AltGr, symbolic lookup.
pub fn classify(signal: &PhysicalKeySignal) -> KeyDownDecision {
	if signal.is_dead_key_class() {
		return KeyDownDecision::DeadKey;
	}
	if signal.modifiers.is_altgr() {
		return KeyDownDecision::AltGr;
	}
	match resolve_key(signal.key, signal.modifiers) {
		Some(input) => KeyDownDecision::Dispatch(input),
		None => KeyDownDecision::Unmapped,
	}
}

pub(super) fn handle_key_down<C: KeyConsumer + ?Sized>(consumer: &mut C, signal: &PhysicalKeySignal) -> bool {
	match classify(signal) {
		KeyDownDecision::Dispatch(input) => dispatch(consumer, input),
		decision => {
			trace!(key = %signal.key, modifiers = ?signal.modifiers, ?decision, "key-down left to host");
			false
		}
	}
}
