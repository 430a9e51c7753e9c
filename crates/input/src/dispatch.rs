//! The single path from resolved key inputs to the consumer.

use keyfold_primitives::KeyInput;
use tracing::debug;

/// Outcome of [`KeyConsumer::process`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProcessResult {
	/// The key was handled.
	Handled,
	/// The key was handled and started a sequence that needs more keys.
	HandledNeedMoreInput,
	/// The key was accepted but had no effect.
	NotHandled,
	/// Processing the key failed inside the consumer.
	Error,
}

impl ProcessResult {
	/// Returns true for both handled variants.
	pub fn is_any_handled(self) -> bool {
		matches!(self, ProcessResult::Handled | ProcessResult::HandledNeedMoreInput)
	}
}

/// The editor core's side of key delivery.
///
/// Delivery is two-phase: [`can_process`](Self::can_process) is a side-effect free check,
/// and [`process`](Self::process) is only called when it returned true.
pub trait KeyConsumer {
	/// Returns true if the consumer would accept `input` right now.
	fn can_process(&self, input: &KeyInput) -> bool;

	/// Processes `input`.
	fn process(&mut self, input: KeyInput) -> ProcessResult;
}

impl<C: KeyConsumer + ?Sized> KeyConsumer for &mut C {
	fn can_process(&self, input: &KeyInput) -> bool {
		(**self).can_process(input)
	}

	fn process(&mut self, input: KeyInput) -> ProcessResult {
		(**self).process(input)
	}
}

impl<C: KeyConsumer + ?Sized> KeyConsumer for Box<C> {
	fn can_process(&self, input: &KeyInput) -> bool {
		(**self).can_process(input)
	}

	fn process(&mut self, input: KeyInput) -> ProcessResult {
		(**self).process(input)
	}
}

/// Offers `input` to `consumer` and reports whether it was handled.
///
/// Returns `can_process(input) && process(input).is_any_handled()`. A rejected key never
/// reaches `process`.
pub fn dispatch<C: KeyConsumer + ?Sized>(consumer: &mut C, input: KeyInput) -> bool {
	if !consumer.can_process(&input) {
		debug!(key = %input, "consumer rejected key");
		return false;
	}

	let result = consumer.process(input);
	debug!(key = %input, ?result, "dispatched key");
	result.is_any_handled()
}
