//! Composed-text channel.

use tracing::trace;

use crate::dispatch::{KeyConsumer, dispatch};
use crate::resolver::resolve_char;
use crate::signal::CompositionSignal;

/// Dispatches each character of `signal` in order and returns the last one's result.
///
/// Every character is offered to the consumer even when only the final result reaches
/// the host. Modifiers come from the signal snapshot, once for the whole string.
pub(super) fn handle_text_composition<C: KeyConsumer + ?Sized>(consumer: &mut C, signal: &CompositionSignal<'_>) -> bool {
	if signal.text.is_empty() {
		trace!("empty composition");
		return false;
	}

	let modifiers = signal.modifiers;
	let mut handled = false;
	for c in signal.text.chars() {
		handled = dispatch(consumer, resolve_char(c, modifiers));
	}

	trace!(text = signal.text, handled, "composition dispatched");
	handled
}
