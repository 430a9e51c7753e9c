//! Unit tests for channel routing.
//!
//! End-to-end scenarios mixing both channels live in tests/scenarios.rs.

use keyfold_primitives::{KeyInput, Modifiers, VimKey};

use super::{KeyDownDecision, KeyProcessor, classify};
use crate::dispatch::ProcessResult;
use crate::recording::RecordingConsumer;
use crate::signal::{CompositionSignal, PhysicalKey, PhysicalKeySignal};

fn processor() -> KeyProcessor<RecordingConsumer> {
	KeyProcessor::new(RecordingConsumer::new())
}

#[test]
fn classify_precedence() {
	// Dead key wins over AltGr, AltGr wins over a mappable key.
	let dead_altgr = PhysicalKeySignal::dead(PhysicalKey::Escape, Modifiers::ALTGR);
	assert_eq!(classify(&dead_altgr), KeyDownDecision::DeadKey);

	let altgr_escape = PhysicalKeySignal::new(PhysicalKey::Escape, Modifiers::ALTGR);
	assert_eq!(classify(&altgr_escape), KeyDownDecision::AltGr);

	let letter = PhysicalKeySignal::new(PhysicalKey::Letter('J'), Modifiers::CONTROL);
	assert_eq!(classify(&letter), KeyDownDecision::Unmapped);

	let escape = PhysicalKeySignal::new(PhysicalKey::Escape, Modifiers::SHIFT);
	assert_eq!(
		classify(&escape),
		KeyDownDecision::Dispatch(KeyInput::symbolic(VimKey::Escape).with_modifiers(Modifiers::SHIFT))
	);
}

#[test]
fn composition_completed_pseudo_key_is_dead() {
	let mut p = processor();
	assert!(!p.on_key_down(PhysicalKeySignal::new(PhysicalKey::DeadCharProcessed, Modifiers::NONE)));
	assert!(p.consumer().offered().is_empty());
}

#[test]
fn altgr_with_shift_is_still_deferred() {
	let mut p = processor();
	let signal = PhysicalKeySignal::new(PhysicalKey::F(1), Modifiers::ALTGR | Modifiers::SHIFT);
	assert!(!p.on_key_down(signal));
	assert!(p.consumer().offered().is_empty());
}

#[test]
fn control_alone_is_not_altgr() {
	let mut p = processor();
	assert!(p.on_key_down(PhysicalKeySignal::new(PhysicalKey::Home, Modifiers::CONTROL)));
	assert_eq!(
		p.consumer().processed(),
		&[KeyInput::symbolic(VimKey::Home).with_modifiers(Modifiers::CONTROL)]
	);
}

#[test]
fn unmapped_key_is_not_dispatched() {
	let mut p = processor();
	assert!(!p.on_key_down(PhysicalKeySignal::new(PhysicalKey::Letter('A'), Modifiers::NONE)));
	assert!(p.consumer().offered().is_empty());
}

#[test]
fn key_down_reports_consumer_answer() {
	let tab = KeyInput::symbolic(VimKey::Tab);
	let mut p = KeyProcessor::new(RecordingConsumer::new().respond(tab, ProcessResult::NotHandled));
	assert!(!p.on_key_down(PhysicalKeySignal::new(PhysicalKey::Tab, Modifiers::NONE)));
	assert_eq!(p.consumer().processed(), &[tab]);
}

#[test]
fn need_more_input_counts_as_handled() {
	let mut p = KeyProcessor::new(RecordingConsumer::new().with_default(ProcessResult::HandledNeedMoreInput));
	assert!(p.on_text_composition(CompositionSignal::new("g", Modifiers::NONE)));
}

#[test]
fn consumer_error_counts_as_unhandled() {
	let mut p = KeyProcessor::new(RecordingConsumer::new().with_default(ProcessResult::Error));
	assert!(!p.on_key_down(PhysicalKeySignal::new(PhysicalKey::Enter, Modifiers::NONE)));
}

#[test]
fn empty_composition_is_a_no_op() {
	let mut p = processor();
	assert!(!p.on_text_composition(CompositionSignal::new("", Modifiers::CONTROL)));
	assert!(p.consumer().offered().is_empty());
}

#[test]
fn composition_uses_one_modifier_snapshot() {
	let mut p = processor();
	assert!(p.on_text_composition(CompositionSignal::new("ab", Modifiers::SHIFT)));
	assert_eq!(
		p.consumer().processed(),
		&[
			KeyInput::char('a').with_modifiers(Modifiers::SHIFT),
			KeyInput::char('b').with_modifiers(Modifiers::SHIFT),
		]
	);
}

#[test]
fn composition_last_character_wins() {
	let first = KeyInput::char('^');
	let second = KeyInput::char('e');

	let mut p = KeyProcessor::new(RecordingConsumer::new().respond(second, ProcessResult::NotHandled));
	assert!(!p.on_text_composition(CompositionSignal::new("^e", Modifiers::NONE)));
	assert_eq!(p.consumer().processed(), &[first, second]);

	let mut p = KeyProcessor::new(RecordingConsumer::new().respond(first, ProcessResult::NotHandled));
	assert!(p.on_text_composition(CompositionSignal::new("^e", Modifiers::NONE)));
}

#[test]
fn rejected_character_still_lets_later_ones_through() {
	let grave = KeyInput::char('`');
	let a = KeyInput::char('a');
	let mut p = KeyProcessor::new(RecordingConsumer::new().reject(grave));
	assert!(p.on_text_composition(CompositionSignal::new("`a", Modifiers::NONE)));
	assert_eq!(p.consumer().offered(), vec![grave, a]);
	assert_eq!(p.consumer().processed(), &[a]);
}

#[test]
fn composed_control_char_collides_with_symbolic_key() {
	let mut p = processor();
	p.on_key_down(PhysicalKeySignal::new(PhysicalKey::Escape, Modifiers::NONE));
	p.on_text_composition(CompositionSignal::new("\x1b", Modifiers::NONE));
	let processed = p.consumer().processed();
	assert_eq!(processed[0], processed[1]);
}
