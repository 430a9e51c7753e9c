//! Physical key and character resolution.
//!
//! Character keys are never resolved from key-down events: their meaning (shift state,
//! layout, dead keys) is computed by the host's text pipeline and arrives as composed
//! text. Only keys without a character representation go through [`resolve_key`].

use std::sync::LazyLock;

use keyfold_primitives::{KeyInput, Modifiers, VimKey};
use rustc_hash::FxHashMap;

use crate::signal::PhysicalKey;

/// Named entries of the symbolic key table. Function keys and numpad digits are added by
/// range in [`SYMBOLIC_KEYS`].
const NAMED_SYMBOLIC_KEYS: &[(PhysicalKey, VimKey)] = &[
	(PhysicalKey::Escape, VimKey::Escape),
	(PhysicalKey::Enter, VimKey::Enter),
	(PhysicalKey::Backspace, VimKey::Back),
	(PhysicalKey::Tab, VimKey::Tab),
	(PhysicalKey::Delete, VimKey::Delete),
	(PhysicalKey::Insert, VimKey::Insert),
	(PhysicalKey::Home, VimKey::Home),
	(PhysicalKey::End, VimKey::End),
	(PhysicalKey::PageUp, VimKey::PageUp),
	(PhysicalKey::PageDown, VimKey::PageDown),
	(PhysicalKey::Left, VimKey::Left),
	(PhysicalKey::Up, VimKey::Up),
	(PhysicalKey::Right, VimKey::Right),
	(PhysicalKey::Down, VimKey::Down),
	(PhysicalKey::Help, VimKey::Help),
	(PhysicalKey::NumpadAdd, VimKey::KeypadPlus),
	(PhysicalKey::NumpadSubtract, VimKey::KeypadMinus),
	(PhysicalKey::NumpadMultiply, VimKey::KeypadMultiply),
	(PhysicalKey::NumpadDivide, VimKey::KeypadDivide),
	(PhysicalKey::NumpadDecimal, VimKey::KeypadDecimal),
	(PhysicalKey::NumpadEnter, VimKey::KeypadEnter),
];

/// Highest function key with a symbolic mapping.
pub const MAX_FUNCTION_KEY: u8 = 12;

/// Process-wide symbolic key table. Built on first use, never mutated.
static SYMBOLIC_KEYS: LazyLock<FxHashMap<PhysicalKey, VimKey>> = LazyLock::new(|| {
	let mut map: FxHashMap<PhysicalKey, VimKey> = NAMED_SYMBOLIC_KEYS.iter().copied().collect();
	for n in 1..=MAX_FUNCTION_KEY {
		map.insert(PhysicalKey::F(n), VimKey::F(n));
	}
	for d in 0..=9 {
		map.insert(PhysicalKey::Numpad(d), VimKey::Keypad(d));
	}
	map
});

/// Resolves a physical key to a symbolic [`KeyInput`] carrying `modifiers`.
///
/// Returns `None` for keys outside the symbolic table (letters, digits, punctuation,
/// modifier keys, ...). That is the normal outcome for character keys, which the host
/// delivers again as composed text.
pub fn resolve_key(key: PhysicalKey, modifiers: Modifiers) -> Option<KeyInput> {
	SYMBOLIC_KEYS
		.get(&key)
		.map(|&vim_key| KeyInput::symbolic(vim_key).with_modifiers(modifiers))
}

/// Resolves a literal character with `modifiers` passed through unchanged.
///
/// Never fails. Shift is kept even on characters the layout already shifted; whether to
/// ignore it is the consumer's call.
pub fn resolve_char(c: char, modifiers: Modifiers) -> KeyInput {
	KeyInput::char(c).with_modifiers(modifiers)
}

/// Iterates the symbolic key table in unspecified order.
pub fn symbolic_keys() -> impl Iterator<Item = (PhysicalKey, VimKey)> {
	SYMBOLIC_KEYS.iter().map(|(&key, &vim_key)| (key, vim_key))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn resolves_named_keys() {
		assert_eq!(
			resolve_key(PhysicalKey::Escape, Modifiers::NONE),
			Some(KeyInput::symbolic(VimKey::Escape))
		);
		assert_eq!(
			resolve_key(PhysicalKey::Left, Modifiers::SHIFT),
			Some(KeyInput::symbolic(VimKey::Left).with_modifiers(Modifiers::SHIFT))
		);
		assert_eq!(
			resolve_key(PhysicalKey::NumpadEnter, Modifiers::NONE).map(|k| k.key()),
			Some(VimKey::KeypadEnter)
		);
	}

	#[test]
	fn resolves_function_key_range() {
		assert_eq!(resolve_key(PhysicalKey::F(1), Modifiers::NONE).map(|k| k.key()), Some(VimKey::F(1)));
		assert_eq!(resolve_key(PhysicalKey::F(12), Modifiers::NONE).map(|k| k.key()), Some(VimKey::F(12)));
		assert_eq!(resolve_key(PhysicalKey::F(13), Modifiers::NONE), None);
	}

	#[test]
	fn resolves_numpad_digits() {
		let input = resolve_key(PhysicalKey::Numpad(4), Modifiers::NONE).unwrap();
		assert_eq!(input.key(), VimKey::Keypad(4));
		assert_eq!(input.char_value(), Some('4'));
	}

	#[test]
	fn character_and_modifier_keys_have_no_mapping() {
		for key in [
			PhysicalKey::Letter('A'),
			PhysicalKey::Digit(2),
			PhysicalKey::Space,
			PhysicalKey::Oem(186),
			PhysicalKey::Shift,
			PhysicalKey::Control,
			PhysicalKey::Alt,
			PhysicalKey::DeadCharProcessed,
			PhysicalKey::Unidentified,
		] {
			assert_eq!(resolve_key(key, Modifiers::CONTROL), None, "key {key}");
		}
	}

	#[test]
	fn char_form_passes_modifiers_through() {
		let input = resolve_char('A', Modifiers::SHIFT);
		assert_eq!(input.char_value(), Some('A'));
		assert_eq!(input.modifiers(), Modifiers::SHIFT);
		assert_eq!(resolve_char('@', Modifiers::ALTGR).modifiers(), Modifiers::ALTGR);
	}

	#[test]
	fn table_size() {
		assert_eq!(symbolic_keys().count(), NAMED_SYMBOLIC_KEYS.len() + MAX_FUNCTION_KEY as usize + 10);
	}
}
