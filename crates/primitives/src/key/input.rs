//! The abstract key event delivered to the editor core.

use super::{Modifiers, VimKey};

/// One logical keystroke: an optional literal character, a symbolic identity and the
/// modifiers held.
///
/// Equality is by value. The same keystroke produced through the key-down channel and
/// through the text channel compares equal, e.g. a composed `"\x1b"` equals
/// [`VimKey::Escape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyInput {
	ch: Option<char>,
	key: VimKey,
	modifiers: Modifiers,
}

impl KeyInput {
	/// Creates an unmodified key input for a literal character.
	///
	/// Control characters with a symbolic identity (`\x1b`, `\r`, `\t`, `\x08`) become that
	/// symbolic key.
	pub fn char(c: char) -> Self {
		let key = VimKey::for_control_char(c).unwrap_or(VimKey::RawCharacter);
		Self {
			ch: Some(c),
			key,
			modifiers: Modifiers::NONE,
		}
	}

	/// Creates an unmodified key input for a symbolic key.
	///
	/// [`VimKey::RawCharacter`] has no character to carry here; build those with
	/// [`KeyInput::char`].
	pub fn symbolic(key: VimKey) -> Self {
		Self {
			ch: key.literal_char(),
			key,
			modifiers: Modifiers::NONE,
		}
	}

	/// Returns a copy with `modifiers` replacing the current set.
	pub fn with_modifiers(self, modifiers: Modifiers) -> Self {
		Self { modifiers, ..self }
	}

	/// Returns a copy with `modifiers` added to the current set.
	pub fn apply_modifiers(self, modifiers: Modifiers) -> Self {
		Self {
			modifiers: self.modifiers | modifiers,
			..self
		}
	}

	/// Literal character, if the key has one.
	pub fn char_value(&self) -> Option<char> {
		self.ch
	}

	/// Symbolic identity.
	pub fn key(&self) -> VimKey {
		self.key
	}

	/// Modifiers held.
	pub fn modifiers(&self) -> Modifiers {
		self.modifiers
	}

	/// Returns true if this is a raw character input.
	pub fn is_char(&self) -> bool {
		self.key.is_raw_character()
	}

	/// Returns true if this is the unmodified Escape key.
	pub fn is_escape(&self) -> bool {
		self.key == VimKey::Escape && self.modifiers.is_empty()
	}
}

impl From<char> for KeyInput {
	fn from(c: char) -> Self {
		Self::char(c)
	}
}

impl From<VimKey> for KeyInput {
	fn from(key: VimKey) -> Self {
		Self::symbolic(key)
	}
}
