//! Symbolic key identities.

use std::fmt;

/// Symbolic identity of an abstract key event.
///
/// Keys without a direct character representation get their own variant; every other
/// key event is a [`VimKey::RawCharacter`] carrying its literal character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VimKey {
	/// A literal character produced by the host's text pipeline.
	RawCharacter,
	Escape,
	Enter,
	Back,
	Tab,
	Delete,
	Insert,
	Home,
	End,
	PageUp,
	PageDown,
	Left,
	Up,
	Right,
	Down,
	Help,
	/// Function key, numbered from 1.
	F(u8),
	/// Keypad digit 0-9.
	Keypad(u8),
	KeypadPlus,
	KeypadMinus,
	KeypadMultiply,
	KeypadDivide,
	KeypadDecimal,
	KeypadEnter,
}

impl VimKey {
	/// Character a symbolic key carries alongside its identity, if any.
	pub fn literal_char(self) -> Option<char> {
		match self {
			VimKey::Escape => Some('\x1b'),
			VimKey::Enter | VimKey::KeypadEnter => Some('\r'),
			VimKey::Back => Some('\x08'),
			VimKey::Tab => Some('\t'),
			VimKey::Keypad(d) => char::from_digit(u32::from(d), 10),
			VimKey::KeypadPlus => Some('+'),
			VimKey::KeypadMinus => Some('-'),
			VimKey::KeypadMultiply => Some('*'),
			VimKey::KeypadDivide => Some('/'),
			VimKey::KeypadDecimal => Some('.'),
			_ => None,
		}
	}

	/// Symbolic key whose canonical character is `c`.
	///
	/// The character channel uses this so a control character arriving as text collides
	/// with the same key arriving on the key-down channel.
	pub fn for_control_char(c: char) -> Option<VimKey> {
		match c {
			'\x1b' => Some(VimKey::Escape),
			'\r' => Some(VimKey::Enter),
			'\x08' => Some(VimKey::Back),
			'\t' => Some(VimKey::Tab),
			_ => None,
		}
	}

	/// Returns true for [`VimKey::RawCharacter`].
	pub fn is_raw_character(self) -> bool {
		matches!(self, VimKey::RawCharacter)
	}
}

impl fmt::Display for VimKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			VimKey::RawCharacter => f.write_str("char"),
			VimKey::F(n) => write!(f, "F{n}"),
			VimKey::Keypad(d) => write!(f, "Keypad{d}"),
			other => fmt::Debug::fmt(other, f),
		}
	}
}
