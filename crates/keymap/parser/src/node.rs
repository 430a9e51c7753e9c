//! Parsed key notation values.

use std::fmt;
use std::str::FromStr;

/// Separator between modifiers and the key (`ctrl-a`).
pub const KEY_SEP: char = '-';

/// Modifier bit set. Bits are the discriminants of [`Modifier`].
pub type Modifiers = u8;

/// A single modifier as written in key notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Modifier {
	/// `shift`
	Shift = 0b001,
	/// `ctrl` (also accepted as `control`)
	Ctrl = 0b010,
	/// `alt`
	Alt = 0b100,
}

impl Modifier {
	/// Rendering order used by [`Node`]'s `Display`.
	pub const ALL: [Modifier; 3] = [Modifier::Ctrl, Modifier::Alt, Modifier::Shift];

	/// Canonical notation name.
	pub fn name(self) -> &'static str {
		match self {
			Modifier::Shift => "shift",
			Modifier::Ctrl => "ctrl",
			Modifier::Alt => "alt",
		}
	}
}

impl FromStr for Modifier {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"shift" => Ok(Modifier::Shift),
			"ctrl" | "control" => Ok(Modifier::Ctrl),
			"alt" => Ok(Modifier::Alt),
			_ => Err(()),
		}
	}
}

impl fmt::Display for Modifier {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Key identifier as written in key notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
	/// A single literal character.
	Char(char),
	/// Function key `f1`..`f35`.
	F(u8),
	Esc,
	Enter,
	Backspace,
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
	Space,
	/// Keypad digit `kp0`..`kp9`.
	Keypad(u8),
	KeypadPlus,
	KeypadMinus,
	KeypadMultiply,
	KeypadDivide,
	KeypadDecimal,
	KeypadEnter,
}

impl FromStr for Key {
	type Err = ();

	/// Parses a named key. Single characters and function keys are handled by the parser.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let key = match s {
			"esc" | "escape" => Key::Esc,
			"enter" | "ret" | "return" => Key::Enter,
			"backspace" | "bs" => Key::Backspace,
			"tab" => Key::Tab,
			"del" | "delete" => Key::Delete,
			"insert" | "ins" => Key::Insert,
			"home" => Key::Home,
			"end" => Key::End,
			"pageup" | "pgup" => Key::PageUp,
			"pagedown" | "pgdn" => Key::PageDown,
			"left" => Key::Left,
			"up" => Key::Up,
			"right" => Key::Right,
			"down" => Key::Down,
			"help" => Key::Help,
			"space" => Key::Space,
			"kpplus" => Key::KeypadPlus,
			"kpminus" => Key::KeypadMinus,
			"kpmul" => Key::KeypadMultiply,
			"kpdiv" => Key::KeypadDivide,
			"kpdot" => Key::KeypadDecimal,
			"kpenter" => Key::KeypadEnter,
			_ => {
				let digit = s.strip_prefix("kp").and_then(|d| d.parse::<u8>().ok());
				match digit {
					Some(d) if d <= 9 && s.len() == 3 => Key::Keypad(d),
					_ => return Err(()),
				}
			}
		};
		Ok(key)
	}
}

impl fmt::Display for Key {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Key::Char(c) => return write!(f, "{c}"),
			Key::F(n) => return write!(f, "f{n}"),
			Key::Keypad(d) => return write!(f, "kp{d}"),
			Key::Esc => "esc",
			Key::Enter => "enter",
			Key::Backspace => "backspace",
			Key::Tab => "tab",
			Key::Delete => "del",
			Key::Insert => "insert",
			Key::Home => "home",
			Key::End => "end",
			Key::PageUp => "pageup",
			Key::PageDown => "pagedown",
			Key::Left => "left",
			Key::Up => "up",
			Key::Right => "right",
			Key::Down => "down",
			Key::Help => "help",
			Key::Space => "space",
			Key::KeypadPlus => "kpplus",
			Key::KeypadMinus => "kpminus",
			Key::KeypadMultiply => "kpmul",
			Key::KeypadDivide => "kpdiv",
			Key::KeypadDecimal => "kpdot",
			Key::KeypadEnter => "kpenter",
		};
		f.write_str(name)
	}
}

/// One key press in notation form: modifiers plus a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Node {
	/// Bit set of [`Modifier`] discriminants.
	pub modifiers: Modifiers,
	/// The key itself.
	pub key: Key,
}

impl Node {
	/// Creates a node from a modifier bit set and a key.
	pub fn new(modifiers: Modifiers, key: Key) -> Self {
		Self { modifiers, key }
	}

	/// Returns true if `modifier` is part of this node.
	pub fn has(&self, modifier: Modifier) -> bool {
		self.modifiers & modifier as u8 != 0
	}
}

impl From<Key> for Node {
	fn from(key: Key) -> Self {
		Self::new(0, key)
	}
}

impl fmt::Display for Node {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for modifier in Modifier::ALL {
			if self.has(modifier) {
				write!(f, "{modifier}{KEY_SEP}")?;
			}
		}
		write!(f, "{}", self.key)
	}
}
