//! Conversion between [`KeyInput`] and plain-text key notation.

use std::fmt;
use std::str::FromStr;

use keyfold_keymap_parser::{self as parser, Key as NotationKey, KEY_SEP, Modifier, Node, ParseError};
use thiserror::Error;

use super::{KeyInput, Modifiers, VimKey};

/// Errors produced when reading key notation.
#[derive(Debug, Error, PartialEq)]
pub enum NotationError {
	/// The text does not follow the key notation grammar.
	#[error(transparent)]
	Parse(#[from] ParseError),
	/// A key sequence contained no keys.
	#[error("empty key sequence")]
	EmptySequence,
}

impl KeyInput {
	/// Converts a parsed notation node.
	pub fn from_node(node: Node) -> Self {
		let input = match node.key {
			NotationKey::Char(c) => KeyInput::char(c),
			NotationKey::Space => KeyInput::char(' '),
			NotationKey::F(n) => KeyInput::symbolic(VimKey::F(n)),
			NotationKey::Esc => KeyInput::symbolic(VimKey::Escape),
			NotationKey::Enter => KeyInput::symbolic(VimKey::Enter),
			NotationKey::Backspace => KeyInput::symbolic(VimKey::Back),
			NotationKey::Tab => KeyInput::symbolic(VimKey::Tab),
			NotationKey::Delete => KeyInput::symbolic(VimKey::Delete),
			NotationKey::Insert => KeyInput::symbolic(VimKey::Insert),
			NotationKey::Home => KeyInput::symbolic(VimKey::Home),
			NotationKey::End => KeyInput::symbolic(VimKey::End),
			NotationKey::PageUp => KeyInput::symbolic(VimKey::PageUp),
			NotationKey::PageDown => KeyInput::symbolic(VimKey::PageDown),
			NotationKey::Left => KeyInput::symbolic(VimKey::Left),
			NotationKey::Up => KeyInput::symbolic(VimKey::Up),
			NotationKey::Right => KeyInput::symbolic(VimKey::Right),
			NotationKey::Down => KeyInput::symbolic(VimKey::Down),
			NotationKey::Help => KeyInput::symbolic(VimKey::Help),
			NotationKey::Keypad(d) => KeyInput::symbolic(VimKey::Keypad(d)),
			NotationKey::KeypadPlus => KeyInput::symbolic(VimKey::KeypadPlus),
			NotationKey::KeypadMinus => KeyInput::symbolic(VimKey::KeypadMinus),
			NotationKey::KeypadMultiply => KeyInput::symbolic(VimKey::KeypadMultiply),
			NotationKey::KeypadDivide => KeyInput::symbolic(VimKey::KeypadDivide),
			NotationKey::KeypadDecimal => KeyInput::symbolic(VimKey::KeypadDecimal),
			NotationKey::KeypadEnter => KeyInput::symbolic(VimKey::KeypadEnter),
		};
		input.with_modifiers(Modifiers::from_notation(node.modifiers))
	}

	/// Converts to a notation node.
	///
	/// Returns `None` for raw characters the grammar cannot spell (control characters and
	/// whitespace other than space).
	pub fn to_node(&self) -> Option<Node> {
		let key = match self.key() {
			VimKey::RawCharacter => match self.char_value()? {
				' ' => NotationKey::Space,
				c if c.is_whitespace() || c.is_control() => return None,
				c => NotationKey::Char(c),
			},
			VimKey::Escape => NotationKey::Esc,
			VimKey::Enter => NotationKey::Enter,
			VimKey::Back => NotationKey::Backspace,
			VimKey::Tab => NotationKey::Tab,
			VimKey::Delete => NotationKey::Delete,
			VimKey::Insert => NotationKey::Insert,
			VimKey::Home => NotationKey::Home,
			VimKey::End => NotationKey::End,
			VimKey::PageUp => NotationKey::PageUp,
			VimKey::PageDown => NotationKey::PageDown,
			VimKey::Left => NotationKey::Left,
			VimKey::Up => NotationKey::Up,
			VimKey::Right => NotationKey::Right,
			VimKey::Down => NotationKey::Down,
			VimKey::Help => NotationKey::Help,
			VimKey::F(n) => NotationKey::F(n),
			VimKey::Keypad(d) => NotationKey::Keypad(d),
			VimKey::KeypadPlus => NotationKey::KeypadPlus,
			VimKey::KeypadMinus => NotationKey::KeypadMinus,
			VimKey::KeypadMultiply => NotationKey::KeypadMultiply,
			VimKey::KeypadDivide => NotationKey::KeypadDivide,
			VimKey::KeypadDecimal => NotationKey::KeypadDecimal,
			VimKey::KeypadEnter => NotationKey::KeypadEnter,
		};
		Some(Node::new(self.modifiers().to_notation(), key))
	}

	/// Parses a whitespace-separated key sequence such as `"g ctrl-w esc"`.
	///
	/// # Errors
	///
	/// Returns [`NotationError::EmptySequence`] for blank input, or the parse error of the
	/// first malformed key.
	pub fn parse_seq(s: &str) -> Result<Vec<KeyInput>, NotationError> {
		let nodes = parser::parse_seq(s)?;
		if nodes.is_empty() {
			return Err(NotationError::EmptySequence);
		}
		Ok(nodes.into_iter().map(KeyInput::from_node).collect())
	}
}

impl FromStr for KeyInput {
	type Err = NotationError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(KeyInput::from_node(parser::parse(s)?))
	}
}

impl fmt::Display for KeyInput {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if let Some(node) = self.to_node() {
			return write!(f, "{node}");
		}

		// Unspellable raw character: keep the modifier prefix, print the code point.
		let mods = self.modifiers().to_notation();
		for modifier in Modifier::ALL {
			if mods & modifier as u8 != 0 {
				write!(f, "{modifier}{KEY_SEP}")?;
			}
		}
		match self.char_value() {
			Some(c) => write!(f, "U+{:04X}", u32::from(c)),
			None => write!(f, "{}", self.key()),
		}
	}
}
