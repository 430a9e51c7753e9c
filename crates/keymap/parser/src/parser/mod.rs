//! # Parser
//!
//! Parses plain-text key notation into structured [`Node`] values. Supports single
//! presses such as `"ctrl-alt-f1"` and whitespace-separated sequences such as `"g g"`.
//!
//! ## Supported Syntax
//!
//! ```text
//! node      = modifiers* key
//! modifiers = modifier "-"
//! modifier  = "ctrl" | "control" | "alt" | "shift"
//! key       = fn-key | named-key | char
//! fn-key    = "f" digit digit?
//! named-key = "esc" | "enter" | "del" | "kp0" | "kpplus" | ...
//! char      = any single non-whitespace character
//! ```

use std::str::FromStr;

use crate::node::{KEY_SEP, Key, Modifier, Node};


/// Function pointer type for parser combinators.
type ParserFn<T> = fn(&mut Parser) -> Result<Option<T>, ParseError>;

/// Represents an error that occurred during parsing.
#[derive(Debug, PartialEq, Clone)]
pub struct ParseError {
	/// Human-readable description of the parse error.
	pub message: String,
	/// Byte offset in the input where the error occurred.
	pub position: usize,
}

impl std::fmt::Display for ParseError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "Parse error at position {}: {}", self.position, self.message)
	}
}

impl std::error::Error for ParseError {}

/// Recursive descent state over the remaining input.
struct Parser<'a> {
	input: &'a str,
	/// Byte offset of `input` within the original string.
	position: usize,
}

impl<'a> Parser<'a> {
	fn new(input: &'a str) -> Self {
		Self { input, position: 0 }
	}

	fn peek(&self) -> Option<char> {
		self.input.chars().next()
	}

	fn peek_at(&self, n: usize) -> Option<char> {
		self.input.chars().nth(n)
	}

	/// Consumes and returns the next character, advancing the parser.
	fn next(&mut self) -> Option<char> {
		let ch = self.peek()?;
		self.position += ch.len_utf8();
		self.input = &self.input[ch.len_utf8()..];
		Some(ch)
	}

	/// Consumes the next character if it matches the expected one.
	///
	/// # Errors
	///
	/// Returns a [`ParseError`] if the character doesn't match or if input is exhausted.
	fn take(&mut self, expected: char) -> Result<(), ParseError> {
		match self.next() {
			Some(ch) if ch == expected => Ok(()),
			Some(ch) => Err(ParseError {
				message: format!("expected '{expected}', found '{ch}'"),
				position: self.position - ch.len_utf8(),
			}),
			None => Err(ParseError {
				message: format!("expected '{expected}', found end of input"),
				position: self.position,
			}),
		}
	}

	/// Runs `f`, restoring the parser state if it fails or declines.
	fn try_parse<T, F>(&mut self, f: F) -> Result<Option<T>, ParseError>
	where
		F: FnOnce(&mut Parser<'a>) -> Result<Option<T>, ParseError>,
	{
		let snapshot = (self.input, self.position);
		match f(self) {
			Ok(Some(val)) => Ok(Some(val)),
			Ok(None) | Err(_) => {
				self.input = snapshot.0;
				self.position = snapshot.1;
				Ok(None)
			}
		}
	}

	fn take_while<F>(&mut self, predicate: F) -> String
	where
		F: Fn(char) -> bool,
	{
		let mut result = String::new();
		while let Some(ch) = self.peek() {
			if !predicate(ch) {
				break;
			}
			result.push(ch);
			self.next();
		}
		result
	}

	/// Tries multiple parsers in sequence, returning the result of the first successful one.
	fn alt<T>(&mut self, parsers: &[ParserFn<T>]) -> Result<Option<T>, ParseError> {
		for p in parsers {
			if let Some(value) = p(self)? {
				return Ok(Some(value));
			}
		}
		Ok(None)
	}

	fn error(&self, message: String) -> ParseError {
		ParseError {
			message,
			position: self.position,
		}
	}
}

/// Parses a single key expression into a [`Node`].
///
/// Accepts strings like `"ctrl-b"`, `"esc"`, `"kp5"` or `"f1"`.
///
/// # Errors
///
/// Returns a [`ParseError`] if the input does not match the expected grammar.
///
/// # Examples
///
/// ```
/// use keyfold_keymap_parser::{parse, Key, Modifier, Node};
///
/// let node = parse("ctrl-a").unwrap();
/// assert_eq!(node, Node::new(Modifier::Ctrl as u8, Key::Char('a')));
/// ```
pub fn parse(s: &str) -> Result<Node, ParseError> {
	let mut parser = Parser::new(s);
	let node = parse_node(&mut parser)?;

	if let Some(ch) = parser.peek() {
		return Err(parser.error(format!("expect end of input, found: {ch}")));
	}

	Ok(node)
}

/// Grammar: `node = modifiers* key`
fn parse_node(parser: &mut Parser) -> Result<Node, ParseError> {
	let mut modifiers = 0u8;

	for _ in 0..Modifier::ALL.len() {
		match try_parse_modifier(parser)? {
			Some(modifier) => modifiers |= modifier as u8,
			None => break,
		}
	}

	let key = parse_key(parser)?;
	Ok(Node::new(modifiers, key))
}

/// Attempts to parse a single modifier followed by a `-`.
fn try_parse_modifier(parser: &mut Parser) -> Result<Option<Modifier>, ParseError> {
	parser.try_parse(|p| {
		let name = p.take_while(|ch| ch.is_ascii_alphabetic());
		let Ok(modifier) = name.parse::<Modifier>() else {
			return Ok(None);
		};

		p.take(KEY_SEP)?;

		Ok(Some(modifier))
	})
}

fn parse_key(parser: &mut Parser) -> Result<Key, ParseError> {
	match parser.alt(&[try_parse_fn_key, try_parse_named_key, try_parse_char])? {
		Some(key) => Ok(key),
		None => Err(parser.error("expected a valid key".to_string())),
	}
}

/// Attempts to parse a function key (`"f1"` to `"f35"`).
///
/// Only activates when the input starts with `f` followed by a digit. Once activated,
/// the digits must form a valid function key number or an error is returned.
fn try_parse_fn_key(parser: &mut Parser) -> Result<Option<Key>, ParseError> {
	if parser.peek() != Some('f') || !matches!(parser.peek_at(1), Some(ch) if ch.is_ascii_digit()) {
		return Ok(None);
	}

	parser.take('f')?;
	let num = parser.take_while(|ch| ch.is_ascii_digit());

	match num.parse::<u8>() {
		Ok(n) if (1..=35).contains(&n) => Ok(Some(Key::F(n))),
		_ => Err(parser.error("invalid function key number (must be 1-35)".to_string())),
	}
}

/// Attempts to parse a named key such as `"del"`, `"kpenter"` or `"pageup"`.
fn try_parse_named_key(parser: &mut Parser) -> Result<Option<Key>, ParseError> {
	parser.try_parse(|p| {
		let name = p.take_while(|ch| ch.is_ascii_alphanumeric());
		if name.len() < 2 {
			return Ok(None);
		}

		Ok(name.parse::<Key>().ok())
	})
}

/// Attempts to parse a single literal character.
fn try_parse_char(parser: &mut Parser) -> Result<Option<Key>, ParseError> {
	match parser.peek() {
		Some(ch) if !ch.is_whitespace() => {
			parser.next();
			Ok(Some(Key::Char(ch)))
		}
		_ => Ok(None),
	}
}

/// Parses a whitespace-separated sequence of key expressions.
///
/// # Errors
///
/// Returns a [`ParseError`] if any segment fails to parse.
///
/// # Examples
///
/// ```
/// use keyfold_keymap_parser::{parse_seq, Key, Node};
///
/// let seq = parse_seq("a b").unwrap();
/// assert_eq!(seq, vec![Node::from(Key::Char('a')), Node::from(Key::Char('b'))]);
/// ```
pub fn parse_seq(s: &str) -> Result<Vec<Node>, ParseError> {
	str::split_whitespace(s).map(parse).collect()
}

impl FromStr for Node {
	type Err = ParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse(s)
	}
}
