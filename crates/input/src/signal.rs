//! Host keyboard signals.
//!
//! Both signal types are immutable snapshots taken by the host when the event fires;
//! the engine never reads live keyboard state.

use std::fmt;
use std::str::FromStr;

use keyfold_primitives::Modifiers;
use thiserror::Error;

/// Physical key identity as reported by the host toolkit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhysicalKey {
	/// Letter key `A`..`Z`, stored uppercase.
	Letter(char),
	/// Top-row digit key 0-9.
	Digit(u8),
	/// Function key, numbered from 1.
	F(u8),
	Escape,
	Enter,
	Backspace,
	Tab,
	Space,
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
	/// Numpad digit 0-9.
	Numpad(u8),
	NumpadAdd,
	NumpadSubtract,
	NumpadMultiply,
	NumpadDivide,
	NumpadDecimal,
	NumpadEnter,
	Shift,
	Control,
	Alt,
	Super,
	CapsLock,
	NumLock,
	/// Layout-dependent punctuation key, identified by the host's virtual key code.
	Oem(u16),
	/// Pseudo-key the host reports when a dead-key composition has completed.
	DeadCharProcessed,
	/// Key the host could not identify.
	Unidentified,
}

/// Named keys shared by `Display` and `FromStr`.
const NAMED_KEYS: &[(&str, PhysicalKey)] = &[
	("escape", PhysicalKey::Escape),
	("enter", PhysicalKey::Enter),
	("backspace", PhysicalKey::Backspace),
	("tab", PhysicalKey::Tab),
	("space", PhysicalKey::Space),
	("delete", PhysicalKey::Delete),
	("insert", PhysicalKey::Insert),
	("home", PhysicalKey::Home),
	("end", PhysicalKey::End),
	("pageup", PhysicalKey::PageUp),
	("pagedown", PhysicalKey::PageDown),
	("left", PhysicalKey::Left),
	("up", PhysicalKey::Up),
	("right", PhysicalKey::Right),
	("down", PhysicalKey::Down),
	("help", PhysicalKey::Help),
	("numpad-add", PhysicalKey::NumpadAdd),
	("numpad-subtract", PhysicalKey::NumpadSubtract),
	("numpad-multiply", PhysicalKey::NumpadMultiply),
	("numpad-divide", PhysicalKey::NumpadDivide),
	("numpad-decimal", PhysicalKey::NumpadDecimal),
	("numpad-enter", PhysicalKey::NumpadEnter),
	("shift", PhysicalKey::Shift),
	("control", PhysicalKey::Control),
	("alt", PhysicalKey::Alt),
	("super", PhysicalKey::Super),
	("capslock", PhysicalKey::CapsLock),
	("numlock", PhysicalKey::NumLock),
	("dead-char-processed", PhysicalKey::DeadCharProcessed),
	("unidentified", PhysicalKey::Unidentified),
];

/// Error returned when a physical key name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown physical key `{0}`")]
pub struct UnknownKeyError(pub String);

impl FromStr for PhysicalKey {
	type Err = UnknownKeyError;

	/// Parses names such as `escape`, `a`, `d2`, `f5`, `numpad3` or `oem-186`.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let lower = s.to_ascii_lowercase();
		if let Some(&(_, key)) = NAMED_KEYS.iter().find(|(name, _)| *name == lower) {
			return Ok(key);
		}

		let unknown = || UnknownKeyError(s.to_string());
		let mut chars = lower.chars();
		match (chars.next(), chars.next()) {
			(Some(c), None) if c.is_ascii_alphabetic() => return Ok(PhysicalKey::Letter(c.to_ascii_uppercase())),
			(Some(c), None) if c.is_ascii_digit() => return Ok(PhysicalKey::Digit(c as u8 - b'0')),
			_ => {}
		}

		if let Some(rest) = lower.strip_prefix("numpad") {
			return match rest.parse::<u8>() {
				Ok(d) if d <= 9 && rest.len() == 1 => Ok(PhysicalKey::Numpad(d)),
				_ => Err(unknown()),
			};
		}
		if let Some(rest) = lower.strip_prefix("oem-") {
			return rest.parse::<u16>().map(PhysicalKey::Oem).map_err(|_| unknown());
		}
		if let Some(rest) = lower.strip_prefix('d')
			&& let Ok(d) = rest.parse::<u8>()
			&& d <= 9
			&& rest.len() == 1
		{
			return Ok(PhysicalKey::Digit(d));
		}
		if let Some(rest) = lower.strip_prefix('f') {
			return match rest.parse::<u8>() {
				Ok(n) if (1..=24).contains(&n) => Ok(PhysicalKey::F(n)),
				_ => Err(unknown()),
			};
		}

		Err(unknown())
	}
}

impl fmt::Display for PhysicalKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			PhysicalKey::Letter(c) => write!(f, "{}", c.to_ascii_lowercase()),
			PhysicalKey::Digit(d) => write!(f, "d{d}"),
			PhysicalKey::F(n) => write!(f, "f{n}"),
			PhysicalKey::Numpad(d) => write!(f, "numpad{d}"),
			PhysicalKey::Oem(code) => write!(f, "oem-{code}"),
			named => match NAMED_KEYS.iter().find(|(_, key)| key == named) {
				Some((name, _)) => f.write_str(name),
				None => write!(f, "{named:?}"),
			},
		}
	}
}

/// A raw key-down event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhysicalKeySignal {
	/// Key that went down.
	pub key: PhysicalKey,
	/// Modifiers held at delivery time.
	pub modifiers: Modifiers,
	/// Host classified the key as a dead key.
	pub dead_key: bool,
}

impl PhysicalKeySignal {
	/// Creates a signal for an ordinary key.
	pub fn new(key: PhysicalKey, modifiers: Modifiers) -> Self {
		Self {
			key,
			modifiers,
			dead_key: false,
		}
	}

	/// Creates a signal for a key the host reports as a dead key.
	pub fn dead(key: PhysicalKey, modifiers: Modifiers) -> Self {
		Self {
			key,
			modifiers,
			dead_key: true,
		}
	}

	/// Returns true if the signal belongs to a dead-key sequence, whose result will arrive
	/// as composed text.
	pub fn is_dead_key_class(&self) -> bool {
		self.dead_key || self.key == PhysicalKey::DeadCharProcessed
	}
}

/// A composed-text event.
///
/// `text` is normally a single character; longer strings only appear when a composition
/// fails and the host replays its pieces (e.g. the same dead key pressed twice).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositionSignal<'a> {
	/// Composed text, possibly empty.
	pub text: &'a str,
	/// Modifiers held at delivery time.
	pub modifiers: Modifiers,
}

impl<'a> CompositionSignal<'a> {
	/// Creates a composed-text signal.
	pub fn new(text: &'a str, modifiers: Modifiers) -> Self {
		Self { text, modifiers }
	}
}
