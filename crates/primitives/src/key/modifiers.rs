//! Key modifier set (Shift, Control, Alt).

use bitflags::bitflags;

bitflags! {
	/// Key modifiers held when a key event was produced.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct Modifiers: u8 {
		/// Shift is held.
		const SHIFT = 0b001;
		/// Control is held.
		const CONTROL = 0b010;
		/// Alt is held.
		const ALT = 0b100;
	}
}

impl Modifiers {
	/// No modifiers pressed.
	pub const NONE: Self = Self::empty();

	/// Control and Alt together, the way hosts report AltGr.
	pub const ALTGR: Self = Self::CONTROL.union(Self::ALT);

	/// Returns true if both Control and Alt are held.
	///
	/// Hosts report a single AltGr press this way, so the combination cannot be told
	/// apart from a deliberate Control+Alt chord.
	pub fn is_altgr(self) -> bool {
		self.contains(Self::ALTGR)
	}

	/// Converts a keymap-parser modifier bit set.
	pub fn from_notation(bits: keyfold_keymap_parser::Modifiers) -> Self {
		use keyfold_keymap_parser::Modifier;

		let mut mods = Self::NONE;
		if bits & Modifier::Shift as u8 != 0 {
			mods |= Self::SHIFT;
		}
		if bits & Modifier::Ctrl as u8 != 0 {
			mods |= Self::CONTROL;
		}
		if bits & Modifier::Alt as u8 != 0 {
			mods |= Self::ALT;
		}
		mods
	}

	/// Converts to a keymap-parser modifier bit set.
	pub fn to_notation(self) -> keyfold_keymap_parser::Modifiers {
		use keyfold_keymap_parser::Modifier;

		let mut result: u8 = 0;
		if self.contains(Self::CONTROL) {
			result |= Modifier::Ctrl as u8;
		}
		if self.contains(Self::ALT) {
			result |= Modifier::Alt as u8;
		}
		if self.contains(Self::SHIFT) {
			result |= Modifier::Shift as u8;
		}
		result
	}
}
