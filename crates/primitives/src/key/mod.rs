//! Abstract key events.
//!
//! * [`KeyInput`] — one logical keystroke as delivered to the editor core
//! * [`VimKey`] — symbolic key identity (`Escape`, `F1`, or a raw character)
//! * [`Modifiers`] — Shift/Control/Alt bit set

mod input;
mod modifiers;
mod notation;
#[cfg(test)]
mod tests;
mod vim_key;

pub use input::KeyInput;
pub use modifiers::Modifiers;
pub use notation::NotationError;
pub use vim_key::VimKey;
