//! Core key types: abstract key events, symbolic key identifiers and modifier sets.

/// Abstract key events and their notation.
pub mod key;

pub use key::{KeyInput, Modifiers, NotationError, VimKey};
