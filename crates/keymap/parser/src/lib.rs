//! Plain-text key notation.
//!
//! Parses strings such as `"ctrl-alt-f1"`, `"esc"` or `"g g"` into [`Node`] values:
//! a modifier bit set paired with a [`Key`]. [`Node`] also renders back to the same
//! grammar through its `Display` impl.

mod node;
mod parser;

pub use node::{KEY_SEP, Key, Modifier, Modifiers, Node};
pub use parser::{ParseError, parse, parse_seq};
