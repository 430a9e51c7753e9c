use proptest::prelude::*;

use super::*;

#[test]
fn modifier_set_operations() {
	let ctrl_alt = Modifiers::CONTROL | Modifiers::ALT;
	assert!(ctrl_alt.is_altgr());
	assert_eq!(ctrl_alt & Modifiers::CONTROL, Modifiers::CONTROL);
	assert!(!(Modifiers::CONTROL | Modifiers::SHIFT).is_altgr());
	assert!((ctrl_alt | Modifiers::SHIFT).is_altgr());
	assert!(Modifiers::NONE.is_empty());
	assert_eq!(Modifiers::default(), Modifiers::NONE);
}

#[test]
fn char_input_keeps_modifiers_as_given() {
	let input = KeyInput::char('A').with_modifiers(Modifiers::SHIFT);
	assert_eq!(input.char_value(), Some('A'));
	assert_eq!(input.key(), VimKey::RawCharacter);
	assert_eq!(input.modifiers(), Modifiers::SHIFT);
	assert!(input.is_char());
}

#[test]
fn control_chars_collide_with_symbolic_keys() {
	assert_eq!(KeyInput::char('\x1b'), KeyInput::symbolic(VimKey::Escape));
	assert_eq!(KeyInput::char('\r'), KeyInput::symbolic(VimKey::Enter));
	assert_eq!(KeyInput::char('\t'), KeyInput::symbolic(VimKey::Tab));
	assert_eq!(KeyInput::char('\x08'), KeyInput::symbolic(VimKey::Back));
	assert_ne!(KeyInput::char('5'), KeyInput::symbolic(VimKey::Keypad(5)));
}

#[test]
fn apply_modifiers_unions() {
	let input = KeyInput::symbolic(VimKey::Left)
		.with_modifiers(Modifiers::SHIFT)
		.apply_modifiers(Modifiers::CONTROL);
	assert_eq!(input.modifiers(), Modifiers::SHIFT | Modifiers::CONTROL);
}

#[test]
fn is_escape_requires_no_modifiers() {
	assert!(KeyInput::symbolic(VimKey::Escape).is_escape());
	assert!(!KeyInput::symbolic(VimKey::Escape).with_modifiers(Modifiers::SHIFT).is_escape());
}

#[test]
fn vim_key_display_names() {
	assert_eq!(VimKey::Escape.to_string(), "Escape");
	assert_eq!(VimKey::F(1).to_string(), "F1");
	assert_eq!(VimKey::RawCharacter.to_string(), "char");
	assert_eq!(VimKey::Keypad(3).to_string(), "Keypad3");
}

#[test]
fn parses_notation() {
	let input: KeyInput = "ctrl-alt-esc".parse().unwrap();
	assert_eq!(input, KeyInput::symbolic(VimKey::Escape).with_modifiers(Modifiers::ALTGR));

	let input: KeyInput = "shift-A".parse().unwrap();
	assert_eq!(input, KeyInput::char('A').with_modifiers(Modifiers::SHIFT));

	assert_eq!("space".parse::<KeyInput>().unwrap(), KeyInput::char(' '));
	assert_eq!("kp7".parse::<KeyInput>().unwrap(), KeyInput::symbolic(VimKey::Keypad(7)));
}

#[test]
fn notation_errors() {
	assert!(matches!("ctrl-".parse::<KeyInput>(), Err(NotationError::Parse(_))));
	assert_eq!(KeyInput::parse_seq("   "), Err(NotationError::EmptySequence));
}

#[test]
fn parses_sequences() {
	let seq = KeyInput::parse_seq("g ctrl-w enter").unwrap();
	assert_eq!(
		seq,
		vec![
			KeyInput::char('g'),
			KeyInput::char('w').with_modifiers(Modifiers::CONTROL),
			KeyInput::symbolic(VimKey::Enter),
		]
	);
}

#[test]
fn displays_notation() {
	assert_eq!(KeyInput::symbolic(VimKey::F(5)).with_modifiers(Modifiers::SHIFT).to_string(), "shift-f5");
	assert_eq!(KeyInput::char('@').with_modifiers(Modifiers::ALTGR).to_string(), "ctrl-alt-@");
	assert_eq!(KeyInput::char(' ').to_string(), "space");
	assert_eq!(KeyInput::char('\x01').with_modifiers(Modifiers::CONTROL).to_string(), "ctrl-U+0001");
}

fn key_input() -> impl Strategy<Value = KeyInput> {
	prop_oneof![
		any::<char>().prop_map(KeyInput::char),
		(1u8..=35).prop_map(|n| KeyInput::symbolic(VimKey::F(n))),
		(0u8..=9).prop_map(|d| KeyInput::symbolic(VimKey::Keypad(d))),
		prop::sample::select(vec![
			VimKey::Escape,
			VimKey::Enter,
			VimKey::Back,
			VimKey::Tab,
			VimKey::Delete,
			VimKey::Home,
			VimKey::PageDown,
			VimKey::Up,
			VimKey::Help,
			VimKey::KeypadDecimal,
			VimKey::KeypadEnter,
		])
		.prop_map(KeyInput::symbolic),
	]
}

proptest! {
	#[test]
	fn spellable_inputs_survive_notation(input in key_input(), bits in 0u8..8) {
		let input = input.with_modifiers(Modifiers::from_bits_truncate(bits));
		if input.to_node().is_some() {
			let reparsed: KeyInput = input.to_string().parse().unwrap();
			prop_assert_eq!(reparsed, input);
		}
	}
}
