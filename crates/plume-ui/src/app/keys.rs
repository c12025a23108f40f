//! Translation from iced key events to keymap presses.

use iced::keyboard::{self, key::Named};
use plume_core::{Key, KeyPress, Modifiers};

/// Converts an iced key press. Keys the keymap cannot express yield `None`.
pub fn to_key_press(key: &keyboard::Key, modifiers: keyboard::Modifiers) -> Option<KeyPress> {
    let key = match key {
        keyboard::Key::Character(c) => Key::parse(c.as_str())?,
        keyboard::Key::Named(Named::Enter) => Key::Enter,
        keyboard::Key::Named(Named::Tab) => Key::Tab,
        keyboard::Key::Named(Named::Escape) => Key::Escape,
        keyboard::Key::Named(named) => Key::F(function_number(*named)?),
        keyboard::Key::Unidentified => return None,
    };

    let modifiers = Modifiers {
        ctrl: modifiers.control(),
        alt: modifiers.alt(),
        shift: modifiers.shift(),
        meta: modifiers.logo(),
    };
    Some(KeyPress::new(key, modifiers))
}

fn function_number(named: Named) -> Option<u8> {
    let n = match named {
        Named::F1 => 1,
        Named::F2 => 2,
        Named::F3 => 3,
        Named::F4 => 4,
        Named::F5 => 5,
        Named::F6 => 6,
        Named::F7 => 7,
        Named::F8 => 8,
        Named::F9 => 9,
        Named::F10 => 10,
        Named::F11 => 11,
        Named::F12 => 12,
        _ => return None,
    };
    Some(n)
}
