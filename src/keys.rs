// src/keys.rs

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Represents a keyboard modifier.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct Modifiers: u8 {
        const SHIFT = 1 << 0;
        const CONTROL = 1 << 1;
        const ALT = 1 << 2; // Also known as Option on macOS
        const SUPER = 1 << 3; // Also known as Windows key or Command key
        const CAPS_LOCK = 1 << 4;
        const NUM_LOCK = 1 << 5;
    }
}

/// Physical scan codes, used as indices into the 256-entry keyboard tables.
///
/// The numbering follows the USB HID usage tables, so values carried by the
/// backend can be stored without translation.
pub mod scancode {
    pub const RETURN: u8 = 40;
    pub const ESCAPE: u8 = 41;
    pub const BACKSPACE: u8 = 42;
    pub const HOME: u8 = 74;
    pub const END: u8 = 77;
    pub const DELETE: u8 = 76;
    pub const RIGHT: u8 = 79;
    pub const LEFT: u8 = 80;
    pub const KEYPAD_ENTER: u8 = 88;
}

/// Represents a logical key symbol (the meaning of a key after layout
/// mapping), as opposed to a physical scan code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum KeySymbol {
    /// A key producing a character under the current layout.
    Char(char),

    // Function keys
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,

    // Modifier keys (when pressed on their own)
    Shift,
    Control,
    Alt,
    Super,
    CapsLock,
    NumLock,

    // Navigation keys
    Left,
    Right,
    Up,
    Down,
    PageUp,
    PageDown,
    Home,
    End,
    Insert,
    Delete,

    // Other common keys
    Enter,
    KeypadEnter,
    Backspace,
    Tab,
    Escape,
    Pause,

    /// Unidentified key.
    #[default]
    Unknown,
}

impl KeySymbol {
    /// Returns true if the key symbol represents a modifier key.
    pub fn is_modifier(&self) -> bool {
        matches!(
            self,
            KeySymbol::Shift
                | KeySymbol::Control
                | KeySymbol::Alt
                | KeySymbol::Super
                | KeySymbol::CapsLock
                | KeySymbol::NumLock
        )
    }

    /// Maps the symbol to the engine's legacy one-byte keycode space.
    ///
    /// Letters are uppercased because the engine's shortcut tables predate
    /// layout-aware input and index by uppercase ASCII. Keys without a
    /// one-byte representation map to 0.
    pub fn legacy_keycode(self) -> u8 {
        match self {
            KeySymbol::Char(c) if c.is_ascii() => c.to_ascii_uppercase() as u8,
            KeySymbol::Enter | KeySymbol::KeypadEnter => b'\r',
            KeySymbol::Backspace => 0x08,
            KeySymbol::Tab => b'\t',
            KeySymbol::Escape => 0x1b,
            _ => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_map_to_uppercase_legacy_keycodes() {
        assert_eq!(KeySymbol::Char('a').legacy_keycode(), b'A');
        assert_eq!(KeySymbol::Char('Z').legacy_keycode(), b'Z');
        assert_eq!(KeySymbol::Char('3').legacy_keycode(), b'3');
    }

    #[test]
    fn non_ascii_and_special_keys_have_no_legacy_keycode() {
        assert_eq!(KeySymbol::Char('é').legacy_keycode(), 0);
        assert_eq!(KeySymbol::F5.legacy_keycode(), 0);
        assert_eq!(KeySymbol::Unknown.legacy_keycode(), 0);
    }

    #[test]
    fn enter_variants_share_a_keycode() {
        assert_eq!(
            KeySymbol::Enter.legacy_keycode(),
            KeySymbol::KeypadEnter.legacy_keycode()
        );
    }
}
