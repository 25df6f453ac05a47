//! Key codes and their classification into mask events
//!
//! UI layers report keys as DOM-style numeric key codes. Classification is a
//! closed range check on the code, never a general character-class test, so
//! punctuation, letters and function keys can never pass as digits.

use std::fmt;
use std::str::FromStr;

use crate::mask::{Caret, EventKind, MaskEvent};

const BACKSPACE: u32 = 8;
const TAB: u32 = 9;
const ENTER: u32 = 13;
const ESCAPE: u32 = 27;
const SPACE: u32 = 32;
const END: u32 = 35;
const HOME: u32 = 36;
const LEFT: u32 = 37;
const UP: u32 = 38;
const RIGHT: u32 = 39;
const DOWN: u32 = 40;
const DELETE: u32 = 46;
const DIGIT_0: u32 = 48;
const DIGIT_9: u32 = 57;
const LETTER_A: u32 = 65;
const LETTER_Z: u32 = 90;
const NUMPAD_0: u32 = 96;
const NUMPAD_9: u32 = 105;

/// A key the mask engine distinguishes
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// Main-row digit key (value 0-9)
    Digit(u8),
    /// Numeric keypad digit key (value 0-9)
    Numpad(u8),
    Backspace,
    Delete,
    Left,
    Right,
    /// Any other key, by raw code
    Other(u32),
}

impl KeyCode {
    /// Map a raw key code. Total: every code maps to exactly one variant.
    pub fn from_key_code(code: u32) -> Self {
        match code {
            DIGIT_0..=DIGIT_9 => KeyCode::Digit((code - DIGIT_0) as u8),
            NUMPAD_0..=NUMPAD_9 => KeyCode::Numpad((code - NUMPAD_0) as u8),
            BACKSPACE => KeyCode::Backspace,
            DELETE => KeyCode::Delete,
            LEFT => KeyCode::Left,
            RIGHT => KeyCode::Right,
            other => KeyCode::Other(other),
        }
    }

    /// Raw key code for this key
    pub fn key_code(self) -> u32 {
        match self {
            KeyCode::Digit(d) => DIGIT_0 + u32::from(d),
            KeyCode::Numpad(d) => NUMPAD_0 + u32::from(d),
            KeyCode::Backspace => BACKSPACE,
            KeyCode::Delete => DELETE,
            KeyCode::Left => LEFT,
            KeyCode::Right => RIGHT,
            KeyCode::Other(code) => code,
        }
    }

    pub fn kind(self) -> EventKind {
        match self {
            KeyCode::Digit(_) | KeyCode::Numpad(_) => EventKind::Digit,
            KeyCode::Backspace | KeyCode::Delete => EventKind::Destructive,
            KeyCode::Left | KeyCode::Right => EventKind::Navigate,
            KeyCode::Other(_) => EventKind::Other,
        }
    }

    /// The digit character typed by this key, if any
    pub fn digit(self) -> Option<char> {
        match self {
            KeyCode::Digit(d) | KeyCode::Numpad(d) => char::from_digit(u32::from(d), 10),
            _ => None,
        }
    }

    /// Turn the key into a session event.
    ///
    /// `native_caret` is the selection the control reports once the key has
    /// been handled natively; only arrow keys use it.
    pub fn to_event(self, native_caret: Caret) -> MaskEvent {
        match self.kind() {
            EventKind::Digit => self.digit().map_or(MaskEvent::Other, MaskEvent::Digit),
            EventKind::Destructive => MaskEvent::Destructive,
            EventKind::Navigate => MaskEvent::Navigate(native_caret),
            EventKind::Other => MaskEvent::Other,
        }
    }
}

impl MaskEvent {
    /// Build the event for a raw key code
    pub fn from_key(code: u32, native_caret: Caret) -> Self {
        KeyCode::from_key_code(code).to_event(native_caret)
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyCode::Digit(d) => write!(f, "{}", d),
            KeyCode::Numpad(d) => write!(f, "Num{}", d),
            KeyCode::Backspace => write!(f, "Backspace"),
            KeyCode::Delete => write!(f, "Delete"),
            KeyCode::Left => write!(f, "←"),
            KeyCode::Right => write!(f, "→"),
            KeyCode::Other(TAB) => write!(f, "Tab"),
            KeyCode::Other(ENTER) => write!(f, "Enter"),
            KeyCode::Other(ESCAPE) => write!(f, "Escape"),
            KeyCode::Other(SPACE) => write!(f, "Space"),
            KeyCode::Other(HOME) => write!(f, "Home"),
            KeyCode::Other(END) => write!(f, "End"),
            KeyCode::Other(UP) => write!(f, "↑"),
            KeyCode::Other(DOWN) => write!(f, "↓"),
            KeyCode::Other(code @ LETTER_A..=LETTER_Z) => {
                write!(f, "{}", char::from_u32(*code).unwrap_or('?'))
            }
            KeyCode::Other(code) => write!(f, "Key{}", code),
        }
    }
}

/// Error for key names that cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidKey(pub String);

impl fmt::Display for InvalidKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid key: {}", self.0)
    }
}

impl std::error::Error for InvalidKey {}

impl FromStr for KeyCode {
    type Err = InvalidKey;

    /// Parse a key name such as `"5"`, `"num5"`, `"backspace"` or `"a"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();

        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(d) = c.to_digit(10) {
                return Ok(KeyCode::Digit(d as u8));
            }
            if c.is_ascii_lowercase() {
                return Ok(KeyCode::Other(u32::from(c.to_ascii_uppercase())));
            }
        }

        if let Some(rest) = name
            .strip_prefix("numpad")
            .or_else(|| name.strip_prefix("num"))
        {
            return match rest.parse::<u8>() {
                Ok(d) if d <= 9 => Ok(KeyCode::Numpad(d)),
                _ => Err(InvalidKey(s.to_string())),
            };
        }

        if let Some(code) = name.strip_prefix("key") {
            return code
                .parse::<u32>()
                .map(KeyCode::from_key_code)
                .map_err(|_| InvalidKey(s.to_string()));
        }

        let key = match name.as_str() {
            "backspace" | "bs" => KeyCode::Backspace,
            "delete" | "del" => KeyCode::Delete,
            "left" | "arrowleft" => KeyCode::Left,
            "right" | "arrowright" => KeyCode::Right,
            "tab" => KeyCode::Other(TAB),
            "enter" | "return" => KeyCode::Other(ENTER),
            "escape" | "esc" => KeyCode::Other(ESCAPE),
            "space" => KeyCode::Other(SPACE),
            "home" => KeyCode::Other(HOME),
            "end" => KeyCode::Other(END),
            "up" | "arrowup" => KeyCode::Other(UP),
            "down" | "arrowdown" => KeyCode::Other(DOWN),
            _ => return Err(InvalidKey(s.to_string())),
        };
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_row_and_numpad_digits() {
        for d in 0..=9u8 {
            let main = KeyCode::from_key_code(48 + u32::from(d));
            let pad = KeyCode::from_key_code(96 + u32::from(d));
            assert_eq!(main, KeyCode::Digit(d));
            assert_eq!(pad, KeyCode::Numpad(d));
            assert_eq!(main.digit(), pad.digit());
            assert_eq!(main.kind(), EventKind::Digit);
        }
    }

    #[test]
    fn test_classification_is_total_and_closed() {
        for code in 0..=512u32 {
            let key = KeyCode::from_key_code(code);
            assert_eq!(key.key_code(), code);

            let is_digit = (48..=57).contains(&code) || (96..=105).contains(&code);
            assert_eq!(key.kind() == EventKind::Digit, is_digit, "code {}", code);
            assert_eq!(key.digit().is_some(), is_digit);
        }
    }

    #[test]
    fn test_destructive_and_navigate_codes() {
        assert_eq!(KeyCode::from_key_code(8).kind(), EventKind::Destructive);
        assert_eq!(KeyCode::from_key_code(46).kind(), EventKind::Destructive);
        assert_eq!(KeyCode::from_key_code(37).kind(), EventKind::Navigate);
        assert_eq!(KeyCode::from_key_code(39).kind(), EventKind::Navigate);
        // Up/down are not caret moves in a single-line mask
        assert_eq!(KeyCode::from_key_code(38).kind(), EventKind::Other);
        assert_eq!(KeyCode::from_key_code(189).kind(), EventKind::Other);
    }

    #[test]
    fn test_to_event() {
        let caret = Caret::new(2, 5, 15);
        assert_eq!(MaskEvent::from_key(101, caret), MaskEvent::Digit('5'));
        assert_eq!(MaskEvent::from_key(8, caret), MaskEvent::Destructive);
        assert_eq!(MaskEvent::from_key(39, caret), MaskEvent::Navigate(caret));
        assert_eq!(MaskEvent::from_key(65, caret), MaskEvent::Other);
    }

    #[test]
    fn test_parse_key_names() {
        assert_eq!("7".parse::<KeyCode>(), Ok(KeyCode::Digit(7)));
        assert_eq!("num3".parse::<KeyCode>(), Ok(KeyCode::Numpad(3)));
        assert_eq!("Numpad0".parse::<KeyCode>(), Ok(KeyCode::Numpad(0)));
        assert_eq!("Backspace".parse::<KeyCode>(), Ok(KeyCode::Backspace));
        assert_eq!("del".parse::<KeyCode>(), Ok(KeyCode::Delete));
        assert_eq!("left".parse::<KeyCode>(), Ok(KeyCode::Left));
        assert_eq!("a".parse::<KeyCode>(), Ok(KeyCode::Other(65)));
        assert_eq!("key57".parse::<KeyCode>(), Ok(KeyCode::Digit(9)));
        assert!("num12".parse::<KeyCode>().is_err());
        assert!("hyper".parse::<KeyCode>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(KeyCode::Digit(4).to_string(), "4");
        assert_eq!(KeyCode::Numpad(4).to_string(), "Num4");
        assert_eq!(KeyCode::Other(65).to_string(), "A");
        assert_eq!(KeyCode::Other(9).to_string(), "Tab");
        assert_eq!(KeyCode::Other(188).to_string(), "Key188");
    }
}
