//! Key events observed on the text field's key-release signal.
//!
//! Hosts usually report platform virtual-key codes. `KeyEvent::from_code`
//! turns those into a small enum the filter and the engine can match on.

/// Virtual-key code constants used by `KeyEvent::from_code`.
pub mod codes {
    pub const BACKSPACE: u32 = 0x08;
    pub const TAB: u32 = 0x09;
    pub const ENTER: u32 = 0x0D;
    pub const ESCAPE: u32 = 0x1B;
    pub const SPACE: u32 = 0x20;
    pub const LEFT: u32 = 0x25;
    pub const UP: u32 = 0x26;
    pub const RIGHT: u32 = 0x27;
    pub const DOWN: u32 = 0x28;
    pub const DELETE: u32 = 0x2E;
    pub const DIGIT_0: u32 = 0x30;
    pub const DIGIT_9: u32 = 0x39;
    pub const LETTER_A: u32 = 0x41;
    pub const LETTER_Z: u32 = 0x5A;
    pub const NUMPAD_0: u32 = 0x60;
    pub const NUMPAD_9: u32 = 0x69;
}

/// A single key-release event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    /// Character key (letters, digits, punctuation)
    Char(char),
    /// Numeric keypad digit (0-9)
    NumPad(u8),
    /// Space bar
    Space,
    /// Backspace key
    Backspace,
    /// Delete key
    Delete,
    /// Tab key
    Tab,
    /// Enter/Return key
    Enter,
    /// Escape key
    Escape,
    /// Left arrow key
    Left,
    /// Right arrow key
    Right,
    /// Up arrow key
    Up,
    /// Down arrow key
    Down,
    /// Any other key, carrying its raw code
    Other(u32),
}

impl KeyEvent {
    /// Decode a platform virtual-key code.
    ///
    /// Letter codes decode to uppercase characters, the way virtual keys
    /// report them regardless of shift state.
    pub fn from_code(code: u32) -> Self {
        match code {
            codes::DIGIT_0..=codes::DIGIT_9 | codes::LETTER_A..=codes::LETTER_Z => {
                char::from_u32(code).map_or(KeyEvent::Other(code), KeyEvent::Char)
            }
            codes::NUMPAD_0..=codes::NUMPAD_9 => KeyEvent::NumPad((code - codes::NUMPAD_0) as u8),
            codes::SPACE => KeyEvent::Space,
            codes::BACKSPACE => KeyEvent::Backspace,
            codes::TAB => KeyEvent::Tab,
            codes::ENTER => KeyEvent::Enter,
            codes::ESCAPE => KeyEvent::Escape,
            codes::LEFT => KeyEvent::Left,
            codes::UP => KeyEvent::Up,
            codes::RIGHT => KeyEvent::Right,
            codes::DOWN => KeyEvent::Down,
            codes::DELETE => KeyEvent::Delete,
            other => KeyEvent::Other(other),
        }
    }

    /// Virtual-key code for this event, if it has one.
    ///
    /// Lowercase letters report the code of their uppercase key. Characters
    /// without a dedicated key code return `None`.
    pub fn code(&self) -> Option<u32> {
        match *self {
            KeyEvent::Char(ch) if ch.is_ascii_digit() => Some(ch as u32),
            KeyEvent::Char(ch) if ch.is_ascii_alphabetic() => Some(ch.to_ascii_uppercase() as u32),
            KeyEvent::Char(' ') => Some(codes::SPACE),
            KeyEvent::Char(_) => None,
            KeyEvent::NumPad(n) if n <= 9 => Some(codes::NUMPAD_0 + u32::from(n)),
            KeyEvent::NumPad(_) => None,
            KeyEvent::Space => Some(codes::SPACE),
            KeyEvent::Backspace => Some(codes::BACKSPACE),
            KeyEvent::Delete => Some(codes::DELETE),
            KeyEvent::Tab => Some(codes::TAB),
            KeyEvent::Enter => Some(codes::ENTER),
            KeyEvent::Escape => Some(codes::ESCAPE),
            KeyEvent::Left => Some(codes::LEFT),
            KeyEvent::Right => Some(codes::RIGHT),
            KeyEvent::Up => Some(codes::UP),
            KeyEvent::Down => Some(codes::DOWN),
            KeyEvent::Other(code) => Some(code),
        }
    }
}

impl From<char> for KeyEvent {
    fn from(ch: char) -> Self {
        match ch {
            ' ' => KeyEvent::Space,
            '\n' | '\r' => KeyEvent::Enter,
            '\t' => KeyEvent::Tab,
            other => KeyEvent::Char(other),
        }
    }
}
