//! Input filter: which key releases restart the suggestion cycle.

use crate::key_event::KeyEvent;

/// Returns true for content-changing keys: ASCII letters, ASCII digits,
/// numeric-keypad digits and space. Everything else is ignored.
pub fn should_trigger(key: &KeyEvent) -> bool {
    match *key {
        KeyEvent::Char(ch) => ch.is_ascii_alphanumeric() || ch == ' ',
        KeyEvent::NumPad(n) => n <= 9,
        KeyEvent::Space => true,
        _ => false,
    }
}

/// Same predicate over a raw virtual-key code.
pub fn should_trigger_code(code: u32) -> bool {
    should_trigger(&KeyEvent::from_code(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triggers_on_content_keys() {
        for ch in ('a'..='z').chain('A'..='Z').chain('0'..='9') {
            assert!(should_trigger(&KeyEvent::Char(ch)), "{ch:?} should trigger");
        }
        for n in 0..=9 {
            assert!(should_trigger(&KeyEvent::NumPad(n)));
        }
        assert!(should_trigger(&KeyEvent::Space));
    }

    #[test]
    fn ignores_navigation_and_control_keys() {
        let ignored = [
            KeyEvent::Backspace,
            KeyEvent::Delete,
            KeyEvent::Tab,
            KeyEvent::Enter,
            KeyEvent::Escape,
            KeyEvent::Left,
            KeyEvent::Right,
            KeyEvent::Up,
            KeyEvent::Down,
            KeyEvent::Char(','),
            KeyEvent::Char('-'),
            KeyEvent::Char('é'),
            KeyEvent::NumPad(10),
            KeyEvent::Other(0x70),
        ];
        for key in ignored {
            assert!(!should_trigger(&key), "{key:?} should not trigger");
        }
    }

    #[test]
    fn raw_code_ranges_match_the_filter() {
        for code in 0u32..=0xFF {
            let expected = (0x30..=0x39).contains(&code)
                || (0x41..=0x5A).contains(&code)
                || (0x60..=0x69).contains(&code)
                || code == 0x20;
            assert_eq!(should_trigger_code(code), expected, "code {code:#x}");
        }
    }
}
