//! Crossterm key events to console keyboard input.

use game_console::{BACKSPACE, SpecialKey};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press means for the demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// A character message, control characters included.
    Char(char),
    /// A non-character key.
    Special(SpecialKey),
    /// Leave the demo.
    Quit,
}

/// Translate a key press the way a window's character/key-down messages
/// would arrive.
pub fn map_key(key: KeyEvent) -> Option<KeyInput> {
    let input = match key.code {
        KeyCode::Esc => KeyInput::Quit,
        KeyCode::Enter => KeyInput::Special(SpecialKey::Enter),
        KeyCode::Backspace => KeyInput::Char(BACKSPACE),
        KeyCode::Tab => KeyInput::Char('\t'),
        KeyCode::Up => KeyInput::Special(SpecialKey::Up),
        KeyCode::Down => KeyInput::Special(SpecialKey::Down),
        KeyCode::Left => KeyInput::Special(SpecialKey::Left),
        KeyCode::Right => KeyInput::Special(SpecialKey::Right),
        KeyCode::Home => KeyInput::Special(SpecialKey::Home),
        KeyCode::End => KeyInput::Special(SpecialKey::End),
        KeyCode::Delete => KeyInput::Special(SpecialKey::Delete),
        KeyCode::F(n) => KeyInput::Special(SpecialKey::Function(n)),
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            // Ctrl+A..Ctrl+Z map to U+0001..U+001A, Ctrl+V is paste
            let lower = c.to_ascii_lowercase();
            if !lower.is_ascii_lowercase() {
                return None;
            }
            KeyInput::Char(char::from(lower as u8 - b'a' + 1))
        }
        KeyCode::Char(c) => KeyInput::Char(c),
        _ => return None,
    };
    Some(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_console::PASTE;
    use pretty_assertions::assert_eq;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Option<KeyInput> {
        map_key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_printable_and_control() {
        assert_eq!(
            press(KeyCode::Char('a'), KeyModifiers::NONE),
            Some(KeyInput::Char('a'))
        );
        assert_eq!(
            press(KeyCode::Char('A'), KeyModifiers::SHIFT),
            Some(KeyInput::Char('A'))
        );
        assert_eq!(
            press(KeyCode::Backspace, KeyModifiers::NONE),
            Some(KeyInput::Char(BACKSPACE))
        );
        assert_eq!(
            press(KeyCode::Char('c'), KeyModifiers::CONTROL),
            Some(KeyInput::Char('\u{3}'))
        );
        assert_eq!(press(KeyCode::Char('1'), KeyModifiers::CONTROL), None);
    }

    #[test]
    fn test_ctrl_v_is_paste() {
        assert_eq!(
            press(KeyCode::Char('v'), KeyModifiers::CONTROL),
            Some(KeyInput::Char(PASTE))
        );
    }

    #[test]
    fn test_special_keys() {
        assert_eq!(
            press(KeyCode::Enter, KeyModifiers::NONE),
            Some(KeyInput::Special(SpecialKey::Enter))
        );
        assert_eq!(
            press(KeyCode::F(5), KeyModifiers::NONE),
            Some(KeyInput::Special(SpecialKey::Function(5)))
        );
        assert_eq!(press(KeyCode::Esc, KeyModifiers::NONE), Some(KeyInput::Quit));
        assert_eq!(press(KeyCode::Insert, KeyModifiers::NONE), None);
    }
}
