//! Console input actions
//!
//! The console does not read platform keyboard messages. A platform adapter
//! classifies raw input into these actions (or lets a
//! [`KeyboardDispatcher`](crate::KeyboardDispatcher) do it) and hands them to
//! an [`InputReceiver`](crate::InputReceiver).

/// Non-character keys the console may care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialKey {
    /// Commits the pending input line.
    Enter,
    Escape,
    Tab,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Delete,
    /// Function key F1..F24
    Function(u8),
}

/// Classified keyboard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// A printable character was typed.
    CharacterTyped(char),
    /// A block of text was inserted at once (paste).
    TextInserted(String),
    /// A control character (backspace, ...) was typed.
    ControlCommand(char),
    /// A special key went down.
    SpecialKey(SpecialKey),
}
