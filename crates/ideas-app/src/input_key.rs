//! Terminal-independent key events.
//!
//! The TUI converts crossterm key events into `InputKey` at its boundary so
//! that key dispatch in `handler::keys` can be tested without a terminal.

/// A key press, independent of the terminal library
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character, including space
    Char(char),
    /// Character with Ctrl held (Ctrl+C, Ctrl+U, ...)
    CharCtrl(char),

    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,

    Enter,
    Esc,
    Tab,
    BackTab,
    Backspace,
    Delete,
}

impl InputKey {
    /// Space bar, the "new idea" shortcut outside the input field
    pub const SPACE: InputKey = InputKey::Char(' ');
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_key_equality() {
        assert_eq!(InputKey::Char('a'), InputKey::Char('a'));
        assert_ne!(InputKey::Char('a'), InputKey::Char('b'));
        assert_ne!(InputKey::CharCtrl('c'), InputKey::Char('c'));
    }

    #[test]
    fn test_space_constant() {
        assert_eq!(InputKey::SPACE, InputKey::Char(' '));
    }
}
