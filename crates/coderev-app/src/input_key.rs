//! Terminal-independent key events.
//!
//! The TUI converts crossterm key events into [`InputKey`] at its boundary,
//! so the app crate (and its tests) never depend on crossterm.

/// A key press as the editor and key bindings see it
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    /// Printable character (already shifted)
    Char(char),
    /// Character with Ctrl held
    CharCtrl(char),

    Up,
    Down,
    Left,
    Right,
    Home,
    End,

    Enter,
    Esc,
    Tab,
    Backspace,
    Delete,

    /// Function key F1-F12
    F(u8),
}
