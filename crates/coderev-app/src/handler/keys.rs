//! Key bindings

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::AppState;

/// Convert key events to messages
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Quit
        InputKey::CharCtrl('c') | InputKey::Esc => Some(Message::Quit),

        // Submit control is disabled while a request is in flight
        InputKey::CharCtrl('r') | InputKey::F(5) => {
            if state.submission.is_loading() {
                None
            } else {
                Some(Message::Submit)
            }
        }

        InputKey::CharCtrl('l') => Some(Message::ClearInput),

        // Editing
        InputKey::Char(c) => Some(Message::InsertChar(c)),
        InputKey::Enter => Some(Message::InsertNewline),
        InputKey::Tab => Some(Message::InsertTab),
        InputKey::Backspace => Some(Message::DeleteBackward),
        InputKey::Delete => Some(Message::DeleteForward),

        // Cursor
        InputKey::Left => Some(Message::CursorLeft),
        InputKey::Right => Some(Message::CursorRight),
        InputKey::Up => Some(Message::CursorUp),
        InputKey::Down => Some(Message::CursorDown),
        InputKey::Home => Some(Message::CursorHome),
        InputKey::End => Some(Message::CursorEnd),

        _ => None,
    }
}
