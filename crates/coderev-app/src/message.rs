//! Message types for the application (TEA pattern)

use coderev_core::DiagnosticsDocument;

use crate::input_key::InputKey;

/// Identifies one analysis request, for log correlation only.
///
/// Responses are never filtered by id: the last one to resolve wins.
pub type RequestId = u64;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates (spinner animation)
    Tick,

    /// Quit immediately (Ctrl+C, Esc, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Submission Messages
    // ─────────────────────────────────────────────────────────
    /// Send the current buffer to the analysis service
    Submit,

    /// The analysis service answered with a JSON document
    AnalysisSucceeded {
        request_id: RequestId,
        document: DiagnosticsDocument,
    },

    /// The request failed; `detail` is for the log, not the screen
    AnalysisFailed { request_id: RequestId, detail: String },

    // ─────────────────────────────────────────────────────────
    // Code Input Messages
    // ─────────────────────────────────────────────────────────
    InsertChar(char),
    /// Bracketed paste; inserted at the cursor as one edit
    Paste(String),
    InsertNewline,
    InsertTab,
    DeleteBackward,
    DeleteForward,
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    CursorHome,
    CursorEnd,
    /// Empty the buffer
    ClearInput,
    /// Replace the buffer (used by headless mode)
    SetText(String),
}
