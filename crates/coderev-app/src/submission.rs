//! Submission lifecycle state machine
//!
//! Exactly one [`SubmissionState`] holds at a time. Transitions are total:
//! every (state, event) pair produces a next state, so a late or duplicate
//! response can never leave the machine stuck.
//!
//! ```text
//!            TriggerSubmit            RequestSucceeded
//!   Idle ──────────────────▶ Loading ─────────────────▶ Succeeded(doc)
//!     ▲                         │  ▲                          │
//!     │                         │  └──── TriggerSubmit ───────┤
//!   (start)      RequestFailed  ▼                             │
//!                           Failed(msg) ◀── RequestFailed ────┘
//! ```
//!
//! Concurrent submissions are not coordinated: whichever response resolves
//! last determines the final state.

use coderev_core::DiagnosticsDocument;

/// Message shown to the user for every transport-class failure.
///
/// The underlying cause goes to the log, never to the screen.
pub const USER_FACING_ERROR: &str = "Error analyzing code. Please check your backend connection.";

/// Lifecycle of the most recent analysis request
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SubmissionState {
    /// No request yet, no prior result
    #[default]
    Idle,
    /// Request in flight
    Loading,
    Succeeded(DiagnosticsDocument),
    Failed(String),
}

/// Inputs to the state machine
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionEvent {
    TriggerSubmit,
    RequestSucceeded(DiagnosticsDocument),
    RequestFailed(String),
}

impl SubmissionState {
    /// Compute the next state.
    ///
    /// `TriggerSubmit` drops any previous result or error; the document of a
    /// `Succeeded` state is owned by that state alone and goes away with it.
    pub fn transition(self, event: SubmissionEvent) -> SubmissionState {
        match event {
            SubmissionEvent::TriggerSubmit => SubmissionState::Loading,
            SubmissionEvent::RequestSucceeded(document) => SubmissionState::Succeeded(document),
            SubmissionEvent::RequestFailed(message) => SubmissionState::Failed(message),
        }
    }

    /// Apply `event` in place
    pub fn apply(&mut self, event: SubmissionEvent) {
        let current = std::mem::take(self);
        *self = current.transition(event);
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, SubmissionState::Loading)
    }

    pub fn document(&self) -> Option<&DiagnosticsDocument> {
        match self {
            SubmissionState::Succeeded(document) => Some(document),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Short name for logs and the status line
    pub fn label(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Loading => "loading",
            SubmissionState::Succeeded(_) => "succeeded",
            SubmissionState::Failed(_) => "failed",
        }
    }
}
