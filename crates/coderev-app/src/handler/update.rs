//! Main update function - handles state transitions (TEA pattern)

use chrono::Local;
use coderev_core::AnalyzeRequest;
use tracing::{debug, error, info};

use crate::message::Message;
use crate::state::{AppPhase, AppState};
use crate::submission::{SubmissionEvent, USER_FACING_ERROR};

use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            state.tick();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Submission Messages
        // ─────────────────────────────────────────────────────────
        Message::Submit => handle_submit(state),

        Message::AnalysisSucceeded {
            request_id,
            document,
        } => {
            info!(
                "Analysis request #{} succeeded: {} issue(s)",
                request_id,
                document.issues.len()
            );
            state
                .submission
                .apply(SubmissionEvent::RequestSucceeded(document));
            state.last_completed_at = Some(Local::now());
            UpdateResult::none()
        }

        Message::AnalysisFailed { request_id, detail } => {
            error!("Analysis request #{} failed: {}", request_id, detail);
            state.submission.apply(SubmissionEvent::RequestFailed(
                USER_FACING_ERROR.to_string(),
            ));
            state.last_completed_at = Some(Local::now());
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Code Input Messages
        // ─────────────────────────────────────────────────────────
        Message::InsertChar(c) => {
            state.code_input.insert_char(c);
            UpdateResult::none()
        }
        Message::Paste(text) => {
            // Terminals send pasted line breaks as CRLF or bare CR
            state
                .code_input
                .insert_str(&text.replace("\r\n", "\n").replace('\r', "\n"));
            UpdateResult::none()
        }
        Message::InsertNewline => {
            state.code_input.insert_newline();
            UpdateResult::none()
        }
        Message::InsertTab => {
            state.code_input.insert_tab();
            UpdateResult::none()
        }
        Message::DeleteBackward => {
            state.code_input.delete_backward();
            UpdateResult::none()
        }
        Message::DeleteForward => {
            state.code_input.delete_forward();
            UpdateResult::none()
        }
        Message::CursorLeft => {
            state.code_input.move_left();
            UpdateResult::none()
        }
        Message::CursorRight => {
            state.code_input.move_right();
            UpdateResult::none()
        }
        Message::CursorUp => {
            state.code_input.move_up();
            UpdateResult::none()
        }
        Message::CursorDown => {
            state.code_input.move_down();
            UpdateResult::none()
        }
        Message::CursorHome => {
            state.code_input.move_home();
            UpdateResult::none()
        }
        Message::CursorEnd => {
            state.code_input.move_end();
            UpdateResult::none()
        }
        Message::ClearInput => {
            state.code_input.clear();
            UpdateResult::none()
        }
        Message::SetText(text) => {
            state.code_input.set_text(text);
            UpdateResult::none()
        }
    }
}

/// Move to Loading and hand the current buffer to the event loop.
///
/// A submit while already Loading is still honored; whichever response
/// resolves last decides the final state.
fn handle_submit(state: &mut AppState) -> UpdateResult {
    if state.submission.is_loading() {
        debug!("Submitting while a request is still in flight");
    }

    state.submission.apply(SubmissionEvent::TriggerSubmit);
    state.animation_frame = 0;

    let request_id = state.next_request_id();
    let request = AnalyzeRequest::new(
        state.settings.service.filename.clone(),
        state.code_input.current_text(),
    );

    info!(
        "Submitting analysis request #{} ({} bytes)",
        request_id,
        request.content.len()
    );

    UpdateResult::action(UpdateAction::SubmitAnalysis {
        request_id,
        request,
    })
}
