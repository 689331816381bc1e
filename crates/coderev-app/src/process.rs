//! Message processing
//!
//! Drives the TEA update function until no follow-up message remains and
//! hands actions to [`handle_action`].

use std::sync::Arc;

use coderev_client::AnalysisService;
use tokio::sync::mpsc;

use crate::handler;
use crate::message::Message;
use crate::state::AppState;

use super::actions::handle_action;

/// Process a message through the TEA update function
pub fn process_message<S>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    service: &Arc<S>,
) where
    S: AnalysisService + Send + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), service.clone());
        }

        msg = result.message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_key::InputKey;
    use crate::submission::{SubmissionState, USER_FACING_ERROR};
    use coderev_client::test_utils::StaticAnalysisService;
    use serde_json::json;
    use std::time::Duration;

    async fn next_message(rx: &mut mpsc::Receiver<Message>) -> Message {
        tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("message within timeout")
            .expect("channel open")
    }

    #[tokio::test]
    async fn test_submit_key_runs_full_cycle() {
        let service = Arc::new(StaticAnalysisService::responding(json!({
            "filename": "submission.py",
            "score": { "score": 90 }
        })));
        let (tx, mut rx) = mpsc::channel(8);
        let mut state = AppState::new();

        process_message(&mut state, Message::Key(InputKey::CharCtrl('r')), &tx, &service);
        assert_eq!(state.submission, SubmissionState::Loading);

        let reply = next_message(&mut rx).await;
        process_message(&mut state, reply, &tx, &service);

        let doc = state.submission.document().expect("succeeded");
        assert_eq!(doc.score_display(), "90");
        assert!(state.last_completed_at.is_some());

        let sent = service.requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].filename, "submission.py");
        assert_eq!(sent[0].content, "print(\"Hello, world!\")");
    }

    #[tokio::test]
    async fn test_failure_shows_generic_message() {
        let service = Arc::new(StaticAnalysisService::failing("HTTP 500"));
        let (tx, mut rx) = mpsc::channel(8);
        let mut state = AppState::new();

        process_message(&mut state, Message::Submit, &tx, &service);
        let reply = next_message(&mut rx).await;
        process_message(&mut state, reply, &tx, &service);

        assert_eq!(
            state.submission,
            SubmissionState::Failed(USER_FACING_ERROR.to_string())
        );
    }

    #[tokio::test]
    async fn test_retry_after_failure_is_possible() {
        let failing = Arc::new(StaticAnalysisService::failing("down"));
        let (tx, mut rx) = mpsc::channel(8);
        let mut state = AppState::new();

        process_message(&mut state, Message::Submit, &tx, &failing);
        let reply = next_message(&mut rx).await;
        process_message(&mut state, reply, &tx, &failing);
        assert!(state.submission.error_message().is_some());

        // Submit control is enabled again
        process_message(&mut state, Message::Key(InputKey::F(5)), &tx, &failing);
        assert_eq!(state.submission, SubmissionState::Loading);
        let _ = next_message(&mut rx).await;
        assert_eq!(failing.call_count(), 2);
    }

    #[tokio::test]
    async fn test_submit_key_ignored_while_loading() {
        let service = Arc::new(
            StaticAnalysisService::responding(json!({})).with_delay(Duration::from_millis(50)),
        );
        let (tx, mut rx) = mpsc::channel(8);
        let mut state = AppState::new();

        process_message(&mut state, Message::Key(InputKey::CharCtrl('r')), &tx, &service);
        process_message(&mut state, Message::Key(InputKey::CharCtrl('r')), &tx, &service);

        let _ = next_message(&mut rx).await;
        assert_eq!(service.call_count(), 1);
    }
}
