//! Action handlers: UpdateAction dispatch and background task spawning

use std::sync::Arc;

use coderev_client::AnalysisService;
use coderev_core::{AnalyzeRequest, DiagnosticsDocument};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::message::{Message, RequestId};
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action<S>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, service: Arc<S>)
where
    S: AnalysisService + Send + Sync + 'static,
{
    match action {
        UpdateAction::SubmitAnalysis {
            request_id,
            request,
        } => {
            spawn_analysis(request_id, request, msg_tx, service);
        }
    }
}

/// Run one analysis request and report its outcome on `msg_tx`
pub fn spawn_analysis<S>(
    request_id: RequestId,
    request: AnalyzeRequest,
    msg_tx: mpsc::Sender<Message>,
    service: Arc<S>,
) -> JoinHandle<()>
where
    S: AnalysisService + Send + Sync + 'static,
{
    tokio::spawn(async move {
        let message = run_analysis(service.as_ref(), request_id, &request).await;
        if msg_tx.send(message).await.is_err() {
            warn!(
                "Analysis request #{} finished after the event loop closed",
                request_id
            );
        }
    })
}

/// Await the service and turn its outcome into exactly one terminal message
pub async fn run_analysis<S>(service: &S, request_id: RequestId, request: &AnalyzeRequest) -> Message
where
    S: AnalysisService + Sync,
{
    match service.analyze(request).await {
        Ok(body) => {
            debug!("Analysis request #{} returned a JSON body", request_id);
            Message::AnalysisSucceeded {
                request_id,
                document: DiagnosticsDocument::from_value(body),
            }
        }
        Err(e) => Message::AnalysisFailed {
            request_id,
            detail: e.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coderev_client::test_utils::StaticAnalysisService;
    use serde_json::json;
    use std::time::Duration;

    #[tokio::test]
    async fn test_run_analysis_success() {
        let service = StaticAnalysisService::responding(json!({ "filename": "a.py" }));
        let request = AnalyzeRequest::submission("x = 1");

        let msg = run_analysis(&service, 7, &request).await;

        match msg {
            Message::AnalysisSucceeded {
                request_id,
                document,
            } => {
                assert_eq!(request_id, 7);
                assert_eq!(document.filename_or_default(), "a.py");
            }
            other => panic!("unexpected message: {:?}", other),
        }
        assert_eq!(service.requests(), vec![request]);
    }

    #[tokio::test]
    async fn test_run_analysis_failure_keeps_detail() {
        let service = StaticAnalysisService::failing("connection refused");
        let request = AnalyzeRequest::submission("");

        let msg = run_analysis(&service, 3, &request).await;

        match msg {
            Message::AnalysisFailed { request_id, detail } => {
                assert_eq!(request_id, 3);
                assert!(detail.contains("connection refused"));
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_handle_action_sends_one_message() {
        let service = Arc::new(
            StaticAnalysisService::responding(json!({})).with_delay(Duration::from_millis(10)),
        );
        let (tx, mut rx) = mpsc::channel(8);

        handle_action(
            UpdateAction::SubmitAnalysis {
                request_id: 1,
                request: AnalyzeRequest::submission("print(1)"),
            },
            tx,
            service.clone(),
        );

        let msg = tokio::time::timeout(Duration::from_secs(2), rx.recv())
            .await
            .expect("analysis task should answer")
            .expect("channel open");
        assert!(matches!(msg, Message::AnalysisSucceeded { request_id: 1, .. }));

        // Sender dropped by the finished task: nothing else arrives
        assert!(rx.recv().await.is_none());
        assert_eq!(service.call_count(), 1);
    }

    #[tokio::test]
    async fn test_closed_channel_does_not_panic() {
        let service = Arc::new(StaticAnalysisService::responding(json!({})));
        let (tx, rx) = mpsc::channel(1);
        drop(rx);

        let handle = spawn_analysis(1, AnalyzeRequest::submission(""), tx, service);
        handle.await.expect("task completes");
    }
}
