//! End-to-end submission flow: TEA loop + real HTTP client + mock service

use std::sync::Arc;
use std::time::Duration;

use code_review::headless::analyze;
use coderev_app::config::Settings;
use coderev_app::message::Message;
use coderev_app::state::AppState;
use coderev_app::view::{IssuesSection, MetricsSection, ResultsBody};
use coderev_app::{SubmissionState, USER_FACING_ERROR};
use coderev_client::test_utils::{unreachable_endpoint, MockAnalysisServer};
use coderev_client::{AnalysisService, HttpAnalysisClient, ServiceEndpoint};
use coderev_core::{AnalyzeRequest, Error};

const FULL_RESPONSE: &str = r#"{
    "filename": "submission.py",
    "score": {"score": 87},
    "metrics": {"complexity": 4, "loc": 1},
    "issues": [{
        "lineno": 3,
        "title": "Unused variable",
        "severity": "warning",
        "snippet": "x = 1",
        "why": "x is never read",
        "fix": "remove the assignment"
    }]
}"#;

fn state_with_code(code: &str) -> AppState {
    let mut state = AppState::with_settings(Settings::default());
    state.code_input.set_text(code);
    state
}

fn client(endpoint: &ServiceEndpoint) -> Arc<HttpAnalysisClient> {
    Arc::new(HttpAnalysisClient::new(endpoint).expect("valid endpoint"))
}

#[tokio::test]
async fn test_successful_analysis_renders_report() {
    let server = MockAnalysisServer::start(200, FULL_RESPONSE).await;
    let service = client(&server.endpoint());
    let mut state = state_with_code("x = 1\nprint('hi')");

    let view = analyze(&mut state, &service).await.unwrap();

    let ResultsBody::Report(report) = &view.body else {
        panic!("expected report, got {:?}", view.body);
    };
    assert_eq!(report.heading, "Results for submission.py");
    assert_eq!(report.score_line, "Score: 87");
    assert_eq!(
        report.metrics,
        MetricsSection::Entries(vec!["complexity: 4".to_string(), "loc: 1".to_string()])
    );
    let IssuesSection::Cards(cards) = &report.issues else {
        panic!("expected issue cards");
    };
    assert_eq!(cards[0].header, "Line 3: Unused variable (warning)");

    // Exactly one POST with the fixed filename and the buffer verbatim
    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].request_line.starts_with("POST /analyze"));
    let body: serde_json::Value = serde_json::from_str(&requests[0].body).unwrap();
    assert_eq!(body["filename"], "submission.py");
    assert_eq!(body["content"], "x = 1\nprint('hi')");
}

#[tokio::test]
async fn test_server_error_becomes_generic_failure() {
    let server = MockAnalysisServer::start(500, r#"{"detail": "boom"}"#).await;
    let service = client(&server.endpoint());
    let mut state = state_with_code("print(1)");

    let view = analyze(&mut state, &service).await.unwrap();

    assert_eq!(
        state.submission,
        SubmissionState::Failed(USER_FACING_ERROR.to_string())
    );
    assert_eq!(view.error_banner.as_deref(), Some(USER_FACING_ERROR));
    assert_eq!(view.body, ResultsBody::Placeholder);
}

#[tokio::test]
async fn test_malformed_body_is_a_failure() {
    let server = MockAnalysisServer::start(200, "<html>not json</html>").await;
    let service = client(&server.endpoint());
    let mut state = state_with_code("print(1)");

    analyze(&mut state, &service).await.unwrap();

    assert_eq!(state.submission.error_message(), Some(USER_FACING_ERROR));
}

#[tokio::test]
async fn test_wrong_shape_is_not_a_failure() {
    let server = MockAnalysisServer::start(200, r#"{"issues": "not-an-array", "score": null}"#).await;
    let service = client(&server.endpoint());
    let mut state = state_with_code("print(1)");

    let view = analyze(&mut state, &service).await.unwrap();

    let ResultsBody::Report(report) = &view.body else {
        panic!("expected report");
    };
    assert_eq!(report.heading, "Results for Unknown File");
    assert_eq!(report.score_line, "Score: N/A");
    assert_eq!(report.issues, IssuesSection::Empty);
}

#[tokio::test]
async fn test_unreachable_service_fails_and_allows_retry() {
    let endpoint = unreachable_endpoint().await;
    let service = client(&endpoint);
    let mut state = state_with_code("print(1)");

    analyze(&mut state, &service).await.unwrap();
    assert_eq!(state.submission.error_message(), Some(USER_FACING_ERROR));

    // Retry goes through Loading again and resolves again
    analyze(&mut state, &service).await.unwrap();
    assert!(!state.submission.is_loading());
}

#[tokio::test]
async fn test_timeout_resolves_as_failure() {
    let server = MockAnalysisServer::start_silent().await;
    let endpoint = server
        .endpoint()
        .with_timeout(Some(Duration::from_millis(200)));
    let service = client(&endpoint);
    let mut state = state_with_code("print(1)");

    let outcome = tokio::time::timeout(Duration::from_secs(5), analyze(&mut state, &service))
        .await
        .expect("request should time out on its own");

    outcome.unwrap();
    assert_eq!(state.submission.error_message(), Some(USER_FACING_ERROR));
}

#[tokio::test]
async fn test_empty_and_control_character_input_is_forwarded() {
    for code in ["", "\u{1}\u{7}\t\r\n\u{1b}[0m"] {
        let server = MockAnalysisServer::start(200, "{}").await;
        let service = client(&server.endpoint());
        let mut state = state_with_code(code);

        analyze(&mut state, &service).await.unwrap();

        assert!(state.submission.document().is_some());
        let body: serde_json::Value = serde_json::from_str(&server.requests()[0].body).unwrap();
        assert_eq!(body["content"], code);
    }
}

#[tokio::test]
async fn test_typing_then_submitting_sends_edited_buffer() {
    let server = MockAnalysisServer::start(200, "{}").await;
    let service = client(&server.endpoint());
    let mut state = state_with_code("");

    let (tx, _rx) = tokio::sync::mpsc::channel(8);
    for msg in [
        Message::InsertChar('a'),
        Message::InsertChar('='),
        Message::InsertChar('1'),
    ] {
        coderev_app::process::process_message(&mut state, msg, &tx, &service);
    }

    analyze(&mut state, &service).await.unwrap();

    let body: serde_json::Value = serde_json::from_str(&server.requests()[0].body).unwrap();
    assert_eq!(body["content"], "a=1");
}

/// Service whose task dies before it can report
struct CrashingService;

impl AnalysisService for CrashingService {
    async fn analyze(&self, _request: &AnalyzeRequest) -> coderev_core::Result<serde_json::Value> {
        panic!("analysis task crashed");
    }
}

#[tokio::test]
async fn test_crashed_analysis_task_closes_channel() {
    let service = Arc::new(CrashingService);
    let mut state = state_with_code("x = 1");

    let outcome = tokio::time::timeout(Duration::from_secs(5), analyze(&mut state, &service))
        .await
        .expect("a dead analysis task must not hang the loop");

    assert!(matches!(outcome, Err(Error::ChannelClosed)));
    assert!(state.submission.is_loading());
}
