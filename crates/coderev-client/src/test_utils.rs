//! Test utilities for analysis service consumers
//!
//! Provides an in-process fake [`AnalysisService`] and a minimal HTTP mock
//! server for exercising [`HttpAnalysisClient`](crate::HttpAnalysisClient)
//! end to end without a real backend.

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

use coderev_core::prelude::*;
use coderev_core::AnalyzeRequest;

use crate::endpoint::{ServiceEndpoint, DEFAULT_ANALYZE_PATH};
use crate::service::AnalysisService;

// ─────────────────────────────────────────────────────────────────────────────
// StaticAnalysisService
// ─────────────────────────────────────────────────────────────────────────────

/// Canned outcome returned by [`StaticAnalysisService`]
#[derive(Debug, Clone)]
pub enum CannedOutcome {
    Respond(serde_json::Value),
    /// Fails with [`Error::Transport`] carrying this detail
    Fail(String),
}

/// Fake analysis backend returning the same outcome for every call.
#[derive(Debug)]
pub struct StaticAnalysisService {
    outcome: CannedOutcome,
    delay: Option<Duration>,
    calls: AtomicUsize,
    requests: Mutex<Vec<AnalyzeRequest>>,
}

impl StaticAnalysisService {
    pub fn responding(value: serde_json::Value) -> Self {
        Self::new(CannedOutcome::Respond(value))
    }

    pub fn failing(detail: impl Into<String>) -> Self {
        Self::new(CannedOutcome::Fail(detail.into()))
    }

    fn new(outcome: CannedOutcome) -> Self {
        Self {
            outcome,
            delay: None,
            calls: AtomicUsize::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Wait this long before answering
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Every request received so far, in arrival order
    pub fn requests(&self) -> Vec<AnalyzeRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

impl AnalysisService for StaticAnalysisService {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<serde_json::Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        match &self.outcome {
            CannedOutcome::Respond(value) => Ok(value.clone()),
            CannedOutcome::Fail(detail) => Err(Error::transport(detail.clone())),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// MockAnalysisServer
// ─────────────────────────────────────────────────────────────────────────────

/// One HTTP request as seen by [`MockAnalysisServer`]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// e.g. `POST /analyze HTTP/1.1`
    pub request_line: String,
    pub body: String,
}

/// Minimal HTTP/1.1 server answering every request with a fixed response.
///
/// The accept loop is aborted when the server is dropped.
pub struct MockAnalysisServer {
    addr: SocketAddr,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: JoinHandle<()>,
}

impl MockAnalysisServer {
    /// Serve `status` with `body` as `application/json`
    pub async fn start(status: u16, body: impl Into<String>) -> Self {
        Self::spawn(Some((status, body.into()))).await
    }

    /// Accept connections and read requests, but never answer
    pub async fn start_silent() -> Self {
        Self::spawn(None).await
    }

    async fn spawn(response: Option<(u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock analysis server");
        let addr = listener.local_addr().expect("mock server address");
        let requests = Arc::new(Mutex::new(Vec::new()));

        let recorded = requests.clone();
        let handle = tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let recorded = recorded.clone();
                let response = response.clone();
                tokio::spawn(async move {
                    serve_connection(stream, recorded, response).await;
                });
            }
        });

        Self {
            addr,
            requests,
            handle,
        }
    }

    /// Endpoint pointing at this server's `/analyze`
    pub fn endpoint(&self) -> ServiceEndpoint {
        ServiceEndpoint::new(format!("http://{}", self.addr), DEFAULT_ANALYZE_PATH)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

impl Drop for MockAnalysisServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn serve_connection(
    mut stream: TcpStream,
    recorded: Arc<Mutex<Vec<RecordedRequest>>>,
    response: Option<(u16, String)>,
) {
    let Some(request) = read_request(&mut stream).await else {
        return;
    };
    if let Ok(mut requests) = recorded.lock() {
        requests.push(request);
    }

    let Some((status, body)) = response else {
        // Hold the connection open until the client gives up
        let mut sink = [0u8; 64];
        while let Ok(n) = stream.read(&mut sink).await {
            if n == 0 {
                break;
            }
        }
        return;
    };

    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        reason_phrase(status),
        body.len()
    );
    let _ = stream.write_all(head.as_bytes()).await;
    let _ = stream.write_all(body.as_bytes()).await;
    let _ = stream.shutdown().await;
}

async fn read_request(stream: &mut TcpStream) -> Option<RecordedRequest> {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];

    let header_end = loop {
        if let Some(pos) = find_header_end(&buf) {
            break pos;
        }
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            return None;
        }
        buf.extend_from_slice(&chunk[..n]);
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    let body_start = header_end + 4;
    while buf.len() < body_start + content_length {
        let n = stream.read(&mut chunk).await.ok()?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let body_end = (body_start + content_length).min(buf.len());
    Some(RecordedRequest {
        request_line: head.lines().next().unwrap_or_default().to_string(),
        body: String::from_utf8_lossy(&buf[body_start..body_end]).to_string(),
    })
}

fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(4).position(|w| w == b"\r\n\r\n")
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        422 => "Unprocessable Entity",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}

/// Endpoint on a local port with nothing listening
pub async fn unreachable_endpoint() -> ServiceEndpoint {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind throwaway listener");
    let addr = listener.local_addr().expect("throwaway address");
    drop(listener);
    ServiceEndpoint::new(format!("http://{}", addr), DEFAULT_ANALYZE_PATH)
}
