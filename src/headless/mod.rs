//! Headless mode - analyze one file without the TUI
//!
//! Submits a file through the same TEA update loop the TUI uses and prints
//! the rendered results. With `--json` the output is NDJSON, one event per
//! line:
//!
//! ```json
//! {"event":"analysis_started","filename":"submission.py","bytes":22,"endpoint":"http://localhost:8000/analyze","timestamp":1704700001000}
//! {"event":"analysis_succeeded","filename":"submission.py","score":"87","issues":1,"report":["Results for submission.py","..."],"timestamp":1704700002000}
//! ```

pub mod runner;

use std::io::{self, Write};

use chrono::Utc;
use serde::Serialize;
use tracing::error;

pub use runner::{analyze, run_headless};

/// How headless results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// The results panel as plain text
    #[default]
    Text,
    /// NDJSON events
    Json,
}

/// Events emitted in headless JSON mode
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HeadlessEvent {
    /// Request sent to the analysis service
    AnalysisStarted {
        filename: String,
        bytes: usize,
        endpoint: String,
        timestamp: i64,
    },

    /// Service answered with a diagnostics document
    AnalysisSucceeded {
        filename: String,
        score: String,
        issues: usize,
        /// Rendered results panel, line by line
        report: Vec<String>,
        timestamp: i64,
    },

    /// Request failed; `message` is the user-facing text
    AnalysisFailed { message: String, timestamp: i64 },
}

impl HeadlessEvent {
    /// Emit this event to stdout as JSON
    pub fn emit(&self) {
        let mut stdout = io::stdout().lock();
        if let Err(e) = self.write_to(&mut stdout) {
            error!("Failed to write headless event to stdout: {}", e);
        }
    }

    /// Write this event as one NDJSON line and flush
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let json = serde_json::to_string(self).map_err(io::Error::other)?;
        writeln!(out, "{}", json)?;
        out.flush()
    }

    /// Get current timestamp in milliseconds
    fn now() -> i64 {
        Utc::now().timestamp_millis()
    }

    // ─────────────────────────────────────────────────────────
    // Convenience constructors
    // ─────────────────────────────────────────────────────────

    pub fn analysis_started(filename: &str, bytes: usize, endpoint: &str) -> Self {
        Self::AnalysisStarted {
            filename: filename.to_string(),
            bytes,
            endpoint: endpoint.to_string(),
            timestamp: Self::now(),
        }
    }

    pub fn analysis_succeeded(filename: &str, score: String, issues: usize, report: Vec<String>) -> Self {
        Self::AnalysisSucceeded {
            filename: filename.to_string(),
            score,
            issues,
            report,
            timestamp: Self::now(),
        }
    }

    pub fn analysis_failed(message: &str) -> Self {
        Self::AnalysisFailed {
            message: message.to_string(),
            timestamp: Self::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_json(event: &HeadlessEvent) -> serde_json::Value {
        let mut buf = Vec::new();
        event.write_to(&mut buf).unwrap();
        let line = String::from_utf8(buf).unwrap();
        assert!(line.ends_with('\n'));
        serde_json::from_str(line.trim_end()).unwrap()
    }

    #[test]
    fn test_started_event_shape() {
        let value = to_json(&HeadlessEvent::analysis_started(
            "submission.py",
            22,
            "http://localhost:8000/analyze",
        ));

        assert_eq!(value["event"], "analysis_started");
        assert_eq!(value["filename"], "submission.py");
        assert_eq!(value["bytes"], 22);
        assert!(value["timestamp"].is_i64());
    }

    #[test]
    fn test_succeeded_event_carries_report() {
        let value = to_json(&HeadlessEvent::analysis_succeeded(
            "a.py",
            "N/A".to_string(),
            0,
            vec!["Results for a.py".to_string()],
        ));

        assert_eq!(value["event"], "analysis_succeeded");
        assert_eq!(value["score"], "N/A");
        assert_eq!(value["report"][0], "Results for a.py");
    }

    #[test]
    fn test_failed_event_shape() {
        let value = to_json(&HeadlessEvent::analysis_failed("boom"));
        assert_eq!(value["event"], "analysis_failed");
        assert_eq!(value["message"], "boom");
    }
}
