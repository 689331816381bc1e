//! Analysis service location

use std::time::Duration;

use coderev_core::prelude::*;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_ANALYZE_PATH: &str = "/analyze";

/// Where analysis requests go, and how long to wait for them.
///
/// `timeout` is `None` by default: the client then relies entirely on the
/// network layer's own failure signaling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoint {
    pub base_url: String,
    pub analyze_path: String,
    pub timeout: Option<Duration>,
}

impl Default for ServiceEndpoint {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            analyze_path: DEFAULT_ANALYZE_PATH.to_string(),
            timeout: None,
        }
    }
}

impl ServiceEndpoint {
    pub fn new(base_url: impl Into<String>, analyze_path: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            analyze_path: analyze_path.into(),
            timeout: None,
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full analysis URL: base URL with the analysis path appended.
    ///
    /// Slashes between the two parts are normalized, so a base URL with a
    /// path prefix (`http://host/api/`) keeps that prefix.
    pub fn url(&self) -> Result<Url> {
        let base = self.base_url.trim_end_matches('/');
        let path = self.analyze_path.trim_start_matches('/');
        let joined = if path.is_empty() {
            base.to_string()
        } else {
            format!("{}/{}", base, path)
        };

        let url = Url::parse(&joined)
            .map_err(|e| Error::invalid_endpoint(joined.clone(), e.to_string()))?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(Error::invalid_endpoint(
                joined,
                format!("unsupported scheme '{}'", other),
            )),
        }
    }
}
