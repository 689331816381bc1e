//! Configuration types for Code Review
//!
//! Defines:
//! - `Settings` - Application settings (.coderev/config.toml)
//! - `ServiceSettings` - Where and how to reach the analysis service
//! - `ConfigOverrides` - Values supplied on the command line or environment

use std::time::Duration;

use coderev_client::{ServiceEndpoint, DEFAULT_ANALYZE_PATH, DEFAULT_BASE_URL};
use coderev_core::DEFAULT_SUBMISSION_FILENAME;
use serde::{Deserialize, Serialize};

/// Application settings (.coderev/config.toml)
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub service: ServiceSettings,
}

/// Analysis service settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceSettings {
    /// Scheme, host and optional path prefix of the service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Path of the analysis route, appended to `base_url`
    #[serde(default = "default_analyze_path")]
    pub analyze_path: String,

    /// Filename sent along with every submission
    #[serde(default = "default_filename")]
    pub filename: String,

    /// Request timeout; unset means no client-side timeout
    #[serde(default)]
    pub timeout_ms: Option<u64>,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            analyze_path: default_analyze_path(),
            filename: default_filename(),
            timeout_ms: None,
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_analyze_path() -> String {
    DEFAULT_ANALYZE_PATH.to_string()
}

fn default_filename() -> String {
    DEFAULT_SUBMISSION_FILENAME.to_string()
}

impl Settings {
    /// Endpoint description handed to the HTTP client
    pub fn endpoint(&self) -> ServiceEndpoint {
        ServiceEndpoint::new(&self.service.base_url, &self.service.analyze_path)
            .with_timeout(self.service.timeout_ms.map(Duration::from_millis))
    }
}

/// Overrides layered on top of the config file.
///
/// Priority: CLI flag > `CODEREV_ENDPOINT` > config file > defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    /// Base URL of the analysis service
    pub endpoint: Option<String>,
    pub timeout_ms: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.service.base_url, "http://localhost:8000");
        assert_eq!(settings.service.analyze_path, "/analyze");
        assert_eq!(settings.service.filename, "submission.py");
        assert_eq!(settings.service.timeout_ms, None);
    }

    #[test]
    fn test_partial_service_section() {
        let settings: Settings = toml::from_str(
            r#"
[service]
timeout_ms = 2500
"#,
        )
        .unwrap();
        assert_eq!(settings.service.base_url, "http://localhost:8000");
        assert_eq!(settings.service.timeout_ms, Some(2500));
    }

    #[test]
    fn test_endpoint_from_settings() {
        let mut settings = Settings::default();
        settings.service.base_url = "https://review.internal".to_string();
        settings.service.timeout_ms = Some(1000);

        let endpoint = settings.endpoint();
        assert_eq!(endpoint.url().unwrap().as_str(), "https://review.internal/analyze");
        assert_eq!(endpoint.timeout, Some(Duration::from_secs(1)));
    }
}
