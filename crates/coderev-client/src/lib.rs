//! # coderev-client - Analysis Service Client
//!
//! The outbound side of Code Review: a single `POST` carrying
//! `{filename, content}` to the analysis service, returning the raw JSON body.
//!
//! Depends on [`coderev_core`] for the request type and error handling.
//!
//! ## Public API
//!
//! - [`AnalysisService`] - Async trait implemented by every analysis backend
//! - [`HttpAnalysisClient`] - reqwest implementation talking to the real service
//! - [`ServiceEndpoint`] - Base URL, analysis path and optional timeout

pub mod endpoint;
pub mod http;
pub mod service;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

// Public API re-exports
pub use endpoint::{ServiceEndpoint, DEFAULT_ANALYZE_PATH, DEFAULT_BASE_URL};
pub use http::HttpAnalysisClient;
pub use service::{AnalysisService, LocalAnalysisService};
