//! Analysis service trait
//!
//! The app layer only talks to this trait, so the TUI and the tests can run
//! against either the real HTTP service or an in-process fake.

use coderev_core::prelude::*;
use coderev_core::AnalyzeRequest;

/// A backend that analyzes one source snippet per call.
///
/// Implementations return the raw parsed response body. Shape deviations
/// in that body are not errors; only failures to obtain a JSON body are.
#[trait_variant::make(AnalysisService: Send)]
pub trait LocalAnalysisService {
    /// Submit `request` and wait for the diagnostics document
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<serde_json::Value>;
}
