//! # coderev-core - Core Domain Types
//!
//! Foundation crate for Code Review. Provides the diagnostics document model,
//! the outbound request shape, error handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, serde_json, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Diagnostics (`diagnostics`)
//! - [`DiagnosticsDocument`] - Defensively parsed analysis result
//! - [`Issue`] - A single flagged problem tied to a line number
//! - [`MetricValue`] - Scalar metric value with dynamic-UI stringification
//!
//! ### Requests (`request`)
//! - [`AnalyzeRequest`] - Body of the outbound analysis call
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use coderev_core::prelude::*;
//! ```

pub mod diagnostics;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod request;

// Re-export commonly used types at crate root for convenience
pub use diagnostics::{
    DiagnosticsDocument, Issue, MetricValue, NO_SCORE_PLACEHOLDER, UNKNOWN_FILENAME,
};
pub use error::{Error, Result, ResultExt};
pub use request::{AnalyzeRequest, DEFAULT_SUBMISSION_FILENAME};
