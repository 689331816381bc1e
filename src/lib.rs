//! Code Review Library
//!
//! A terminal front end that submits source code to a remote analysis
//! service and displays the returned diagnostics.

pub mod headless;

// Re-export main entry points
pub use coderev_tui::run;
pub use headless::{run_headless, OutputFormat};
