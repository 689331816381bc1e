//! coderev-tui - Terminal UI for Code Review
//!
//! This crate provides the ratatui-based terminal interface: an editor pane
//! for the code under review, a results pane drawing the rendered
//! diagnostics, and the event loop tying both to the app state.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
