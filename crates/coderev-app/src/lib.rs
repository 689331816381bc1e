//! coderev-app - Application state and orchestration for Code Review
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the submission state machine, the code input buffer, the
//! update function, background analysis tasks, and the pure result renderer.
//! It also owns configuration loading and signal handling.

pub mod actions;
pub mod code_input;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod signals;
pub mod state;
pub mod submission;
pub mod view;

// Re-export primary types
pub use code_input::CodeInput;
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::{Message, RequestId};
pub use state::AppState;
pub use submission::{SubmissionEvent, SubmissionState, USER_FACING_ERROR};
pub use view::{render, View};
