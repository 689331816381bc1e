//! Application state (Model in TEA pattern)

use chrono::{DateTime, Local};

use crate::code_input::CodeInput;
use crate::config::Settings;
use crate::message::RequestId;
use crate::submission::SubmissionState;

/// Whether the event loop keeps running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,

    /// Text being edited
    pub code_input: CodeInput,

    /// Lifecycle of the most recent analysis request
    pub submission: SubmissionState,

    pub settings: Settings,

    /// Id handed to the next request; increases monotonically
    next_request_id: RequestId,

    /// When the last response (success or failure) arrived
    pub last_completed_at: Option<DateTime<Local>>,

    /// Spinner frame, advanced on every tick while loading
    pub animation_frame: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            phase: AppPhase::Running,
            code_input: CodeInput::default(),
            submission: SubmissionState::Idle,
            settings,
            next_request_id: 1,
            last_completed_at: None,
            animation_frame: 0,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    /// Allocate the id for a new request
    pub fn next_request_id(&mut self) -> RequestId {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Advance the spinner; frames only move while a request is in flight
    pub fn tick(&mut self) {
        if self.submission.is_loading() {
            self.animation_frame = self.animation_frame.wrapping_add(1);
        }
    }
}
