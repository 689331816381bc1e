//! Custom widget components

mod editor;
mod error_banner;
mod header;
mod results;

pub use editor::{CodeEditor, SUBMITTING_LABEL, SUBMIT_LABEL};
pub use error_banner::ErrorBanner;
pub use header::{MainHeader, APP_TITLE};
pub use results::ResultsPanel;
