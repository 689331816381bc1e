//! Logging configuration using tracing

use std::path::PathBuf;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::Result;

const LOG_FILE_NAME: &str = "coderev.log";

/// Initialize the logging subsystem
///
/// Logs are written to `~/.local/share/code-review/logs/` because the
/// terminal itself belongs to the TUI.
/// Log level is controlled by `CODEREV_LOG` environment variable.
///
/// # Examples
/// ```bash
/// CODEREV_LOG=debug cargo run
/// CODEREV_LOG=coderev_client=trace cargo run
/// ```
pub fn init() -> Result<()> {
    let log_dir = get_log_directory()?;
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_NAME);

    // Default to info, allow override via CODEREV_LOG
    let env_filter = EnvFilter::try_from_env("CODEREV_LOG")
        .unwrap_or_else(|_| EnvFilter::new("code_review=info,coderev=info,warn"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(file_appender)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .init();

    tracing::info!("═══════════════════════════════════════════════════════");
    tracing::info!("Code Review starting");
    tracing::info!("Log directory: {}", log_dir.display());
    tracing::info!("═══════════════════════════════════════════════════════");

    Ok(())
}

/// Get the log directory path
fn get_log_directory() -> Result<PathBuf> {
    let base = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    Ok(base.join("code-review").join("logs"))
}

/// Log file base path; the daily appender adds a `.YYYY-MM-DD` suffix
pub fn get_current_log_file() -> Result<PathBuf> {
    let dir = get_log_directory()?;
    Ok(dir.join(LOG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_lives_in_log_directory() {
        let file = get_current_log_file().unwrap();
        let dir = get_log_directory().unwrap();
        assert_eq!(file.parent(), Some(dir.as_path()));
        assert!(file.ends_with("code-review/logs/coderev.log"));
    }
}
