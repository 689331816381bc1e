//! Headless mode runner - one submission, no TUI

use std::sync::Arc;

use tokio::sync::mpsc;

use coderev_app::config::Settings;
use coderev_app::handler::update;
use coderev_app::message::Message;
use coderev_app::process::process_message;
use coderev_app::state::AppState;
use coderev_app::{render, View};
use coderev_client::{AnalysisService, HttpAnalysisClient};
use coderev_core::prelude::*;

use super::{HeadlessEvent, OutputFormat};

/// Analyze `code` once and print the results.
///
/// Returns `Ok(true)` when the service produced a document, `Ok(false)` when
/// the request failed (the failure has already been reported).
pub async fn run_headless(settings: Settings, code: String, format: OutputFormat) -> Result<bool> {
    let endpoint = settings.endpoint();
    let url = endpoint.url()?;
    let service = Arc::new(HttpAnalysisClient::new(&endpoint)?);

    let mut state = AppState::with_settings(settings);
    state.code_input.set_text(code);

    if format == OutputFormat::Json {
        HeadlessEvent::analysis_started(
            &state.settings.service.filename,
            state.code_input.current_text().len(),
            url.as_str(),
        )
        .emit();
    }

    let view = analyze(&mut state, &service).await?;
    let succeeded = state.submission.document().is_some();

    match format {
        OutputFormat::Text => {
            for line in view.text_lines() {
                println!("{}", line);
            }
        }
        OutputFormat::Json => emit_outcome(&state, &view),
    }

    info!(
        "Headless analysis finished: {}",
        state.submission.label()
    );
    Ok(succeeded)
}

/// Submit the current buffer and drive the update loop until the request
/// resolves; returns the rendered results.
///
/// Fails with [`Error::ChannelClosed`] if the analysis task dies without
/// reporting.
pub async fn analyze<S>(state: &mut AppState, service: &Arc<S>) -> Result<View>
where
    S: AnalysisService + Send + Sync + 'static,
{
    let (msg_tx, mut msg_rx) = mpsc::channel::<Message>(8);

    process_message(state, Message::Submit, &msg_tx, service);

    // The analysis task holds the only sender from here on
    drop(msg_tx);

    while state.submission.is_loading() {
        let Some(msg) = msg_rx.recv().await else {
            warn!("Analysis task ended without reporting a result");
            return Err(Error::ChannelClosed);
        };
        // Resolution messages trigger no further actions
        update(state, msg);
    }

    Ok(render(&state.submission))
}

fn emit_outcome(state: &AppState, view: &View) {
    let event = match state.submission.document() {
        Some(document) => HeadlessEvent::analysis_succeeded(
            document.filename_or_default(),
            document.score_display(),
            document.issues.len(),
            view.text_lines(),
        ),
        None => HeadlessEvent::analysis_failed(view.error_banner.as_deref().unwrap_or_default()),
    };
    event.emit();
}
