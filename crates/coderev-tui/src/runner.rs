//! Main TUI runner - entry point and event loop

use std::sync::Arc;

use coderev_app::config::Settings;
use coderev_app::message::Message;
use coderev_app::process::process_message;
use coderev_app::signals;
use coderev_app::state::AppState;
use coderev_client::{AnalysisService, HttpAnalysisClient};
use coderev_core::prelude::*;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use tokio::sync::mpsc;

use super::{event, render, terminal};

/// Run the TUI against the analysis service described by `settings`
pub async fn run(settings: Settings) -> Result<()> {
    let service = Arc::new(HttpAnalysisClient::new(&settings.endpoint())?);

    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    // Initialize terminal
    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    if let Err(e) = execute!(std::io::stdout(), EnableBracketedPaste) {
        warn!("Bracketed paste unavailable: {}", e);
    }

    let mut state = AppState::with_settings(settings);

    // Unified message channel (signal handler, analysis tasks)
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);

    // Spawn signal handler (sends Message::Quit on SIGINT/SIGTERM)
    let signal_task = signals::spawn_signal_handler(msg_tx.clone());

    let result = run_loop(&mut term, &mut state, msg_rx, msg_tx, &service);
    signal_task.abort();

    // Restore terminal
    let _ = execute!(std::io::stdout(), DisableBracketedPaste);
    ratatui::restore();

    info!("Exiting ({})", state.submission.label());
    result
}

/// Main event loop
fn run_loop<S>(
    terminal: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    msg_tx: mpsc::Sender<Message>,
    service: &Arc<S>,
) -> Result<()>
where
    S: AnalysisService + Send + Sync + 'static,
{
    while !state.should_quit() {
        // Process external messages (analysis results, signal handler)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, &msg_tx, service);
        }

        // Render
        terminal.draw(|frame| render::view(frame, state))?;

        // Handle terminal events
        if let Some(message) = event::poll()? {
            process_message(state, message, &msg_tx, service);
        }
    }

    Ok(())
}
