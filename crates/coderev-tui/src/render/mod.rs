//! Main render/view function (View in TEA pattern)


use coderev_app::state::AppState;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::palette;

/// Render the complete UI (View function in TEA)
///
/// Pure with respect to `state`; the results pane is derived through
/// `coderev_app::render` on every frame.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Fill entire terminal with deepest background color
    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let results = coderev_app::render(&state.submission);
    let areas = layout::create(area, results.error_banner.is_some());

    let endpoint = endpoint_label(state);
    let header = widgets::MainHeader::new(&endpoint).last_completed_at(state.last_completed_at);
    frame.render_widget(header, areas.header);

    if let (Some(banner_area), Some(message)) = (areas.banner, results.error_banner.as_deref()) {
        frame.render_widget(widgets::ErrorBanner::new(message), banner_area);
    }

    let editor =
        widgets::CodeEditor::new(&state.code_input).submitting(state.submission.is_loading());
    frame.render_widget(editor, areas.editor);

    let panel = widgets::ResultsPanel::new(&results).animation_frame(state.animation_frame);
    frame.render_widget(panel, areas.results);
}

/// Full analysis URL, or the raw base URL when it does not parse
fn endpoint_label(state: &AppState) -> String {
    state
        .settings
        .endpoint()
        .url()
        .map(|url| url.to_string())
        .unwrap_or_else(|_| state.settings.service.base_url.clone())
}
