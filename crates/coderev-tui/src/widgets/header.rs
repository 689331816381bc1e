//! Header bar widget
//!
//! Shows the app title, the analysis endpoint and keybindings.

use chrono::{DateTime, Local};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::{palette, styles};

pub const APP_TITLE: &str = "🧠 Intelligent Code Review System";

/// Main header showing app title, endpoint, and keybindings
pub struct MainHeader<'a> {
    endpoint: &'a str,
    last_completed_at: Option<DateTime<Local>>,
}

impl<'a> MainHeader<'a> {
    pub fn new(endpoint: &'a str) -> Self {
        Self {
            endpoint,
            last_completed_at: None,
        }
    }

    /// Show when the last response arrived
    pub fn last_completed_at(mut self, at: Option<DateTime<Local>>) -> Self {
        self.last_completed_at = at;
        self
    }

    fn title_line(&self) -> Line<'a> {
        let mut spans = vec![
            Span::styled(APP_TITLE, styles::accent_bold()),
            Span::styled("  ", Style::default()),
            Span::styled(self.endpoint, styles::text_muted()),
        ];
        if let Some(at) = self.last_completed_at {
            spans.push(Span::styled(
                format!("  last run {}", at.format("%H:%M:%S")),
                styles::text_secondary(),
            ));
        }
        Line::from(spans)
    }

    fn shortcuts_line() -> Line<'static> {
        let hint = |key: &'static str, label: &'static str| {
            [
                Span::styled(key, styles::keybinding()),
                Span::styled(label, styles::text_muted()),
            ]
        };

        Line::from(
            [
                hint("^R", " run  "),
                hint("^L", " clear  "),
                hint("Esc", " quit"),
            ]
            .concat(),
        )
        .right_aligned()
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let shortcuts = Self::shortcuts_line();
        let shortcuts_width = shortcuts.width() as u16;

        // Title takes the row; shortcuts only when there is room for both
        if inner.width > shortcuts_width + 20 {
            let [title_area, shortcuts_area] =
                Layout::horizontal([Constraint::Min(0), Constraint::Length(shortcuts_width)])
                    .areas(inner);
            Paragraph::new(self.title_line()).render(title_area, buf);
            Paragraph::new(shortcuts).render(shortcuts_area, buf);
        } else {
            Paragraph::new(self.title_line()).render(inner, buf);
        }
    }
}
