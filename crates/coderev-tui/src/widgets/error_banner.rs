//! Error banner shown above the body while a request has failed

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

use crate::theme::styles;

pub struct ErrorBanner<'a> {
    message: &'a str,
}

impl<'a> ErrorBanner<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }
}

impl Widget for ErrorBanner<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(styles::status_red());

        let line = Line::from(vec![
            Span::styled("✗ ", styles::status_red()),
            Span::styled(
                self.message,
                styles::status_red().add_modifier(Modifier::BOLD),
            ),
        ]);

        Paragraph::new(line).block(block).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_banner_shows_message() {
        let mut term = TestTerminal::with_size(80, 3);
        term.render_widget(ErrorBanner::new("backend down"), term.area());

        assert!(term.line_contains(1, "backend down"));
    }
}
