//! Code editor pane
//!
//! Draws the input buffer with a block cursor and the submit control
//! underneath. The view scrolls to keep the cursor visible.

use coderev_app::CodeInput;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::theme::styles;

/// Submit control label while idle
pub const SUBMIT_LABEL: &str = "Run Analysis";

/// Submit control label while a request is in flight
pub const SUBMITTING_LABEL: &str = "Analyzing...";

pub struct CodeEditor<'a> {
    input: &'a CodeInput,
    submitting: bool,
}

impl<'a> CodeEditor<'a> {
    pub fn new(input: &'a CodeInput) -> Self {
        Self {
            input,
            submitting: false,
        }
    }

    /// Disable the submit control
    pub fn submitting(mut self, submitting: bool) -> Self {
        self.submitting = submitting;
        self
    }

    fn code_lines(&self) -> Vec<Line<'a>> {
        let (cursor_line, cursor_col) = self.input.cursor_line_col();

        self.input
            .lines()
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                if i != cursor_line {
                    return Line::from(Span::styled(text, styles::text_primary()));
                }

                let before: String = text.chars().take(cursor_col).collect();
                let at: String = text
                    .chars()
                    .nth(cursor_col)
                    .map(String::from)
                    .unwrap_or_else(|| " ".to_string());
                let after: String = text.chars().skip(cursor_col + 1).collect();

                Line::from(vec![
                    Span::styled(before, styles::text_primary()),
                    Span::styled(at, styles::cursor()),
                    Span::styled(after, styles::text_primary()),
                ])
            })
            .collect()
    }

    fn submit_line(&self) -> Line<'static> {
        let (label, style) = if self.submitting {
            (SUBMITTING_LABEL, styles::button_disabled())
        } else {
            (SUBMIT_LABEL, styles::button_enabled())
        };

        Line::from(vec![
            Span::styled(format!(" {} ", label), style),
            Span::styled("  Ctrl+R / F5", styles::text_muted()),
        ])
    }
}

/// First visible index so that `position` stays inside a window of `size`
fn scroll_offset(position: usize, size: u16) -> u16 {
    let size = size.max(1) as usize;
    position.saturating_sub(size - 1).min(u16::MAX as usize) as u16
}

impl Widget for CodeEditor<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(!self.submitting).title(" Code ");
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height < 2 || inner.width == 0 {
            return;
        }

        let [code_area, _, submit_area] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(if inner.height > 3 { 1 } else { 0 }),
            Constraint::Length(1),
        ])
        .areas(inner);

        let (line, col) = self.input.cursor_line_col();
        let scroll = (
            scroll_offset(line, code_area.height),
            scroll_offset(col, code_area.width),
        );

        Paragraph::new(self.code_lines())
            .scroll(scroll)
            .render(code_area, buf);
        Paragraph::new(self.submit_line()).render(submit_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use ratatui::style::Modifier;

    #[test]
    fn test_editor_shows_initial_code() {
        let input = CodeInput::default();
        let mut term = TestTerminal::with_size(50, 10);

        term.render_widget(CodeEditor::new(&input), term.area());

        assert!(term.buffer_contains("print(\"Hello, world!\")"));
        assert!(term.buffer_contains(SUBMIT_LABEL));
    }

    #[test]
    fn test_submit_control_disabled_while_submitting() {
        let input = CodeInput::default();
        let mut term = TestTerminal::with_size(50, 10);

        term.render_widget(CodeEditor::new(&input).submitting(true), term.area());

        assert!(term.buffer_contains(SUBMITTING_LABEL));
        assert!(!term.buffer_contains(SUBMIT_LABEL));
    }

    #[test]
    fn test_cursor_cell_is_reversed() {
        let input = CodeInput::new("ab");
        let mut term = TestTerminal::with_size(20, 6);

        term.render_widget(CodeEditor::new(&input), term.area());

        // Border at (0, 0); text starts at (1, 1); cursor sits after "ab"
        let cell = &term.buffer()[(3, 1)];
        assert!(cell.modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_scrolls_to_cursor_line() {
        let text: Vec<String> = (0..30).map(|i| format!("line {}", i)).collect();
        let input = CodeInput::new(text.join("\n"));
        let mut term = TestTerminal::with_size(30, 10);

        term.render_widget(CodeEditor::new(&input), term.area());

        assert!(term.buffer_contains("line 29"));
        assert!(!term.buffer_contains("line 0 "));
    }

    #[test]
    fn test_scroll_offset() {
        assert_eq!(scroll_offset(0, 5), 0);
        assert_eq!(scroll_offset(4, 5), 0);
        assert_eq!(scroll_offset(5, 5), 1);
        assert_eq!(scroll_offset(10, 0), 10);
    }
}
