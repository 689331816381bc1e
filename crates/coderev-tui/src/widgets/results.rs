//! Results pane
//!
//! Lays out a rendered [`View`] verbatim; all text decisions (defaults,
//! placeholders, ordering) are made by `coderev_app::view::render`.

use coderev_app::view::{
    IssueCard, IssuesSection, MetricsSection, ReportView, ResultsBody, View, ANALYZING_INDICATOR,
    ISSUES_HEADING, METRICS_HEADING, NO_ISSUES_MESSAGE, NO_METRICS_MESSAGE, NO_RESULTS_PLACEHOLDER,
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::theme::{palette, styles};

const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

pub struct ResultsPanel<'a> {
    view: &'a View,
    animation_frame: usize,
}

impl<'a> ResultsPanel<'a> {
    pub fn new(view: &'a View) -> Self {
        Self {
            view,
            animation_frame: 0,
        }
    }

    pub fn animation_frame(mut self, frame: usize) -> Self {
        self.animation_frame = frame;
        self
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let view = self.view;
        let mut lines = Vec::new();

        if view.analyzing {
            let spinner = SPINNER_FRAMES[self.animation_frame % SPINNER_FRAMES.len()];
            lines.push(Line::from(vec![
                Span::styled(format!("{} ", spinner), styles::accent()),
                Span::styled(ANALYZING_INDICATOR, styles::accent_bold()),
            ]));
            lines.push(Line::default());
        }

        match &view.body {
            ResultsBody::Placeholder => {
                lines.push(Line::styled(NO_RESULTS_PLACEHOLDER, styles::text_muted()))
            }
            ResultsBody::Report(report) => push_report(&mut lines, report),
        }

        lines
    }
}

fn push_report<'a>(lines: &mut Vec<Line<'a>>, report: &'a ReportView) {
    lines.push(Line::styled(report.heading.as_str(), styles::text_bright_bold()));
    lines.push(Line::styled(report.score_line.as_str(), styles::accent_bold()));
    lines.push(Line::default());

    lines.push(Line::styled(METRICS_HEADING, styles::text_secondary()));
    match &report.metrics {
        MetricsSection::Empty => {
            lines.push(Line::styled(NO_METRICS_MESSAGE, styles::text_muted()));
        }
        MetricsSection::Entries(entries) => {
            for entry in entries {
                lines.push(Line::from(vec![
                    Span::styled("  • ", styles::text_muted()),
                    Span::styled(entry.as_str(), styles::text_primary()),
                ]));
            }
        }
    }
    lines.push(Line::default());

    lines.push(Line::styled(ISSUES_HEADING, styles::text_secondary()));
    match &report.issues {
        IssuesSection::Empty => {
            lines.push(Line::styled(NO_ISSUES_MESSAGE, styles::status_green()));
        }
        IssuesSection::Cards(cards) => {
            for card in cards {
                push_issue(lines, card);
            }
        }
    }
}

fn push_issue<'a>(lines: &mut Vec<Line<'a>>, card: &'a IssueCard) {
    lines.push(Line::styled(card.header.as_str(), styles::severity(&card.severity)));

    if let Some(category) = &card.category {
        lines.push(labelled("Category", category));
    }
    if let Some(principle) = &card.principle {
        lines.push(labelled("Principle", principle));
    }

    lines.push(Line::styled("  Snippet:", styles::text_secondary()));
    for code in card.snippet.lines() {
        lines.push(Line::from(vec![
            Span::styled("  │ ", styles::text_muted()),
            Span::styled(code, Style::default().fg(palette::STATUS_BLUE)),
        ]));
    }
    lines.push(labelled("Why", &card.why));
    lines.push(Line::from(vec![
        Span::styled("  Fix: ", styles::status_yellow()),
        Span::styled(card.fix.as_str(), styles::text_primary()),
    ]));
    lines.push(Line::default());
}

fn labelled<'a>(label: &'static str, value: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {}: ", label), styles::text_secondary()),
        Span::styled(value, styles::text_primary()),
    ])
}

impl Widget for ResultsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).title(" Results ");
        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
