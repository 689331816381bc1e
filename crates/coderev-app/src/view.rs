//! Result renderer
//!
//! [`render`] maps a [`SubmissionState`] to a [`View`]: a plain value holding
//! every line of text the results panel shows. It is pure and total, so the
//! TUI only has to lay the view out and tests can compare views by equality.

use coderev_core::{DiagnosticsDocument, Issue};

use crate::submission::SubmissionState;

/// Shown while there is no result to display
pub const NO_RESULTS_PLACEHOLDER: &str = "No results yet.";

/// Shown while a request is in flight
pub const ANALYZING_INDICATOR: &str = "Analyzing your code...";

pub const NO_METRICS_MESSAGE: &str = "No metrics available";

pub const NO_ISSUES_MESSAGE: &str = "✅ No issues found! Great job!";

pub const METRICS_HEADING: &str = "Metrics:";

pub const ISSUES_HEADING: &str = "Issues:";

/// Everything the results panel displays for one state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct View {
    /// Draw the analyzing indicator
    pub analyzing: bool,
    /// Error banner text, shown above everything else
    pub error_banner: Option<String>,
    pub body: ResultsBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsBody {
    /// [`NO_RESULTS_PLACEHOLDER`]
    Placeholder,
    Report(ReportView),
}

/// A rendered diagnostics document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportView {
    /// `Results for {filename}`
    pub heading: String,
    /// `Score: {score}`
    pub score_line: String,
    pub metrics: MetricsSection,
    pub issues: IssuesSection,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetricsSection {
    /// [`NO_METRICS_MESSAGE`]
    Empty,
    /// `{key}: {value}` lines in document order
    Entries(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IssuesSection {
    /// [`NO_ISSUES_MESSAGE`]
    Empty,
    Cards(Vec<IssueCard>),
}

/// One issue as shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueCard {
    /// `Line {lineno}: {title} ({severity})`
    pub header: String,
    pub severity: String,
    pub snippet: String,
    pub why: String,
    pub fix: String,
    pub category: Option<String>,
    pub principle: Option<String>,
}

/// Render the results panel for `state`
pub fn render(state: &SubmissionState) -> View {
    match state {
        SubmissionState::Idle => View {
            analyzing: false,
            error_banner: None,
            body: ResultsBody::Placeholder,
        },
        // A new submission drops the previous document, so nothing stale can show
        SubmissionState::Loading => View {
            analyzing: true,
            error_banner: None,
            body: ResultsBody::Placeholder,
        },
        SubmissionState::Failed(message) => View {
            analyzing: false,
            error_banner: Some(message.clone()),
            body: ResultsBody::Placeholder,
        },
        SubmissionState::Succeeded(document) => View {
            analyzing: false,
            error_banner: None,
            body: ResultsBody::Report(render_report(document)),
        },
    }
}

fn render_report(document: &DiagnosticsDocument) -> ReportView {
    let metrics = if document.metrics.is_empty() {
        MetricsSection::Empty
    } else {
        MetricsSection::Entries(
            document
                .metrics
                .iter()
                .map(|(key, value)| format!("{}: {}", key, value))
                .collect(),
        )
    };

    let issues = if document.issues.is_empty() {
        IssuesSection::Empty
    } else {
        IssuesSection::Cards(document.issues.iter().map(render_issue).collect())
    };

    ReportView {
        heading: format!("Results for {}", document.filename_or_default()),
        score_line: format!("Score: {}", document.score_display()),
        metrics,
        issues,
    }
}

fn render_issue(issue: &Issue) -> IssueCard {
    IssueCard {
        header: format!(
            "Line {}: {} ({})",
            issue.lineno_display(),
            issue.title,
            issue.severity
        ),
        severity: issue.severity.clone(),
        snippet: issue.snippet.clone(),
        why: issue.why.clone(),
        fix: issue.fix.clone(),
        category: issue.category.clone(),
        principle: issue.principle.clone(),
    }
}

impl View {
    /// Flatten the view into display lines, in drawing order.
    ///
    /// Used by headless mode and by tests that only care about text.
    pub fn text_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();

        if let Some(banner) = &self.error_banner {
            lines.push(banner.clone());
        }
        if self.analyzing {
            lines.push(ANALYZING_INDICATOR.to_string());
        }

        match &self.body {
            ResultsBody::Placeholder => lines.push(NO_RESULTS_PLACEHOLDER.to_string()),
            ResultsBody::Report(report) => report.push_lines(&mut lines),
        }

        lines
    }
}

impl ReportView {
    fn push_lines(&self, lines: &mut Vec<String>) {
        lines.push(self.heading.clone());
        lines.push(self.score_line.clone());

        lines.push(METRICS_HEADING.to_string());
        match &self.metrics {
            MetricsSection::Empty => lines.push(NO_METRICS_MESSAGE.to_string()),
            MetricsSection::Entries(entries) => {
                lines.extend(entries.iter().map(|e| format!("  {}", e)))
            }
        }

        lines.push(ISSUES_HEADING.to_string());
        match &self.issues {
            IssuesSection::Empty => lines.push(NO_ISSUES_MESSAGE.to_string()),
            IssuesSection::Cards(cards) => {
                for card in cards {
                    card.push_lines(lines);
                }
            }
        }
    }
}

impl IssueCard {
    fn push_lines(&self, lines: &mut Vec<String>) {
        lines.push(self.header.clone());
        if let Some(category) = &self.category {
            lines.push(format!("  Category: {}", category));
        }
        if let Some(principle) = &self.principle {
            lines.push(format!("  Principle: {}", principle));
        }
        lines.push("  Snippet:".to_string());
        lines.extend(self.snippet.lines().map(|l| format!("    {}", l)));
        lines.push(format!("  Why: {}", self.why));
        lines.push(format!("  Fix: {}", self.fix));
    }
}
