//! # Diagnostics Document
//!
//! Domain types for the JSON document returned by the analysis service.
//!
//! The service's response is never validated against a schema. Instead every
//! field is extracted defensively from a `serde_json::Value`: a missing,
//! `null`, or mistyped field degrades to a documented default rather than
//! failing. Only a body that is not JSON at all is an error, and that is
//! decided before a [`DiagnosticsDocument`] is built.
//!
//! | Field      | Accepted shape                | Default            |
//! |------------|-------------------------------|--------------------|
//! | `filename` | string                        | `"Unknown File"`   |
//! | `metrics`  | object (document key order)   | empty              |
//! | `score`    | object with a `score` member  | `"N/A"`            |
//! | `issues`   | array                         | empty              |

use std::fmt;

use serde::Deserialize;
use serde_json::{Map, Number, Value};

/// Display name used when the document carries no usable `filename`
pub const UNKNOWN_FILENAME: &str = "Unknown File";

/// Display value used when `score.score` is absent or `null`
pub const NO_SCORE_PLACEHOLDER: &str = "N/A";

// ============================================================================
// MetricValue
// ============================================================================

/// A scalar value as found in `metrics` or `score.score`.
///
/// Stringification follows what a dynamic UI shows for the same JSON:
/// integral numbers print without a fractional part, booleans as
/// `true`/`false`, and nested arrays/objects as compact JSON.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricValue {
    Number(Number),
    Text(String),
    Bool(bool),
    Null,
    /// Array or object value, kept verbatim
    Compound(Value),
}

impl From<Value> for MetricValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Number(n) => MetricValue::Number(n),
            Value::String(s) => MetricValue::Text(s),
            Value::Bool(b) => MetricValue::Bool(b),
            Value::Null => MetricValue::Null,
            other @ (Value::Array(_) | Value::Object(_)) => MetricValue::Compound(other),
        }
    }
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Number(n) => write_number(f, n),
            MetricValue::Text(s) => f.write_str(s),
            MetricValue::Bool(b) => write!(f, "{}", b),
            MetricValue::Null => f.write_str("null"),
            MetricValue::Compound(v) => write!(f, "{}", v),
        }
    }
}

/// Largest magnitude at which every integral f64 is exactly representable
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

fn write_number(f: &mut fmt::Formatter<'_>, n: &Number) -> fmt::Result {
    match n.as_f64() {
        Some(x) if n.is_f64() && x.fract() == 0.0 && x.abs() <= MAX_SAFE_INTEGER => {
            write!(f, "{}", x as i64)
        }
        _ => write!(f, "{}", n),
    }
}

// ============================================================================
// Issue
// ============================================================================

/// A single flagged problem in the submitted code.
///
/// The line number is display-only; nothing checks it against the file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Issue {
    pub lineno: Option<i64>,
    pub title: String,
    pub severity: String,
    pub snippet: String,
    pub why: String,
    pub fix: String,
    /// Rule category (e.g. "style", "bug-risk"), when the service sends one
    pub category: Option<String>,
    /// Design principle the issue relates to, when the service sends one
    pub principle: Option<String>,
}

impl Issue {
    /// Build an issue from one element of the `issues` array.
    ///
    /// Non-object elements produce an all-default issue so the rendered list
    /// keeps the document's element count and order.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        Self {
            lineno: obj.get("lineno").and_then(integer_field),
            title: text_field(obj, "title"),
            severity: text_field(obj, "severity"),
            snippet: text_field(obj, "snippet"),
            why: text_field(obj, "why"),
            fix: text_field(obj, "fix"),
            category: optional_text_field(obj, "category"),
            principle: optional_text_field(obj, "principle"),
        }
    }

    /// Line number for display, `?` when the service did not send one
    pub fn lineno_display(&self) -> String {
        self.lineno
            .map(|n| n.to_string())
            .unwrap_or_else(|| "?".to_string())
    }
}

fn integer_field(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|x| x.fract() == 0.0 && x.abs() <= MAX_SAFE_INTEGER)
                .map(|x| x as i64)
        }),
        _ => None,
    }
}

/// Read a field as display text; missing or `null` becomes the empty string
fn text_field(obj: &Map<String, Value>, key: &str) -> String {
    optional_text_field(obj, key).unwrap_or_default()
}

fn optional_text_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => Some(MetricValue::from(other.clone()).to_string()),
    }
}

// ============================================================================
// DiagnosticsDocument
// ============================================================================

/// The analysis result: filename, score, metrics and issues.
///
/// Built from any JSON value through [`DiagnosticsDocument::from_value`] (also
/// used by its `Deserialize` impl), which never fails.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub struct DiagnosticsDocument {
    pub filename: Option<String>,
    /// Metric name/value pairs in document key order
    pub metrics: Vec<(String, MetricValue)>,
    /// `score.score`, absent when missing or `null`
    pub score: Option<MetricValue>,
    pub issues: Vec<Issue>,
}

impl DiagnosticsDocument {
    /// Extract a document from an arbitrary JSON value.
    ///
    /// A non-object top-level value is treated like `{}`.
    pub fn from_value(value: Value) -> Self {
        let Value::Object(mut obj) = value else {
            return Self::default();
        };

        let filename = match obj.remove("filename") {
            Some(Value::String(s)) if !s.is_empty() => Some(s),
            _ => None,
        };

        let metrics = match obj.remove("metrics") {
            Some(Value::Object(map)) => map
                .into_iter()
                .map(|(key, value)| (key, MetricValue::from(value)))
                .collect(),
            _ => Vec::new(),
        };

        let score = match obj.remove("score") {
            Some(Value::Object(mut nested)) => match nested.remove("score") {
                None | Some(Value::Null) => None,
                Some(v) => Some(MetricValue::from(v)),
            },
            _ => None,
        };

        let issues = match obj.remove("issues") {
            Some(Value::Array(items)) => items.iter().map(Issue::from_value).collect(),
            _ => Vec::new(),
        };

        Self {
            filename,
            metrics,
            score,
            issues,
        }
    }

    /// Filename for display, [`UNKNOWN_FILENAME`] when absent
    pub fn filename_or_default(&self) -> &str {
        self.filename.as_deref().unwrap_or(UNKNOWN_FILENAME)
    }

    /// Score for display, [`NO_SCORE_PLACEHOLDER`] when absent
    pub fn score_display(&self) -> String {
        self.score
            .as_ref()
            .map(|s| s.to_string())
            .unwrap_or_else(|| NO_SCORE_PLACEHOLDER.to_string())
    }
}

impl From<Value> for DiagnosticsDocument {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}
