//! Outbound analysis request body

use serde::{Deserialize, Serialize};

/// Filename sent with every submission. Not derived from a real file.
pub const DEFAULT_SUBMISSION_FILENAME: &str = "submission.py";

/// Body of `POST <base_url><analyze_path>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    pub filename: String,
    pub content: String,
}

impl AnalyzeRequest {
    pub fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }

    /// Request carrying the default submission filename
    pub fn submission(content: impl Into<String>) -> Self {
        Self::new(DEFAULT_SUBMISSION_FILENAME, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_submission_uses_default_filename() {
        let req = AnalyzeRequest::submission("x = 1");
        assert_eq!(req.filename, "submission.py");
        assert_eq!(req.content, "x = 1");
    }

    #[test]
    fn test_request_wire_shape() {
        let req = AnalyzeRequest::submission("print(1)\n");
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({ "filename": "submission.py", "content": "print(1)\n" })
        );
    }

    #[test]
    fn test_empty_and_control_content_forwarded_as_is() {
        let req = AnalyzeRequest::submission("\u{0}\t\r\n");
        let text = serde_json::to_string(&req).unwrap();
        let back: AnalyzeRequest = serde_json::from_str(&text).unwrap();
        assert_eq!(back.content, "\u{0}\t\r\n");

        assert_eq!(AnalyzeRequest::submission("").content, "");
    }
}
