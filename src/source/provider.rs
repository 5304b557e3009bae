use std::fmt;

use async_trait::async_trait;

use crate::core::quiz::QuestionSet;

/// Errors that can occur while fetching a question set.
/// The quiz treats every variant the same way ("no questions available");
/// the distinction exists for logs and the status line.
#[derive(Debug)]
pub enum SourceError {
    /// Source misconfigured (bad base URL, unbuildable client). Not retryable.
    Config(String),
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Backend returned a non-success status (404 for unknown lectures).
    Api { status: u16, message: String },
    /// Response body was not the expected JSON shape.
    Parse(String),
    /// Local file could not be read.
    Io(std::io::Error),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Config(msg) => write!(f, "config error: {msg}"),
            SourceError::Network(msg) => write!(f, "network error: {msg}"),
            SourceError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            SourceError::Parse(msg) => write!(f, "parse error: {msg}"),
            SourceError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for SourceError {}

#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Returns the name of the source, for logs.
    fn name(&self) -> &str;

    /// Fetches the ordered question set of a lecture. Read-only.
    async fn fetch_questions(&self, lecture_id: &str) -> Result<QuestionSet, SourceError>;
}
