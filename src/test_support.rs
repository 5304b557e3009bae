//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use crate::core::quiz::{Question, QuestionSet};
use crate::core::state::App;
use crate::source::{QuestionSource, SourceError};

/// A source that always returns the same set.
pub struct StaticSource(pub QuestionSet);

#[async_trait]
impl QuestionSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch_questions(&self, _lecture_id: &str) -> Result<QuestionSet, SourceError> {
        Ok(self.0.clone())
    }
}

/// A four-option question whose options read "A. Option A" .. "D. Option D".
pub fn question(id: &str, correct: &str) -> Question {
    Question {
        id: id.to_string(),
        prompt: format!("Prompt of {id}"),
        options: ["A", "B", "C", "D"]
            .iter()
            .map(|letter| format!("{letter}. Option {letter}"))
            .collect(),
        correct: correct.to_string(),
        explanation: format!("Explanation of {id}"),
    }
}

pub fn question_set(questions: Vec<Question>) -> QuestionSet {
    QuestionSet::new(None, questions)
}

/// Fixed session start time.
pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 18, 8, 0, 0).unwrap()
}

/// Creates a test App in the Loading state for lecture "lec-1".
pub fn test_app() -> App {
    App::new(
        Arc::new(StaticSource(QuestionSet::default())),
        "lec-1".to_string(),
        Some("al-ikhlas".to_string()),
    )
}
