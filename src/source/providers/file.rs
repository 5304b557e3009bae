//! Question source reading the exam endpoint's JSON shape from disk.
//!
//! Useful offline and for fixtures: save a response from the API once,
//! then drill it without a backend. The lecture id is only logged.

use std::path::PathBuf;

use async_trait::async_trait;
use log::info;

use crate::core::quiz::QuestionSet;
use crate::source::{ExamQuestionsResponse, QuestionSource, SourceError};

pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl QuestionSource for JsonFileSource {
    fn name(&self) -> &str {
        "file"
    }

    async fn fetch_questions(&self, lecture_id: &str) -> Result<QuestionSet, SourceError> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(SourceError::Io)?;
        let parsed: ExamQuestionsResponse =
            serde_json::from_str(&contents).map_err(|e| SourceError::Parse(e.to_string()))?;
        let set = parsed.into_question_set();
        info!(
            "Loaded {} question(s) for lecture {} from {}",
            set.len(),
            lecture_id,
            self.path.display()
        );
        Ok(set)
    }
}
