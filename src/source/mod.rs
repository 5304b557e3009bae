//! # Question Sources
//!
//! Where the quiz gets its questions. The engine only ever sees a
//! `QuestionSet`; sources hide HTTP and files behind `QuestionSource`.

pub mod provider;
pub mod providers;
pub mod types;

use std::sync::Arc;

use crate::core::config::ResolvedConfig;

pub use provider::{QuestionSource, SourceError};
pub use providers::{HttpQuestionSource, JsonFileSource};
pub use types::{ExamQuestionsResponse, WireQuestion};

/// Build a source from the resolved config: a local file when
/// `questions_file` is set, the portal API otherwise.
pub fn build_source(config: &ResolvedConfig) -> Result<Arc<dyn QuestionSource>, SourceError> {
    match &config.questions_file {
        Some(path) => Ok(Arc::new(JsonFileSource::new(path.clone()))),
        None => Ok(Arc::new(HttpQuestionSource::new(
            config.api_base_url.clone(),
            config.user_id.clone(),
            config.timeout,
        )?)),
    }
}
