//! Wire types of the portal's exam endpoint.
//!
//! Field names follow the backend verbatim; `into_question_set()` is the
//! only place they are translated into engine types.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::core::quiz::{Question, QuestionSet};
use crate::core::text::clean_html;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WireQuestion {
    pub lecture_sessions_question_id: String,
    pub lecture_sessions_question: String,
    #[serde(default)]
    pub lecture_sessions_question_answers: Vec<String>,
    pub lecture_sessions_question_correct: String,
    #[serde(default)]
    pub lecture_sessions_question_explanation: String,
}

/// Body of `GET /public/lecture-exams/{id}/questions/by-lecture`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ExamQuestionsResponse {
    #[serde(default)]
    pub exam_id: Option<String>,
    /// Absent or null when the lecture has no exam yet.
    #[serde(default)]
    pub questions: Option<Vec<WireQuestion>>,
}

impl From<WireQuestion> for Question {
    fn from(wire: WireQuestion) -> Self {
        Question {
            id: wire.lecture_sessions_question_id,
            prompt: clean_html(&wire.lecture_sessions_question),
            // Options are matched against the marker by prefix, so they
            // are kept byte-for-byte.
            options: wire.lecture_sessions_question_answers,
            correct: wire.lecture_sessions_question_correct,
            explanation: clean_html(&wire.lecture_sessions_question_explanation),
        }
    }
}

impl ExamQuestionsResponse {
    /// Converts to engine types. Questions without answer options cannot be
    /// answered, so they are dropped.
    pub fn into_question_set(self) -> QuestionSet {
        let questions = self
            .questions
            .unwrap_or_default()
            .into_iter()
            .filter(|wire| {
                let answerable = !wire.lecture_sessions_question_answers.is_empty();
                if !answerable {
                    warn!(
                        "Skipping question {}: no answer options",
                        wire.lecture_sessions_question_id
                    );
                }
                answerable
            })
            .map(Question::from)
            .collect();
        QuestionSet::new(self.exam_id, questions)
    }
}
