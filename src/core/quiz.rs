//! # Adaptive Quiz Session Engine
//!
//! Drives a learner through a lecture's question set one question at a time.
//! Every miss is queued; once the primary pass runs out, the queue is drilled
//! until it drains, then a completion report is produced.
//!
//! ```text
//!   start()
//!     │
//!     ▼
//! ┌─────────┐ pass done, queue non-empty ┌─────────┐
//! │ Primary │ ─────────────────────────▶ │  Retry  │ ◀─┐ pass done,
//! └─────────┘                            └─────────┘ ──┘ queue non-empty
//!     │ pass done, queue empty               │ pass done, queue empty
//!     └──────────────────┬───────────────────┘
//!                        ▼
//!                 CompletionReport
//! ```
//!
//! During `Retry` the active sequence IS the wrong-queue: misses append to
//! the queue being iterated, and bounds are checked against its live length.
//!
//! All transitions take an explicit timestamp variant (`start`, `advance_at`)
//! so the engine stays deterministic under test.

use std::fmt;

use chrono::{DateTime, Utc};
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// A single multiple-choice question. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub prompt: String,
    pub options: Vec<String>,
    /// Compared by prefix against the chosen option ("B" matches "B. Sabar").
    pub correct: String,
    pub explanation: String,
}

impl Question {
    /// Prefix semantics keep legacy markers working: both "A" and
    /// "A. Wudhu" accept the option "A. Wudhu".
    pub fn is_correct(&self, option: &str) -> bool {
        option.starts_with(&self.correct)
    }
}

/// Ordered questions of one lecture exam, as returned by a question source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionSet {
    pub exam_id: Option<String>,
    pub questions: Vec<Question>,
}

impl QuestionSet {
    pub fn new(exam_id: Option<String>, questions: Vec<Question>) -> Self {
        Self { exam_id, questions }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Identifiers passed through the session untouched, for routing the
/// results view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionIds {
    pub lecture_id: String,
    pub slug: Option<String>,
    pub exam_id: Option<String>,
    pub attempt_id: String,
}

impl SessionIds {
    pub fn new(lecture_id: impl Into<String>, slug: Option<String>) -> Self {
        Self {
            lecture_id: lecture_id.into(),
            slug,
            exam_id: None,
            attempt_id: uuid::Uuid::new_v4().to_string(),
        }
    }
}

/// Which sequence the session is walking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// First traversal of the full question set, in original order.
    Primary,
    /// Traversal of the wrong-queue.
    Retry,
}

/// Final score handed to the results view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionReport {
    pub correct: u32,
    pub total: u32,
    pub elapsed_secs: u64,
    pub finished_at: DateTime<Utc>,
    #[serde(flatten)]
    pub ids: SessionIds,
}

impl CompletionReport {
    /// Score as a whole percentage, floored.
    pub fn percentage(&self) -> u32 {
        self.correct * 100 / self.total.max(1)
    }

    /// Portal route of the results page for this attempt.
    pub fn results_path(&self) -> String {
        format!(
            "/masjid/{}/tema/{}/ujian/hasil",
            self.ids.slug.as_deref().unwrap_or("-"),
            self.ids.lecture_id
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    /// The source returned zero questions; there is nothing to drill.
    NoQuestions,
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::NoQuestions => write!(f, "no questions available"),
        }
    }
}

impl std::error::Error for QuizError {}

/// Outcome of the last `check()`, kept until the learner moves on.
#[derive(Debug, Clone)]
struct Verdict {
    question: Question,
    correct: bool,
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    ids: SessionIds,
    questions: Vec<Question>,
    pass: Pass,
    index: usize,
    wrong: Vec<Question>,
    correct_count: u32,
    selected: Option<String>,
    verdict: Option<Verdict>,
    started_at: DateTime<Utc>,
    report: Option<CompletionReport>,
}

impl QuizSession {
    /// Starts a session on the primary pass. Fails on an empty set.
    pub fn start(
        mut ids: SessionIds,
        set: QuestionSet,
        now: DateTime<Utc>,
    ) -> Result<Self, QuizError> {
        if set.is_empty() {
            return Err(QuizError::NoQuestions);
        }
        if set.exam_id.is_some() {
            ids.exam_id = set.exam_id;
        }
        info!(
            "Quiz started: lecture={}, questions={}, attempt={}",
            ids.lecture_id,
            set.questions.len(),
            ids.attempt_id
        );
        Ok(Self {
            ids,
            questions: set.questions,
            pass: Pass::Primary,
            index: 0,
            wrong: Vec::new(),
            correct_count: 0,
            selected: None,
            verdict: None,
            started_at: now,
            report: None,
        })
    }

    fn active(&self) -> &[Question] {
        match self.pass {
            Pass::Primary => &self.questions,
            Pass::Retry => &self.wrong,
        }
    }

    /// The question on screen. After `check()` this stays on the checked
    /// question even if a correct retry just removed it from the queue.
    pub fn current_question(&self) -> Option<&Question> {
        if self.report.is_some() {
            return None;
        }
        match &self.verdict {
            Some(verdict) => Some(&verdict.question),
            None => self.active().get(self.index),
        }
    }

    /// Records a tentative answer. Ignored once revealed or finished.
    pub fn select(&mut self, option: impl Into<String>) {
        if self.verdict.is_some() || self.report.is_some() {
            return;
        }
        self.selected = Some(option.into());
    }

    /// Selects the option at `index` of the current question, if it exists.
    pub fn select_index(&mut self, index: usize) {
        let option = self
            .current_question()
            .and_then(|q| q.options.get(index))
            .cloned();
        if let Some(option) = option {
            self.select(option);
        }
    }

    /// Judges the selected answer and reveals the verdict.
    ///
    /// Returns the verdict, or `None` when nothing was selected or the
    /// answer is already revealed.
    pub fn check(&mut self) -> Option<bool> {
        if self.verdict.is_some() || self.report.is_some() {
            return None;
        }
        let selected = self.selected.as_deref()?;
        let question = self.active().get(self.index)?.clone();
        let correct = question.is_correct(selected);

        if correct {
            self.correct_count += 1;
            if self.pass == Pass::Retry
                && let Some(pos) = self.wrong.iter().position(|q| q.id == question.id)
            {
                self.wrong.remove(pos);
            }
        } else {
            self.wrong.push(question.clone());
        }

        debug!(
            "Checked question {} ({:?} pass): correct={}, queued={}",
            question.id,
            self.pass,
            correct,
            self.wrong.len()
        );
        self.verdict = Some(Verdict { question, correct });
        Some(correct)
    }

    /// Moves on using the wall clock. See [`QuizSession::advance_at`].
    pub fn advance(&mut self) -> Option<CompletionReport> {
        self.advance_at(Utc::now())
    }

    /// Moves to the next question, flips into (or loops) the retry pass, or
    /// finishes. Returns the report exactly once, on the finishing call.
    ///
    /// Ignored until the current answer has been checked.
    pub fn advance_at(&mut self, now: DateTime<Utc>) -> Option<CompletionReport> {
        if self.verdict.is_none() || self.report.is_some() {
            return None;
        }
        self.selected = None;
        self.verdict = None;

        if self.index + 1 < self.active().len() {
            self.index += 1;
        } else if !self.wrong.is_empty() {
            if self.pass == Pass::Primary {
                info!("Primary pass done, retrying {} question(s)", self.wrong.len());
                self.pass = Pass::Retry;
            } else {
                debug!("Retry pass done, {} question(s) remain", self.wrong.len());
            }
            self.index = 0;
        } else {
            let report = self.finish(now);
            self.report = Some(report.clone());
            return Some(report);
        }
        None
    }

    fn finish(&self, now: DateTime<Utc>) -> CompletionReport {
        let total = self.total();
        let elapsed_secs = (now - self.started_at).num_seconds().max(0) as u64;
        info!(
            "Quiz complete: correct={}, total={}, elapsed={}s",
            self.correct_count, total, elapsed_secs
        );
        CompletionReport {
            // Duplicate retries can push the raw count past the set size.
            correct: self.correct_count.min(total),
            total,
            elapsed_secs,
            finished_at: now,
            ids: self.ids.clone(),
        }
    }

    pub fn ids(&self) -> &SessionIds {
        &self.ids
    }

    pub fn pass(&self) -> Pass {
        self.pass
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn wrong_queue(&self) -> &[Question] {
        &self.wrong
    }

    pub fn correct_count(&self) -> u32 {
        self.correct_count
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_revealed(&self) -> bool {
        self.verdict.is_some()
    }

    pub fn last_answer_correct(&self) -> Option<bool> {
        self.verdict.as_ref().map(|v| v.correct)
    }

    /// Size of the original set, never below 1.
    pub fn total(&self) -> u32 {
        (self.questions.len() as u32).max(1)
    }

    /// Length of the sequence currently being walked.
    pub fn active_len(&self) -> usize {
        self.active().len()
    }

    /// Fraction of the set answered correctly, for progress bars.
    pub fn progress_ratio(&self) -> f64 {
        (f64::from(self.correct_count) / f64::from(self.total())).min(1.0)
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn report(&self) -> Option<&CompletionReport> {
        self.report.as_ref()
    }

    pub fn is_complete(&self) -> bool {
        self.report.is_some()
    }
}
