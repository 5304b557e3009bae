//! # Application State
//!
//! Core business state for the quiz. No terminal types here; presentation
//! state (theme, option cursor) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── source: Arc<dyn QuestionSource>  // where questions come from
//! ├── lecture_id: String               // lecture being drilled
//! ├── slug: Option<String>             // masjid slug, for the results route
//! ├── screen: Screen                   // Loading | Unavailable | Active | Complete
//! ├── status_message: String           // status bar text
//! └── error: Option<String>            // last fetch failure
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use std::sync::Arc;

use crate::core::config::ResolvedConfig;
use crate::core::quiz::{CompletionReport, QuizSession};
use crate::source::QuestionSource;

/// Which screen the app is on. Mirrors the engine lifecycle:
/// `Loading → Unavailable | Active → Complete`.
#[derive(Debug)]
pub enum Screen {
    /// Waiting for the one question fetch.
    Loading,
    /// Fetch failed or returned no questions. Terminal.
    Unavailable,
    Active(QuizSession),
    /// Session finished; the report was handed off.
    Complete(CompletionReport),
}

pub struct App {
    pub source: Arc<dyn QuestionSource>,
    pub lecture_id: String,
    pub slug: Option<String>,
    pub screen: Screen,
    pub status_message: String,
    pub error: Option<String>,
}

impl App {
    pub fn new(source: Arc<dyn QuestionSource>, lecture_id: String, slug: Option<String>) -> Self {
        Self {
            source,
            lecture_id,
            slug,
            screen: Screen::Loading,
            status_message: String::from("Memuat soal..."),
            error: None,
        }
    }

    pub fn from_config(source: Arc<dyn QuestionSource>, config: &ResolvedConfig) -> Self {
        Self::new(source, config.lecture_id.clone(), config.slug.clone())
    }

    /// The running session, if the quiz is on screen.
    pub fn session(&self) -> Option<&QuizSession> {
        match &self.screen {
            Screen::Active(session) => Some(session),
            _ => None,
        }
    }

    pub fn report(&self) -> Option<&CompletionReport> {
        match &self.screen {
            Screen::Complete(report) => Some(report),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.screen, Screen::Loading)
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::test_app;

    #[test]
    fn test_app_new_defaults() {
        let app = test_app();
        assert_eq!(app.status_message, "Memuat soal...");
        assert!(app.is_loading());
        assert!(app.session().is_none());
        assert!(app.report().is_none());
        assert_eq!(app.lecture_id, "lec-1");
    }
}
