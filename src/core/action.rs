//! # Actions
//!
//! Everything that can happen in the quiz becomes an `Action`.
//! Learner picks an option? That's `Action::Select(text)`.
//! The fetch resolves? That's `Action::QuestionsLoaded(result)`.
//!
//! `update()` takes the current state and an action, mutates the state and
//! returns an `Effect` for the adapter to carry out. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Actions that make no sense on the current screen are ignored.

use chrono::Utc;
use log::{debug, info, warn};

use crate::core::quiz::{CompletionReport, Pass, QuestionSet, QuizSession, SessionIds};
use crate::core::state::{App, Screen};

#[derive(Debug)]
pub enum Action {
    /// Begin the session: request the question fetch.
    Start,
    /// The fetch finished. Errors are carried as display strings.
    QuestionsLoaded(Result<QuestionSet, String>),
    Select(String),
    SelectIndex(usize),
    Check,
    Next,
    Quit,
}

/// Side effect the adapter must perform after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Spawn the question fetch for `app.lecture_id`.
    FetchQuestions,
    /// One-shot handoff of the final report to the results view.
    ShowResults(CompletionReport),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::Start => {
            app.screen = Screen::Loading;
            app.error = None;
            app.status_message = String::from("Memuat soal...");
            Effect::FetchQuestions
        }
        Action::QuestionsLoaded(result) => {
            if !app.is_loading() {
                warn!("Ignoring late question fetch result");
                return Effect::None;
            }
            load_questions(app, result);
            Effect::None
        }
        Action::Select(option) => {
            if let Screen::Active(session) = &mut app.screen {
                session.select(option);
            }
            Effect::None
        }
        Action::SelectIndex(index) => {
            if let Screen::Active(session) = &mut app.screen {
                session.select_index(index);
            }
            Effect::None
        }
        Action::Check => {
            if let Screen::Active(session) = &mut app.screen
                && let Some(correct) = session.check()
            {
                app.status_message = if correct {
                    String::from("Jawaban benar")
                } else {
                    String::from("Jawaban salah")
                };
            }
            Effect::None
        }
        Action::Next => {
            let Screen::Active(session) = &mut app.screen else {
                return Effect::None;
            };
            let was_revealed = session.is_revealed();
            if let Some(report) = session.advance() {
                app.status_message = String::from("Selesai");
                app.screen = Screen::Complete(report.clone());
                return Effect::ShowResults(report);
            }
            if was_revealed {
                app.status_message = status_for(session);
            }
            Effect::None
        }
        Action::Quit => Effect::Quit,
    }
}

fn load_questions(app: &mut App, result: Result<QuestionSet, String>) {
    let set = match result {
        Ok(set) => set,
        Err(e) => {
            warn!("Question fetch failed: {}", e);
            app.error = Some(e);
            app.screen = Screen::Unavailable;
            app.status_message = String::from("Soal tidak tersedia");
            return;
        }
    };

    let ids = SessionIds::new(app.lecture_id.clone(), app.slug.clone());
    match QuizSession::start(ids, set, Utc::now()) {
        Ok(session) => {
            app.status_message = status_for(&session);
            app.screen = Screen::Active(session);
        }
        Err(e) => {
            info!("Lecture {} has no questions: {}", app.lecture_id, e);
            app.screen = Screen::Unavailable;
            app.status_message = String::from("Soal tidak tersedia");
        }
    }
}

fn status_for(session: &QuizSession) -> String {
    match session.pass() {
        Pass::Primary => format!("Soal {}/{}", session.index() + 1, session.active_len()),
        Pass::Retry => format!(
            "Ulangi soal yang salah ({} tersisa)",
            session.wrong_queue().len()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{question, question_set, test_app};

    fn active_app() -> App {
        let mut app = test_app();
        update(&mut app, Action::Start);
        update(
            &mut app,
            Action::QuestionsLoaded(Ok(question_set(vec![
                question("q1", "A"),
                question("q2", "B"),
            ]))),
        );
        app
    }

    #[test]
    fn test_start_requests_fetch() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Start), Effect::FetchQuestions);
        assert!(app.is_loading());
    }

    #[test]
    fn test_loaded_questions_activate_session() {
        let app = active_app();
        let session = app.session().unwrap();
        assert_eq!(session.pass(), Pass::Primary);
        assert_eq!(app.status_message, "Soal 1/2");
    }

    #[test]
    fn test_empty_set_is_unavailable() {
        let mut app = test_app();
        update(&mut app, Action::Start);
        update(&mut app, Action::QuestionsLoaded(Ok(QuestionSet::default())));
        assert!(matches!(app.screen, Screen::Unavailable));
        assert!(app.error.is_none());
    }

    #[test]
    fn test_failed_fetch_is_unavailable() {
        let mut app = test_app();
        update(&mut app, Action::Start);
        update(
            &mut app,
            Action::QuestionsLoaded(Err("API error (HTTP 404): not found".to_string())),
        );
        assert!(matches!(app.screen, Screen::Unavailable));
        assert_eq!(app.error.as_deref(), Some("API error (HTTP 404): not found"));
    }

    #[test]
    fn test_late_fetch_result_is_ignored() {
        let mut app = active_app();
        let effect = update(&mut app, Action::QuestionsLoaded(Ok(QuestionSet::default())));
        assert_eq!(effect, Effect::None);
        assert!(app.session().is_some());
    }

    #[test]
    fn test_check_updates_status() {
        let mut app = active_app();
        update(&mut app, Action::Select("B. Option B".to_string()));
        update(&mut app, Action::Check);
        assert_eq!(app.status_message, "Jawaban salah");
        assert_eq!(app.session().unwrap().wrong_queue().len(), 1);
    }

    #[test]
    fn test_quiz_actions_ignored_while_loading() {
        let mut app = test_app();
        update(&mut app, Action::Start);
        assert_eq!(update(&mut app, Action::SelectIndex(0)), Effect::None);
        assert_eq!(update(&mut app, Action::Check), Effect::None);
        assert_eq!(update(&mut app, Action::Next), Effect::None);
        assert!(app.is_loading());
    }

    #[test]
    fn test_finishing_hands_off_report() {
        let mut app = active_app();
        update(&mut app, Action::SelectIndex(0));
        update(&mut app, Action::Check);
        update(&mut app, Action::Next);
        assert_eq!(app.status_message, "Soal 2/2");

        update(&mut app, Action::SelectIndex(1));
        update(&mut app, Action::Check);
        let effect = update(&mut app, Action::Next);

        let Effect::ShowResults(report) = effect else {
            panic!("expected ShowResults, got {effect:?}");
        };
        assert_eq!((report.correct, report.total), (2, 2));
        assert_eq!(report.ids.lecture_id, "lec-1");
        assert_eq!(app.report(), Some(&report));
    }

    #[test]
    fn test_retry_status_message() {
        let mut app = active_app();
        update(&mut app, Action::SelectIndex(1));
        update(&mut app, Action::Check);
        update(&mut app, Action::Next);
        update(&mut app, Action::SelectIndex(1));
        update(&mut app, Action::Check);
        update(&mut app, Action::Next);
        assert_eq!(app.status_message, "Ulangi soal yang salah (1 tersisa)");
    }

    #[test]
    fn test_quit_returns_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
