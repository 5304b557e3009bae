//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner moves.
//! - **Otherwise**: sleeps up to 500ms, only redraws on events, terminal
//!   resize or a background action.

mod component;
mod components;
mod event;
mod text_wrap;
pub mod theme;
mod ui;

use log::{debug, info, warn};
use std::sync::{Arc, mpsc};

use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::quiz::CompletionReport;
use crate::core::state::{App, Screen};
use crate::source::QuestionSource;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    /// Dark palette when true. Toggled with `t`.
    pub dark: bool,
}

impl TuiState {
    pub fn new(dark: bool) -> Self {
        Self { dark }
    }
}

/// Runs the quiz until the learner quits. Returns the completion report if
/// the session was finished.
pub fn run(
    config: ResolvedConfig,
    source: Arc<dyn QuestionSource>,
) -> std::io::Result<Option<CompletionReport>> {
    let mut app = App::from_config(source, &config);
    let mut tui = TuiState::new(config.theme.is_dark());

    let mut terminal = ratatui::init();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let mut fetch_handle: Option<tokio::task::AbortHandle> = None;
    if update(&mut app, Action::Start) == Effect::FetchQuestions {
        fetch_handle = Some(spawn_fetch(&app, tx.clone()));
    }

    let mut report: Option<CompletionReport> = None;
    let start_time = std::time::Instant::now();
    let mut needs_redraw = true;

    let result = loop {
        let animating = app.is_loading();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            if let Err(e) = terminal.draw(|f| ui::draw_ui(f, &app, &tui, spinner_frame)) {
                break Err(e);
            }
            needs_redraw = false;
        }

        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                TuiEvent::Resize => {}
                TuiEvent::ToggleTheme => {
                    tui.dark = !tui.dark;
                    debug!("Theme toggled: dark={}", tui.dark);
                }
                other => {
                    if let Some(action) = action_for(&app, other) {
                        match update(&mut app, action) {
                            Effect::Quit => should_quit = true,
                            Effect::ShowResults(r) => {
                                info!("Session finished, results at {}", r.results_path());
                                report = Some(r);
                            }
                            Effect::FetchQuestions => {
                                fetch_handle = Some(spawn_fetch(&app, tx.clone()));
                            }
                            Effect::None => {}
                        }
                    }
                }
            }
        }

        if should_quit {
            break Ok(());
        }

        // Handle background task actions (the question fetch)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            update(&mut app, action);
        }
    };

    if let Some(handle) = fetch_handle {
        handle.abort();
    }
    ratatui::restore();
    result.map(|()| report)
}

/// Translates a key event into a core action for the current screen.
fn action_for(app: &App, event: TuiEvent) -> Option<Action> {
    if matches!(event, TuiEvent::Quit | TuiEvent::ForceQuit) {
        return Some(Action::Quit);
    }
    match &app.screen {
        Screen::Loading => None,
        Screen::Unavailable | Screen::Complete(_) => {
            matches!(event, TuiEvent::Submit).then_some(Action::Quit)
        }
        Screen::Active(session) => {
            if session.is_revealed() {
                return matches!(event, TuiEvent::Submit).then_some(Action::Next);
            }
            let option_count = session.current_question().map_or(0, |q| q.options.len());
            let selected = session.current_question().and_then(|q| {
                q.options
                    .iter()
                    .position(|o| Some(o.as_str()) == session.selected())
            });
            match event {
                TuiEvent::Submit => Some(Action::Check),
                TuiEvent::Pick(i) if i < option_count => Some(Action::SelectIndex(i)),
                TuiEvent::CursorUp if option_count > 0 => Some(Action::SelectIndex(
                    selected.map_or(0, |i| i.saturating_sub(1)),
                )),
                TuiEvent::CursorDown if option_count > 0 => Some(Action::SelectIndex(
                    selected.map_or(0, |i| (i + 1).min(option_count - 1)),
                )),
                _ => None,
            }
        }
    }
}

fn spawn_fetch(app: &App, tx: mpsc::Sender<Action>) -> tokio::task::AbortHandle {
    let source = app.source.clone();
    let lecture_id = app.lecture_id.clone();
    info!("Spawning question fetch via {} source", source.name());

    let handle = tokio::spawn(async move {
        let result = source
            .fetch_questions(&lecture_id)
            .await
            .map_err(|e| e.to_string());
        if tx.send(Action::QuestionsLoaded(result)).is_err() {
            warn!("Failed to deliver questions: receiver dropped");
        }
    });
    handle.abort_handle()
}
