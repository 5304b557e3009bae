use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Block;

use crate::core::state::{App, Screen};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{Notice, QuestionCard, ResultsView, TitleBar};
use crate::tui::theme::palette;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let p = palette(tui.dark);

    frame.render_widget(Block::default().style(Style::default().fg(p.text)), frame.area());

    let layout = Layout::vertical([Length(1), Length(1), Min(0), Length(1)]);
    let [title_area, _, main_area, hint_area] = layout.areas(frame.area());

    TitleBar::new(&app.lecture_id, &app.status_message, p).render(frame, title_area);

    match &app.screen {
        Screen::Loading => Notice::loading(spinner_frame, p).render(frame, main_area),
        Screen::Unavailable => {
            Notice::unavailable(app.error.as_deref(), p).render(frame, main_area)
        }
        Screen::Active(session) => QuestionCard::new(session, p).render(frame, main_area),
        Screen::Complete(report) => ResultsView::new(report, p).render(frame, main_area),
    }

    let hints = Line::from(Span::styled(key_hints(app), Style::default().fg(p.muted)));
    frame.render_widget(hints, hint_area);
}

/// Footer text for the current screen.
pub fn key_hints(app: &App) -> &'static str {
    match &app.screen {
        Screen::Loading => " q keluar",
        Screen::Active(session) if session.is_revealed() => {
            " Enter lanjut   t tema   q keluar"
        }
        Screen::Active(_) => " ↑↓/1-9 pilih   Enter cek   t tema   q keluar",
        Screen::Unavailable | Screen::Complete(_) => " Enter/q keluar   t tema",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::{question, question_set, test_app};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn rendered(app: &App, dark: bool) -> String {
        let backend = TestBackend::new(70, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let tui = TuiState { dark };
        terminal.draw(|f| draw_ui(f, app, &tui, 0)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_loading_screen() {
        let app = test_app();
        let out = rendered(&app, false);
        assert!(out.contains("Memuat soal..."));
        assert!(out.contains("q keluar"));
    }

    #[test]
    fn test_active_screen_hints_follow_reveal() {
        let mut app = test_app();
        update(&mut app, Action::Start);
        update(
            &mut app,
            Action::QuestionsLoaded(Ok(question_set(vec![question("q1", "A")]))),
        );
        assert!(rendered(&app, true).contains("Enter cek"));

        update(&mut app, Action::SelectIndex(0));
        update(&mut app, Action::Check);
        let out = rendered(&app, true);
        assert!(out.contains("Enter lanjut"));
        assert!(out.contains("Jawaban benar"));
    }

    #[test]
    fn test_unavailable_screen() {
        let mut app = test_app();
        update(&mut app, Action::Start);
        update(&mut app, Action::QuestionsLoaded(Err("network error: timeout".into())));
        let out = rendered(&app, false);
        assert!(out.contains("Belum ada soal tersedia"));
        assert!(out.contains("network error: timeout"));
    }
}
