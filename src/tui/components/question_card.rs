//! # QuestionCard Component
//!
//! Renders the active question of a [`QuizSession`]:
//!
//! ```text
//! ████████████░░░░░░░░░░░░  1/3 benar     progress gauge
//! Soal 2 dari 3                           pass / position
//!
//! Apa hukum membaca basmalah ...          prompt
//!
//! [1] A. Wajib                            options (selection / verdict colours)
//! [2] B. Sunnah
//!
//! Jawaban Benar                           verdict + explanation
//! ...
//! ```
//!
//! The card borrows the session for one frame and never mutates it;
//! selection changes go through `core::action::update`.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Gauge, Paragraph, Wrap};

use crate::core::quiz::{Pass, QuizSession};
use crate::tui::component::Component;
use crate::tui::text_wrap::wrap_lines;
use crate::tui::theme::Palette;

pub struct QuestionCard<'a> {
    pub session: &'a QuizSession,
    pub palette: &'a Palette,
}

impl<'a> QuestionCard<'a> {
    pub fn new(session: &'a QuizSession, palette: &'a Palette) -> Self {
        Self { session, palette }
    }

    fn position_line(&self) -> Line<'static> {
        let s = self.session;
        let text = match s.pass() {
            Pass::Primary => format!("Soal {} dari {}", s.index() + 1, s.active_len()),
            Pass::Retry => format!(
                "Ulangan: soal {} dari {} (salah tersisa: {})",
                s.index() + 1,
                s.active_len().max(s.index() + 1),
                s.wrong_queue().len()
            ),
        };
        Line::from(Span::styled(text, Style::default().fg(self.palette.muted)))
    }

    fn option_style(&self, option: &str) -> Style {
        let p = self.palette;
        let is_selected = self.session.selected() == Some(option);
        match (is_selected, self.session.last_answer_correct()) {
            (true, None) => Style::default()
                .fg(p.on_primary)
                .bg(p.primary)
                .add_modifier(Modifier::BOLD),
            (true, Some(true)) => Style::default().fg(p.success_fg).bg(p.success_bg),
            (true, Some(false)) => Style::default().fg(p.error_fg).bg(p.error_bg),
            (false, _) => Style::default().fg(p.text),
        }
    }

    fn feedback_lines(&self, explanation: &str) -> Vec<Line<'static>> {
        let p = self.palette;
        match self.session.last_answer_correct() {
            Some(true) => {
                let mut lines = vec![Line::from(Span::styled(
                    "✓ Jawaban Benar",
                    Style::default()
                        .fg(p.success_fg)
                        .add_modifier(Modifier::BOLD),
                ))];
                let text = Style::default().fg(p.text);
                lines.extend(
                    explanation
                        .lines()
                        .map(|l| Line::from(Span::styled(l.to_string(), text))),
                );
                lines
            }
            Some(false) => vec![
                Line::from(Span::styled(
                    "✗ Jawaban Salah",
                    Style::default().fg(p.error_fg).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    "Soal ini akan diulang setelah putaran ini.",
                    Style::default().fg(p.muted),
                )),
            ],
            None => Vec::new(),
        }
    }
}

impl Component for QuestionCard<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(question) = self.session.current_question() else {
            return;
        };
        let p = self.palette;

        let prompt_lines = wrap_lines(&question.prompt, area.width);
        let prompt_height = prompt_lines.len() as u16;
        let options_height = question.options.len() as u16;
        let [gauge_area, position_area, _, prompt_area, _, options_area, _, feedback_area] =
            Layout::vertical([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(prompt_height),
                Constraint::Length(1),
                Constraint::Length(options_height),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .areas(area);

        let total = self.session.total();
        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(p.primary).bg(p.border))
            .ratio(self.session.progress_ratio())
            .label(format!(
                "{}/{} benar",
                self.session.correct_count().min(total),
                total
            ));
        frame.render_widget(gauge, gauge_area);
        frame.render_widget(self.position_line(), position_area);

        let prompt_lines: Vec<Line> = prompt_lines.into_iter().map(Line::from).collect();
        let prompt = Paragraph::new(prompt_lines)
            .style(Style::default().fg(p.text).add_modifier(Modifier::BOLD));
        frame.render_widget(prompt, prompt_area);

        let option_lines: Vec<Line> = question
            .options
            .iter()
            .enumerate()
            .map(|(i, option)| {
                Line::from(Span::styled(
                    format!("[{}] {}", i + 1, option),
                    self.option_style(option),
                ))
            })
            .collect();
        frame.render_widget(Paragraph::new(option_lines), options_area);

        let feedback = Paragraph::new(self.feedback_lines(&question.explanation))
            .wrap(Wrap { trim: true });
        frame.render_widget(feedback, feedback_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::quiz::{QuizSession, SessionIds};
    use crate::test_support::{question, question_set, t0};
    use crate::tui::theme::palette;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    fn session() -> QuizSession {
        QuizSession::start(
            SessionIds::new("lec-1", None),
            question_set(vec![question("q1", "A"), question("q2", "B")]),
            t0(),
        )
        .unwrap()
    }

    fn draw(session: &QuizSession, dark: bool) -> Buffer {
        let backend = TestBackend::new(60, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| QuestionCard::new(session, palette(dark)).render(f, f.area()))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn text(buffer: &Buffer) -> String {
        buffer.content().iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn test_renders_prompt_and_numbered_options() {
        let s = session();
        let out = text(&draw(&s, false));
        assert!(out.contains("Prompt of q1"));
        assert!(out.contains("[1] A. Option A"));
        assert!(out.contains("[4] D. Option D"));
        assert!(out.contains("Soal 1 dari 2"));
        assert!(out.contains("0/2 benar"));
    }

    #[test]
    fn test_selected_option_uses_primary_background() {
        let mut s = session();
        s.select("B. Option B");
        let buffer = draw(&s, false);
        let primary = palette(false).primary;
        assert!(buffer.content().iter().any(|c| c.bg == primary && c.symbol() == "B"));
    }

    #[test]
    fn test_correct_answer_shows_explanation() {
        let mut s = session();
        s.select("A. Option A");
        s.check();
        let buffer = draw(&s, true);
        let out = text(&buffer);
        assert!(out.contains("Jawaban Benar"));
        assert!(out.contains("Explanation of q1"));
        let success_bg = palette(true).success_bg;
        assert!(buffer.content().iter().any(|c| c.bg == success_bg));
    }

    #[test]
    fn test_wrong_answer_announces_retry() {
        let mut s = session();
        s.select("C. Option C");
        s.check();
        let out = text(&draw(&s, false));
        assert!(out.contains("Jawaban Salah"));
        assert!(out.contains("akan diulang"));
        assert!(!out.contains("Explanation of q1"));
    }

    #[test]
    fn test_retry_pass_position_line() {
        let mut s = session();
        s.select("C. Option C");
        s.check();
        s.advance_at(t0());
        s.select("B. Option B");
        s.check();
        s.advance_at(t0());
        let out = text(&draw(&s, false));
        assert!(out.contains("Ulangan: soal 1 dari 1"));
    }

    #[test]
    fn test_word_wrapped_prompt_is_not_clipped() {
        let mut q = question("q1", "A");
        q.prompt = "aaaaaa bbbbbb cccccc".to_string();
        let s = QuizSession::start(SessionIds::new("lec-1", None), question_set(vec![q]), t0())
            .unwrap();

        let backend = TestBackend::new(10, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| QuestionCard::new(&s, palette(false)).render(f, f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();

        let row = |y: u16| -> String {
            (0..10).map(|x| buffer[(x, y)].symbol()).collect::<String>()
        };
        // gauge, position, gap, then three prompt rows
        assert_eq!(row(3).trim_end(), "aaaaaa");
        assert_eq!(row(4).trim_end(), "bbbbbb");
        assert_eq!(row(5).trim_end(), "cccccc");
        assert!(row(7).starts_with("[1] A."));
    }
}
