//! # TitleBar Component
//!
//! Top status bar: page title, lecture id and the status message
//! computed by the reducer ("Soal 2/5", "Jawaban benar", ...).
//!
//! Stateless: all data arrives as props, so it renders the same way for
//! every screen.

use crate::tui::component::Component;
use crate::tui::theme::Palette;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar<'a> {
    pub lecture_id: &'a str,
    pub status_message: &'a str,
    pub palette: &'a Palette,
}

impl<'a> TitleBar<'a> {
    pub fn new(lecture_id: &'a str, status_message: &'a str, palette: &'a Palette) -> Self {
        Self {
            lecture_id,
            status_message,
            palette,
        }
    }

    fn text(&self) -> String {
        if self.status_message.is_empty() {
            format!("Latihan Soal (kajian: {})", self.lecture_id)
        } else {
            format!(
                "Latihan Soal (kajian: {}) | {}",
                self.lecture_id, self.status_message
            )
        }
    }
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default()
                .fg(self.palette.primary)
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}
