//! # Notice Component
//!
//! Centered message used for the loading and "no questions" screens.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;
use crate::tui::text_wrap::wrap_lines;
use crate::tui::theme::Palette;

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub struct Notice<'a> {
    pub headline: String,
    pub detail: Option<&'a str>,
    pub palette: &'a Palette,
}

impl<'a> Notice<'a> {
    pub fn loading(spinner_frame: usize, palette: &'a Palette) -> Self {
        Self {
            headline: format!("{} Memuat soal...", SPINNER[spinner_frame % SPINNER.len()]),
            detail: None,
            palette,
        }
    }

    /// Terminal empty state. `error` is the fetch failure, if there was one.
    pub fn unavailable(error: Option<&'a str>, palette: &'a Palette) -> Self {
        Self {
            headline: String::from("Belum ada soal tersedia untuk sesi ini."),
            detail: error,
            palette,
        }
    }
}

impl Component for Notice<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let headline = Style::default()
            .fg(self.palette.text)
            .add_modifier(Modifier::BOLD);
        let mut lines: Vec<Line> = wrap_lines(&self.headline, area.width)
            .into_iter()
            .map(|l| Line::from(Span::styled(l, headline)))
            .collect();
        if let Some(detail) = self.detail {
            let muted = Style::default().fg(self.palette.muted);
            lines.push(Line::default());
            lines.extend(
                wrap_lines(detail, area.width)
                    .into_iter()
                    .map(|l| Line::from(Span::styled(l, muted))),
            );
        }

        let height = (lines.len() as u16).min(area.height);
        let [center] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), center);
    }
}
