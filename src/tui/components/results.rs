//! # Results Component
//!
//! Receives the one-shot `CompletionReport` and shows score, duration,
//! completion time and the portal route of the results page.

use chrono::Local;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Gauge, Padding, Paragraph};

use crate::core::quiz::CompletionReport;
use crate::core::text::{format_date_id, format_duration};
use crate::tui::component::Component;
use crate::tui::theme::Palette;

pub struct ResultsView<'a> {
    pub report: &'a CompletionReport,
    pub palette: &'a Palette,
}

impl<'a> ResultsView<'a> {
    pub fn new(report: &'a CompletionReport, palette: &'a Palette) -> Self {
        Self { report, palette }
    }

    fn rows(&self) -> Vec<Line<'static>> {
        let p = self.palette;
        let r = self.report;
        let label = Style::default().fg(p.muted);
        let value = Style::default().fg(p.text).add_modifier(Modifier::BOLD);
        let row = |name: &str, text: String| {
            Line::from(vec![
                Span::styled(format!("{name:<10}"), label),
                Span::styled(text, value),
            ])
        };

        let mut rows = vec![
            row("Benar", format!("{} dari {} ({}%)", r.correct, r.total, r.percentage())),
            row("Durasi", format_duration(r.elapsed_secs)),
            row("Selesai", format_date_id(&r.finished_at.with_timezone(&Local))),
        ];
        if let Some(exam_id) = &r.ids.exam_id {
            rows.push(row("Ujian", exam_id.clone()));
        }
        rows.push(row("Halaman", r.results_path()));
        rows
    }
}

impl Component for ResultsView<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let p = self.palette;
        let rows = self.rows();
        let height = rows.len() as u16 + 6;

        let [card] = Layout::vertical([Constraint::Length(height)])
            .flex(Flex::Center)
            .areas(area);
        let [card] = Layout::horizontal([Constraint::Max(64)])
            .flex(Flex::Center)
            .areas(card);

        let block = Block::bordered()
            .title(" Hasil Latihan ")
            .title_alignment(Alignment::Center)
            .border_style(Style::default().fg(p.border))
            .padding(Padding::horizontal(1));
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let [gauge_area, _, rows_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(p.success_fg).bg(p.border))
            .percent(self.report.percentage().min(100) as u16)
            .label(format!("{}%", self.report.percentage()));
        frame.render_widget(gauge, gauge_area);
        frame.render_widget(Paragraph::new(rows), rows_area);
    }
}
