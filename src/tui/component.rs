use ratatui::Frame;
use ratatui::layout::Rect;

/// Something that draws one screen region per frame.
///
/// Quiz components are built from borrowed props (a `&QuizSession`, a
/// `&CompletionReport`, a `&Palette`) right before drawing and dropped
/// afterwards. They never own quiz state; changes go through
/// `core::action::update`.
pub trait Component {
    /// Draw into `area`. `&mut self` leaves room for per-frame caches.
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
