use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Span,
    widgets::Paragraph,
};

use crate::console::ui::app_state::StatusTone;
use crate::console::ui::components::Component;

/// The single "action message" line. Owned by whichever action family last
/// wrote it; the one-in-flight invariant guarantees no concurrent writer.
#[derive(Default)]
pub struct StatusLineView {
    text: Option<String>,
    tone: Option<StatusTone>,
}

impl StatusLineView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status(&mut self, text: Option<String>, tone: StatusTone) {
        self.text = text;
        self.tone = Some(tone);
    }
}

impl Component for StatusLineView {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let Some(text) = &self.text else {
            return;
        };
        let style = match self.tone {
            Some(StatusTone::Error) => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            Some(StatusTone::Reissued) => Style::default().fg(Color::Green),
            Some(StatusTone::Deleted) => Style::default().fg(Color::Red),
            _ => Style::default().fg(Color::Yellow),
        };
        f.render_widget(Paragraph::new(Span::styled(text.clone(), style)), area);
    }
}
