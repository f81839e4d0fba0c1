//! Status bar — request state indicator and key hints

use assistant_domain::RequestState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct StatusBarWidget<'a> {
    state: &'a RequestState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a RequestState) -> Self {
        Self { state }
    }

    fn indicator(&self) -> (&'static str, Color) {
        match self.state {
            RequestState::Idle => ("READY", Color::Blue),
            RequestState::Pending => ("ASKING", Color::Yellow),
            RequestState::Succeeded(_) => ("ANSWERED", Color::Green),
            RequestState::Failed(_) => ("FAILED", Color::Red),
        }
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (label, color) = self.indicator();

        let hint = if self.state.is_pending() {
            "waiting for the backend · Esc quit"
        } else {
            "Enter ask · Esc quit"
        };

        let line = Line::from(vec![
            Span::styled(
                format!(" {label} "),
                Style::default()
                    .fg(Color::Black)
                    .bg(color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(hint, Style::default().fg(Color::DarkGray)),
        ]);

        Paragraph::new(line).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assistant_domain::AnswerPayload;

    #[test]
    fn test_indicator_tracks_state() {
        assert_eq!(StatusBarWidget::new(&RequestState::Idle).indicator().0, "READY");
        assert_eq!(
            StatusBarWidget::new(&RequestState::Pending).indicator().0,
            "ASKING"
        );
        assert_eq!(
            StatusBarWidget::new(&RequestState::Succeeded(AnswerPayload::new("s", vec![])))
                .indicator()
                .0,
            "ANSWERED"
        );
        assert_eq!(
            StatusBarWidget::new(&RequestState::Failed("x".to_string()))
                .indicator()
                .0,
            "FAILED"
        );
    }
}
