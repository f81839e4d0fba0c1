//! Answer panel — renders the current request state
//!
//! One panel, four faces: a hint while idle, a waiting notice while the
//! request is in flight, the summary plus key details on success, and the
//! failure message (with a retry hint) on error.

use assistant_domain::RequestState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct AnswerWidget<'a> {
    state: &'a RequestState,
}

impl<'a> AnswerWidget<'a> {
    pub fn new(state: &'a RequestState) -> Self {
        Self { state }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        match self.state {
            RequestState::Idle => vec![Line::from(Span::styled(
                "Type a policy question and press Enter.",
                Style::default().fg(Color::DarkGray),
            ))],
            RequestState::Pending => vec![Line::from(Span::styled(
                "Asking the policy backend...",
                Style::default().fg(Color::Yellow),
            ))],
            RequestState::Succeeded(payload) => {
                let mut lines = vec![
                    Line::from(Span::styled(
                        "Summary",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )),
                    Line::from(payload.summary.clone()),
                ];
                if payload.has_bullets() {
                    lines.push(Line::from(""));
                    lines.push(Line::from(Span::styled(
                        "Key Details",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )));
                    for bullet in &payload.bullets {
                        lines.push(Line::from(format!("  * {bullet}")));
                    }
                }
                lines
            }
            RequestState::Failed(message) => vec![
                Line::from(Span::styled(
                    format!("Error: {message}"),
                    Style::default().fg(Color::Red),
                )),
                Line::from(Span::styled(
                    "Press Enter to retry.",
                    Style::default().fg(Color::DarkGray),
                )),
            ],
        }
    }
}

impl Widget for AnswerWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::ALL).title(" Answer ");
        Paragraph::new(self.lines())
            .block(block)
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
