//! Input widget — single-line question box with a block cursor
//!
//! The prompt prefix and border turn yellow while a request is in flight.
//! The buffer stays editable during that time; only submission is gated.

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct InputWidget<'a> {
    state: &'a TuiState,
    pending: bool,
}

impl<'a> InputWidget<'a> {
    pub fn new(state: &'a TuiState, pending: bool) -> Self {
        Self { state, pending }
    }
}

impl Widget for InputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let color = if self.pending {
            Color::Yellow
        } else {
            Color::Green
        };

        let prompt_span = Span::styled(
            "ask> ",
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        );

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Question ")
            .style(Style::default().fg(color));

        let line = build_line(&self.state.input, self.state.cursor_pos, color, prompt_span);

        Paragraph::new(line).block(block).render(area, buf);
    }
}

/// Build the input line with a block cursor at the cursor position
fn build_line<'a>(
    text: &str,
    cursor_pos: usize,
    color: Color,
    prompt_span: Span<'a>,
) -> Line<'a> {
    let cursor_style = Style::default().fg(Color::Black).bg(color);
    let cursor_pos = cursor_pos.min(text.len());

    let mut spans: Vec<Span<'a>> = vec![prompt_span];

    let before = &text[..cursor_pos];
    let after = &text[cursor_pos..];

    spans.push(Span::raw(before.to_string()));

    if after.is_empty() {
        // Cursor at end of line — show block cursor on a space
        spans.push(Span::styled(" ", cursor_style));
    } else {
        let ch = after.chars().next().unwrap();
        let ch_len = ch.len_utf8();
        spans.push(Span::styled(after[..ch_len].to_string(), cursor_style));
        if ch_len < after.len() {
            spans.push(Span::raw(after[ch_len..].to_string()));
        }
    }

    Line::from(spans)
}
