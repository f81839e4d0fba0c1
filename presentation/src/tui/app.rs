//! TUI application — event loop owning the query controller
//!
//! Architecture:
//! ```text
//! TuiApp (select! loop)
//!   ├─ crossterm EventStream ── keystrokes → edit buffer / begin_submit()
//!   └─ JoinSet (≤ 1 task) ───── settled request → controller.resolve()
//! ```
//!
//! The controller lives inside the loop; the only suspension point is the
//! outbound request, spawned onto the JoinSet so editing stays responsive.
//! `begin_submit()`'s pending gate keeps the JoinSet at a single task: a
//! second Enter while a request is in flight is rejected before anything
//! is spawned.

use super::state::TuiState;
use super::widgets::{AnswerWidget, InputWidget, StatusBarWidget};
use assistant_application::{GatewayError, QueryController};
use assistant_domain::AnswerPayload;
use crossterm::{
    event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::stream::StreamExt;
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use std::io;
use tokio::task::JoinSet;

type InFlight = JoinSet<Result<AnswerPayload, GatewayError>>;

/// Main TUI application
pub struct TuiApp {
    controller: QueryController,
}

impl TuiApp {
    pub fn new(controller: QueryController) -> Self {
        Self { controller }
    }

    /// Run the TUI main loop, restoring the terminal on exit
    pub async fn run(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal).await;

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        let mut state = TuiState::new();
        let mut events = EventStream::new();
        let mut in_flight: InFlight = JoinSet::new();

        loop {
            terminal.draw(|frame| render(frame, &state, &self.controller))?;

            tokio::select! {
                maybe_event = events.next() => {
                    match maybe_event {
                        Some(Ok(Event::Key(key))) => {
                            self.handle_key(key, &mut state, &mut in_flight);
                        }
                        Some(Ok(_)) => {} // resize etc. — the redraw handles it
                        Some(Err(e)) => return Err(e),
                        None => break,
                    }
                }
                Some(joined) = in_flight.join_next() => {
                    match joined {
                        Ok(outcome) => self.controller.resolve(outcome),
                        // A panicked request task still settles the state
                        Err(e) => self.controller.resolve(Err(GatewayError::Other(
                            format!("request task failed: {e}"),
                        ))),
                    }
                }
            }

            if state.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent, state: &mut TuiState, in_flight: &mut InFlight) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => state.should_quit = true,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => state.should_quit = true,
            (KeyCode::Enter, _) => {
                // Rejected submissions (blank input, request in flight)
                // spawn nothing
                if let Some(question) = self.controller.begin_submit() {
                    let gateway = self.controller.gateway();
                    in_flight.spawn(async move { gateway.ask(&question).await });
                }
            }
            (KeyCode::Backspace, _) => {
                state.delete_char();
                self.controller.update_question(state.input.clone());
            }
            (KeyCode::Left, _) => state.cursor_left(),
            (KeyCode::Right, _) => state.cursor_right(),
            (KeyCode::Home, _) => state.cursor_home(),
            (KeyCode::End, _) => state.cursor_end(),
            (KeyCode::Char(c), _) => {
                state.insert_char(c);
                self.controller.update_question(state.input.clone());
            }
            _ => {}
        }
    }
}

fn render(frame: &mut Frame, state: &TuiState, controller: &QueryController) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            "Company Policy Assistant",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Ask questions about company policies",
            Style::default().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(header, chunks[0]);

    let request_state = controller.state();
    frame.render_widget(
        InputWidget::new(state, request_state.is_pending()),
        chunks[1],
    );
    frame.render_widget(AnswerWidget::new(request_state), chunks[2]);
    frame.render_widget(StatusBarWidget::new(request_state), chunks[3]);
}
