//! Terminal UI for policy-assistant
//!
//! A single-screen form built with ratatui: a question input box, an answer
//! panel rendering the summary and key details, and a status bar. The query
//! controller runs inside the event loop; only the in-flight request is
//! spawned onto a background task.

mod app;
mod state;
mod widgets;

pub use app::TuiApp;
pub use state::TuiState;
pub use widgets::{AnswerWidget, InputWidget, StatusBarWidget};
