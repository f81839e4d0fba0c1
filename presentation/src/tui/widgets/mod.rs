//! TUI widgets

mod answer;
mod input;
mod status_bar;

pub use answer::AnswerWidget;
pub use input::InputWidget;
pub use status_bar::StatusBarWidget;
