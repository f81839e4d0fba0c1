//! Presentation layer for policy-assistant
//!
//! This crate contains CLI definitions, console output formatting, the
//! one-shot progress spinner, and the interactive terminal UI.

pub mod cli;
pub mod output;
pub mod progress;
pub mod tui;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::AskSpinner;
pub use tui::TuiApp;
