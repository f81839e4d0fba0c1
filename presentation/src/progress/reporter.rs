//! Progress reporting for one-shot queries

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Spinner shown while a one-shot query is pending
pub struct AskSpinner {
    bar: ProgressBar,
}

impl AskSpinner {
    /// Start a spinner with the given message
    pub fn start(message: impl Into<String>) -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::spinner_style());
        bar.set_message(message.into());
        bar.enable_steady_tick(Duration::from_millis(120));
        Self { bar }
    }

    /// Stop the spinner and erase it from the terminal
    pub fn finish_and_clear(self) {
        self.bar.finish_and_clear();
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap()
    }
}
