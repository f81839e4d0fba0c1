//! TUI application state
//!
//! Holds what the event loop needs besides the query controller itself:
//! the input buffer with its byte-indexed cursor, and the quit flag. The
//! request lifecycle is *not* duplicated here — it is read straight from
//! the controller at render time.

/// Editable state owned by the TUI event loop
#[derive(Debug, Default)]
pub struct TuiState {
    /// Raw input buffer, mirrored into the controller on every edit
    pub input: String,
    /// Cursor position as a byte offset into `input`
    pub cursor_pos: usize,
    /// Set when the user asks to leave
    pub should_quit: bool,
}

impl TuiState {
    pub fn new() -> Self {
        Self::default()
    }

    // -- Input editing --

    pub fn insert_char(&mut self, c: char) {
        self.input.insert(self.cursor_pos, c);
        self.cursor_pos += c.len_utf8();
    }

    pub fn delete_char(&mut self) {
        if self.cursor_pos > 0 {
            let prev_char_len = self.input[..self.cursor_pos]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.input.remove(self.cursor_pos - prev_char_len);
            self.cursor_pos -= prev_char_len;
        }
    }

    pub fn cursor_left(&mut self) {
        if self.cursor_pos > 0 {
            let prev_char_len = self.input[..self.cursor_pos]
                .chars()
                .next_back()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor_pos -= prev_char_len;
        }
    }

    pub fn cursor_right(&mut self) {
        if self.cursor_pos < self.input.len() {
            let next_char_len = self.input[self.cursor_pos..]
                .chars()
                .next()
                .map(|c| c.len_utf8())
                .unwrap_or(0);
            self.cursor_pos += next_char_len;
        }
    }

    pub fn cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor_pos = self.input.len();
    }
}
