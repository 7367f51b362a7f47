//! Output of a single render pass
//!
//! Collects lines and cursor motions. Skipped rows are folded into one
//! cursor-down motion which is only written once something follows it, so
//! runs of already rendered content cost a single escape sequence.

use crate::core::escape;

#[derive(Debug, Default)]
pub struct Frame {
    out: String,
    pending_down: usize,
}

impl Frame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn home(&mut self) {
        self.pending_down = 0;
        self.out.push_str(&escape::home());
    }

    pub fn move_up(&mut self, rows: usize) {
        self.flush_motion();
        if rows > 0 {
            self.out.push_str(&escape::move_up(rows));
        }
    }

    /// Step over `rows` rows that are already correct on screen
    pub fn skip(&mut self, rows: usize) {
        self.pending_down += rows;
    }

    /// Emit one row, right-padded with spaces to `width` columns
    pub fn line(&mut self, prefix: &str, text: &str, width: usize) {
        self.flush_motion();
        self.out.push_str(prefix);
        self.out.push_str(text);

        let written = prefix.chars().count() + text.chars().count();
        if written < width {
            self.out.extend(std::iter::repeat(' ').take(width - written));
        }
        self.out.push('\n');
    }

    /// Text produced since the last call, without pending skips
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.out)
    }

    /// Remaining text, with pending skips written out
    pub fn finish(mut self) -> String {
        self.flush_motion();
        self.out
    }

    fn flush_motion(&mut self) {
        if self.pending_down > 0 {
            self.out.push_str(&escape::move_down(self.pending_down));
            self.pending_down = 0;
        }
    }
}
