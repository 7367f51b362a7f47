//! Virtual terminal state
//!
//! A grid of character rows plus a cursor. Rows have no fixed width: a row
//! is as long as the rightmost character written to it, and anything past
//! that reads as blank. The grid only ever grows.

use crate::core::cursor::{Coordinate, Cursor};

/// Rows of characters as they would appear on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenBuffer {
    pub rows: Vec<Row>,
}

pub type Row = Vec<char>;

impl Default for ScreenBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenBuffer {
    /// A buffer holding a single empty row
    pub fn new() -> Self {
        Self { rows: vec![Row::new()] }
    }

    /// Append empty rows until `row` exists
    fn ensure_row(&mut self, row: usize) -> &mut Row {
        if row >= self.rows.len() {
            self.rows.resize_with(row + 1, Row::new);
        }
        &mut self.rows[row]
    }

    pub fn line(&self, row: usize) -> Option<String> {
        self.rows.get(row).map(|cells| cells.iter().collect())
    }
}

/// Pad `row` with spaces so that `col` is addressable as its end
fn pad_to(row: &mut Row, col: usize) {
    if row.len() < col {
        row.resize(col, ' ');
    }
}

/// Terminal state holding the grid and the cursor
#[derive(Debug, Clone, Default)]
pub struct TerminalState {
    pub screen: ScreenBuffer,
    pub cursor: Cursor,
}

impl TerminalState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write a character at the cursor, overwriting what is there
    pub fn put_char(&mut self, ch: char) {
        let Coordinate { x, y } = self.cursor.position();
        let row = self.screen.ensure_row(y);
        pad_to(row, x);

        if x == row.len() {
            row.push(ch);
        } else {
            row[x] = ch;
        }
        self.cursor.move_right(1);
    }

    /// Move to the start of the next row, creating it below the last row
    pub fn linefeed(&mut self) {
        if self.cursor.y() + 1 == self.screen.rows.len() {
            self.screen.rows.push(Row::new());
        }
        self.cursor.move_down(1);
        self.cursor.move_to_beginning_of_line();
    }

    /// Cursor to (0,0), content untouched
    pub fn cursor_home(&mut self) {
        self.cursor.go_to_origin();
    }

    /// Move up, stopping at row 0
    pub fn cursor_up(&mut self, n: usize) {
        let n = n.min(self.cursor.y());
        self.cursor.move_up(n);

        let Coordinate { x, y } = self.cursor.position();
        if let Some(row) = self.screen.rows.get_mut(y) {
            pad_to(row, x);
        }
    }

    /// Move down; rows are created lazily by the next write
    pub fn cursor_down(&mut self, n: usize) {
        self.cursor.move_down(n);
    }

    /// Move right; the row is padded lazily by the next write
    pub fn cursor_forward(&mut self, n: usize) {
        self.cursor.move_right(n);
    }

    /// Move left, stopping at column 0
    pub fn cursor_backward(&mut self, n: usize) {
        let n = n.min(self.cursor.x());
        self.cursor.move_left(n);
    }

    pub fn lines(&self) -> Vec<String> {
        self.screen.rows.iter().map(|row| row.iter().collect()).collect()
    }

    /// Rows joined with newlines
    pub fn text(&self) -> String {
        self.lines().join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(state: &mut TerminalState, text: &str) {
        for ch in text.chars() {
            state.put_char(ch);
        }
    }

    #[test]
    fn test_overwrite_keeps_row_length() {
        let mut state = TerminalState::new();
        write(&mut state, "abcd");
        state.cursor_backward(3);
        state.put_char('X');

        assert_eq!(state.text(), "aXcd");
        assert_eq!(state.screen.rows[0].len(), 4);
        assert_eq!(state.cursor.position(), Coordinate::new(2, 0));
    }

    #[test]
    fn test_clamped_left_and_up() {
        let mut state = TerminalState::new();
        write(&mut state, "ab");
        state.linefeed();
        state.put_char('c');

        state.cursor_backward(10);
        assert_eq!(state.cursor.x(), 0);

        state.cursor_up(10);
        assert_eq!(state.cursor.position(), Coordinate::ORIGIN);
    }

    #[test]
    fn test_write_past_extent_pads() {
        let mut state = TerminalState::new();
        state.cursor_down(2);
        state.cursor_forward(3);
        state.put_char('z');

        assert_eq!(state.lines(), vec!["", "", "   z"]);
    }

    #[test]
    fn test_up_pads_destination_row() {
        let mut state = TerminalState::new();
        state.put_char('a');
        state.linefeed();
        write(&mut state, "long line");
        state.cursor_up(1);

        assert_eq!(state.screen.line(0).as_deref(), Some("a        "));
        state.put_char('!');
        assert_eq!(state.screen.line(0).as_deref(), Some("a        !"));
    }

    #[test]
    fn test_linefeed_in_middle_does_not_add_rows() {
        let mut state = TerminalState::new();
        state.linefeed();
        state.linefeed();
        state.cursor_home();
        state.linefeed();

        assert_eq!(state.screen.rows.len(), 3);
        assert_eq!(state.cursor.position(), Coordinate::new(0, 1));
    }

    #[test]
    fn test_home_keeps_content() {
        let mut state = TerminalState::new();
        write(&mut state, "xy");
        state.linefeed();
        write(&mut state, "z");
        state.cursor_home();

        assert_eq!(state.cursor.position(), Coordinate::ORIGIN);
        assert_eq!(state.text(), "xy\nz");
    }
}
