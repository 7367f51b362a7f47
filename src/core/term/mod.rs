//! Virtual terminal
//!
//! Interprets the renderer's output exactly as a real terminal would and
//! keeps the resulting character grid in memory. `text()` is what a user
//! would be looking at.

pub mod parser;
pub mod state;

pub use state::{ScreenBuffer, TerminalState};

use tracing::trace;

use super::cursor::Coordinate;
use super::terminal::{Result, Terminal};

/// In-memory terminal emulator
#[derive(Debug, Clone, Default)]
pub struct VirtualTerminal {
    state: TerminalState,
}

impl VirtualTerminal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &TerminalState {
        &self.state
    }

    pub fn cursor(&self) -> Coordinate {
        self.state.cursor.position()
    }

    pub fn lines(&self) -> Vec<String> {
        self.state.lines()
    }

    pub fn text(&self) -> String {
        self.state.text()
    }
}

impl Terminal for VirtualTerminal {
    fn print(&mut self, text: &str) -> Result<()> {
        trace!(len = text.len(), "virtual terminal print");
        parser::interpret(text, &mut self.state)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::escape::{home, move_down, move_left, move_right, move_up};
    use crate::core::terminal::TerminalError;
    use pretty_assertions::assert_eq;

    fn printed(text: &str) -> VirtualTerminal {
        let mut term = VirtualTerminal::new();
        term.print(text).unwrap();
        term
    }

    #[test]
    fn test_empty_terminal() {
        let term = VirtualTerminal::new();
        assert_eq!(term.text(), "");
        assert_eq!(term.cursor(), Coordinate::ORIGIN);
    }

    #[test]
    fn test_left_then_overwrite() {
        let term = printed(&format!("H{}A", move_left(1)));
        assert_eq!(term.text(), "A");
    }

    #[test]
    fn test_left_right_then_overwrite() {
        let term = printed(&format!("Hello{}{}p", move_left(2), move_right(1)));
        assert_eq!(term.text(), "Hellp");
    }

    #[test]
    fn test_up_overwrites_previous_row() {
        let term = printed(&format!("A\n{}B", move_up(1)));
        assert_eq!(term.text(), "B\n");
    }

    #[test]
    fn test_clamped_motion() {
        let term = printed(&format!("ab\ncd{}{}", move_left(50), move_up(50)));
        assert_eq!(term.cursor(), Coordinate::ORIGIN);

        let term = printed(&format!("{}{}x", move_left(3), move_up(3)));
        assert_eq!(term.text(), "x");
    }

    #[test]
    fn test_down_and_right_grow_lazily() {
        let mut term = printed(&format!("a{}{}", move_down(2), move_right(2)));
        assert_eq!(term.text(), "a");

        term.print("b").unwrap();
        assert_eq!(term.lines(), vec!["a", "", "   b"]);
    }

    #[test]
    fn test_home_then_overwrite() {
        let term = printed(&format!("first\nsecond\n{}FIRST", home()));
        assert_eq!(term.text(), "FIRST\nsecond\n");
    }

    #[test]
    fn test_print_calls_accumulate() {
        let mut term = VirtualTerminal::new();
        term.print("\x1b").unwrap();
        term.print("[1Dz").unwrap();

        // Split sequences are not reassembled across calls
        assert_eq!(term.text(), "\x1b[1Dz");
    }

    #[test]
    fn test_malformed_sequence_error() {
        let mut term = VirtualTerminal::new();
        let err = term.print("\x1b[18446744073709551616B").unwrap_err();
        assert!(matches!(err, TerminalError::Escape(_)));
    }
}
