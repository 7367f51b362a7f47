//! Output stream interpreter
//!
//! Consumes text left to right. Each step takes either one complete motion
//! sequence found exactly at the read position, or one literal character.

use tracing::warn;

use super::state::TerminalState;
use crate::core::escape::{self, EscapeError, Motion};

/// Apply `text` to `state`
pub fn interpret(text: &str, state: &mut TerminalState) -> Result<(), EscapeError> {
    let mut rest = text;

    while let Some(ch) = rest.chars().next() {
        let decoded = escape::decode_prefix(rest).map_err(|e| {
            warn!("Rejecting terminal output: {}", e);
            e
        })?;

        if let Some((motion, len)) = decoded {
            apply(motion, state);
            rest = &rest[len..];
            continue;
        }

        if ch == '\n' {
            state.linefeed();
        } else {
            state.put_char(ch);
        }
        rest = &rest[ch.len_utf8()..];
    }

    Ok(())
}

fn apply(motion: Motion, state: &mut TerminalState) {
    match motion {
        Motion::Home => state.cursor_home(),
        Motion::Up(n) => state.cursor_up(n),
        Motion::Down(n) => state.cursor_down(n),
        Motion::Right(n) => state.cursor_forward(n),
        Motion::Left(n) => state.cursor_backward(n),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cursor::Coordinate;

    fn run(text: &str) -> TerminalState {
        let mut state = TerminalState::new();
        interpret(text, &mut state).unwrap();
        state
    }

    #[test]
    fn test_motion_sequences() {
        let state = run("abc\x1b[2Dx\x1b[5Cy");
        assert_eq!(state.text(), "axc    y");

        let state = run("1\n2\n3\x1b[2A\x1b[HX");
        assert_eq!(state.text(), "X\n2\n3");
    }

    #[test]
    fn test_unknown_sequence_is_literal() {
        let state = run("\x1b[3mhi");
        assert_eq!(state.text(), "\x1b[3mhi");
        assert_eq!(state.cursor.position(), Coordinate::new(6, 0));
    }

    #[test]
    fn test_multibyte_characters_take_one_column() {
        let state = run("héllo\x1b[4Dë");
        assert_eq!(state.text(), "hëllo");
    }

    #[test]
    fn test_malformed_count_is_rejected() {
        let mut state = TerminalState::new();
        let result = interpret("a\x1b[123456789012345678901234567890A", &mut state);

        assert!(result.is_err());
        assert_eq!(state.text(), "a");
    }
}
