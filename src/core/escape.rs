//! Cursor motion escape sequences
//!
//! The renderer only needs five control sequences, a subset every VT100
//! descendant understands:
//!
//! | Motion | Bytes |
//! |--------|-------|
//! | home   | `ESC [ H` |
//! | up N   | `ESC [ N A` |
//! | down N | `ESC [ N B` |
//! | right N| `ESC [ N C` |
//! | left N | `ESC [ N D` |
//!
//! Decoding is prefix-only: a sequence is recognised when it starts exactly
//! at the read position, never searched for further ahead.

use std::fmt;
use thiserror::Error;

const CSI: &str = "\x1b[";

/// Escape codec errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EscapeError {
    #[error("Invalid count {digits:?} in cursor motion ESC [ {digits} {final_byte}")]
    InvalidCount { digits: String, final_byte: char },
}

/// A cursor motion expressible in the protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Home,
    Up(usize),
    Down(usize),
    Right(usize),
    Left(usize),
}

impl Motion {
    fn final_byte(&self) -> char {
        match self {
            Motion::Home => 'H',
            Motion::Up(_) => 'A',
            Motion::Down(_) => 'B',
            Motion::Right(_) => 'C',
            Motion::Left(_) => 'D',
        }
    }

    fn from_final_byte(byte: u8, n: usize) -> Option<Self> {
        match byte {
            b'A' => Some(Motion::Up(n)),
            b'B' => Some(Motion::Down(n)),
            b'C' => Some(Motion::Right(n)),
            b'D' => Some(Motion::Left(n)),
            _ => None,
        }
    }
}

impl fmt::Display for Motion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Motion::Home => write!(f, "{}H", CSI),
            Motion::Up(n) | Motion::Down(n) | Motion::Right(n) | Motion::Left(n) => {
                write!(f, "{}{}{}", CSI, n, self.final_byte())
            }
        }
    }
}

pub fn home() -> String {
    Motion::Home.to_string()
}

pub fn move_up(n: usize) -> String {
    Motion::Up(n).to_string()
}

pub fn move_down(n: usize) -> String {
    Motion::Down(n).to_string()
}

pub fn move_right(n: usize) -> String {
    Motion::Right(n).to_string()
}

pub fn move_left(n: usize) -> String {
    Motion::Left(n).to_string()
}

/// Decode a motion sitting exactly at the start of `input`.
///
/// Returns the motion and the number of bytes it occupies, or `None` when
/// the input does not begin with a complete known sequence.
pub fn decode_prefix(input: &str) -> Result<Option<(Motion, usize)>, EscapeError> {
    let Some(rest) = input.strip_prefix(CSI) else {
        return Ok(None);
    };
    if rest.starts_with('H') {
        return Ok(Some((Motion::Home, CSI.len() + 1)));
    }

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return Ok(None);
    }
    let Some(&final_byte) = rest.as_bytes().get(digits_len) else {
        return Ok(None);
    };

    // Checked before parsing so that an unknown final byte stays literal text
    if Motion::from_final_byte(final_byte, 0).is_none() {
        return Ok(None);
    }

    let digits = &rest[..digits_len];
    let n = digits.parse::<usize>().map_err(|_| EscapeError::InvalidCount {
        digits: digits.to_string(),
        final_byte: final_byte as char,
    })?;

    let motion = Motion::from_final_byte(final_byte, n).map(|m| (m, CSI.len() + digits_len + 1));
    Ok(motion)
}
