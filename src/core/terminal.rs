//! Terminal output port
//!
//! Everything the renderer emits goes through [`Terminal::print`]. The real
//! console forwards text verbatim; the virtual terminal interprets it.

use std::io::{self, Stdout, Write};

use crossterm::{queue, style::Print};
use thiserror::Error;

use super::escape::EscapeError;

/// Terminal port errors
#[derive(Error, Debug)]
pub enum TerminalError {
    #[error("Failed to write to terminal")]
    Io(#[from] io::Error),

    #[error("Malformed escape sequence in terminal output")]
    Escape(#[from] EscapeError),
}

pub type Result<T> = std::result::Result<T, TerminalError>;

/// Sink for rendered text and escape sequences
pub trait Terminal {
    fn print(&mut self, text: &str) -> Result<()>;
}

impl<T: Terminal + ?Sized> Terminal for &mut T {
    fn print(&mut self, text: &str) -> Result<()> {
        (**self).print(text)
    }
}

/// Raw transcript of everything printed
impl Terminal for String {
    fn print(&mut self, text: &str) -> Result<()> {
        self.push_str(text);
        Ok(())
    }
}

/// The process's real terminal.
///
/// Best effort: escape sequences are assumed to be honoured, nothing is read
/// back from the device.
pub struct Console<W: Write = Stdout> {
    out: W,
}

impl Console {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Terminal for Console<W> {
    fn print(&mut self, text: &str) -> Result<()> {
        queue!(self.out, Print(text))?;
        self.out.flush()?;
        Ok(())
    }
}
