//! Core terminal components.
//!
//! - **cursor**: Coordinate and relative cursor motion
//! - **escape**: Encoding and prefix decoding of cursor motion sequences
//! - **terminal**: The output port and the real console sink
//! - **term**: Virtual terminal emulator interpreting the same byte stream
//!
//! # Architecture
//!
//! ```text
//! Terminal (port)
//! ├── Console          (stdout, verbatim)
//! └── VirtualTerminal
//!     ├── ScreenBuffer (rows of characters)
//!     ├── Cursor       (position)
//!     └── parser       (motion sequences + literals)
//! ```

pub mod cursor;
pub mod escape;
pub mod term;
pub mod terminal;
