//! Document model and incremental rendering.
//!
//! - **container**: Owns elements and the terminal, runs render passes
//! - **element**: `Element` enum over the renderable kinds
//! - **textblock**: Free-standing multi-line text
//! - **list**: Heading plus individually editable items
//! - **block**: Lines, dirty state, screen footprint and growth cascades
//! - **frame**: Text and cursor motions produced by one pass
//!
//! # Render Model
//!
//! Elements are drawn top to bottom in insertion order. Each keeps track of
//! whether its current content is on screen; a pass rewrites stale content
//! in place and steps over everything else.

pub mod block;
pub mod container;
pub mod element;
pub mod frame;
pub mod list;
pub mod textblock;

pub use block::{split_lines, Footprint, Part, RenderState};
pub use container::{Container, ListHandle, TextBlockHandle};
pub use element::{DocumentError, Element};
pub use list::{ItemId, ListItem, UnorderedList};
pub use textblock::TextBlock;
