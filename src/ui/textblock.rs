//! Free-standing block of text

use tracing::trace;

use super::block::{Block, Footprint, Part};
use super::frame::Frame;

#[derive(Debug, Clone)]
pub struct TextBlock {
    id: String,
    block: Block,
}

impl TextBlock {
    pub fn new(id: impl Into<String>, text: &str) -> Self {
        Self {
            id: id.into(),
            block: Block::new("", text),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn lines(&self) -> &[String] {
        self.block.lines()
    }

    /// Replace the text. Identical text leaves the block as it is.
    pub fn edit(&mut self, text: &str) {
        if !self.block.set_text(text) {
            trace!(id = %self.id, "text block edit without changes");
        }
    }

    pub fn width(&self) -> usize {
        self.block.width()
    }

    pub fn height(&self) -> usize {
        self.block.height()
    }
}

impl Part for TextBlock {
    fn footprint(&self) -> Footprint {
        self.block.footprint()
    }

    fn is_rendered(&self) -> bool {
        self.block.is_rendered()
    }

    fn invalidate(&mut self, pad_width: usize) {
        self.block.invalidate(pad_width);
    }

    fn render(&mut self, frame: &mut Frame, overflow_width: usize) -> bool {
        self.block.render(frame, overflow_width)
    }
}
