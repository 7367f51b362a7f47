//! Renderable elements

use thiserror::Error;

use super::block::{Footprint, Part};
use super::frame::Frame;
use super::list::UnorderedList;
use super::textblock::TextBlock;

/// Document errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    #[error("List {list:?} has no item #{order}")]
    ItemNotFound { list: String, order: usize },
}

#[derive(Debug, Clone)]
pub enum Element {
    TextBlock(TextBlock),
    UnorderedList(UnorderedList),
}

impl Element {
    pub fn id(&self) -> &str {
        match self {
            Element::TextBlock(block) => block.id(),
            Element::UnorderedList(list) => list.id(),
        }
    }

    /// Current content, one entry per screen row
    pub fn lines(&self) -> Vec<String> {
        match self {
            Element::TextBlock(block) => block.lines().to_vec(),
            Element::UnorderedList(list) => list.lines(),
        }
    }

    pub fn width(&self) -> usize {
        match self {
            Element::TextBlock(block) => block.width(),
            Element::UnorderedList(list) => list.width(),
        }
    }

    pub fn height(&self) -> usize {
        match self {
            Element::TextBlock(block) => block.height(),
            Element::UnorderedList(list) => list.height(),
        }
    }

    fn part(&self) -> &dyn Part {
        match self {
            Element::TextBlock(block) => block,
            Element::UnorderedList(list) => list,
        }
    }

    fn part_mut(&mut self) -> &mut dyn Part {
        match self {
            Element::TextBlock(block) => block,
            Element::UnorderedList(list) => list,
        }
    }
}

impl Part for Element {
    fn footprint(&self) -> Footprint {
        self.part().footprint()
    }

    fn is_rendered(&self) -> bool {
        self.part().is_rendered()
    }

    fn invalidate(&mut self, pad_width: usize) {
        self.part_mut().invalidate(pad_width);
    }

    fn render(&mut self, frame: &mut Frame, overflow_width: usize) -> bool {
        self.part_mut().render(frame, overflow_width)
    }
}
