//! Render orchestration
//!
//! The container owns the elements and the terminal they are drawn on.
//! Elements are laid out top to bottom in insertion order and the cursor is
//! left at the start of the row below the document after every pass. A pass
//! moves up to the first stale element and walks down from there; nothing
//! above that element is touched.
//!
//! Repositioning is purely relative to that resting position. Content that
//! has scrolled off the top of a real terminal cannot be reached again.

use tracing::{debug, trace};

use super::block::{Cascade, Footprint, Part};
use super::element::Element;
use super::frame::Frame;
use super::list::UnorderedList;
use super::textblock::TextBlock;
use crate::config::RenderConfig;
use crate::core::terminal::{Result, Terminal};

/// Handle to a text block owned by a container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextBlockHandle(usize);

/// Handle to a list owned by a container
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListHandle(usize);

#[derive(Debug)]
pub struct Container<T: Terminal> {
    terminal: T,
    indent: String,
    elements: Vec<Element>,
}

impl<T: Terminal> Container<T> {
    pub fn new(terminal: T) -> Self {
        Self::with_config(terminal, &RenderConfig::default())
    }

    pub fn with_config(terminal: T, config: &RenderConfig) -> Self {
        Self {
            terminal,
            indent: config.indent.clone(),
            elements: Vec::new(),
        }
    }

    pub fn new_text_block(&mut self, id: impl Into<String>, text: &str) -> TextBlockHandle {
        self.elements.push(Element::TextBlock(TextBlock::new(id, text)));
        TextBlockHandle(self.elements.len() - 1)
    }

    pub fn new_unordered_list(&mut self, id: impl Into<String>, heading: &str) -> ListHandle {
        let list = UnorderedList::new(id, heading, &self.indent);
        self.elements.push(Element::UnorderedList(list));
        ListHandle(self.elements.len() - 1)
    }

    pub fn text_block(&self, handle: TextBlockHandle) -> Option<&TextBlock> {
        match self.elements.get(handle.0) {
            Some(Element::TextBlock(block)) => Some(block),
            _ => None,
        }
    }

    pub fn text_block_mut(&mut self, handle: TextBlockHandle) -> Option<&mut TextBlock> {
        match self.elements.get_mut(handle.0) {
            Some(Element::TextBlock(block)) => Some(block),
            _ => None,
        }
    }

    pub fn list(&self, handle: ListHandle) -> Option<&UnorderedList> {
        match self.elements.get(handle.0) {
            Some(Element::UnorderedList(list)) => Some(list),
            _ => None,
        }
    }

    pub fn list_mut(&mut self, handle: ListHandle) -> Option<&mut UnorderedList> {
        match self.elements.get_mut(handle.0) {
            Some(Element::UnorderedList(list)) => Some(list),
            _ => None,
        }
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn find_element(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|element| element.id() == id)
    }

    pub fn has_element_with_id(&self, id: &str) -> bool {
        self.find_element(id).is_some()
    }

    pub fn is_rendered(&self) -> bool {
        self.elements.iter().all(Element::is_rendered)
    }

    /// Bring the screen up to date with the elements
    pub fn render(&mut self) -> Result<()> {
        let Some(first) = self.elements.iter().position(|element| !element.is_rendered()) else {
            return Ok(());
        };

        let rewind: usize = self.elements[first..].iter().map(|e| e.footprint().rows).sum();
        debug!(first, rewind, elements = self.elements.len(), "render pass");

        let mut frame = Frame::new();
        frame.move_up(rewind);
        self.emit_from(first, frame)
    }

    /// Redraw everything starting from the terminal's home position
    pub fn repaint(&mut self) -> Result<()> {
        debug!(elements = self.elements.len(), "full repaint");
        for element in &mut self.elements {
            element.invalidate(0);
        }

        let mut frame = Frame::new();
        frame.home();
        self.emit_from(0, frame)
    }

    fn emit_from(&mut self, first: usize, mut frame: Frame) -> Result<()> {
        let footprints: Vec<Footprint> = self.elements[first..].iter().map(Part::footprint).collect();
        let mut cascade = Cascade::new(&footprints, 0);

        for (index, element) in self.elements[first..].iter_mut().enumerate() {
            if cascade.render(index, element, &mut frame) {
                debug!(id = element.id(), "element grew, shifting the rest");
            }

            let chunk = frame.take();
            if !chunk.is_empty() {
                trace!(id = element.id(), len = chunk.len(), "emit");
                self.terminal.print(&chunk)?;
            }
        }

        let tail = frame.finish();
        if !tail.is_empty() {
            self.terminal.print(&tail)?;
        }
        Ok(())
    }

    pub fn terminal(&self) -> &T {
        &self.terminal
    }

    pub fn terminal_mut(&mut self) -> &mut T {
        &mut self.terminal
    }

    pub fn into_terminal(self) -> T {
        self.terminal
    }
}
