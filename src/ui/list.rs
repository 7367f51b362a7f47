//! Heading followed by indented items
//!
//! Items are kept in insertion order and addressed by that order, which is
//! never reused or changed. Editing an item marks it and every item after
//! it as stale: a different line count moves all of them on screen.

use tracing::debug;

use super::block::{Block, Cascade, Footprint, Part};
use super::element::DocumentError;
use super::frame::Frame;

/// Position of an item within its list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(usize);

impl ItemId {
    pub fn order(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub struct ListItem {
    order: usize,
    name: Option<String>,
    block: Block,
}

impl ListItem {
    pub fn id(&self) -> ItemId {
        ItemId(self.order)
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn lines(&self) -> &[String] {
        self.block.lines()
    }

    pub fn is_rendered(&self) -> bool {
        self.block.is_rendered()
    }
}

#[derive(Debug, Clone)]
pub struct UnorderedList {
    id: String,
    indent: String,
    heading: Block,
    items: Vec<ListItem>,
}

impl UnorderedList {
    pub fn new(id: impl Into<String>, heading: &str, indent: &str) -> Self {
        Self {
            id: id.into(),
            indent: indent.to_string(),
            heading: Block::new("", heading),
            items: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn heading(&self) -> &[String] {
        self.heading.lines()
    }

    pub fn is_heading_rendered(&self) -> bool {
        self.heading.is_rendered()
    }

    /// Replace the heading text
    pub fn edit(&mut self, heading: &str) {
        self.heading.set_text(heading);
    }

    pub fn new_item(&mut self, text: &str) -> ItemId {
        self.push_item(None, text)
    }

    /// Add an item that can later be found by `name`
    pub fn new_named_item(&mut self, name: impl Into<String>, text: &str) -> ItemId {
        self.push_item(Some(name.into()), text)
    }

    fn push_item(&mut self, name: Option<String>, text: &str) -> ItemId {
        let order = self.items.len();
        self.items.push(ListItem {
            order,
            name,
            block: Block::new(&self.indent, text),
        });
        ItemId(order)
    }

    /// Replace an item's text, invalidating it and every later item
    pub fn edit_item(&mut self, item: ItemId, text: &str) -> Result<(), DocumentError> {
        let order = item.order();
        let Some(target) = self.items.get_mut(order) else {
            return Err(DocumentError::ItemNotFound {
                list: self.id.clone(),
                order,
            });
        };

        target.block.set_text(text);
        for later in &mut self.items[order..] {
            later.block.invalidate(0);
        }
        debug!(list = %self.id, order, stale = self.items.len() - order, "list item edited");
        Ok(())
    }

    pub fn item(&self, item: ItemId) -> Option<&ListItem> {
        self.item_at(item.order())
    }

    pub fn item_at(&self, order: usize) -> Option<&ListItem> {
        self.items.get(order)
    }

    pub fn find_item(&self, name: &str) -> Option<ItemId> {
        self.items
            .iter()
            .find(|item| item.name.as_deref() == Some(name))
            .map(ListItem::id)
    }

    pub fn has_item(&self, name: &str) -> bool {
        self.find_item(name).is_some()
    }

    pub fn items(&self) -> &[ListItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Heading lines followed by indented item lines
    pub fn lines(&self) -> Vec<String> {
        self.heading
            .display_lines()
            .chain(self.items.iter().flat_map(|item| item.block.display_lines()))
            .collect()
    }

    pub fn width(&self) -> usize {
        self.blocks().map(Block::width).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.blocks().map(Block::height).sum()
    }

    fn blocks(&self) -> impl Iterator<Item = &Block> {
        std::iter::once(&self.heading).chain(self.items.iter().map(|item| &item.block))
    }

    fn blocks_mut(&mut self) -> impl Iterator<Item = &mut Block> {
        std::iter::once(&mut self.heading).chain(self.items.iter_mut().map(|item| &mut item.block))
    }
}

impl Part for UnorderedList {
    fn footprint(&self) -> Footprint {
        self.blocks().fold(Footprint::default(), |acc, block| {
            let footprint = block.footprint();
            Footprint {
                rows: acc.rows + footprint.rows,
                width: acc.width.max(footprint.width),
            }
        })
    }

    fn is_rendered(&self) -> bool {
        self.blocks().all(Block::is_rendered)
    }

    fn invalidate(&mut self, pad_width: usize) {
        for block in self.blocks_mut() {
            block.invalidate(pad_width);
        }
    }

    fn render(&mut self, frame: &mut Frame, overflow_width: usize) -> bool {
        let footprints: Vec<Footprint> = self.blocks().map(Block::footprint).collect();
        let mut cascade = Cascade::new(&footprints, overflow_width);

        for (index, block) in self.blocks_mut().enumerate() {
            cascade.render(index, block, frame);
        }
        cascade.shifted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(list: &mut UnorderedList) -> String {
        let mut frame = Frame::new();
        list.render(&mut frame, 0);
        frame.finish()
    }

    fn abc() -> (UnorderedList, [ItemId; 3]) {
        let mut list = UnorderedList::new("list", "Heading", "\t");
        let ids = [list.new_item("A"), list.new_item("B"), list.new_item("C")];
        render(&mut list);
        (list, ids)
    }

    #[test]
    fn test_lines() {
        let mut list = UnorderedList::new("list", "Tests\n=====", "\t");
        list.new_item("one");
        list.new_item("two\nlines");

        assert_eq!(list.lines(), vec!["Tests", "=====", "\tone", "\ttwo", "\tlines"]);
        assert_eq!(list.height(), 5);
        assert_eq!(list.width(), 6);
    }

    #[test]
    fn test_orders_are_stable() {
        let (list, [a, b, c]) = abc();

        assert_eq!((a.order(), b.order(), c.order()), (0, 1, 2));
        assert_eq!(list.item_at(1).map(ListItem::lines), Some(&["B".to_string()][..]));
        assert!(list.item_at(3).is_none());
    }

    #[test]
    fn test_edit_invalidates_later_items() {
        let (mut list, [a, b, c]) = abc();
        assert!(list.is_rendered());

        list.edit_item(b, "B2").unwrap();

        assert!(list.is_heading_rendered());
        assert!(list.item(a).unwrap().is_rendered());
        assert!(!list.item(b).unwrap().is_rendered());
        assert!(!list.item(c).unwrap().is_rendered());
        assert!(!list.is_rendered());
    }

    #[test]
    fn test_rerender_skips_clean_parts() {
        let (mut list, [_, b, _]) = abc();
        list.edit_item(b, "B2").unwrap();

        let output = render(&mut list);
        assert_eq!(output, "\x1b[2B\tB2\n\tC\n");
        assert!(!output.contains("\tA"));
        assert!(list.is_rendered());
    }

    #[test]
    fn test_heading_growth_shifts_items() {
        let (mut list, _) = abc();
        list.edit("Heading\nsub");

        let output = render(&mut list);
        // Every item lands one row lower, on top of its successor
        assert_eq!(output, "Heading\nsub    \n\tA\n\tB\n\tC\n");
    }

    #[test]
    fn test_missing_item() {
        let (mut list, _) = abc();
        let mut short = UnorderedList::new("short", "", "\t");
        assert_eq!(
            short.edit_item(ItemId(5), "x"),
            Err(DocumentError::ItemNotFound { list: "short".to_string(), order: 5 })
        );
        assert!(list.edit_item(ItemId(3), "x").is_err());
    }

    #[test]
    fn test_named_items() {
        let mut list = UnorderedList::new("pkg", "pkg", "\t");
        list.new_item("anonymous");
        let run = list.new_named_item("TestRun", "RUN TestRun");

        assert_eq!(list.find_item("TestRun"), Some(run));
        assert!(list.has_item("TestRun"));
        assert!(!list.has_item("TestMissing"));
        assert_eq!(list.item(run).and_then(ListItem::name), Some("TestRun"));
    }
}
