//! Line blocks and dirty tracking
//!
//! A `Block` is the unit every element is built from: some lines of text, a
//! render state and the footprint its last emission left on screen. Blocks
//! are always written over their previous footprint, so a footprint never
//! loses rows and lines are padded wide enough to hide older, longer text.

use super::frame::Frame;

/// Split text into lines on `\n` or `\r\n`
pub fn split_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

fn text_width(text: &str) -> usize {
    text.chars().count()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderState {
    #[default]
    Dirty,
    Clean,
}

/// Screen area occupied by the last emission
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Footprint {
    pub rows: usize,
    pub width: usize,
}

/// Something laid out top to bottom in a render pass
pub trait Part {
    fn footprint(&self) -> Footprint;

    fn is_rendered(&self) -> bool;

    /// Mark stale; the next emission pads to at least `pad_width` columns
    fn invalidate(&mut self, pad_width: usize);

    /// Emit stale content or skip over it.
    ///
    /// Rows beyond the previous footprint cover whatever used to be below
    /// and are padded to at least `overflow_width`. Returns true when the
    /// footprint gained rows.
    fn render(&mut self, frame: &mut Frame, overflow_width: usize) -> bool;
}

/// Growth propagation across a sequence of parts.
///
/// Once a part gains rows everything after it moves down onto rows that
/// held other content, so those parts are invalidated and padded to the
/// widest content that could be underneath them.
#[derive(Debug)]
pub struct Cascade {
    /// Widest old content strictly below each part
    below: Vec<usize>,
    shifted: bool,
}

impl Cascade {
    /// `tail_width` is the width of whatever follows the whole sequence
    pub fn new(footprints: &[Footprint], tail_width: usize) -> Self {
        let mut below = vec![tail_width; footprints.len()];
        for i in (0..footprints.len().saturating_sub(1)).rev() {
            below[i] = below[i + 1].max(footprints[i + 1].width);
        }
        Self { below, shifted: false }
    }

    pub fn render<P: Part + ?Sized>(&mut self, index: usize, part: &mut P, frame: &mut Frame) -> bool {
        let below = self.below.get(index).copied().unwrap_or(0);
        if self.shifted {
            part.invalidate(below.max(part.footprint().width));
        }
        let grew = part.render(frame, below);
        self.shifted |= grew;
        grew
    }

    pub fn shifted(&self) -> bool {
        self.shifted
    }
}

/// Lines of text drawn with a fixed prefix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    prefix: String,
    lines: Vec<String>,
    state: RenderState,
    footprint: Footprint,
}

impl Block {
    pub fn new(prefix: &str, text: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            lines: split_lines(text),
            state: RenderState::Dirty,
            footprint: Footprint::default(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Lines as displayed, prefix included
    pub fn display_lines(&self) -> impl Iterator<Item = String> + '_ {
        self.lines.iter().map(move |line| format!("{}{}", self.prefix, line))
    }

    /// Replace the content; returns false if it was identical
    pub fn set_text(&mut self, text: &str) -> bool {
        let lines = split_lines(text);
        if lines == self.lines {
            return false;
        }
        self.lines = lines;
        self.state = RenderState::Dirty;
        true
    }

    pub fn state(&self) -> RenderState {
        self.state
    }

    /// Widest line, prefix included
    pub fn width(&self) -> usize {
        let prefix = text_width(&self.prefix);
        self.lines.iter().map(|line| prefix + text_width(line)).max().unwrap_or(prefix)
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }
}

impl Part for Block {
    fn footprint(&self) -> Footprint {
        self.footprint
    }

    fn is_rendered(&self) -> bool {
        self.state == RenderState::Clean
    }

    fn invalidate(&mut self, pad_width: usize) {
        self.state = RenderState::Dirty;
        self.footprint.width = self.footprint.width.max(pad_width);
    }

    fn render(&mut self, frame: &mut Frame, overflow_width: usize) -> bool {
        let old = self.footprint;
        if self.is_rendered() {
            frame.skip(old.rows);
            return false;
        }

        let rows = self.lines.len().max(old.rows);
        for row in 0..rows {
            let text = self.lines.get(row).map_or("", String::as_str);
            let width = if row < old.rows {
                old.width
            } else {
                old.width.max(overflow_width)
            };
            frame.line(&self.prefix, text, width);
        }

        self.footprint = Footprint {
            rows,
            width: self.width(),
        };
        self.state = RenderState::Clean;
        rows > old.rows
    }
}
