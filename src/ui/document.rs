//! Scrollable body content with row anchors.
//!
//! Views build a [`Document`]: the full list of lines for the active tab
//! plus, for every interactive item, the rows it occupies. The renderer
//! uses anchors to keep the focused item on screen, highlight it, and
//! register click areas for whatever is visible.

use ratatui::text::Line;

use crate::view_state::FocusTarget;

/// Rows occupied by an interactive item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub target: FocusTarget,
    /// First row, 0-based within the document
    pub row: usize,
    /// Number of rows
    pub height: usize,
}

impl Anchor {
    pub fn contains_row(&self, row: usize) -> bool {
        row >= self.row && row < self.row + self.height
    }
}

#[derive(Debug, Default)]
pub struct Document {
    pub lines: Vec<Line<'static>>,
    pub anchors: Vec<Anchor>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn push(&mut self, line: Line<'static>) {
        self.lines.push(line);
    }

    pub fn extend(&mut self, lines: impl IntoIterator<Item = Line<'static>>) {
        self.lines.extend(lines);
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    /// Append `lines` as the rows of `target`.
    pub fn anchored(&mut self, target: FocusTarget, lines: Vec<Line<'static>>) {
        let row = self.lines.len();
        let height = lines.len();
        self.lines.extend(lines);
        if height > 0 {
            self.anchors.push(Anchor { target, row, height });
        }
    }

    pub fn anchor(&self, target: FocusTarget) -> Option<&Anchor> {
        self.anchors.iter().find(|a| a.target == target)
    }

    /// Every line as plain text, for tests and snapshots.
    pub fn plain_text(&self) -> Vec<String> {
        self.lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }
}
