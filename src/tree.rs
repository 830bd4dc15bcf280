//! Link tree: every note with its incoming and outgoing links, as scrollable text.

use crate::buffer::{line_link_spans, LinkSpan};
use crate::model::{Incoming, NoteGraph, NoteName};
use std::cmp::Reverse;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    /// Note-name order of the graph
    #[default]
    None,
    /// Case-insensitive by name
    Alpha,
    /// Most links first
    Quantity,
}

impl SortMode {
    pub fn label(self) -> &'static str {
        match self {
            SortMode::None => "none",
            SortMode::Alpha => "alpha",
            SortMode::Quantity => "quantity",
        }
    }
}

/// Outbound link count of a note; dangling names count as zero.
fn outbound_count(notes: &NoteGraph, name: &str) -> usize {
    notes.links_from(name).len()
}

fn sort_references(names: &mut [NoteName], notes: &NoteGraph, sort: SortMode) {
    match sort {
        SortMode::None => {}
        SortMode::Alpha => names.sort_by_key(|n| n.to_lowercase()),
        SortMode::Quantity => names.sort_by_key(|n| Reverse(outbound_count(notes, n))),
    }
}

/// Render the tree text, one entry per note followed by a blank line.
pub fn build_tree_lines(notes: &NoteGraph, incoming: &Incoming, sort: SortMode) -> Vec<String> {
    let mut order: Vec<&NoteName> = notes.names().collect();
    match sort {
        SortMode::None => {}
        SortMode::Alpha => order.sort_by_key(|n| n.to_lowercase()),
        SortMode::Quantity => order.sort_by_key(|n| {
            let inbound = incoming.get(n.as_str()).map(Vec::len).unwrap_or(0);
            Reverse(outbound_count(notes, n) + inbound)
        }),
    }

    let mut lines = Vec::new();
    for name in order {
        lines.push(name.clone());

        let mut sources = incoming.get(name.as_str()).cloned().unwrap_or_default();
        sort_references(&mut sources, notes, sort);
        lines.push(format!("  Incoming ({})", sources.len()));
        lines.extend(sources.iter().map(|src| format!("    <- [[{}]]", src)));

        let mut targets = notes.links_from(name).to_vec();
        sort_references(&mut targets, notes, sort);
        lines.push(format!("  Outgoing ({})", targets.len()));
        lines.extend(targets.iter().map(|tgt| format!("    -> [[{}]]", tgt)));

        lines.push(String::new());
    }
    lines
}

/// Scrollable view over the tree text. The cursor is relative to the window, not the text.
#[derive(Debug, Clone)]
pub struct TreeView {
    pub vault: PathBuf,
    pub sort: SortMode,
    pub notes: NoteGraph,
    lines: Vec<String>,
    cursor_row: usize,
    cursor_col: usize,
    offset: usize,
}

impl TreeView {
    pub fn new(vault: PathBuf, notes: NoteGraph, sort: SortMode) -> Self {
        let incoming = notes.incoming();
        let lines = build_tree_lines(&notes, &incoming, sort);
        log::debug!("Link tree has {} lines for {} notes", lines.len(), notes.len());
        Self {
            vault,
            sort,
            notes,
            lines,
            cursor_row: 0,
            cursor_col: 0,
            offset: 0,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// `(row, col)` within the window.
    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_row, self.cursor_col)
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn visible(&self, height: usize) -> &[String] {
        let start = self.offset.min(self.lines.len());
        let end = (self.offset + height).min(self.lines.len());
        &self.lines[start..end]
    }

    /// Pull the cursor back inside the window after a resize.
    pub fn clamp_cursor(&mut self, height: usize, width: usize) {
        let rows = self.visible(height).len();
        self.cursor_row = self.cursor_row.min(rows.saturating_sub(1));
        self.cursor_col = self.cursor_col.min(width.saturating_sub(1));
    }

    pub fn move_up(&mut self) {
        if self.cursor_row > 0 {
            self.cursor_row -= 1;
        } else if self.offset > 0 {
            self.offset -= 1;
        } else {
            self.cursor_col = 0;
        }
    }

    pub fn move_down(&mut self, height: usize) {
        let rows = self.visible(height).len();
        if self.cursor_row + 1 < rows {
            self.cursor_row += 1;
        } else if self.offset + height < self.lines.len() {
            self.offset += 1;
        } else if let Some(last) = self.visible(height).last() {
            self.cursor_col = last.chars().count();
        }
    }

    pub fn move_left(&mut self) {
        self.cursor_col = self.cursor_col.saturating_sub(1);
    }

    pub fn move_right(&mut self, width: usize) {
        if self.cursor_col + 1 < width {
            self.cursor_col += 1;
        }
    }

    /// Link spans of the window, with `row` relative to the window.
    pub fn visible_link_spans(&self, height: usize) -> Vec<LinkSpan> {
        self.visible(height)
            .iter()
            .enumerate()
            .flat_map(|(row, line)| line_link_spans(line, row))
            .collect()
    }

    pub fn current_link(&self, height: usize) -> Option<LinkSpan> {
        self.visible_link_spans(height)
            .into_iter()
            .find(|span| span.contains(self.cursor_row, self.cursor_col))
    }
}
