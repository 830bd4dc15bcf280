//! Line-oriented text buffer with a 2D cursor and a vertical scroll offset.
//!
//! Columns count characters, not bytes, so the cursor always sits on a char boundary.

use crate::model::NoteName;
use crate::parser::find_links;

pub const INDENT: &str = "    ";

/// A `[[link]]` located on a buffer line. Columns are char columns, `end` exclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkSpan {
    pub name: NoteName,
    pub row: usize,
    pub start: usize,
    pub end: usize,
}

impl LinkSpan {
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.row == row && self.start <= col && col < self.end
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<String>,
    row: usize,
    col: usize,
    offset: usize,
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self {
            lines: vec![String::new()],
            row: 0,
            col: 0,
            offset: 0,
        }
    }
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split on `\n`. A single trailing newline does not produce an extra empty line and
    /// `\r` is kept as ordinary content.
    pub fn from_text(content: &str) -> Self {
        let body = content.strip_suffix('\n').unwrap_or(content);
        if body.is_empty() {
            return Self::default();
        }
        Self {
            lines: body.split('\n').map(String::from).collect(),
            ..Self::default()
        }
    }

    /// Join lines with `\n`, without a trailing newline.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Place the cursor, clamping both coordinates into the buffer.
    pub fn set_cursor(&mut self, row: usize, col: usize) {
        self.row = row.min(self.lines.len() - 1);
        self.col = col.min(self.line_len(self.row));
        self.offset = self.offset.min(self.row);
    }

    fn line_len(&self, row: usize) -> usize {
        self.lines[row].chars().count()
    }

    fn byte_index(&self, row: usize, col: usize) -> usize {
        let line = &self.lines[row];
        line.char_indices()
            .nth(col)
            .map(|(i, _)| i)
            .unwrap_or(line.len())
    }

    pub fn insert_char(&mut self, ch: char) {
        let at = self.byte_index(self.row, self.col);
        self.lines[self.row].insert(at, ch);
        self.col += 1;
    }

    pub fn insert_str(&mut self, text: &str) {
        let at = self.byte_index(self.row, self.col);
        self.lines[self.row].insert_str(at, text);
        self.col += text.chars().count();
    }

    pub fn indent(&mut self) {
        self.insert_str(INDENT);
    }

    /// Break the current line at the cursor; the cursor moves to the start of the new line.
    pub fn split_line(&mut self) {
        let at = self.byte_index(self.row, self.col);
        let rest = self.lines[self.row].split_off(at);
        self.lines.insert(self.row + 1, rest);
        self.row += 1;
        self.col = 0;
    }

    /// Delete the char before the cursor, or join with the previous line at column 0.
    /// Returns false when there was nothing to delete.
    pub fn backspace(&mut self) -> bool {
        if self.col > 0 {
            let at = self.byte_index(self.row, self.col - 1);
            self.lines[self.row].remove(at);
            self.col -= 1;
            true
        } else if self.row > 0 {
            let line = self.lines.remove(self.row);
            self.row -= 1;
            self.col = self.line_len(self.row);
            self.lines[self.row].push_str(&line);
            true
        } else {
            false
        }
    }

    pub fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = self.line_len(self.row);
        }
    }

    pub fn move_right(&mut self) {
        if self.col < self.line_len(self.row) {
            self.col += 1;
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    pub fn move_up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
            self.col = self.col.min(self.line_len(self.row));
        } else {
            self.col = 0;
        }
    }

    pub fn move_down(&mut self) {
        if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = self.col.min(self.line_len(self.row));
        } else {
            self.col = self.line_len(self.row);
        }
    }

    /// Keep the cursor inside a window of `visible_height` rows. Scrolling down leaves the
    /// cursor on the last visible row.
    pub fn scroll_to_cursor(&mut self, visible_height: usize) {
        let height = visible_height.max(1);
        if self.row < self.offset {
            self.offset = self.row;
        } else if self.row >= self.offset + height {
            self.offset = self.row + 1 - height;
        }
    }

    /// Link spans on the lines currently inside the window.
    pub fn visible_link_spans(&self, visible_height: usize) -> Vec<LinkSpan> {
        let end = (self.offset + visible_height).min(self.lines.len());
        (self.offset..end)
            .flat_map(|row| line_link_spans(&self.lines[row], row))
            .collect()
    }

    /// The visible link the cursor is on, if any. The first match wins.
    pub fn link_under_cursor(&self, visible_height: usize) -> Option<LinkSpan> {
        self.visible_link_spans(visible_height)
            .into_iter()
            .find(|span| span.contains(self.row, self.col))
    }
}

/// Locate every link of `line`, in char columns.
pub fn line_link_spans(line: &str, row: usize) -> Vec<LinkSpan> {
    find_links(line)
        .map(|m| {
            let start = line[..m.start].chars().count();
            let width = line[m.start..m.end].chars().count();
            LinkSpan {
                name: m.name,
                row,
                start,
                end: start + width,
            }
        })
        .collect()
}
