//! Backend-independent frame description: an ordered list of styled text runs plus an
//! optional cursor. Screens fill one of these; the painter turns it into terminal cells.

use crate::theme::StyleTag;
use unicode_width::UnicodeWidthChar;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawOp {
    pub row: u16,
    pub col: u16,
    pub text: String,
    pub style: StyleTag,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderFrame {
    pub width: u16,
    pub height: u16,
    ops: Vec<DrawOp>,
    /// `(row, col)`
    cursor: Option<(u16, u16)>,
}

impl RenderFrame {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ops: Vec::new(),
            cursor: None,
        }
    }

    /// Rows available above the status line.
    pub fn text_height(&self) -> usize {
        usize::from(self.height.saturating_sub(1))
    }

    pub fn status_row(&self) -> usize {
        usize::from(self.height.saturating_sub(1))
    }

    /// Queue a text run. Runs starting outside the region are dropped and runs crossing the
    /// right edge are cut.
    pub fn draw(&mut self, row: usize, col: usize, text: &str, style: StyleTag) {
        if row >= usize::from(self.height) || col >= usize::from(self.width) || text.is_empty() {
            return;
        }
        let room = usize::from(self.width) - col;
        let text = fit_width(text, room);
        if text.is_empty() {
            return;
        }
        self.ops.push(DrawOp {
            row: row as u16,
            col: col as u16,
            text,
            style,
        });
    }

    pub fn set_cursor(&mut self, row: usize, col: usize) {
        if row < usize::from(self.height) && col < usize::from(self.width) {
            self.cursor = Some((row as u16, col as u16));
        }
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn cursor(&self) -> Option<(u16, u16)> {
        self.cursor
    }
}

/// Longest prefix of `text` that fits in `cells` terminal columns.
pub fn fit_width(text: &str, cells: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > cells {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_bounds_ops_are_dropped() {
        let mut frame = RenderFrame::new(10, 3);
        frame.draw(3, 0, "below", StyleTag::Primary);
        frame.draw(0, 10, "right", StyleTag::Primary);
        frame.draw(0, 0, "", StyleTag::Primary);
        assert!(frame.ops().is_empty());
    }

    #[test]
    fn test_long_text_is_cut_at_the_edge() {
        let mut frame = RenderFrame::new(10, 3);
        frame.draw(1, 6, "overflowing", StyleTag::Highlight);
        assert_eq!(frame.ops()[0].text, "over");
    }

    #[test]
    fn test_cursor_outside_is_ignored() {
        let mut frame = RenderFrame::new(10, 3);
        frame.set_cursor(5, 5);
        assert_eq!(frame.cursor(), None);
        frame.set_cursor(2, 9);
        assert_eq!(frame.cursor(), Some((2, 9)));
    }

    #[test]
    fn test_fit_width_counts_wide_chars() {
        assert_eq!(fit_width("日本語", 5), "日本");
        assert_eq!(fit_width("abc", 0), "");
    }
}
