use crate::theme::Theme;
use crate::ui::constants::{CharBuffer, StyleBuffer, WIDE_CONTINUATION};
use crate::ui::frame::RenderFrame;
use ratatui::{
    style::Style,
    text::{Line, Span},
};
use unicode_width::UnicodeWidthChar;

// Cell grid that a RenderFrame is painted onto before handing it to ratatui
pub struct BufferCanvas {
    pub char_buffer: CharBuffer,
    pub style_buffer: StyleBuffer,
    pub width: usize,
    pub height: usize,
}

impl BufferCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            char_buffer: vec![vec![' '; width]; height],
            style_buffer: vec![vec![Style::default(); width]; height],
            width,
            height,
        }
    }

    /// Clear, then paint every op of `frame` in order; later ops win.
    pub fn from_frame(frame: &RenderFrame, theme: &Theme) -> Self {
        let mut canvas = Self::new(usize::from(frame.width), usize::from(frame.height));
        for op in frame.ops() {
            canvas.draw_styled_text(
                usize::from(op.col),
                usize::from(op.row),
                &op.text,
                theme.style(op.style),
            );
        }
        canvas
    }

    pub fn draw_styled_text(&mut self, x: usize, y: usize, text: &str, style: Style) {
        let mut cx = x;
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0);
            if w == 0 {
                continue;
            }
            if !self.in_bounds(cx + w - 1, y) {
                break;
            }
            self.char_buffer[y][cx] = ch;
            self.style_buffer[y][cx] = style;
            for extra in 1..w {
                self.char_buffer[y][cx + extra] = WIDE_CONTINUATION;
                self.style_buffer[y][cx + extra] = style;
            }
            cx += w;
        }
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        y < self.height && x < self.width
    }

    /// Visible text of one row, for tests and debugging.
    pub fn row_text(&self, y: usize) -> String {
        self.char_buffer
            .get(y)
            .map(|row| row.iter().filter(|&&c| c != WIDE_CONTINUATION).collect())
            .unwrap_or_default()
    }

    pub fn to_lines(&self) -> Vec<Line<'_>> {
        let mut lines = Vec::new();

        for (y, row) in self.char_buffer.iter().enumerate() {
            let mut spans = Vec::new();
            let mut current_style = Style::default();
            let mut current_text = String::new();

            for (x, &ch) in row.iter().enumerate() {
                if ch == WIDE_CONTINUATION {
                    continue;
                }
                let style = self.style_buffer[y][x];
                if style != current_style {
                    if !current_text.is_empty() {
                        spans.push(Span::styled(current_text.clone(), current_style));
                        current_text.clear();
                    }
                    current_style = style;
                }
                current_text.push(ch);
            }

            if !current_text.is_empty() {
                spans.push(Span::styled(current_text, current_style));
            }

            lines.push(Line::from(spans));
        }

        lines
    }
}
