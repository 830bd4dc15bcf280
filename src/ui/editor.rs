use crate::buffer::LinkSpan;
use crate::editor::EditorState;
use crate::theme::StyleTag;
use crate::ui::frame::{fit_width, RenderFrame};
use unicode_width::UnicodeWidthStr;

/// Draw `line` at `row` with its link spans highlighted, keeping within `limit` cells.
pub fn draw_linked_line<'a>(
    frame: &mut RenderFrame,
    row: usize,
    line: &str,
    spans: impl IntoIterator<Item = &'a LinkSpan>,
    limit: usize,
) {
    let chars: Vec<char> = line.chars().collect();
    let mut segments = Vec::new();
    let mut last = 0;
    for span in spans {
        let start = span.start.min(chars.len());
        let end = span.end.min(chars.len());
        if start > last {
            segments.push((last, start, StyleTag::Primary));
        }
        segments.push((start, end, StyleTag::Highlight));
        last = end;
    }
    if last < chars.len() {
        segments.push((last, chars.len(), StyleTag::Primary));
    }

    let mut cell = 0;
    for (from, to, style) in segments {
        if cell >= limit {
            break;
        }
        let text: String = chars[from..to].iter().collect();
        frame.draw(row, cell, &fit_width(&text, limit - cell), style);
        cell += text.width();
    }
}

pub struct EditorRenderer;

impl EditorRenderer {
    pub fn render(frame: &mut RenderFrame, editor: &EditorState) {
        let height = frame.text_height();
        let limit = usize::from(frame.width).saturating_sub(1);
        let buffer = &editor.buffer;
        let offset = buffer.offset();
        let spans = buffer.visible_link_spans(height);

        for (screen_row, line) in buffer.lines().iter().skip(offset).take(height).enumerate() {
            let row = offset + screen_row;
            let line_spans = spans.iter().filter(|span| span.row == row);
            draw_linked_line(frame, screen_row, line, line_spans, limit);
        }

        let (row, col) = buffer.cursor();
        let Some(screen_row) = row.checked_sub(offset).filter(|r| *r < height) else {
            return;
        };
        let prefix: String = buffer.lines()[row].chars().take(col).collect();
        let cell = prefix.width();
        if cell < limit {
            frame.set_cursor(screen_row, cell);
        }
    }
}
