use crate::tree::TreeView;
use crate::ui::editor::draw_linked_line;
use crate::ui::frame::RenderFrame;

pub struct TreeRenderer;

impl TreeRenderer {
    pub fn render(frame: &mut RenderFrame, tree: &TreeView) {
        let height = frame.text_height();
        let limit = usize::from(frame.width).saturating_sub(1);
        let spans = tree.visible_link_spans(height);

        for (row, line) in tree.visible(height).iter().enumerate() {
            draw_linked_line(frame, row, line, spans.iter().filter(|s| s.row == row), limit);
        }

        let (row, col) = tree.cursor();
        frame.set_cursor(row, col);
    }
}
