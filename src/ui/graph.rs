use crate::graph_view::GraphView;
use crate::theme::StyleTag;
use crate::ui::constants::symbols;
use crate::ui::frame::RenderFrame;

pub struct GraphRenderer;

impl GraphRenderer {
    pub fn render(frame: &mut RenderFrame, graph: &GraphView) {
        for (name, &(x, y)) in graph.positions() {
            let symbol = graph.symbol_for(name).to_string();
            frame.draw(usize::from(y), usize::from(x), &symbol, StyleTag::Primary);
        }

        let (x, y) = graph.cursor();
        let (x, y) = (usize::from(x), usize::from(y));
        if graph.note_at_cursor().is_some() {
            frame.draw(y, x, &symbols::CURSOR.to_string(), StyleTag::HighlightInverse);
        }
        frame.set_cursor(y, x);
    }
}
