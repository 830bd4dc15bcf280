pub mod boot;
pub mod canvas;
pub mod constants;
pub mod editor;
pub mod frame;
pub mod graph;
pub mod help;
pub mod status_line;
pub mod tree;


use crate::app::{AppState, Screen};
use crate::theme::StyleTag;
use canvas::BufferCanvas;
use frame::RenderFrame;
use ratatui::{widgets::Paragraph, Frame};
use std::time::Instant;

/// Describe the active screen and its status line for a `width` x `height` region.
pub fn build_frame(app: &AppState, width: u16, height: u16, now: Instant) -> RenderFrame {
    let mut frame = RenderFrame::new(width, height);

    match app.current() {
        Some(Screen::Boot(boot)) => boot::BootRenderer::render(&mut frame, boot),
        Some(Screen::Editor(editor)) => editor::EditorRenderer::render(&mut frame, editor),
        Some(Screen::LinkTree(tree)) => tree::TreeRenderer::render(&mut frame, tree),
        Some(Screen::Graph(graph)) => graph::GraphRenderer::render(&mut frame, graph),
        Some(Screen::Help(help)) => help::HelpRenderer::render(&mut frame, help),
        None => {}
    }

    status_line::StatusLineRenderer::render(&mut frame, app, now);
    frame
}

pub fn render(frame: &mut Frame, app: &AppState) {
    let area = frame.area();
    let render_frame = build_frame(app, area.width, area.height, Instant::now());

    let canvas = BufferCanvas::from_frame(&render_frame, &app.theme);
    let paragraph = Paragraph::new(canvas.to_lines()).style(app.theme.style(StyleTag::Primary));
    frame.render_widget(paragraph, area);

    if let Some((row, col)) = render_frame.cursor() {
        frame.set_cursor_position((area.x + col, area.y + row));
    }
}
