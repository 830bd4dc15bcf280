use crate::app::{AppState, Screen};
use crate::editor::EditorState;
use crate::graph_view::GraphView;
use crate::theme::StyleTag;
use crate::tree::TreeView;
use crate::ui::constants::{STATUS_MARGIN, STATUS_SEPARATOR};
use crate::ui::frame::{fit_width, RenderFrame};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

pub const HELP_STATUS: &str = "    CTRL + Q to Quit";

/// Left text, right-aligned text, filling `width - 1` cells.
pub fn compose(left: &str, right: &str, width: usize) -> String {
    let room = width.saturating_sub(1);
    let pad = room.saturating_sub(left.width() + right.width());
    let line = format!("{}{}{}", left, " ".repeat(pad), right);
    fit_width(&line, room)
}

fn go_to(left: &mut String, name: Option<&str>) {
    if let Some(name) = name {
        left.push_str(STATUS_SEPARATOR);
        left.push_str(&format!("Go to: [[{}]]", name));
    }
}

// Status line renderer
pub struct StatusLineRenderer;

impl StatusLineRenderer {
    pub fn render(frame: &mut RenderFrame, app: &AppState, now: Instant) {
        let Some((mut left, right)) = Self::get_content(app, frame.text_height(), now) else {
            return;
        };
        if let Some(ref msg) = app.message {
            left.push_str(STATUS_SEPARATOR);
            left.push_str(msg);
        }

        let line = compose(&left, &right, usize::from(frame.width));
        frame.draw(frame.status_row(), 0, &line, StyleTag::HighlightInverse);
    }

    fn get_content(app: &AppState, height: usize, now: Instant) -> Option<(String, String)> {
        match app.current()? {
            Screen::Boot(_) => None,
            Screen::Editor(editor) => Some(Self::render_editor(
                editor,
                height,
                now,
                app.config.saved_flash(),
            )),
            Screen::LinkTree(tree) => Some(Self::render_tree(tree, height)),
            Screen::Graph(graph) => Some(Self::render_graph(graph)),
            Screen::Help(_) => Some((HELP_STATUS.to_string(), String::new())),
        }
    }

    fn render_editor(
        editor: &EditorState,
        height: usize,
        now: Instant,
        flash: Duration,
    ) -> (String, String) {
        let mut left = format!("{}{}", STATUS_MARGIN, editor.path.display());
        let link = editor.current_link(height);
        go_to(&mut left, link.as_ref().map(|l| l.name.as_str()));

        let (row, col) = editor.buffer.cursor();
        let position = format!("Line {}, Col {}{}", row + 1, col + 1, STATUS_MARGIN);
        let right = match editor.save_label(now, flash) {
            Some(label) => format!("{}{}{}", label, STATUS_SEPARATOR, position),
            None => position,
        };
        (left, right)
    }

    fn render_tree(tree: &TreeView, height: usize) -> (String, String) {
        let mut left = format!("{}{}", STATUS_MARGIN, tree.vault.display());
        let link = tree.current_link(height);
        go_to(&mut left, link.as_ref().map(|l| l.name.as_str()));

        let right = format!("Sort: {}{}", tree.sort.label(), STATUS_MARGIN);
        (left, right)
    }

    fn render_graph(graph: &GraphView) -> (String, String) {
        let mut left = format!("{}{}", STATUS_MARGIN, graph.vault.display());
        let totals = format!(
            "{} Notes, {} Visible{}",
            graph.notes.len(),
            graph.visible_count(),
            STATUS_MARGIN
        );

        let right = match graph.note_at_cursor() {
            Some(name) => {
                go_to(&mut left, Some(name));
                let (outgoing, incoming) = graph.link_counts(name);
                format!(
                    "Outgoing: {}  Incoming: {}{}{}",
                    outgoing, incoming, STATUS_SEPARATOR, totals
                )
            }
            None => totals,
        };
        (left, right)
    }
}
