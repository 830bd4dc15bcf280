use crate::app::{AppState, Screen};
use crate::editor::EditorState;
use crate::errors::AppResult;
use crate::model::NoteGraph;
use std::path::Path;

/// Where a followed link leads.
enum Jump {
    /// Editor to editor: the new note takes the old one's place.
    Replace(EditorState),
    /// View to editor: quitting the editor returns to the view.
    Push(EditorState),
    Missing(String),
    Stay,
}

/// Leave the current screen. Quitting the splash abandons loading and the session.
pub fn quit(app: &mut AppState) {
    match app.current() {
        Some(Screen::Boot(boot)) => {
            boot.cancel();
            app.screens.clear();
            app.running = false;
        }
        Some(Screen::Editor(editor)) => {
            if editor.is_dirty() {
                log::warn!("Closing {} with unsaved changes", editor.path.display());
            }
            app.pop_screen();
        }
        _ => {
            app.pop_screen();
        }
    }
}

fn open_existing(vault: &Path, notes: &NoteGraph, name: Option<&str>) -> AppResult<Jump> {
    let Some(name) = name else {
        return Ok(Jump::Stay);
    };
    match notes.path_of(name) {
        Some(path) => {
            log::info!("Opening [[{}]] at {}", name, path.display());
            EditorState::open(path.to_path_buf(), vault.to_path_buf(), notes.clone())
                .map(Jump::Push)
        }
        None => Ok(Jump::Missing(name.to_string())),
    }
}

fn resolve_jump(app: &AppState) -> AppResult<Jump> {
    let height = app.text_height();
    match app.current() {
        Some(Screen::Editor(editor)) => Ok(editor
            .follow_link(height)?
            .map_or(Jump::Stay, Jump::Replace)),
        Some(Screen::LinkTree(tree)) => {
            let link = tree.current_link(height);
            open_existing(&tree.vault, &tree.notes, link.as_ref().map(|l| l.name.as_str()))
        }
        Some(Screen::Graph(graph)) => {
            open_existing(&graph.vault, &graph.notes, graph.note_at_cursor().map(String::as_str))
        }
        _ => Ok(Jump::Stay),
    }
}

/// Open the note under the cursor.
pub fn follow_link(app: &mut AppState) {
    match resolve_jump(app) {
        Ok(Jump::Replace(editor)) => app.replace_screen(Screen::Editor(editor)),
        Ok(Jump::Push(editor)) => app.push_screen(Screen::Editor(editor)),
        Ok(Jump::Missing(name)) => app.set_message(format!("[[{}]] has no note yet", name)),
        Ok(Jump::Stay) => {}
        Err(e) => {
            log::warn!("Could not follow link: {}", e);
            app.set_message(format!("Could not open link: {}", e));
        }
    }
}
