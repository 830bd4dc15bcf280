use crate::app::{AppState, Screen};
use crate::editor::EditorState;

/// Apply `edit` to the active editor and keep its cursor in view.
fn with_editor(app: &mut AppState, edit: impl FnOnce(&mut EditorState)) {
    let height = app.text_height();
    if let Some(Screen::Editor(editor)) = app.current_mut() {
        edit(editor);
        editor.buffer.scroll_to_cursor(height);
    }
}

pub fn insert_char(app: &mut AppState, c: char) {
    with_editor(app, |editor| editor.insert_char(c));
}

pub fn split_line(app: &mut AppState) {
    with_editor(app, EditorState::split_line);
}

pub fn backspace(app: &mut AppState) {
    with_editor(app, EditorState::backspace);
}

pub fn indent(app: &mut AppState) {
    with_editor(app, EditorState::indent);
}
