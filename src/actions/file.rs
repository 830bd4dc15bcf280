use crate::app::{AppState, Screen};
use std::time::Instant;

/// Save the active note. Failures stay on screen rather than ending the session.
pub fn save(app: &mut AppState) {
    let Some(Screen::Editor(editor)) = app.current_mut() else {
        return;
    };
    if let Err(e) = editor.save(Instant::now()) {
        app.set_message(format!("Failed to save: {}", e));
    }
}
