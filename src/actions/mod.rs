mod editing;
mod file;
mod movement;
mod navigation;
mod view;

use crate::app::AppState;
use anyhow::Result;

// Re-export all public functions from submodules
pub use editing::*;
pub use file::*;
pub use movement::*;
pub use navigation::*;
pub use view::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Application control
    Quit,
    Resize(u16, u16),

    // Movement
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,

    // Editing
    InsertChar(char),
    SplitLine,
    Backspace,
    Indent,

    // Links
    FollowLink,

    // File operations
    Save,

    // Boot splash
    NextTip,
}

pub fn execute_action(action: Action, app: &mut AppState) -> Result<()> {
    if !matches!(action, Action::Resize(..)) {
        app.clear_message();
    }

    match action {
        Action::Quit => navigation::quit(app),
        Action::Resize(width, height) => view::resize(app, width, height),

        // Movement actions
        Action::MoveUp => movement::move_up(app),
        Action::MoveDown => movement::move_down(app),
        Action::MoveLeft => movement::move_left(app),
        Action::MoveRight => movement::move_right(app),

        // Editing
        Action::InsertChar(c) => editing::insert_char(app, c),
        Action::SplitLine => editing::split_line(app),
        Action::Backspace => editing::backspace(app),
        Action::Indent => editing::indent(app),

        Action::FollowLink => navigation::follow_link(app),

        Action::Save => file::save(app),

        Action::NextTip => view::next_tip(app),
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::app::{AppState, Screen};
    use crate::config::AppConfig;
    use crate::editor::EditorState;
    use crate::model::note_path_for;
    use crate::theme::Theme;
    use crate::vault::scan_vault;
    use std::path::Path;

    pub fn editor_app(vault: &Path, name: &str) -> AppState {
        let editor = EditorState::open(
            note_path_for(vault, name),
            vault.to_path_buf(),
            scan_vault(vault),
        )
        .unwrap();
        let mut app = AppState::with_screen(
            AppConfig::default(),
            Theme::default(),
            Screen::Editor(editor),
        );
        app.set_terminal_size(40, 6);
        app
    }

    pub fn editor(app: &AppState) -> &EditorState {
        match app.current() {
            Some(Screen::Editor(editor)) => editor,
            _ => panic!("top screen is not an editor"),
        }
    }
}
