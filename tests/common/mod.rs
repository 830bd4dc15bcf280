use noteweave::actions::{execute_action, Action};
use noteweave::app::{AppState, Screen};
use noteweave::config::AppConfig;
use noteweave::editor::EditorState;
use noteweave::model::note_path_for;
use noteweave::theme::Theme;
use noteweave::vault::scan_vault;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A throwaway vault on disk.
pub struct Vault {
    dir: TempDir,
}

#[allow(dead_code)]
impl Vault {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Build a vault from `(relative path, content)` pairs. Paths are given without `.md`.
    pub fn with_notes(notes: &[(&str, &str)]) -> Self {
        let vault = Self::new();
        for (name, content) in notes {
            vault.write(name, content);
        }
        vault
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn note_path(&self, name: &str) -> PathBuf {
        note_path_for(self.root(), name)
    }

    pub fn write(&self, name: &str, content: &str) {
        let path = self.note_path(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.note_path(name)).unwrap()
    }

    pub fn exists(&self, name: &str) -> bool {
        self.note_path(name).exists()
    }

    /// Session with an editor on `name`, as the splash would hand it over.
    pub fn editor_app(&self, name: &str) -> AppState {
        let editor = EditorState::open(
            self.note_path(name),
            self.root().to_path_buf(),
            scan_vault(self.root()),
        )
        .unwrap();
        let mut app = AppState::with_screen(
            AppConfig::default(),
            Theme::default(),
            Screen::Editor(editor),
        );
        app.set_terminal_size(80, 24);
        app
    }
}

#[allow(dead_code)]
pub fn run(app: &mut AppState, actions: impl IntoIterator<Item = Action>) {
    for action in actions {
        execute_action(action, app).unwrap();
    }
}

#[allow(dead_code)]
pub fn type_text(app: &mut AppState, text: &str) {
    run(app, text.chars().map(Action::InsertChar));
}

#[allow(dead_code)]
pub fn current_editor(app: &AppState) -> &EditorState {
    match app.current() {
        Some(Screen::Editor(editor)) => editor,
        other => panic!("expected an editor, found {:?}", other.map(Screen::mode)),
    }
}
