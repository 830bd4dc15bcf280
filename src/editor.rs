//! Single-note editing session: a buffer bound to a file, its save state, and the vault
//! snapshot used to resolve `[[links]]`.

use crate::buffer::{LinkSpan, TextBuffer};
use crate::errors::{AppError, AppResult};
use crate::io::{create_empty_note, read_note, write_note};
use crate::model::{note_path_for, NoteGraph};
use crate::vault::scan_vault;
use std::path::{Component, Path, PathBuf};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveState {
    Saved,
    Unsaved,
    Failed,
}

#[derive(Debug, Clone)]
pub struct EditorState {
    pub path: PathBuf,
    pub vault: PathBuf,
    pub buffer: TextBuffer,
    pub notes: NoteGraph,
    save_state: SaveState,
    last_saved: Option<Instant>,
}

impl EditorState {
    /// Load `path` into a fresh buffer. A missing file opens as an empty note.
    pub fn open(path: PathBuf, vault: PathBuf, notes: NoteGraph) -> AppResult<Self> {
        let content = read_note(&path).map_err(|e| AppError::io(&path, e))?;
        if content.is_none() {
            log::debug!("{} does not exist yet, starting empty", path.display());
        }
        let buffer = content
            .as_deref()
            .map(TextBuffer::from_text)
            .unwrap_or_default();

        Ok(Self {
            path,
            vault,
            buffer,
            notes,
            save_state: SaveState::Saved,
            last_saved: None,
        })
    }

    pub fn save_state(&self) -> SaveState {
        self.save_state
    }

    pub fn is_dirty(&self) -> bool {
        self.save_state != SaveState::Saved
    }

    /// Write the buffer to disk. A failure is remembered so the status bar never claims
    /// the note was saved.
    pub fn save(&mut self, now: Instant) -> AppResult<()> {
        match write_note(&self.path, &self.buffer.to_text()) {
            Ok(()) => {
                self.save_state = SaveState::Saved;
                self.last_saved = Some(now);
                log::info!("Saved {}", self.path.display());
                Ok(())
            }
            Err(e) => {
                self.save_state = SaveState::Failed;
                self.last_saved = None;
                log::error!("Saving {} failed: {}", self.path.display(), e);
                Err(AppError::io(&self.path, e))
            }
        }
    }

    /// Save indicator for the status bar, if any.
    pub fn save_label(&self, now: Instant, flash: Duration) -> Option<&'static str> {
        match self.save_state {
            SaveState::Unsaved => Some("[Unsaved]"),
            SaveState::Failed => Some("[Save Failed]"),
            SaveState::Saved => self
                .last_saved
                .filter(|at| now.saturating_duration_since(*at) < flash)
                .map(|_| "[Progress Saved]"),
        }
    }

    fn touch(&mut self) {
        self.save_state = SaveState::Unsaved;
    }

    pub fn insert_char(&mut self, ch: char) {
        self.buffer.insert_char(ch);
        self.touch();
    }

    pub fn split_line(&mut self) {
        self.buffer.split_line();
        self.touch();
    }

    pub fn indent(&mut self) {
        self.buffer.indent();
        self.touch();
    }

    pub fn backspace(&mut self) {
        if self.buffer.backspace() {
            self.touch();
        }
    }

    pub fn current_link(&self, visible_height: usize) -> Option<LinkSpan> {
        self.buffer.link_under_cursor(visible_height)
    }

    /// File behind a link name. Unknown notes are created empty under the vault root.
    pub fn resolve_link(&self, name: &str) -> AppResult<PathBuf> {
        if let Some(path) = self.notes.path_of(name) {
            return Ok(path.to_path_buf());
        }

        if !is_safe_note_name(name) {
            return Err(AppError::InvalidNoteName(name.to_string()));
        }
        let path = note_path_for(&self.vault, name);
        create_empty_note(&path).map_err(|e| AppError::io(&path, e))?;
        log::info!("Created note {} for [[{}]]", path.display(), name);
        Ok(path)
    }

    /// Open the note linked under the cursor in a fresh editor. Unsaved edits of this
    /// editor are not carried over.
    pub fn follow_link(&self, visible_height: usize) -> AppResult<Option<EditorState>> {
        let Some(link) = self.current_link(visible_height) else {
            return Ok(None);
        };
        if self.is_dirty() {
            log::warn!(
                "Leaving {} with unsaved changes for [[{}]]",
                self.path.display(),
                link.name
            );
        }

        let target = self.resolve_link(&link.name)?;
        let notes = scan_vault(&self.vault);
        EditorState::open(target, self.vault.clone(), notes).map(Some)
    }
}

/// A link name may create nested notes but must stay inside the vault.
fn is_safe_note_name(name: &str) -> bool {
    !name.trim().is_empty()
        && Path::new(name)
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn editor_for(dir: &TempDir, name: &str) -> EditorState {
        let notes = scan_vault(dir.path());
        EditorState::open(
            note_path_for(dir.path(), name),
            dir.path().to_path_buf(),
            notes,
        )
        .unwrap()
    }

    #[test]
    fn test_missing_file_opens_empty_and_is_not_created() {
        let dir = TempDir::new().unwrap();
        let editor = editor_for(&dir, "Fresh");

        assert_eq!(editor.buffer.lines(), [""]);
        assert!(!editor.is_dirty());
        assert!(!dir.path().join("Fresh.md").exists());
    }

    #[test]
    fn test_edit_and_save() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("N.md"), "abc").unwrap();
        let mut editor = editor_for(&dir, "N");

        editor.insert_char('x');
        editor.split_line();
        assert!(editor.is_dirty());

        let now = Instant::now();
        editor.save(now).unwrap();
        assert_eq!(editor.save_state(), SaveState::Saved);
        assert_eq!(fs::read_to_string(dir.path().join("N.md")).unwrap(), "x\nabc");
    }

    #[test]
    fn test_save_labels() {
        let dir = TempDir::new().unwrap();
        let mut editor = editor_for(&dir, "N");
        let flash = Duration::from_secs(3);
        let now = Instant::now();

        assert_eq!(editor.save_label(now, flash), None);

        editor.indent();
        assert_eq!(editor.save_label(now, flash), Some("[Unsaved]"));

        editor.save(now).unwrap();
        assert_eq!(editor.save_label(now, flash), Some("[Progress Saved]"));
        assert_eq!(editor.save_label(now + Duration::from_secs(4), flash), None);
    }

    #[test]
    fn test_failed_save_is_reported() {
        let dir = TempDir::new().unwrap();
        let mut editor = editor_for(&dir, "N");
        // A directory now sits where the note file should be written
        fs::create_dir(dir.path().join("N.md")).unwrap();

        editor.insert_char('a');
        let now = Instant::now();
        assert!(matches!(editor.save(now), Err(AppError::Io { .. })));
        assert_eq!(editor.save_state(), SaveState::Failed);
        assert_eq!(
            editor.save_label(now, Duration::from_secs(3)),
            Some("[Save Failed]")
        );
    }

    #[test]
    fn test_backspace_at_start_keeps_clean_state() {
        let dir = TempDir::new().unwrap();
        let mut editor = editor_for(&dir, "N");
        editor.backspace();
        assert!(!editor.is_dirty());
    }

    #[test]
    fn test_follow_existing_link() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("A.md"), "go [[B]]").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("B.md"), "hello from B").unwrap();

        let mut editor = editor_for(&dir, "A");
        editor.buffer.set_cursor(0, 4);

        let next = editor.follow_link(10).unwrap().unwrap();
        assert!(next.path.ends_with("sub/B.md"));
        assert_eq!(next.buffer.lines(), ["hello from B"]);
        assert_eq!(next.buffer.cursor(), (0, 0));
    }

    #[test]
    fn test_follow_dangling_link_creates_note() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("A.md"), "[[C]]").unwrap();

        let mut editor = editor_for(&dir, "A");
        editor.buffer.set_cursor(0, 2);

        let next = editor.follow_link(10).unwrap().unwrap();
        assert_eq!(next.path, dir.path().join("C.md"));
        assert_eq!(fs::read_to_string(dir.path().join("C.md")).unwrap(), "");
        assert!(next.notes.contains("C"));
    }

    #[test]
    fn test_follow_without_link_does_nothing() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("A.md"), "plain").unwrap();
        let editor = editor_for(&dir, "A");
        assert!(editor.follow_link(10).unwrap().is_none());
    }

    #[test]
    fn test_link_outside_vault_is_refused() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("A.md"), "[[../escape]]").unwrap();
        let mut editor = editor_for(&dir, "A");
        editor.buffer.set_cursor(0, 3);

        assert!(matches!(
            editor.follow_link(10),
            Err(AppError::InvalidNoteName(_))
        ));
        assert!(!dir.path().join("..").join("escape.md").exists());
    }

    #[test]
    fn test_safe_note_names() {
        assert!(is_safe_note_name("Plan"));
        assert!(is_safe_note_name("projects/Plan"));
        assert!(!is_safe_note_name("../Plan"));
        assert!(!is_safe_note_name("/etc/Plan"));
        assert!(!is_safe_note_name("   "));
    }
}
