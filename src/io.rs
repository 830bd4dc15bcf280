//! Filesystem access for notes: reading, writing, creating and enumerating note files.

use crate::model::NOTE_EXTENSION;
use std::fs::{self, OpenOptions};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Read a note. A missing file is not an error and yields `None`.
pub fn read_note(path: &Path) -> io::Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e),
    }
}

/// Replace a note's content.
pub fn write_note(path: &Path, content: &str) -> io::Result<()> {
    fs::write(path, content)
}

/// Make sure an (empty) note file exists at `path`, creating parent directories.
/// An existing file is left untouched.
pub fn create_empty_note(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    OpenOptions::new().create(true).append(true).open(path)?;
    Ok(())
}

pub fn is_note_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .map(|n| n.ends_with(NOTE_EXTENSION))
        .unwrap_or(false)
}

/// Every note file below `root`, at any depth, in file-name order per directory.
/// Unreadable directories are logged and skipped.
pub fn list_note_files(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("Skipping unreadable vault entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && is_note_file(entry.path()))
        .map(|entry| entry.into_path())
        .collect()
}
