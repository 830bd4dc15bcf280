use crate::io::{list_note_files, read_note};
use crate::model::{NoteGraph, NoteName, NOTE_EXTENSION};
use crate::parser::link_names;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

/// Build the note graph for everything below `root`.
pub fn scan_vault(root: &Path) -> NoteGraph {
    let never = AtomicBool::new(false);
    // Cannot be cancelled, so there is always a graph
    scan_vault_until(root, &never).unwrap_or_default()
}

/// Like [`scan_vault`], but gives up with `None` once `cancel` is set.
///
/// Notes are keyed by file name without the extension. Two files sharing a base name in
/// different directories collide and the one visited last wins; files are visited in
/// file-name order within each directory, parents before children.
pub fn scan_vault_until(root: &Path, cancel: &AtomicBool) -> Option<NoteGraph> {
    let root = resolve_root(root);
    let mut graph = NoteGraph::new();

    for path in list_note_files(&root) {
        if cancel.load(Ordering::Relaxed) {
            log::info!("Vault scan of {} cancelled", root.display());
            return None;
        }

        let Some(name) = note_name(&path) else {
            log::warn!("Skipping note with a non UTF-8 name: {}", path.display());
            continue;
        };

        if let Some(previous) = graph.path_of(&name) {
            log::warn!(
                "Note name '{}' is used by both {} and {}; keeping the latter",
                name,
                previous.display(),
                path.display()
            );
        }

        let links = read_links(&path);
        graph.insert_note(name, path, links);
    }

    log::debug!("Scanned {} notes under {}", graph.len(), root.display());
    Some(graph)
}

/// Name a note file is addressed by: its file name minus the note suffix.
pub fn note_name(path: &Path) -> Option<NoteName> {
    let file_name = path.file_name()?.to_str()?;
    file_name
        .strip_suffix(NOTE_EXTENSION)
        .map(|stem| stem.to_string())
}

fn read_links(path: &Path) -> Vec<NoteName> {
    match read_note(path) {
        Ok(Some(text)) => link_names(&text),
        Ok(None) => Vec::new(),
        Err(e) => {
            log::warn!("Could not read {}: {}; treating it as linkless", path.display(), e);
            Vec::new()
        }
    }
}

fn resolve_root(root: &Path) -> PathBuf {
    root.canonicalize().unwrap_or_else(|_| root.to_path_buf())
}
