use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Suffix every note file carries. Matching is case-sensitive.
pub const NOTE_EXTENSION: &str = ".md";

pub type NoteName = String;

/// Note name → outbound link names, in file-appearance order.
pub type Outgoing = BTreeMap<NoteName, Vec<NoteName>>;

/// Note name → names of notes linking to it.
pub type Incoming = BTreeMap<NoteName, Vec<NoteName>>;

/// Snapshot of a vault: which notes exist, where they live, and what they link to.
///
/// Iteration follows note-name order. Dangling links stay in `outgoing` lists but never
/// become keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteGraph {
    pub outgoing: Outgoing,
    pub paths: BTreeMap<NoteName, PathBuf>,
}

impl NoteGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a note. A second note with the same name replaces the first.
    pub fn insert_note(&mut self, name: impl Into<NoteName>, path: PathBuf, links: Vec<NoteName>) {
        let name = name.into();
        self.paths.insert(name.clone(), path);
        self.outgoing.insert(name, links);
    }

    pub fn len(&self) -> usize {
        self.outgoing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outgoing.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.outgoing.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &NoteName> {
        self.outgoing.keys()
    }

    pub fn links_from(&self, name: &str) -> &[NoteName] {
        self.outgoing.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn path_of(&self, name: &str) -> Option<&Path> {
        self.paths.get(name).map(PathBuf::as_path)
    }

    pub fn incoming(&self) -> Incoming {
        derive_incoming(&self.outgoing)
    }
}

/// Reverse the outbound map. Every note gets a key (possibly with an empty list);
/// targets that are not notes are skipped. A source linking twice appears twice.
pub fn derive_incoming(outgoing: &Outgoing) -> Incoming {
    let mut incoming: Incoming = outgoing.keys().map(|name| (name.clone(), Vec::new())).collect();

    for (source, targets) in outgoing {
        for target in targets {
            if let Some(sources) = incoming.get_mut(target) {
                sources.push(source.clone());
            }
        }
    }

    incoming
}

/// Total link count touching a note, used for sorting and node importance.
pub fn degree(outgoing: &Outgoing, incoming: &Incoming, name: &str) -> usize {
    let out = outgoing.get(name).map(Vec::len).unwrap_or(0);
    let inc = incoming.get(name).map(Vec::len).unwrap_or(0);
    out + inc
}

/// Where a note with this name is created when it does not exist yet.
pub fn note_path_for(vault_root: &Path, name: &str) -> PathBuf {
    vault_root.join(format!("{}{}", name, NOTE_EXTENSION))
}
