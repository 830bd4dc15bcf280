use crate::layout::{ForceLayout, Positions};
use crate::model::{degree, Incoming, NoteGraph, NoteName};
use crate::ui::constants::symbols;
use rand::Rng;
use std::collections::BTreeSet;
use std::path::PathBuf;

/// Symbol for a node by its degree relative to the best connected note.
pub fn importance_symbol(importance: f64) -> char {
    if importance > 0.66 {
        symbols::MAJOR
    } else if importance > 0.45 {
        symbols::UPPER
    } else if importance > 0.25 {
        symbols::LOWER
    } else {
        symbols::MINOR
    }
}

/// Interactive state of the graph view: laid-out notes plus a free-moving cursor.
#[derive(Debug, Clone)]
pub struct GraphView {
    pub vault: PathBuf,
    pub notes: NoteGraph,
    incoming: Incoming,
    positions: Positions,
    max_degree: usize,
    width: u16,
    height: u16,
    /// `(x, y)`
    cursor: (u16, u16),
}

impl GraphView {
    pub fn new(
        vault: PathBuf,
        notes: NoteGraph,
        positions: Positions,
        width: u16,
        height: u16,
    ) -> Self {
        let incoming = notes.incoming();
        let max_degree = notes
            .names()
            .map(|name| degree(&notes.outgoing, &incoming, name))
            .max()
            .unwrap_or(1);

        Self {
            vault,
            notes,
            incoming,
            positions,
            max_degree,
            width,
            height,
            cursor: (width / 2, height / 2),
        }
    }

    pub fn positions(&self) -> &Positions {
        &self.positions
    }

    pub fn cursor(&self) -> (u16, u16) {
        self.cursor
    }

    pub fn size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn degree(&self, name: &str) -> usize {
        degree(&self.notes.outgoing, &self.incoming, name)
    }

    pub fn importance(&self, name: &str) -> f64 {
        if self.max_degree == 0 {
            return 0.0;
        }
        self.degree(name) as f64 / self.max_degree as f64
    }

    pub fn symbol_for(&self, name: &str) -> char {
        importance_symbol(self.importance(name))
    }

    /// The first note, by name, drawn at the cursor cell; not the last one placed there.
    pub fn note_at_cursor(&self) -> Option<&NoteName> {
        self.positions
            .iter()
            .find(|(_, pos)| **pos == self.cursor)
            .map(|(name, _)| name)
    }

    pub fn link_counts(&self, name: &str) -> (usize, usize) {
        let outgoing = self.notes.links_from(name).len();
        let incoming = self.incoming.get(name).map(Vec::len).unwrap_or(0);
        (outgoing, incoming)
    }

    /// Distinct occupied cells; notes sharing a cell count once.
    pub fn visible_count(&self) -> usize {
        self.positions.values().collect::<BTreeSet<_>>().len()
    }

    pub fn move_up(&mut self) {
        self.cursor.1 = self.cursor.1.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor.1 + 2 < self.height {
            self.cursor.1 += 1;
        }
    }

    pub fn move_left(&mut self) {
        self.cursor.0 = self.cursor.0.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor.0 + 1 < self.width {
            self.cursor.0 += 1;
        }
    }

    /// Lay the notes out again for a new region and keep the cursor inside it.
    pub fn relayout<R: Rng>(&mut self, width: u16, height: u16, iterations: usize, rng: &mut R) {
        let layout = ForceLayout::new(width, height).with_iterations(iterations);
        self.positions = layout.compute(&self.notes.outgoing, rng);
        self.width = width;
        self.height = height;
        self.cursor = (
            self.cursor.0.min(width.saturating_sub(1)),
            self.cursor.1.min(height.saturating_sub(2)),
        );
        log::debug!("Graph relaid out for {}x{}", width, height);
    }
}
