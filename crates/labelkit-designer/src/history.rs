//! Snapshot-based undo/redo history.
//!
//! Every commit stores the complete element list. Undo and redo move an index
//! through the stored snapshots; a commit after an undo discards the redo
//! branch. Depth is not capped: only discrete commits grow the stack, never
//! the transient updates made while a gesture is in progress.

use crate::element::Element;

/// A full copy of a layout's element list.
pub type ElementList = Vec<Element>;

/// Linear undo/redo history over element-list snapshots.
#[derive(Debug, Clone)]
pub struct History {
    stack: Vec<ElementList>,
    index: usize,
}

impl History {
    /// Creates a history seeded with the initial element list.
    pub fn new(initial: ElementList) -> Self {
        Self {
            stack: vec![initial],
            index: 0,
        }
    }

    /// Drops all entries and reseeds with `initial`.
    pub fn reset(&mut self, initial: ElementList) {
        self.stack.clear();
        self.stack.push(initial);
        self.index = 0;
    }

    /// Records a new snapshot, discarding anything that could have been redone.
    pub fn commit(&mut self, elements: ElementList) {
        self.stack.truncate(self.index + 1);
        self.stack.push(elements);
        self.index = self.stack.len() - 1;
    }

    /// Steps back one snapshot and returns it.
    pub fn undo(&mut self) -> Option<&ElementList> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        Some(&self.stack[self.index])
    }

    /// Steps forward one snapshot and returns it.
    pub fn redo(&mut self) -> Option<&ElementList> {
        if !self.can_redo() {
            return None;
        }
        self.index += 1;
        Some(&self.stack[self.index])
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn can_redo(&self) -> bool {
        self.index + 1 < self.stack.len()
    }

    /// The snapshot the model currently matches.
    pub fn current(&self) -> &ElementList {
        &self.stack[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of stored snapshots, including the initial one.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Always false: a history holds at least its seed snapshot.
    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}
