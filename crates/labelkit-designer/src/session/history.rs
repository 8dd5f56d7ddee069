//! Undo/redo operations for the designer session.

use super::DesignerSession;
use tracing::debug;

impl DesignerSession {
    /// Restores the previous history entry and clears the selection.
    pub fn undo(&mut self) -> bool {
        if !self.can_edit() {
            return false;
        }
        let Some(snapshot) = self.history.undo() else {
            return false;
        };
        self.layout.elements = snapshot.clone();
        self.after_history_move("undo");
        true
    }

    /// Re-applies the entry undone last and clears the selection.
    pub fn redo(&mut self) -> bool {
        if !self.can_edit() {
            return false;
        }
        let Some(snapshot) = self.history.redo() else {
            return false;
        };
        self.layout.elements = snapshot.clone();
        self.after_history_move("redo");
        true
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.can_edit() && self.history.can_undo()
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.can_edit() && self.history.can_redo()
    }

    /// Number of history entries, including the one seeded on load.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Index of the entry the live model matches.
    pub fn history_index(&self) -> usize {
        self.history.index()
    }

    fn after_history_move(&mut self, operation: &str) {
        self.selection.clear();
        self.is_modified = true;
        debug!(
            "{} to history entry {}/{}",
            operation,
            self.history.index() + 1,
            self.history.len()
        );
    }
}
