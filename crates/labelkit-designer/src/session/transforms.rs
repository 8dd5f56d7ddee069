//! Alignment and keyboard nudging of the selection.

use super::DesignerSession;
use crate::alignment::{calculate_alignment, Alignment};
use tracing::debug;

impl DesignerSession {
    /// Aligns the selection.
    ///
    /// A single element aligns to the canvas; several align to the anchor,
    /// which does not move. One history entry per call.
    pub fn align(&mut self, alignment: Alignment) -> bool {
        if !self.can_edit() || self.selection.is_empty() {
            return false;
        }
        let moves = calculate_alignment(
            &self.layout.elements,
            self.selection.ids(),
            self.canvas_rect(),
            alignment,
        );
        if moves.is_empty() {
            return false;
        }
        for (id, x, y) in moves {
            if let Some(element) = self.layout.element_mut(id) {
                element.x = x;
                element.y = y;
            }
        }
        debug!("Aligned {} elements {:?}", self.selection.len(), alignment);
        self.record("align");
        true
    }

    /// Moves the selection by `(dx, dy)`, clamped at 0. Not grid-snapped.
    pub fn nudge_selected(&mut self, dx: i32, dy: i32) -> bool {
        if !self.can_edit() || self.selection.is_empty() || (dx == 0 && dy == 0) {
            return false;
        }
        let mut moved = false;
        for element in self.layout.elements.iter_mut() {
            if !self.selection.contains(element.id) {
                continue;
            }
            let x = element.x.saturating_add(dx).max(0);
            let y = element.y.saturating_add(dy).max(0);
            if (x, y) != (element.x, element.y) {
                element.x = x;
                element.y = y;
                moved = true;
            }
        }
        if moved {
            self.record("nudge");
        }
        moved
    }
}
