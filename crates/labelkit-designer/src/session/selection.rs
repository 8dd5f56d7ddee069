//! Selection operations.

use super::DesignerSession;
use labelkit_core::ElementId;

impl DesignerSession {
    /// Selected ids, oldest first; the last one is the anchor.
    pub fn selected_ids(&self) -> &[ElementId] {
        self.selection.ids()
    }

    /// The alignment anchor.
    pub fn anchor(&self) -> Option<ElementId> {
        self.selection.anchor()
    }

    pub fn is_selected(&self, id: ElementId) -> bool {
        self.selection.contains(id)
    }

    /// Activates an element without starting a drag.
    ///
    /// Plain activation selects only `id`; `additive` toggles it.
    pub fn select(&mut self, id: ElementId, additive: bool) -> bool {
        if !self.can_edit() || !self.layout.contains(id) {
            return false;
        }
        if additive {
            self.selection.toggle(id);
        } else {
            self.selection.select_only(id);
        }
        true
    }

    /// Selects every element; the topmost becomes the anchor.
    pub fn select_all(&mut self) {
        if self.can_edit() {
            let ids: Vec<_> = self.layout.element_ids().collect();
            self.selection.set(ids);
        }
    }

    pub fn clear_selection(&mut self) {
        if self.interaction.is_idle() {
            self.selection.clear();
        }
    }
}
