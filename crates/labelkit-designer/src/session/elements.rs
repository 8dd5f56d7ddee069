//! Element creation, editing and deletion.

use super::DesignerSession;
use crate::element::{Element, ElementPatch};
use crate::geometry::Point;
use labelkit_core::{ElementId, ElementType};
use tracing::debug;

impl DesignerSession {
    /// Adds an element of `element_type` with the default geometry, selects
    /// it and commits.
    ///
    /// Returns the new id, or `None` when editing is not possible.
    pub fn add_element(&mut self, element_type: ElementType) -> Option<ElementId> {
        if !self.can_edit() {
            return None;
        }
        let id = self.ids.generate_id();
        self.layout.elements.push(Element::new(id, element_type));
        self.selection.select_only(id);
        debug!("Added {} element {}", element_type, id);
        self.record("add element");
        Some(id)
    }

    /// Applies `patch` to one element.
    ///
    /// With `commit` the change becomes a history entry right away; without,
    /// only the live model changes until [`commit`](Self::commit) or the end
    /// of a gesture records it. Returns whether the element exists.
    pub fn update_element(&mut self, id: ElementId, patch: &ElementPatch, commit: bool) -> bool {
        if self.is_read_only() {
            return false;
        }
        let Some(element) = self.layout.element_mut(id) else {
            return false;
        };
        element.apply(patch);
        if commit {
            self.record("update element");
        }
        true
    }

    /// Applies `patch` to every selected element as one history entry.
    ///
    /// Values are clamped to the element limits but not snapped to the grid.
    pub fn update_selected_elements(&mut self, patch: &ElementPatch) -> bool {
        if !self.can_edit() || self.selection.is_empty() {
            return false;
        }
        let selected = self.selection.ids().to_vec();
        for element in self.elements_mut().iter_mut() {
            if selected.contains(&element.id) {
                element.apply(patch);
            }
        }
        self.record("update selection");
        true
    }

    /// Removes every selected element and clears the selection.
    ///
    /// Returns how many elements were removed.
    pub fn delete_selected_elements(&mut self) -> usize {
        if !self.can_edit() || self.selection.is_empty() {
            return 0;
        }
        let before = self.layout.element_count();
        let selection = &self.selection;
        self.layout.elements.retain(|e| !selection.contains(e.id));
        let removed = before - self.layout.element_count();
        self.selection.clear();
        debug!("Deleted {} elements", removed);
        self.record("delete elements");
        removed
    }

    /// Records uncommitted edits made with `update_element(.., false)`.
    ///
    /// Does nothing during a gesture or when the live model already matches
    /// the latest history entry.
    pub fn commit(&mut self) -> bool {
        if !self.can_edit() || self.history.current() == &self.layout.elements {
            return false;
        }
        self.record("pending edits");
        true
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.layout.element(id)
    }

    /// All elements, in paint order.
    pub fn elements(&self) -> &[Element] {
        &self.layout.elements
    }

    /// Selected elements, in selection order (anchor last).
    pub fn selected_elements(&self) -> Vec<&Element> {
        self.selection
            .ids()
            .iter()
            .filter_map(|id| self.layout.element(*id))
            .collect()
    }

    /// Topmost element under `point`.
    pub fn element_at(&self, point: Point) -> Option<ElementId> {
        self.layout
            .elements
            .iter()
            .rev()
            .find(|e| e.rect().contains(point))
            .map(|e| e.id)
    }
}
