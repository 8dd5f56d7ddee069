//! Pointer gestures: selection on press, drag and resize while moving, one
//! history entry on release.

use super::DesignerSession;
use crate::geometry::Point;
use crate::interaction::{DragGesture, InteractionState, Modifiers, ResizeGesture, ResizeHandle};
use labelkit_core::ElementId;
use std::ops::{Deref, DerefMut};
use tracing::{debug, trace};

impl DesignerSession {
    /// Resize handle of the sole selected element under `point`.
    pub fn handle_at(&self, point: Point) -> Option<ResizeHandle> {
        if self.is_read_only() {
            return None;
        }
        let id = self.selection.single()?;
        let element = self.layout.element(id)?;
        ResizeHandle::hit_test(element.rect(), point)
    }

    /// Routes a pointer press: a handle starts a resize, an element starts
    /// selection and drag, empty canvas clears the selection unless a
    /// modifier is held.
    ///
    /// Returns whether a gesture started.
    pub fn pointer_down(&mut self, point: Point, modifiers: Modifiers) -> bool {
        if !self.can_edit() {
            return false;
        }
        if let Some(handle) = self.handle_at(point) {
            return self.press_handle(handle, point);
        }
        match self.element_at(point) {
            Some(id) => self.press_element(id, point, modifiers),
            None => {
                self.press_canvas(modifiers);
                false
            }
        }
    }

    /// Activates `id` and, if anything is left selected, starts dragging
    /// the whole selection.
    pub fn press_element(&mut self, id: ElementId, point: Point, modifiers: Modifiers) -> bool {
        if !self.can_edit() || !self.layout.contains(id) {
            return false;
        }
        if modifiers.is_additive() {
            self.selection.toggle(id);
        } else {
            self.selection.select_only(id);
        }
        if self.selection.is_empty() {
            return false;
        }

        let origins = self
            .selection
            .ids()
            .iter()
            .filter_map(|id| self.layout.element(*id))
            .map(|e| (e.id, e.x, e.y))
            .collect::<Vec<_>>();
        debug!("Drag started for {} elements", origins.len());
        self.interaction = InteractionState::Dragging(DragGesture::new(point, origins));
        true
    }

    /// Starts resizing the sole selected element from `handle`.
    pub fn press_handle(&mut self, handle: ResizeHandle, point: Point) -> bool {
        if !self.can_edit() {
            return false;
        }
        let Some(id) = self.selection.single() else {
            return false;
        };
        let Some(element) = self.layout.element(id) else {
            return false;
        };
        debug!("Resize started for element {} from handle {}", id, handle);
        self.interaction =
            InteractionState::Resizing(ResizeGesture::new(id, handle, point, element.rect()));
        true
    }

    /// Press on empty canvas.
    pub fn press_canvas(&mut self, modifiers: Modifiers) {
        if self.can_edit() && !modifiers.is_additive() {
            self.selection.clear();
        }
    }

    /// Updates the active gesture for the pointer at `point`.
    ///
    /// Changes the live model only; nothing is recorded until the gesture
    /// ends. Returns whether a gesture is active.
    pub fn pointer_move(&mut self, point: Point) -> bool {
        let snap = self.snap_to_grid;
        match &self.interaction {
            InteractionState::Idle => false,
            InteractionState::Dragging(drag) => {
                for (id, x, y) in drag.positions(point, snap) {
                    if let Some(element) = self.layout.element_mut(id) {
                        element.x = x;
                        element.y = y;
                    }
                }
                trace!("Drag to ({}, {})", point.x, point.y);
                true
            }
            InteractionState::Resizing(resize) => {
                let rect = resize.rect(point, snap);
                if let Some(element) = self.layout.element_mut(resize.id) {
                    element.set_rect(rect);
                }
                trace!("Resize to {:?}", rect);
                true
            }
        }
    }

    /// Ends the active gesture and records exactly one history entry.
    ///
    /// Returns whether a gesture was active.
    pub fn pointer_up(&mut self) -> bool {
        let ended = std::mem::take(&mut self.interaction);
        if ended.is_idle() {
            return false;
        }
        self.record(ended.name());
        true
    }

    /// Pointer left the canvas; ends the gesture like a release.
    pub fn pointer_leave(&mut self) -> bool {
        self.pointer_up()
    }

    /// Borrows the session for one gesture. The gesture ends and is recorded
    /// when the scope is dropped, on every exit path.
    pub fn gesture(&mut self) -> GestureScope<'_> {
        GestureScope { session: self }
    }
}

/// Exclusive edit access for the duration of one gesture.
///
/// Dereferences to the session, so presses and moves are made through it.
/// Dropping the scope runs [`DesignerSession::pointer_up`].
pub struct GestureScope<'a> {
    session: &'a mut DesignerSession,
}

impl GestureScope<'_> {
    /// Ends the gesture now.
    pub fn finish(self) {}
}

impl Deref for GestureScope<'_> {
    type Target = DesignerSession;

    fn deref(&self) -> &DesignerSession {
        self.session
    }
}

impl DerefMut for GestureScope<'_> {
    fn deref_mut(&mut self) -> &mut DesignerSession {
        self.session
    }
}

impl Drop for GestureScope<'_> {
    fn drop(&mut self) {
        self.session.pointer_up();
    }
}
