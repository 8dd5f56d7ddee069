//! Designer session: one open layout plus its editing state.
//!
//! This module is split into submodules:
//! - `elements`: Add, update and delete elements
//! - `selection`: Selection queries and changes
//! - `history`: Undo/redo
//! - `transforms`: Align and nudge
//! - `gestures`: Pointer-driven drag and resize
//! - `file_io`: Loading from and saving to a layout store
//!
//! Operations whose preconditions fail leave the session unchanged; none of
//! them return errors. While a gesture is active, add, delete, align, batch
//! updates, nudge, undo and redo are all no-ops.

mod elements;
mod file_io;
mod gestures;
mod history;
mod selection;
mod transforms;

pub use gestures::GestureScope;

use crate::element::Element;
use crate::geometry::Rect;
use crate::history::History;
use crate::interaction::InteractionState;
use crate::layout::Layout;
use crate::preview::{PreviewEngine, RenderContext, RenderedText, TextMeasure};
use crate::selection_manager::SelectionManager;
use labelkit_core::{FieldValues, IdGenerator};
use labelkit_settings::Config;
use tracing::{debug, info};

/// Whether the session is editing or showing a data preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorMode {
    #[default]
    Design,
    /// Read-only: no selection, gestures, or edits.
    Preview,
}

/// Editing state for one layout.
#[derive(Debug, Clone)]
pub struct DesignerSession {
    layout: Layout,
    selection: SelectionManager,
    history: History,
    interaction: InteractionState,
    ids: IdGenerator,
    mode: EditorMode,
    snap_to_grid: bool,
    nudge_step: i32,
    nudge_step_large: i32,
    is_modified: bool,
}

impl DesignerSession {
    /// Opens `layout` for editing with default settings.
    pub fn new(layout: Layout) -> Self {
        Self::with_config(layout, &Config::default())
    }

    /// Opens `layout` for editing with the designer section of `config`.
    pub fn with_config(layout: Layout, config: &Config) -> Self {
        let mut session = Self {
            layout: Layout::new("", ""),
            selection: SelectionManager::new(),
            history: History::default(),
            interaction: InteractionState::Idle,
            ids: IdGenerator::new(),
            mode: EditorMode::Design,
            snap_to_grid: true,
            nudge_step: 1,
            nudge_step_large: 10,
            is_modified: false,
        };
        session.apply_config(config);
        session.load_layout(layout);
        session
    }

    /// Applies the designer settings from `config`.
    pub fn apply_config(&mut self, config: &Config) {
        self.snap_to_grid = config.designer.snap_to_grid;
        self.nudge_step = config.designer.nudge_step;
        self.nudge_step_large = config.designer.nudge_step_large;
    }

    /// Replaces the open layout and reseeds history with its elements.
    ///
    /// Any active gesture is dropped without a commit.
    pub fn load_layout(&mut self, mut layout: Layout) {
        for element in layout.elements.iter_mut() {
            element.normalize();
        }
        self.ids = IdGenerator::after(layout.element_ids());
        self.history.reset(layout.elements.clone());
        self.selection.clear();
        self.interaction = InteractionState::Idle;
        self.is_modified = false;
        info!(
            "Loaded layout '{}' ({}) with {} elements",
            layout.name,
            layout.id,
            layout.element_count()
        );
        self.layout = layout;
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Canvas bounds as a rectangle at the origin.
    pub fn canvas_rect(&self) -> Rect {
        Rect::new(0, 0, self.layout.width, self.layout.height)
    }

    /// Flags the layout as the default. Exclusivity across layouts is the
    /// store's concern.
    pub fn set_is_default(&mut self, is_default: bool) {
        if self.layout.is_default != is_default {
            self.layout.is_default = is_default;
            self.is_modified = true;
        }
    }

    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// Switches between design and preview. Entering preview ends any active
    /// gesture and clears the selection.
    pub fn set_mode(&mut self, mode: EditorMode) {
        if self.mode == mode {
            return;
        }
        if mode == EditorMode::Preview {
            self.pointer_up();
            self.selection.clear();
        }
        debug!("Editor mode changed to {:?}", mode);
        self.mode = mode;
    }

    pub fn is_read_only(&self) -> bool {
        self.mode == EditorMode::Preview
    }

    pub fn interaction_state(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn is_gesture_active(&self) -> bool {
        !self.interaction.is_idle()
    }

    pub fn snap_to_grid(&self) -> bool {
        self.snap_to_grid
    }

    pub fn set_snap_to_grid(&mut self, enabled: bool) {
        self.snap_to_grid = enabled;
    }

    /// Configured nudge distance, small or large.
    pub fn nudge_step(&self, large: bool) -> i32 {
        if large {
            self.nudge_step_large
        } else {
            self.nudge_step
        }
    }

    /// Whether there are changes since the layout was loaded or saved.
    pub fn is_modified(&self) -> bool {
        self.is_modified
    }

    /// Renders every element for display. Design mode shows sample data,
    /// preview mode shows `values`.
    pub fn render<M: TextMeasure>(
        &self,
        engine: &PreviewEngine<M>,
        values: &FieldValues,
    ) -> Vec<RenderedText> {
        let ctx = match self.mode {
            EditorMode::Design => RenderContext::Design,
            EditorMode::Preview => RenderContext::Live(values),
        };
        engine.render_layout(&self.layout, ctx)
    }

    /// Edits are allowed: design mode and no gesture in progress.
    fn can_edit(&self) -> bool {
        !self.is_read_only() && self.interaction.is_idle()
    }

    /// Records the live element list as a new history entry.
    fn record(&mut self, operation: &str) {
        self.history.commit(self.layout.elements.clone());
        self.is_modified = true;
        debug!(
            "Committed {} ({} elements, history {}/{})",
            operation,
            self.layout.element_count(),
            self.history.index() + 1,
            self.history.len()
        );
    }

    fn elements_mut(&mut self) -> &mut Vec<Element> {
        &mut self.layout.elements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementPatch;
    use labelkit_core::ElementType;

    #[test]
    fn test_load_reseeds_state() {
        let mut layout = Layout::new("l1", "Retail");
        let mut el = Element::new(7, ElementType::Variety);
        el.width = 2;
        layout.elements.push(el);

        let mut session = DesignerSession::new(layout);
        assert_eq!(session.layout().elements[0].width, 10);
        assert!(!session.can_undo());
        assert!(!session.is_modified());

        let id = session.add_element(ElementType::Quality);
        assert_eq!(id, Some(8));
        assert!(session.is_modified());

        session.load_layout(Layout::new("l2", "Export"));
        assert!(!session.can_undo());
        assert!(session.selected_ids().is_empty());
        assert_eq!(session.layout().id, "l2");
    }

    #[test]
    fn test_config_applies_designer_section() {
        let mut config = Config::default();
        config.designer.snap_to_grid = false;
        config.designer.nudge_step_large = 5;
        let session = DesignerSession::with_config(Layout::new("l", "L"), &config);
        assert!(!session.snap_to_grid());
        assert_eq!(session.nudge_step(true), 5);
        assert_eq!(session.nudge_step(false), 1);
    }

    #[test]
    fn test_preview_mode_is_read_only() {
        let mut session = DesignerSession::new(Layout::new("l", "L"));
        let id = session.add_element(ElementType::Weight);
        assert!(id.is_some());
        assert_eq!(session.selected_ids().len(), 1);

        session.set_mode(EditorMode::Preview);
        assert!(session.is_read_only());
        assert!(session.selected_ids().is_empty());
        assert_eq!(session.add_element(ElementType::Date), None);
        assert_eq!(session.layout().element_count(), 1);

        let values = FieldValues::new().with(ElementType::Weight, "12.00");
        let rendered = session.render(&PreviewEngine::new(), &values);
        assert_eq!(rendered[0].text, "12.00");

        session.set_mode(EditorMode::Design);
        let rendered = session.render(&PreviewEngine::new(), &values);
        assert_eq!(rendered[0].text, "10.00");
    }

    #[test]
    fn test_preview_mode_blocks_interaction() {
        use crate::alignment::Alignment;
        use crate::geometry::Point;
        use crate::interaction::{Modifiers, ResizeHandle};

        let mut session = DesignerSession::new(Layout::new("l", "L"));
        let a = session.add_element(ElementType::Weight).unwrap();
        let b = session.add_element(ElementType::Date).unwrap();
        session.update_element(b, &ElementPatch::position(100, 200), true);
        session.undo();
        let elements = session.elements().to_vec();
        let (len, index) = (session.history_len(), session.history_index());

        session.set_mode(EditorMode::Preview);
        let at_a = Point::new(30.0, 30.0);
        assert!(!session.pointer_down(at_a, Modifiers::NONE));
        assert!(!session.press_element(a, at_a, Modifiers::shift()));
        assert!(!session.press_handle(ResizeHandle::E, Point::new(220.0, 35.0)));
        assert_eq!(session.handle_at(Point::new(220.0, 35.0)), None);
        assert!(!session.pointer_move(Point::new(90.0, 90.0)));
        assert!(!session.select(a, false));
        session.select_all();
        assert!(session.selected_ids().is_empty());
        assert!(!session.undo());
        assert!(!session.redo());
        assert!(!session.align(Alignment::Right));
        assert!(!session.nudge_selected(5, 5));
        assert_eq!(session.delete_selected_elements(), 0);
        assert!(session.interaction_state().is_idle());

        assert_eq!(session.elements(), elements.as_slice());
        assert_eq!((session.history_len(), session.history_index()), (len, index));

        session.set_mode(EditorMode::Design);
        assert!(session.redo());
        assert!(session.pointer_down(at_a, Modifiers::NONE));
    }

    #[test]
    fn test_set_is_default_flags_layout_only() {
        use crate::store::{InMemoryLayoutStore, LayoutStore};

        let mut session = DesignerSession::new(Layout::new("l", "L"));
        session.set_is_default(false);
        assert!(!session.is_modified());

        session.set_is_default(true);
        assert!(session.layout().is_default);
        assert!(session.is_modified());
        assert!(!session.can_undo());

        let mut store = InMemoryLayoutStore::new();
        let other = store.create("Other").unwrap();
        store.set_default(&other.id).unwrap();
        session.save_to(&mut store).unwrap();
        assert!(!session.is_modified());
        assert_eq!(store.default_layout().unwrap().unwrap().id, "l");
        assert!(!store.load(&other.id).unwrap().is_default);

        session.set_is_default(false);
        assert!(session.is_modified());
        assert!(!session.layout().is_default);
    }
}
