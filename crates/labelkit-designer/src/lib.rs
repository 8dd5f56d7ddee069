//! # LabelKit Designer
//!
//! Interactive layout designer for printed product labels. Data fields and
//! free text are placed as rectangles on a fixed-size canvas, moved and sized
//! by direct manipulation, aligned, and previewed with sample or live data.
//!
//! ## Core Components
//!
//! - **Element/Layout model**: placed fields with clamped geometry and style
//! - **History**: linear undo/redo over full element-list snapshots
//! - **Selection**: ordered selection with an alignment anchor
//! - **Interaction**: drag and resize gestures driven by pointer events
//! - **Alignment**: align to the canvas or to the anchor element
//! - **Preview**: resolve fields to display text, fit it, export SVG
//! - **Store**: layout persistence in memory or as JSON files
//!
//! ## Architecture
//!
//! ```text
//! DesignerSession
//!   ├── Layout (elements, canvas size)
//!   ├── SelectionManager (ids, anchor)
//!   ├── History (snapshots)
//!   └── InteractionState (idle / dragging / resizing)
//!
//! PreviewEngine ── RenderedText ── svg
//! LayoutStore ── InMemoryLayoutStore, JsonLayoutStore
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use labelkit_designer::{DesignerSession, Layout, Modifiers, Point};
//! use labelkit_core::ElementType;
//!
//! let mut session = DesignerSession::new(Layout::new("retail", "Retail"));
//! let id = session.add_element(ElementType::Weight).unwrap();
//!
//! session.pointer_down(Point::new(100.0, 30.0), Modifiers::NONE);
//! session.pointer_move(Point::new(115.0, 25.0));
//! session.pointer_up();
//!
//! let el = session.element(id).unwrap();
//! assert_eq!((el.x, el.y), (40, 20));
//! ```

pub mod alignment;
pub mod element;
pub mod geometry;
pub mod history;
pub mod interaction;
pub mod layout;
pub mod preview;
pub mod selection_manager;
pub mod session;
pub mod store;
pub mod svg;

pub use alignment::Alignment;
pub use element::{Element, ElementPatch, TextAlign};
pub use geometry::{snap_to_grid, Point, Rect, GRID_SIZE};
pub use history::History;
pub use interaction::{InteractionState, Modifiers, ResizeHandle};
pub use layout::{Layout, STANDARD_CANVAS_HEIGHT, STANDARD_CANVAS_WIDTH};
pub use preview::{
    render_layout, AverageCharWidth, PreviewEngine, RenderContext, RenderedText, TextMeasure,
};
pub use selection_manager::SelectionManager;
pub use session::{DesignerSession, EditorMode, GestureScope};
pub use store::{InMemoryLayoutStore, JsonLayoutStore, LayoutStore, StoreResult};
pub use svg::render_layout_svg;
