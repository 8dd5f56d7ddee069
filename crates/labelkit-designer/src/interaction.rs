//! Pointer interaction: drag and resize gestures.
//!
//! The geometry here is pure. [`DesignerSession`](crate::session::DesignerSession)
//! owns the [`InteractionState`] and feeds it pointer events.

use crate::element::MIN_ELEMENT_SIZE;
use crate::geometry::{snap_to_grid, Point, Rect};
use labelkit_core::ElementId;
use serde::{Deserialize, Serialize};

/// Side length of the square hit area around each resize handle.
pub const HANDLE_SIZE: f64 = 6.0;

/// Resize handle on the edge or corner of the selected element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResizeHandle {
    N,
    S,
    E,
    W,
    Ne,
    Nw,
    Se,
    Sw,
}

impl ResizeHandle {
    /// Hit-test order: corners win over edge midpoints on small elements.
    pub const ALL: [ResizeHandle; 8] = [
        ResizeHandle::Nw,
        ResizeHandle::Ne,
        ResizeHandle::Se,
        ResizeHandle::Sw,
        ResizeHandle::N,
        ResizeHandle::E,
        ResizeHandle::S,
        ResizeHandle::W,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            Self::N => "n",
            Self::S => "s",
            Self::E => "e",
            Self::W => "w",
            Self::Ne => "ne",
            Self::Nw => "nw",
            Self::Se => "se",
            Self::Sw => "sw",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|h| h.token() == token)
    }

    /// Whether the handle drags the left edge.
    pub fn moves_left(&self) -> bool {
        matches!(self, Self::W | Self::Nw | Self::Sw)
    }

    /// Whether the handle drags the right edge.
    pub fn moves_right(&self) -> bool {
        matches!(self, Self::E | Self::Ne | Self::Se)
    }

    /// Whether the handle drags the top edge.
    pub fn moves_top(&self) -> bool {
        matches!(self, Self::N | Self::Ne | Self::Nw)
    }

    /// Whether the handle drags the bottom edge.
    pub fn moves_bottom(&self) -> bool {
        matches!(self, Self::S | Self::Se | Self::Sw)
    }

    /// Centre of the handle on `rect`.
    pub fn anchor_point(&self, rect: Rect) -> Point {
        let x = if self.moves_left() {
            rect.x as f64
        } else if self.moves_right() {
            rect.right() as f64
        } else {
            rect.x as f64 + rect.width as f64 / 2.0
        };
        let y = if self.moves_top() {
            rect.y as f64
        } else if self.moves_bottom() {
            rect.bottom() as f64
        } else {
            rect.y as f64 + rect.height as f64 / 2.0
        };
        Point::new(x, y)
    }

    /// Finds the handle of `rect` under `point`, if any.
    pub fn hit_test(rect: Rect, point: Point) -> Option<Self> {
        let half = HANDLE_SIZE / 2.0;
        Self::ALL.into_iter().find(|handle| {
            let anchor = handle.anchor_point(rect);
            (point.x - anchor.x).abs() <= half && (point.y - anchor.y).abs() <= half
        })
    }
}

impl std::fmt::Display for ResizeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.token())
    }
}

/// Keyboard modifiers held during a pointer press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        shift: false,
        meta: false,
    };

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::NONE
        }
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::NONE
        }
    }

    /// Any of ctrl/shift/meta toggles selection instead of replacing it.
    pub fn is_additive(&self) -> bool {
        self.ctrl || self.shift || self.meta
    }
}

/// Moves a drag origin by the cumulative pointer delta.
///
/// The snapped result is floored at 0; there is no upper bound.
pub fn drag_position(origin: (i32, i32), delta: (i32, i32), snap: bool) -> (i32, i32) {
    let mut x = origin.0.saturating_add(delta.0);
    let mut y = origin.1.saturating_add(delta.1);
    if snap {
        x = snap_to_grid(x);
        y = snap_to_grid(y);
    }
    (x.max(0), y.max(0))
}

/// Resizes `origin` by dragging `handle` by `delta`.
///
/// With `snap`, the dimension on each moved axis and the moved left/top edge
/// are rounded to the grid. Width and height never go below
/// [`MIN_ELEMENT_SIZE`]; when the left or top edge is dragged past that
/// limit the opposite edge stays fixed.
pub fn resize_rect(origin: Rect, handle: ResizeHandle, delta: (i32, i32), snap: bool) -> Rect {
    let round = |v: i32| if snap { snap_to_grid(v) } else { v };
    let (dx, dy) = delta;
    let mut rect = origin;

    if handle.moves_right() {
        rect.width = round(origin.width.saturating_add(dx));
    }
    if handle.moves_left() {
        rect.x = round(origin.x.saturating_add(dx));
        rect.width = round(origin.width.saturating_sub(dx));
    }
    if handle.moves_bottom() {
        rect.height = round(origin.height.saturating_add(dy));
    }
    if handle.moves_top() {
        rect.y = round(origin.y.saturating_add(dy));
        rect.height = round(origin.height.saturating_sub(dy));
    }

    if rect.width < MIN_ELEMENT_SIZE {
        if handle.moves_left() {
            rect.x = origin.right().saturating_sub(MIN_ELEMENT_SIZE);
        }
        rect.width = MIN_ELEMENT_SIZE;
    }
    if rect.height < MIN_ELEMENT_SIZE {
        if handle.moves_top() {
            rect.y = origin.bottom().saturating_sub(MIN_ELEMENT_SIZE);
        }
        rect.height = MIN_ELEMENT_SIZE;
    }

    if rect.x < 0 {
        rect.width = rect.width.saturating_add(rect.x).max(MIN_ELEMENT_SIZE);
        rect.x = 0;
    }
    if rect.y < 0 {
        rect.height = rect.height.saturating_add(rect.y).max(MIN_ELEMENT_SIZE);
        rect.y = 0;
    }
    rect
}

/// An in-progress drag of the whole selection.
#[derive(Debug, Clone, PartialEq)]
pub struct DragGesture {
    pub start: Point,
    /// Position of every dragged element when the gesture began.
    pub origins: Vec<(ElementId, i32, i32)>,
}

impl DragGesture {
    pub fn new(start: Point, origins: Vec<(ElementId, i32, i32)>) -> Self {
        Self { start, origins }
    }

    /// New positions for the dragged elements with the pointer at `pointer`.
    pub fn positions(&self, pointer: Point, snap: bool) -> Vec<(ElementId, i32, i32)> {
        let delta = pointer.delta_from(self.start);
        self.origins
            .iter()
            .map(|&(id, x, y)| {
                let (nx, ny) = drag_position((x, y), delta, snap);
                (id, nx, ny)
            })
            .collect()
    }
}

/// An in-progress resize of a single element.
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeGesture {
    pub id: ElementId,
    pub handle: ResizeHandle,
    pub start: Point,
    pub origin: Rect,
}

impl ResizeGesture {
    pub fn new(id: ElementId, handle: ResizeHandle, start: Point, origin: Rect) -> Self {
        Self {
            id,
            handle,
            start,
            origin,
        }
    }

    /// The element's rectangle with the pointer at `pointer`.
    pub fn rect(&self, pointer: Point, snap: bool) -> Rect {
        resize_rect(self.origin, self.handle, pointer.delta_from(self.start), snap)
    }
}

/// Interaction state machine. Exactly one gesture can be active.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    Dragging(DragGesture),
    Resizing(ResizeGesture),
}

impl InteractionState {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Self::Resizing(_))
    }

    /// Operation name used when the gesture is recorded.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Dragging(_) => "drag",
            Self::Resizing(_) => "resize",
        }
    }
}
