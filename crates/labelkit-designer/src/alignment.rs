//! Alignment engine.
//!
//! A single selected element aligns to the canvas bounds. Two or more align
//! to the anchor's rectangle, and the anchor itself stays put.

use crate::element::Element;
use crate::geometry::Rect;
use labelkit_core::ElementId;
use serde::{Deserialize, Serialize};

/// Alignment direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Alignment {
    Left,
    CenterX,
    Right,
    Top,
    CenterY,
    Bottom,
}

/// `start + extent/2 - size/2`, saturating.
fn centre_start(start: i32, extent: i32, size: i32) -> i32 {
    start.saturating_add(extent / 2).saturating_sub(size / 2)
}

/// Aligns `rect` against `target` and returns the new top-left corner.
///
/// Only the coordinate on the alignment axis changes. Results are floored
/// at 0 so an element wider than the canvas stays on it.
pub fn align_rect(rect: Rect, target: Rect, alignment: Alignment) -> (i32, i32) {
    let (x, y) = match alignment {
        Alignment::Left => (target.x, rect.y),
        Alignment::CenterX => (centre_start(target.x, target.width, rect.width), rect.y),
        Alignment::Right => (target.right().saturating_sub(rect.width), rect.y),
        Alignment::Top => (rect.x, target.y),
        Alignment::CenterY => (rect.x, centre_start(target.y, target.height, rect.height)),
        Alignment::Bottom => (rect.x, target.bottom().saturating_sub(rect.height)),
    };
    (x.max(0), y.max(0))
}

fn split_free_space(start: i32, extent: i32, size: i32) -> i32 {
    start.saturating_add(extent.saturating_sub(size) / 2).max(0)
}

/// Aligns `rect` inside the canvas bounds and returns the new top-left corner.
///
/// Same as [`align_rect`] except that centering splits the free space
/// (`(canvas - size) / 2`) instead of matching centre lines.
pub fn align_to_canvas(rect: Rect, canvas: Rect, alignment: Alignment) -> (i32, i32) {
    match alignment {
        Alignment::CenterX => (split_free_space(canvas.x, canvas.width, rect.width), rect.y),
        Alignment::CenterY => (rect.x, split_free_space(canvas.y, canvas.height, rect.height)),
        _ => align_rect(rect, canvas, alignment),
    }
}

/// Computes the new positions for aligning the selection.
///
/// # Arguments
/// * `elements` - The layout's elements
/// * `selected` - Selected ids; the last one is the anchor
/// * `canvas` - Canvas bounds, used when exactly one element is selected
/// * `alignment` - Direction to align in
///
/// # Returns
/// `(id, x, y)` for every element that should move. Empty when the selection
/// is empty or refers to no existing element.
pub fn calculate_alignment(
    elements: &[Element],
    selected: &[ElementId],
    canvas: Rect,
    alignment: Alignment,
) -> Vec<(ElementId, i32, i32)> {
    let find = |id: ElementId| elements.iter().find(|e| e.id == id);

    match selected {
        [] => Vec::new(),
        [only] => find(*only)
            .map(|el| {
                let (x, y) = align_to_canvas(el.rect(), canvas, alignment);
                vec![(el.id, x, y)]
            })
            .unwrap_or_default(),
        [members @ .., anchor_id] => {
            let Some(anchor) = find(*anchor_id) else {
                return Vec::new();
            };
            let target = anchor.rect();
            members
                .iter()
                .filter_map(|id| find(*id))
                .map(|el| {
                    let (x, y) = align_rect(el.rect(), target, alignment);
                    (el.id, x, y)
                })
                .collect()
        }
    }
}
