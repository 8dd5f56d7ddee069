//! Label layouts: a named, fixed-size canvas holding an ordered element list.

use crate::element::Element;
use labelkit_core::ElementId;
use serde::{Deserialize, Serialize};

/// Width of the standard label canvas, in canvas units.
pub const STANDARD_CANVAS_WIDTH: i32 = 400;
/// Height of the standard label canvas, in canvas units.
pub const STANDARD_CANVAS_HEIGHT: i32 = 600;

/// A label layout.
///
/// Element order is paint order: later elements are drawn above earlier ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub is_default: bool,
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl Layout {
    /// Creates an empty layout on the standard canvas.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::with_size(id, name, STANDARD_CANVAS_WIDTH, STANDARD_CANVAS_HEIGHT)
    }

    /// Creates an empty layout with an explicit canvas size.
    pub fn with_size(id: impl Into<String>, name: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_default: false,
            width,
            height,
            elements: Vec::new(),
        }
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|e| e.id == id)
    }

    pub fn element_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id == id)
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.element(id).is_some()
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Ids of all elements, in paint order.
    pub fn element_ids(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.elements.iter().map(|e| e.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use labelkit_core::ElementType;

    #[test]
    fn test_new_layout_uses_standard_canvas() {
        let layout = Layout::new("l1", "Retail");
        assert_eq!((layout.width, layout.height), (400, 600));
        assert!(!layout.is_default);
        assert_eq!(layout.element_count(), 0);
    }

    #[test]
    fn test_element_lookup() {
        let mut layout = Layout::new("l1", "Retail");
        layout.elements.push(Element::new(3, ElementType::Variety));
        layout.elements.push(Element::new(5, ElementType::Quality));

        assert!(layout.contains(5));
        assert!(!layout.contains(4));
        layout.element_mut(3).unwrap().x = 90;
        assert_eq!(layout.element(3).unwrap().x, 90);
        assert_eq!(layout.element_ids().collect::<Vec<_>>(), vec![3, 5]);
    }

    #[test]
    fn test_layout_json_shape() {
        let json = r#"{
            "id": "abc",
            "name": "Export",
            "isDefault": true,
            "width": 400,
            "height": 600,
            "elements": [
                {"id": 1, "type": "palletId", "label": "Pallet ID",
                 "x": 0, "y": 0, "width": 120, "height": 40, "fontSize": 18}
            ]
        }"#;
        let layout: Layout = serde_json::from_str(json).unwrap();
        assert!(layout.is_default);
        assert_eq!(layout.elements[0].element_type, ElementType::PalletId);
        assert!(!layout.elements[0].is_bold);
    }
}
