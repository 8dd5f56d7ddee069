//! Label elements: placed, sized and styled fields or static text boxes.

use crate::geometry::Rect;
use labelkit_core::{ElementId, ElementType};
use serde::{Deserialize, Serialize};

/// Smallest width or height an element may have.
pub const MIN_ELEMENT_SIZE: i32 = 10;
/// Smallest allowed font size, in points.
pub const MIN_FONT_SIZE: u32 = 8;
/// Largest allowed font size, in points.
pub const MAX_FONT_SIZE: u32 = 72;

/// Geometry and style given to newly added elements.
pub const DEFAULT_X: i32 = 20;
pub const DEFAULT_Y: i32 = 20;
pub const DEFAULT_WIDTH: i32 = 200;
pub const DEFAULT_HEIGHT: i32 = 30;
pub const DEFAULT_FONT_SIZE: u32 = 14;

/// Text used to seed new static text elements.
pub const DEFAULT_STATIC_TEXT: &str = "Text";

/// Horizontal text alignment inside an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// A field or static text box placed on a label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: ElementId,
    #[serde(rename = "type")]
    pub element_type: ElementType,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    pub font_size: u32,
    #[serde(default)]
    pub is_bold: bool,
    #[serde(default)]
    pub text_align: TextAlign,
}

impl Element {
    /// Creates an element of the given type with the default geometry.
    pub fn new(id: ElementId, element_type: ElementType) -> Self {
        let custom_text = match element_type {
            ElementType::StaticText => Some(DEFAULT_STATIC_TEXT.to_string()),
            _ => None,
        };

        Self {
            id,
            element_type,
            label: element_type.display_name().to_string(),
            custom_text,
            prefix: None,
            suffix: None,
            x: DEFAULT_X,
            y: DEFAULT_Y,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            font_size: DEFAULT_FONT_SIZE,
            is_bold: false,
            text_align: TextAlign::Left,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Moves and resizes the element, keeping it within the geometry invariants.
    pub fn set_rect(&mut self, rect: Rect) {
        self.x = rect.x.max(0);
        self.y = rect.y.max(0);
        self.width = rect.width.max(MIN_ELEMENT_SIZE);
        self.height = rect.height.max(MIN_ELEMENT_SIZE);
    }

    /// Pulls geometry and font size back inside the element invariants.
    ///
    /// Used on layouts loaded from a store, which may predate the limits.
    pub fn normalize(&mut self) {
        self.set_rect(self.rect());
        self.font_size = self.font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    }

    /// Applies a partial update. Values are clamped to the element invariants.
    ///
    /// Custom text only applies to static text elements; an empty prefix or
    /// suffix clears it.
    pub fn apply(&mut self, patch: &ElementPatch) {
        if let Some(text) = &patch.custom_text {
            if self.element_type == ElementType::StaticText {
                self.custom_text = Some(text.clone());
            }
        }
        if let Some(prefix) = &patch.prefix {
            self.prefix = non_empty(prefix);
        }
        if let Some(suffix) = &patch.suffix {
            self.suffix = non_empty(suffix);
        }
        if let Some(x) = patch.x {
            self.x = x.max(0);
        }
        if let Some(y) = patch.y {
            self.y = y.max(0);
        }
        if let Some(width) = patch.width {
            self.width = width.max(MIN_ELEMENT_SIZE);
        }
        if let Some(height) = patch.height {
            self.height = height.max(MIN_ELEMENT_SIZE);
        }
        if let Some(font_size) = patch.font_size {
            self.font_size = font_size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
        }
        if let Some(is_bold) = patch.is_bold {
            self.is_bold = is_bold;
        }
        if let Some(text_align) = patch.text_align {
            self.text_align = text_align;
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Partial element update; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ElementPatch {
    pub custom_text: Option<String>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    pub x: Option<i32>,
    pub y: Option<i32>,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub font_size: Option<u32>,
    pub is_bold: Option<bool>,
    pub text_align: Option<TextAlign>,
}

impl ElementPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(x: i32, y: i32) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    pub fn size(width: i32, height: i32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
            ..Self::default()
        }
    }

    pub fn with_custom_text(mut self, text: impl Into<String>) -> Self {
        self.custom_text = Some(text.into());
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }

    pub fn with_x(mut self, x: i32) -> Self {
        self.x = Some(x);
        self
    }

    pub fn with_y(mut self, y: i32) -> Self {
        self.y = Some(y);
        self
    }

    pub fn with_width(mut self, width: i32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: i32) -> Self {
        self.height = Some(height);
        self
    }

    pub fn with_font_size(mut self, font_size: u32) -> Self {
        self.font_size = Some(font_size);
        self
    }

    pub fn with_bold(mut self, is_bold: bool) -> Self {
        self.is_bold = Some(is_bold);
        self
    }

    pub fn with_text_align(mut self, text_align: TextAlign) -> Self {
        self.text_align = Some(text_align);
        self
    }

    /// Whether applying the patch would change nothing.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
