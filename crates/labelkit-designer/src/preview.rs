//! Render/preview engine.
//!
//! Resolves each element to the single line of text it shows on the label.
//! Design mode fills bound fields with fixed sample data so the operator can
//! judge sizes; preview mode uses the live field values and falls back to a
//! per-type placeholder for anything missing.

use crate::element::{Element, TextAlign};
use crate::geometry::Rect;
use crate::layout::Layout;
use chrono::{Local, NaiveDate};
use labelkit_core::{ElementId, ElementType, FieldValues, Placeholder};

/// Appended to text that had to be cut to fit its element.
pub const ELLIPSIS: char = '\u{2026}';

/// Format used for the date field.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Horizontal padding between an element's border and its text, per side.
pub const TEXT_PADDING: i32 = 4;

const TEXT_PLACEHOLDER: &str = "---";
const DECIMAL_PLACEHOLDER: &str = "0.00";
const COUNT_PLACEHOLDER: &str = "0";

/// Where bound field values come from.
#[derive(Debug, Clone, Copy)]
pub enum RenderContext<'a> {
    /// Representative sample data, used while designing.
    Design,
    /// Values supplied by the caller, used for preview and printing.
    Live(&'a FieldValues),
}

/// Sample text shown for a bound field in design mode.
///
/// `None` for the date, which always shows the current date, and for static
/// text, which has no binding.
pub fn sample_value(element_type: ElementType) -> Option<&'static str> {
    match element_type {
        ElementType::RawMaterial => Some("Apple"),
        ElementType::ProductType => Some("Fresh fruit"),
        ElementType::Variety => Some("Gala"),
        ElementType::Quality => Some("Extra"),
        ElementType::LotCode => Some("L-2024-0001"),
        ElementType::Producer => Some("Green Valley Farms"),
        ElementType::Packaging => Some("Carton 10 kg"),
        ElementType::Weight => Some("10.00"),
        ElementType::CaseCount => Some("48"),
        ElementType::PalletId => Some("PAL-000123"),
        ElementType::CompanyInfo => Some("Acme Produce Co. - 123 Orchard Rd"),
        ElementType::Date | ElementType::StaticText => None,
    }
}

/// Measures rendered text width in canvas units.
pub trait TextMeasure {
    fn text_width(&self, text: &str, font_size: u32, bold: bool) -> f64;
}

/// Approximates every glyph with the same advance, a fraction of the font size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AverageCharWidth {
    pub regular_em: f64,
    pub bold_em: f64,
}

impl Default for AverageCharWidth {
    fn default() -> Self {
        Self {
            regular_em: 0.6,
            bold_em: 0.65,
        }
    }
}

impl TextMeasure for AverageCharWidth {
    fn text_width(&self, text: &str, font_size: u32, bold: bool) -> f64 {
        let em = if bold { self.bold_em } else { self.regular_em };
        text.chars().count() as f64 * em * font_size as f64
    }
}

/// One element, resolved and laid out for drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedText {
    pub id: ElementId,
    /// The element's box.
    pub rect: Rect,
    /// What is drawn, possibly cut with [`ELLIPSIS`].
    pub text: String,
    /// `prefix + value + suffix` before fitting.
    pub full_text: String,
    pub truncated: bool,
    /// Horizontal text anchor; its meaning depends on `text_align`.
    pub anchor_x: f64,
    /// Vertical centre of the element; text is drawn middle-aligned on it.
    pub center_y: f64,
    pub font_size: u32,
    pub is_bold: bool,
    pub text_align: TextAlign,
}

/// Turns elements into display text.
#[derive(Debug, Clone)]
pub struct PreviewEngine<M = AverageCharWidth> {
    today: NaiveDate,
    measure: M,
}

impl PreviewEngine<AverageCharWidth> {
    /// Engine using the local current date and the average-width measure.
    pub fn new() -> Self {
        Self::with_today(Local::now().date_naive())
    }

    /// Engine with a fixed "today", for deterministic output.
    pub fn with_today(today: NaiveDate) -> Self {
        Self {
            today,
            measure: AverageCharWidth::default(),
        }
    }
}

impl Default for PreviewEngine<AverageCharWidth> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: TextMeasure> PreviewEngine<M> {
    /// Swaps the text measure, e.g. for one backed by real font metrics.
    pub fn with_measure<N: TextMeasure>(self, measure: N) -> PreviewEngine<N> {
        PreviewEngine {
            today: self.today,
            measure,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    fn formatted_today(&self) -> String {
        self.today.format(DATE_FORMAT).to_string()
    }

    fn placeholder(&self, placeholder: Placeholder) -> String {
        match placeholder {
            Placeholder::Text => TEXT_PLACEHOLDER.to_string(),
            Placeholder::Decimal => DECIMAL_PLACEHOLDER.to_string(),
            Placeholder::Count => COUNT_PLACEHOLDER.to_string(),
            Placeholder::Today => self.formatted_today(),
        }
    }

    /// The element's value without prefix or suffix.
    pub fn resolve_value(&self, element: &Element, ctx: RenderContext<'_>) -> String {
        let Some(placeholder) = element.element_type.placeholder() else {
            return element.custom_text.clone().unwrap_or_default();
        };

        let value = match ctx {
            RenderContext::Design => sample_value(element.element_type),
            RenderContext::Live(values) => values.get(element.element_type),
        };
        match value {
            Some(v) => v.to_string(),
            None => self.placeholder(placeholder),
        }
    }

    /// `prefix + value + suffix`.
    pub fn display_text(&self, element: &Element, ctx: RenderContext<'_>) -> String {
        let mut text = String::new();
        if let Some(prefix) = &element.prefix {
            text.push_str(prefix);
        }
        text.push_str(&self.resolve_value(element, ctx));
        if let Some(suffix) = &element.suffix {
            text.push_str(suffix);
        }
        text
    }

    /// Cuts `text` so it fits `max_width`, ending it with an ellipsis.
    ///
    /// Returns the fitted text and whether anything was removed. The ellipsis
    /// is kept even when nothing else fits.
    pub fn fit_text(&self, text: &str, max_width: f64, font_size: u32, bold: bool) -> (String, bool) {
        if self.measure.text_width(text, font_size, bold) <= max_width {
            return (text.to_string(), false);
        }

        let chars: Vec<char> = text.chars().collect();
        for len in (0..chars.len()).rev() {
            let mut candidate: String = chars[..len].iter().collect();
            let trimmed = candidate.trim_end().len();
            candidate.truncate(trimmed);
            candidate.push(ELLIPSIS);
            if self.measure.text_width(&candidate, font_size, bold) <= max_width {
                return (candidate, true);
            }
        }
        (ELLIPSIS.to_string(), true)
    }

    /// Resolves and lays out one element.
    pub fn render_element(&self, element: &Element, ctx: RenderContext<'_>) -> RenderedText {
        let rect = element.rect();
        let full_text = self.display_text(element, ctx);
        let inner_width = rect.width.saturating_sub(2 * TEXT_PADDING).max(0) as f64;
        let (text, truncated) = self.fit_text(&full_text, inner_width, element.font_size, element.is_bold);

        let anchor_x = match element.text_align {
            TextAlign::Left => rect.x as f64 + TEXT_PADDING as f64,
            TextAlign::Center => rect.x as f64 + rect.width as f64 / 2.0,
            TextAlign::Right => rect.x as f64 + rect.width as f64 - TEXT_PADDING as f64,
        };

        RenderedText {
            id: element.id,
            rect,
            text,
            full_text,
            truncated,
            anchor_x,
            center_y: rect.y as f64 + rect.height as f64 / 2.0,
            font_size: element.font_size,
            is_bold: element.is_bold,
            text_align: element.text_align,
        }
    }

    /// Every element of `layout`, in paint order.
    pub fn render_layout(&self, layout: &Layout, ctx: RenderContext<'_>) -> Vec<RenderedText> {
        layout
            .elements
            .iter()
            .map(|el| self.render_element(el, ctx))
            .collect()
    }
}

/// Renders `layout` with today's date and the default text measure.
pub fn render_layout(layout: &Layout, ctx: RenderContext<'_>) -> Vec<RenderedText> {
    PreviewEngine::new().render_layout(layout, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::ElementPatch;

    fn engine() -> PreviewEngine {
        PreviewEngine::with_today(NaiveDate::from_ymd_opt(2024, 3, 7).unwrap())
    }

    #[test]
    fn test_static_text_uses_custom_text() {
        let mut el = Element::new(1, ElementType::StaticText);
        el.apply(&ElementPatch::new().with_custom_text("Keep cool"));
        let values = FieldValues::new().with(ElementType::Variety, "Fuji");
        assert_eq!(engine().resolve_value(&el, RenderContext::Design), "Keep cool");
        assert_eq!(engine().resolve_value(&el, RenderContext::Live(&values)), "Keep cool");

        el.custom_text = None;
        assert_eq!(engine().resolve_value(&el, RenderContext::Design), "");
    }

    #[test]
    fn test_live_values_and_placeholders() {
        let values = FieldValues::new()
            .with(ElementType::Variety, "Fuji")
            .with(ElementType::Producer, "   ");
        let ctx = RenderContext::Live(&values);
        let e = engine();

        assert_eq!(e.resolve_value(&Element::new(1, ElementType::Variety), ctx), "Fuji");
        assert_eq!(e.resolve_value(&Element::new(2, ElementType::Producer), ctx), "---");
        assert_eq!(e.resolve_value(&Element::new(3, ElementType::Weight), ctx), "0.00");
        assert_eq!(e.resolve_value(&Element::new(4, ElementType::CaseCount), ctx), "0");
        assert_eq!(e.resolve_value(&Element::new(5, ElementType::Date), ctx), "07/03/2024");
    }

    #[test]
    fn test_design_uses_samples() {
        let e = engine();
        assert_eq!(e.resolve_value(&Element::new(1, ElementType::Variety), RenderContext::Design), "Gala");
        assert_eq!(e.resolve_value(&Element::new(2, ElementType::Date), RenderContext::Design), "07/03/2024");
        for t in ElementType::ALL {
            let value = e.resolve_value(&Element::new(1, t), RenderContext::Design);
            assert_eq!(value.is_empty(), t == ElementType::StaticText);
        }
    }

    #[test]
    fn test_display_text_wraps_prefix_and_suffix() {
        let mut el = Element::new(1, ElementType::Weight);
        el.apply(&ElementPatch::new().with_prefix("Net: ").with_suffix(" kg"));
        let values = FieldValues::new().with(ElementType::Weight, "12.50");
        assert_eq!(engine().display_text(&el, RenderContext::Live(&values)), "Net: 12.50 kg");
    }

    #[test]
    fn test_fit_text_adds_ellipsis() {
        let e = engine();
        // 10pt regular: 6 units per glyph
        assert_eq!(e.fit_text("abcdef", 36.0, 10, false), ("abcdef".to_string(), false));
        assert_eq!(e.fit_text("abcdefg", 36.0, 10, false), ("abcde\u{2026}".to_string(), true));
        assert_eq!(e.fit_text("ab cdefg", 24.0, 10, false), ("ab\u{2026}".to_string(), true));
        assert_eq!(e.fit_text("abc", 1.0, 10, false), ("\u{2026}".to_string(), true));
    }

    #[test]
    fn test_render_element_geometry() {
        let mut el = Element::new(1, ElementType::CaseCount);
        el.apply(&ElementPatch::new().with_text_align(TextAlign::Right));
        let out = engine().render_element(&el, RenderContext::Design);

        assert_eq!(out.text, "48");
        assert!(!out.truncated);
        assert_eq!(out.center_y, 35.0);
        assert_eq!(out.anchor_x, 216.0);

        el.apply(&ElementPatch::new().with_text_align(TextAlign::Center).with_height(31));
        let out = engine().render_element(&el, RenderContext::Design);
        assert_eq!(out.anchor_x, 120.0);
        assert_eq!(out.center_y, 35.5);
    }

    #[test]
    fn test_far_element_renders() {
        let mut el = Element::new(1, ElementType::PalletId);
        el.apply(
            &ElementPatch::new()
                .with_x(i32::MAX - 100)
                .with_y(i32::MAX - 10)
                .with_text_align(TextAlign::Right),
        );
        let out = engine().render_element(&el, RenderContext::Design);
        assert_eq!(out.anchor_x, (i32::MAX - 100) as f64 + 196.0);
        assert_eq!(out.center_y, (i32::MAX - 10) as f64 + 15.0);
        assert_eq!(out.text, "PAL-000123");
    }

    #[test]
    fn test_long_value_is_truncated() {
        let mut el = Element::new(1, ElementType::CompanyInfo);
        el.apply(&ElementPatch::new().with_width(100));
        let out = engine().render_element(&el, RenderContext::Design);
        assert!(out.truncated);
        assert!(out.text.ends_with(ELLIPSIS));
        assert!(AverageCharWidth::default().text_width(&out.text, 14, false) <= 92.0);
        assert_eq!(out.full_text, "Acme Produce Co. - 123 Orchard Rd");
    }

    #[test]
    fn test_render_layout_keeps_paint_order() {
        let mut layout = Layout::new("l", "Test");
        layout.elements.push(Element::new(4, ElementType::Quality));
        layout.elements.push(Element::new(2, ElementType::Variety));
        let ids: Vec<_> = engine()
            .render_layout(&layout, RenderContext::Design)
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![4, 2]);
    }
}
