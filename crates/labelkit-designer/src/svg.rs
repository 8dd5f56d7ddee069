//! SVG export of a rendered label.
//!
//! Produces a standalone document the size of the canvas: a white page with
//! one `<text>` node per element, drawn in paint order.

use crate::element::TextAlign;
use crate::layout::Layout;
use crate::preview::{PreviewEngine, RenderContext, RenderedText, TextMeasure};

/// Font family written into the exported document.
pub const FONT_FAMILY: &str = "Helvetica, Arial, sans-serif";

/// Escapes text for use in SVG character data and attribute values.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

fn text_anchor(align: TextAlign) -> &'static str {
    match align {
        TextAlign::Left => "start",
        TextAlign::Center => "middle",
        TextAlign::Right => "end",
    }
}

fn text_node(item: &RenderedText) -> String {
    let weight = if item.is_bold { "bold" } else { "normal" };
    format!(
        r#"    <text data-id="{}" x="{}" y="{}" font-size="{}" font-weight="{}" text-anchor="{}" dominant-baseline="middle">{}</text>"#,
        item.id,
        item.anchor_x,
        item.center_y,
        item.font_size,
        weight,
        text_anchor(item.text_align),
        escape_xml(&item.text)
    )
}

/// Renders `layout` to an SVG document using `engine`.
pub fn render_layout_svg_with<M: TextMeasure>(
    engine: &PreviewEngine<M>,
    layout: &Layout,
    ctx: RenderContext<'_>,
) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = layout.width,
        h = layout.height
    ));
    svg.push('\n');
    svg.push_str(&format!("  <title>{}</title>\n", escape_xml(&layout.name)));
    svg.push_str(&format!(
        r#"  <rect x="0" y="0" width="{}" height="{}" fill="white"/>"#,
        layout.width, layout.height
    ));
    svg.push('\n');
    svg.push_str(&format!(r#"  <g font-family="{}" fill="black">"#, FONT_FAMILY));
    svg.push('\n');
    for item in engine.render_layout(layout, ctx) {
        svg.push_str(&text_node(&item));
        svg.push('\n');
    }
    svg.push_str("  </g>\n</svg>\n");
    svg
}

/// Renders `layout` to an SVG document with today's date.
pub fn render_layout_svg(layout: &Layout, ctx: RenderContext<'_>) -> String {
    render_layout_svg_with(&PreviewEngine::new(), layout, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{Element, ElementPatch};
    use chrono::NaiveDate;
    use labelkit_core::{ElementType, FieldValues};

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml(r#"A&B <"x"> 'y'"#), "A&amp;B &lt;&quot;x&quot;&gt; &apos;y&apos;");
    }

    #[test]
    fn test_document_contents() {
        let mut layout = Layout::new("l1", "Crates & Boxes");
        let mut el = Element::new(1, ElementType::Producer);
        el.apply(&ElementPatch::new().with_bold(true).with_text_align(TextAlign::Center));
        layout.elements.push(el);

        let values = FieldValues::new().with(ElementType::Producer, "Smith <Farm>");
        let engine = PreviewEngine::with_today(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let svg = render_layout_svg_with(&engine, &layout, RenderContext::Live(&values));

        assert!(svg.starts_with("<svg "));
        assert!(svg.contains(r#"width="400" height="600""#));
        assert!(svg.contains("<title>Crates &amp; Boxes</title>"));
        assert!(svg.contains(r#"font-weight="bold""#));
        assert!(svg.contains(r#"text-anchor="middle""#));
        assert!(svg.contains(r#"x="120" y="35""#));
        assert!(svg.contains(">Smith &lt;Farm&gt;</text>"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_document_layout() {
        let mut layout = Layout::new("l1", "Pallet");
        layout.elements.push(Element::new(1, ElementType::LotCode));
        layout.elements.push(Element::new(2, ElementType::CaseCount));
        let engine = PreviewEngine::with_today(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        let svg = render_layout_svg_with(&engine, &layout, RenderContext::Design);

        let lines: Vec<_> = svg.lines().collect();
        assert_eq!(lines.len(), 8);
        assert!(lines[3].starts_with("  <g font-family="));
        assert!(lines[4].starts_with(r#"    <text data-id="1""#));
        assert!(lines[5].starts_with(r#"    <text data-id="2""#));
        assert_eq!(&lines[6..], &["  </g>", "</svg>"]);
        assert!(svg.ends_with("</svg>\n"));
    }
}
