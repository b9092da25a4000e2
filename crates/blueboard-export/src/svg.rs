//! SVG document writer.
//!
//! Builds the document as a plain string; elements are emitted in paint
//! order, each wrapped in a translate+rotate group so the figures from the
//! draw descriptor stay in local coordinates.

use blueboard_core::style::{outline_color, wash_color};
use blueboard_core::{Element, Figure, SerializableColor, draw_spec};
use kurbo::Rect;

const STROKE_WIDTH: f64 = 2.0;
const CAPTION_FONT_SIZE: f64 = 10.0;
const LABEL_FONT_SIZE: f64 = 11.0;

/// Render elements into a standalone SVG document.
pub fn render_svg(elements: &[Element], bounds: Rect, background: SerializableColor) -> String {
    let stroke = outline_color().to_css();
    let wash = wash_color().to_css();

    let mut out = String::new();
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"{} {} {} {}\">\n",
        bounds.width(),
        bounds.height(),
        bounds.x0,
        bounds.y0,
        bounds.width(),
        bounds.height(),
    ));
    out.push_str(&format!(
        "  <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
        bounds.x0,
        bounds.y0,
        bounds.width(),
        bounds.height(),
        background.to_css(),
    ));

    let mut ordered: Vec<&Element> = elements.iter().collect();
    ordered.sort_by_key(|el| el.z_index);

    for el in ordered {
        write_element(&mut out, el, &stroke, &wash);
    }

    out.push_str("</svg>\n");
    out
}

fn write_element(out: &mut String, el: &Element, stroke: &str, wash: &str) {
    let spec = draw_spec(el.kind);
    let (w, h) = (el.width, el.height);

    if el.rotation != 0.0 {
        out.push_str(&format!(
            "  <g transform=\"translate({} {}) rotate({} {} {})\">\n",
            el.x,
            el.y,
            el.rotation,
            w / 2.0,
            h / 2.0,
        ));
    } else {
        out.push_str(&format!("  <g transform=\"translate({} {})\">\n", el.x, el.y));
    }

    // Outline.
    if spec.solid {
        out.push_str(&format!(
            "    <rect width=\"{w}\" height=\"{h}\" fill=\"{stroke}\"/>\n"
        ));
    } else {
        out.push_str(&format!(
            "    <rect width=\"{w}\" height=\"{h}\" fill=\"{wash}\" stroke=\"{stroke}\" stroke-width=\"{STROKE_WIDTH}\"/>\n"
        ));
    }

    for figure in spec.decorations {
        write_figure(out, *figure, w, h, stroke);
    }

    if spec.caption {
        out.push_str(&format!(
            "    <text x=\"{}\" y=\"{}\" font-size=\"{CAPTION_FONT_SIZE}\" text-anchor=\"middle\" fill=\"{stroke}\">{}</text>\n",
            w / 2.0,
            h / 2.0,
            escape(&el.kind.display_name().to_uppercase()),
        ));
    }

    if let Some(label) = &el.label {
        out.push_str(&format!(
            "    <text x=\"{}\" y=\"{}\" font-size=\"{LABEL_FONT_SIZE}\" text-anchor=\"middle\" fill=\"{stroke}\">{}</text>\n",
            w / 2.0,
            h + 14.0,
            escape(label),
        ));
    }

    out.push_str("  </g>\n");
}

fn write_figure(out: &mut String, figure: Figure, w: f64, h: f64, stroke: &str) {
    match figure {
        Figure::Rect {
            x,
            y,
            w: fw,
            h: fh,
            filled,
        } => {
            let (fill, outline) = if filled {
                (stroke.to_string(), String::new())
            } else {
                (
                    "none".to_string(),
                    format!(" stroke=\"{stroke}\" stroke-width=\"{STROKE_WIDTH}\""),
                )
            };
            out.push_str(&format!(
                "    <rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{fill}\"{outline}/>\n",
                x * w,
                y * h,
                fw * w,
                fh * h,
            ));
        }
        Figure::Ellipse {
            cx,
            cy,
            rx,
            ry,
            filled,
        } => {
            let (fill, outline) = if filled {
                (stroke.to_string(), String::new())
            } else {
                (
                    "none".to_string(),
                    format!(" stroke=\"{stroke}\" stroke-width=\"{STROKE_WIDTH}\""),
                )
            };
            out.push_str(&format!(
                "    <ellipse cx=\"{}\" cy=\"{}\" rx=\"{}\" ry=\"{}\" fill=\"{fill}\"{outline}/>\n",
                cx * w,
                cy * h,
                rx * w,
                ry * h,
            ));
        }
        Figure::Line { x1, y1, x2, y2 } => {
            out.push_str(&format!(
                "    <line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{stroke}\" stroke-width=\"{STROKE_WIDTH}\"/>\n",
                x1 * w,
                y1 * h,
                x2 * w,
                y2 * h,
            ));
        }
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export_bounds;
    use blueboard_core::{ElementKind, GridSettings, Scene};
    use kurbo::Point;

    fn free_grid() -> GridSettings {
        GridSettings {
            snap: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_document_shape() {
        let mut scene = Scene::new();
        scene.add(ElementKind::Bed, Point::new(100.0, 60.0), &free_grid());
        let bounds = export_bounds(&scene.elements).unwrap();
        let svg = render_svg(&scene.elements, bounds, SerializableColor::white());

        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.contains("viewBox=\"50 10 180 220\""));
        // Background rect precedes the element group.
        let bg = svg.find("fill=\"rgba(255,255,255,1.000)\"").unwrap();
        let group = svg.find("<g transform").unwrap();
        assert!(bg < group);
        assert!(svg.contains("translate(100 60)"));
        // Bed caption in blueprint blue.
        assert!(svg.contains(">BED</text>"));
        assert!(svg.contains("stroke=\"rgba(96,165,250,1.000)\""));
    }

    #[test]
    fn test_rotation_emits_centered_rotate() {
        let mut scene = Scene::new();
        let id = scene.add(ElementKind::Desk, Point::new(0.0, 0.0), &free_grid());
        scene.set_rotation(id, 90.0);
        let bounds = export_bounds(&scene.elements).unwrap();
        let svg = render_svg(&scene.elements, bounds, SerializableColor::white());
        assert!(svg.contains("rotate(90 50 30)"));
    }

    #[test]
    fn test_paint_order_follows_z_index() {
        let mut scene = Scene::new();
        let a = scene.add(ElementKind::BlankBox, Point::new(0.0, 0.0), &free_grid());
        let b = scene.add(ElementKind::BlankBox, Point::new(10.0, 10.0), &free_grid());
        scene.bring_to_front(&[a]);

        let bounds = export_bounds(&scene.elements).unwrap();
        scene.set_label(a, Some("above".to_string()));
        scene.set_label(b, Some("below".to_string()));
        let svg = render_svg(&scene.elements, bounds, SerializableColor::white());
        assert!(svg.find("below").unwrap() < svg.find("above").unwrap());
    }

    #[test]
    fn test_labels_are_escaped() {
        let mut scene = Scene::new();
        let id = scene.add(ElementKind::TextBox, Point::new(0.0, 0.0), &free_grid());
        scene.set_label(id, Some("Beds <3> & \"more\"".to_string()));
        let bounds = export_bounds(&scene.elements).unwrap();
        let svg = render_svg(&scene.elements, bounds, SerializableColor::white());
        assert!(svg.contains("Beds &lt;3&gt; &amp; &quot;more&quot;"));
        assert!(!svg.contains("<3>"));
    }

    #[test]
    fn test_solid_kinds_render_filled() {
        let mut scene = Scene::new();
        scene.add(ElementKind::WallH, Point::new(0.0, 0.0), &free_grid());
        let bounds = export_bounds(&scene.elements).unwrap();
        let svg = render_svg(&scene.elements, bounds, SerializableColor::white());
        assert!(svg.contains("width=\"200\" height=\"20\" fill=\"rgba(96,165,250,1.000)\""));
    }
}
