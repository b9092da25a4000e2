//! Software rasterizer for PNG export.
//!
//! Renders element outlines and interior washes only; decorations, captions
//! and labels stay vector-only since there is no font engine here.

use crate::ExportError;
use blueboard_core::style::{outline_color, wash_color};
use blueboard_core::{Element, SerializableColor, draw_spec};
use kurbo::{Point, Rect};

/// Rasterized stroke width in scene units, matching the SVG output.
const STROKE_WIDTH: f64 = 2.0;

/// Rasterize and PNG-encode elements inside the given bounds.
pub fn render_png(
    elements: &[Element],
    bounds: Rect,
    background: SerializableColor,
    scale: f64,
) -> Result<Vec<u8>, ExportError> {
    let (width, height, pixels) = rasterize(elements, bounds, background, scale);

    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&pixels)?;
    }
    Ok(out)
}

/// Rasterize elements into an RGBA8 buffer. Returns `(width, height, pixels)`.
pub fn rasterize(
    elements: &[Element],
    bounds: Rect,
    background: SerializableColor,
    scale: f64,
) -> (u32, u32, Vec<u8>) {
    let width = (bounds.width() * scale).ceil().max(1.0) as u32;
    let height = (bounds.height() * scale).ceil().max(1.0) as u32;

    let mut pixels = vec![0u8; width as usize * height as usize * 4];
    for chunk in pixels.chunks_exact_mut(4) {
        chunk.copy_from_slice(&[background.r, background.g, background.b, background.a]);
    }

    let mut ordered: Vec<&Element> = elements.iter().collect();
    ordered.sort_by_key(|el| el.z_index);

    let stroke = outline_color();
    let wash = wash_color();

    for el in ordered {
        paint_element(&mut pixels, width, height, bounds, scale, el, stroke, wash);
    }

    (width, height, pixels)
}

#[allow(clippy::too_many_arguments)]
fn paint_element(
    pixels: &mut [u8],
    width: u32,
    height: u32,
    bounds: Rect,
    scale: f64,
    el: &Element,
    stroke: SerializableColor,
    wash: SerializableColor,
) {
    let solid = draw_spec(el.kind).solid;
    let frame = el.bounds();
    let footprint = el.rotated_bounds();

    // Pixel range covering the rotated footprint, clipped to the image.
    let px0 = (((footprint.x0 - bounds.x0) * scale).floor().max(0.0)) as u32;
    let py0 = (((footprint.y0 - bounds.y0) * scale).floor().max(0.0)) as u32;
    let px1 = ((((footprint.x1 - bounds.x0) * scale).ceil()).min(width as f64)) as u32;
    let py1 = ((((footprint.y1 - bounds.y0) * scale).ceil()).min(height as f64)) as u32;

    for py in py0..py1 {
        for px in px0..px1 {
            // Sample at the pixel center, mapped back to scene space.
            let scene = Point::new(
                bounds.x0 + (f64::from(px) + 0.5) / scale,
                bounds.y0 + (f64::from(py) + 0.5) / scale,
            );
            let local = el.to_local(scene);
            if !frame.contains(local) {
                continue;
            }

            let edge_distance = (local.x - frame.x0)
                .min(frame.x1 - local.x)
                .min(local.y - frame.y0)
                .min(frame.y1 - local.y);

            let color = if solid || edge_distance <= STROKE_WIDTH {
                stroke
            } else {
                wash
            };
            blend(pixels, width, px, py, color);
        }
    }
}

/// Source-over blend of one pixel.
fn blend(pixels: &mut [u8], width: u32, px: u32, py: u32, color: SerializableColor) {
    let idx = (py as usize * width as usize + px as usize) * 4;
    let alpha = f64::from(color.a) / 255.0;
    for (offset, src) in [color.r, color.g, color.b].into_iter().enumerate() {
        let dst = f64::from(pixels[idx + offset]);
        pixels[idx + offset] = (f64::from(src) * alpha + dst * (1.0 - alpha)).round() as u8;
    }
    let dst_a = f64::from(pixels[idx + 3]) / 255.0;
    pixels[idx + 3] = ((alpha + dst_a * (1.0 - alpha)) * 255.0).round() as u8;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export_bounds;
    use blueboard_core::{ElementKind, GridSettings, Scene};

    fn free_grid() -> GridSettings {
        GridSettings {
            snap: false,
            ..Default::default()
        }
    }

    fn pixel(pixels: &[u8], width: u32, px: u32, py: u32) -> [u8; 4] {
        let idx = (py as usize * width as usize + px as usize) * 4;
        [
            pixels[idx],
            pixels[idx + 1],
            pixels[idx + 2],
            pixels[idx + 3],
        ]
    }

    #[test]
    fn test_image_dimensions_follow_scale() {
        let mut scene = Scene::new();
        scene.add(ElementKind::Bed, Point::new(100.0, 60.0), &free_grid());
        let bounds = export_bounds(&scene.elements).unwrap();
        // Bounds are 180x220 scene units.
        let (w, h, pixels) = rasterize(
            &scene.elements,
            bounds,
            SerializableColor::white(),
            2.0,
        );
        assert_eq!((w, h), (360, 440));
        assert_eq!(pixels.len(), 360 * 440 * 4);
    }

    #[test]
    fn test_background_edge_and_interior_colors() {
        let mut scene = Scene::new();
        // Bed at (100,60) sized 80x100; bounds origin is (50,10).
        scene.add(ElementKind::Bed, Point::new(100.0, 60.0), &free_grid());
        let bounds = export_bounds(&scene.elements).unwrap();
        let (w, _, pixels) = rasterize(
            &scene.elements,
            bounds,
            SerializableColor::white(),
            1.0,
        );

        // Padding area is pure background.
        assert_eq!(pixel(&pixels, w, 5, 5), [255, 255, 255, 255]);

        // The left border pixel column of the bed is stroke-colored.
        let border = pixel(&pixels, w, 51, 100);
        assert_eq!(border, [0x60, 0xa5, 0xfa, 255]);

        // Deep interior is the wash over white: lighter than the stroke,
        // darker than the background.
        let interior = pixel(&pixels, w, 90, 100);
        assert!(interior[2] > interior[0]);
        assert_ne!(interior, [255, 255, 255, 255]);
        assert_ne!(interior, border);
    }

    #[test]
    fn test_solid_kind_fills_fully() {
        let mut scene = Scene::new();
        scene.add(ElementKind::WallH, Point::new(0.0, 0.0), &free_grid());
        let bounds = export_bounds(&scene.elements).unwrap();
        let (w, _, pixels) = rasterize(
            &scene.elements,
            bounds,
            SerializableColor::white(),
            1.0,
        );
        // Center of the wall (scene (100,10) -> pixel (150,60)).
        assert_eq!(pixel(&pixels, w, 150, 60), [0x60, 0xa5, 0xfa, 255]);
    }

    #[test]
    fn test_rotated_element_paints_rotated_footprint() {
        let mut scene = Scene::new();
        // Wall 200x20 at origin, rotated 90: occupies a 20x200 column
        // around center (100,10).
        let id = scene.add(ElementKind::WallH, Point::new(0.0, 0.0), &free_grid());
        scene.set_rotation(id, 90.0);
        let bounds = export_bounds(&scene.elements).unwrap();
        let (w, _, pixels) = rasterize(
            &scene.elements,
            bounds,
            SerializableColor::white(),
            1.0,
        );

        // Bounds start at (40, -140) after padding. Scene point (100, -80)
        // is inside the rotated wall.
        let on = pixel(&pixels, w, 60, 60);
        assert_eq!(on, [0x60, 0xa5, 0xfa, 255]);
        // Scene point (150, 10) was inside the unrotated wall but is
        // background now.
        let off = pixel(&pixels, w, 110, 150);
        assert_eq!(off, [255, 255, 255, 255]);
    }
}
