//! Export adapter: renders a layout (or a selection of it) to SVG or PNG,
//! with a PDF request falling back to SVG.

pub mod raster;
pub mod svg;

use blueboard_core::{Element, SerializableColor};
use kurbo::Rect;
use thiserror::Error;

/// Padding around the content bounds in scene units.
pub const EXPORT_PADDING: f64 = 50.0;

/// Extra room below the content so labels under the bottom row survive.
pub const LABEL_MARGIN: f64 = 20.0;

/// Requested output format.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExportFormat {
    Svg,
    /// Raster output at a scene-unit-to-pixel multiplier.
    Png { scale: f64 },
    /// Not supported; exports SVG and says so in the output notice.
    Pdf,
}

/// A finished export.
#[derive(Debug, Clone)]
pub struct ExportOutput {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
    /// Set when the output is not exactly what was asked for.
    pub notice: Option<String>,
}

/// Export failures. Nothing is produced on error.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nothing to export")]
    EmptyScene,
    #[error("invalid export scale: {0}")]
    InvalidScale(f64),
    #[error("png encoding failed: {0}")]
    Encode(#[from] png::EncodingError),
}

/// Output rectangle for an element set: the union of (rotated) element
/// bounds, a label margin below, and padding on all sides.
pub fn export_bounds(elements: &[Element]) -> Result<Rect, ExportError> {
    let mut bounds: Option<Rect> = None;
    for el in elements {
        let b = el.rotated_bounds();
        bounds = Some(match bounds {
            Some(r) => r.union(b),
            None => b,
        });
    }
    let bounds = bounds.ok_or(ExportError::EmptyScene)?;
    Ok(Rect::new(
        bounds.x0 - EXPORT_PADDING,
        bounds.y0 - EXPORT_PADDING,
        bounds.x1 + EXPORT_PADDING,
        bounds.y1 + LABEL_MARGIN + EXPORT_PADDING,
    ))
}

/// Render elements in the requested format.
pub fn export(
    elements: &[Element],
    background: SerializableColor,
    format: ExportFormat,
) -> Result<ExportOutput, ExportError> {
    let bounds = export_bounds(elements)?;
    match format {
        ExportFormat::Svg => Ok(ExportOutput {
            file_name: "blueprint.svg".to_string(),
            mime_type: "image/svg+xml",
            bytes: svg::render_svg(elements, bounds, background).into_bytes(),
            notice: None,
        }),
        ExportFormat::Png { scale } => {
            if !(scale.is_finite() && scale > 0.0) {
                return Err(ExportError::InvalidScale(scale));
            }
            Ok(ExportOutput {
                file_name: format!("blueprint-{}x.png", format_scale(scale)),
                mime_type: "image/png",
                bytes: raster::render_png(elements, bounds, background, scale)?,
                notice: None,
            })
        }
        ExportFormat::Pdf => {
            log::warn!("pdf export requested, falling back to svg");
            Ok(ExportOutput {
                file_name: "blueprint.svg".to_string(),
                mime_type: "image/svg+xml",
                bytes: svg::render_svg(elements, bounds, background).into_bytes(),
                notice: Some(
                    "PDF export is not available; an SVG was generated instead.".to_string(),
                ),
            })
        }
    }
}

fn format_scale(scale: f64) -> String {
    if scale.fract() == 0.0 {
        format!("{}", scale as i64)
    } else {
        format!("{scale}")
    }
}
