//! View zoom and screen/scene coordinate conversion.

use kurbo::{Point, Rect, Size};
use serde::{Deserialize, Serialize};

/// Minimum zoom level.
pub const MIN_ZOOM: f64 = 0.3;
/// Maximum zoom level.
pub const MAX_ZOOM: f64 = 2.0;
/// Zoom button step.
pub const ZOOM_STEP: f64 = 0.1;
/// Margin factor for fit-to-bounds (content takes 90% of the viewport).
const FIT_MARGIN: f64 = 0.9;

/// The view transform: a clamped zoom around the scene origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub zoom: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { zoom: 1.0 }
    }
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert a screen point to scene coordinates.
    pub fn screen_to_scene(&self, screen: Point) -> Point {
        Point::new(screen.x / self.zoom, screen.y / self.zoom)
    }

    /// Convert a scene point to screen coordinates.
    pub fn scene_to_screen(&self, scene: Point) -> Point {
        Point::new(scene.x * self.zoom, scene.y * self.zoom)
    }

    /// Zoom in one step.
    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + ZOOM_STEP);
    }

    /// Zoom out one step.
    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - ZOOM_STEP);
    }

    /// Set an absolute zoom, clamped to the allowed range.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    /// Fit the given bounds into a viewport, leaving a margin. Degenerate
    /// bounds reset to 100%.
    pub fn fit_to_bounds(&mut self, bounds: Rect, viewport: Size) {
        if bounds.width() <= 0.0 || bounds.height() <= 0.0 {
            self.zoom = 1.0;
            return;
        }
        let scale_x = viewport.width / bounds.width();
        let scale_y = viewport.height / bounds.height();
        self.set_zoom(scale_x.min(scale_y).min(MAX_ZOOM) * FIT_MARGIN);
    }
}
