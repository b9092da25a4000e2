//! Grid snapping.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Default grid cell size (matches the visual grid).
pub const GRID_SIZE: f64 = 20.0;

/// Grid configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSettings {
    /// Grid cell size in scene units.
    pub size: f64,
    /// Whether positions snap to the grid.
    pub snap: bool,
    /// Whether the grid is drawn.
    pub visible: bool,
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            size: GRID_SIZE,
            snap: true,
            visible: true,
        }
    }
}

impl GridSettings {
    /// Snap a point if snapping is enabled, otherwise pass it through.
    pub fn apply(&self, point: Point) -> Point {
        if self.snap {
            snap_to_grid(point, self.size)
        } else {
            point
        }
    }
}

/// Snap a point to the nearest grid intersection.
pub fn snap_to_grid(point: Point, grid_size: f64) -> Point {
    Point::new(
        snap_value(point.x, grid_size),
        snap_value(point.y, grid_size),
    )
}

/// Snap a scalar to the nearest grid multiple.
pub fn snap_value(value: f64, grid_size: f64) -> f64 {
    (value / grid_size).round() * grid_size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snap_to_grid() {
        assert_eq!(snap_to_grid(Point::new(23.0, 47.0), 20.0), Point::new(20.0, 40.0));
        assert_eq!(snap_to_grid(Point::new(31.0, 51.0), 20.0), Point::new(40.0, 60.0));
    }

    #[test]
    fn test_snap_exact_is_identity() {
        assert_eq!(snap_to_grid(Point::new(40.0, 60.0), 20.0), Point::new(40.0, 60.0));
    }

    #[test]
    fn test_settings_passthrough_when_disabled() {
        let grid = GridSettings {
            snap: false,
            ..Default::default()
        };
        assert_eq!(grid.apply(Point::new(23.0, 47.0)), Point::new(23.0, 47.0));
    }

    #[test]
    fn test_settings_snap_when_enabled() {
        let grid = GridSettings::default();
        assert_eq!(grid.apply(Point::new(103.0, 57.0)), Point::new(100.0, 60.0));
    }
}
