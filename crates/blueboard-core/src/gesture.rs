//! Pointer gesture state and resize handle math.

use crate::element::{Element, ElementId};
use kurbo::{Point, Vec2};

/// Smallest width/height a resize gesture can produce.
pub const MIN_ELEMENT_SIZE: f64 = 10.0;

/// Screen-space radius for grabbing a corner handle.
pub const HANDLE_HIT_RADIUS: f64 = 6.0;

/// A corner resize handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    pub fn all() -> [Corner; 4] {
        [
            Corner::TopLeft,
            Corner::TopRight,
            Corner::BottomLeft,
            Corner::BottomRight,
        ]
    }
}

/// Frame of an element at gesture start: `(x, y, width, height)`.
pub type Frame = (f64, f64, f64, f64);

/// Active pointer gesture.
///
/// `Idle -> Drag -> Idle`, `Idle -> Resize -> Idle`, and
/// `Idle -> Marquee -> Idle`; pointer-up always returns to `Idle`.
#[derive(Debug, Clone, PartialEq)]
pub enum Gesture {
    Idle,
    Drag {
        id: ElementId,
        pointer_start: Point,
        anchor: Point,
        moved: bool,
    },
    Resize {
        id: ElementId,
        corner: Corner,
        pointer_start: Point,
        anchor: Frame,
        resized: bool,
    },
    Marquee {
        start: Point,
        current: Point,
        additive: bool,
    },
}

impl Gesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }
}

/// Corner handle positions of an element's unrotated frame.
pub fn corner_positions(el: &Element) -> [(Corner, Point); 4] {
    let b = el.bounds();
    [
        (Corner::TopLeft, Point::new(b.x0, b.y0)),
        (Corner::TopRight, Point::new(b.x1, b.y0)),
        (Corner::BottomLeft, Point::new(b.x0, b.y1)),
        (Corner::BottomRight, Point::new(b.x1, b.y1)),
    ]
}

/// Find the corner handle under a scene point.
///
/// `zoom` scales the hit radius so handles stay grabbable when zoomed out.
pub fn hit_corner(el: &Element, point: Point, zoom: f64) -> Option<Corner> {
    let radius = HANDLE_HIT_RADIUS / zoom.max(f64::MIN_POSITIVE);
    let local = el.to_local(point);
    corner_positions(el)
        .into_iter()
        .find(|(_, pos)| (local - *pos).hypot() <= radius)
        .map(|(corner, _)| corner)
}

/// Compute the new frame for a corner drag.
///
/// The opposite corner stays fixed; each axis floors at
/// [`MIN_ELEMENT_SIZE`] independently, so dragging past the anchor pins the
/// element at its minimum size instead of flipping it.
pub fn resize_from_corner(anchor: Frame, corner: Corner, delta: Vec2) -> Frame {
    let (x0, y0, w0, h0) = anchor;

    let (width, x) = match corner {
        Corner::TopLeft | Corner::BottomLeft => {
            let width = (w0 - delta.x).max(MIN_ELEMENT_SIZE);
            (width, x0 + w0 - width)
        }
        Corner::TopRight | Corner::BottomRight => ((w0 + delta.x).max(MIN_ELEMENT_SIZE), x0),
    };
    let (height, y) = match corner {
        Corner::TopLeft | Corner::TopRight => {
            let height = (h0 - delta.y).max(MIN_ELEMENT_SIZE);
            (height, y0 + h0 - height)
        }
        Corner::BottomLeft | Corner::BottomRight => ((h0 + delta.y).max(MIN_ELEMENT_SIZE), y0),
    };

    (x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ElementKind;

    #[test]
    fn test_resize_bottom_right_grows() {
        let frame = resize_from_corner((10.0, 20.0, 100.0, 50.0), Corner::BottomRight, Vec2::new(30.0, 10.0));
        assert_eq!(frame, (10.0, 20.0, 130.0, 60.0));
    }

    #[test]
    fn test_resize_top_left_repositions() {
        let frame = resize_from_corner((10.0, 20.0, 100.0, 50.0), Corner::TopLeft, Vec2::new(30.0, 10.0));
        // Bottom-right corner (110, 70) stays fixed.
        assert_eq!(frame, (40.0, 30.0, 70.0, 40.0));
    }

    #[test]
    fn test_resize_floors_at_minimum() {
        let frame = resize_from_corner((0.0, 0.0, 100.0, 50.0), Corner::BottomRight, Vec2::new(-200.0, -200.0));
        assert_eq!(frame, (0.0, 0.0, MIN_ELEMENT_SIZE, MIN_ELEMENT_SIZE));

        // Left handle pins against the right edge at minimum width.
        let frame = resize_from_corner((0.0, 0.0, 100.0, 50.0), Corner::TopLeft, Vec2::new(500.0, 0.0));
        assert_eq!(frame.0, 90.0);
        assert_eq!(frame.2, MIN_ELEMENT_SIZE);
    }

    #[test]
    fn test_resize_axes_floor_independently() {
        let frame = resize_from_corner((0.0, 0.0, 100.0, 50.0), Corner::BottomRight, Vec2::new(20.0, -200.0));
        assert_eq!(frame, (0.0, 0.0, 120.0, MIN_ELEMENT_SIZE));
    }

    #[test]
    fn test_hit_corner() {
        let el = Element::new(ElementKind::Desk, Point::new(100.0, 100.0));
        assert_eq!(hit_corner(&el, Point::new(101.0, 99.0), 1.0), Some(Corner::TopLeft));
        assert_eq!(hit_corner(&el, Point::new(200.0, 160.0), 1.0), Some(Corner::BottomRight));
        assert_eq!(hit_corner(&el, Point::new(150.0, 130.0), 1.0), None);

        // Zoomed out, the same scene-space miss becomes a hit.
        assert_eq!(hit_corner(&el, Point::new(110.0, 100.0), 1.0), None);
        assert_eq!(hit_corner(&el, Point::new(110.0, 100.0), 0.5), Some(Corner::TopLeft));
    }

    #[test]
    fn test_hit_corner_rotated_element() {
        let mut el = Element::new(ElementKind::Desk, Point::new(0.0, 0.0));
        el.rotation = 90.0;
        // The unrotated top-left (0,0) maps to (80,-20) after a quarter turn
        // around the center (50,30).
        assert_eq!(hit_corner(&el, Point::new(80.0, -20.0), 1.0), Some(Corner::TopLeft));
    }
}
