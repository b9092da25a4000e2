//! Board element record and geometry helpers.

use crate::catalog::ElementKind;
use kurbo::{Point, Rect, Vec2};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for an element.
pub type ElementId = Uuid;

/// Identifier shared by grouped elements.
pub type GroupId = Uuid;

fn is_false(v: &bool) -> bool {
    !*v
}

/// A single placed element.
///
/// `x`/`y` is the top-left corner of the unrotated rectangle; `rotation` is
/// in degrees, applied around the center, and kept in `[0, 360)`.
/// Serialized field names (`type`, `groupId`, `zIndex`) are the wire format
/// of saved layouts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Element {
    pub id: ElementId,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub rotation: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub locked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_id: Option<GroupId>,
    #[serde(default)]
    pub z_index: i64,
}

impl Element {
    /// Create an element of the given kind at a position, with the kind's
    /// default size.
    pub fn new(kind: ElementKind, position: Point) -> Self {
        let size = kind.default_size();
        Self {
            id: Uuid::new_v4(),
            kind,
            x: position.x,
            y: position.y,
            width: size.width,
            height: size.height,
            rotation: 0.0,
            label: None,
            locked: false,
            group_id: None,
            z_index: 0,
        }
    }

    /// Top-left corner.
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Axis-aligned bounds of the unrotated rectangle.
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Center point (also the rotation pivot).
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Axis-aligned bounds of the rotated rectangle.
    pub fn rotated_bounds(&self) -> Rect {
        if self.rotation == 0.0 {
            return self.bounds();
        }
        let center = self.center();
        let theta = self.rotation.to_radians();
        let (sin, cos) = theta.sin_cos();
        let hw = self.width / 2.0;
        let hh = self.height / 2.0;
        // Extents of a rotated half-size box.
        let ex = hw * cos.abs() + hh * sin.abs();
        let ey = hw * sin.abs() + hh * cos.abs();
        Rect::new(center.x - ex, center.y - ey, center.x + ex, center.y + ey)
    }

    /// Hit test a scene point against the rotated rectangle.
    pub fn contains(&self, point: Point) -> bool {
        let local = self.to_local(point);
        self.bounds().contains(local)
    }

    /// Map a scene point into the element's unrotated frame.
    pub fn to_local(&self, point: Point) -> Point {
        if self.rotation == 0.0 {
            return point;
        }
        let center = self.center();
        let theta = (-self.rotation).to_radians();
        let (sin, cos) = theta.sin_cos();
        let d = point - center;
        center + Vec2::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos)
    }
}
