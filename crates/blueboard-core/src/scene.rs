//! Scene model: the element list plus selection and clipboard state.

use crate::catalog::ElementKind;
use crate::element::{Element, ElementId, GroupId};
use crate::selection::Selection;
use crate::snap::GridSettings;
use kurbo::{Point, Rect, Vec2};
use uuid::Uuid;

/// Offset applied to pasted elements so they do not cover their source.
pub const PASTE_OFFSET: f64 = 40.0;

/// The editable board: all elements, the selection, and the clipboard.
///
/// Elements keep insertion order; paint order is `z_index` ascending with
/// insertion order breaking ties.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub elements: Vec<Element>,
    pub selection: Selection,
    clipboard: Vec<Element>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.iter().find(|el| el.id == id)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Element> {
        self.elements.iter_mut().find(|el| el.id == id)
    }

    /// Highest z-index in the scene (0 when empty).
    pub fn max_z(&self) -> i64 {
        self.elements.iter().map(|el| el.z_index).max().unwrap_or(0)
    }

    /// Elements in paint order (back to front).
    pub fn ordered(&self) -> Vec<&Element> {
        let mut ordered: Vec<&Element> = self.elements.iter().collect();
        ordered.sort_by_key(|el| el.z_index);
        ordered
    }

    /// Topmost element under a scene point, if any.
    pub fn element_at(&self, point: Point) -> Option<ElementId> {
        self.ordered()
            .iter()
            .rev()
            .find(|el| el.contains(point))
            .map(|el| el.id)
    }

    /// Union of unrotated bounds of all elements.
    pub fn content_bounds(&self) -> Option<Rect> {
        let mut result: Option<Rect> = None;
        for el in &self.elements {
            let bounds = el.bounds();
            result = Some(match result {
                Some(r) => r.union(bounds),
                None => bounds,
            });
        }
        result
    }

    /// Union of unrotated bounds of the given elements.
    pub fn bounds_of(&self, ids: &[ElementId]) -> Option<Rect> {
        let mut result: Option<Rect> = None;
        for &id in ids {
            if let Some(el) = self.get(id) {
                let bounds = el.bounds();
                result = Some(match result {
                    Some(r) => r.union(bounds),
                    None => bounds,
                });
            }
        }
        result
    }

    // --- Element lifecycle -------------------------------------------------

    /// Drop a new element onto the board.
    ///
    /// The position is grid-snapped when snapping is on, the size comes from
    /// the kind's defaults, and the element lands on top of the stack.
    pub fn add(&mut self, kind: ElementKind, position: Point, grid: &GridSettings) -> ElementId {
        let mut el = Element::new(kind, grid.apply(position));
        el.z_index = self.max_z() + 1;
        let id = el.id;
        self.elements.push(el);
        id
    }

    /// Delete elements and prune them from the selection.
    pub fn delete(&mut self, ids: &[ElementId]) -> usize {
        let before = self.elements.len();
        self.elements.retain(|el| !ids.contains(&el.id));
        for &id in ids {
            self.selection.remove(id);
        }
        before - self.elements.len()
    }

    /// Remove every element and clear the selection.
    pub fn clear_all(&mut self) {
        self.elements.clear();
        self.selection = Selection::None;
    }

    // --- Geometry edits ----------------------------------------------------

    /// Move the grabbed element to a new position.
    ///
    /// When the grabbed element is part of a multi-selection, the same delta
    /// is applied to every unlocked selected element so the group moves as
    /// one. A locked grabbed element moves nothing. Returns whether anything
    /// moved.
    pub fn apply_move(&mut self, id: ElementId, target: Point) -> bool {
        let Some(el) = self.get(id) else {
            return false;
        };
        if el.locked {
            return false;
        }
        let delta = target - el.position();
        if delta == Vec2::ZERO {
            return false;
        }

        let multi = matches!(&self.selection, Selection::Multi(ids) if ids.contains(&id));
        if multi {
            let ids = self.selection.ids();
            let mut moved = false;
            for el in &mut self.elements {
                if ids.contains(&el.id) && !el.locked {
                    el.x += delta.x;
                    el.y += delta.y;
                    moved = true;
                }
            }
            moved
        } else if let Some(el) = self.get_mut(id) {
            el.x += delta.x;
            el.y += delta.y;
            true
        } else {
            false
        }
    }

    /// Shift elements by a delta, skipping locked members.
    pub fn nudge(&mut self, ids: &[ElementId], dx: f64, dy: f64) -> bool {
        let mut moved = false;
        for el in &mut self.elements {
            if ids.contains(&el.id) && !el.locked {
                el.x += dx;
                el.y += dy;
                moved = true;
            }
        }
        moved
    }

    /// Set an element's frame (position and size), rejecting locked elements.
    ///
    /// Extents are floored at 1 so an element never degenerates; the gesture
    /// layer applies its own larger floor.
    pub fn apply_resize(&mut self, id: ElementId, x: f64, y: f64, width: f64, height: f64) -> bool {
        let Some(el) = self.get_mut(id) else {
            return false;
        };
        if el.locked {
            return false;
        }
        el.x = x;
        el.y = y;
        el.width = width.max(1.0);
        el.height = height.max(1.0);
        true
    }

    /// Rotate an element a quarter turn clockwise.
    pub fn rotate_step(&mut self, id: ElementId) -> bool {
        let Some(el) = self.get_mut(id) else {
            return false;
        };
        if el.locked {
            return false;
        }
        el.rotation = (el.rotation + 90.0).rem_euclid(360.0);
        true
    }

    /// Set an absolute rotation in degrees, normalized to `[0, 360)`.
    pub fn set_rotation(&mut self, id: ElementId, degrees: f64) -> bool {
        let Some(el) = self.get_mut(id) else {
            return false;
        };
        if el.locked {
            return false;
        }
        el.rotation = degrees.rem_euclid(360.0);
        true
    }

    /// Set or clear an element's label. Allowed on locked elements; the lock
    /// covers geometry only.
    pub fn set_label(&mut self, id: ElementId, label: Option<String>) -> bool {
        match self.get_mut(id) {
            Some(el) => {
                el.label = label;
                true
            }
            None => false,
        }
    }

    /// Flip the locked flag on each element.
    pub fn toggle_locked(&mut self, ids: &[ElementId]) -> bool {
        let mut changed = false;
        for el in &mut self.elements {
            if ids.contains(&el.id) {
                el.locked = !el.locked;
                changed = true;
            }
        }
        changed
    }

    // --- Grouping ----------------------------------------------------------

    /// Group elements under a fresh shared group id.
    ///
    /// Needs at least two elements; returns the new group id.
    pub fn group(&mut self, ids: &[ElementId]) -> Option<GroupId> {
        if ids.len() < 2 {
            return None;
        }
        let group_id = Uuid::new_v4();
        let mut grouped = 0;
        for el in &mut self.elements {
            if ids.contains(&el.id) {
                el.group_id = Some(group_id);
                grouped += 1;
            }
        }
        if grouped < 2 {
            // Unknown ids left fewer than two members; undo the partial tag.
            for el in &mut self.elements {
                if el.group_id == Some(group_id) {
                    el.group_id = None;
                }
            }
            return None;
        }
        Some(group_id)
    }

    /// Detach elements from their groups.
    pub fn ungroup(&mut self, ids: &[ElementId]) -> bool {
        let mut changed = false;
        for el in &mut self.elements {
            if ids.contains(&el.id) && el.group_id.is_some() {
                el.group_id = None;
                changed = true;
            }
        }
        changed
    }

    // --- Z-order -----------------------------------------------------------

    /// Raise elements above everything else.
    pub fn bring_to_front(&mut self, ids: &[ElementId]) -> bool {
        let top = self.max_z() + 1;
        self.set_z(ids, |_| top)
    }

    /// Drop elements below everything else.
    pub fn send_to_back(&mut self, ids: &[ElementId]) -> bool {
        self.set_z(ids, |_| 0)
    }

    /// Raise elements one layer.
    pub fn bring_forward(&mut self, ids: &[ElementId]) -> bool {
        self.set_z(ids, |z| z + 1)
    }

    /// Lower elements one layer, never below zero.
    pub fn send_backward(&mut self, ids: &[ElementId]) -> bool {
        self.set_z(ids, |z| (z - 1).max(0))
    }

    fn set_z(&mut self, ids: &[ElementId], f: impl Fn(i64) -> i64) -> bool {
        let mut changed = false;
        for el in &mut self.elements {
            if ids.contains(&el.id) {
                let z = f(el.z_index);
                if z != el.z_index {
                    el.z_index = z;
                    changed = true;
                }
            }
        }
        changed
    }

    // --- Selection ---------------------------------------------------------

    /// Select a single element as primary.
    pub fn select(&mut self, id: ElementId) {
        self.selection = Selection::Primary(id);
    }

    /// Modifier-click membership toggle.
    pub fn toggle_select(&mut self, id: ElementId) {
        self.selection.toggle(id);
    }

    pub fn clear_selection(&mut self) {
        self.selection = Selection::None;
    }

    pub fn selected_ids(&self) -> Vec<ElementId> {
        self.selection.ids()
    }

    /// Selected elements, in selection order.
    pub fn selected_elements(&self) -> Vec<Element> {
        self.selected_ids()
            .iter()
            .filter_map(|&id| self.get(id).cloned())
            .collect()
    }

    /// Marquee selection: elements strictly overlapping the rectangle become
    /// the multi-selection. An empty hit set leaves the selection untouched.
    /// Returns the number of elements selected.
    pub fn select_rect(&mut self, rect: Rect) -> usize {
        let hits: Vec<ElementId> = self
            .ordered()
            .iter()
            .filter(|el| {
                el.x < rect.x1
                    && el.x + el.width > rect.x0
                    && el.y < rect.y1
                    && el.y + el.height > rect.y0
            })
            .map(|el| el.id)
            .collect();
        if hits.is_empty() {
            return 0;
        }
        let count = hits.len();
        self.selection = Selection::Multi(hits);
        count
    }

    // --- Clipboard ---------------------------------------------------------

    /// Snapshot the selected elements into the clipboard.
    pub fn copy_selection(&mut self) -> usize {
        self.clipboard = self.selected_elements();
        self.clipboard.len()
    }

    /// Paste the clipboard: fresh ids, offset position, stacked on top, and
    /// the new elements become the selection. Group ids are kept so grouped
    /// copies stay grouped with their copied peers.
    pub fn paste(&mut self) -> Vec<ElementId> {
        if self.clipboard.is_empty() {
            return Vec::new();
        }
        let base_z = self.max_z();
        let mut new_ids = Vec::with_capacity(self.clipboard.len());
        for (i, src) in self.clipboard.iter().enumerate() {
            let mut el = src.clone();
            el.id = Uuid::new_v4();
            el.x += PASTE_OFFSET;
            el.y += PASTE_OFFSET;
            el.z_index = base_z + i as i64 + 1;
            new_ids.push(el.id);
            self.elements.push(el);
        }
        self.selection = if new_ids.len() == 1 {
            Selection::Primary(new_ids[0])
        } else {
            Selection::Multi(new_ids.clone())
        };
        new_ids
    }
}
