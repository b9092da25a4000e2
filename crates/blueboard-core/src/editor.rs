//! The editor: scene plus history, camera, grid, and gesture handling.
//!
//! Pointer and keyboard events come in already resolved (screen point plus
//! modifiers); no windowing types appear here.

use crate::align::{self, Alignment};
use crate::camera::Camera;
use crate::catalog::ElementKind;
use crate::element::{Element, ElementId};
use crate::gesture::{Gesture, hit_corner, resize_from_corner};
use crate::history::History;
use crate::input::{EditorAction, Key, Modifiers, shortcut_action};
use crate::scene::Scene;
use crate::selection::Selection;
use crate::snap::GridSettings;
use crate::storage::{self, LayoutError};
use crate::style::SerializableColor;
use kurbo::{Point, Rect, Size};

/// Interactive editor state.
#[derive(Debug, Clone)]
pub struct Editor {
    pub scene: Scene,
    pub camera: Camera,
    pub grid: GridSettings,
    pub background: SerializableColor,
    history: History,
    gesture: Gesture,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    pub fn new() -> Self {
        let scene = Scene::new();
        let history = History::new(&scene);
        Self {
            scene,
            camera: Camera::new(),
            grid: GridSettings::default(),
            background: SerializableColor::white(),
            history,
            gesture: Gesture::Idle,
        }
    }

    pub fn gesture(&self) -> &Gesture {
        &self.gesture
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    // --- Pointer events ----------------------------------------------------

    /// Begin a gesture at a screen point.
    pub fn pointer_down(&mut self, screen: Point, mods: Modifiers) {
        let point = self.camera.screen_to_scene(screen);

        // Resize handles are live only for a single primary selection.
        if let Selection::Primary(id) = self.scene.selection {
            if let Some(el) = self.scene.get(id) {
                if !el.locked {
                    if let Some(corner) = hit_corner(el, point, self.camera.zoom) {
                        self.gesture = Gesture::Resize {
                            id,
                            corner,
                            pointer_start: point,
                            anchor: (el.x, el.y, el.width, el.height),
                            resized: false,
                        };
                        return;
                    }
                }
            }
        }

        if let Some(id) = self.scene.element_at(point) {
            if mods.ctrl {
                // Membership toggle, never starts a drag.
                self.scene.toggle_select(id);
                return;
            }
            if !self.scene.selection.contains(id) {
                self.scene.select(id);
            }
            let locked = self.scene.get(id).is_some_and(|el| el.locked);
            if !locked {
                let anchor = match self.scene.get(id) {
                    Some(el) => el.position(),
                    None => return,
                };
                self.gesture = Gesture::Drag {
                    id,
                    pointer_start: point,
                    anchor,
                    moved: false,
                };
            }
            return;
        }

        self.gesture = Gesture::Marquee {
            start: point,
            current: point,
            additive: mods.ctrl,
        };
    }

    /// Update the active gesture with a new pointer position.
    pub fn pointer_move(&mut self, screen: Point) {
        let point = self.camera.screen_to_scene(screen);
        match self.gesture.clone() {
            Gesture::Idle => {}
            Gesture::Drag {
                id,
                pointer_start,
                anchor,
                moved,
            } => {
                let target = self.grid.apply(anchor + (point - pointer_start));
                let moved = moved | self.scene.apply_move(id, target);
                self.gesture = Gesture::Drag {
                    id,
                    pointer_start,
                    anchor,
                    moved,
                };
            }
            Gesture::Resize {
                id,
                corner,
                pointer_start,
                anchor,
                resized,
            } => {
                let (x, y, w, h) = resize_from_corner(anchor, corner, point - pointer_start);
                let resized = resized | self.scene.apply_resize(id, x, y, w, h);
                self.gesture = Gesture::Resize {
                    id,
                    corner,
                    pointer_start,
                    anchor,
                    resized,
                };
            }
            Gesture::Marquee {
                start, additive, ..
            } => {
                self.gesture = Gesture::Marquee {
                    start,
                    current: point,
                    additive,
                };
            }
        }
    }

    /// Finish the active gesture. Move and resize gestures commit a single
    /// history entry when they changed anything; selection changes never
    /// commit.
    pub fn pointer_up(&mut self) {
        match std::mem::replace(&mut self.gesture, Gesture::Idle) {
            Gesture::Idle => {}
            Gesture::Drag { moved, .. } => {
                if moved {
                    self.history.commit(&self.scene);
                }
            }
            Gesture::Resize { resized, .. } => {
                if resized {
                    self.history.commit(&self.scene);
                }
            }
            Gesture::Marquee {
                start,
                current,
                additive,
            } => {
                let rect = Rect::from_points(start, current);
                let degenerate = rect.width() < 1e-9 && rect.height() < 1e-9;
                if degenerate {
                    if !additive {
                        self.scene.clear_selection();
                    }
                } else {
                    self.scene.select_rect(rect);
                }
            }
        }
    }

    // --- Keyboard ----------------------------------------------------------

    /// Handle a key press; returns whether it was consumed.
    pub fn handle_key(&mut self, key: Key, mods: Modifiers) -> bool {
        let Some(action) = shortcut_action(key, mods) else {
            return false;
        };
        match action {
            EditorAction::Undo => {
                self.undo();
            }
            EditorAction::Redo => {
                self.redo();
            }
            EditorAction::Copy => {
                self.scene.copy_selection();
            }
            EditorAction::Paste => {
                self.paste();
            }
            EditorAction::DeleteSelection => {
                self.delete_selection();
            }
            EditorAction::Nudge { dx, dy, large } => {
                let step = if large { self.grid.size } else { 1.0 };
                self.nudge_selection(dx * step, dy * step);
            }
        }
        true
    }

    // --- Editing operations (each commits when it changes the scene) -------

    /// Drop a new element at a scene position.
    pub fn add_element(&mut self, kind: ElementKind, position: Point) -> ElementId {
        let id = self.scene.add(kind, position, &self.grid);
        self.scene.select(id);
        self.history.commit(&self.scene);
        id
    }

    /// Delete the selected elements.
    pub fn delete_selection(&mut self) -> usize {
        let ids = self.scene.selected_ids();
        let removed = self.scene.delete(&ids);
        if removed > 0 {
            self.history.commit(&self.scene);
        }
        removed
    }

    /// Quarter-turn every selected unlocked element.
    pub fn rotate_selection(&mut self) {
        let mut changed = false;
        for id in self.scene.selected_ids() {
            changed |= self.scene.rotate_step(id);
        }
        if changed {
            self.history.commit(&self.scene);
        }
    }

    /// Set an absolute rotation on one element.
    pub fn set_rotation(&mut self, id: ElementId, degrees: f64) {
        if self.scene.set_rotation(id, degrees) {
            self.history.commit(&self.scene);
        }
    }

    /// Set or clear an element's label.
    pub fn set_label(&mut self, id: ElementId, label: Option<String>) {
        if self.scene.set_label(id, label) {
            self.history.commit(&self.scene);
        }
    }

    /// Toggle the lock flag on the selection.
    pub fn toggle_lock_selection(&mut self) {
        let ids = self.scene.selected_ids();
        if self.scene.toggle_locked(&ids) {
            self.history.commit(&self.scene);
        }
    }

    /// Group the selected elements.
    pub fn group_selection(&mut self) {
        let ids = self.scene.selected_ids();
        if self.scene.group(&ids).is_some() {
            self.history.commit(&self.scene);
        }
    }

    /// Ungroup the selected elements.
    pub fn ungroup_selection(&mut self) {
        let ids = self.scene.selected_ids();
        if self.scene.ungroup(&ids) {
            self.history.commit(&self.scene);
        }
    }

    pub fn bring_selection_to_front(&mut self) {
        let ids = self.scene.selected_ids();
        if self.scene.bring_to_front(&ids) {
            self.history.commit(&self.scene);
        }
    }

    pub fn send_selection_to_back(&mut self) {
        let ids = self.scene.selected_ids();
        if self.scene.send_to_back(&ids) {
            self.history.commit(&self.scene);
        }
    }

    pub fn bring_selection_forward(&mut self) {
        let ids = self.scene.selected_ids();
        if self.scene.bring_forward(&ids) {
            self.history.commit(&self.scene);
        }
    }

    pub fn send_selection_backward(&mut self) {
        let ids = self.scene.selected_ids();
        if self.scene.send_backward(&ids) {
            self.history.commit(&self.scene);
        }
    }

    /// Align the selected unlocked elements.
    pub fn align_selection(&mut self, alignment: Alignment) {
        let input = self.unlocked_selected();
        self.apply_layout(align::align(&input, alignment));
    }

    /// Distribute the selected unlocked elements horizontally.
    pub fn distribute_selection_horizontal(&mut self) {
        let input = self.unlocked_selected();
        self.apply_layout(align::distribute_horizontal(&input));
    }

    /// Distribute the selected unlocked elements vertically.
    pub fn distribute_selection_vertical(&mut self) {
        let input = self.unlocked_selected();
        self.apply_layout(align::distribute_vertical(&input));
    }

    /// Shift the selection, skipping locked members.
    pub fn nudge_selection(&mut self, dx: f64, dy: f64) {
        let ids = self.scene.selected_ids();
        if self.scene.nudge(&ids, dx, dy) {
            self.history.commit(&self.scene);
        }
    }

    /// Paste the clipboard.
    pub fn paste(&mut self) -> usize {
        let pasted = self.scene.paste();
        if !pasted.is_empty() {
            self.history.commit(&self.scene);
        }
        pasted.len()
    }

    /// Remove every element.
    pub fn clear_all(&mut self) {
        if self.scene.is_empty() {
            return;
        }
        self.scene.clear_all();
        self.history.commit(&self.scene);
    }

    pub fn undo(&mut self) -> bool {
        let snapshot = self.history.undo().cloned();
        match snapshot {
            Some(snapshot) => {
                self.scene.restore(&snapshot);
                true
            }
            None => false,
        }
    }

    pub fn redo(&mut self) -> bool {
        let snapshot = self.history.redo().cloned();
        match snapshot {
            Some(snapshot) => {
                self.scene.restore(&snapshot);
                true
            }
            None => false,
        }
    }

    // --- Layout IO ---------------------------------------------------------

    /// Serialize the current layout.
    pub fn to_json(&self) -> Result<String, LayoutError> {
        storage::layout_to_json(&self.scene.elements)
    }

    /// Replace the layout with a parsed one. On error the scene is left
    /// untouched.
    pub fn import_json(&mut self, json: &str) -> Result<usize, LayoutError> {
        match storage::layout_from_json(json) {
            Ok(elements) => {
                let count = elements.len();
                self.scene.elements = elements;
                self.scene.clear_selection();
                self.history.commit(&self.scene);
                Ok(count)
            }
            Err(err) => {
                log::warn!("layout import rejected: {err}");
                Err(err)
            }
        }
    }

    // --- View --------------------------------------------------------------

    /// Fit the whole layout into a viewport.
    pub fn zoom_to_fit(&mut self, viewport: Size) {
        if let Some(bounds) = self.scene.content_bounds() {
            self.camera.fit_to_bounds(bounds, viewport);
        }
    }

    /// Fit the selection into a viewport.
    pub fn zoom_to_selection(&mut self, viewport: Size) {
        let ids = self.scene.selected_ids();
        if let Some(bounds) = self.scene.bounds_of(&ids) {
            self.camera.fit_to_bounds(bounds, viewport);
        }
    }

    // --- Helpers -----------------------------------------------------------

    fn unlocked_selected(&self) -> Vec<Element> {
        self.scene
            .selected_elements()
            .into_iter()
            .filter(|el| !el.locked)
            .collect()
    }

    /// Write repositioned elements back and commit if anything moved.
    fn apply_layout(&mut self, updated: Vec<Element>) {
        let mut changed = false;
        for update in updated {
            if let Some(el) = self.scene.get_mut(update.id) {
                if el.x != update.x || el.y != update.y {
                    el.x = update.x;
                    el.y = update.y;
                    changed = true;
                }
            }
        }
        if changed {
            self.history.commit(&self.scene);
        }
    }
}
