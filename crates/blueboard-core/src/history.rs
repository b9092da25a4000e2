//! Bounded undo/redo history.

use crate::element::Element;
use crate::scene::Scene;
use crate::selection::Selection;

/// Maximum number of history snapshots to keep.
pub const MAX_HISTORY: usize = 50;

/// A saved board state: elements plus selection, restored verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub elements: Vec<Element>,
    pub selection: Selection,
}

impl Snapshot {
    pub fn of(scene: &Scene) -> Self {
        Self {
            elements: scene.elements.clone(),
            selection: scene.selection.clone(),
        }
    }
}

/// Linear history with a cursor.
///
/// Entries before the cursor are undoable states, entries after it are the
/// redo chain; a commit truncates the redo chain. The history is seeded with
/// the initial state so undo at the beginning is a no-op rather than a hole.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Snapshot>,
    cursor: usize,
}

impl History {
    /// Start a history at the given initial state.
    pub fn new(initial: &Scene) -> Self {
        Self {
            entries: vec![Snapshot::of(initial)],
            cursor: 0,
        }
    }

    /// Record the state after a completed action.
    pub fn commit(&mut self, scene: &Scene) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(Snapshot::of(scene));
        self.cursor += 1;

        if self.entries.len() > MAX_HISTORY {
            self.entries.remove(0);
            self.cursor -= 1;
        }
    }

    /// Step back, returning the snapshot to restore.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor)
    }

    /// Step forward, returning the snapshot to restore.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor)
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }
}

impl Scene {
    /// Apply a history snapshot verbatim. The clipboard is not part of
    /// history and survives undo.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.elements = snapshot.elements.clone();
        self.selection = snapshot.selection.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ElementKind;
    use crate::snap::GridSettings;
    use kurbo::Point;

    fn grid() -> GridSettings {
        GridSettings {
            snap: false,
            ..Default::default()
        }
    }

    #[test]
    fn test_undo_redo_round_trip() {
        let mut scene = Scene::new();
        let mut history = History::new(&scene);

        let a = scene.add(ElementKind::Bed, Point::new(0.0, 0.0), &grid());
        history.commit(&scene);
        scene.add(ElementKind::Chair, Point::new(200.0, 0.0), &grid());
        history.commit(&scene);
        let two = Snapshot::of(&scene);

        let snap = history.undo().unwrap().clone();
        scene.restore(&snap);
        assert_eq!(scene.len(), 1);
        assert_eq!(scene.elements[0].id, a);

        let snap = history.undo().unwrap().clone();
        scene.restore(&snap);
        assert!(scene.is_empty());
        assert!(!history.can_undo());

        // Redo reproduces the undone states exactly.
        let snap = history.redo().unwrap().clone();
        scene.restore(&snap);
        let snap = history.redo().unwrap().clone();
        scene.restore(&snap);
        assert_eq!(Snapshot::of(&scene), two);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_commit_truncates_redo_chain() {
        let mut scene = Scene::new();
        let mut history = History::new(&scene);

        scene.add(ElementKind::Chair, Point::new(0.0, 0.0), &grid());
        history.commit(&scene);
        scene.add(ElementKind::Chair, Point::new(50.0, 0.0), &grid());
        history.commit(&scene);

        let snap = history.undo().unwrap().clone();
        scene.restore(&snap);
        assert!(history.can_redo());

        scene.add(ElementKind::Desk, Point::new(100.0, 0.0), &grid());
        history.commit(&scene);
        assert!(!history.can_redo());
        assert!(history.redo().is_none());
    }

    #[test]
    fn test_history_is_bounded() {
        let mut scene = Scene::new();
        let mut history = History::new(&scene);

        for i in 0..(MAX_HISTORY + 10) {
            scene.add(ElementKind::Chair, Point::new(i as f64, 0.0), &grid());
            history.commit(&scene);
        }
        assert_eq!(history.entries.len(), MAX_HISTORY);

        // Walking all the way back stops at the oldest retained state, not
        // the empty scene.
        let mut undos = 0;
        while history.undo().is_some() {
            undos += 1;
        }
        assert_eq!(undos, MAX_HISTORY - 1);
    }

    #[test]
    fn test_restore_keeps_clipboard() {
        let mut scene = Scene::new();
        let mut history = History::new(&scene);

        let id = scene.add(ElementKind::Bed, Point::new(0.0, 0.0), &grid());
        history.commit(&scene);
        scene.select(id);
        scene.copy_selection();

        let snap = history.undo().unwrap().clone();
        scene.restore(&snap);
        assert!(scene.is_empty());

        // Paste still works from the pre-undo clipboard.
        assert_eq!(scene.paste().len(), 1);
    }

    #[test]
    fn test_selection_restored_with_scene() {
        let mut scene = Scene::new();
        let mut history = History::new(&scene);

        let id = scene.add(ElementKind::Chair, Point::new(0.0, 0.0), &grid());
        scene.select(id);
        history.commit(&scene);

        scene.clear_selection();
        scene.delete(&[id]);
        history.commit(&scene);

        let snap = history.undo().unwrap().clone();
        scene.restore(&snap);
        assert!(scene.selection.contains(id));
    }
}
