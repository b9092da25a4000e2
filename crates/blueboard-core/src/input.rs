//! Keyboard shortcut mapping.

/// Modifier keys relevant to shortcuts. `ctrl` covers Cmd on macOS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers { ctrl: false, shift: false };
    pub const CTRL: Modifiers = Modifiers { ctrl: true, shift: false };
    pub const SHIFT: Modifiers = Modifiers { ctrl: false, shift: true };
    pub const CTRL_SHIFT: Modifiers = Modifiers { ctrl: true, shift: true };
}

/// A pressed key, already resolved from the platform event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Delete,
    Backspace,
    Char(char),
}

/// An editor command produced by a shortcut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorAction {
    Undo,
    Redo,
    Copy,
    Paste,
    DeleteSelection,
    /// Arrow-key nudge by a unit vector; `large` steps one grid cell.
    Nudge { dx: f64, dy: f64, large: bool },
}

/// Map a key press to an editor action, if it is a shortcut.
pub fn shortcut_action(key: Key, mods: Modifiers) -> Option<EditorAction> {
    match key {
        Key::Char(c) if mods.ctrl => match c.to_ascii_lowercase() {
            'z' if mods.shift => Some(EditorAction::Redo),
            'z' => Some(EditorAction::Undo),
            'c' => Some(EditorAction::Copy),
            'v' => Some(EditorAction::Paste),
            _ => None,
        },
        Key::Delete | Key::Backspace => Some(EditorAction::DeleteSelection),
        Key::ArrowUp => Some(nudge(0.0, -1.0, mods)),
        Key::ArrowDown => Some(nudge(0.0, 1.0, mods)),
        Key::ArrowLeft => Some(nudge(-1.0, 0.0, mods)),
        Key::ArrowRight => Some(nudge(1.0, 0.0, mods)),
        Key::Char(_) => None,
    }
}

fn nudge(dx: f64, dy: f64, mods: Modifiers) -> EditorAction {
    EditorAction::Nudge {
        dx,
        dy,
        large: mods.shift,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_redo_shortcuts() {
        assert_eq!(shortcut_action(Key::Char('z'), Modifiers::CTRL), Some(EditorAction::Undo));
        assert_eq!(shortcut_action(Key::Char('Z'), Modifiers::CTRL), Some(EditorAction::Undo));
        assert_eq!(
            shortcut_action(Key::Char('z'), Modifiers::CTRL_SHIFT),
            Some(EditorAction::Redo)
        );
        // Plain z types, it does not undo.
        assert_eq!(shortcut_action(Key::Char('z'), Modifiers::NONE), None);
    }

    #[test]
    fn test_clipboard_shortcuts() {
        assert_eq!(shortcut_action(Key::Char('c'), Modifiers::CTRL), Some(EditorAction::Copy));
        assert_eq!(shortcut_action(Key::Char('v'), Modifiers::CTRL), Some(EditorAction::Paste));
        assert_eq!(shortcut_action(Key::Char('c'), Modifiers::NONE), None);
    }

    #[test]
    fn test_delete_keys() {
        assert_eq!(
            shortcut_action(Key::Delete, Modifiers::NONE),
            Some(EditorAction::DeleteSelection)
        );
        assert_eq!(
            shortcut_action(Key::Backspace, Modifiers::NONE),
            Some(EditorAction::DeleteSelection)
        );
    }

    #[test]
    fn test_arrow_nudges() {
        assert_eq!(
            shortcut_action(Key::ArrowUp, Modifiers::NONE),
            Some(EditorAction::Nudge { dx: 0.0, dy: -1.0, large: false })
        );
        assert_eq!(
            shortcut_action(Key::ArrowRight, Modifiers::SHIFT),
            Some(EditorAction::Nudge { dx: 1.0, dy: 0.0, large: true })
        );
    }
}
