//! Blueboard Core Library
//!
//! Headless scene model and editing logic for the Blueboard layout editor.

pub mod align;
pub mod camera;
pub mod catalog;
pub mod editor;
pub mod element;
pub mod gesture;
pub mod history;
pub mod input;
pub mod scene;
pub mod selection;
pub mod snap;
pub mod storage;
pub mod style;

pub use align::{Alignment, align, distribute_horizontal, distribute_vertical};
pub use camera::Camera;
pub use catalog::{Category, DrawSpec, ElementKind, Figure, draw_spec};
pub use editor::Editor;
pub use element::{Element, ElementId, GroupId};
pub use gesture::{Corner, Gesture, MIN_ELEMENT_SIZE, resize_from_corner};
pub use history::{History, MAX_HISTORY, Snapshot};
pub use input::{EditorAction, Key, Modifiers, shortcut_action};
pub use scene::Scene;
pub use selection::Selection;
pub use snap::{GRID_SIZE, GridSettings, snap_to_grid};
pub use storage::{LAYOUT_FILE_NAME, LayoutError, load_layout, save_layout};
pub use style::SerializableColor;
