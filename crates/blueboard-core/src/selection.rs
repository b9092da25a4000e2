//! Selection state.

use crate::element::ElementId;
use serde::{Deserialize, Serialize};

/// Current selection.
///
/// A single primary element and a multi-selection are mutually exclusive
/// states, so the type makes them so.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Selection {
    #[default]
    None,
    Primary(ElementId),
    Multi(Vec<ElementId>),
}

impl Selection {
    /// All selected ids, in selection order.
    pub fn ids(&self) -> Vec<ElementId> {
        match self {
            Selection::None => Vec::new(),
            Selection::Primary(id) => vec![*id],
            Selection::Multi(ids) => ids.clone(),
        }
    }

    pub fn contains(&self, id: ElementId) -> bool {
        match self {
            Selection::None => false,
            Selection::Primary(sel) => *sel == id,
            Selection::Multi(ids) => ids.contains(&id),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Selection::None)
    }

    pub fn len(&self) -> usize {
        match self {
            Selection::None => 0,
            Selection::Primary(_) => 1,
            Selection::Multi(ids) => ids.len(),
        }
    }

    /// Toggle multi-selection membership (modifier-click semantics).
    ///
    /// Entering from a primary selection discards the primary and starts a
    /// fresh multi-selection with the clicked element; removing the last
    /// member collapses back to no selection.
    pub fn toggle(&mut self, id: ElementId) {
        *self = match std::mem::take(self) {
            Selection::None | Selection::Primary(_) => Selection::Multi(vec![id]),
            Selection::Multi(mut ids) => {
                if let Some(pos) = ids.iter().position(|&sel| sel == id) {
                    ids.remove(pos);
                } else {
                    ids.push(id);
                }
                if ids.is_empty() {
                    Selection::None
                } else {
                    Selection::Multi(ids)
                }
            }
        };
    }

    /// Drop an id from the selection (element deleted).
    pub fn remove(&mut self, id: ElementId) {
        *self = match std::mem::take(self) {
            Selection::Primary(sel) if sel == id => Selection::None,
            Selection::Multi(mut ids) => {
                ids.retain(|&sel| sel != id);
                if ids.is_empty() {
                    Selection::None
                } else {
                    Selection::Multi(ids)
                }
            }
            other => other,
        };
    }
}
