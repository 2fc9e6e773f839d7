//! List Context
//!
//! Shared state provided by a `ReorderableList` to its items.
//! Items report commands here; the list owns resolution.

use leptos::prelude::*;
use leptos_dragdrop::DndSignals;
use reorder_core::{ItemId, ListConfig, MoveKind};

#[derive(Clone, Copy)]
pub struct ListContext {
    /// Move command attributed to one item
    command: Callback<(ItemId, MoveKind)>,
    /// Drag state shared by all items of the list
    pub dnd: DndSignals,
    /// Drag visual classes
    pub config: StoredValue<ListConfig>,
}

impl ListContext {
    pub fn new(command: Callback<(ItemId, MoveKind)>, dnd: DndSignals, config: ListConfig) -> Self {
        Self {
            command,
            dnd,
            config: StoredValue::new(config),
        }
    }

    /// Report a command from an item to its list
    pub fn command(&self, item: ItemId, kind: MoveKind) {
        self.command.run((item, kind));
    }
}
