//! UI Components
//!
//! Rendering layer for the reorder engine.

mod reorderable_item;
mod reorderable_list;

pub use reorderable_item::ReorderableItem;
pub use reorderable_list::ReorderableList;
