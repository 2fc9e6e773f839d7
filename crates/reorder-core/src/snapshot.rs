//! Order Snapshot
//!
//! A point-in-time read of a list's order. Never cached by the engine:
//! every command takes a fresh one.

use crate::item::{Item, ItemId};

/// Ordered `(handle, value)` pairs as they stood when captured
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    entries: Vec<(ItemId, Option<String>)>,
}

impl Snapshot {
    pub(crate) fn capture(items: &[Item]) -> Self {
        Self {
            entries: items
                .iter()
                .map(|item| (item.id(), item.value().map(str::to_owned)))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.entries.iter().map(|(id, _)| *id)
    }

    pub fn values(&self) -> Vec<Option<String>> {
        self.entries.iter().map(|(_, value)| value.clone()).collect()
    }

    /// Position of the first entry carrying `value`.
    /// Unvalued items match `None`.
    pub fn index_of(&self, value: Option<&str>) -> Option<usize> {
        self.entries
            .iter()
            .position(|(_, candidate)| candidate.as_deref() == value)
    }

    /// The order with the entry at `old_index` removed and re-inserted at
    /// `new_index`. `None` if either index is out of bounds.
    pub fn moved(&self, old_index: usize, new_index: usize) -> Option<Self> {
        if old_index >= self.len() || new_index >= self.len() {
            return None;
        }
        let mut entries = self.entries.clone();
        let entry = entries.remove(old_index);
        entries.insert(new_index, entry);
        Some(Self { entries })
    }
}
