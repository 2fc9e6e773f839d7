//! List
//!
//! Ordered owner of items. Order is physical position in `items`; there is
//! no index stored on the item itself.

use std::collections::HashMap;

use crate::error::{ReorderError, ReorderResult};
use crate::item::{Item, ItemId};
use crate::snapshot::Snapshot;

#[derive(Debug, Clone, Default)]
pub struct List {
    items: Vec<Item>,
    /// Bumped once per mutation that changed the physical order or membership
    revision: u64,
}

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from identity values, in order
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::new();
        for value in values {
            list.insert(value);
        }
        list
    }

    /// Append a new item. An empty value yields an item addressable by
    /// position only.
    pub fn insert(&mut self, value: impl Into<String>) -> ItemId {
        let item = Item::new(value);
        let id = item.id();
        self.items.push(item);
        self.revision += 1;
        id
    }

    /// Remove an item from the list, handing it back to the caller
    pub fn detach(&mut self, id: ItemId) -> ReorderResult<Item> {
        let index = self.position(id).ok_or(ReorderError::NotOwned(id))?;
        self.revision += 1;
        Ok(self.items.remove(index))
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.iter().any(|item| item.id() == id)
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Physical position of a handle
    pub fn position(&self, id: ItemId) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    // ========================
    // Order Snapshot
    // ========================

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.items)
    }

    /// Identity values in current order
    pub fn values(&self) -> Vec<Option<String>> {
        self.items
            .iter()
            .map(|item| item.value().map(str::to_owned))
            .collect()
    }

    /// Relocate items to follow `values`.
    ///
    /// Each value selects the first item carrying it; selected items are
    /// appended in the order given. Items not named keep their relative
    /// order ahead of them. Unknown and empty values are skipped.
    /// Returns whether the order changed.
    pub fn set_order<I, S>(&mut self, values: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let picks: Vec<ItemId> = values
            .into_iter()
            .filter_map(|value| {
                let value = value.as_ref();
                if value.is_empty() {
                    return None;
                }
                self.items
                    .iter()
                    .find(|item| item.value() == Some(value))
                    .map(Item::id)
            })
            .collect();
        self.relocate(&picks)
    }

    /// Rearrange to match a snapshot of this list
    pub(crate) fn apply_snapshot(&mut self, snapshot: &Snapshot) -> bool {
        let picks: Vec<ItemId> = snapshot.ids().collect();
        self.relocate(&picks)
    }

    /// Physically move one item to `to_index`, as a drag engine does on drop
    pub fn move_item(&mut self, id: ItemId, to_index: usize) -> ReorderResult<()> {
        let from = self.position(id).ok_or(ReorderError::NotOwned(id))?;
        if to_index >= self.items.len() {
            return Err(ReorderError::IndexOutOfBounds {
                index: to_index,
                len: self.items.len(),
            });
        }
        if from != to_index {
            let item = self.items.remove(from);
            self.items.insert(to_index, item);
            self.revision += 1;
        }
        Ok(())
    }

    fn relocate(&mut self, picks: &[ItemId]) -> bool {
        let mut order: Vec<ItemId> = self.items.iter().map(Item::id).collect();
        for id in picks {
            if let Some(pos) = order.iter().position(|candidate| candidate == id) {
                let id = order.remove(pos);
                order.push(id);
            }
        }

        let unchanged = order
            .iter()
            .zip(&self.items)
            .all(|(id, item)| *id == item.id());
        if unchanged {
            return false;
        }

        let rank: HashMap<ItemId, usize> = order
            .iter()
            .enumerate()
            .map(|(rank, id)| (*id, rank))
            .collect();
        self.items.sort_by_key(|item| rank[&item.id()]);
        self.revision += 1;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strs(list: &List) -> Vec<String> {
        list.values().into_iter().map(|v| v.unwrap_or_default()).collect()
    }

    #[test]
    fn test_set_order_full() {
        let mut list = List::from_values(["a", "b", "c"]);
        assert!(list.set_order(["c", "a", "b"]));
        assert_eq!(strs(&list), ["c", "a", "b"]);
    }

    #[test]
    fn test_set_order_partial_appends_named_items() {
        let mut list = List::from_values(["a", "b", "c", "d"]);
        list.set_order(["b", "a"]);
        assert_eq!(strs(&list), ["c", "d", "b", "a"]);
    }

    #[test]
    fn test_set_order_skips_unknown_and_empty() {
        let mut list = List::from_values(["a", "b"]);
        let before = list.revision();
        assert!(!list.set_order(["zzz", "", "a", "b"]));
        assert_eq!(list.revision(), before);
        assert_eq!(strs(&list), ["a", "b"]);
    }

    #[test]
    fn test_set_order_idempotent() {
        let mut list = List::from_values(["a", "b", "c"]);
        let before = list.revision();
        let current: Vec<String> = strs(&list);
        assert!(!list.set_order(&current));
        assert_eq!(list.revision(), before);
    }

    #[test]
    fn test_detach_and_contains() {
        let mut list = List::new();
        let a = list.insert("a");
        let b = list.insert("b");
        let detached = list.detach(a).unwrap();
        assert_eq!(detached.value(), Some("a"));
        assert!(!list.contains(a));
        assert!(list.contains(b));
        assert_eq!(list.detach(a), Err(ReorderError::NotOwned(a)));
    }

    #[test]
    fn test_move_item() {
        let mut list = List::from_values(["a", "b", "c"]);
        let a = list.items()[0].id();
        list.move_item(a, 2).unwrap();
        assert_eq!(strs(&list), ["b", "c", "a"]);
        assert_eq!(
            list.move_item(a, 3),
            Err(ReorderError::IndexOutOfBounds { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_move_item_in_place_is_not_a_mutation() {
        let mut list = List::from_values(["a", "b"]);
        let b = list.items()[1].id();
        let before = list.revision();
        list.move_item(b, 1).unwrap();
        assert_eq!(list.revision(), before);
    }
}
