//! Item Identity
//!
//! An item is one reorderable entry. Its handle ([`ItemId`]) stands in for
//! the element reference; its value is the caller-supplied identity string.

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

use serde::{Deserialize, Serialize};

static NEXT_ITEM_ID: AtomicU32 = AtomicU32::new(1);

/// Opaque handle to an item, unique for the lifetime of the process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u32);

impl ItemId {
    pub(crate) fn next() -> Self {
        Self(NEXT_ITEM_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Rebuild a handle from its raw form (e.g. a drag engine key).
    /// Ownership is still checked by the list it is used with.
    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One list entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    /// Identity value; `None` when empty, which makes the item addressable
    /// by position only
    value: Option<String>,
}

impl Item {
    pub(crate) fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            id: ItemId::next(),
            value: if value.is_empty() { None } else { Some(value) },
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}
