//! Move Resolver
//!
//! Turns a discrete command into a candidate target index.

use serde::{Deserialize, Serialize};

use crate::item::ItemId;
use crate::list::List;
use crate::snapshot::Snapshot;

/// Discrete move command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveKind {
    Top,
    Up,
    Down,
}

impl MoveKind {
    pub const ALL: [MoveKind; 3] = [MoveKind::Top, MoveKind::Up, MoveKind::Down];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoveKind::Top => "top",
            MoveKind::Up => "up",
            MoveKind::Down => "down",
        }
    }

    /// Data attribute marking the control that issues this command
    pub fn data_attribute(&self) -> &'static str {
        match self {
            MoveKind::Top => "data-reorderable-top",
            MoveKind::Up => "data-reorderable-up",
            MoveKind::Down => "data-reorderable-down",
        }
    }

    /// Candidate index for an item currently at `old_index`.
    /// `None` when the command would leave `[0, len)`.
    pub fn target(&self, old_index: usize, len: usize) -> Option<usize> {
        let new_index = match self {
            MoveKind::Top => 0,
            MoveKind::Up => old_index.checked_sub(1)?,
            MoveKind::Down => old_index + 1,
        };
        (new_index < len).then_some(new_index)
    }
}

/// A command attributed to one item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    pub kind: MoveKind,
    pub item: ItemId,
}

impl MoveRequest {
    pub fn new(kind: MoveKind, item: ItemId) -> Self {
        Self { kind, item }
    }
}

/// Resolved indices, both positions within the snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub old_index: usize,
    pub new_index: usize,
}

/// Resolve a command against the list and a snapshot of it.
///
/// `None` when the item is not a direct member of `list` or the move would
/// cross a boundary. The old index is looked up by value, first match.
pub fn resolve(request: &MoveRequest, list: &List, snapshot: &Snapshot) -> Option<Resolution> {
    let item = list.get(request.item)?;
    let old_index = snapshot.index_of(item.value())?;
    let new_index = request.kind.target(old_index, snapshot.len())?;
    Some(Resolution {
        old_index,
        new_index,
    })
}
