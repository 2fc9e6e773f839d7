//! Drag Adapter
//!
//! Bridges a drag engine's post-drop report into the transaction protocol.
//! The drop has already reordered the list when the report arrives.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{ReorderError, ReorderResult};
use crate::item::ItemId;
use crate::list::List;
use crate::observer::Observers;
use crate::transaction::{Outcome, Proposal};

/// One completed drag gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DropReport {
    pub item: ItemId,
    pub old_index: usize,
    pub new_index: usize,
}

impl DropReport {
    pub fn new(item: ItemId, old_index: usize, new_index: usize) -> Self {
        Self {
            item,
            old_index,
            new_index,
        }
    }

    /// The dragged item must belong to `list` and both indices must be in bounds
    pub fn validate(&self, list: &List) -> ReorderResult<()> {
        if !list.contains(self.item) {
            return Err(ReorderError::NotOwned(self.item));
        }
        let len = list.len();
        for index in [self.old_index, self.new_index] {
            if index >= len {
                return Err(ReorderError::IndexOutOfBounds { index, len });
            }
        }
        Ok(())
    }
}

pub(crate) fn drive(report: DropReport, list: &mut List, observers: &mut Observers) -> Outcome {
    if let Err(err) = report.validate(list) {
        warn!("[DND] ignoring drop report {:?}: {}", report, err);
        return Outcome::NoOp;
    }
    match Proposal::drag(report.item, report.old_index, report.new_index, list.len()) {
        Some(proposal) => proposal.run(list, observers),
        None => Outcome::NoOp,
    }
}
