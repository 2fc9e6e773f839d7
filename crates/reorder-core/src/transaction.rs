//! Reorder Transaction
//!
//! Propose → Apply → Commit, or Propose → Vetoed. A transaction is built
//! fresh per move and consumed as it advances, so a veto can only be
//! honored while it is still a [`Proposal`].

use log::{debug, warn};

use crate::item::ItemId;
use crate::list::List;
use crate::observer::{Decision, Observers, ReorderEvent};
use crate::snapshot::Snapshot;

/// What triggered the transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Discrete TOP / UP / DOWN command; the engine applies the move
    Command,
    /// Drag report; the tree was reordered before the engine ran
    Drag,
}

/// Terminal state of one attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Committed(ReorderEvent),
    Vetoed(ReorderEvent),
    /// Nothing to do: foreign item, boundary move, same index, bad report
    NoOp,
}

impl Outcome {
    pub fn is_committed(&self) -> bool {
        matches!(self, Outcome::Committed(_))
    }

    pub fn event(&self) -> Option<&ReorderEvent> {
        match self {
            Outcome::Committed(event) | Outcome::Vetoed(event) => Some(event),
            Outcome::NoOp => None,
        }
    }
}

enum Plan {
    /// Splice the snapshot and apply it to the list
    Splice(Snapshot),
    /// Tree already matches; only reconcile if it drifted
    AlreadyApplied,
}

pub(crate) struct Proposal {
    event: ReorderEvent,
    plan: Plan,
}

pub(crate) struct Approved {
    event: ReorderEvent,
    plan: Plan,
}

pub(crate) struct Applied {
    event: ReorderEvent,
}

impl Proposal {
    /// Proposal for a discrete command. `None` for a same-index or
    /// out-of-bounds move.
    pub(crate) fn command(
        item: ItemId,
        old_index: usize,
        new_index: usize,
        snapshot: Snapshot,
    ) -> Option<Self> {
        if old_index == new_index {
            return None;
        }
        let spliced = snapshot.moved(old_index, new_index)?;
        Some(Self {
            event: ReorderEvent {
                item,
                old_index,
                new_index,
            },
            plan: Plan::Splice(spliced),
        })
    }

    /// Proposal for a completed drop. Same-index drops still proceed.
    pub(crate) fn drag(item: ItemId, old_index: usize, new_index: usize, len: usize) -> Option<Self> {
        if old_index >= len || new_index >= len {
            return None;
        }
        Some(Self {
            event: ReorderEvent {
                item,
                old_index,
                new_index,
            },
            plan: Plan::AlreadyApplied,
        })
    }

    pub(crate) fn origin(&self) -> Origin {
        match self.plan {
            Plan::Splice(_) => Origin::Command,
            Plan::AlreadyApplied => Origin::Drag,
        }
    }

    pub(crate) fn propose(self, observers: &mut Observers) -> Result<Approved, ReorderEvent> {
        match observers.before_update(&self.event) {
            Decision::Veto => Err(self.event),
            Decision::Proceed => Ok(Approved {
                event: self.event,
                plan: self.plan,
            }),
        }
    }

    /// Drive the whole protocol to a terminal state
    pub(crate) fn run(self, list: &mut List, observers: &mut Observers) -> Outcome {
        let origin = self.origin();
        debug!(
            "[REORDER] propose {:?} {} {} -> {}",
            origin, self.event.item, self.event.old_index, self.event.new_index
        );

        match self.propose(observers) {
            Err(event) => {
                debug!("[REORDER] vetoed {}", event.item);
                if origin == Origin::Drag {
                    // Undo the drop the drag engine already performed
                    if let Err(err) = list.move_item(event.item, event.old_index) {
                        warn!("[REORDER] could not restore vetoed drop: {}", err);
                    }
                }
                Outcome::Vetoed(event)
            }
            Ok(approved) => {
                let event = approved.apply(list).commit(observers);
                debug!("[REORDER] committed {}", event.item);
                Outcome::Committed(event)
            }
        }
    }
}

impl Approved {
    pub(crate) fn apply(self, list: &mut List) -> Applied {
        match self.plan {
            Plan::Splice(order) => {
                list.apply_snapshot(&order);
            }
            Plan::AlreadyApplied => {
                if list.position(self.event.item) != Some(self.event.new_index) {
                    warn!(
                        "[REORDER] drop of {} not reflected in list, reconciling",
                        self.event.item
                    );
                    if let Err(err) = list.move_item(self.event.item, self.event.new_index) {
                        warn!("[REORDER] reconcile failed: {}", err);
                    }
                }
            }
        }
        Applied { event: self.event }
    }
}

impl Applied {
    pub(crate) fn commit(self, observers: &mut Observers) -> ReorderEvent {
        observers.update(&self.event);
        self.event
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::{on_before_update, on_update};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_command_same_index_is_noop() {
        let list = List::from_values(["a", "b"]);
        let a = list.items()[0].id();
        assert!(Proposal::command(a, 0, 0, list.snapshot()).is_none());
    }

    #[test]
    fn test_drag_same_index_proceeds() {
        let list = List::from_values(["a", "b"]);
        let a = list.items()[0].id();
        let proposal = Proposal::drag(a, 0, 0, list.len()).unwrap();
        assert_eq!(proposal.origin(), Origin::Drag);
    }

    #[test]
    fn test_veto_leaves_list_untouched() {
        let mut list = List::from_values(["a", "b", "c"]);
        let c = list.items()[2].id();
        let before = list.values();
        let revision = list.revision();

        let mut observers = Observers::new();
        observers.subscribe(Box::new(on_before_update(|_| Decision::Veto)));
        let updates = Rc::new(RefCell::new(0));
        let counter = updates.clone();
        observers.subscribe(Box::new(on_update(move |_| *counter.borrow_mut() += 1)));

        let outcome = Proposal::command(c, 2, 0, list.snapshot())
            .unwrap()
            .run(&mut list, &mut observers);

        assert!(matches!(outcome, Outcome::Vetoed(_)));
        assert_eq!(list.values(), before);
        assert_eq!(list.revision(), revision);
        assert_eq!(*updates.borrow(), 0);
    }

    #[test]
    fn test_commit_sees_applied_order() {
        let mut list = List::from_values(["a", "b", "c"]);
        let a = list.items()[0].id();
        let mut observers = Observers::new();
        let outcome = Proposal::command(a, 0, 2, list.snapshot())
            .unwrap()
            .run(&mut list, &mut observers);

        assert!(outcome.is_committed());
        assert_eq!(list.position(a), Some(2));
    }

    #[test]
    fn test_outcome_event() {
        let mut list = List::from_values(["a", "b"]);
        let b = list.items()[1].id();
        let mut observers = Observers::new();
        let committed = Proposal::command(b, 1, 0, list.snapshot())
            .unwrap()
            .run(&mut list, &mut observers);
        assert_eq!(
            committed.event(),
            Some(&ReorderEvent {
                item: b,
                old_index: 1,
                new_index: 0,
            })
        );

        observers.subscribe(Box::new(on_before_update(|_| Decision::Veto)));
        let vetoed = Proposal::drag(b, 0, 1, list.len())
            .unwrap()
            .run(&mut list, &mut observers);
        assert!(!vetoed.is_committed());
        assert_eq!(vetoed.event().map(|ev| ev.new_index), Some(1));
        assert_eq!(Outcome::NoOp.event(), None);
    }
}
