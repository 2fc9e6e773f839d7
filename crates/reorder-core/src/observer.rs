//! Observers
//!
//! Notification surface of a reorder transaction: a cancelable
//! `before-update` and a non-cancelable `update`, both carrying the same
//! payload. Vetoing is a return value evaluated synchronously.

use serde::Serialize;

use crate::item::ItemId;

/// Name of the cancelable proposal notification
pub const BEFORE_UPDATE_EVENT: &str = "reorderable-before-update";
/// Name of the commit notification
pub const UPDATE_EVENT: &str = "reorderable-update";

/// Payload shared by both notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderEvent {
    pub item: ItemId,
    pub old_index: usize,
    pub new_index: usize,
}

/// Observer's answer to a proposal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Decision {
    #[default]
    Proceed,
    Veto,
}

pub trait ReorderObserver {
    /// Called before any mutation. Returning [`Decision::Veto`] aborts the move.
    fn before_update(&mut self, _event: &ReorderEvent) -> Decision {
        Decision::Proceed
    }

    /// Called once the new order is in place
    fn update(&mut self, _event: &ReorderEvent) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u32);

/// Registered observers, notified in subscription order
#[derive(Default)]
pub struct Observers {
    entries: Vec<(ObserverId, Box<dyn ReorderObserver>)>,
    next_id: u32,
}

impl Observers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: Box<dyn ReorderObserver>) -> ObserverId {
        let id = ObserverId(self.next_id);
        self.next_id += 1;
        self.entries.push((id, observer));
        id
    }

    /// Returns false if `id` was not subscribed
    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(candidate, _)| *candidate != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every observer sees the proposal, even after an earlier veto.
    pub(crate) fn before_update(&mut self, event: &ReorderEvent) -> Decision {
        let mut decision = Decision::Proceed;
        for (_, observer) in &mut self.entries {
            if observer.before_update(event) == Decision::Veto {
                decision = Decision::Veto;
            }
        }
        decision
    }

    pub(crate) fn update(&mut self, event: &ReorderEvent) {
        for (_, observer) in &mut self.entries {
            observer.update(event);
        }
    }
}

impl std::fmt::Debug for Observers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("len", &self.entries.len())
            .finish()
    }
}

// ========================
// Closure Adapters
// ========================

/// Observer that only answers proposals
pub struct BeforeUpdateFn<F>(F);

impl<F> ReorderObserver for BeforeUpdateFn<F>
where
    F: FnMut(&ReorderEvent) -> Decision,
{
    fn before_update(&mut self, event: &ReorderEvent) -> Decision {
        (self.0)(event)
    }
}

/// Observer that only listens to commits
pub struct UpdateFn<F>(F);

impl<F> ReorderObserver for UpdateFn<F>
where
    F: FnMut(&ReorderEvent),
{
    fn update(&mut self, event: &ReorderEvent) {
        (self.0)(event)
    }
}

pub fn on_before_update<F>(f: F) -> BeforeUpdateFn<F>
where
    F: FnMut(&ReorderEvent) -> Decision,
{
    BeforeUpdateFn(f)
}

pub fn on_update<F>(f: F) -> UpdateFn<F>
where
    F: FnMut(&ReorderEvent),
{
    UpdateFn(f)
}
