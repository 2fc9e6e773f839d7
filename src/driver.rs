//! List Driver
//!
//! Runs commands against a `ReorderEngine` and keeps a rendered surface in
//! step with it. The engine is only borrowed while a transaction runs; the
//! surface is rearranged and told about the commit after the borrow ends,
//! so `update` listeners see the new order. Commands submitted while a
//! transaction or a notification is in flight are queued and run next.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use reorder_core::{DropReport, ItemId, MoveRequest, Outcome, ReorderEngine, ReorderEvent};

/// Rendered side of a list
pub trait ItemSurface {
    /// Put the item elements in `order`
    fn arrange(&mut self, order: &[ItemId]);

    /// Announce a committed move; the surface already shows it
    fn dispatch_update(&mut self, event: &ReorderEvent);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Move(MoveRequest),
    /// `dragged` was released over the slot held by `over`
    Drop { dragged: ItemId, over: ItemId },
    SetOrder(Vec<String>),
}

pub struct ListDriver<S> {
    engine: RefCell<ReorderEngine>,
    surface: RefCell<S>,
    pending: RefCell<VecDeque<Command>>,
    draining: Cell<bool>,
}

impl<S: ItemSurface> ListDriver<S> {
    pub fn new(engine: ReorderEngine, surface: S) -> Self {
        Self {
            engine: RefCell::new(engine),
            surface: RefCell::new(surface),
            pending: RefCell::new(VecDeque::new()),
            draining: Cell::new(false),
        }
    }

    /// Setup access (subscriptions, drag readiness). Not for use from observers.
    pub fn with_engine<T>(&self, f: impl FnOnce(&mut ReorderEngine) -> T) -> T {
        f(&mut self.engine.borrow_mut())
    }

    pub fn values(&self) -> Vec<String> {
        self.engine
            .borrow()
            .values()
            .into_iter()
            .map(Option::unwrap_or_default)
            .collect()
    }

    /// Queue a command and run the queue unless a run is already under way.
    /// Returns the outcomes of the commands run by this call.
    pub fn submit(&self, command: Command) -> Vec<Outcome> {
        self.pending.borrow_mut().push_back(command);
        if self.draining.replace(true) {
            log::debug!("[LIST] command queued behind running transaction");
            return Vec::new();
        }

        let mut outcomes = Vec::new();
        loop {
            let next = self.pending.borrow_mut().pop_front();
            let Some(command) = next else { break };
            outcomes.push(self.run(command));
        }
        self.draining.set(false);
        outcomes
    }

    fn run(&self, command: Command) -> Outcome {
        let (outcome, rearranged, order) = {
            let mut engine = self.engine.borrow_mut();
            let before = order_of(&engine);
            let outcome = match command {
                Command::Move(request) => engine.request_move(request),
                Command::Drop { dragged, over } => drop_onto(&mut engine, dragged, over),
                Command::SetOrder(values) => {
                    engine.set_order(&values);
                    Outcome::NoOp
                }
            };
            let order = order_of(&engine);
            (outcome, order != before, order)
        };

        let mut surface = self.surface.borrow_mut();
        if rearranged {
            surface.arrange(&order);
        }
        if let (true, Some(event)) = (outcome.is_committed(), outcome.event()) {
            surface.dispatch_update(event);
        }
        outcome
    }
}

fn order_of(engine: &ReorderEngine) -> Vec<ItemId> {
    engine.list().items().iter().map(|item| item.id()).collect()
}

/// Perform the drop the way the drag engine would, then report it as done
fn drop_onto(engine: &mut ReorderEngine, dragged: ItemId, over: ItemId) -> Outcome {
    let list = engine.list_mut();
    let (Some(old_index), Some(new_index)) = (list.position(dragged), list.position(over)) else {
        return Outcome::NoOp;
    };
    if let Err(err) = list.move_item(dragged, new_index) {
        log::warn!("[DND] drop failed: {}", err);
        return Outcome::NoOp;
    }
    engine.handle_drop(DropReport::new(dragged, old_index, new_index))
}
