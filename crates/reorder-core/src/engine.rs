//! Reorder Engine
//!
//! Owns one list and its observers. Discrete commands and drag reports both
//! end up in the same transaction protocol.

use log::{debug, warn};

use crate::config::ListConfig;
use crate::drag::{self, DropReport};
use crate::item::ItemId;
use crate::list::List;
use crate::observer::{ObserverId, Observers, ReorderObserver};
use crate::resolver::{resolve, MoveKind, MoveRequest};
use crate::snapshot::Snapshot;
use crate::transaction::{Outcome, Proposal};

#[derive(Debug, Default)]
pub struct ReorderEngine {
    list: List,
    observers: Observers,
    config: ListConfig,
    drag_ready: bool,
}

impl ReorderEngine {
    pub fn new(list: List) -> Self {
        Self::with_config(list, ListConfig::default())
    }

    pub fn with_config(list: List, config: ListConfig) -> Self {
        Self {
            list,
            observers: Observers::new(),
            config,
            drag_ready: false,
        }
    }

    pub fn list(&self) -> &List {
        &self.list
    }

    /// Direct access for the rendering and drag collaborators
    pub fn list_mut(&mut self) -> &mut List {
        &mut self.list
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    // ========================
    // Order
    // ========================

    pub fn values(&self) -> Vec<Option<String>> {
        self.list.values()
    }

    /// Relocate items to follow `values`; emits no notifications
    pub fn set_order<I, S>(&mut self, values: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.list.set_order(values)
    }

    pub fn snapshot(&self) -> Snapshot {
        self.list.snapshot()
    }

    // ========================
    // Observers
    // ========================

    pub fn subscribe(&mut self, observer: Box<dyn ReorderObserver>) -> ObserverId {
        self.observers.subscribe(observer)
    }

    pub fn unsubscribe(&mut self, id: ObserverId) -> bool {
        self.observers.unsubscribe(id)
    }

    // ========================
    // Moves
    // ========================

    pub fn request_move(&mut self, request: MoveRequest) -> Outcome {
        let snapshot = self.list.snapshot();
        let Some(resolution) = resolve(&request, &self.list, &snapshot) else {
            debug!(
                "[REORDER] {} {} resolved to nothing",
                request.kind.as_str(),
                request.item
            );
            return Outcome::NoOp;
        };

        match Proposal::command(
            request.item,
            resolution.old_index,
            resolution.new_index,
            snapshot,
        ) {
            Some(proposal) => proposal.run(&mut self.list, &mut self.observers),
            None => Outcome::NoOp,
        }
    }

    pub fn move_to_top(&mut self, item: ItemId) -> Outcome {
        self.request_move(MoveRequest::new(MoveKind::Top, item))
    }

    pub fn move_up(&mut self, item: ItemId) -> Outcome {
        self.request_move(MoveRequest::new(MoveKind::Up, item))
    }

    pub fn move_down(&mut self, item: ItemId) -> Outcome {
        self.request_move(MoveRequest::new(MoveKind::Down, item))
    }

    /// Drive a drop the drag engine has already performed
    pub fn handle_drop(&mut self, report: DropReport) -> Outcome {
        if !self.config.drag_and_drop {
            warn!("[DND] drop reported while drag and drop is disabled");
            return Outcome::NoOp;
        }
        drag::drive(report, &mut self.list, &mut self.observers)
    }

    // ========================
    // Drag Readiness
    // ========================

    /// Record that the drag engine is attached
    pub fn mark_drag_ready(&mut self) {
        self.drag_ready = self.config.drag_and_drop;
    }

    pub fn is_drag_ready(&self) -> bool {
        self.drag_ready
    }
}
