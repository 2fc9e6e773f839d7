//! Reorder Core
//!
//! Transaction engine behind a user-reorderable list.
//! Layered the same way as the list it drives:
//! - item / list / snapshot: explicit ordered container, order is physical position
//! - resolver: discrete TOP / UP / DOWN commands to a candidate index
//! - transaction: cancelable proposal, apply, commit
//! - drag: post-drop reports from an external drag engine
//! - announcer: accessible text for committed moves
//!
//! Everything runs synchronously on the caller's turn. There is no queue.

mod announcer;
mod config;
mod drag;
mod engine;
mod error;
mod item;
mod list;
mod observer;
mod resolver;
mod snapshot;
mod transaction;

#[cfg(test)]
mod tests;

pub use announcer::{announcement, Announcer, LiveRegion, LiveText};
pub use config::ListConfig;
pub use drag::DropReport;
pub use engine::ReorderEngine;
pub use error::{ReorderError, ReorderResult};
pub use item::{Item, ItemId};
pub use list::List;
pub use observer::{
    on_before_update, on_update, BeforeUpdateFn, Decision, ObserverId, Observers,
    ReorderEvent, ReorderObserver, UpdateFn, BEFORE_UPDATE_EVENT, UPDATE_EVENT,
};
pub use resolver::{resolve, MoveKind, MoveRequest, Resolution};
pub use snapshot::Snapshot;
pub use transaction::{Origin, Outcome};
