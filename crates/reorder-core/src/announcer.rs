//! Announcer
//!
//! Produces one sentence per committed move for a live region. Each message
//! replaces the previous one.

use std::cell::RefCell;
use std::rc::Rc;

use crate::observer::{ReorderEvent, ReorderObserver};

/// Accessible text for a committed move (0-based indices)
pub fn announcement(old_index: usize, new_index: usize) -> String {
    format!("Item at index {} moved to index {}.", old_index, new_index)
}

/// A text surface read by assistive technology
pub trait LiveRegion {
    /// Overwrite the current text
    fn replace(&mut self, text: &str);
}

/// Shared in-memory live region
#[derive(Debug, Clone, Default)]
pub struct LiveText(Rc<RefCell<String>>);

impl LiveText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> String {
        self.0.borrow().clone()
    }
}

impl LiveRegion for LiveText {
    fn replace(&mut self, text: &str) {
        let mut current = self.0.borrow_mut();
        current.clear();
        current.push_str(text);
    }
}

pub struct Announcer<R> {
    region: R,
}

impl<R: LiveRegion> Announcer<R> {
    pub fn new(region: R) -> Self {
        Self { region }
    }

    pub fn announce(&mut self, event: &ReorderEvent) {
        self.region
            .replace(&announcement(event.old_index, event.new_index));
    }
}

impl<R: LiveRegion> ReorderObserver for Announcer<R> {
    fn update(&mut self, event: &ReorderEvent) {
        self.announce(event);
    }
}
