//! DOM Event Bridge
//!
//! Re-emits engine notifications as bubbling `CustomEvent`s on the list
//! element, with the payload as `detail`. Calling `preventDefault()` on
//! `reorderable-before-update` vetoes the move. `reorderable-update` is sent
//! by `DomSurface` once the item elements are in their new order.

use leptos::html::Div;
use leptos::prelude::*;
use reorder_core::{
    Decision, ItemId, ReorderEvent, ReorderObserver, BEFORE_UPDATE_EVENT, UPDATE_EVENT,
};
use wasm_bindgen::JsValue;

use crate::driver::ItemSurface;

/// Attribute tying an item element to its handle
pub const ITEM_ID_ATTRIBUTE: &str = "data-item-id";

/// Returns false if a listener canceled the event
fn dispatch(
    target: &NodeRef<Div>,
    name: &str,
    event: &ReorderEvent,
    cancelable: bool,
) -> Result<bool, JsValue> {
    let Some(element) = target.get_untracked() else {
        return Ok(true);
    };
    let detail = serde_wasm_bindgen::to_value(event)?;
    let init = web_sys::CustomEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(cancelable);
    init.set_detail(&detail);
    let custom = web_sys::CustomEvent::new_with_event_init_dict(name, &init)?;
    element.dispatch_event(&custom)
}

pub struct DomEventBridge {
    target: NodeRef<Div>,
}

impl DomEventBridge {
    pub fn new(target: NodeRef<Div>) -> Self {
        Self { target }
    }
}

impl ReorderObserver for DomEventBridge {
    fn before_update(&mut self, event: &ReorderEvent) -> Decision {
        match dispatch(&self.target, BEFORE_UPDATE_EVENT, event, true) {
            Ok(false) => Decision::Veto,
            Ok(true) => Decision::Proceed,
            Err(err) => {
                log::warn!("[DOM] {} dispatch failed: {:?}", BEFORE_UPDATE_EVENT, err);
                Decision::Proceed
            }
        }
    }
}

/// Item elements of one list, kept in list order ahead of the live region
pub struct DomSurface {
    target: NodeRef<Div>,
}

impl DomSurface {
    pub fn new(target: NodeRef<Div>) -> Self {
        Self { target }
    }

    fn reorder(&self, order: &[ItemId]) -> Result<(), JsValue> {
        let Some(list) = self.target.get_untracked() else {
            return Ok(());
        };
        let anchor = list.query_selector(":scope > output")?;
        for id in order {
            let selector = format!(":scope > [{}=\"{}\"]", ITEM_ID_ATTRIBUTE, id.raw());
            if let Some(element) = list.query_selector(&selector)? {
                list.insert_before(&element, anchor.as_deref())?;
            }
        }
        Ok(())
    }
}

impl ItemSurface for DomSurface {
    fn arrange(&mut self, order: &[ItemId]) {
        if let Err(err) = self.reorder(order) {
            log::warn!("[DOM] rearranging items failed: {:?}", err);
        }
    }

    fn dispatch_update(&mut self, event: &ReorderEvent) {
        if let Err(err) = dispatch(&self.target, UPDATE_EVENT, event, false) {
            log::warn!("[DOM] {} dispatch failed: {:?}", UPDATE_EVENT, err);
        }
    }
}
