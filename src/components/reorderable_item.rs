//! Reorderable Item Component
//!
//! One list entry with top / up / down controls. Clicks on the controls
//! are reported to the owning list; the item never moves itself.

use leptos::prelude::*;
use reorder_core::{ItemId, MoveKind};
use wasm_bindgen::JsCast;

use leptos_dragdrop::*;

use crate::context::ListContext;

/// Command carried by a control, from its `data-reorderable-*` attribute
fn command_of(button: &web_sys::Element) -> Option<MoveKind> {
    MoveKind::ALL
        .into_iter()
        .find(|kind| button.has_attribute(kind.data_attribute()))
}

#[component]
pub fn ReorderableItem(id: ItemId, value: String) -> impl IntoView {
    let ctx = use_context::<ListContext>().expect("ListContext should be provided");
    let dnd = ctx.dnd;
    let raw = id.raw();

    let handle_click = move |ev: web_sys::MouseEvent| {
        // Release at the end of a drag also clicks
        if dnd.drag_just_ended_read.get_untracked() {
            return;
        }
        let button = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .and_then(|element| element.closest("button").ok().flatten());
        let Some(kind) = button.as_ref().and_then(command_of) else {
            return;
        };
        ev.prevent_default();
        ctx.command(id, kind);
    };

    let item_class = move || {
        let mut c = String::from("reorderable-item");
        ctx.config.with_value(|config| {
            if is_chosen(&dnd, raw) {
                c.push(' ');
                c.push_str(&config.chosen_class);
            }
            if is_dragging(&dnd, raw) {
                c.push(' ');
                c.push_str(&config.drag_class);
            }
            if is_drop_target(&dnd, raw) {
                c.push(' ');
                c.push_str(&config.ghost_class);
            }
        });
        c
    };

    let value_attr = value.clone();

    view! {
        <div
            class=item_class
            role="listitem"
            data-item-id=raw.to_string()
            {..leptos::tachys::html::attribute::value(value_attr)}
            on:mousedown=make_on_mousedown(dnd, raw)
            on:mouseenter=make_on_item_mouseenter(dnd, raw)
            on:click=handle_click
        >
            <span class="reorderable-label">{value}</span>
            <button type="button" data-reorderable-top="" title="Move to top">"⤒"</button>
            <button type="button" data-reorderable-up="" title="Move up">"↑"</button>
            <button type="button" data-reorderable-down="" title="Move down">"↓"</button>
        </div>
    }
}
