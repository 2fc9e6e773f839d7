//! Reorderable List Component
//!
//! Owns a `ListDriver` over a `ReorderEngine`. Item commands arrive via
//! `ListContext`; drops arrive from leptos-dragdrop. Items are rendered once
//! and afterwards moved in place by `DomSurface`, so the DOM already shows
//! a committed move when `reorderable-update` fires.

use std::rc::Rc;

use leptos::html::Div;
use leptos::prelude::*;
use reorder_core::{
    Announcer, Decision, ItemId, List, ListConfig, LiveRegion, MoveKind, MoveRequest,
    ReorderEngine, ReorderEvent,
};

use leptos_dragdrop::*;

use crate::components::ReorderableItem;
use crate::context::ListContext;
use crate::dom_events::{DomEventBridge, DomSurface};
use crate::driver::{Command, ListDriver};

/// Live region backed by a signal, rendered into the hidden `<output>`
struct SignalRegion(WriteSignal<String>);

impl LiveRegion for SignalRegion {
    fn replace(&mut self, text: &str) {
        self.0.set(text.to_string());
    }
}

#[component]
pub fn ReorderableList(
    /// Item values, in initial order
    values: Vec<String>,
    #[prop(optional)]
    config: Option<ListConfig>,
    /// Current order of values. Writing it reorders the list without
    /// notifications; committed moves are written back.
    #[prop(optional)]
    order: Option<RwSignal<Vec<String>>>,
    /// Asked before every move; return `Decision::Veto` to cancel it
    #[prop(optional)]
    on_before_update: Option<Callback<ReorderEvent, Decision>>,
    /// Told after every committed move
    #[prop(optional)]
    on_update: Option<Callback<ReorderEvent>>,
) -> impl IntoView {
    let list_ref = NodeRef::<Div>::new();
    let (message, set_message) = signal(String::new());
    let drag_ready = RwSignal::new(false);

    let engine = ReorderEngine::with_config(List::from_values(values), config.unwrap_or_default());
    let rows: Vec<(ItemId, String)> = engine
        .list()
        .items()
        .iter()
        .map(|item| (item.id(), item.value().unwrap_or_default().to_string()))
        .collect();
    let driver = Rc::new(ListDriver::new(engine, DomSurface::new(list_ref)));
    let config = driver.with_engine(|e| e.config().clone());

    // Announcer first, so the live region is current when observers run
    let observer_ids = driver.with_engine(|e| {
        let mut ids = vec![
            e.subscribe(Box::new(Announcer::new(SignalRegion(set_message)))),
            e.subscribe(Box::new(DomEventBridge::new(list_ref))),
        ];
        if let Some(cb) = on_before_update {
            ids.push(e.subscribe(Box::new(reorder_core::on_before_update(move |ev| cb.run(*ev)))));
        }
        if let Some(cb) = on_update {
            ids.push(e.subscribe(Box::new(reorder_core::on_update(move |ev| cb.run(*ev)))));
        }
        ids
    });

    let driver = StoredValue::new_local(driver);
    on_cleanup(move || {
        if let Some(driver) = driver.try_get_value() {
            driver.with_engine(|e| {
                for id in observer_ids {
                    e.unsubscribe(id);
                }
            });
        }
    });

    let submit = move |command: Command| {
        let Some(driver) = driver.try_get_value() else {
            return;
        };
        for outcome in driver.submit(command) {
            log::debug!("[LIST] {:?}", outcome);
        }
        if let Some(order) = order {
            let current = driver.values();
            if order.with_untracked(|wanted| *wanted != current) {
                order.set(current);
            }
        }
    };

    if let Some(order) = order {
        Effect::new(move |_| {
            let wanted = order.get();
            let unchanged = driver
                .try_with_value(|d| d.values() == wanted)
                .unwrap_or(true);
            if !unchanged {
                submit(Command::SetOrder(wanted));
            }
        });
    }

    let command = Callback::new(move |(item, kind): (ItemId, MoveKind)| {
        submit(Command::Move(MoveRequest::new(kind, item)));
    });

    let dnd = create_dnd_signals(config.drag_threshold_px);

    if config.drag_and_drop {
        bind_global_mouseup(dnd, move |dragged_raw, target| {
            let DropTarget::Item(over_raw) = target;
            submit(Command::Drop {
                dragged: ItemId::from_raw(dragged_raw),
                over: ItemId::from_raw(over_raw),
            });
        });
        let ready = driver.with_value(|d| {
            d.with_engine(|e| {
                e.mark_drag_ready();
                e.is_drag_ready()
            })
        });
        drag_ready.set(ready);
    }

    provide_context(ListContext::new(command, dnd, config));

    view! {
        <div
            node_ref=list_ref
            class="reorderable-list"
            role="list"
            drag-and-drop-ready=move || drag_ready.get().then_some("")
        >
            {rows
                .into_iter()
                .map(|(id, value)| view! { <ReorderableItem id=id value=value /> })
                .collect_view()}

            <output class="aria-message" aria-live="polite">{move || message.get()}</output>
        </div>
    }
}
