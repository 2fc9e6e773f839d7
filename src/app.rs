//! Reorderable List Demo App
//!
//! One list, a toggle that vetoes moves touching the first slot, the bound
//! order with a button that reverses it, and the tail of the rolling log.

use leptos::prelude::*;
use reorder_core::{Decision, ListConfig, ReorderEvent};

use crate::components::ReorderableList;

const DEMO_CONFIG: &str = r#"{ "dragAndDrop": true, "dragThresholdPx": 5 }"#;

const DEMO_VALUES: [&str; 5] = ["Apples", "Bread", "Cheese", "Dates", "Eggs"];

/// Log lines shown under the list
const LOG_TAIL: usize = 8;

fn log_tail() -> Vec<String> {
    let records = rolling_logger::recent();
    let skip = records.len().saturating_sub(LOG_TAIL);
    records.into_iter().skip(skip).map(|r| r.line()).collect()
}

#[component]
pub fn App() -> impl IntoView {
    let config = ListConfig::from_json(DEMO_CONFIG).unwrap_or_else(|err| {
        log::warn!("[APP] falling back to default config: {}", err);
        ListConfig::default()
    });

    let values: Vec<String> = DEMO_VALUES.iter().map(|v| v.to_string()).collect();
    let order = RwSignal::new(values.clone());
    let (lock_first, set_lock_first) = signal(false);
    let (last_move, set_last_move) = signal(None::<ReorderEvent>);
    let (log_lines, set_log_lines) = signal(log_tail());

    let guard = Callback::new(move |ev: ReorderEvent| {
        if lock_first.get_untracked() && (ev.old_index == 0 || ev.new_index == 0) {
            log::info!("[APP] vetoed move {} -> {}", ev.old_index, ev.new_index);
            Decision::Veto
        } else {
            Decision::Proceed
        }
    });
    let record = Callback::new(move |ev: ReorderEvent| set_last_move.set(Some(ev)));

    // Refresh the log view whenever the order settles
    Effect::new(move |_| {
        order.track();
        last_move.track();
        set_log_lines.set(log_tail());
    });

    view! {
        <main class="app">
            <h1>"Reorderable List"</h1>

            <label class="lock-toggle">
                <input
                    type="checkbox"
                    prop:checked=lock_first
                    on:change=move |_| set_lock_first.update(|v| *v = !*v)
                />
                " Lock the first slot"
            </label>
            <button type="button" on:click=move |_| order.update(|o| o.reverse())>
                "Reverse"
            </button>

            <ReorderableList
                values=values
                config=config
                order=order
                on_before_update=guard
                on_update=record
            />

            <p class="last-move">
                {move || match last_move.get() {
                    Some(ev) => format!("Last move: {} -> {}", ev.old_index, ev.new_index),
                    None => "No moves yet".to_string(),
                }}
            </p>
            <p class="order">{move || order.get().join(", ")}</p>

            <pre class="log-tail">{move || log_lines.get().join("\n")}</pre>
        </main>
    }
}
