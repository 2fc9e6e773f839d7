//! Leptos DragDrop Utilities
//! 
//! Simple drag-and-drop for flat Leptos lists using mouse events.
//! Uses movement threshold to distinguish click from drag.
//! Reports `(dragged, target)` once per completed gesture; the caller
//! decides what the drop means.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Default movement threshold in pixels to start dragging
pub const DRAG_THRESHOLD_PX: i32 = 5;

/// How long `drag_just_ended` stays set, so the trailing click can be ignored
const JUST_ENDED_MS: u32 = 100;

/// Drop target types
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DropTarget {
    /// Drop onto the slot currently held by an item (may be the dragged item itself)
    Item(u32),
}

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<u32>>,
    pub dragging_id_write: WriteSignal<Option<u32>>,
    pub drop_target_read: ReadSignal<Option<DropTarget>>,
    pub drop_target_write: WriteSignal<Option<DropTarget>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending item id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<u32>>,
    pub pending_id_write: WriteSignal<Option<u32>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
    /// Pixels of travel before a press becomes a drag
    pub threshold_px: i32,
}

pub fn create_dnd_signals(threshold_px: i32) -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<u32>);
    let (drop_target_read, drop_target_write) = signal(None::<DropTarget>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<u32>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        drop_target_read,
        drop_target_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
        threshold_px: threshold_px.max(0),
    }
}

/// True once the pointer has travelled past the threshold in either axis
pub fn exceeds_threshold(dx: i32, dy: i32, threshold_px: i32) -> bool {
    dx.abs() > threshold_px || dy.abs() > threshold_px
}

/// Whether `item_id` is the item being dragged
pub fn is_dragging(dnd: &DndSignals, item_id: u32) -> bool {
    dnd.dragging_id_read.get() == Some(item_id)
}

/// Whether `item_id` is pressed (pending or dragging)
pub fn is_chosen(dnd: &DndSignals, item_id: u32) -> bool {
    dnd.pending_id_read.get() == Some(item_id) || is_dragging(dnd, item_id)
}

/// Whether `item_id` currently holds the drop slot
pub fn is_drop_target(dnd: &DndSignals, item_id: u32) -> bool {
    dnd.dragging_id_read.get().is_some()
        && dnd.drop_target_read.get() == Some(DropTarget::Item(item_id))
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.drop_target_write.set(None);
    dnd.pending_id_write.set(None);
    dnd.drag_just_ended_write.set(true);

    let clear = dnd.drag_just_ended_write;
    Timeout::new(JUST_ENDED_MS, move || clear.set(false)).forget();
}

/// Create mousedown handler for draggable items
/// Records pending drag with start position
pub fn make_on_mousedown(dnd: DndSignals, item_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            // Record pending drag with position
            dnd.pending_id_write.set(Some(item_id));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mousemove handler for document - starts drag if moved enough
pub fn bind_global_mousemove(dnd: DndSignals) {
    use wasm_bindgen::closure::Closure;
    
    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_id_read.get_untracked();
        
        // If we have a pending drag and haven't started dragging yet
        if pending.is_some() && dnd.dragging_id_read.get_untracked().is_none() {
            let dx = ev.client_x() - dnd.start_x_read.get_untracked();
            let dy = ev.client_y() - dnd.start_y_read.get_untracked();
            
            if exceeds_threshold(dx, dy, dnd.threshold_px) {
                dnd.dragging_id_write.set(pending);
                // The pressed item starts out over its own slot
                dnd.drop_target_write.set(pending.map(DropTarget::Item));
            }
        }
    });
    
    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
}

/// Create mouseenter handler for items (their slot becomes the target)
pub fn make_on_item_mouseenter(dnd: DndSignals, item_id: u32) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.drop_target_write.set(Some(DropTarget::Item(item_id)));
        }
    }
}

/// Bind global mouseup handler for drop detection
///
/// The last hovered slot stays the target until another item is entered,
/// so releasing over a gap still drops.
pub fn bind_global_mouseup<F>(dnd: DndSignals, on_drop: F)
where
    F: Fn(u32, DropTarget) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;
    
    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging_id = dnd.dragging_id_read.get_untracked();
        let drop_target = dnd.drop_target_read.get_untracked();
        
        // Clear pending state first
        dnd.pending_id_write.set(None);
        
        // If we were actually dragging (not just clicking)
        if let (Some(dragged), Some(target)) = (dragging_id, drop_target) {
            end_drag(&dnd);
            on_drop(dragged, target);
        } else if dragging_id.is_some() {
            end_drag(&dnd);
        } else {
            // Not dragging - click event will fire naturally on the element
            dnd.drop_target_write.set(None);
        }
    });
    
    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mouseup.forget();
    
    // Also bind global mousemove
    bind_global_mousemove(dnd);
}
