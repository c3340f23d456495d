//! Leptos DnD Utilities
//!
//! Native HTML5 drag-and-drop helpers for draggable list rows.
//! The dragged item id rides in the DataTransfer payload, so it survives
//! drops outside the owning component's subtree.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::DragEvent;

/// DataTransfer format used for the dragged item id.
const PAYLOAD_FORMAT: &str = "text/plain";

/// Attribute marking an element (and its subtree) as a folder drop target.
pub const FOLDER_TARGET_ATTR: &str = "data-folder-target";

/// Selector matching [`FOLDER_TARGET_ATTR`] in `Element::closest` lookups.
const FOLDER_TARGET_SELECTOR: &str = "[data-folder-target]";

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DragSignals {
    /// Whether a drag is currently hovering the list surface (visual only)
    pub drag_over_read: ReadSignal<bool>,
    pub drag_over_write: WriteSignal<bool>,
}

pub fn create_drag_signals() -> DragSignals {
    let (drag_over_read, drag_over_write) = signal(false);
    DragSignals {
        drag_over_read,
        drag_over_write,
    }
}

/// Read the dragged item id back out of the event payload.
pub fn drag_payload(ev: &DragEvent) -> Option<String> {
    let data = ev.data_transfer()?;
    data.get_data(PAYLOAD_FORMAT)
        .ok()
        .filter(|id| !id.is_empty())
}

/// Whether some ancestor of the event target carries the folder marker.
pub fn hit_folder_target(ev: &DragEvent) -> bool {
    let Some(target) = ev.target() else {
        return false;
    };
    let Some(element) = target.dyn_ref::<web_sys::Element>() else {
        return false;
    };
    matches!(element.closest(FOLDER_TARGET_SELECTOR), Ok(Some(_)))
}

/// Create dragstart handler for a row: stores the item id in the payload
pub fn make_on_drag_start(item_id: String) -> impl Fn(DragEvent) + Clone + 'static {
    move |ev: DragEvent| {
        if let Some(data) = ev.data_transfer() {
            let _ = data.set_data(PAYLOAD_FORMAT, &item_id);
        }
    }
}

/// Create dragenter handler: raises the drop-hover flag
pub fn make_on_drag_enter(dnd: DragSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        dnd.drag_over_write.set(true);
    }
}

/// Create dragleave handler: clears the drop-hover flag
pub fn make_on_drag_leave(dnd: DragSignals) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        dnd.drag_over_write.set(false);
    }
}

/// Create dragover handler. The event must be cancelled or the browser
/// refuses the subsequent drop.
pub fn make_on_drag_over() -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| ev.prevent_default()
}

/// Create drop handler. A drop with a folder-target ancestor is left to the
/// folder itself; anything else means "remove from folder" and forwards the
/// dragged id to `on_unfile`.
///
/// Drop listeners may sit on nested surfaces (section body and list root);
/// propagation stops here so one gesture is handled exactly once.
pub fn make_on_drop<F>(dnd: DragSignals, on_unfile: F) -> impl Fn(DragEvent) + Clone + 'static
where
    F: Fn(String) + Clone + 'static,
{
    move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        if !hit_folder_target(&ev) {
            if let Some(item_id) = drag_payload(&ev) {
                on_unfile(item_id);
            }
        }
        dnd.drag_over_write.set(false);
    }
}
