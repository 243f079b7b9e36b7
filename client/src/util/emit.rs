//! Outbound event builders and send helpers.
//!
//! The channel carries three outbound shapes: a `getData` request scoped to
//! `"home"` or a lot id, and the `close`/`open` commands carrying a lot id.
//! Narrow builder functions keep the payloads testable without a socket.

#[cfg(test)]
#[path = "emit_test.rs"]
mod emit_test;

use events::{CLOSE, Event, GET_DATA, HOME_SCOPE, OPEN};
use leptos::prelude::{GetUntracked, RwSignal};

use crate::app::EventSender;

/// Build a `getData` request for a scope ("home" or a lot id).
#[must_use]
pub fn get_data_event(scope: &str) -> Event {
    Event::new(GET_DATA, serde_json::Value::String(scope.to_owned()))
}

/// Build the command toggling a lot's closed state.
///
/// Closing an open lot emits `close`; reopening a closed one emits `open`.
#[must_use]
pub fn toggle_closed_event(lot_id: &str, currently_closed: bool) -> Event {
    let name = if currently_closed { OPEN } else { CLOSE };
    Event::new(name, serde_json::Value::String(lot_id.to_owned()))
}

/// Request the full lot collection for the list view.
pub fn send_home_request(sender: RwSignal<EventSender>) {
    let _ = sender.get_untracked().send(&get_data_event(HOME_SCOPE));
}

/// Request one lot's metadata and space grid for the detail view.
pub fn send_lot_request(sender: RwSignal<EventSender>, lot_id: &str) {
    let _ = sender.get_untracked().send(&get_data_event(lot_id));
}

/// Emit the open/close command for a lot. The view does not wait for an
/// acknowledgment; the next `<lotId>_info` broadcast reflects the new state.
pub fn send_toggle_closed(sender: RwSignal<EventSender>, lot_id: &str, currently_closed: bool) {
    let _ = sender.get_untracked().send(&toggle_closed_event(lot_id, currently_closed));
}
