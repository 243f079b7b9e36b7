//! Pure payload appliers used by the socket dispatcher.
//!
//! Kept free of browser dependencies so they are testable on the host.

#[cfg(test)]
#[path = "apply_test.rs"]
mod apply_test;

use events::model::{lot_collection_from_payload, lot_from_payload, spaces_from_payload};
use events::{Event, INFO, ScopedEvent, scoped_lot_id};

use crate::state::lot::LotState;
use crate::state::lots::LotsState;

/// Apply the `info` broadcast to the list-view state.
///
/// Returns `true` when the event was consumed. The lot list is replaced
/// wholesale; there is no incremental patching.
pub fn apply_lot_collection(event: &Event, lots: &mut LotsState) -> bool {
    if event.name != INFO {
        return false;
    }
    lots.items = lot_collection_from_payload(&event.data);
    lots.loading = false;
    true
}

/// Apply a lot-scoped broadcast to the detail-view state.
///
/// Subscriptions are global-and-filtered: broadcasts for any lot other than
/// the currently routed one are consumed but dropped. The route effect owns
/// `lot_id`, so navigating between lots replaces the filter instead of
/// re-registering handlers.
pub fn apply_scoped_event(event: &Event, lot: &mut LotState) -> bool {
    let Some((lot_id, kind)) = scoped_lot_id(&event.name) else {
        return false;
    };
    if lot.lot_id.as_deref() != Some(lot_id) {
        return true;
    }

    match kind {
        ScopedEvent::Info => {
            if let Some(info) = lot_from_payload(&event.data) {
                lot.info = Some(info);
            }
        }
        ScopedEvent::Spaces => {
            lot.spaces = spaces_from_payload(&event.data);
        }
    }
    true
}
