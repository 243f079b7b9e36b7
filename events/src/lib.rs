//! Shared event model and JSON codec for the realtime parking channel.
//!
//! This crate owns the wire representation used by the dashboard client. The
//! backend pushes named events with JSON payloads over a websocket; each text
//! frame is one JSON envelope. Payload shapes stay flexible
//! (`serde_json::Value`) so dispatch code can remain schema-driven, with the
//! typed records living in [`model`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod model;

/// Error returned by [`decode_event`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// The text frame could not be decoded as an event envelope.
    #[error("failed to decode event frame: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Scope value requesting the full lot collection.
pub const HOME_SCOPE: &str = "home";

/// Outbound request for the current data of a scope ("home" or a lot id).
pub const GET_DATA: &str = "getData";

/// Inbound broadcast carrying every lot summary, keyed by lot id.
pub const INFO: &str = "info";

/// Outbound command closing a lot; the payload is the lot id.
pub const CLOSE: &str = "close";

/// Outbound command reopening a lot; the payload is the lot id.
pub const OPEN: &str = "open";

/// A single named message on the realtime channel.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Event name, fixed (`"info"`) or lot-scoped (`"<lotId>_parking"`).
    pub name: String,
    /// Arbitrary JSON payload.
    pub data: Value,
}

impl Event {
    /// Build an event from a name and payload.
    #[must_use]
    pub fn new(name: impl Into<String>, data: Value) -> Self {
        Self { name: name.into(), data }
    }
}

/// Which lot-scoped stream a scoped event name belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScopedEvent {
    /// `<lotId>_info`: metadata for one lot.
    Info,
    /// `<lotId>_parking`: the lot's space grid.
    Spaces,
}

/// Name of the metadata event for one lot.
#[must_use]
pub fn lot_info_event(lot_id: &str) -> String {
    format!("{lot_id}_info")
}

/// Name of the space-grid event for one lot.
#[must_use]
pub fn lot_spaces_event(lot_id: &str) -> String {
    format!("{lot_id}_parking")
}

/// Split a lot-scoped event name into its lot id and stream kind.
///
/// Returns `None` for fixed names (`"info"`, `"getData"`) and for names
/// without a recognized suffix.
#[must_use]
pub fn scoped_lot_id(name: &str) -> Option<(&str, ScopedEvent)> {
    if let Some(lot_id) = name.strip_suffix("_info") {
        if lot_id.is_empty() {
            return None;
        }
        return Some((lot_id, ScopedEvent::Info));
    }
    if let Some(lot_id) = name.strip_suffix("_parking") {
        if lot_id.is_empty() {
            return None;
        }
        return Some((lot_id, ScopedEvent::Spaces));
    }
    None
}

/// Encode an event into a JSON text frame.
#[must_use]
pub fn encode_event(event: &Event) -> String {
    // Safety: serializing a string name plus a serde_json::Value cannot fail.
    serde_json::to_string(event).unwrap_or_default()
}

/// Decode a JSON text frame into an event.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] for malformed frames.
pub fn decode_event(text: &str) -> Result<Event, CodecError> {
    Ok(serde_json::from_str(text)?)
}

#[cfg(test)]
#[path = "lib_test.rs"]
mod tests;
