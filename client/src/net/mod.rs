//! Networking modules for the realtime parking channel.
//!
//! SYSTEM CONTEXT
//! ==============
//! `socket_client` manages the websocket lifecycle and dispatch; `apply`
//! holds the pure payload-to-state transitions it drives.

pub mod apply;
pub mod socket_client;
