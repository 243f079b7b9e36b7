//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by screen scope (`session`, `lots`, `lot`) so each view
//! depends on a small focused model. Every store is replaced wholesale by
//! inbound broadcasts; the last message wins.

pub mod lot;
pub mod lots;
pub mod session;
