//! Reusable view components shared by the pages.
//!
//! ARCHITECTURE
//! ============
//! Components here are presentation-only. Derivations that pick a CSS class
//! or a card mode are factored into plain functions next to the component so
//! they stay testable on the host without a DOM.

pub mod lot_card;
pub mod map_host;
pub mod navbar;
pub mod space_card;

use events::model::Indicator;

/// CSS class for a status dot.
pub(crate) fn indicator_class(indicator: Indicator) -> &'static str {
    match indicator {
        Indicator::Green => "dot dot--green",
        Indicator::Red => "dot dot--red",
    }
}
