//! Per-space card in the detail grid.

#[cfg(test)]
#[path = "space_card_test.rs"]
mod space_card_test;

use leptos::prelude::*;

use events::model::{ParkingSpace, SpaceAvailability};

use crate::components::indicator_class;

pub(crate) fn space_card_class(availability: SpaceAvailability) -> &'static str {
    if availability == SpaceAvailability::Offline {
        "space-card space-card--offline"
    } else {
        "space-card"
    }
}

#[component]
pub fn SpaceCard(index: usize, space: ParkingSpace) -> impl IntoView {
    let availability = space.availability();
    let dot = availability
        .indicator()
        .map(|indicator| view! { <span class=indicator_class(indicator)></span> });

    view! {
        <div class=space_card_class(availability)>
            <h5 class="space-card__title">{format!("Space {}", index + 1)}</h5>
            <p class="space-card__status">{availability.label()} {dot}</p>
        </div>
    }
}
