//! Lot summary card for the home list.
//!
//! An offline lot renders as a muted, non-navigable card; everything else is
//! a link into the detail route.

#[cfg(test)]
#[path = "lot_card_test.rs"]
mod lot_card_test;

use leptos::prelude::*;

use events::model::ParkingLot;

use crate::components::indicator_class;
use crate::util::assets::lot_image_url;

/// How the card participates in navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CardMode {
    Link,
    Disabled,
}

pub(crate) fn card_mode(lot: &ParkingLot) -> CardMode {
    if lot.offline {
        CardMode::Disabled
    } else {
        CardMode::Link
    }
}

#[component]
pub fn LotCard(lot: ParkingLot) -> impl IntoView {
    let mode = card_mode(&lot);
    let image = lot_image_url(&lot.id);
    let href = format!("/parking/{}", lot.id);
    let dot = lot
        .indicator()
        .map(|indicator| view! { <span class=indicator_class(indicator)></span> });

    let body = view! {
        <img class="lot-card__image" src=image/>
        <div class="lot-card__body">
            <h5 class="lot-card__name">{lot.name} {dot}</h5>
            <p class="lot-card__address">{lot.address}</p>
        </div>
    };

    match mode {
        CardMode::Link => view! {
            <a class="lot-card" href=href>
                {body}
            </a>
        }
        .into_any(),
        CardMode::Disabled => view! { <div class="lot-card lot-card--offline">{body}</div> }
            .into_any(),
    }
}
