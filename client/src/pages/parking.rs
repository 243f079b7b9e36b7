//! Parking detail page: one lot's header, open/close control, space grid.
//!
//! ARCHITECTURE
//! ============
//! Route-level coordinator between URL lot identity and the lot-scoped state:
//! the route effect sets `LotState.lot_id` (the subscription filter) and
//! requests the lot's data; `on_cleanup` clears it so scoped broadcasts stop
//! applying after navigation.
//!
//! The open/close control is fire-and-forget: the emitted command carries the
//! lot id and the button state follows the next `<lotId>_info` broadcast, so
//! a stale broadcast can briefly revert the toggle.

#[cfg(test)]
#[path = "parking_test.rs"]
mod parking_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::app::EventSender;
use crate::components::navbar::Navbar;
use crate::components::space_card::SpaceCard;
use crate::state::lot::LotState;
use crate::util::assets::lot_image_url;
use crate::util::emit::{send_lot_request, send_toggle_closed};

/// Detail view: header with name/address, an open/close control, and a grid
/// of per-space cards while the lot is open.
#[component]
pub fn ParkingPage() -> impl IntoView {
    let lot = expect_context::<RwSignal<LotState>>();
    let sender = expect_context::<RwSignal<EventSender>>();
    let params = use_params_map();

    let last_route_lot_id = RwSignal::new(None::<String>);

    // Extract the lot id from the route.
    let lot_id = move || params.read().get("id");

    // Reset lot-scoped state and re-request when the route param changes.
    Effect::new(move || {
        let next_id = lot_id();
        if last_route_lot_id.get_untracked() == next_id {
            return;
        }
        lot.update(|l| l.reset_for_route_change(next_id.clone()));
        if let Some(id) = &next_id {
            send_lot_request(sender, id);
        }
        last_route_lot_id.set(next_id);
    });

    // Release the scoped subscription when the view is torn down.
    on_cleanup(move || {
        lot.update(|l| l.reset_for_route_change(None));
    });

    let info = move || lot.get().info;
    let closed = move || info().is_some_and(|i| i.closed);

    let on_toggle = move |_| {
        let Some(info) = lot.get_untracked().info else {
            return;
        };
        send_toggle_closed(sender, &info.id, info.closed);
    };

    view! {
        <div class="parking-page">
            <Navbar/>
            <img
                class="parking-page__hero"
                src=move || info().map(|i| lot_image_url(&i.id)).unwrap_or_default()
            />
            <div class="parking-page__header">
                <div>
                    <h1 class="parking-page__name">
                        {move || info().map(|i| i.name).unwrap_or_default()}
                    </h1>
                    <h6 class="parking-page__address">
                        {move || info().map(|i| i.address).unwrap_or_default()}
                    </h6>
                </div>
                <Show when=move || info().is_some()>
                    <button
                        class=move || if closed() { "btn btn--danger" } else { "btn btn--primary" }
                        on:click=on_toggle
                    >
                        {move || if closed() { "Reopen parking" } else { "Close parking" }}
                    </button>
                </Show>
            </div>
            <Show when=move || !closed()>
                <div class="parking-page__grid">
                    {move || {
                        lot.get()
                            .spaces
                            .into_iter()
                            .enumerate()
                            .map(|(index, space)| view! { <SpaceCard index=index space=space/> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </div>
    }
}
