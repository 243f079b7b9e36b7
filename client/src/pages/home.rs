//! Home page: the lot list view.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the landing route. It requests the full lot collection over the
//! socket once connectivity is ready and renders a map beside one card per
//! lot; every `info` broadcast replaces the whole list.

use leptos::prelude::*;

use crate::app::EventSender;
use crate::components::lot_card::LotCard;
use crate::components::map_host::MapHost;
use crate::components::navbar::Navbar;
use crate::state::lots::LotsState;
use crate::state::session::{ConnectionStatus, SessionState};
use crate::util::emit::send_home_request;

/// List view: a map of lot markers plus a card per lot.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let lots = expect_context::<RwSignal<LotsState>>();
    let sender = expect_context::<RwSignal<EventSender>>();

    // Request the lot collection once the socket is up.
    let requested = RwSignal::new(false);
    Effect::new(move || {
        if requested.get() {
            return;
        }
        if session.get().connection_status != ConnectionStatus::Connected {
            return;
        }
        lots.update(|s| s.loading = true);
        send_home_request(sender);
        requested.set(true);
    });

    view! {
        <div class="home-page">
            <Navbar/>
            <div class="home-page__content">
                <div class="home-page__map">
                    <MapHost lots=lots/>
                </div>
                <div class="home-page__cards">
                    <Show
                        when=move || !lots.get().loading
                        fallback=move || view! { <p>"Loading parking lots..."</p> }
                    >
                        {move || {
                            lots.get()
                                .items
                                .into_iter()
                                .map(|lot| view! { <LotCard lot=lot/> })
                                .collect::<Vec<_>>()
                        }}
                    </Show>
                </div>
            </div>
        </div>
    }
}
