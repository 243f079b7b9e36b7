//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{home::HomePage, parking::ParkingPage};
use crate::state::{lot::LotState, lots::LotsState, session::SessionState};

/// Handle for emitting events over the active socket session.
///
/// Constructed by the app shell once the socket client is spawned and handed
/// to views through context, so no component touches a global socket object.
/// `send` returns `false` when there is no live connection.
#[derive(Clone, Default)]
pub struct EventSender {
    #[cfg(feature = "hydrate")]
    tx: Option<futures::channel::mpsc::UnboundedSender<String>>,
}

impl EventSender {
    /// Wrap the sender half of an active socket session.
    #[cfg(feature = "hydrate")]
    #[must_use]
    pub fn connected(tx: futures::channel::mpsc::UnboundedSender<String>) -> Self {
        Self { tx: Some(tx) }
    }

    /// Send an event to the backend. Returns `false` if no connection exists.
    pub fn send(&self, event: &events::Event) -> bool {
        #[cfg(feature = "hydrate")]
        {
            self.tx
                .as_ref()
                .is_some_and(|tx| tx.unbounded_send(events::encode_event(event)).is_ok())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = event;
            false
        }
    }
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared state contexts, spawns the socket client, and sets up
/// client-side routing for the two screens.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let lots = RwSignal::new(LotsState::default());
    let lot = RwSignal::new(LotState::default());

    provide_context(session);
    provide_context(lots);
    provide_context(lot);

    let sender = RwSignal::new(EventSender::default());
    provide_context(sender);

    #[cfg(feature = "hydrate")]
    {
        let tx = crate::net::socket_client::spawn_socket_client(session, lots, lot);
        sender.set(EventSender::connected(tx));
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/smartparking.css"/>
        <Title text="SmartParking"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=(StaticSegment("parking"), ParamSegment("id")) view=ParkingPage/>
            </Routes>
        </Router>
    }
}
