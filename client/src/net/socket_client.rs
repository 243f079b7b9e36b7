//! WebSocket client for the realtime parking channel.
//!
//! Opens one connection per page load to the configured backend address,
//! forwards outbound events from the shared sender channel, and dispatches
//! inbound events into view state. There is deliberately no reconnect
//! policy: a dropped channel leaves the views on their last data with the
//! session marked disconnected.
//!
//! All websocket logic is gated behind `#[cfg(feature = "hydrate")]` since it
//! requires a browser environment.
//!
//! ERROR HANDLING
//! ==============
//! Transport and decode failures are logged and otherwise silent; the UI
//! degrades to stale or empty views instead of surfacing errors.

#[cfg(feature = "hydrate")]
use events::Event;
#[cfg(feature = "hydrate")]
use leptos::prelude::{RwSignal, Update};

#[cfg(feature = "hydrate")]
use crate::state::lot::LotState;
#[cfg(feature = "hydrate")]
use crate::state::lots::LotsState;
#[cfg(feature = "hydrate")]
use crate::state::session::{ConnectionStatus, SessionState};

/// Spawn the socket client lifecycle as a local async task.
///
/// Returns the sender half wrapped by [`crate::app::EventSender`].
#[cfg(feature = "hydrate")]
pub fn spawn_socket_client(
    session: RwSignal<SessionState>,
    lots: RwSignal<LotsState>,
    lot: RwSignal<LotState>,
) -> futures::channel::mpsc::UnboundedSender<String> {
    use futures::channel::mpsc;

    let (tx, rx) = mpsc::unbounded::<String>();
    leptos::task::spawn_local(socket_client_run(session, lots, lot, rx));
    tx
}

/// Single connection lifecycle: connect, run until either side closes,
/// mark the session disconnected.
#[cfg(feature = "hydrate")]
async fn socket_client_run(
    session: RwSignal<SessionState>,
    lots: RwSignal<LotsState>,
    lot: RwSignal<LotState>,
    rx: futures::channel::mpsc::UnboundedReceiver<String>,
) {
    session.update(|s| s.connection_status = ConnectionStatus::Connecting);

    let url = crate::config::ws_url_for(&crate::config::backend_url());
    match connect_and_run(&url, session, lots, lot, rx).await {
        Ok(()) => leptos::logging::log!("socket disconnected cleanly"),
        Err(e) => leptos::logging::warn!("socket error: {e}"),
    }

    session.update(|s| s.connection_status = ConnectionStatus::Disconnected);
}

/// Connect to the websocket and process messages until disconnect.
#[cfg(feature = "hydrate")]
async fn connect_and_run(
    url: &str,
    session: RwSignal<SessionState>,
    lots: RwSignal<LotsState>,
    lot: RwSignal<LotState>,
    mut rx: futures::channel::mpsc::UnboundedReceiver<String>,
) -> Result<(), String> {
    use futures::StreamExt;
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;

    let ws = WebSocket::open(url).map_err(|e| e.to_string())?;
    let (mut ws_write, mut ws_read) = ws.split();

    session.update(|s| s.connection_status = ConnectionStatus::Connected);

    // Forward outgoing events from the shared channel to the socket.
    let send_task = async {
        use futures::SinkExt;
        while let Some(msg) = rx.next().await {
            if ws_write.send(Message::Text(msg)).await.is_err() {
                break;
            }
        }
    };

    // Receive loop: decode and dispatch incoming events.
    let recv_task = async {
        while let Some(msg) = ws_read.next().await {
            match msg {
                Ok(Message::Text(text)) => match events::decode_event(&text) {
                    Ok(event) => dispatch_event(&event, lots, lot),
                    Err(e) => leptos::logging::warn!("undecodable event frame: {e}"),
                },
                Ok(Message::Bytes(_)) => {}
                Err(e) => {
                    leptos::logging::warn!("socket recv error: {e}");
                    break;
                }
            }
        }
    };

    // When either side finishes, the connection is done.
    futures::future::select(Box::pin(send_task), Box::pin(recv_task)).await;

    Ok(())
}

/// Dispatch an inbound event to the state store that owns it.
#[cfg(feature = "hydrate")]
fn dispatch_event(event: &Event, lots: RwSignal<LotsState>, lot: RwSignal<LotState>) {
    let mut consumed = false;
    lots.update(|state| consumed = crate::net::apply::apply_lot_collection(event, state));
    if consumed {
        return;
    }
    lot.update(|state| consumed = crate::net::apply::apply_scoped_event(event, state));
    if !consumed {
        leptos::logging::warn!("unhandled event: {}", event.name);
    }
}
