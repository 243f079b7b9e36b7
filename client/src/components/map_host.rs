//! Map host for the home page.
//!
//! ARCHITECTURE
//! ============
//! The map itself is a page-level JS widget (`window.SmartParkingMap`); this
//! component owns the container element and pushes marker data into the
//! widget whenever the lot collection changes. Marker derivation is a plain
//! function so it stays testable on the host.
//!
//! When the widget global is absent (tests, SSR, missing script tag) the
//! update is a silent no-op and the container renders empty.

#[cfg(test)]
#[path = "map_host_test.rs"]
mod map_host_test;

use leptos::prelude::*;
use serde::Serialize;

use crate::state::lots::LotsState;

/// One map pin. The label is the first character of the lot name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct MapMarker {
    pub lat: f64,
    pub lng: f64,
    pub label: String,
}

pub(crate) fn markers_for(lots: &LotsState) -> Vec<MapMarker> {
    lots.items
        .iter()
        .filter(|lot| lot.lat.is_finite() && lot.lng.is_finite())
        .map(|lot| MapMarker {
            lat: lot.lat,
            lng: lot.lng,
            label: lot.name.chars().next().map(String::from).unwrap_or_default(),
        })
        .collect()
}

#[component]
pub fn MapHost(lots: RwSignal<LotsState>) -> impl IntoView {
    let container = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        let markers = markers_for(&lots.get());
        if let Some(element) = container.get() {
            update_widget(&element, &markers);
        }
    });

    #[cfg(not(feature = "hydrate"))]
    let _ = lots;

    view! { <div class="map-host" node_ref=container></div> }
}

#[cfg(feature = "hydrate")]
fn update_widget(container: &web_sys::HtmlDivElement, markers: &[MapMarker]) {
    use wasm_bindgen::{JsCast as _, JsValue};

    use crate::config::{map_provider_key, DEFAULT_MAP_CENTER, DEFAULT_MAP_ZOOM};

    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(widget) = js_sys::Reflect::get(window.as_ref(), &JsValue::from_str("SmartParkingMap"))
    else {
        return;
    };
    let Ok(update) = js_sys::Reflect::get(&widget, &JsValue::from_str("update")) else {
        return;
    };
    let Some(update) = update.dyn_ref::<js_sys::Function>() else {
        return;
    };

    let config = serde_json::json!({
        "key": map_provider_key(),
        "center": { "lat": DEFAULT_MAP_CENTER.0, "lng": DEFAULT_MAP_CENTER.1 },
        "zoom": DEFAULT_MAP_ZOOM,
        "markers": markers,
    });
    let Ok(text) = serde_json::to_string(&config) else {
        return;
    };
    let Ok(config) = js_sys::JSON::parse(&text) else {
        return;
    };

    if update
        .call2(&widget, container.as_ref(), &config)
        .is_err()
    {
        leptos::logging::warn!("map widget update failed");
    }
}
