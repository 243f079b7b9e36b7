//! Startup configuration for the dashboard.
//!
//! The backend address and map-provider key are read once from the document
//! when the app hydrates; they are never reloaded (changing either requires a
//! page reload).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend address used when the page carries no override.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

/// Default map viewport, centered on the pilot deployment area.
pub const DEFAULT_MAP_CENTER: (f64, f64) = (45.642_942, 9.326_865);

/// Default map zoom level.
pub const DEFAULT_MAP_ZOOM: u8 = 11;

/// Backend base address, from `<meta name="smartparking-backend">` when the
/// page provides one.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn backend_url() -> String {
    meta_content("smartparking-backend").unwrap_or_else(|| DEFAULT_BACKEND_URL.to_owned())
}

/// Map-provider API key, from `<meta name="smartparking-map-key">`.
/// Empty when the page provides none; the map widget decides how to degrade.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn map_provider_key() -> String {
    meta_content("smartparking-map-key").unwrap_or_default()
}

#[cfg(feature = "hydrate")]
fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document
        .query_selector(&format!("meta[name='{name}']"))
        .ok()??;
    element
        .get_attribute("content")
        .filter(|value| !value.trim().is_empty())
}

/// Derive the websocket endpoint from a backend base address.
#[must_use]
pub fn ws_url_for(backend_url: &str) -> String {
    let base = if let Some(rest) = backend_url.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if let Some(rest) = backend_url.strip_prefix("http://") {
        format!("ws://{rest}")
    } else {
        format!("ws://{backend_url}")
    };
    format!("{}/socket", base.trim_end_matches('/'))
}
